use crate::error::CalcError;
use crate::{Calculator, add};

#[test]
fn test_add_empty_string() {
    assert_eq!(add(Some("")), Ok(0));
}

#[test]
fn test_add_absent_input() {
    assert_eq!(add(None), Ok(0));
}

#[test]
fn test_add_single_number() {
    assert_eq!(add(Some("7")), Ok(7));
}

#[test]
fn test_add_two_numbers() {
    assert_eq!(add(Some("1,2")), Ok(3));
}

#[test]
fn test_add_unknown_amount() {
    assert_eq!(add(Some("1,2,3,4,5")), Ok(15));
}

#[test]
fn test_add_newline_delimiter() {
    assert_eq!(add(Some("1\n2,3")), Ok(6));
}

#[test]
fn test_add_adjacent_delimiters() {
    assert_eq!(add(Some("1,\n2")), Ok(3));
}

#[test]
fn test_add_custom_delimiter_keeps_defaults() {
    assert_eq!(add(Some("//;\n1;2,3\n4")), Ok(10));
}

#[test]
fn test_add_header_only() {
    assert_eq!(add(Some("//;\n")), Ok(0));
}

#[test]
fn test_calculator_is_reusable() {
    let calculator = Calculator::default();
    assert_eq!(calculator.add(Some("1,2")), Ok(3));
    assert!(calculator.add(Some("-1")).is_err());
    assert_eq!(calculator.add(Some("3,4")), Ok(7));
}

#[test]
fn test_add_negative_error() {
    let err = add(Some("1,-2,3,-4")).unwrap_err();
    assert_eq!(
        err,
        CalcError::NegativeNumbers {
            numbers: vec![-2, -4]
        }
    );
}
