use strcalc::{Calculator, add};

#[test]
fn test_default_delimiters() {
    assert_eq!(add(Some("1,2")), Ok(3));
    assert_eq!(add(Some("1\n2,3")), Ok(6));
    assert_eq!(add(Some("1,2,3,4,5")), Ok(15));
}

#[test]
fn test_custom_single_delimiter() {
    assert_eq!(add(Some("//;\n1;2;3")), Ok(6));
}

#[test]
fn test_custom_bare_multi_char_delimiter() {
    assert_eq!(add(Some("//sep\n1sep2sep3")), Ok(6));
}

#[test]
fn test_arbitrary_length_delimiter() {
    assert_eq!(add(Some("//[***]\n1***2***3")), Ok(6));
}

#[test]
fn test_multiple_single_char_delimiters() {
    assert_eq!(add(Some("//[*][%]\n1*2%3")), Ok(6));
}

#[test]
fn test_multiple_multi_char_delimiters() {
    assert_eq!(add(Some("//[***][%%]\n1***2%%3")), Ok(6));
}

#[test]
fn test_overlapping_delimiters_in_either_order() {
    assert_eq!(add(Some("//[**][*]\n1**2*3")), Ok(6));
    assert_eq!(add(Some("//[*][**]\n1**2*3")), Ok(6));
}

#[test]
fn test_regex_metacharacters_are_literal() {
    assert_eq!(add(Some("//[.][|]\n1.2|3")), Ok(6));
    assert_eq!(add(Some("//$\n1$2")), Ok(3));
    assert_eq!(add(Some("//[(][)]\n1(2)3")), Ok(6));
}

#[test]
fn test_numbers_above_limit_are_ignored() {
    assert_eq!(add(Some("2,1001")), Ok(2));
    assert_eq!(add(Some("1000,1001,3")), Ok(1003));
    assert_eq!(add(Some("5000")), Ok(0));
}

#[test]
fn test_empty_tokens_are_skipped() {
    assert_eq!(add(Some("1,\n2")), Ok(3));
    assert_eq!(add(Some(",,1,,")), Ok(1));
    assert_eq!(add(Some("\n")), Ok(0));
}

#[test]
fn test_whitespace_around_numbers() {
    assert_eq!(add(Some("1, 2")), Ok(3));
    assert_eq!(add(Some(" 7 ")), Ok(7));
    assert_eq!(add(Some("//;\n1 ; 2")), Ok(3));
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(add(Some("1,2\r\n3")), Ok(6));
    assert_eq!(add(Some("1\r\n2\r\n")), Ok(3));
}

#[test]
fn test_empty_header() {
    assert_eq!(add(Some("//\n1,2")), Ok(3));
    assert_eq!(add(Some("//\n")), Ok(0));
}

#[test]
fn test_evaluation_reports_ignored_numbers() {
    let evaluation = Calculator::new()
        .evaluate(Some("//[;]\n1;1001;2;5000"))
        .unwrap();
    assert_eq!(evaluation.delimiters.as_slice(), [";", ",", "\n"]);
    assert_eq!(evaluation.accepted, [1, 2]);
    assert_eq!(evaluation.ignored, [1001, 5000]);
    assert_eq!(evaluation.sum, 3);
}

#[test]
fn test_calculator_shared_across_threads() {
    let calculator = Calculator::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || calculator.add(Some(&format!("{i},{i}"))))
        })
        .collect();
    let sums: Vec<i64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(sums, [0, 2, 4, 6]);
}
