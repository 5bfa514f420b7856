#![no_main]
use libfuzzer_sys::fuzz_target;
use strcalc::Calculator;

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps inputs that are almost text.
    let s = String::from_utf8_lossy(data);
    let calculator = Calculator::new();
    if let Ok(evaluation) = calculator.evaluate(Some(&s)) {
        assert_eq!(calculator.add(Some(&s)).ok(), Some(evaluation.sum));
        assert!(evaluation.accepted.iter().all(|n| (0..=strcalc::MAX_VALUE).contains(n)));
    }
});
