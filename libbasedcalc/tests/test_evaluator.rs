//! Calculator behaviour driven only through the public input surface
//!
//! Each test feeds a key sequence and checks the display and the signal
//! the last key produced.

use libbasedcalc::evaluator::{
    evaluate, factorial, BinaryOp, Calculator, Digit, Input, MemoryOp, Signal, UnaryFn,
    ERROR_MARKER,
};

/// Translate a space separated key string into inputs
fn keys(sequence: &str) -> Vec<Input> {
    sequence
        .split_whitespace()
        .map(|key| match key {
            "=" => Input::Equals,
            "." => Input::DecimalPoint,
            "C" => Input::Clear,
            "DEL" => Input::DeleteLast,
            "MC" => Input::Memory(MemoryOp::Clear),
            "MR" => Input::Memory(MemoryOp::Recall),
            "MS" => Input::Memory(MemoryOp::Store),
            "M+" => Input::Memory(MemoryOp::Add),
            "M-" => Input::Memory(MemoryOp::Subtract),
            "!" => Input::Unary(UnaryFn::Factorial),
            _ => match key.chars().next().map(Digit::try_from) {
                Some(Ok(d)) if key.len() == 1 => Input::Digit(d),
                _ => Input::Binary(key.parse().unwrap()),
            },
        })
        .collect()
}

fn run(calc: &mut Calculator, sequence: &str) -> Option<Signal> {
    keys(sequence)
        .into_iter()
        .fold(None, |_, input| calc.press(input))
}

#[test]
fn test_digit_entry_concatenates() {
    let cases = [
        ("0", "0"),
        ("0 0 0", "0"),
        ("0 5", "5"),
        ("1 2 3", "123"),
        (". 2 5", "0.25"),
        ("3 . . 1 4", "3.14"),
        ("1 . 0 . 0", "1.00"),
        ("0 . 0 7", "0.07"),
    ];

    for (sequence, expected) in cases {
        let mut calc = Calculator::new();
        run(&mut calc, sequence);
        assert_eq!(calc.display(), expected, "sequence: {}", sequence);
    }
}

#[test]
fn test_apply_standalone() {
    assert!(evaluate(BinaryOp::Divide, 10.0, 0.0).is_err());
    assert_eq!(evaluate(BinaryOp::Divide, 10.0, 2.0).unwrap(), 5.0);
    assert_eq!(evaluate(BinaryOp::Power, 2.0, 10.0).unwrap(), 1024.0);
    assert_eq!(evaluate(BinaryOp::Modulo, 7.0, 3.0).unwrap(), 1.0);
}

#[test]
fn test_chained_operators_have_no_precedence() {
    let mut calc = Calculator::new();
    let signal = run(&mut calc, "5 + 3 * 2 =");

    assert_eq!(calc.display(), "16");
    assert_eq!(signal, Some(Signal::Donate { amount: 16.0 }));
}

#[test]
fn test_long_chain_folds_left_to_right() {
    let mut calc = Calculator::new();
    run(&mut calc, "2 + 3 * 4 - 5 / 3 =");
    assert_eq!(calc.display(), "5");
}

#[test]
fn test_equals_without_operator_is_noop() {
    let mut calc = Calculator::new();
    let signal = run(&mut calc, "1 . 5 =");

    assert_eq!(calc.display(), "1.5");
    assert!(signal.is_none());
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(5.0), 120.0);
    assert!(factorial(-1.0).is_nan());

    let mut calc = Calculator::new();
    run(&mut calc, "5 !");
    assert_eq!(calc.display(), "120");
}

#[test]
fn test_negative_factorial_shows_error_marker() {
    let mut calc = Calculator::new();
    run(&mut calc, "0 - 1 =");
    assert_eq!(calc.display(), "-1");

    let signal = run(&mut calc, "!");
    assert_eq!(signal, Some(Signal::InvalidResult));
    assert_eq!(calc.display(), ERROR_MARKER);
}

#[test]
fn test_memory_clear_before_recall() {
    let mut calc = Calculator::new();
    run(&mut calc, "4 2 MS MC MR");
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_memory_accumulates() {
    let mut calc = Calculator::new();
    run(&mut calc, "5 M+ M+ C 2 M- C MR");
    assert_eq!(calc.display(), "8");
}

#[test]
fn test_every_digit_recovers_from_error() {
    for d in 0..=9u8 {
        let mut calc = Calculator::new();
        run(&mut calc, "8 / 0 =");
        assert!(calc.is_error());

        calc.press(Input::Digit(Digit::new(d).unwrap()));
        assert_eq!(calc.display(), d.to_string());
    }
}

#[test]
fn test_clear_recovers_from_error() {
    let mut calc = Calculator::new();
    run(&mut calc, "8 / 0 = C");
    assert_eq!(calc.display(), "0");
    assert!(!calc.is_error());
}

#[test]
fn test_donation_signal_carries_absolute_value() {
    let mut calc = Calculator::new();
    let signal = run(&mut calc, "2 - 9 . 5 =");

    assert_eq!(calc.display(), "-7.5");
    assert_eq!(signal, Some(Signal::Donate { amount: 7.5 }));
}

#[test]
fn test_invalid_equals_does_not_donate() {
    let mut calc = Calculator::new();
    let signal = run(&mut calc, "9 / 0 =");
    assert_eq!(signal, Some(Signal::InvalidResult));
    assert!(!matches!(signal, Some(Signal::Donate { .. })));
}

#[test]
fn test_zero_result_still_donates() {
    let mut calc = Calculator::new();
    let signal = run(&mut calc, "4 - 4 =");
    assert_eq!(signal, Some(Signal::Donate { amount: 0.0 }));
}

#[test]
fn test_invalid_intermediate_surfaces_at_equals() {
    // 1 / 0 folds to Infinity without complaint, then stays invalid
    let mut calc = Calculator::new();
    run(&mut calc, "1 / 0 +");
    assert_eq!(calc.display(), "0");

    let signal = run(&mut calc, "1 =");
    assert_eq!(signal, Some(Signal::InvalidResult));
    assert_eq!(calc.display(), ERROR_MARKER);
}

#[test]
fn test_large_results_use_exponent_form() {
    let mut calc = Calculator::new();
    run(
        &mut calc,
        "1 0 0 0 0 0 0 0 0 0 0 * 1 0 0 0 0 0 0 0 0 0 0 0 =",
    );
    assert_eq!(calc.display(), "1e+21");
}

#[test]
fn test_float_noise_is_kept() {
    let mut calc = Calculator::new();
    run(&mut calc, ". 1 + . 2 =");
    assert_eq!(calc.display(), "0.30000000000000004");
}
