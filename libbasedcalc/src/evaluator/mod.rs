//! Calculator evaluator
//!
//! A pocket-calculator state machine with a single pending-operation slot.
//! There is no expression tree and no operator precedence: pressing a second
//! binary operator folds the queued one immediately, so `5 + 3 × 2 =` is 16.
//!
//! The evaluator knows nothing about presentation. A successful `equals`
//! returns [`Signal::Donate`] and whoever drives the evaluator decides what
//! to do with it.
//!
//! # Example
//!
//! ```
//! use libbasedcalc::evaluator::{BinaryOp, Calculator, Digit, Input, Signal};
//!
//! let mut calc = Calculator::new();
//! calc.press(Input::Digit(Digit::new(6).unwrap()));
//! calc.press(Input::Binary(BinaryOp::Multiply));
//! calc.press(Input::Digit(Digit::new(7).unwrap()));
//! let signal = calc.press(Input::Equals);
//!
//! assert_eq!(calc.display(), "42");
//! assert_eq!(signal, Some(Signal::Donate { amount: 42.0 }));
//! ```

pub mod number;
pub mod ops;

pub use number::{format_number, parse_display};
pub use ops::{evaluate, factorial, validate, BinaryOp, MemoryOp, UnaryFn};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal shown in place of a NaN or infinite result
pub const ERROR_MARKER: &str = "Error";

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or(c)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which part of the keypad is reachable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Basic => Mode::Scientific,
            Mode::Scientific => Mode::Basic,
        }
    }

    /// Whether `input` is on this mode's keypad.
    ///
    /// The evaluator accepts any input regardless; this only gates what a
    /// front-end offers.
    pub fn allows(self, input: &Input) -> bool {
        match (self, input) {
            (Mode::Scientific, _) => true,
            (Mode::Basic, Input::Binary(op)) => op.is_basic(),
            (Mode::Basic, Input::Unary(_)) | (Mode::Basic, Input::Memory(_)) => false,
            (Mode::Basic, _) => true,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Basic => write!(f, "Basic"),
            Mode::Scientific => write!(f, "Scientific"),
        }
    }
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Binary(BinaryOp),
    Unary(UnaryFn),
    Memory(MemoryOp),
    Equals,
    Clear,
    DeleteLast,
    ToggleMode,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Digit(d) => write!(f, "{}", d),
            Input::DecimalPoint => write!(f, "."),
            Input::Binary(op) => write!(f, "{}", op),
            Input::Unary(func) => write!(f, "{}", func),
            Input::Memory(op) => write!(f, "{}", op),
            Input::Equals => write!(f, "="),
            Input::Clear => write!(f, "C"),
            Input::DeleteLast => write!(f, "DEL"),
            Input::ToggleMode => write!(f, "mode"),
        }
    }
}

/// Outcomes worth telling the outside world about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// `equals` produced a valid result; open the donation prompt for
    /// the absolute value of that result.
    Donate { amount: f64 },
    /// `equals` or a scientific function produced NaN or infinity
    InvalidResult,
}

/// Read-only copy of what a front-end needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorView {
    pub display: String,
    /// `"<operand> <symbol>"` while an operator is queued
    pub pending: Option<String>,
    pub memory: f64,
    pub mode: Mode,
}

impl Default for CalculatorView {
    fn default() -> Self {
        Calculator::new().view()
    }
}

/// Evaluator state
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<BinaryOp>,
    memory: f64,
    mode: Mode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            memory: 0.0,
            mode: Mode::Basic,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    pub fn view(&self) -> CalculatorView {
        let pending = match (self.pending_operand, self.pending_operator) {
            (Some(operand), Some(op)) => Some(format!("{} {}", format_number(operand), op)),
            _ => None,
        };

        CalculatorView {
            display: self.display.clone(),
            pending,
            memory: self.memory,
            mode: self.mode,
        }
    }

    /// Dispatch one input event
    pub fn press(&mut self, input: Input) -> Option<Signal> {
        match input {
            Input::Digit(d) => self.digit(d),
            Input::DecimalPoint => self.decimal_point(),
            Input::Binary(op) => self.binary_op(op),
            Input::Unary(func) => return self.unary_fn(func),
            Input::Memory(op) => self.memory_op(op),
            Input::Equals => return self.equals(),
            Input::Clear => self.clear(),
            Input::DeleteLast => self.delete_last(),
            Input::ToggleMode => self.toggle_mode(),
        }
        None
    }

    pub fn digit(&mut self, d: Digit) {
        if self.display == "0" || self.is_error() {
            self.display = d.to_string();
        } else {
            self.display.push(d.as_char());
        }
    }

    pub fn decimal_point(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Queue `op`, folding any operation already queued.
    ///
    /// The folded result is not validated; an invalid intermediate only
    /// surfaces at the next `equals`.
    pub fn binary_op(&mut self, op: BinaryOp) {
        let current = self.current();

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(current),
            (Some(operand), Some(queued)) => {
                let result = queued.apply(operand, current);
                self.pending_operand = Some(result);
                self.display = format_number(result);
            }
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.display = "0".to_string();
    }

    /// Apply a scientific function to the display value.
    ///
    /// Pending operand and operator are left alone, even on error.
    pub fn unary_fn(&mut self, func: UnaryFn) -> Option<Signal> {
        if let Some(value) = func.constant() {
            self.display = format_number(value);
            return None;
        }

        match validate(func.apply(self.current())) {
            Ok(result) => {
                self.display = format_number(result);
                None
            }
            Err(_) => {
                self.display = ERROR_MARKER.to_string();
                Some(Signal::InvalidResult)
            }
        }
    }

    pub fn memory_op(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall => self.display = format_number(self.memory),
            MemoryOp::Store => self.memory = self.current(),
            MemoryOp::Add => self.memory += self.current(),
            MemoryOp::Subtract => self.memory -= self.current(),
        }
    }

    /// Resolve the queued operation.
    ///
    /// Does nothing unless both an operand and an operator are queued.
    pub fn equals(&mut self) -> Option<Signal> {
        let (Some(operand), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return None;
        };

        let current = self.current();
        self.pending_operand = None;
        self.pending_operator = None;

        match evaluate(op, operand, current) {
            Ok(result) => {
                self.display = format_number(result);
                Some(Signal::Donate {
                    amount: result.abs(),
                })
            }
            Err(_) => {
                self.display = ERROR_MARKER.to_string();
                Some(Signal::InvalidResult)
            }
        }
    }

    /// Reset display and pending slot; memory survives
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = None;
        self.pending_operator = None;
    }

    /// Backspace.
    ///
    /// The error marker is not special-cased: it is removed one character
    /// at a time like any other text.
    pub fn delete_last(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    fn current(&self) -> f64 {
        parse_display(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &str) -> Option<Signal> {
        let mut last = None;
        for key in keys.split_whitespace() {
            let input = match key {
                "=" => Input::Equals,
                "." => Input::DecimalPoint,
                "C" => Input::Clear,
                "DEL" => Input::DeleteLast,
                _ if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) => {
                    Input::Digit(Digit::try_from(key.chars().next().unwrap()).unwrap())
                }
                _ => Input::Binary(key.parse().unwrap()),
            };
            last = calc.press(input);
        }
        last
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert_eq!(calc.memory(), 0.0);
        assert_eq!(calc.mode(), Mode::Basic);
    }

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "0 0 7 3");
        assert_eq!(calc.display(), "73");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 . 5 . 2");
        assert_eq!(calc.display(), "1.52");
    }

    #[test]
    fn test_decimal_point_on_zero_keeps_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, ". 5");
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_operator_resets_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 2 +");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operand(), Some(12.0));
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Add));
    }

    #[test]
    fn test_chained_operators_fold_left_to_right() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5 + 3 ×");
        assert_eq!(calc.pending_operand(), Some(8.0));
        assert_eq!(calc.display(), "0");

        let signal = press_all(&mut calc, "2 =");
        assert_eq!(calc.display(), "16");
        assert_eq!(signal, Some(Signal::Donate { amount: 16.0 }));
    }

    #[test]
    fn test_replacing_operator_before_operand() {
        // Second operator folds with the "0" in the display
        let mut calc = Calculator::new();
        press_all(&mut calc, "5 + ×");
        assert_eq!(calc.pending_operand(), Some(5.0));
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Multiply));
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "4 2");
        let signal = calc.press(Input::Equals);
        assert_eq!(calc.display(), "42");
        assert!(signal.is_none());
    }

    #[test]
    fn test_equals_clears_pending() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "9 − 4 =");
        assert_eq!(calc.display(), "5");
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());

        // Second equals does nothing
        assert!(calc.press(Input::Equals).is_none());
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_donation_amount_is_absolute() {
        let mut calc = Calculator::new();
        let signal = press_all(&mut calc, "3 − 1 0 =");
        assert_eq!(calc.display(), "-7");
        assert_eq!(signal, Some(Signal::Donate { amount: 7.0 }));
    }

    #[test]
    fn test_divide_by_zero_shows_error() {
        let mut calc = Calculator::new();
        let signal = press_all(&mut calc, "1 0 ÷ 0 =");
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(signal, Some(Signal::InvalidResult));
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
    }

    #[test]
    fn test_digit_recovers_from_error() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 ÷ 0 = 7");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_delete_walks_through_error_marker() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 ÷ 0 = DEL");
        assert_eq!(calc.display(), "Erro");
        press_all(&mut calc, "DEL DEL DEL DEL");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_delete_last() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 2 3 DEL");
        assert_eq!(calc.display(), "12");
        press_all(&mut calc, "DEL DEL");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_delete_negative_sign_leaves_nan_operand() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2 − 7 =");
        assert_eq!(calc.display(), "-5");
        calc.press(Input::DeleteLast);
        assert_eq!(calc.display(), "-");
        calc.press(Input::Unary(UnaryFn::Abs));
        assert_eq!(calc.display(), ERROR_MARKER);
    }

    #[test]
    fn test_clear_keeps_memory() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "4 2");
        calc.press(Input::Memory(MemoryOp::Store));
        press_all(&mut calc, "+ 1 C");
        assert_eq!(calc.display(), "0");
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert_eq!(calc.memory(), 42.0);
    }

    #[test]
    fn test_memory_round_trip_after_clear() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "4 2");
        calc.press(Input::Memory(MemoryOp::Store));
        calc.press(Input::Memory(MemoryOp::Clear));
        calc.press(Input::Memory(MemoryOp::Recall));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_memory_add_and_subtract() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 0");
        calc.press(Input::Memory(MemoryOp::Add));
        calc.press(Input::Memory(MemoryOp::Add));
        press_all(&mut calc, "C 3");
        calc.press(Input::Memory(MemoryOp::Subtract));
        assert_eq!(calc.memory(), 17.0);

        calc.press(Input::Memory(MemoryOp::Recall));
        assert_eq!(calc.display(), "17");
    }

    #[test]
    fn test_memory_ops_leave_pending_alone() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "6 × 7");
        calc.press(Input::Memory(MemoryOp::Store));
        assert_eq!(calc.pending_operand(), Some(6.0));
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Multiply));
    }

    #[test]
    fn test_factorial_key() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5");
        calc.press(Input::Unary(UnaryFn::Factorial));
        assert_eq!(calc.display(), "120");
    }

    #[test]
    fn test_negative_factorial_shows_error() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "0 − 1 =");
        let signal = calc.press(Input::Unary(UnaryFn::Factorial));
        assert_eq!(signal, Some(Signal::InvalidResult));
        assert_eq!(calc.display(), ERROR_MARKER);
    }

    #[test]
    fn test_unary_error_keeps_pending() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "8 + 0");
        calc.press(Input::Unary(UnaryFn::Reciprocal));
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.pending_operand(), Some(8.0));
        assert_eq!(calc.pending_operator(), Some(BinaryOp::Add));
    }

    #[test]
    fn test_constants_overwrite_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 2");
        calc.press(Input::Unary(UnaryFn::Pi));
        assert_eq!(calc.display(), "3.141592653589793");
        calc.press(Input::Unary(UnaryFn::E));
        assert_eq!(calc.display(), "2.718281828459045");
    }

    #[test]
    fn test_digit_appends_after_constant() {
        let mut calc = Calculator::new();
        calc.press(Input::Unary(UnaryFn::Pi));
        press_all(&mut calc, "1");
        assert_eq!(calc.display(), "3.1415926535897931");
    }

    #[test]
    fn test_unary_ignores_pending_operation() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2 + 9");
        calc.press(Input::Unary(UnaryFn::Sqrt));
        assert_eq!(calc.display(), "3");
        press_all(&mut calc, "=");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_toggle_mode() {
        let mut calc = Calculator::new();
        calc.press(Input::ToggleMode);
        assert_eq!(calc.mode(), Mode::Scientific);
        calc.press(Input::ToggleMode);
        assert_eq!(calc.mode(), Mode::Basic);
    }

    #[test]
    fn test_mode_gates_input_surface() {
        assert!(Mode::Basic.allows(&Input::Binary(BinaryOp::Add)));
        assert!(Mode::Basic.allows(&Input::Equals));
        assert!(!Mode::Basic.allows(&Input::Binary(BinaryOp::Power)));
        assert!(!Mode::Basic.allows(&Input::Unary(UnaryFn::Sin)));
        assert!(!Mode::Basic.allows(&Input::Memory(MemoryOp::Recall)));
        assert!(Mode::Scientific.allows(&Input::Memory(MemoryOp::Recall)));
        assert!(Mode::Scientific.allows(&Input::Binary(BinaryOp::Modulo)));
    }

    #[test]
    fn test_view_shows_pending_expression() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5 + 3 ×");
        let view = calc.view();
        assert_eq!(view.pending.as_deref(), Some("8 ×"));
        assert_eq!(view.display, "0");
    }

    #[test]
    fn test_digit_validation() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert_eq!(Digit::try_from('x'), Err('x'));
    }
}
