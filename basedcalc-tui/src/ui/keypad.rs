//! Keypad legend
//!
//! The keypad is drawn, not clicked: each cap shows the calculator symbol
//! and the keyboard key that presses it.

use libbasedcalc::evaluator::Digit;
use libbasedcalc::{BinaryOp, Element, Input, MemoryOp, Mode, UnaryFn};

use crate::app::keymap::key_hint;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyCap {
    pub input: Input,
    pub label: String,
    pub hint: &'static str,
    pub element: Element,
}

impl KeyCap {
    fn new(input: Input) -> Self {
        let (label, element) = match input {
            Input::Digit(d) => (d.to_string(), Element::NumberKey),
            Input::DecimalPoint => (".".to_string(), Element::NumberKey),
            Input::Binary(op) if op.is_basic() => (op.symbol().to_string(), Element::OperatorKey),
            Input::Binary(op) => (op.symbol().to_string(), Element::ScientificKey),
            Input::Unary(func) => (func.symbol().to_string(), Element::ScientificKey),
            Input::Memory(op) => (op.label().to_string(), Element::ScientificKey),
            Input::Equals => ("=".to_string(), Element::Accent),
            Input::Clear => ("C".to_string(), Element::OperatorKey),
            Input::DeleteLast => ("⌫".to_string(), Element::OperatorKey),
            Input::ToggleMode => ("mode".to_string(), Element::OperatorKey),
        };

        Self {
            input,
            label,
            hint: key_hint(input),
            element,
        }
    }
}

fn digit(d: usize) -> Input {
    Input::Digit(Digit::ALL[d])
}

fn row(inputs: &[Input]) -> Vec<KeyCap> {
    inputs.iter().copied().map(KeyCap::new).collect()
}

/// Rows of caps reachable in `mode`, scientific rows first
pub fn keypad_rows(mode: Mode) -> Vec<Vec<KeyCap>> {
    let mut rows = Vec::new();

    if mode == Mode::Scientific {
        let unary: Vec<Input> = UnaryFn::ALL.iter().copied().map(Input::Unary).collect();
        let (first, rest) = unary.split_at(5);
        let (second, third) = rest.split_at(5);
        rows.push(row(first));
        rows.push(row(second));

        let mut third = third.to_vec();
        third.push(Input::Binary(BinaryOp::Power));
        third.push(Input::Binary(BinaryOp::Modulo));
        rows.push(row(&third));

        let memory: Vec<Input> = MemoryOp::ALL.iter().copied().map(Input::Memory).collect();
        rows.push(row(&memory));
    }

    rows.push(row(&[
        Input::Clear,
        Input::DeleteLast,
        Input::ToggleMode,
        Input::Binary(BinaryOp::Divide),
    ]));
    rows.push(row(&[digit(7), digit(8), digit(9), Input::Binary(BinaryOp::Multiply)]));
    rows.push(row(&[digit(4), digit(5), digit(6), Input::Binary(BinaryOp::Subtract)]));
    rows.push(row(&[digit(1), digit(2), digit(3), Input::Binary(BinaryOp::Add)]));
    rows.push(row(&[digit(0), Input::DecimalPoint, Input::Equals]));

    rows
}
