//! Key bindings
//!
//! Overlays take keys first: the error overlay, then the donation prompt,
//! then help. Otherwise global keys apply and everything else is looked up
//! on the calculator keypad. Scientific keys resolve to nothing while the
//! calculator is in basic mode.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libbasedcalc::evaluator::Digit;
use libbasedcalc::{BinaryOp, Input, MemoryOp, UnaryFn};

use super::actions::Action;
use super::state::AppState;

/// Map a key press to an action, or `None` if the key does nothing here
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    if state.donation.is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::ConfirmDonation),
            KeyCode::Esc => Some(Action::DismissDonation),
            _ => None,
        };
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Action::HideHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::F(1) => return Some(Action::ShowHelp),
        KeyCode::F(2) => return Some(Action::CycleTheme),
        _ => {}
    }

    calculator_input(key.code)
        .filter(|input| state.calculator.mode.allows(input))
        .map(Action::Calculator)
}

/// Keypad lookup, ignoring mode
pub fn calculator_input(code: KeyCode) -> Option<Input> {
    let input = match code {
        KeyCode::Char(c) if c.is_ascii_digit() => Input::Digit(Digit::try_from(c).ok()?),
        KeyCode::Char('.') => Input::DecimalPoint,
        KeyCode::Enter | KeyCode::Char('=') => Input::Equals,
        KeyCode::Backspace => Input::DeleteLast,
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => Input::Clear,
        KeyCode::Tab => Input::ToggleMode,

        KeyCode::Char('+') => Input::Binary(BinaryOp::Add),
        KeyCode::Char('-') => Input::Binary(BinaryOp::Subtract),
        KeyCode::Char('*') => Input::Binary(BinaryOp::Multiply),
        KeyCode::Char('/') => Input::Binary(BinaryOp::Divide),
        KeyCode::Char('^') => Input::Binary(BinaryOp::Power),
        KeyCode::Char('%') => Input::Binary(BinaryOp::Modulo),

        KeyCode::Char('s') => Input::Unary(UnaryFn::Sin),
        KeyCode::Char('o') => Input::Unary(UnaryFn::Cos),
        KeyCode::Char('t') => Input::Unary(UnaryFn::Tan),
        KeyCode::Char('n') => Input::Unary(UnaryFn::Ln),
        KeyCode::Char('g') => Input::Unary(UnaryFn::Log10),
        KeyCode::Char('r') => Input::Unary(UnaryFn::Sqrt),
        KeyCode::Char('w') => Input::Unary(UnaryFn::Square),
        KeyCode::Char('y') => Input::Unary(UnaryFn::Cube),
        KeyCode::Char('i') => Input::Unary(UnaryFn::Reciprocal),
        KeyCode::Char('x') => Input::Unary(UnaryFn::Exp),
        KeyCode::Char('a') => Input::Unary(UnaryFn::Abs),
        KeyCode::Char('p') => Input::Unary(UnaryFn::Pi),
        KeyCode::Char('e') => Input::Unary(UnaryFn::E),
        KeyCode::Char('!') => Input::Unary(UnaryFn::Factorial),

        KeyCode::F(5) => Input::Memory(MemoryOp::Clear),
        KeyCode::F(6) => Input::Memory(MemoryOp::Recall),
        KeyCode::F(7) => Input::Memory(MemoryOp::Store),
        KeyCode::F(8) => Input::Memory(MemoryOp::Add),
        KeyCode::F(9) => Input::Memory(MemoryOp::Subtract),

        _ => return None,
    };
    Some(input)
}

/// Key hint shown next to a keypad button
pub fn key_hint(input: Input) -> &'static str {
    match input {
        Input::Equals => "Enter",
        Input::DeleteLast => "Bksp",
        Input::Clear => "c",
        Input::ToggleMode => "Tab",
        Input::Binary(BinaryOp::Multiply) => "*",
        Input::Binary(BinaryOp::Divide) => "/",
        Input::Binary(BinaryOp::Subtract) => "-",
        Input::Binary(BinaryOp::Modulo) => "%",
        Input::Unary(UnaryFn::Sin) => "s",
        Input::Unary(UnaryFn::Cos) => "o",
        Input::Unary(UnaryFn::Tan) => "t",
        Input::Unary(UnaryFn::Ln) => "n",
        Input::Unary(UnaryFn::Log10) => "g",
        Input::Unary(UnaryFn::Sqrt) => "r",
        Input::Unary(UnaryFn::Square) => "w",
        Input::Unary(UnaryFn::Cube) => "y",
        Input::Unary(UnaryFn::Reciprocal) => "i",
        Input::Unary(UnaryFn::Exp) => "x",
        Input::Unary(UnaryFn::Abs) => "a",
        Input::Unary(UnaryFn::Pi) => "p",
        Input::Memory(MemoryOp::Clear) => "F5",
        Input::Memory(MemoryOp::Recall) => "F6",
        Input::Memory(MemoryOp::Store) => "F7",
        Input::Memory(MemoryOp::Add) => "F8",
        Input::Memory(MemoryOp::Subtract) => "F9",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unary_fn_has_a_key() {
        for func in UnaryFn::ALL {
            let reachable = ('!'..='~')
                .any(|c| calculator_input(KeyCode::Char(c)) == Some(Input::Unary(func)));
            assert!(reachable, "{:?} has no key", func);
        }
    }

    #[test]
    fn test_every_memory_op_has_a_key() {
        for op in MemoryOp::ALL {
            let reachable = (5..=9).any(|n| calculator_input(KeyCode::F(n)) == Some(Input::Memory(op)));
            assert!(reachable, "{:?} has no key", op);
        }
    }

    #[test]
    fn test_every_binary_op_has_a_key() {
        for op in BinaryOp::ALL {
            let reachable = ('!'..='~')
                .any(|c| calculator_input(KeyCode::Char(c)) == Some(Input::Binary(op)));
            assert!(reachable, "{:?} has no key", op);
        }
    }

    #[test]
    fn test_hint_matches_binding() {
        for c in ['s', 'o', 'x', '%', '*'] {
            let input = calculator_input(KeyCode::Char(c)).unwrap();
            assert_eq!(key_hint(input), c.to_string());
        }
    }
}
