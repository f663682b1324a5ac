//! Operations the keypad can issue
//!
//! Each operation knows its keypad label and how to compute itself on raw
//! `f64` values. Validation of the outcome happens in the state machine.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;

/// Binary operators queued in the pending slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
        BinaryOp::Modulo,
    ];

    /// Keypad label
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "^",
            BinaryOp::Modulo => "mod",
        }
    }

    /// Compute `a op b` without validation.
    ///
    /// Division by zero yields NaN rather than an infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
            BinaryOp::Power => a.powf(b),
            // Truncated remainder, sign follows the dividend
            BinaryOp::Modulo => a % b,
        }
    }

    /// Basic mode only exposes the four arithmetic keys
    pub fn is_basic(self) -> bool {
        !matches!(self, BinaryOp::Power | BinaryOp::Modulo)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinaryOp::Add),
            "−" | "-" => Ok(BinaryOp::Subtract),
            "×" | "*" => Ok(BinaryOp::Multiply),
            "÷" | "/" => Ok(BinaryOp::Divide),
            "^" => Ok(BinaryOp::Power),
            "mod" | "%" => Ok(BinaryOp::Modulo),
            _ => Err(format!("Unknown operator: '{}'", s)),
        }
    }
}

/// Single-operand functions on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Sqrt,
    Square,
    Cube,
    Reciprocal,
    Exp,
    Abs,
    Pi,
    E,
    Factorial,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 14] = [
        UnaryFn::Sin,
        UnaryFn::Cos,
        UnaryFn::Tan,
        UnaryFn::Ln,
        UnaryFn::Log10,
        UnaryFn::Sqrt,
        UnaryFn::Square,
        UnaryFn::Cube,
        UnaryFn::Reciprocal,
        UnaryFn::Exp,
        UnaryFn::Abs,
        UnaryFn::Pi,
        UnaryFn::E,
        UnaryFn::Factorial,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Ln => "ln",
            UnaryFn::Log10 => "log",
            UnaryFn::Sqrt => "√",
            UnaryFn::Square => "x²",
            UnaryFn::Cube => "x³",
            UnaryFn::Reciprocal => "1/x",
            UnaryFn::Exp => "e^x",
            UnaryFn::Abs => "|x|",
            UnaryFn::Pi => "π",
            UnaryFn::E => "e",
            UnaryFn::Factorial => "!",
        }
    }

    /// Constants overwrite the display and skip validation
    pub fn constant(self) -> Option<f64> {
        match self {
            UnaryFn::Pi => Some(PI),
            UnaryFn::E => Some(E),
            _ => None,
        }
    }

    /// Compute the function on `x` without validation.
    ///
    /// Trigonometry takes degrees.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryFn::Sin => (x * PI / 180.0).sin(),
            UnaryFn::Cos => (x * PI / 180.0).cos(),
            UnaryFn::Tan => (x * PI / 180.0).tan(),
            UnaryFn::Ln => x.ln(),
            UnaryFn::Log10 => x.log10(),
            UnaryFn::Sqrt => x.sqrt(),
            UnaryFn::Square => x * x,
            UnaryFn::Cube => x * x * x,
            UnaryFn::Reciprocal => 1.0 / x,
            UnaryFn::Exp => x.exp(),
            UnaryFn::Abs => x.abs(),
            UnaryFn::Pi => PI,
            UnaryFn::E => E,
            UnaryFn::Factorial => factorial(x.floor()),
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnaryFn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnaryFn::ALL
            .iter()
            .copied()
            .find(|f| f.symbol() == s)
            .or(match s {
                "sqrt" => Some(UnaryFn::Sqrt),
                "pi" => Some(UnaryFn::Pi),
                "abs" => Some(UnaryFn::Abs),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown function: '{}'", s))
    }
}

/// Memory register commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    /// MC
    Clear,
    /// MR
    Recall,
    /// MS
    Store,
    /// M+
    Add,
    /// M-
    Subtract,
}

impl MemoryOp {
    pub const ALL: [MemoryOp; 5] = [
        MemoryOp::Clear,
        MemoryOp::Recall,
        MemoryOp::Store,
        MemoryOp::Add,
        MemoryOp::Subtract,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MemoryOp::Clear => "MC",
            MemoryOp::Recall => "MR",
            MemoryOp::Store => "MS",
            MemoryOp::Add => "M+",
            MemoryOp::Subtract => "M-",
        }
    }
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemoryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemoryOp::ALL
            .iter()
            .copied()
            .find(|op| op.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown memory command: '{}'", s))
    }
}

/// Factorial by iterative product.
///
/// NaN for negative input. Large inputs overflow to infinity, which the
/// caller's validation turns into an invalid result.
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}

/// Reject NaN and infinite outcomes
pub fn validate(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::InvalidResult(value))
    }
}

/// `apply` followed by `validate`
pub fn evaluate(op: BinaryOp, a: f64, b: f64) -> Result<f64, EvalError> {
    validate(op.apply(a, b))
}
