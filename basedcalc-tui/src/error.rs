//! Error types for basedcalc-tui
//!
//! Wraps core library errors and terminal I/O errors so `main` has a single
//! error type to turn into an exit code.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Config, preference or argument error from the core library
    #[error("{0}")]
    Core(#[from] libbasedcalc::BasedcalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

impl TuiError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Core(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Application(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
