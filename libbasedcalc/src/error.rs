//! Error types for basedcalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BasedcalcError>;

#[derive(Error, Debug)]
pub enum BasedcalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preference error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BasedcalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BasedcalcError::InvalidInput(_) => 3,
            BasedcalcError::Config(_) => 2,
            BasedcalcError::Preferences(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Failed to parse donor feed: {0}")]
    DonorFeed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The single error kind the evaluator knows about.
///
/// Division by zero, out-of-domain logarithms and roots, and overflowed
/// factorials all end up here. The caller only ever sees the error marker.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("Invalid result: {0}")]
    InvalidResult(f64),
}
