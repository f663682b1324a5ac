//! basedcalc - a themeable pocket calculator that turns results into donations
//!
//! This library holds everything that is not terminal glue: the evaluator
//! state machine, the theme/style table, the theme preference context,
//! the donation model and the service facade that ties them together.

pub mod config;
pub mod donation;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod preferences;
pub mod service;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use donation::{DonationPrompt, DonationSummary, Donor};
pub use error::{BasedcalcError, Result};
pub use evaluator::{BinaryOp, Calculator, CalculatorView, Input, MemoryOp, Mode, Signal, UnaryFn};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeContext};
pub use theme::{Element, StyleDescriptor, Theme};
