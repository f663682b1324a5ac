//! Centralized logging configuration for basedcalc binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Logging to a file, since a full-screen terminal UI owns stderr
//!
//! # Examples
//!
//! ```no_run
//! use libbasedcalc::logging::{LogFormat, LogTarget, LoggingConfig};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_target(LogTarget::Stderr);
//! config.init();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created along with its parent directory if missing
    File(PathBuf),
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Create a new logging configuration writing to stderr
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            target: LogTarget::Stderr,
        }
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Log to `log_path`, or to stderr at `error` level when it is unusable
    ///
    /// The second value says why the file was not used.
    pub fn file_or_stderr(self, log_path: Option<PathBuf>) -> (Self, Option<String>) {
        let (config, reason) = match log_path {
            Some(path) => {
                let config = self.with_target(LogTarget::File(path.clone()));
                match config.make_writer() {
                    Ok(_) => return (config, None),
                    Err(e) => (
                        config,
                        format!("cannot open log file {}: {}", path.display(), e),
                    ),
                }
            }
            None => (self, "no data directory for the log file".to_string()),
        };

        let fallback = LoggingConfig::new(config.format, "error".to_string(), false);
        (fallback, Some(reason))
    }

    fn make_writer(&self) -> std::io::Result<BoxMakeWriter> {
        match &self.target {
            LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. Fails if
    /// the log file cannot be opened; a second call is a no-op.
    pub fn init(&self) -> std::io::Result<()> {
        use tracing_subscriber::EnvFilter;

        // Determine the filter based on verbose flag and level
        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };
        let writer = self.make_writer()?;
        let ansi = self.target == LogTarget::Stderr;

        let _ = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        Ok(())
    }
}

/// Logging settings from `BASEDCALC_LOG_FORMAT` and `BASEDCALC_LOG_LEVEL`
///
/// Falls back to text format with info level if not set.
///
/// # Examples
///
/// ```bash
/// export BASEDCALC_LOG_FORMAT=json
/// export BASEDCALC_LOG_LEVEL=debug
/// basedcalc
/// ```
pub fn config_from_env(verbose: bool) -> LoggingConfig {
    let format = std::env::var("BASEDCALC_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("BASEDCALC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    LoggingConfig::new(format, level, verbose)
}
