//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use libbasedcalc::config::Config;
use libbasedcalc::{CalculatorView, DonationPrompt, DonationSummary, Theme};

/// Root application state
///
/// This is the single source of truth for everything the renderer draws.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Last snapshot of the calculator service
    pub calculator: CalculatorView,

    /// Active theme
    pub theme: Theme,

    /// Open donation prompt, if any
    pub donation: Option<DonationPrompt>,

    /// Donor list and running total for the sidebar
    pub donors: DonationSummary,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration, copied out of the loaded [`Config`]
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Payment page the confirmed donation links to
    pub payment_url: String,

    /// Fundraising goal in dollars
    pub goal: f64,

    pub beneficiary: String,
}

impl UiConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            colors_enabled: config.ui.colors,
            tick_rate_ms: config.ui.tick_rate_ms,
            payment_url: config.donation.payment_url.clone(),
            goal: config.donation.goal,
            beneficiary: config.donation.beneficiary.clone(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            calculator: CalculatorView::default(),
            theme: Theme::default(),
            donation: None,
            donors: DonationSummary::seeded(),
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a configured session
    pub fn from_config(config: &Config, theme: Theme, donors: DonationSummary) -> Self {
        Self {
            theme,
            donors,
            config: UiConfig::from_config(config),
            ..Self::default()
        }
    }

    /// Is any overlay drawn over the calculator?
    pub fn has_overlay(&self) -> bool {
        self.help_visible || self.error.is_some() || self.donation.is_some()
    }

    /// Percentage of the fundraising goal reached
    pub fn goal_progress(&self) -> f64 {
        self.donors.progress(self.config.goal)
    }
}
