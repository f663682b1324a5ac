//! Donation prompt and donor summary
//!
//! A successful `equals` turns into a [`DonationPrompt`] for the absolute
//! value of the result. The prompt only formats; opening the payment page
//! is left to the front-end.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default payment page; `?amount=<cents>` is appended
pub const DEFAULT_PAYMENT_URL: &str = "https://donate.stripe.com/test";

pub const DEFAULT_BENEFICIARY: &str = "Animal Welfare Fund";

/// Receipt shown after a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationPrompt {
    pub amount: f64,
    pub created_at: DateTime<Local>,
}

impl DonationPrompt {
    pub fn new(amount: f64, created_at: DateTime<Local>) -> Self {
        Self { amount, created_at }
    }

    /// Prompt stamped with the current local time
    pub fn now(amount: f64) -> Self {
        Self::new(amount, Local::now())
    }

    /// `$12.50`
    pub fn formatted_amount(&self) -> String {
        format!("${:.2}", self.amount)
    }

    /// Amount in whole cents, rounded half away from zero
    ///
    /// Stays an `f64`: results far beyond `u64::MAX` cents are reachable.
    pub fn amount_cents(&self) -> f64 {
        (self.amount * 100.0).round()
    }

    pub fn payment_link(&self, base_url: &str) -> String {
        format!("{}?amount={:.0}", base_url, self.amount_cents())
    }

    /// `3:07 PM, Oct 19, 2026`
    pub fn receipt_time(&self) -> String {
        self.created_at.format("%-I:%M %p, %b %-d, %Y").to_string()
    }
}

/// One entry of the donor feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    #[serde(default)]
    pub name: String,
    pub amount: f64,
    #[serde(rename = "timeAgo", default)]
    pub time_ago: String,
}

impl Donor {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }

    pub fn formatted_amount(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

/// Donor feed payload: running total plus recent donors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DonationSummary {
    pub total: f64,
    #[serde(default)]
    pub donors: Vec<Donor>,
}

impl DonationSummary {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Placeholder used when no donor feed is configured
    pub fn seeded() -> Self {
        Self {
            total: 10.0,
            donors: vec![Donor {
                name: "sukhanishri".to_string(),
                amount: 10.0,
                time_ago: "Just now".to_string(),
            }],
        }
    }

    /// Percentage of `goal` reached, capped at 100
    ///
    /// Always within `0..=100`; a non-positive or non-finite goal gives 0.
    pub fn progress(&self, goal: f64) -> f64 {
        if !goal.is_finite() || goal <= 0.0 {
            return 0.0;
        }
        let percent = self.total / goal * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }
}
