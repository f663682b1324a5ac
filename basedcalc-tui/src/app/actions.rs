//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Some actions
//! (`Calculator`, `CycleTheme`) only make sense together with a side effect
//! in the main loop; the reducer leaves state alone for those and waits for
//! the follow-up action carrying the outcome.

use crossterm::event::KeyEvent;
use libbasedcalc::{CalculatorView, DonationPrompt, Input, Theme};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    Quit,
    ShowHelp,
    HideHelp,

    // === Calculator ===
    /// Feed an input to the calculator service
    Calculator(Input),

    /// Fresh snapshot after the service handled an input
    DisplayUpdated(CalculatorView),

    // === Theme ===
    /// Switch to the next theme and persist it
    CycleTheme,

    /// The active theme is now this one
    ThemeChanged(Theme),

    // === Donation ===
    /// Open the donation prompt
    DonationPrompted(DonationPrompt),

    /// User accepted the prompt
    ConfirmDonation,

    /// User closed the prompt without donating
    DismissDonation,

    // === Error Handling ===
    ShowError(String),
    DismissError,

    // === Status Bar ===
    SetStatus(String),
    ClearStatus,
}
