//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no I/O. Pressing calculator keys or
//! cycling the theme is done by the main loop, which reports back with
//! `DisplayUpdated`, `DonationPrompted` and `ThemeChanged`.

use super::actions::Action;
use super::keymap::map_key;
use super::state::{AppState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        // Handled by the service; the snapshot comes back as DisplayUpdated
        Action::Calculator(_) => state,

        Action::DisplayUpdated(calculator) => AppState { calculator, ..state },

        // === Theme ===
        Action::CycleTheme => state,

        Action::ThemeChanged(theme) => AppState { theme, ..state },

        // === Donation ===
        Action::DonationPrompted(prompt) => AppState {
            donation: Some(prompt),
            help_visible: false,
            ..state
        },

        Action::ConfirmDonation => match state.donation {
            Some(ref prompt) => {
                let message = format!(
                    "Thank you! Complete your {} donation at {}",
                    prompt.formatted_amount(),
                    prompt.payment_link(&state.config.payment_url)
                );
                AppState {
                    donation: None,
                    status: StatusBarState {
                        message: Some(message),
                    },
                    ..state
                }
            }
            None => state,
        },

        Action::DismissDonation => AppState {
            donation: None,
            ..state
        },

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState { error: None, ..state },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}
