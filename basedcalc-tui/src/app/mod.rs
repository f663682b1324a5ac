//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - Keymap: which key means which action, given the current state
//!
//! Anything that touches the calculator service or the disk happens in
//! the main loop, which feeds the results back in as further actions.

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
