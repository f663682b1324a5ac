//! Event system for calculator outcomes
//!
//! This module provides an in-process event bus that republishes what the
//! evaluator reports (results, invalid results, mode and theme changes) to
//! any number of subscribers without blocking the caller.
//!
//! # Architecture
//!
//! Each subscriber owns the receiving end of an unbounded crossbeam channel.
//! Emitting walks the subscriber list and sends a clone of the event; a
//! subscriber whose receiver has been dropped is removed on the next emit.
//! Receivers can be drained with `try_recv` from a synchronous UI loop.
//!
//! # Example
//!
//! ```
//! use libbasedcalc::service::events::{Event, EventBus};
//!
//! let event_bus = EventBus::new();
//! let receiver = event_bus.subscribe();
//!
//! event_bus.emit(Event::DonationRequested { amount: 16.0 });
//!
//! assert!(matches!(
//!     receiver.try_recv(),
//!     Ok(Event::DonationRequested { .. })
//! ));
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::evaluator::{Input, Mode};
use crate::theme::Theme;

/// Event receiver type alias
pub type EventReceiver = Receiver<Event>;

/// Event bus for distributing calculator events
///
/// Cloning the bus shares the subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Sender<Event>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events
    ///
    /// The receiver gets every event emitted after this call.
    pub fn subscribe(&self) -> EventReceiver {
        let (tx, rx) = unbounded();
        self.lock().push(tx);
        rx
    }

    /// Emit an event to all subscribers
    ///
    /// Never blocks. With no subscribers the event is dropped.
    pub fn emit(&self, event: Event) {
        self.lock()
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Number of subscribers still registered
    ///
    /// Dropped receivers are only noticed on the next emit.
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Sender<Event>>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Events emitted by the calculator service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// `equals` succeeded; the donation prompt should open
    DonationRequested {
        /// Absolute value of the result
        amount: f64,
    },

    /// The display switched to the error marker
    InvalidResult {
        /// Input that produced it
        input: Input,
    },

    ModeChanged { mode: Mode },

    ThemeChanged { theme: Theme },
}
