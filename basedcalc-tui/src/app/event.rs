//! Event handling infrastructure
//!
//! Merges terminal events (keyboard, resize, tick) with calculator service
//! events from the EventBus into a single stream for the main loop.

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use libbasedcalc::service::events::Event as ServiceEvent;
use std::time::Duration;

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Nothing happened within the tick rate
    Tick,

    /// Calculator service event (from EventBus)
    Service(ServiceEvent),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
            TuiEvent::Service(event) => Action::SetStatus(status_line(&event)),
        }
    }
}

/// Status bar text for a service event
fn status_line(event: &ServiceEvent) -> String {
    match event {
        ServiceEvent::DonationRequested { amount } => {
            format!("Result ready: ${:.2} suggested donation", amount)
        }
        ServiceEvent::InvalidResult { input } => format!("{} gave an invalid result", input),
        ServiceEvent::ModeChanged { mode } => format!("{} mode", mode),
        ServiceEvent::ThemeChanged { theme } => format!("Theme: {}", theme.label()),
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    service_events: Option<Receiver<ServiceEvent>>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            service_events: None,
        }
    }

    /// Also deliver events from a service subscription
    pub fn with_service_events(mut self, receiver: Receiver<ServiceEvent>) -> Self {
        self.service_events = Some(receiver);
        self
    }

    /// Next event. Pending service events come first; otherwise blocks up
    /// to the tick rate waiting for terminal input and yields `Tick` on
    /// timeout.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if let Some(event) = self
            .service_events
            .as_ref()
            .and_then(|rx| rx.try_recv().ok())
        {
            return Ok(TuiEvent::Service(event));
        }

        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libbasedcalc::service::events::EventBus;
    use libbasedcalc::{Mode, Theme};

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
        assert!(handler.service_events.is_none());
    }

    #[test]
    fn test_service_events_come_first() {
        let bus = EventBus::new();
        let handler = EventHandler::new(250).with_service_events(bus.subscribe());

        bus.emit(ServiceEvent::ModeChanged {
            mode: Mode::Scientific,
        });

        match handler.next().unwrap() {
            TuiEvent::Service(ServiceEvent::ModeChanged { mode }) => {
                assert_eq!(mode, Mode::Scientific)
            }
            other => panic!("Expected service event, got {:?}", other),
        }
    }

    #[test]
    fn test_service_event_becomes_status() {
        let action: Action = TuiEvent::Service(ServiceEvent::ThemeChanged {
            theme: Theme::Glassmorphism,
        })
        .into();
        assert_eq!(action, Action::SetStatus("Theme: Glass".to_string()));

        let action: Action =
            TuiEvent::Service(ServiceEvent::DonationRequested { amount: 16.0 }).into();
        assert_eq!(
            action,
            Action::SetStatus("Result ready: $16.00 suggested donation".to_string())
        );
    }
}
