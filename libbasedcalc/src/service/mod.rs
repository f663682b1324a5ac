//! Service layer for basedcalc
//!
//! `CalculatorService` is the one object a front-end talks to. It owns the
//! evaluator, the theme context and the event bus, turns evaluator signals
//! into [`DonationPrompt`]s and republishes everything on the bus.
//!
//! # Example
//!
//! ```
//! use libbasedcalc::evaluator::{BinaryOp, Digit, Input};
//! use libbasedcalc::preferences::{MemoryPreferenceStore, ThemeContext};
//! use libbasedcalc::service::CalculatorService;
//!
//! let theme = ThemeContext::load(Box::new(MemoryPreferenceStore::new()));
//! let mut service = CalculatorService::new(theme);
//!
//! service.press(Input::Digit(Digit::new(2).unwrap()));
//! service.press(Input::Binary(BinaryOp::Add));
//! service.press(Input::Digit(Digit::new(2).unwrap()));
//! let prompt = service.press(Input::Equals).unwrap();
//!
//! assert_eq!(prompt.formatted_amount(), "$4.00");
//! assert_eq!(service.snapshot().display, "4");
//! ```

pub mod events;

use tracing::{debug, info, warn};

use self::events::{Event, EventBus, EventReceiver};
use crate::donation::DonationPrompt;
use crate::error::PreferenceError;
use crate::evaluator::{Calculator, CalculatorView, Input, Signal};
use crate::preferences::ThemeContext;
use crate::theme::Theme;

/// Facade over the evaluator, theme context and event bus
pub struct CalculatorService {
    calculator: Calculator,
    theme: ThemeContext,
    event_bus: EventBus,
}

impl CalculatorService {
    pub fn new(theme: ThemeContext) -> Self {
        Self {
            calculator: Calculator::new(),
            theme,
            event_bus: EventBus::new(),
        }
    }

    /// Feed one input to the evaluator.
    ///
    /// Returns a prompt when the input was a successful `equals`.
    pub fn press(&mut self, input: Input) -> Option<DonationPrompt> {
        let mode_before = self.calculator.mode();
        let signal = self.calculator.press(input);
        debug!(%input, display = %self.calculator.display(), "Handled input");

        if self.calculator.mode() != mode_before {
            self.event_bus.emit(Event::ModeChanged {
                mode: self.calculator.mode(),
            });
        }

        match signal {
            Some(Signal::Donate { amount }) => {
                info!(amount, "Calculation complete, requesting donation");
                self.event_bus.emit(Event::DonationRequested { amount });
                Some(DonationPrompt::now(amount))
            }
            Some(Signal::InvalidResult) => {
                debug!(%input, "Invalid result");
                self.event_bus.emit(Event::InvalidResult { input });
                None
            }
            None => None,
        }
    }

    pub fn snapshot(&self) -> CalculatorView {
        self.calculator.view()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Switch and persist the theme.
    ///
    /// The switch happens even if persisting fails; the error is returned
    /// so the caller can tell the user.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        let result = self.theme.set_theme(theme);
        if let Err(ref e) = result {
            warn!("Failed to persist theme '{}': {}", theme, e);
        }
        self.event_bus.emit(Event::ThemeChanged { theme });
        result
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
