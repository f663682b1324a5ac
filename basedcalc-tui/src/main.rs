//! basedcalc - themeable terminal calculator
//!
//! Every successful `=` suggests donating the result to an animal welfare
//! fund. Theme choice is remembered between runs.

use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use basedcalc_tui::{
    app::{
        event::{EventHandler, TuiEvent},
        keymap::map_key,
        reduce, Action, AppState,
    },
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libbasedcalc::{
    config::{resolve_data_path, Config},
    logging::{self, LogFormat},
    service::CalculatorService,
    BasedcalcError, DonationSummary, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    Theme, ThemeContext,
};

#[derive(Parser, Debug)]
#[command(name = "basedcalc")]
#[command(version)]
#[command(about = "Themeable terminal calculator that turns results into donations")]
#[command(long_about = "\
basedcalc - themeable terminal calculator

DESCRIPTION:
    A pocket calculator with a basic and a scientific keypad. Operators
    are applied strictly left to right as they are entered, so
    5 + 3 * 2 = gives 16. Each successful result opens a prompt
    suggesting a donation of that amount.

USAGE:
    # Start with the saved theme
    basedcalc

    # Try a theme without saving it
    basedcalc --theme terminal --no-persist

    # Log debug output as JSON
    basedcalc --verbose --log-format json

THEMES:
    cute-animals (default), glassmorphism, terminal, macos, ios, retro
    Press F2 inside the app to cycle through them.

CONFIGURATION:
    Configuration file: ~/.config/basedcalc/config.toml
    Saved theme:        ~/.config/basedcalc/preferences.toml
    Log file:           ~/.local/share/basedcalc/basedcalc.log

    [ui]
    tick_rate_ms = 100
    colors = true

    [donation]
    payment_url = \"https://donate.stripe.com/test\"
    goal = 1000.0
    beneficiary = \"Animal Welfare Fund\"
    donors_file = \"~/.config/basedcalc/donors.json\"

EXIT CODES:
    0 - Clean exit
    1 - Terminal or preference error
    2 - Configuration error
    3 - Invalid argument
")]
struct Cli {
    /// Theme for this session
    #[arg(long, value_name = "THEME")]
    #[arg(help = "Theme to start with (overrides the saved theme, not persisted)")]
    theme: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    #[arg(help = "Path to config.toml (default: ~/.config/basedcalc/config.toml)")]
    config: Option<PathBuf>,

    /// Keep theme changes in memory only
    #[arg(long)]
    #[arg(help = "Do not read or write the saved theme")]
    no_persist: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    #[arg(help = "Log at debug level")]
    verbose: bool,

    /// Log output format
    #[arg(long, value_name = "FORMAT", env = "BASEDCALC_LOG_FORMAT")]
    #[arg(help = "Log format: text, json or pretty (default: text)")]
    log_format: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .with_env_overrides();

    let theme_override = cli
        .theme
        .as_deref()
        .map(|id| id.parse::<Theme>().map_err(BasedcalcError::InvalidInput))
        .transpose()?;

    let store: Box<dyn PreferenceStore + Send> = if cli.no_persist {
        Box::new(MemoryPreferenceStore::new())
    } else {
        Box::new(FilePreferenceStore::default_location().map_err(BasedcalcError::from)?)
    };
    let mut theme = ThemeContext::load(store);
    if let Some(t) = theme_override {
        theme.override_theme(t);
    }

    let donors = config.donation_summary().unwrap_or_else(|e| {
        warn!("Falling back to placeholder donors: {}", e);
        DonationSummary::seeded()
    });

    let state = AppState::from_config(&config, theme.theme(), donors);
    let service = CalculatorService::new(theme);
    info!(theme = %state.theme, "Starting basedcalc");

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, state, service);
    restore_terminal(terminal)?;

    result
}

/// Log to a file, since the alternate screen owns the terminal
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = logging::config_from_env(cli.verbose);
    if let Some(ref s) = cli.log_format {
        logging_config.format = s.parse::<LogFormat>().map_err(BasedcalcError::InvalidInput)?;
    }

    let log_path = resolve_data_path().ok().map(|dir| dir.join("basedcalc.log"));
    let (logging_config, fallback_reason) = logging_config.file_or_stderr(log_path);
    logging_config.init()?;

    if let Some(reason) = fallback_reason {
        error!("Logging errors to stderr only: {}", reason);
    }

    Ok(())
}

fn run_app(terminal: &mut Tui, mut state: AppState, mut service: CalculatorService) -> Result<()> {
    let event_handler =
        EventHandler::new(state.config.tick_rate_ms).with_service_events(service.subscribe());

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => match map_key(&state, key) {
                Some(action) => action,
                None => continue,
            },
            other => other.into(),
        };

        state = reduce(state, action.clone());

        // Side effects the reducer cannot perform
        match action {
            Action::Calculator(input) => {
                let prompt = service.press(input);
                state = reduce(state, Action::DisplayUpdated(service.snapshot()));
                if let Some(prompt) = prompt {
                    state = reduce(state, Action::DonationPrompted(prompt));
                }
            }
            Action::CycleTheme => {
                let next = service.theme().next();
                if let Err(e) = service.set_theme(next) {
                    state = reduce(
                        state,
                        Action::ShowError(format!("Could not save theme: {}", e)),
                    );
                }
                state = reduce(state, Action::ThemeChanged(service.theme()));
            }
            Action::ConfirmDonation => {
                info!(status = ?state.status.message, "Donation confirmed");
            }
            Action::DismissDonation => debug!("Donation prompt dismissed"),
            _ => {}
        }

        if state.should_quit {
            break;
        }
    }

    info!("Exiting basedcalc");
    Ok(())
}
