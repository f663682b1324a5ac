//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Every colour and border comes from the theme table through `style`.

pub mod keypad;
pub mod style;

use libbasedcalc::evaluator::format_number;
use libbasedcalc::{Element, Mode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Clear, Gauge, Paragraph, Wrap,
    },
    Frame,
};

use self::keypad::{keypad_rows, KeyCap};
use self::style::{element_style, themed_block};
use crate::app::AppState;

/// Below this width the donor sidebar is hidden
const SIDEBAR_MIN_WIDTH: u16 = 72;
const SIDEBAR_WIDTH: u16 = 30;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    if area.width >= SIDEBAR_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
            .split(area);
        render_calculator(frame, chunks[0], state);
        render_sidebar(frame, chunks[1], state);
    } else {
        render_calculator(frame, area, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref prompt) = state.donation {
        render_donation_overlay(frame, area, state, prompt);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Calculator body: display, keypad legend, status bar
fn render_calculator(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;
    let decor = state.theme.decor();

    let title = match decor.ornament {
        Some(ornament) => format!(" basedcalc {} ", ornament),
        None => " basedcalc ".to_string(),
    };
    let footer = format!(" {} · {} ", state.calculator.mode, state.theme.label());
    let panel = themed_block(state.theme, Element::Panel, colors, title)
        .title(Title::from(footer).position(Position::Bottom));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(3), // Status bar
        ])
        .split(inner);

    render_display(frame, chunks[0], state);
    render_keypad(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);
}

fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;
    let view = &state.calculator;
    let cursor = state.theme.decor().cursor.unwrap_or("");

    let memory = if view.memory != 0.0 {
        format!("M: {}", format_number(view.memory))
    } else {
        String::new()
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(memory),
            Span::raw("  "),
            Span::raw(view.pending.clone().unwrap_or_default()),
        ]),
        Line::from(Span::styled(
            format!("{}{}", view.display, cursor),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let display = Paragraph::new(lines)
        .block(themed_block(state.theme, Element::Display, colors, String::new()))
        .alignment(Alignment::Right);

    frame.render_widget(display, area);
}

fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;

    let mut lines: Vec<Line> = keypad_rows(state.calculator.mode)
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|cap| [key_cap(cap, state), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    if let Some(caption) = state.theme.decor().caption {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            caption,
            element_style(state.theme, Element::Accent, colors),
        )));
    }

    let keypad = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(keypad, area);
}

fn key_cap<'a>(cap: &KeyCap, state: &AppState) -> Span<'a> {
    let text = if cap.hint.is_empty() || cap.hint == cap.label {
        format!(" {:^4} ", cap.label)
    } else {
        format!(" {:^4}{:>4} ", cap.label, format!("[{}]", cap.hint))
    };
    Span::styled(
        text,
        element_style(state.theme, cap.element, state.config.colors_enabled),
    )
}

/// Status message, or key hints when there is none
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;

    let text = match state.status.message {
        Some(ref message) => message.clone(),
        None => match state.calculator.mode {
            Mode::Basic => "Tab: scientific | F1: help | F2: theme | q: quit".to_string(),
            Mode::Scientific => "Tab: basic | F1: help | F2: theme | q: quit".to_string(),
        },
    };

    let status = Paragraph::new(text)
        .block(themed_block(state.theme, Element::Panel, colors, String::new()))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

/// Donor list with progress toward the goal
fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;
    let accent = element_style(state.theme, Element::Accent, colors);

    let block = themed_block(
        state.theme,
        Element::Sidebar,
        colors,
        " Recent donors ".to_string(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Beneficiary + total
            Constraint::Length(3), // Goal gauge
            Constraint::Min(1),    // Donors
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(state.config.beneficiary.as_str()),
        Line::from(vec![
            Span::styled(format!("${:.2}", state.donors.total), accent),
            Span::raw(format!(" of ${:.0} raised", state.config.goal)),
        ]),
    ]);
    frame.render_widget(header, chunks[0]);

    let progress = state.goal_progress();
    let gauge = Gauge::default()
        .block(themed_block(state.theme, Element::Sidebar, colors, " Goal ".to_string()))
        .gauge_style(accent)
        .ratio(progress / 100.0)
        .label(format!("{:.0}%", progress));
    frame.render_widget(gauge, chunks[1]);

    let donors: Vec<Line> = if state.donors.donors.is_empty() {
        vec![Line::from("Be the first to donate!")]
    } else {
        state
            .donors
            .donors
            .iter()
            .map(|donor| {
                Line::from(vec![
                    Span::raw(donor.display_name().to_string()),
                    Span::raw(" "),
                    Span::styled(donor.formatted_amount(), accent),
                    Span::raw(format!(" {}", donor.time_ago)),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(donors).wrap(Wrap { trim: true }), chunks[2]);
}

fn render_donation_overlay(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    prompt: &libbasedcalc::DonationPrompt,
) {
    let colors = state.config.colors_enabled;
    let popup_area = centered_rect(60, 50, area);
    let accent = element_style(state.theme, Element::Accent, colors);
    let ornament = state.theme.decor().ornament.unwrap_or("");

    let text = vec![
        Line::from(Span::styled(
            format!("{} Thank you for calculating! {}", ornament, ornament),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your result: "),
            Span::styled(prompt.formatted_amount(), accent),
        ]),
        Line::from(format!(
            "Donate {} to {}?",
            prompt.formatted_amount(),
            state.config.beneficiary
        )),
        Line::from(""),
        Line::from(prompt.receipt_time()),
        Line::from(""),
        Line::from("Enter: donate | Esc: close"),
    ];

    let donation = Paragraph::new(text)
        .block(themed_block(state.theme, Element::Modal, colors, " Donate ".to_string()))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(donation, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let colors = state.config.colors_enabled;
    let popup_area = centered_rect(70, 80, area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1         - Toggle help"),
        Line::from("  F2         - Next theme"),
        Line::from("  Tab        - Basic / scientific"),
        Line::from(""),
        Line::from("Calculator:"),
        Line::from("  0-9 .      - Enter number"),
        Line::from("  + - * /    - Operators"),
        Line::from("  Enter =    - Equals"),
        Line::from("  Backspace  - Delete last"),
        Line::from("  Esc c      - Clear"),
    ];

    if state.calculator.mode == Mode::Scientific {
        help_text.extend([
            Line::from(""),
            Line::from("Scientific:"),
            Line::from("  ^ %        - Power, modulo"),
            Line::from("  s o t      - sin cos tan (degrees)"),
            Line::from("  n g        - ln log"),
            Line::from("  r w y      - √ x² x³"),
            Line::from("  i x a !    - 1/x e^x |x| factorial"),
            Line::from("  p e        - π e"),
            Line::from("  F5-F9      - MC MR MS M+ M-"),
        ]);
    }

    help_text.extend([Line::from(""), Line::from("Press Esc or F1 to close")]);

    let help = Paragraph::new(help_text)
        .block(themed_block(state.theme, Element::Modal, colors, " Help ".to_string()))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let colors = state.config.colors_enabled;
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(themed_block(state.theme, Element::Modal, colors, " Error ".to_string()))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
