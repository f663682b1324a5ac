//! Theme styles in ratatui terms

use libbasedcalc::theme::{resolve, BorderKind, Rgb, StyleDescriptor};
use libbasedcalc::{Element, Theme};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn border_type(kind: BorderKind) -> BorderType {
    match kind {
        BorderKind::Plain => BorderType::Plain,
        BorderKind::Rounded => BorderType::Rounded,
        BorderKind::Double => BorderType::Double,
        BorderKind::Thick => BorderType::Thick,
    }
}

/// Convert a descriptor. With colors off only the modifiers survive.
///
/// Translucent styles keep the terminal background.
pub fn to_style(descriptor: StyleDescriptor, colors: bool) -> Style {
    let mut style = Style::default();
    if colors {
        style = style.fg(color(descriptor.fg));
        if !descriptor.translucent {
            style = style.bg(color(descriptor.bg));
        }
    }
    if descriptor.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Style of `element` under `theme`
pub fn element_style(theme: Theme, element: Element, colors: bool) -> Style {
    to_style(resolve(theme, element), colors)
}

/// Bordered block styled for `element`
pub fn themed_block<'a>(theme: Theme, element: Element, colors: bool, title: String) -> Block<'a> {
    let descriptor = resolve(theme, element);
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type(descriptor.border))
        .style(to_style(descriptor, colors))
}
