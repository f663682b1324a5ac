//! Themes and the style table
//!
//! Every visual difference between themes lives in one static table keyed
//! by [`Theme`] and [`Element`]. Front-ends call [`resolve`] and translate
//! the returned [`StyleDescriptor`] into whatever their toolkit uses; they
//! never branch on the theme themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    CuteAnimals,
    Glassmorphism,
    Terminal,
    #[serde(rename = "macos")]
    MacOs,
    Ios,
    Retro,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::CuteAnimals,
        Theme::Glassmorphism,
        Theme::Terminal,
        Theme::MacOs,
        Theme::Ios,
        Theme::Retro,
    ];

    /// Stable identifier used in preference files and on the command line
    pub fn id(self) -> &'static str {
        match self {
            Theme::CuteAnimals => "cute-animals",
            Theme::Glassmorphism => "glassmorphism",
            Theme::Terminal => "terminal",
            Theme::MacOs => "macos",
            Theme::Ios => "ios",
            Theme::Retro => "retro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::CuteAnimals => "Cute Animals",
            Theme::Glassmorphism => "Glass",
            Theme::Terminal => "Terminal",
            Theme::MacOs => "macOS",
            Theme::Ios => "iOS",
            Theme::Retro => "Retro",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::CuteAnimals => "🐾 Warm & playful",
            Theme::Glassmorphism => "Modern & premium",
            Theme::Terminal => "Hacker aesthetic",
            Theme::MacOs => "Clean & minimal",
            Theme::Ios => "Mobile first",
            Theme::Retro => "80s vibes",
        }
    }

    /// Next theme in declaration order, wrapping around
    pub fn next(self) -> Self {
        let index = Theme::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Theme::ALL[(index + 1) % Theme::ALL.len()]
    }

    pub fn decor(self) -> ThemeDecor {
        match self {
            Theme::CuteAnimals => ThemeDecor {
                cursor: None,
                ornament: Some("🐾"),
                caption: Some("🐶 Press = to help animals! 🐱"),
            },
            Theme::Terminal => ThemeDecor {
                cursor: Some("_"),
                ornament: None,
                caption: None,
            },
            _ => ThemeDecor::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Theme::ALL.iter().map(|t| t.id()).collect();
                format!(
                    "Invalid theme: '{}'. Valid options: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Themed parts of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Calculator body
    Panel,
    /// Result display
    Display,
    NumberKey,
    OperatorKey,
    ScientificKey,
    /// Donation receipt and other overlays
    Modal,
    /// Donor list and goal gauge
    Sidebar,
    /// Amounts, gauge fill, highlights
    Accent,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::Panel,
        Element::Display,
        Element::NumberKey,
        Element::OperatorKey,
        Element::ScientificKey,
        Element::Modal,
        Element::Sidebar,
        Element::Accent,
    ];

    fn index(self) -> usize {
        match self {
            Element::Panel => 0,
            Element::Display => 1,
            Element::NumberKey => 2,
            Element::OperatorKey => 3,
            Element::ScientificKey => 4,
            Element::Modal => 5,
            Element::Sidebar => 6,
            Element::Accent => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderKind {
    Plain,
    Rounded,
    Double,
    Thick,
}

/// Toolkit-neutral description of how an element looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub fg: Rgb,
    pub bg: Rgb,
    pub border: BorderKind,
    pub bold: bool,
    pub monospace: bool,
    /// Glass-style panels: let the background show through
    pub translucent: bool,
}

/// Per-theme decorations that are not colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeDecor {
    /// Appended to the display text
    pub cursor: Option<&'static str>,
    /// Drawn in the panel corner and around the donation message
    pub ornament: Option<&'static str>,
    /// Line under the keypad
    pub caption: Option<&'static str>,
}

const fn style(fg: Rgb, bg: Rgb, border: BorderKind, bold: bool) -> StyleDescriptor {
    StyleDescriptor {
        fg,
        bg,
        border,
        bold,
        monospace: false,
        translucent: false,
    }
}

const fn mono(s: StyleDescriptor) -> StyleDescriptor {
    StyleDescriptor {
        monospace: true,
        ..s
    }
}

const fn glass(s: StyleDescriptor) -> StyleDescriptor {
    StyleDescriptor {
        translucent: true,
        ..s
    }
}

// Row order follows Element::index
const CUTE_ANIMALS: [StyleDescriptor; 8] = [
    style(Rgb(92, 64, 51), Rgb(255, 244, 230), BorderKind::Rounded, false),
    style(Rgb(92, 64, 51), Rgb(255, 250, 240), BorderKind::Rounded, true),
    style(Rgb(92, 64, 51), Rgb(255, 228, 196), BorderKind::Rounded, true),
    style(Rgb(255, 255, 255), Rgb(244, 143, 177), BorderKind::Rounded, true),
    style(Rgb(92, 64, 51), Rgb(255, 218, 185), BorderKind::Rounded, false),
    style(Rgb(92, 64, 51), Rgb(255, 248, 240), BorderKind::Rounded, false),
    style(Rgb(92, 64, 51), Rgb(255, 244, 230), BorderKind::Rounded, false),
    style(Rgb(233, 30, 99), Rgb(255, 244, 230), BorderKind::Rounded, true),
];

const GLASSMORPHISM: [StyleDescriptor; 8] = [
    glass(style(Rgb(240, 240, 255), Rgb(40, 30, 80), BorderKind::Rounded, false)),
    glass(style(Rgb(255, 255, 255), Rgb(60, 50, 110), BorderKind::Rounded, true)),
    glass(style(Rgb(240, 240, 255), Rgb(70, 60, 120), BorderKind::Rounded, true)),
    glass(style(Rgb(255, 255, 255), Rgb(124, 77, 255), BorderKind::Rounded, true)),
    glass(style(Rgb(220, 220, 245), Rgb(80, 70, 130), BorderKind::Rounded, false)),
    glass(style(Rgb(240, 240, 255), Rgb(50, 40, 95), BorderKind::Rounded, false)),
    glass(style(Rgb(240, 240, 255), Rgb(40, 30, 80), BorderKind::Rounded, false)),
    glass(style(Rgb(179, 136, 255), Rgb(40, 30, 80), BorderKind::Rounded, true)),
];

const TERMINAL: [StyleDescriptor; 8] = [
    mono(style(Rgb(0, 255, 65), Rgb(0, 0, 0), BorderKind::Plain, false)),
    mono(style(Rgb(0, 255, 65), Rgb(0, 17, 0), BorderKind::Plain, true)),
    mono(style(Rgb(0, 255, 65), Rgb(0, 0, 0), BorderKind::Plain, false)),
    mono(style(Rgb(0, 0, 0), Rgb(0, 255, 65), BorderKind::Plain, true)),
    mono(style(Rgb(0, 200, 50), Rgb(0, 0, 0), BorderKind::Plain, false)),
    mono(style(Rgb(0, 255, 65), Rgb(0, 0, 0), BorderKind::Double, false)),
    mono(style(Rgb(0, 200, 50), Rgb(0, 0, 0), BorderKind::Plain, false)),
    mono(style(Rgb(173, 255, 47), Rgb(0, 0, 0), BorderKind::Plain, true)),
];

const MACOS: [StyleDescriptor; 8] = [
    style(Rgb(255, 255, 255), Rgb(40, 40, 40), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(28, 28, 28), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(80, 80, 80), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(255, 159, 10), BorderKind::Rounded, true),
    style(Rgb(255, 255, 255), Rgb(60, 60, 60), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(50, 50, 50), BorderKind::Rounded, false),
    style(Rgb(220, 220, 220), Rgb(36, 36, 36), BorderKind::Rounded, false),
    style(Rgb(255, 159, 10), Rgb(40, 40, 40), BorderKind::Rounded, true),
];

const IOS: [StyleDescriptor; 8] = [
    style(Rgb(255, 255, 255), Rgb(0, 0, 0), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(0, 0, 0), BorderKind::Rounded, false),
    style(Rgb(255, 255, 255), Rgb(51, 51, 51), BorderKind::Rounded, true),
    style(Rgb(255, 255, 255), Rgb(255, 149, 0), BorderKind::Rounded, true),
    style(Rgb(0, 0, 0), Rgb(165, 165, 165), BorderKind::Rounded, true),
    style(Rgb(255, 255, 255), Rgb(28, 28, 30), BorderKind::Rounded, false),
    style(Rgb(235, 235, 245), Rgb(0, 0, 0), BorderKind::Rounded, false),
    style(Rgb(255, 149, 0), Rgb(0, 0, 0), BorderKind::Rounded, true),
];

const RETRO: [StyleDescriptor; 8] = [
    style(Rgb(51, 34, 17), Rgb(222, 205, 170), BorderKind::Thick, false),
    mono(style(Rgb(34, 51, 17), Rgb(155, 188, 15), BorderKind::Thick, true)),
    style(Rgb(51, 34, 17), Rgb(200, 180, 140), BorderKind::Thick, true),
    style(Rgb(255, 255, 255), Rgb(178, 34, 34), BorderKind::Thick, true),
    style(Rgb(51, 34, 17), Rgb(180, 160, 120), BorderKind::Thick, false),
    style(Rgb(51, 34, 17), Rgb(232, 220, 190), BorderKind::Double, false),
    style(Rgb(51, 34, 17), Rgb(222, 205, 170), BorderKind::Thick, false),
    style(Rgb(178, 34, 34), Rgb(222, 205, 170), BorderKind::Thick, true),
];

fn table(theme: Theme) -> &'static [StyleDescriptor; 8] {
    match theme {
        Theme::CuteAnimals => &CUTE_ANIMALS,
        Theme::Glassmorphism => &GLASSMORPHISM,
        Theme::Terminal => &TERMINAL,
        Theme::MacOs => &MACOS,
        Theme::Ios => &IOS,
        Theme::Retro => &RETRO,
    }
}

/// Look up the style for `element` under `theme`
pub fn resolve(theme: Theme, element: Element) -> StyleDescriptor {
    table(theme)[element.index()]
}
