//! Color theme and glyphs for the MBTI Snap TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use snap_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const PRIMARY_DIM: Color = Color::Rgb(147, 138, 169); // springViolet1

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const SUCCESS: Color = GREEN;
    pub const ERROR: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub blue: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            accent: colors::ACCENT,
            blue: colors::BLUE,
            success: colors::SUCCESS,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            accent: Color::Cyan,
            blue: Color::Blue,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for bars and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub bar_filled: &'static str,
    pub bar_empty: &'static str,
    pub bullet: &'static str,
    pub separator: &'static str,
    pub arrows: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            bar_filled: "#",
            bar_empty: "-",
            bullet: "*",
            separator: "|",
            arrows: "Up/Dn",
        }
    } else {
        Glyphs {
            selected: "▸",
            bar_filled: "█",
            bar_empty: "░",
            bullet: "•",
            separator: "│",
            arrows: "↑↓",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn code(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default().fg(palette.blue).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn option_selected(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
