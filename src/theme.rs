// Theme system for the TUI
//
// Exactly two display modes exist, both light: "classic" (warm cream with the
// school's green) and "modern" (cool white with slate blue). The active kind
// is persisted through the config file and resolved here into a palette of
// ready-to-use colors.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// The two display modes the theme switcher flips between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Classic,
    Modern,
}

impl ThemeKind {
    /// Parse the persisted config value; anything unrecognized falls back
    /// to the default ("classic")
    pub fn from_config(value: &str) -> Self {
        match value {
            "modern" => ThemeKind::Modern,
            _ => ThemeKind::Classic,
        }
    }

    /// Value written back to the config file
    pub fn as_config(&self) -> &'static str {
        match self {
            ThemeKind::Classic => "classic",
            ThemeKind::Modern => "modern",
        }
    }

    /// Display name for the status bar label
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKind::Classic => "Classic",
            ThemeKind::Modern => "Modern",
        }
    }

    /// Flip to the other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Classic => ThemeKind::Modern,
            ThemeKind::Modern => ThemeKind::Classic,
        }
    }
}

/// Complete resolved theme ready for use in the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub muted: Color,
    pub status_bar: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Feedback Colors ─────────────────────────────────────
    pub error: Color,
    pub success: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Resolve a theme kind into its palette
    pub fn resolve(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Classic => Self::classic(),
            ThemeKind::Modern => Self::modern(),
        }
    }

    /// Warm cream and school green
    fn classic() -> Self {
        Self {
            name: "Classic",
            background: Color::Rgb(250, 246, 237),
            foreground: Color::Rgb(59, 47, 37),
            title: Color::Rgb(27, 94, 52),
            border: Color::Rgb(173, 160, 140),
            border_focused: Color::Rgb(27, 94, 52),
            accent: Color::Rgb(154, 104, 28),
            muted: Color::Rgb(132, 120, 104),
            status_bar: Color::Rgb(92, 80, 65),
            selection: Color::Rgb(221, 232, 214),
            selection_fg: Color::Rgb(27, 60, 38),
            error: Color::Rgb(168, 50, 42),
            success: Color::Rgb(33, 122, 62),
            border_type: BorderType::Plain,
        }
    }

    /// Cool white and slate blue
    fn modern() -> Self {
        Self {
            name: "Modern",
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(40, 50, 62),
            title: Color::Rgb(29, 78, 137),
            border: Color::Rgb(168, 180, 194),
            border_focused: Color::Rgb(29, 78, 137),
            accent: Color::Rgb(13, 121, 134),
            muted: Color::Rgb(116, 128, 142),
            status_bar: Color::Rgb(71, 84, 100),
            selection: Color::Rgb(213, 226, 242),
            selection_fg: Color::Rgb(21, 50, 88),
            error: Color::Rgb(185, 49, 61),
            success: Color::Rgb(22, 136, 80),
            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(ThemeKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_config_value_falls_back_to_classic() {
        assert_eq!(ThemeKind::from_config("dark"), ThemeKind::Classic);
        assert_eq!(ThemeKind::from_config(""), ThemeKind::Classic);
        assert_eq!(ThemeKind::from_config("modern"), ThemeKind::Modern);
        assert_eq!(ThemeKind::from_config("classic"), ThemeKind::Classic);
    }

    #[test]
    fn toggle_flips_between_exactly_two_themes() {
        assert_eq!(ThemeKind::Classic.toggled(), ThemeKind::Modern);
        assert_eq!(ThemeKind::Modern.toggled(), ThemeKind::Classic);
        assert_eq!(ThemeKind::Classic.toggled().toggled(), ThemeKind::Classic);
    }

    #[test]
    fn config_value_round_trips() {
        for kind in [ThemeKind::Classic, ThemeKind::Modern] {
            assert_eq!(ThemeKind::from_config(kind.as_config()), kind);
        }
    }
}
