//! Cosmetic themes.
//!
//! A theme maps to a terminal color palette for the timer screen. The
//! `blank` theme strips decoration entirely and hides the ambience pane.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Warm default palette.
    #[default]
    Default,
    /// Soft greens and sky blues.
    Ghibli,
    /// Gold and deep red.
    Myanmar,
    /// No decoration at all.
    Blank,
}

/// Colors used by the timer screen.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Accent for the active phase and borders.
    pub accent: Color,
    /// Work phase color.
    pub work: Color,
    /// Break phase color.
    pub breaks: Color,
    /// Dim/secondary text.
    pub dim: Color,
}

impl Theme {
    /// All known themes, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Default, Self::Ghibli, Self::Myanmar, Self::Blank]
    }

    /// Parse a theme from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ghibli" => Some(Self::Ghibli),
            "myanmar" => Some(Self::Myanmar),
            "blank" => Some(Self::Blank),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ghibli => "ghibli",
            Self::Myanmar => "myanmar",
            Self::Blank => "blank",
        }
    }

    /// Terminal palette for this theme.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        match self {
            Self::Default => Palette {
                accent: Color::Cyan,
                work: Color::Red,
                breaks: Color::Green,
                dim: Color::DarkGray,
            },
            Self::Ghibli => Palette {
                accent: Color::LightGreen,
                work: Color::LightBlue,
                breaks: Color::Green,
                dim: Color::Gray,
            },
            Self::Myanmar => Palette {
                accent: Color::Yellow,
                work: Color::LightRed,
                breaks: Color::LightYellow,
                dim: Color::DarkGray,
            },
            Self::Blank => Palette {
                accent: Color::Reset,
                work: Color::Reset,
                breaks: Color::Reset,
                dim: Color::DarkGray,
            },
        }
    }

    /// Whether the ambience pane is shown under this theme.
    #[must_use]
    pub const fn shows_ambience_pane(&self) -> bool {
        !matches!(self, Self::Blank)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::parse(theme.display_name()), Some(theme));
        }
        assert_eq!(Theme::parse("GHIBLI"), Some(Theme::Ghibli));
        assert_eq!(Theme::parse("neon"), None);
    }

    #[test]
    fn test_blank_hides_ambience() {
        assert!(!Theme::Blank.shows_ambience_pane());
        assert!(Theme::Default.shows_ambience_pane());
    }

    #[test]
    fn test_serde_names_match_parse() {
        let json = serde_json::to_string(&Theme::Myanmar).unwrap();
        assert_eq!(json, "\"myanmar\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::Myanmar);
    }
}
