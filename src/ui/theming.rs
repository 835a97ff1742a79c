// SPDX-License-Identifier: MPL-2.0
//! Theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color roles used by the page views.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub backdrop: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: palette::GRAY_100,
            surface: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand: palette::PRIMARY_500,
            accent: palette::GOLD_500,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: palette::PRIMARY_700,
            surface: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand: palette::PRIMARY_400,
            accent: palette::GOLD_400,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for ThemeMode {
    type Err = String;

    /// Case-insensitive `light`, `dark` or `system`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode `{other}`")),
        }
    }
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme matching the effective mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_backdrop() {
        let scheme = ColorScheme::light();
        assert!(scheme.backdrop.r > 0.8);
    }

    #[test]
    fn dark_scheme_uses_brand_backdrop() {
        let scheme = ColorScheme::dark();
        assert!(scheme.backdrop.b > scheme.backdrop.r);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System depends on the host; only check it does not panic.
        let _ = ThemeMode::System.theme();
    }

    #[test]
    fn theme_mode_parses_any_case() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" LIGHT ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
