// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised card used for the form and the overlay cards.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the overlay cards.
pub fn scrim(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let scrim = colors.scrim;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scrim)),
        ..Default::default()
    }
}

/// Toast card with an accent border.
pub fn toast(colors: &ColorScheme, accent: Color) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_border_uses_accent() {
        let colors = ColorScheme::light();
        let style = toast(&colors, colors.success)(&Theme::Light);
        assert_eq!(style.border.color, colors.success);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn scrim_is_translucent() {
        let colors = ColorScheme::dark();
        let style = scrim(&colors)(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected a solid background");
        };
        assert!(color.a < 1.0);
    }
}
