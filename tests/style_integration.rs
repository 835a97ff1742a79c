// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_apply::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_apply::ui::styles::{button, container};
    use iced_apply::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        let colors = ColorScheme::dark();
        let theme = Theme::Dark;

        let _ = button::primary(colors.brand)(&theme, iced::widget::button::Status::Active);
        let _ = container::card(&colors)(&theme);
        let _ = container::scrim(&colors)(&theme);
        let _ = container::toast(&colors, colors.success)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::SHAPE;
        let _ = sizing::FORM_WIDTH;
    }

    #[test]
    fn explicit_modes_pick_matching_schemes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(
            ColorScheme::for_mode(ThemeMode::Dark).backdrop,
            ColorScheme::dark().backdrop
        );
    }

    #[test]
    fn overlay_cards_fit_inside_minimum_window() {
        use iced_apply::app::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
        assert!(sizing::FORM_WIDTH + spacing::LG * 2.0 < MIN_WINDOW_WIDTH);
        assert!(sizing::OVERLAY_CARD_WIDTH < MIN_WINDOW_WIDTH);
        assert!(sizing::TOAST_WIDTH < MIN_WINDOW_HEIGHT);
    }
}
