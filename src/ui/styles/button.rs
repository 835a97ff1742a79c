// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action button in the brand color.
///
/// Disabled keeps the brand hue at reduced opacity so the control still reads
/// as the submit button while a submission is in flight.
pub fn primary(brand: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_alpha, shadow) = match status {
            button::Status::Active => (brand, opacity::OPAQUE, shadow::MD),
            button::Status::Hovered => (lighten(brand), opacity::OPAQUE, shadow::LG),
            button::Status::Pressed => (brand, opacity::OPAQUE, Shadow::default()),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..brand
                },
                opacity::OVERLAY_STRONG,
                Shadow::default(),
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color {
                a: text_alpha,
                ..palette::WHITE
            },
            border: Border {
                color: background,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow,
            snap: true,
        }
    }
}

fn lighten(color: Color) -> Color {
    const AMOUNT: f32 = 0.12;
    Color {
        r: (color.r + AMOUNT).min(1.0),
        g: (color.g + AMOUNT).min(1.0),
        b: (color.b + AMOUNT).min(1.0),
        a: color.a,
    }
}
