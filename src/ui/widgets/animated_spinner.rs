// SPDX-License-Identifier: MPL-2.0
//! Animated spinner shown on the loading card.

use crate::ui::design_tokens::{border, opacity, sizing};
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn per this period.
const TURN_PERIOD: Duration = Duration::from_millis(1_200);

/// Half-ring arc turning around a faint full ring.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Spinner angle after `elapsed` time spinning.
    #[must_use]
    pub fn rotation_at(elapsed: Duration) -> f32 {
        let turns = elapsed.as_secs_f32() / TURN_PERIOD.as_secs_f32();
        turns.fract() * TAU
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let width = border::WIDTH_MD * 1.5;
                let radius = frame.width().min(frame.height()) / 2.0 - width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(width).with_color(Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..self.color
                    }),
                );

                // Start at twelve o'clock
                let start = self.rotation - PI / 2.0;
                let arc = Path::new(|builder| {
                    builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + PI),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_every_period() {
        assert_eq!(AnimatedSpinner::rotation_at(Duration::ZERO), 0.0);
        let quarter = AnimatedSpinner::rotation_at(TURN_PERIOD / 4);
        assert!((quarter - TAU / 4.0).abs() < 1e-3);
        let wrapped = AnimatedSpinner::rotation_at(TURN_PERIOD * 2 + TURN_PERIOD / 4);
        assert!((wrapped - quarter).abs() < 1e-3);
    }
}
