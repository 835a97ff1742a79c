// SPDX-License-Identifier: MPL-2.0
//! Canvas program painting the backdrop shapes.

use super::{Pose, ShapeKind, ShapeDef, Tint};
use crate::ui::design_tokens::{border, opacity};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Ring outline thickness relative to the radius.
const RING_WIDTH_RATIO: f32 = 0.18;

/// Full-size backdrop: a solid fill with the shapes drawn on top.
#[derive(Debug, Clone)]
pub struct Backdrop {
    shapes: Vec<(ShapeDef, Pose)>,
    fill: Color,
    brand: Color,
    accent: Color,
}

impl Backdrop {
    #[must_use]
    pub fn new(shapes: impl IntoIterator<Item = (ShapeDef, Pose)>, colors: &ColorScheme) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
            fill: colors.backdrop,
            brand: colors.brand,
            accent: colors.accent,
        }
    }

    fn color(&self, tint: Tint) -> Color {
        let base = match tint {
            Tint::Brand => self.brand,
            Tint::Accent => self.accent,
        };
        Color {
            a: opacity::SHAPE,
            ..base
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.fill);

        for (def, pose) in &self.shapes {
            let color = self.color(def.tint);
            let origin = Vector::new(
                def.anchor.0 * bounds.width + pose.x,
                def.anchor.1 * bounds.height + pose.y,
            );

            frame.with_save(|frame| {
                frame.translate(origin);
                frame.rotate(pose.rotate.to_radians());
                frame.scale(pose.scale);
                draw_shape(frame, def.kind, def.radius, color);
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Draws one shape centred on the frame origin.
fn draw_shape(frame: &mut Frame, kind: ShapeKind, radius: f32, color: Color) {
    match kind {
        ShapeKind::Disc => frame.fill(&Path::circle(Point::ORIGIN, radius), color),
        ShapeKind::Ring => {
            let width = (radius * RING_WIDTH_RATIO).max(border::WIDTH_MD);
            frame.stroke(
                &Path::circle(Point::ORIGIN, radius - width / 2.0),
                Stroke::default().with_width(width).with_color(color),
            );
        }
        ShapeKind::Square => {
            let side = radius * 2.0;
            frame.fill(
                &Path::rectangle(Point::new(-radius, -radius), Size::new(side, side)),
                color,
            );
        }
    }
}

const _: () = {
    assert!(RING_WIDTH_RATIO > 0.0 && RING_WIDTH_RATIO < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::shapes::{ShapeField, DEFAULT_SHAPES};

    #[test]
    fn shapes_are_translucent() {
        let backdrop = Backdrop::new(Vec::<(ShapeDef, Pose)>::new(), &ColorScheme::light());
        assert_eq!(backdrop.color(Tint::Brand).a, opacity::SHAPE);
        assert_eq!(backdrop.color(Tint::Accent).a, opacity::SHAPE);
    }

    #[test]
    fn tints_map_to_scheme_colors() {
        let colors = ColorScheme::dark();
        let backdrop = Backdrop::new(Vec::<(ShapeDef, Pose)>::new(), &colors);
        let brand = backdrop.color(Tint::Brand);
        assert_eq!((brand.r, brand.g, brand.b), (colors.brand.r, colors.brand.g, colors.brand.b));
        let accent = backdrop.color(Tint::Accent);
        assert_eq!(
            (accent.r, accent.g, accent.b),
            (colors.accent.r, colors.accent.g, colors.accent.b)
        );
    }

    #[test]
    fn backdrop_takes_every_field_pose() {
        let field = ShapeField::at_rest(&DEFAULT_SHAPES);
        let backdrop = Backdrop::new(field.poses(), &ColorScheme::light());
        assert_eq!(backdrop.shapes.len(), DEFAULT_SHAPES.len());
    }
}
