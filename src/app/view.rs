// SPDX-License-Identifier: MPL-2.0
//! Composes the page layers.

use super::{App, Message};
use crate::ui::shapes::Backdrop;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{form_card, overlay, toast, ViewContext};
use iced::widget::Stack;
use iced::{Element, Length};

/// Backdrop, form, then the overlay and toast when visible.
pub fn view(app: &App) -> Element<'_, Message> {
    let ctx = ViewContext {
        page: &app.page,
        i18n: &app.i18n,
        colors: &app.colors,
        notice: app.notice.as_deref(),
    };

    let spinner_rotation = app
        .sequencer
        .as_ref()
        .map_or(0.0, |sequencer| AnimatedSpinner::rotation_at(sequencer.now()));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Backdrop::new(app.shapes.poses(), &app.colors).into_element())
        .push(form_card::view(&ctx));

    if let Some(overlay) = overlay::view(&ctx, spinner_rotation) {
        layers = layers.push(overlay);
    }
    if let Some(toast) = toast::view(&ctx) {
        layers = layers.push(toast);
    }

    layers.into()
}
