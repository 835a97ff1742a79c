// SPDX-License-Identifier: MPL-2.0
//! Modal overlay with the loading and success cards.

use super::ViewContext;
use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{column, container, opaque, text, Column};
use iced::{alignment, Element, Length};

/// Renders the overlay, or nothing while it is hidden.
///
/// `spinner_rotation` is the current spinner angle in radians.
pub fn view<'a>(ctx: &ViewContext<'a>, spinner_rotation: f32) -> Option<Element<'a, Message>> {
    let page = ctx.page;
    if !page.overlay_visible() {
        return None;
    }

    let colors = ctx.colors;
    let card: Column<'a, Message> = if page.success_active() {
        column![
            text(ctx.i18n.tr("overlay-success-title"))
                .size(typography::TITLE_MD)
                .color(colors.success),
            text(page.overlay_message().to_string())
                .size(typography::BODY_LG)
                .color(colors.text_primary),
            text(page.overlay_email().to_string())
                .size(typography::BODY)
                .color(colors.text_secondary),
        ]
    } else if page.loading_active() {
        column![
            AnimatedSpinner::new(colors.brand, spinner_rotation).into_element(),
            text(ctx.i18n.tr("overlay-loading-title"))
                .size(typography::TITLE_MD)
                .color(colors.text_primary),
            text(ctx.i18n.tr("overlay-loading-message"))
                .size(typography::BODY)
                .color(colors.text_secondary),
        ]
    } else {
        Column::new()
    };

    let card = container(
        card.spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::OVERLAY_CARD_WIDTH))
    .padding(spacing::XL)
    .style(styles::container::card(colors));

    let scrim = container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::scrim(colors));

    // Swallow clicks so the form underneath stays inert.
    Some(opaque(scrim))
}
