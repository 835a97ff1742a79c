// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissing confirmation toast.

use super::ViewContext;
use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, row, text};
use iced::{alignment, Element, Length};

const CHECK_MARK: &str = "\u{2713}";

/// Renders the toast in the bottom-right corner, or nothing while hidden.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let page = ctx.page;
    if !page.toast_visible() {
        return None;
    }
    let colors = ctx.colors;

    let content = row![
        text(CHECK_MARK).size(typography::TITLE_MD).color(colors.success),
        container(
            text(page.toast_text().to_string())
                .size(typography::BODY)
                .color(colors.text_primary),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    let toast = container(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(colors, colors.success));

    Some(
        container(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}
