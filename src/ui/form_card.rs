// SPDX-License-Identifier: MPL-2.0
//! The application form card.

use super::ViewContext;
use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, text_input, Column};
use iced::{alignment, Element, Length};

/// Renders the form card centred in the window.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let colors = ctx.colors;
    let form = &ctx.page.form;

    let title = text(i18n.tr("form-title"))
        .size(typography::TITLE_LG)
        .color(colors.text_primary);
    let intro = text(i18n.tr("form-intro"))
        .size(typography::BODY)
        .color(colors.text_secondary);

    let full_name = field(
        ctx,
        "form-full-name-label",
        text_input(&i18n.tr("form-full-name-placeholder"), &form.full_name)
            .on_input(Message::FullNameChanged)
            .on_submit(Message::Submit),
    );
    let email = field(
        ctx,
        "form-email-label",
        text_input(&i18n.tr("form-email-placeholder"), &form.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit),
    );

    let submit = button(
        container(text(i18n.tr("form-submit")).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe((!ctx.page.submit_disabled()).then_some(Message::Submit))
    .style(styles::button::primary(colors.brand));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(column![title, intro].spacing(spacing::XS))
        .push(full_name)
        .push(email);

    if let Some(validity) = ctx.page.validation {
        content = content.push(
            text(i18n.tr(validity.i18n_key()))
                .size(typography::CAPTION)
                .color(colors.error),
        );
    }
    if let Some(key) = ctx.notice {
        content = content.push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }
    content = content.push(submit);

    let card = container(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card(colors));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn field<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message> {
    column![
        text(ctx.i18n.tr(label_key))
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary),
        input.padding(spacing::XS).size(typography::BODY),
    ]
    .spacing(spacing::XXS)
    .into()
}
