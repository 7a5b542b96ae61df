// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the scrollable form, the success dialog (when
//! present) and the toast overlay.

use super::Message;
use crate::form::FormController;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{registration_form, success_dialog};
use iced::widget::{pick_list, scrollable, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormController,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        form,
        notifications,
        now,
    } = ctx;

    let form_view = registration_form::view(registration_form::ViewContext { i18n, form, now })
        .map(Message::Form);

    let page = iced::widget::Column::new()
        .push(language_bar(i18n))
        .push(
            scrollable(Container::new(form_view).center_x(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(dialog) = form.dialog() {
        layers = layers.push(success_dialog::view(dialog, i18n, now).map(Message::Dialog));
    }

    layers
        .push(Toast::view_overlay(notifications, i18n).map(Message::Notification))
        .into()
}

fn language_bar(i18n: &I18n) -> Element<'_, Message> {
    let picker = pick_list(
        i18n.available_locales.as_slice(),
        Some(i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("language-label")).size(typography::BODY))
            .push(picker),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding([spacing::XS, spacing::MD])
    .into()
}
