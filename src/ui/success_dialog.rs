// SPDX-License-Identifier: MPL-2.0
//! Modal overlay for the success dialog.

use crate::form::dialog::{SuccessDialog, BODY_KEY, CONFIRM_KEY, TITLE_KEY};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, center, opaque, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Acknowledge,
}

/// Renders the dialog and its backdrop. The backdrop swallows every click,
/// so only the confirm button dismisses the dialog.
pub fn view<'a>(dialog: &SuccessDialog, i18n: &I18n, now: Instant) -> Element<'a, Message> {
    let animation = dialog.animation();
    let opacity = animation.opacity(now);
    let scale = animation.scale(now);

    let check = Container::new(icons::tinted(
        icons::check_circle(),
        sizing::DIALOG_ICON * scale,
        move |theme| faded(ColorScheme::for_theme(theme).success, opacity),
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let mut confirm = button(
        Container::new(Text::new(i18n.tr(CONFIRM_KEY)).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);
    if !dialog.is_acknowledged() {
        confirm = confirm.on_press(Message::Acknowledge);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(check)
        .push(
            Text::new(i18n.tr(TITLE_KEY))
                .size(typography::TITLE_MD * scale)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(ColorScheme::for_theme(theme).text_primary, opacity)),
                }),
        )
        .push(
            Text::new(i18n.tr(BODY_KEY))
                .size(typography::BODY * scale)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(ColorScheme::for_theme(theme).text_secondary, opacity)),
                }),
        )
        .push(confirm);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH * scale))
        .padding(spacing::LG)
        .style(move |theme: &Theme| {
            let mut style = styles::container::dialog(theme);
            if let Some(iced::Background::Color(color)) = style.background {
                style.background = Some(iced::Background::Color(faded(color, opacity)));
            }
            style
        });

    opaque(
        center(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim(opacity)),
    )
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}
