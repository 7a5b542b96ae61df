// SPDX-License-Identifier: MPL-2.0
//! Registration form screen.
//!
//! Pure view over [`FormController`]: every user action becomes a
//! [`Message`] that the application routes back to the controller.

use crate::form::field::REQUIRED_HINT_KEY;
use crate::form::{FieldId, FieldKind, FormController, SubmitStatus, ValidationMark};
use crate::i18n::I18n;
use crate::media::preview::format_size;
use crate::media::{Preview, PreviewKind, SelfiePreview, VideoPreview};
use crate::ui::animation::SHAKE_AMPLITUDE;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Image;
use iced::widget::{button, container, pick_list, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Padding, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(FieldId, String),
    PickFile(PreviewKind),
    Submit,
}

/// Everything the form view reads.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormController,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, form, now } = ctx;

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("form-subtitle"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        );

    let mut fields = Column::new().spacing(spacing::MD);
    for field in FieldId::ALL {
        fields = fields.push(field_view(i18n, form, field));
    }

    let previews = Column::new()
        .spacing(spacing::MD)
        .push(video_input(i18n, form.video_preview(), now))
        .push(selfie_input(i18n, form.selfie_preview(), now));

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(fields)
            .push(previews)
            .push(submit_button(i18n, form.status(), now)),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .style(styles::container::card);

    // Constant horizontal room so the shake never shifts the layout
    let offset = form.shake().map_or(0.0, |shake| shake.offset_x(now));
    Container::new(card)
        .padding(Padding {
            top: spacing::LG,
            bottom: spacing::LG,
            left: SHAKE_AMPLITUDE + offset,
            right: SHAKE_AMPLITUDE - offset,
        })
        .into()
}

fn field_view<'a>(i18n: &I18n, form: &'a FormController, field: FieldId) -> Element<'a, Message> {
    let mark = form.mark(field);
    let value = form.value(field);
    let placeholder = i18n.tr(&field.placeholder_key());

    let input: Element<'a, Message> = match field.kind() {
        FieldKind::Text => text_input(&placeholder, value)
            .on_input(move |value| Message::FieldEdited(field, value))
            .on_submit(Message::Submit)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .style(styles::input::text_field(mark))
            .into(),
        FieldKind::Select(options) => {
            let selected = options.iter().copied().find(|option| *option == value);
            pick_list(options, selected, move |choice: &'static str| {
                Message::FieldEdited(field, choice.to_string())
            })
            .placeholder(placeholder)
            .text_size(typography::BODY_LG)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::input::select_field(mark))
            .into()
        }
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(&field.label_key())).size(typography::BODY))
        .push(input);

    if mark == ValidationMark::Invalid {
        let hint_key = if value.trim().is_empty() {
            REQUIRED_HINT_KEY.to_string()
        } else {
            field.invalid_hint_key()
        };
        column = column.push(
            Text::new(i18n.tr(&hint_key))
                .size(typography::CAPTION)
                .color(styles::input::hint_color()),
        );
    }

    column.into()
}

fn choose_button<'a>(i18n: &I18n, kind: PreviewKind) -> Element<'a, Message> {
    button(Text::new(i18n.tr("preview-choose-file")).size(typography::BODY))
        .on_press(Message::PickFile(kind))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .into()
}

fn video_input<'a>(
    i18n: &I18n,
    preview: &'a Preview<VideoPreview>,
    now: Instant,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("preview-video-label")).size(typography::BODY))
        .push(choose_button(i18n, PreviewKind::Video));

    if let Some(video) = preview.content() {
        let opacity = preview.entrance().map_or(1.0, |entrance| entrance.opacity(now));
        let label = match video.size_bytes {
            Some(size) => {
                let size = format_size(size);
                i18n.tr_with_args(
                    "preview-video-size",
                    &[("name", video.file_name.as_str()), ("size", size.as_str())],
                )
            }
            None => video.file_name.clone(),
        };

        let caption = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(play_icon(opacity))
            .push(Text::new(label).size(typography::BODY));

        let mut details = Column::new().spacing(spacing::XS);
        if let Some(thumbnail) = &video.thumbnail {
            let width = (sizing::VIDEO_PREVIEW_HEIGHT * thumbnail.aspect_ratio())
                .min(sizing::VIDEO_PREVIEW_MAX_WIDTH);
            details = details.push(
                Image::new(thumbnail.handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::VIDEO_PREVIEW_HEIGHT))
                    .content_fit(ContentFit::Contain)
                    .opacity(opacity),
            );
        }
        details = details.push(caption);

        column = column.push(
            Container::new(details)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(move |theme: &Theme| faded_frame(theme, opacity)),
        );
    }

    column.into()
}

fn play_icon<'a>(opacity: f32) -> Element<'a, Message> {
    icons::tinted(icons::play(), sizing::ICON_MD, move |theme| Color {
        a: opacity,
        ..ColorScheme::for_theme(theme).brand
    })
    .into()
}

fn selfie_input<'a>(
    i18n: &I18n,
    preview: &'a Preview<SelfiePreview>,
    now: Instant,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("preview-selfie-label")).size(typography::BODY))
        .push(choose_button(i18n, PreviewKind::Selfie));

    if let Some(selfie) = preview.content() {
        let (opacity, scale) = preview.entrance().map_or((1.0, 1.0), |entrance| {
            (entrance.opacity(now), entrance.scale(now))
        });
        let side = sizing::SELFIE_PREVIEW * scale;

        let image = Image::new(selfie.image.handle.clone())
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(ContentFit::Contain)
            .opacity(opacity);

        // Fixed slot so the zoom grows from the center
        column = column.push(
            Container::new(image)
                .width(Length::Fixed(sizing::SELFIE_PREVIEW))
                .height(Length::Fixed(sizing::SELFIE_PREVIEW))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::preview_frame),
        );
    }

    column.into()
}

fn submit_button<'a>(i18n: &I18n, status: SubmitStatus, now: Instant) -> Element<'a, Message> {
    let content: Element<'a, Message> = match status {
        SubmitStatus::Idle => Text::new(i18n.tr("submit-button"))
            .size(typography::BODY_LG)
            .into(),
        SubmitStatus::Submitting { since } => Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                AnimatedSpinner::new(palette::WHITE, sizing::SPINNER)
                    .elapsed(now.saturating_duration_since(since))
                    .into_element(),
            )
            .push(Text::new(i18n.tr("submit-button-loading")).size(typography::BODY_LG))
            .into(),
    };

    let label = Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let submit = button(label)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::primary);

    // No press handler means disabled
    match status {
        SubmitStatus::Idle => submit.on_press(Message::Submit).into(),
        SubmitStatus::Submitting { .. } => submit.into(),
    }
}

/// Preview frame with border and text faded to `opacity`.
fn faded_frame(theme: &Theme, opacity: f32) -> container::Style {
    let mut style = styles::container::preview_frame(theme);
    style.border.color.a *= opacity;
    style.text_color = Some(Color {
        a: opacity,
        ..ColorScheme::for_theme(theme).text_primary
    });
    style
}
