// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers mutate state synchronously through [`UpdateContext`] and return
//! the asynchronous follow-up as a [`Task`]. Tasks are fire-and-forget;
//! nothing is ever cancelled.

use super::{persistence, Message};
use crate::error::Error;
use crate::form::{timers, FileSelection, FormController, SubmitOutcome};
use crate::i18n::I18n;
use crate::media::preview::display_name;
use crate::media::{
    decode_selfie, extract_video_thumbnail, ImageData, PreviewKind, SelfiePreview,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::{registration_form, success_dialog};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state handed to handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub form: &'a mut FormController,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: registration_form::Message,
) -> Task<Message> {
    match message {
        registration_form::Message::FieldEdited(field, value) => {
            ctx.form.on_field_edited(field, value);
            Task::none()
        }
        registration_form::Message::PickFile(kind) => pick_file(ctx.i18n, kind),
        registration_form::Message::Submit => handle_submit(ctx),
    }
}

pub fn handle_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: success_dialog::Message,
) -> Task<Message> {
    match message {
        success_dialog::Message::Acknowledge => {
            ctx.form.on_dialog_acknowledged();
            Task::none()
        }
    }
}

fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.form.on_submit() {
        SubmitOutcome::Accepted => {
            Task::perform(timers::simulated_submission(), |()| Message::SubmissionCompleted)
        }
        // Scheduled even when the form is already shaking
        SubmitOutcome::Rejected(_) => {
            Task::perform(timers::shake_timeout(), |()| Message::ShakeElapsed)
        }
        SubmitOutcome::Ignored => Task::none(),
    }
}

/// Opens the native file dialog for `kind`.
fn pick_file(i18n: &I18n, kind: PreviewKind) -> Task<Message> {
    let (title_key, filter_key, extensions) = kind.dialog_filter();
    let title = i18n.tr(title_key);
    let filter = i18n.tr(filter_key);

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, extensions)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::FileChosen { kind, path },
    )
}

pub fn handle_file_chosen(
    ctx: &mut UpdateContext<'_>,
    kind: PreviewKind,
    path: Option<PathBuf>,
) -> Task<Message> {
    match ctx.form.on_file_selected(kind, path) {
        FileSelection::Ignored => Task::none(),
        FileSelection::VideoShown(path) => {
            tracing::debug!(input = kind.name(), file = %path.display(), "extracting thumbnail");
            let task_path = path.clone();
            Task::perform(extract_video_thumbnail(task_path), move |result| {
                Message::VideoThumbnailExtracted {
                    path: path.clone(),
                    result,
                }
            })
        }
        FileSelection::DecodeSelfie(path) => {
            tracing::debug!(input = kind.name(), file = %path.display(), "decoding selfie");
            let task_path = path.clone();
            Task::perform(decode_selfie(task_path), move |result| {
                Message::SelfieDecoded {
                    path: path.clone(),
                    result,
                }
            })
        }
    }
}

/// Routes a dropped file to the input matching its extension.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    match PreviewKind::for_path(&path) {
        Some(kind) => handle_file_chosen(ctx, kind, Some(path)),
        None => {
            ctx.notifications.push(
                Notification::warning("notification-drop-unsupported")
                    .with_arg("file", display_name(&path)),
            );
            Task::none()
        }
    }
}

/// The caption-only preview stays when extraction fails; the user only gets
/// a short informational toast.
pub fn handle_video_thumbnail(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if let Err(error) = ctx.form.on_video_thumbnail(&path, result) {
        tracing::warn!(
            input = PreviewKind::Video.name(),
            file = %path.display(),
            %error,
            "thumbnail extraction failed"
        );
        ctx.notifications.push(
            Notification::info("notification-video-no-thumbnail")
                .with_arg("file", display_name(&path)),
        );
    }
    Task::none()
}

pub fn handle_selfie_decoded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<SelfiePreview, Error>,
) -> Task<Message> {
    match ctx.form.on_selfie_decoded(result) {
        Ok(()) => ctx.notifications.clear_preview_errors(),
        Err(error) => {
            let key = match &error {
                Error::Preview(preview_error) => preview_error.i18n_key(),
                Error::Io(_) | Error::Config(_) => "notification-preview-unreadable",
            };
            tracing::warn!(
                input = PreviewKind::Selfie.name(),
                file = %path.display(),
                %error,
                "preview decode failed"
            );
            ctx.notifications
                .push(Notification::error(key).with_arg("file", display_name(&path)));
        }
    }
    Task::none()
}

pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    persistence::apply_language_change(ctx.i18n, locale, ctx.notifications);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.form.tick(now);
    ctx.notifications.tick(now);
    Task::none()
}
