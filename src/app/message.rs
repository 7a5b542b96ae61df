// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{ImageData, PreviewKind, SelfiePreview};
use crate::ui::notifications;
use crate::ui::{registration_form, success_dialog};
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the rest are completions of asynchronous tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Form(registration_form::Message),
    Dialog(success_dialog::Message),
    Notification(notifications::NotificationMessage),
    LanguageSelected(LanguageIdentifier),
    /// Result of a native file dialog.
    FileChosen {
        kind: PreviewKind,
        path: Option<PathBuf>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A background video thumbnail extraction finished.
    VideoThumbnailExtracted {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// A background selfie decode finished.
    SelfieDecoded {
        path: PathBuf,
        result: Result<SelfiePreview, Error>,
    },
    /// The simulated submission delay elapsed.
    SubmissionCompleted,
    /// A shake removal timer fired.
    ShakeElapsed,
    /// Periodic tick driving animations and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ROLLCALL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
