// SPDX-License-Identifier: MPL-2.0
//! Ephemeral previews of the files picked for the form.
//!
//! A video preview is derived synchronously from the picked file and later
//! gains a first-frame thumbnail from [`extract_video_thumbnail`]. A selfie
//! preview holds decoded pixels and is produced by [`decode_selfie`]. Both
//! decodes run off the UI thread.
//!
//! [`extract_video_thumbnail`]: super::video::extract_video_thumbnail

use super::extensions::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use super::image::{load_image, ImageData};
use crate::error::{PreviewError, Result};
use crate::ui::animation::{Animation, Effect};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Which file input a selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    Video,
    Selfie,
}

impl PreviewKind {
    /// Form field name of the file input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PreviewKind::Video => "video",
            PreviewKind::Selfie => "selfie",
        }
    }

    /// Entrance effect played when a preview of this kind appears.
    #[must_use]
    pub fn entrance_effect(self) -> Effect {
        match self {
            PreviewKind::Video => Effect::FadeIn,
            PreviewKind::Selfie => Effect::ZoomIn,
        }
    }

    /// Input a file belongs to, judged by its extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(PreviewKind::Video)
        } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(PreviewKind::Selfie)
        } else {
            None
        }
    }

    /// File dialog title key, filter label key and extensions.
    #[must_use]
    pub fn dialog_filter(self) -> (&'static str, &'static str, &'static [&'static str]) {
        match self {
            PreviewKind::Video => ("dialog-video-title", "dialog-video-filter", VIDEO_EXTENSIONS),
            PreviewKind::Selfie => ("dialog-selfie-title", "dialog-image-filter", IMAGE_EXTENSIONS),
        }
    }
}

/// Displayable rendering of a picked video file.
#[derive(Debug, Clone)]
pub struct VideoPreview {
    pub path: PathBuf,
    pub file_name: String,
    /// `None` when the file metadata could not be read.
    pub size_bytes: Option<u64>,
    /// First frame, once extracted. The caption is shown alone until then,
    /// and for good if extraction fails.
    pub thumbnail: Option<ImageData>,
}

impl VideoPreview {
    /// Derives a caption-only preview from `path` without opening the file's
    /// content. Type and size are not validated.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = display_name(&path);
        let size_bytes = fs::metadata(&path).ok().map(|meta| meta.len());
        Self {
            path,
            file_name,
            size_bytes,
            thumbnail: None,
        }
    }
}

/// Decoded selfie ready to display.
#[derive(Debug, Clone)]
pub struct SelfiePreview {
    pub path: PathBuf,
    pub image: ImageData,
}

/// Decodes the image at `path` on a blocking worker thread.
///
/// Calls are independent: nothing cancels an earlier decode when a newer one
/// starts, so completions may arrive in any order.
pub async fn decode_selfie(path: PathBuf) -> Result<SelfiePreview> {
    let worker_path = path.clone();
    let image = tokio::task::spawn_blocking(move || load_image(&worker_path))
        .await
        .map_err(|_| PreviewError::Interrupted)??;

    Ok(SelfiePreview { path, image })
}

/// A preview slot: optional content plus the entrance animation that
/// accompanied its last assignment. The slot is visible iff it has content.
#[derive(Debug, Clone)]
pub struct Preview<T> {
    content: Option<T>,
    entrance: Option<Animation>,
}

impl<T> Default for Preview<T> {
    fn default() -> Self {
        Self {
            content: None,
            entrance: None,
        }
    }
}

impl<T> Preview<T> {
    /// Replaces any previous content and restarts the entrance effect.
    pub fn show(&mut self, content: T, effect: Effect) {
        self.content = Some(content);
        self.entrance = Some(Animation::start(effect));
    }

    /// Drops the content and hides the slot.
    pub fn hide(&mut self) {
        self.content = None;
        self.entrance = None;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        self.content.as_mut()
    }

    #[must_use]
    pub fn entrance(&self) -> Option<&Animation> {
        self.entrance.as_ref()
    }

    /// Whether the entrance effect is still playing at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_visible()
            && self
                .entrance
                .is_some_and(|animation| !animation.is_finished(now))
    }
}

/// File name for display, falling back to the full path.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Human readable byte count (`512 B`, `1.5 KB`, `12.3 MB`).
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn video_preview_reads_name_and_size() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("intro.mp4");
        fs::write(&path, vec![0u8; 2048]).expect("write video stub");

        let preview = VideoPreview::from_path(path.clone());
        assert_eq!(preview.path, path);
        assert_eq!(preview.file_name, "intro.mp4");
        assert_eq!(preview.size_bytes, Some(2048));
        assert!(preview.thumbnail.is_none());
    }

    #[test]
    fn video_preview_of_missing_file_has_no_size() {
        let preview = VideoPreview::from_path(PathBuf::from("/nowhere/clip.webm"));
        assert_eq!(preview.file_name, "clip.webm");
        assert_eq!(preview.size_bytes, None);
    }

    #[test]
    fn preview_slot_replaces_content() {
        let mut slot = Preview::default();
        assert!(!slot.is_visible());

        slot.show("first", Effect::FadeIn);
        slot.show("second", Effect::FadeIn);
        assert_eq!(slot.content(), Some(&"second"));

        slot.hide();
        assert!(!slot.is_visible());
        assert!(slot.entrance().is_none());
    }

    #[test]
    fn entrance_animation_finishes() {
        let mut slot = Preview::default();
        slot.show(1, Effect::ZoomIn);
        let started = slot.entrance().expect("entrance set").started_at();

        assert!(slot.is_animating(started));
        assert!(!slot.is_animating(started + Effect::ZoomIn.duration()));
    }

    #[test]
    fn content_can_be_completed_in_place() {
        let mut slot = Preview::default();
        assert!(slot.content_mut().is_none());

        slot.show(VideoPreview::from_path(PathBuf::from("a.mp4")), Effect::FadeIn);
        if let Some(video) = slot.content_mut() {
            video.thumbnail = Some(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]));
        }

        let video = slot.content().expect("visible");
        assert_eq!(video.thumbnail.as_ref().map(|t| t.width), Some(1));
    }

    #[test]
    fn kinds_use_distinct_entrance_effects() {
        assert_eq!(PreviewKind::Video.entrance_effect(), Effect::FadeIn);
        assert_eq!(PreviewKind::Selfie.entrance_effect(), Effect::ZoomIn);
    }

    #[test]
    fn kind_is_guessed_from_extension() {
        assert_eq!(
            PreviewKind::for_path(Path::new("/tmp/intro.MP4")),
            Some(PreviewKind::Video)
        );
        assert_eq!(
            PreviewKind::for_path(Path::new("me.jpeg")),
            Some(PreviewKind::Selfie)
        );
        assert_eq!(PreviewKind::for_path(Path::new("notes.txt")), None);
        assert_eq!(PreviewKind::for_path(Path::new("no_extension")), None);
    }

    #[test]
    fn format_size_picks_sensible_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
