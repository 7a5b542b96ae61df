// SPDX-License-Identifier: MPL-2.0
//! Media handling for the form's file inputs.

pub mod image;
pub mod preview;
pub mod video;

pub use image::{load_image, ImageData};
pub use preview::{decode_selfie, Preview, PreviewKind, SelfiePreview, VideoPreview};
pub use video::extract_video_thumbnail;

/// Extensions offered by the file dialogs.
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}
