// SPDX-License-Identifier: MPL-2.0
//! Raster image decoding (PNG, JPEG, GIF, WebP, ...).

use crate::error::{PreviewError, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Width over height, or 1.0 for degenerate images.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decode the image at `path` into RGBA pixels.
///
/// The format is sniffed from the content first and falls back to the file
/// extension, so a `.png` with garbage content reports corruption rather than
/// an unknown format.
///
/// # Errors
///
/// - [`PreviewError::Unreadable`] if the file cannot be opened or read
/// - [`PreviewError::UnsupportedFormat`] if no decoder matches
/// - [`PreviewError::Corrupted`] if the decoder rejects the data
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let reader = ImageReader::open(path.as_ref())
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| PreviewError::Unreadable(e.to_string()))?;

    let img = reader.decode().map_err(PreviewError::from)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
