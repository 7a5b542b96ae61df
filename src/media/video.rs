// SPDX-License-Identifier: MPL-2.0
//! First-frame thumbnails for picked video files.

use super::image::ImageData;
use crate::error::{Error, PreviewError, Result};
use std::path::{Path, PathBuf};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process and silences its warnings.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level only touches FFmpeg's global log level
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decodes the first frame of the video at `path` into RGBA pixels.
///
/// # Errors
///
/// - [`PreviewError::Unreadable`] if the container cannot be opened
/// - [`PreviewError::UnsupportedFormat`] if it has no decodable video stream
/// - [`PreviewError::Corrupted`] if no frame could be decoded
pub fn extract_thumbnail<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| PreviewError::Unreadable(e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(PreviewError::UnsupportedFormat)?;
    let video_stream_index = input.index();

    let mut decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .and_then(|context| context.decoder().video())
        .map_err(|_| PreviewError::UnsupportedFormat)?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(
            PreviewError::Corrupted(format!("invalid video dimensions {width}x{height}")).into(),
        );
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| PreviewError::Corrupted(e.to_string()))?;

    let mut decoded = ffmpeg_next::frame::Video::empty();
    let mut got_frame = false;

    for (stream, packet) in ictx.packets() {
        if stream.index() != video_stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| PreviewError::Corrupted(e.to_string()))?;
        if decoder.receive_frame(&mut decoded).is_ok() {
            got_frame = true;
            break;
        }
    }

    // Short clips may only yield their frame once the decoder is drained
    if !got_frame {
        decoder
            .send_eof()
            .map_err(|e| PreviewError::Corrupted(e.to_string()))?;
        got_frame = decoder.receive_frame(&mut decoded).is_ok();
    }
    if !got_frame {
        return Err(PreviewError::Corrupted("no decodable video frame".to_string()).into());
    }

    let mut rgba_frame = ffmpeg_next::frame::Video::empty();
    scaler
        .run(&decoded, &mut rgba_frame)
        .map_err(|e| PreviewError::Corrupted(e.to_string()))?;

    let width = rgba_frame.width();
    let height = rgba_frame.height();
    let stride = rgba_frame.stride(0);
    let data = rgba_frame.data(0);
    let row_len = width as usize * 4;

    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in data.chunks(stride).take(height as usize) {
        pixels.extend_from_slice(&row[..row_len.min(row.len())]);
    }
    if pixels.len() != row_len * height as usize {
        return Err(PreviewError::Corrupted("truncated video frame".to_string()).into());
    }

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Extracts the thumbnail of the video at `path` on a blocking worker
/// thread.
pub async fn extract_video_thumbnail(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || extract_thumbnail(&path))
        .await
        .map_err(|_| PreviewError::Interrupted)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn init_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }

    #[test]
    fn missing_video_is_unreadable() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("absent.mp4");

        match extract_thumbnail(&missing) {
            Err(Error::Preview(PreviewError::Unreadable(_))) => {}
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn text_disguised_as_video_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let fake = dir.path().join("notes.mp4");
        fs::write(&fake, b"definitely not a video container").expect("write fake video");

        assert!(matches!(extract_thumbnail(&fake), Err(Error::Preview(_))));
    }

    #[tokio::test]
    async fn async_extraction_reports_failures() {
        let result = extract_video_thumbnail(PathBuf::from("/nowhere/clip.webm")).await;
        assert!(matches!(
            result,
            Err(Error::Preview(PreviewError::Unreadable(_)))
        ));
    }
}
