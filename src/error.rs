// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preview(PreviewError),
}

/// Reasons a selected file could not be turned into a preview.
/// Used to pick a localized notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// File could not be opened or read (missing, permission denied, ...)
    Unreadable(String),

    /// File extension or content is not a known image format
    UnsupportedFormat,

    /// Header was recognized but the pixel data could not be decoded
    Corrupted(String),

    /// The background decode worker went away before finishing
    Interrupted,
}

impl PreviewError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PreviewError::Unreadable(_) => "notification-preview-unreadable",
            PreviewError::UnsupportedFormat => "notification-preview-unsupported",
            PreviewError::Corrupted(_) => "notification-preview-corrupted",
            PreviewError::Interrupted => "notification-preview-interrupted",
        }
    }
}

impl From<image_rs::ImageError> for PreviewError {
    fn from(err: image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match err {
            ImageError::IoError(e) => PreviewError::Unreadable(e.to_string()),
            ImageError::Unsupported(_) => PreviewError::UnsupportedFormat,
            other => PreviewError::Corrupted(other.to_string()),
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Unreadable(msg) => write!(f, "Unreadable file: {}", msg),
            PreviewError::UnsupportedFormat => write!(f, "Unsupported image format"),
            PreviewError::Corrupted(msg) => write!(f, "Image data is corrupted: {}", msg),
            PreviewError::Interrupted => write!(f, "Decoding was interrupted"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preview(e) => write!(f, "Preview Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_io_error_maps_to_unreadable() {
        let image_err = image_rs::ImageError::IoError(std::io::Error::other("gone"));
        let err = PreviewError::from(image_err);
        assert!(matches!(err, PreviewError::Unreadable(msg) if msg.contains("gone")));
    }

    #[test]
    fn preview_error_i18n_keys_are_distinct() {
        let keys = [
            PreviewError::Unreadable(String::new()).i18n_key(),
            PreviewError::UnsupportedFormat.i18n_key(),
            PreviewError::Corrupted(String::new()).i18n_key(),
            PreviewError::Interrupted.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn preview_error_display_is_wrapped() {
        let err: Error = PreviewError::UnsupportedFormat.into();
        assert_eq!(
            format!("{}", err),
            "Preview Error: Unsupported image format"
        );
    }
}
