//! Error types for identicon creation and output.

use thiserror::Error;

/// Errors produced while creating, encoding or writing an identicon.
#[derive(Debug, Error)]
pub enum IdenticonError {
    /// The requested side length is not a positive integer.
    #[error("invalid avatar size {0}: must be a positive integer")]
    InvalidSize(i32),

    /// A color string is not exactly six hex digits.
    #[error("invalid color {input:?}: {reason}")]
    ColorParse { input: String, reason: String },

    /// The image codec rejected the pixel buffer.
    #[error("encoding error: {0}")]
    Encoding(#[from] image::ImageError),

    /// A settings profile could not be (de)serialized.
    #[error("profile error: {0}")]
    Profile(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IdenticonError {
    pub(crate) fn color_parse(input: &str, reason: impl Into<String>) -> Self {
        Self::ColorParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
