use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for logo generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating a logo image.
#[derive(Error, Debug)]
pub enum Error {
    /// The font file is missing, unreadable, or holds no usable face.
    #[error("font could not be loaded from {path:?}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// Encoding or writing the canvas failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the one failure callers are expected to recover from.
    pub fn is_font_load(&self) -> bool {
        matches!(self, Error::FontLoad { .. })
    }
}
