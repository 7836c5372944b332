//! Error types for the spritegen core.

use thiserror::Error;

/// Errors produced by sprite synthesis and export.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// Width or height was zero (or the pixel count overflowed `usize`).
    #[error("invalid dimension: width and height must be non-zero")]
    InvalidDimension,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A file could not be written or encoded.
    #[error("i/o error: {0}")]
    Io(String),
}
