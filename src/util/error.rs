//! Error types for pixmatch.

use thiserror::Error;

/// Result alias for pixmatch operations.
pub type PixMatchResult<T> = std::result::Result<T, PixMatchError>;

/// Errors that can occur when building matrices, scoring or searching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PixMatchError {
    /// Zero width or height, or no overlap between two images.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The template does not fit inside the search image.
    #[error(
        "template {tpl_width}x{tpl_height} does not fit in image {img_width}x{img_height}"
    )]
    TemplateTooLarge {
        tpl_width: usize,
        tpl_height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// A requested region lies outside the source matrix.
    #[error(
        "region ({x}, {y}) {width}x{height} is outside image {img_width}x{img_height}"
    )]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// A raw pixel buffer does not match the declared geometry.
    #[error("buffer size mismatch: needed {needed} bytes, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// Decoding or encoding an image file failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
