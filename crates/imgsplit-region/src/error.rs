//! Error types for imgsplit-region

use thiserror::Error;

/// Errors that can occur while splitting an image into regions
///
/// Configuration-shape errors (`UnsupportedImage`,
/// `InvalidBranchingFactor`, `SubImageTooSmall`, `InvalidParameters`)
/// are always detected before any recursive work begins.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgsplit_core::Error),

    /// The pixel source cannot produce sub-region views
    #[error("pixel source does not support sub-region views")]
    UnsupportedImage,

    /// Branching factor whose square root is not an integer >= 2
    #[error("invalid branching factor: {0} is not a perfect square >= 4")]
    InvalidBranchingFactor(u32),

    /// Grid cell dimensions fell below the configured minimum
    #[error("sub-image size is too small: {width}x{height}")]
    SubImageTooSmall { width: u32, height: u32 },

    /// Subdivision reached a zero-area cell; the requested depth
    /// exceeds what the image size supports
    #[error("degenerate {width}x{height} sub-region at level {level}")]
    DegenerateRegion { width: u32, height: u32, level: u32 },

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;
