//! Error types for imgsplit-core
//!
//! Provides a unified error type for region and rectangle construction.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::rect::Rect;
use thiserror::Error;

/// imgsplit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid region dimensions
    #[error("invalid region dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rectangle lies outside the bounds it must fit in
    #[error("rectangle {rect} lies outside bounds {bounds}")]
    OutOfBounds { rect: Rect, bounds: Rect },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
