//! imgsplit-core - Basic data structures for image partitioning
//!
//! This crate provides the fundamental types used throughout the
//! imgsplit library:
//!
//! - [`Rect`] - Axis-aligned rectangle with exclusive right/bottom edges
//! - [`PixelSource`] - Trait for rectangular, addressable pixel data
//! - [`Region`] - A borrowed rectangular view into a pixel source
//!
//! [`PixelSource`] is implemented for the common `image` crate buffers
//! (`RgbaImage`, 16-bit RGBA buffers, `DynamicImage`), so those can be
//! fed to the splitters directly.

pub mod error;
pub mod rect;
pub mod source;

pub use error::{Error, Result};
pub use rect::Rect;
pub use source::{PixelSource, Region, Rgba16Image};
