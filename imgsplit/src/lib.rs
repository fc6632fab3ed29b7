//! imgsplit - Image partitioning library for Rust
//!
//! Splits a raster image into rectangular sub-regions for downstream
//! independent processing (tiled encoding, parallel analysis).
//!
//! # Overview
//!
//! Two partitioning strategies are provided:
//!
//! - A **uniform grid split** ([`region::grid_split`]) producing a fixed
//!   `columns x rows` layout
//! - An **adaptive quadtree split** ([`region::quadtree_split`]) that
//!   subdivides only where local color variance exceeds a threshold, so
//!   regions align with visual content homogeneity
//!
//! Regions are borrowed views into the caller's pixel buffer; nothing is
//! copied. Any of the common `image` crate buffers works as input.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use imgsplit::region::grid_split;
//!
//! let img = RgbaImage::from_pixel(300, 300, Rgba([128, 128, 128, 255]));
//! let regions = grid_split(&img, 3, 3).unwrap();
//! assert_eq!(regions.len(), 9);
//! for region in regions {
//!     assert_eq!((region.width(), region.height()), (100, 100));
//! }
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imgsplit_core::*;

// Re-export the splitter crate as a module
pub use imgsplit_region as region;
