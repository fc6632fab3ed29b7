//! imgsplit-region - Image-to-region splitters
//!
//! This crate partitions a raster image into rectangular regions for
//! downstream independent processing (tiled encoding, parallel
//! analysis). Two strategies are provided:
//!
//! - **Uniform grid split** ([`grid_split`]) - a fixed `columns x rows`
//!   grid of equally sized regions
//! - **Adaptive quadtree split** ([`quadtree_split`]) - recursive
//!   subdivision that only splits where local color variance exceeds a
//!   threshold, so region sizes follow visual content homogeneity
//!
//! Both return a [`Regions`] iterator of borrowed [`Region`] views; no
//! pixel data is copied.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use imgsplit_region::{grid_split, quadtree_split};
//!
//! // A half-black, half-white image
//! let img = RgbaImage::from_fn(100, 100, |x, _y| {
//!     if x < 50 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
//! });
//!
//! // Fixed 2x2 grid: always four regions
//! let grid = grid_split(&img, 2, 2).unwrap();
//! assert_eq!(grid.len(), 4);
//!
//! // Adaptive split: the contrast forces one subdivision, and each
//! // uniform quadrant stays whole
//! let adaptive = quadtree_split(&img, 4, 2000.0).unwrap();
//! assert_eq!(adaptive.len(), 4);
//! ```

pub mod error;
pub mod grid;
pub mod iter;
pub mod quadtree;
pub mod stats;

// Re-export core types
pub use imgsplit_core;
pub use imgsplit_core::{PixelSource, Rect, Region};

// Re-export error types
pub use error::{SplitError, SplitResult};

// Re-export splitter entry points and iteration
pub use grid::{MIN_SUB_HEIGHT, MIN_SUB_WIDTH, grid_split};
pub use iter::Regions;
pub use quadtree::{DEFAULT_BRANCHING_FACTOR, quadtree_split, quadtree_split_with_branching};
pub use stats::{average_channels, std_deviation};
