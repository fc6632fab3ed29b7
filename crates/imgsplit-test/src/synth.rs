//! Synthetic test images
//!
//! The splitter tests need images with exactly known statistics, so they
//! are synthesized rather than loaded from assets: uniform fills and
//! quadrant patterns at 8 and 16 bits per channel.

use image::{ImageBuffer, Rgba, RgbaImage};
use imgsplit_core::Rgba16Image;

/// Create a uniform 8-bit RGBA image.
pub fn uniform_rgba(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    ImageBuffer::from_pixel(width, height, Rgba(color))
}

/// Create a square 8-bit image of four uniformly colored quadrants.
///
/// `colors` are in row-major quadrant order: top-left, top-right,
/// bottom-left, bottom-right. The split sits at `size / 2`.
pub fn quadrant_rgba(size: u32, colors: [[u8; 4]; 4]) -> RgbaImage {
    let half = size / 2;
    ImageBuffer::from_fn(size, size, |x, y| {
        Rgba(colors[quadrant_index(x, y, half)])
    })
}

/// Create a square 16-bit image of four uniformly colored quadrants.
///
/// Same layout as [`quadrant_rgba`], with channels on the 16-bit scale
/// for tests that need fine-grained channel deltas.
pub fn quadrant_rgba16(size: u32, colors: [[u16; 4]; 4]) -> Rgba16Image {
    let half = size / 2;
    ImageBuffer::from_fn(size, size, |x, y| {
        Rgba(colors[quadrant_index(x, y, half)])
    })
}

fn quadrant_index(x: u32, y: u32, half: u32) -> usize {
    match (x < half, y < half) {
        (true, true) => 0,
        (false, true) => 1,
        (true, false) => 2,
        (false, false) => 3,
    }
}
