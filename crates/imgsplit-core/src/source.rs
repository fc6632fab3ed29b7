//! Pixel sources and borrowed region views
//!
//! The splitters never own pixel data. They read through the
//! [`PixelSource`] trait and hand out [`Region`] values, which are
//! rectangular views borrowing the source. A region must therefore not
//! outlive the source it was cut from; the borrow checker enforces this.
//!
//! # Channel scale
//!
//! Channels are exposed on the 16-bit scale (0..=65535). 8-bit samples
//! are widened by multiplying with 257, so 0xff maps to 0xffff. The
//! statistics code only requires that one source is internally
//! consistent, but a fixed scale keeps dissimilarity thresholds
//! meaningful across buffer types.

use crate::error::{Error, Result};
use crate::rect::Rect;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};
use std::fmt;

/// 16-bit RGBA image buffer
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// A rectangular, addressable source of RGBA pixels.
///
/// Object-safe so that regions can borrow sources of different concrete
/// types behind `&dyn PixelSource`. Implementations are provided for the
/// common `image` crate buffers.
pub trait PixelSource {
    /// The rectangle of valid pixel coordinates.
    fn bounds(&self) -> Rect;

    /// Read the pixel at absolute coordinates `(x, y)`.
    ///
    /// Channels are on the 16-bit scale. `(x, y)` must lie inside
    /// [`bounds`](PixelSource::bounds).
    fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16);

    /// Whether this source can hand out sub-rectangular views.
    ///
    /// Defaults to `true`. Wrappers over sources that cannot be indexed
    /// at random (e.g. a streaming decoder) return `false`, and the
    /// splitters reject them up front instead of failing mid-recursion.
    fn supports_views(&self) -> bool {
        true
    }
}

/// Widen an 8-bit channel sample to the 16-bit scale.
#[inline]
fn widen(c: u8) -> u16 {
    c as u16 * 257
}

impl PixelSource for RgbaImage {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        (widen(r), widen(g), widen(b), widen(a))
    }
}

impl PixelSource for Rgba16Image {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        (r, g, b, a)
    }
}

impl PixelSource for DynamicImage {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Channels are read through the image's 8-bit view and widened.
    fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        (widen(r), widen(g), widen(b), widen(a))
    }
}

/// A rectangular view into a pixel source.
///
/// Carries no pixel data of its own, only a rectangle and a borrow of
/// the source, so views are created without copying. Coordinates stay
/// absolute under cropping: a region cut from the bottom-right of an
/// image reports bottom-right pixel positions.
///
/// # Invariants
///
/// The rectangle is non-empty and lies fully inside the source bounds.
/// Both are checked at construction, so every live region is readable.
#[derive(Clone, Copy)]
pub struct Region<'a> {
    source: &'a dyn PixelSource,
    rect: Rect,
}

impl<'a> Region<'a> {
    /// Create a region over `rect` of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rect` is empty, or
    /// [`Error::OutOfBounds`] if it is not contained in the source
    /// bounds.
    pub fn new(source: &'a dyn PixelSource, rect: Rect) -> Result<Self> {
        if rect.is_empty() {
            return Err(Error::InvalidDimension {
                width: rect.w,
                height: rect.h,
            });
        }
        let bounds = source.bounds();
        if !bounds.contains_rect(&rect) {
            return Err(Error::OutOfBounds { rect, bounds });
        }
        Ok(Self { source, rect })
    }

    /// Create a region covering the whole source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the source has zero area.
    pub fn full(source: &'a dyn PixelSource) -> Result<Self> {
        let bounds = source.bounds();
        Self::new(source, bounds)
    }

    /// The rectangle this region covers, in absolute coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Width of the region in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.rect.w
    }

    /// Height of the region in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rect.h
    }

    /// The underlying pixel source.
    pub fn source(&self) -> &'a dyn PixelSource {
        self.source
    }

    /// Cut a sub-region out of this region.
    ///
    /// `rect` is given in absolute coordinates and must lie inside this
    /// region's rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rect` is empty, or
    /// [`Error::OutOfBounds`] if it extends past this region.
    pub fn crop(&self, rect: Rect) -> Result<Self> {
        if rect.is_empty() {
            return Err(Error::InvalidDimension {
                width: rect.w,
                height: rect.h,
            });
        }
        if !self.rect.contains_rect(&rect) {
            return Err(Error::OutOfBounds {
                rect,
                bounds: self.rect,
            });
        }
        Ok(Self {
            source: self.source,
            rect,
        })
    }

    /// Read the pixel at absolute coordinates `(x, y)`.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        debug_assert!(
            self.rect.contains_point(x, y),
            "pixel ({x}, {y}) outside region {}",
            self.rect
        );
        self.source.rgba(x, y)
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region").field("rect", &self.rect).finish()
    }
}
