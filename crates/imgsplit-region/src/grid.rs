//! Uniform grid splitter
//!
//! Splits an image into a fixed `columns x rows` grid of equally sized
//! regions. Cell extents come from truncating integer division, so when
//! the image size is not divisible the trailing remainder pixels belong
//! to no region.

use crate::error::{SplitError, SplitResult};
use crate::iter::Regions;
use imgsplit_core::{PixelSource, Rect, Region};

/// Minimum width of a grid cell in pixels.
pub const MIN_SUB_WIDTH: u32 = 10;
/// Minimum height of a grid cell in pixels.
pub const MIN_SUB_HEIGHT: u32 = 10;

/// Split an image into a `columns x rows` grid of regions.
///
/// Emits exactly `columns * rows` regions of `width / columns` by
/// `height / rows` pixels each, in row-major order (all columns of row
/// 0, then row 1, and so on).
///
/// # Errors
///
/// - [`SplitError::InvalidParameters`] if `columns` or `rows` is 0
/// - [`SplitError::UnsupportedImage`] if the source cannot produce
///   sub-region views
/// - [`SplitError::EmptyImage`] if the source has zero area
/// - [`SplitError::SubImageTooSmall`] if a cell would be narrower than
///   [`MIN_SUB_WIDTH`] or shorter than [`MIN_SUB_HEIGHT`]
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use imgsplit_region::grid_split;
///
/// let img = RgbaImage::new(90, 60);
/// let regions = grid_split(&img, 3, 2).unwrap();
/// assert_eq!(regions.len(), 6);
/// ```
pub fn grid_split<'a>(
    source: &'a dyn PixelSource,
    columns: u32,
    rows: u32,
) -> SplitResult<Regions<'a>> {
    if columns == 0 || rows == 0 {
        return Err(SplitError::InvalidParameters(format!(
            "grid needs at least one column and one row, got {columns}x{rows}"
        )));
    }
    if !source.supports_views() {
        return Err(SplitError::UnsupportedImage);
    }
    let bounds = source.bounds();
    if bounds.is_empty() {
        return Err(SplitError::EmptyImage);
    }

    let sub_w = bounds.w / columns;
    let sub_h = bounds.h / rows;
    if sub_w < MIN_SUB_WIDTH || sub_h < MIN_SUB_HEIGHT {
        return Err(SplitError::SubImageTooSmall {
            width: sub_w,
            height: sub_h,
        });
    }

    let whole = Region::new(source, bounds)?;
    let mut cells = Vec::with_capacity(columns as usize * rows as usize);
    for row in 0..rows {
        for col in 0..columns {
            let cell = Rect::new(bounds.x + col * sub_w, bounds.y + row * sub_h, sub_w, sub_h);
            cells.push(whole.crop(cell)?);
        }
    }
    Ok(Regions::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_grid_basic() {
        let img = RgbaImage::new(20, 20);
        let regions: Vec<Rect> = grid_split(&img, 2, 2).unwrap().map(|r| r.rect()).collect();
        assert_eq!(
            regions,
            vec![
                Rect::new(0, 0, 10, 10),
                Rect::new(10, 0, 10, 10),
                Rect::new(0, 10, 10, 10),
                Rect::new(10, 10, 10, 10),
            ]
        );
    }

    #[test]
    fn test_grid_rejects_zero_config() {
        let img = RgbaImage::new(100, 100);
        assert!(matches!(
            grid_split(&img, 0, 3),
            Err(SplitError::InvalidParameters(_))
        ));
        assert!(matches!(
            grid_split(&img, 3, 0),
            Err(SplitError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_grid_rejects_small_cells() {
        let img = RgbaImage::new(100, 100);
        // 100 / 11 = 9 < 10
        let err = grid_split(&img, 11, 2).unwrap_err();
        assert!(matches!(
            err,
            SplitError::SubImageTooSmall {
                width: 9,
                height: 50
            }
        ));
    }

    #[test]
    fn test_grid_rejects_empty_image() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            grid_split(&img, 1, 1),
            Err(SplitError::EmptyImage)
        ));
    }

    #[test]
    fn test_grid_truncates_remainder() {
        // 25 / 2 = 12: regions stop at x = 24, the 25th column of
        // pixels is not part of any region
        let img = RgbaImage::new(25, 25);
        let regions: Vec<Rect> = grid_split(&img, 2, 2).unwrap().map(|r| r.rect()).collect();
        assert_eq!(regions.last().unwrap(), &Rect::new(12, 12, 12, 12));
        assert!(regions.iter().all(|r| r.right() <= 24 && r.bottom() <= 24));
    }
}
