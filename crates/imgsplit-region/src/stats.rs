//! Region color statistics
//!
//! The quadtree split decision is driven by two small pure functions:
//! per-region channel averaging and the population standard deviation of
//! a sample set. Alpha is ignored throughout.

use crate::error::{SplitError, SplitResult};
use imgsplit_core::Region;

/// Compute the average red, green and blue values over a region.
///
/// Every pixel in the region is sampled; channels are accumulated on the
/// source's 16-bit scale and divided by the pixel count.
///
/// # Errors
///
/// Returns [`SplitError::EmptyImage`] for a zero-area region. Regions
/// cannot normally be constructed empty, but the guard keeps a
/// divide-by-zero out of the statistics path regardless.
pub fn average_channels(region: &Region<'_>) -> SplitResult<(f64, f64, f64)> {
    let rect = region.rect();
    if rect.is_empty() {
        return Err(SplitError::EmptyImage);
    }

    let mut sum_r = 0.0;
    let mut sum_g = 0.0;
    let mut sum_b = 0.0;
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let (r, g, b, _a) = region.rgba(x, y);
            sum_r += r as f64;
            sum_g += g as f64;
            sum_b += b as f64;
        }
    }

    let count = rect.area() as f64;
    Ok((sum_r / count, sum_g / count, sum_b / count))
}

/// Compute the population standard deviation of a sample set.
///
/// Returns 0 for empty or single-element input.
pub fn std_deviation(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use imgsplit_core::Rect;

    #[test]
    fn test_std_deviation_known_set() {
        // Classic textbook set with population std dev exactly 2
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(std_deviation(&samples), 2.0);
    }

    #[test]
    fn test_std_deviation_degenerate_inputs() {
        assert_eq!(std_deviation(&[]), 0.0);
        assert_eq!(std_deviation(&[42.0]), 0.0);
        assert_eq!(std_deviation(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_average_channels_uniform() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 128, 255]));
        let region = Region::full(&img).unwrap();
        let (r, g, b) = average_channels(&region).unwrap();
        assert_eq!(r, 65535.0);
        assert_eq!(g, 0.0);
        assert_eq!(b, 128.0 * 257.0);
    }

    #[test]
    fn test_average_channels_mixed() {
        // Left column black, right column white: averages sit halfway
        let img = RgbaImage::from_fn(2, 2, |x, _y| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let region = Region::full(&img).unwrap();
        let (r, g, b) = average_channels(&region).unwrap();
        assert_eq!(r, 65535.0 / 2.0);
        assert_eq!(g, 65535.0 / 2.0);
        assert_eq!(b, 65535.0 / 2.0);
    }

    #[test]
    fn test_average_channels_sub_region_only() {
        // Averaging a cropped region must ignore pixels outside it
        let img = RgbaImage::from_fn(4, 4, |x, y| {
            if x < 2 && y < 2 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let region = Region::full(&img).unwrap();
        let top_left = region.crop(Rect::new(0, 0, 2, 2)).unwrap();
        let (r, _, _) = average_channels(&top_left).unwrap();
        assert_eq!(r, 65535.0);
    }
}
