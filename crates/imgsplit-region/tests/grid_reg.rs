//! Grid splitter regression tests
//!
//! Run with:
//! ```
//! cargo test -p imgsplit-region --test grid_reg
//! ```

use imgsplit_core::{PixelSource, Rect};
use imgsplit_region::{SplitError, grid_split};
use imgsplit_test::{RegParams, regions_to_text, uniform_rgba};

#[test]
fn grid_uniform() {
    // 900x900 in a 3x3 grid: nine 300x300 regions in row-major order
    let mut rp = RegParams::new("grid_uniform");

    let img = uniform_rgba(900, 900, [128, 128, 128, 255]);
    let regions = grid_split(&img, 3, 3).unwrap().drain_all();

    rp.write_data_and_check(regions_to_text(&regions).as_bytes(), "regions")
        .expect("write region layout");
    rp.compare_values(9.0, regions.len() as f64, 0.0);
    for region in &regions {
        rp.compare_values(300.0, region.width() as f64, 0.0);
        rp.compare_values(300.0, region.height() as f64, 0.0);
    }

    assert!(rp.cleanup(), "grid uniform test failed");
}

#[test]
fn grid_truncation() {
    // 95 / 3 = 31: cells are 31x31 and the trailing two pixel rows and
    // columns belong to no region
    let mut rp = RegParams::new("grid_truncation");

    let img = uniform_rgba(95, 95, [0, 0, 0, 255]);
    let regions = grid_split(&img, 3, 3).unwrap().drain_all();

    rp.write_data_and_check(regions_to_text(&regions).as_bytes(), "regions")
        .expect("write region layout");
    rp.compare_values(9.0, regions.len() as f64, 0.0);
    let last = regions.last().unwrap().rect();
    rp.compare_values(93.0, last.right() as f64, 0.0);
    rp.compare_values(93.0, last.bottom() as f64, 0.0);

    assert!(rp.cleanup(), "grid truncation test failed");
}

#[test]
fn grid_rejects_small_cells() {
    // 100 / 11 = 9, below the 10 pixel minimum
    let img = uniform_rgba(100, 100, [0, 0, 0, 255]);
    assert!(matches!(
        grid_split(&img, 11, 3),
        Err(SplitError::SubImageTooSmall { width: 9, .. })
    ));
    assert!(matches!(
        grid_split(&img, 3, 11),
        Err(SplitError::SubImageTooSmall { height: 9, .. })
    ));
}

/// A source that refuses to hand out sub-region views.
struct NoViews(image::RgbaImage);

impl PixelSource for NoViews {
    fn bounds(&self) -> Rect {
        PixelSource::bounds(&self.0)
    }

    fn rgba(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        PixelSource::rgba(&self.0, x, y)
    }

    fn supports_views(&self) -> bool {
        false
    }
}

#[test]
fn grid_rejects_viewless_source() {
    let source = NoViews(uniform_rgba(100, 100, [0, 0, 0, 255]));
    assert!(matches!(
        grid_split(&source, 2, 2),
        Err(SplitError::UnsupportedImage)
    ));
}

#[test]
fn grid_iterator_exhaustion() {
    let img = uniform_rgba(100, 100, [0, 0, 0, 255]);
    let mut regions = grid_split(&img, 2, 2).unwrap();

    let mut count = 0;
    while regions.has_next() {
        regions.next().unwrap();
        count += 1;
    }
    assert_eq!(count, 4);
    assert!(!regions.has_next());
    assert!(!regions.has_next());
    assert!(regions.next().is_none());
}

#[test]
fn grid_drain_all_matches_pull() {
    let img = uniform_rgba(100, 100, [0, 0, 0, 255]);

    let drained: Vec<Rect> = grid_split(&img, 2, 2)
        .unwrap()
        .drain_all()
        .iter()
        .map(|r| r.rect())
        .collect();
    let pulled: Vec<Rect> = grid_split(&img, 2, 2).unwrap().map(|r| r.rect()).collect();

    assert_eq!(drained, pulled);
}
