//! imgsplit-test - Regression test framework for imgsplit
//!
//! Provides a small regression harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use imgsplit_test::{RegParams, regions_to_text};
//!
//! let mut rp = RegParams::new("quadtree_quadrants");
//! rp.write_data_and_check(regions_to_text(&regions).as_bytes(), "regions")?;
//! rp.compare_values(4.0, regions.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{quadrant_rgba, quadrant_rgba16, uniform_rgba};

use imgsplit_core::Region;

/// Render a region list as one `x,y,w,h` line per region.
///
/// The canonical text form used by golden files; the line order is the
/// iteration order, which the splitters guarantee to be deterministic.
pub fn regions_to_text(regions: &[Region<'_>]) -> String {
    let mut out = String::new();
    for region in regions {
        let r = region.rect();
        out.push_str(&format!("{},{},{},{}\n", r.x, r.y, r.w, r.h));
    }
    out
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imgsplit-test is at crates/imgsplit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
