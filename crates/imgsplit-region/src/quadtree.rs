//! Adaptive quadtree splitter
//!
//! Recursively partitions an image into a tree of regions, subdividing
//! only where local color variance says the content is heterogeneous.
//! Homogeneous areas stay as single large regions; busy areas break down
//! until the dissimilarity test passes or the depth bound is hit.
//!
//! # Algorithm
//!
//! At each node the region is probed one level down: it is partitioned
//! into `k x k` equal cells (`k` being the square root of the branching
//! factor), the average color of each cell is computed, and the
//! per-channel standard deviations across those averages are combined as
//! a Euclidean norm. If that dissimilarity stays within the threshold
//! the probe is discarded and the undivided region becomes a leaf;
//! otherwise the probe cells are committed and recursed into. Every
//! decision therefore costs one partition-and-statistics pass that may
//! be thrown away, which is cheap relative to practical depth limits.
//!
//! Leaves are collected depth-first in row-major probe order, so the
//! produced sequence is deterministic for a given image and
//! configuration.

use crate::error::{SplitError, SplitResult};
use crate::iter::Regions;
use crate::stats::{average_channels, std_deviation};
use imgsplit_core::{PixelSource, Rect, Region};

/// Branching factor used by [`quadtree_split`]: four quadrants per node.
pub const DEFAULT_BRANCHING_FACTOR: u32 = 4;

/// One stage of subdivision: either a terminal region or the committed
/// probe cells, in row-major order. Consumed by flattening immediately
/// after the build; no node outlives one split call.
enum Node<'a> {
    Leaf(Region<'a>),
    Internal(Vec<Node<'a>>),
}

/// Split an image into regions with an adaptive quadtree.
///
/// Subdivides with a branching factor of 4
/// ([`DEFAULT_BRANCHING_FACTOR`]); see
/// [`quadtree_split_with_branching`] for other factors and the error
/// conditions.
///
/// `max_depth` bounds the recursion (a value of 1 yields a single region
/// regardless of content) and `max_dissimilarity` is the threshold on
/// the combined per-channel standard deviation, on the 16-bit channel
/// scale.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use imgsplit_region::quadtree_split;
///
/// let img = RgbaImage::from_pixel(100, 100, Rgba([200, 200, 200, 255]));
/// let regions = quadtree_split(&img, 4, 2000.0).unwrap();
/// // Uniform content: nothing to subdivide
/// assert_eq!(regions.len(), 1);
/// ```
pub fn quadtree_split<'a>(
    source: &'a dyn PixelSource,
    max_depth: u32,
    max_dissimilarity: f64,
) -> SplitResult<Regions<'a>> {
    quadtree_split_with_branching(source, max_depth, max_dissimilarity, DEFAULT_BRANCHING_FACTOR)
}

/// Split an image with an explicit branching factor.
///
/// The branching factor is the number of equal cells a region divides
/// into when subdividing and must be a perfect square (4, 9, 25, ...).
///
/// # Errors
///
/// All configuration errors surface before any recursion:
///
/// - [`SplitError::InvalidParameters`] if `max_depth` is 0 or
///   `max_dissimilarity` is negative or not finite
/// - [`SplitError::InvalidBranchingFactor`] if `branching_factor` is not
///   a perfect square at least 4
/// - [`SplitError::UnsupportedImage`] if the source cannot produce
///   sub-region views
/// - [`SplitError::EmptyImage`] if the source has zero area
///
/// During recursion, [`SplitError::DegenerateRegion`] is returned if
/// subdivision reaches a region smaller than the cell grid along either
/// axis, which means `max_depth` exceeds what the image size supports.
pub fn quadtree_split_with_branching<'a>(
    source: &'a dyn PixelSource,
    max_depth: u32,
    max_dissimilarity: f64,
    branching_factor: u32,
) -> SplitResult<Regions<'a>> {
    if max_depth == 0 {
        return Err(SplitError::InvalidParameters(
            "max depth must be at least 1".into(),
        ));
    }
    if !max_dissimilarity.is_finite() || max_dissimilarity < 0.0 {
        return Err(SplitError::InvalidParameters(format!(
            "max dissimilarity must be finite and non-negative, got {max_dissimilarity}"
        )));
    }
    let side = branching_side(branching_factor)?;
    if !source.supports_views() {
        return Err(SplitError::UnsupportedImage);
    }
    if source.bounds().is_empty() {
        return Err(SplitError::EmptyImage);
    }

    let root = build(Region::full(source)?, 1, max_depth, max_dissimilarity, side)?;

    let mut leaves = Vec::new();
    flatten(root, &mut leaves);
    Ok(Regions::new(leaves))
}

/// Validate a branching factor and return its integer square root.
fn branching_side(factor: u32) -> SplitResult<u32> {
    let side = (factor as f64).sqrt().round() as u32;
    if side < 2 || side.checked_mul(side) != Some(factor) {
        return Err(SplitError::InvalidBranchingFactor(factor));
    }
    Ok(side)
}

/// Recursively build the subdivision tree. `level` starts at 1 for the
/// root, so `max_depth == 1` returns a single leaf immediately.
fn build<'a>(
    region: Region<'a>,
    level: u32,
    max_depth: u32,
    max_dissimilarity: f64,
    side: u32,
) -> SplitResult<Node<'a>> {
    if level == max_depth {
        return Ok(Node::Leaf(region));
    }

    // Probe one level down to measure dissimilarity
    let cells = partition(region, side, level)?;
    if dissimilarity(&cells)? <= max_dissimilarity {
        // Homogeneous enough: discard the probe, keep the whole region
        return Ok(Node::Leaf(region));
    }

    let mut children = Vec::with_capacity(cells.len());
    for cell in cells {
        children.push(build(cell, level + 1, max_depth, max_dissimilarity, side)?);
    }
    Ok(Node::Internal(children))
}

/// Partition a region into a `side x side` grid of equal cells in
/// row-major order.
///
/// Cell extents come from truncating integer division, so when the
/// region size is not divisible by `side` the trailing remainder pixels
/// belong to no cell. This mirrors the grid splitter's behavior.
fn partition<'a>(region: Region<'a>, side: u32, level: u32) -> SplitResult<Vec<Region<'a>>> {
    let rect = region.rect();
    let cell_w = rect.w / side;
    let cell_h = rect.h / side;
    if cell_w == 0 || cell_h == 0 {
        return Err(SplitError::DegenerateRegion {
            width: cell_w,
            height: cell_h,
            level,
        });
    }

    let mut cells = Vec::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let cell = Rect::new(rect.x + col * cell_w, rect.y + row * cell_h, cell_w, cell_h);
            cells.push(region.crop(cell)?);
        }
    }
    Ok(cells)
}

/// Combined dissimilarity of a set of cells: the Euclidean norm of the
/// per-channel standard deviations across the cell color averages.
fn dissimilarity(cells: &[Region<'_>]) -> SplitResult<f64> {
    let mut avg_r = Vec::with_capacity(cells.len());
    let mut avg_g = Vec::with_capacity(cells.len());
    let mut avg_b = Vec::with_capacity(cells.len());
    for cell in cells {
        let (r, g, b) = average_channels(cell)?;
        avg_r.push(r);
        avg_g.push(g);
        avg_b.push(b);
    }

    let sd_r = std_deviation(&avg_r);
    let sd_g = std_deviation(&avg_g);
    let sd_b = std_deviation(&avg_b);
    Ok((sd_r.powi(2) + sd_g.powi(2) + sd_b.powi(2)).sqrt())
}

/// Collect the leaf regions depth-first, preserving child order.
fn flatten<'a>(node: Node<'a>, out: &mut Vec<Region<'a>>) {
    match node {
        Node::Leaf(region) => out.push(region),
        Node::Internal(children) => {
            for child in children {
                flatten(child, out);
            }
        }
    }
}
