//! Pull-based iteration over produced regions
//!
//! Both splitters return a [`Regions`] value: a single-pass, finite
//! sequence of region views. The region list is materialized up front —
//! regions are cheap rectangle-plus-borrow values, so there is no
//! laziness to be gained once the split decision has been made — and
//! iteration is a position cursor over it.

use imgsplit_core::Region;
use std::iter::FusedIterator;

/// A single-pass sequence of regions produced by a splitter.
///
/// Implements [`Iterator`], so regions are normally consumed with a
/// `for` loop or adaptors. [`has_next`](Regions::has_next) mirrors the
/// classic pull-iterator protocol without advancing; after exhaustion it
/// stays `false` and [`next`](Iterator::next) stays `None` (the iterator
/// is fused).
///
/// Not restartable. Advancing requires `&mut`, so concurrent pulls need
/// external synchronization by construction.
#[derive(Debug)]
pub struct Regions<'a> {
    items: Vec<Region<'a>>,
    pos: usize,
}

impl<'a> Regions<'a> {
    pub(crate) fn new(items: Vec<Region<'a>>) -> Self {
        Self { items, pos: 0 }
    }

    /// Whether at least one more region remains. Idempotent; does not
    /// advance the cursor.
    pub fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    /// Number of regions remaining.
    pub fn len(&self) -> usize {
        self.items.len() - self.pos
    }

    /// Whether the sequence is exhausted.
    pub fn is_empty(&self) -> bool {
        !self.has_next()
    }

    /// Consume the iterator and return all remaining regions in order.
    pub fn drain_all(mut self) -> Vec<Region<'a>> {
        self.items.split_off(self.pos)
    }
}

impl<'a> Iterator for Regions<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Region<'a>> {
        let item = self.items.get(self.pos).copied()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Regions<'_> {}
impl FusedIterator for Regions<'_> {}
