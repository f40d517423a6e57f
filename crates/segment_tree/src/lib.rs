//! Generic array-backed segment tree with point updates.
//!
//! The tree is parameterized by a [`SegmentPolicy`], which fixes the element
//! type, the aggregate type and the two operations connecting them:
//! `lift` (element to singleton aggregate) and `merge` (adjacent aggregates
//! to the aggregate of their union). `merge` must be associative but is never
//! assumed to be commutative.
//!
//! - `range_query(lo, hi)` uses inclusive bounds and panics on misuse;
//!   `try_range_query` reports a [`SegmentTreeError`] instead.
//! - `fold(range)` takes a half-open range and returns `None` when it is
//!   empty or out of bounds.

mod error;
mod policy;
mod segment_tree;

pub use error::{Result, SegmentTreeError};
pub use policy::{LexMax, Min, ParityCount, ParityCounts, SegmentPolicy, Sum};
pub use segment_tree::SegmentTree;
