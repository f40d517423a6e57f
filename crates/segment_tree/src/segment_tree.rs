use std::fmt;
use std::ops::Range;

use crate::SegmentPolicy;
use crate::error::{Result, SegmentTreeError};

const ROOT: usize = 1;

#[inline(always)]
fn slot_count(n: usize) -> usize {
    4 * n + 2
}

/// Combines the contributions of two adjacent subtrees, `left` first.
#[inline(always)]
fn merge_or_pass<P: SegmentPolicy>(
    left: Option<P::Agg>,
    right: Option<P::Agg>,
) -> Option<P::Agg> {
    match (left, right) {
        (Some(l), Some(r)) => Some(P::merge(&l, &r)),
        (l, None) => l,
        (None, r) => r,
    }
}

/// Array-backed segment tree over a fixed-length sequence.
///
/// Node `1` is the root and node `i` has children `2i` and `2i + 1`. Node `i`
/// covers the inclusive element range `left[i]..=right[i]` and stores the
/// aggregate of that range; slots not used by any node stay `None`.
pub struct SegmentTree<P: SegmentPolicy> {
    values: Vec<P::Elem>,
    tree: Vec<Option<P::Agg>>,
    left: Vec<usize>,
    right: Vec<usize>,
}

impl<P: SegmentPolicy> SegmentTree<P> {
    pub fn new(values: Vec<P::Elem>) -> Self {
        let mut seg = Self::with_geometry(values);
        seg.build(ROOT);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = seg.values.len(),
            slots = seg.tree.len(),
            "built segment tree"
        );
        seg
    }

    /// Tree over `n` default elements.
    pub fn with_len(n: usize) -> Self
    where
        P::Elem: Default,
    {
        Self::new(std::iter::repeat_with(<P::Elem as Default>::default).take(n).collect())
    }

    fn with_geometry(values: Vec<P::Elem>) -> Self {
        let n = values.len();
        let slots = slot_count(n);
        let mut seg = Self {
            values,
            tree: std::iter::repeat_with(|| None).take(slots).collect(),
            left: vec![0; slots],
            right: vec![0; slots],
        };
        if n > 0 {
            seg.init_bounds(ROOT, 0, n - 1);
        }
        seg
    }

    fn init_bounds(&mut self, node: usize, lo: usize, hi: usize) {
        self.left[node] = lo;
        self.right[node] = hi;
        if lo != hi {
            let mid = lo + (hi - lo) / 2;
            self.init_bounds(2 * node, lo, mid);
            self.init_bounds(2 * node + 1, mid + 1, hi);
        }
    }

    fn build(&mut self, node: usize) {
        if self.values.is_empty() {
            return;
        }
        let lo = self.left[node];
        if lo == self.right[node] {
            self.tree[node] = Some(P::lift(&self.values[lo]));
        } else {
            self.build(2 * node);
            self.build(2 * node + 1);
            self.pull(node);
        }
    }

    #[inline(always)]
    fn pull(&mut self, node: usize) {
        let agg = match (&self.tree[2 * node], &self.tree[2 * node + 1]) {
            (Some(l), Some(r)) => Some(P::merge(l, r)),
            (l, r) => l.clone().or_else(|| r.clone()),
        };
        self.tree[node] = agg;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&P::Elem> {
        self.values.get(index)
    }

    pub fn as_slice(&self) -> &[P::Elem] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P::Elem> {
        self.values.iter()
    }

    pub fn to_vec(&self) -> Vec<P::Elem>
    where
        P::Elem: Clone,
    {
        self.values.clone()
    }

    /// Aggregate of the whole sequence; `None` for an empty tree.
    pub fn all_fold(&self) -> Option<P::Agg> {
        self.tree.get(ROOT).cloned().flatten()
    }

    /// Aggregate of the half-open `range`.
    ///
    /// Returns `None` when the range is empty or reaches past the end.
    pub fn fold(&self, range: Range<usize>) -> Option<P::Agg> {
        if range.start >= range.end || range.end > self.values.len() {
            return None;
        }
        self.query_node(ROOT, range.start, range.end - 1)
    }

    /// Aggregate of the inclusive range `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi >= self.len()`.
    pub fn range_query(&self, lo: usize, hi: usize) -> P::Agg {
        match self.try_range_query(lo, hi) {
            Ok(agg) => agg,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_range_query(&self, lo: usize, hi: usize) -> Result<P::Agg> {
        let invalid = SegmentTreeError::InvalidRange {
            lo,
            hi,
            len: self.values.len(),
        };
        if lo > hi {
            return Err(invalid);
        }
        self.fold(lo..hi.saturating_add(1)).ok_or(invalid)
    }

    fn query_node(&self, node: usize, lo: usize, hi: usize) -> Option<P::Agg> {
        let (l, r) = (self.left[node], self.right[node]);
        if hi < l || r < lo {
            return None;
        }
        if lo <= l && r <= hi {
            return self.tree[node].clone();
        }
        let left = self.query_node(2 * node, lo, hi);
        let right = self.query_node(2 * node + 1, lo, hi);
        merge_or_pass::<P>(left, right)
    }

    /// Replaces the element at `index` and repairs its root-to-leaf path.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn point_update(&mut self, index: usize, value: P::Elem) {
        if let Err(err) = self.try_point_update(index, value) {
            panic!("{err}");
        }
    }

    pub fn try_point_update(&mut self, index: usize, value: P::Elem) -> Result<()> {
        let len = self.values.len();
        if index >= len {
            return Err(SegmentTreeError::IndexOutOfBounds { index, len });
        }
        self.values[index] = value;
        self.update_node(ROOT, index);
        #[cfg(feature = "tracing")]
        tracing::trace!(index, "point update");
        Ok(())
    }

    fn update_node(&mut self, node: usize, index: usize) {
        if self.left[node] == self.right[node] {
            self.tree[node] = Some(P::lift(&self.values[index]));
            return;
        }
        if index <= self.right[2 * node] {
            self.update_node(2 * node, index);
        } else {
            self.update_node(2 * node + 1, index);
        }
        self.pull(node);
    }

    /// Replaces every element and rebuilds all aggregates in `O(n)`.
    ///
    /// The length is fixed at construction; a sequence of another length is
    /// rejected and the tree is left as it was.
    pub fn assign(&mut self, values: Vec<P::Elem>) -> Result<()> {
        let expected = self.values.len();
        if values.len() != expected {
            return Err(SegmentTreeError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        self.values = values;
        self.build(ROOT);
        #[cfg(feature = "tracing")]
        tracing::debug!(len = expected, "rebuilt segment tree");
        Ok(())
    }
}

impl<P: SegmentPolicy> From<Vec<P::Elem>> for SegmentTree<P> {
    fn from(values: Vec<P::Elem>) -> Self {
        Self::new(values)
    }
}

impl<P: SegmentPolicy> FromIterator<P::Elem> for SegmentTree<P> {
    fn from_iter<I: IntoIterator<Item = P::Elem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<P> Clone for SegmentTree<P>
where
    P: SegmentPolicy,
    P::Elem: Clone,
{
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            tree: self.tree.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<P> fmt::Debug for SegmentTree<P>
where
    P: SegmentPolicy,
    P::Elem: fmt::Debug,
    P::Agg: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("values", &self.values)
            .field("root", &self.tree.get(ROOT).and_then(Option::as_ref))
            .finish()
    }
}
