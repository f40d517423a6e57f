//! Aggregation policies for [`SegmentTree`](crate::SegmentTree).

/// The element/aggregate pair a segment tree is built over.
///
/// `merge` must be associative for adjacent ranges:
/// `merge(merge(a, b), c) == merge(a, merge(b, c))`.
/// It does not need to be commutative; the tree always passes the aggregate
/// of the left range as `left`.
pub trait SegmentPolicy {
    type Elem;
    type Agg: Clone;

    /// Aggregate of the single-element range `[elem]`.
    fn lift(elem: &Self::Elem) -> Self::Agg;

    /// Aggregate of `left ++ right`.
    fn merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg;
}

#[derive(Clone, Copy, Debug)]
pub enum Min {}

impl SegmentPolicy for Min {
    type Elem = i64;
    type Agg = i64;

    #[inline(always)]
    fn lift(elem: &Self::Elem) -> Self::Agg {
        *elem
    }

    #[inline(always)]
    fn merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.min(right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Sum {}

impl SegmentPolicy for Sum {
    type Elem = i64;
    type Agg = i64;

    #[inline(always)]
    fn lift(elem: &Self::Elem) -> Self::Agg {
        *elem
    }

    #[inline(always)]
    fn merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }
}

/// Number of odd and even elements in a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParityCounts {
    pub odd: usize,
    pub even: usize,
}

impl ParityCounts {
    pub fn of(value: i64) -> Self {
        // rem_euclid keeps negative odd values odd.
        let odd = value.rem_euclid(2) as usize;
        Self {
            odd,
            even: 1 - odd,
        }
    }

    pub fn total(&self) -> usize {
        self.odd + self.even
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ParityCount {}

impl SegmentPolicy for ParityCount {
    type Elem = i64;
    type Agg = ParityCounts;

    #[inline(always)]
    fn lift(elem: &Self::Elem) -> Self::Agg {
        ParityCounts::of(*elem)
    }

    #[inline(always)]
    fn merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        ParityCounts {
            odd: left.odd + right.odd,
            even: left.even + right.even,
        }
    }
}

/// Lexicographically largest string in a range.
#[derive(Clone, Copy, Debug)]
pub enum LexMax {}

impl SegmentPolicy for LexMax {
    type Elem = String;
    type Agg = String;

    fn lift(elem: &Self::Elem) -> Self::Agg {
        elem.clone()
    }

    fn merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        if left >= right {
            left.clone()
        } else {
            right.clone()
        }
    }
}
