//! Reference solvers for range aggregation queries.
//!
//! Both solvers take the same `lift`/`merge` pair a segment tree is built
//! from and answer inclusive `[lo, hi]` queries, so their results can be
//! compared against the tree directly.

mod brute_force;
mod root_n;

pub use brute_force::{RangeTable, fold_range};
pub use root_n::RootN;

#[inline(always)]
pub(crate) fn push_back<A, M>(acc: Option<A>, next: A, merge: &M) -> Option<A>
where
    M: Fn(&A, &A) -> A,
{
    Some(match acc {
        Some(acc) => merge(&acc, &next),
        None => next,
    })
}

#[inline(always)]
pub(crate) fn push_front<A, M>(prev: A, acc: Option<A>, merge: &M) -> Option<A>
where
    M: Fn(&A, &A) -> A,
{
    Some(match acc {
        Some(acc) => merge(&prev, &acc),
        None => prev,
    })
}
