use crate::{push_back, push_front};

/// Block decomposition ("root-N") solver.
///
/// Elements are split into blocks of `floor(sqrt(n))` elements; the last
/// block may be shorter. A query folds the loose elements before the first
/// whole block, the whole blocks, then the loose elements after the last
/// whole block, always in left-to-right order.
#[derive(Clone, Debug)]
pub struct RootN<E, A, L, M> {
    values: Vec<E>,
    block: usize,
    blocks: Vec<A>,
    lift: L,
    merge: M,
}

impl<E, A, L, M> RootN<E, A, L, M>
where
    E: Clone,
    A: Clone,
    L: Fn(&E) -> A,
    M: Fn(&A, &A) -> A,
{
    pub fn new(values: &[E], lift: L, merge: M) -> Self {
        let n = values.len();
        let block = n.isqrt().max(1);
        let mut root_n = Self {
            values: values.to_vec(),
            block,
            blocks: Vec::with_capacity(n.div_ceil(block)),
            lift,
            merge,
        };
        for b in 0..n.div_ceil(block) {
            let agg = root_n.fold_block(b);
            root_n.blocks.push(agg);
        }
        root_n
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn block_size(&self) -> usize {
        self.block
    }

    fn fold_block(&self, b: usize) -> A {
        let start = b * self.block;
        let end = (start + self.block).min(self.values.len());
        let mut acc = (self.lift)(&self.values[start]);
        for value in &self.values[start + 1..end] {
            acc = (self.merge)(&acc, &(self.lift)(value));
        }
        acc
    }

    /// Replaces `values[index]` and refolds its block.
    pub fn update(&mut self, index: usize, value: E) {
        self.values[index] = value;
        let b = index / self.block;
        self.blocks[b] = self.fold_block(b);
    }

    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi >= self.len()`.
    pub fn query(&self, lo: usize, hi: usize) -> A {
        let n = self.values.len();
        assert!(
            lo <= hi && hi < n,
            "invalid range [{lo}, {hi}] for length {n}"
        );
        let block = self.block;
        let mut l = lo;
        let mut r = hi + 1;
        let mut left = None;
        let mut right = None;

        while l < r && l % block != 0 {
            left = push_back(left, (self.lift)(&self.values[l]), &self.merge);
            l += 1;
        }
        // A range ending at `n` covers the trailing short block whole.
        while l < r && r % block != 0 && r != n {
            r -= 1;
            right = push_front((self.lift)(&self.values[r]), right, &self.merge);
        }
        if l < r {
            for agg in &self.blocks[l / block..r.div_ceil(block)] {
                left = push_back(left, agg.clone(), &self.merge);
            }
        }

        match (left, right) {
            (Some(l), Some(r)) => (self.merge)(&l, &r),
            (Some(agg), None) | (None, Some(agg)) => agg,
            (None, None) => unreachable!("non-empty range folds at least one element"),
        }
    }
}
