use crate::push_back;

/// Folds `values[lo..=hi]` left to right in `O(hi - lo)`.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi >= values.len()`.
pub fn fold_range<E, A, L, M>(values: &[E], lo: usize, hi: usize, lift: L, merge: M) -> A
where
    L: Fn(&E) -> A,
    M: Fn(&A, &A) -> A,
{
    assert!(
        lo <= hi && hi < values.len(),
        "invalid range [{lo}, {hi}] for length {}",
        values.len()
    );
    let mut acc = lift(&values[lo]);
    for value in &values[lo + 1..=hi] {
        acc = merge(&acc, &lift(value));
    }
    acc
}

/// Every answer precomputed: `O(n^2)` space, `O(1)` query.
///
/// Row `i` holds the prefix folds of `values[i..]`, so `rows[i][j - i]` is the
/// aggregate of `[i, j]`.
#[derive(Clone, Debug)]
pub struct RangeTable<A> {
    rows: Vec<Vec<A>>,
}

impl<A: Clone> RangeTable<A> {
    pub fn new<E, L, M>(values: &[E], lift: L, merge: M) -> Self
    where
        L: Fn(&E) -> A,
        M: Fn(&A, &A) -> A,
    {
        let n = values.len();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n - i);
            let mut acc = None;
            for value in &values[i..] {
                acc = push_back(acc, lift(value), &merge);
                if let Some(agg) = &acc {
                    row.push(agg.clone());
                }
            }
            rows.push(row);
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi >= self.len()`.
    pub fn query(&self, lo: usize, hi: usize) -> A {
        assert!(
            lo <= hi && hi < self.rows.len(),
            "invalid range [{lo}, {hi}] for length {}",
            self.rows.len()
        );
        self.rows[lo][hi - lo].clone()
    }
}
