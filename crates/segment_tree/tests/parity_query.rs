use bench::{random_intervals, random_intervals_containing, random_values, seeded_rng};
use oracle::{RootN, fold_range};
use segment_tree::{ParityCount, ParityCounts, SegmentPolicy, SegmentTree};

/// Odd/even counts from running prefix counts.
fn prefix_counts(values: &[i64], queries: &[(usize, usize)]) -> Vec<ParityCounts> {
    let mut odd = Vec::with_capacity(values.len() + 1);
    odd.push(0_usize);
    for &v in values {
        odd.push(odd[odd.len() - 1] + v.rem_euclid(2) as usize);
    }
    queries
        .iter()
        .map(|&(lo, hi)| {
            let odd = odd[hi + 1] - odd[lo];
            ParityCounts {
                odd,
                even: hi + 1 - lo - odd,
            }
        })
        .collect()
}

#[test]
fn size_constructor_counts_default_as_even() {
    let seg = SegmentTree::<ParityCount>::with_len(42);
    assert_eq!(seg.range_query(0, 41), ParityCounts { odd: 0, even: 42 });
}

#[test]
fn queries_match_prefix_counts() {
    let mut rng = seeded_rng(0x0DD);
    for (n, m) in [(1, 1), (42, 420), (42_000, 4_200)] {
        let values = random_values(&mut rng, n, 1..=n as i64);
        let seg = SegmentTree::<ParityCount>::new(values.clone());
        let queries = random_intervals(&mut rng, n, m);
        let expected = prefix_counts(&values, &queries);
        for (&(lo, hi), want) in queries.iter().zip(expected) {
            let got = seg.range_query(lo, hi);
            assert_eq!(got, want, "n={n} lo={lo} hi={hi}");
            assert_eq!(got.total(), hi - lo + 1);
        }
    }
}

#[test]
fn negative_values_match_root_n() {
    let mut rng = seeded_rng(0xE7E);
    let n = 1_000;
    let values = random_values(&mut rng, n, -100..=100);
    let seg = SegmentTree::<ParityCount>::new(values.clone());
    let root_n = RootN::new(&values, ParityCount::lift, ParityCount::merge);
    for (lo, hi) in random_intervals(&mut rng, n, 2_000) {
        assert_eq!(seg.range_query(lo, hi), root_n.query(lo, hi));
    }
}

#[test]
fn update_swaps_one_count() {
    let mut rng = seeded_rng(0x0E0E);
    let n = 4_200;
    let values = random_values(&mut rng, n, 1..=n as i64);

    for index in (0..n).step_by(500) {
        let mut seg = SegmentTree::<ParityCount>::new(values.clone());
        let queries = random_intervals_containing(&mut rng, n, 420, index);
        let before: Vec<_> = queries
            .iter()
            .map(|&(lo, hi)| seg.range_query(lo, hi))
            .collect();

        let was_odd = values[index].rem_euclid(2) as usize;
        seg.point_update(index, 42);

        for (&(lo, hi), old) in queries.iter().zip(before) {
            let new = seg.range_query(lo, hi);
            assert_eq!(old.odd - was_odd, new.odd);
            assert_eq!(old.even - (1 - was_odd), new.even - 1);
        }
    }
}

#[test]
fn update_matches_root_n_update() {
    let mut rng = seeded_rng(0xABC);
    let n = 777;
    let mut values = random_values(&mut rng, n, -9..=9);
    let mut seg = SegmentTree::<ParityCount>::new(values.clone());
    let mut root_n = RootN::new(&values, ParityCount::lift, ParityCount::merge);

    for (step, (lo, hi)) in random_intervals(&mut rng, n, 300).into_iter().enumerate() {
        let index = (step * 131) % n;
        let value = step as i64 - 150;
        seg.point_update(index, value);
        root_n.update(index, value);
        values[index] = value;

        let want = fold_range(&values, lo, hi, ParityCount::lift, ParityCount::merge);
        assert_eq!(seg.range_query(lo, hi), want);
        assert_eq!(root_n.query(lo, hi), want);
    }
}
