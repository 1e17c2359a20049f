use proptest::prelude::*;

use voiceprint::stats::{
    burstiness, distribution, entropy, find_clusters, frequency_map, mean, median,
    standard_deviation, top_n, z_score, BucketRange,
};

const RANGES: &[BucketRange] = &[
    BucketRange::new("low", 0.0, 10.0),
    BucketRange::new("mid", 10.0, 20.0),
    BucketRange::new("high", 20.0, 40.0),
];

#[test]
fn empty_input_is_neutral() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(standard_deviation(&[]), 0.0);
    assert_eq!(burstiness(&[]), 0.0);
    assert_eq!(entropy::<&str>(&[]), 0.0);
    assert!(find_clusters(&[], 5.0, 2).is_empty());
}

#[test]
fn standard_deviation_is_population() {
    // Sample stddev of this set would be ~2.138; population is exactly 2.
    let sd = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert!((sd - 2.0).abs() < 1e-12, "expected population stddev 2, got {sd}");
}

#[test]
fn median_of_even_length_averages_middle_pair() {
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
}

#[test]
fn uniform_sequence_has_burstiness_minus_one() {
    let b = burstiness(&[5.0, 5.0, 5.0, 5.0]);
    assert!((b + 1.0).abs() < 1e-12, "expected -1, got {b}");
}

#[test]
fn z_score_with_zero_spread_is_zero() {
    assert_eq!(z_score(42.0, 3.0, 0.0), 0.0);
    assert_eq!(z_score(5.0, 3.0, 1.0), 2.0);
}

#[test]
fn top_n_breaks_ties_alphabetically() {
    let map = frequency_map(["b", "a", "c", "a", "b", "d"]);
    let top = top_n(&map, 3);
    let items: Vec<&str> = top.iter().map(|r| r.item).collect();
    assert_eq!(items, vec!["a", "b", "c"]);
    assert_eq!(top[0].count, 2);
    assert!((top[0].percentage - 33.33).abs() < 1e-9);
}

#[test]
fn entropy_of_even_split_is_one_bit() {
    let e = entropy(&["q", "s", "q", "s"]);
    assert!((e - 1.0).abs() < 1e-12, "expected 1 bit, got {e}");
    assert_eq!(entropy(&["q", "q", "q"]), 0.0);
}

#[test]
fn clusters_are_contiguous_runs() {
    let values = [10.0, 12.0, 14.0, 40.0, 3.0, 5.0, 30.0];
    let clusters = find_clusters(&values, 5.0, 2);
    assert_eq!(clusters.len(), 2, "clusters: {clusters:?}");
    assert_eq!((clusters[0].start, clusters[0].end, clusters[0].size), (0, 2, 3));
    assert_eq!(clusters[0].mean, 12.0);
    assert_eq!((clusters[0].min, clusters[0].max), (10.0, 14.0));
    assert_eq!((clusters[1].start, clusters[1].end), (4, 5));
}

#[test]
fn final_run_is_flushed() {
    let clusters = find_clusters(&[1.0, 30.0, 31.0, 32.0], 5.0, 2);
    assert_eq!(clusters.len(), 1);
    assert_eq!((clusters[0].start, clusters[0].end), (1, 3));
}

#[test]
fn distribution_reports_percentages_over_all_values() {
    let buckets = distribution(&[1.0, 5.0, 15.0, 25.0], RANGES);
    let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![2, 1, 1]);
    assert_eq!(buckets[0].percentage, 50.0);
    assert_eq!(buckets[1].label, "mid");
}

proptest! {
    #[test]
    fn standard_deviation_is_non_negative(values in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        prop_assert!(standard_deviation(&values) >= 0.0);
    }

    #[test]
    fn z_score_guard_holds(x in -1e6f64..1e6, m in -1e6f64..1e6) {
        prop_assert_eq!(z_score(x, m, 0.0), 0.0);
    }

    #[test]
    fn burstiness_is_bounded(values in prop::collection::vec(0f64..200.0, 1..64)) {
        let b = burstiness(&values);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&b), "burstiness {} out of range", b);
    }

    #[test]
    fn top_n_is_sorted_and_map_counts_every_token(
        tokens in prop::collection::vec("[a-e]", 0..80),
        n in 0usize..8,
    ) {
        let map = frequency_map(tokens.iter().cloned());
        prop_assert_eq!(map.values().sum::<usize>(), tokens.len());

        let top = top_n(&map, n);
        prop_assert!(top.len() <= n);
        prop_assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn buckets_partition_values_in_range(values in prop::collection::vec(-10f64..60.0, 0..64)) {
        let buckets = distribution(&values, RANGES);
        let bucketed: usize = buckets.iter().map(|b| b.count).sum();
        let in_range = values
            .iter()
            .filter(|v| RANGES.iter().any(|r| r.contains(**v)))
            .count();
        prop_assert_eq!(bucketed, in_range);

        let total_pct: f64 = buckets.iter().map(|b| b.percentage).sum();
        prop_assert!(total_pct <= 100.0 + 0.05, "percentages sum to {}", total_pct);
    }
}
