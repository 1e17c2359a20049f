//! Numeric primitives shared by every analyzer.
//!
//! All functions are total: empty input, zero variance and zero totals return
//! neutral values instead of NaN so reports always serialize cleanly.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `stddev / mean`, or 0 when the mean is not positive.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m <= 0.0 {
        return 0.0;
    }
    standard_deviation(values) / m
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max = values.iter().copied().reduce(f64::max).unwrap_or(0.0);
        Self {
            mean: round2(mean(values)),
            median: round2(median(values)),
            std_dev: round2(standard_deviation(values)),
            min,
            max,
        }
    }
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// A half-open `[min, max)` range used to bucket values.
#[derive(Debug, Clone, Copy)]
pub struct BucketRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl BucketRange {
    pub const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count `values` into `ranges`. Percentages are relative to `values.len()`,
/// so values outside every range lower the total below 100.
pub fn distribution(values: &[f64], ranges: &[BucketRange]) -> Vec<Bucket> {
    let total = values.len();
    ranges
        .iter()
        .map(|range| {
            let count = values.iter().filter(|v| range.contains(**v)).count();
            Bucket {
                label: range.label.to_string(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Frequency tables
// ---------------------------------------------------------------------------

pub fn frequency_map<I, T>(tokens: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub item: T,
    pub count: usize,
    pub percentage: f64,
}

/// The `n` most frequent entries, descending by count with ties broken by
/// ascending key. Percentages are relative to the sum of all counts in `map`.
pub fn top_n<T>(map: &HashMap<T, usize>, n: usize) -> Vec<Ranked<T>>
where
    T: Ord + Clone + Hash,
{
    let total: usize = map.values().sum();
    let mut entries: Vec<(&T, &usize)> = map.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(item, &count)| Ranked {
            item: item.clone(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Standard score against a reference distribution; 0 when the reference has
/// no spread.
pub fn z_score(value: f64, reference_mean: f64, reference_std_dev: f64) -> f64 {
    if reference_std_dev == 0.0 {
        return 0.0;
    }
    (value - reference_mean) / reference_std_dev
}

/// `(σ − μ) / (σ + μ)` over the sequence. −1 is perfectly uniform, +1 is
/// extremely bursty.
pub fn burstiness(values: &[f64]) -> f64 {
    let m = mean(values);
    let sd = standard_deviation(values);
    if sd + m == 0.0 {
        return 0.0;
    }
    (sd - m) / (sd + m)
}

/// Shannon entropy in bits over a categorical sequence.
pub fn entropy<T: Eq + Hash>(labels: &[T]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let total = labels.len() as f64;
    let value: f64 = frequency_map(labels.iter())
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    // Single-category sequences give -0.0
    value.max(0.0)
}

/// Entropy divided by its maximum (`log2` of the distinct label count).
pub fn normalized_entropy<T: Eq + Hash>(labels: &[T]) -> f64 {
    let distinct = frequency_map(labels.iter()).len();
    if distinct < 2 {
        return 0.0;
    }
    entropy(labels) / (distinct as f64).log2()
}

// ---------------------------------------------------------------------------
// Clustering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
    pub size: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Contiguous runs where each value is within `threshold` of its predecessor.
/// Runs shorter than `min_size` are dropped.
pub fn find_clusters(values: &[f64], threshold: f64, min_size: usize) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    if values.is_empty() {
        return clusters;
    }

    let mut start = 0usize;
    for i in 1..values.len() {
        if (values[i] - values[i - 1]).abs() > threshold {
            push_cluster(&mut clusters, values, start, i - 1, min_size);
            start = i;
        }
    }
    push_cluster(&mut clusters, values, start, values.len() - 1, min_size);
    clusters
}

fn push_cluster(
    clusters: &mut Vec<Cluster>,
    values: &[f64],
    start: usize,
    end: usize,
    min_size: usize,
) {
    let run = &values[start..=end];
    if run.len() < min_size {
        return;
    }
    clusters.push(Cluster {
        start,
        end,
        size: run.len(),
        mean: round2(mean(run)),
        min: run.iter().copied().fold(f64::INFINITY, f64::min),
        max: run.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    });
}

// ---------------------------------------------------------------------------
// Rounding and rates
// ---------------------------------------------------------------------------

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// `part / total × 100`, rounded to two decimals; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Occurrences per 1000 words, rounded to two decimals.
pub fn per_thousand(count: usize, total_words: usize) -> f64 {
    round2(per_thousand_raw(count, total_words))
}

pub fn per_thousand_raw(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    count as f64 / total_words as f64 * 1000.0
}

pub fn ratio(part: usize, total: usize) -> f64 {
    round4(ratio_raw(part, total))
}

pub fn ratio_raw(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}
