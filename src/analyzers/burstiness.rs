use serde::{Deserialize, Serialize};

use crate::analyzers::paragraph::{self, OpeningType};
use crate::config::BurstinessThresholds;
use crate::stats::{self, Cluster};
use crate::text;
use crate::AnalysisContext;

const MAX_REPORTED_CLUSTERS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rhythm {
    /// Suspiciously even sentence lengths.
    Uniform,
    Moderate,
    Natural,
}

impl Rhythm {
    pub fn from_coefficient(coefficient: f64, bands: &BurstinessThresholds) -> Self {
        if coefficient < bands.uniform_below {
            Self::Uniform
        } else if coefficient > bands.natural_above {
            Self::Natural
        } else {
            Self::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform (machine-like)",
            Self::Moderate => "moderate risk",
            Self::Natural => "natural",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstinessReport {
    pub total_sentences: usize,
    pub coefficient: f64,
    pub rhythm: Rhythm,
    pub cluster_count: usize,
    pub average_cluster_size: f64,
    /// Share of sentences that sit inside some cluster.
    pub cluster_coverage: f64,
    /// The largest clusters, in sequence order.
    pub clusters: Vec<Cluster>,
    pub abrupt_shifts: usize,
    pub opening_entropy: f64,
    pub opening_diversity: f64,
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> BurstinessReport {
    let bands = &ctx.thresholds.burstiness;
    let lengths = text::sentence_word_counts(text);
    let coefficient = stats::burstiness(&lengths);

    let all_clusters =
        stats::find_clusters(&lengths, bands.cluster_threshold, bands.cluster_min_size);
    let clustered: usize = all_clusters.iter().map(|c| c.size).sum();
    let sizes: Vec<f64> = all_clusters.iter().map(|c| c.size as f64).collect();

    let mut clusters = all_clusters.clone();
    clusters.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.start.cmp(&b.start)));
    clusters.truncate(MAX_REPORTED_CLUSTERS);
    clusters.sort_by_key(|c| c.start);

    let abrupt_shifts = lengths
        .windows(2)
        .filter(|w| (w[1] - w[0]).abs() >= bands.shift_threshold)
        .count();

    let openings: Vec<OpeningType> = text::paragraphs(text)
        .iter()
        .map(|p| paragraph::classify_opening(p))
        .collect();

    BurstinessReport {
        total_sentences: lengths.len(),
        coefficient: stats::round4(coefficient),
        rhythm: Rhythm::from_coefficient(coefficient, bands),
        cluster_count: all_clusters.len(),
        average_cluster_size: stats::round2(stats::mean(&sizes)),
        cluster_coverage: stats::ratio(clustered, lengths.len()),
        clusters,
        abrupt_shifts,
        opening_entropy: stats::round4(stats::entropy(&openings)),
        opening_diversity: stats::round4(stats::normalized_entropy(&openings)),
    }
}
