use serde::{Deserialize, Serialize};

use crate::stats::{self, Bucket, BucketRange, Ranked};
use crate::text;
use crate::AnalysisContext;

const TOP_WORDS: usize = 50;
const TOP_BIGRAMS: usize = 20;

const WORD_LENGTH_BUCKETS: &[BucketRange] = &[
    BucketRange::new("1-3", 1.0, 4.0),
    BucketRange::new("4-6", 4.0, 7.0),
    BucketRange::new("7-9", 7.0, 10.0),
    BucketRange::new("10+", 10.0, f64::INFINITY),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub total_words: usize,
    pub unique_words: usize,
    pub type_token_ratio: f64,
    pub hapax_legomena: usize,
    pub hapax_ratio: f64,
    pub average_word_length: f64,
    pub word_length_distribution: Vec<Bucket>,
    pub contractions: usize,
    pub contraction_rate: f64,
    pub top_words: Vec<Ranked<String>>,
    pub top_bigrams: Vec<Ranked<String>>,
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> VocabularyReport {
    let prose = text::paragraphs(text).join("\n\n");
    let words = text::lowercase_words(&prose);
    let total = words.len();

    let counts = stats::frequency_map(words.iter().cloned());
    let unique = counts.len();
    let hapax = counts.values().filter(|&&c| c == 1).count();

    let lengths: Vec<f64> = words.iter().map(|w| w.chars().count() as f64).collect();
    let contractions = words.iter().filter(|w| text::is_contraction(w)).count();

    let content_counts = stats::frequency_map(
        words
            .iter()
            .filter(|w| !text::is_stopword(w) && w.chars().count() > 1)
            .cloned(),
    );

    VocabularyReport {
        total_words: total,
        unique_words: unique,
        type_token_ratio: stats::ratio(unique, total),
        hapax_legomena: hapax,
        hapax_ratio: stats::ratio(hapax, unique),
        average_word_length: stats::round2(stats::mean(&lengths)),
        word_length_distribution: stats::distribution(&lengths, WORD_LENGTH_BUCKETS),
        contractions,
        contraction_rate: stats::per_thousand(contractions, total),
        top_words: stats::top_n(&content_counts, TOP_WORDS),
        top_bigrams: top_bigrams(&prose),
    }
}

/// Bigrams within sentences where neither word is a stopword.
fn top_bigrams(prose: &str) -> Vec<Ranked<String>> {
    let mut bigrams = Vec::new();
    for sentence in text::sentences(prose) {
        let words = text::lowercase_words(&sentence);
        for pair in words.windows(2) {
            if pair.iter().any(|w| text::is_stopword(w)) {
                continue;
            }
            bigrams.push(format!("{} {}", pair[0], pair[1]));
        }
    }
    let counts = stats::frequency_map(bigrams);
    let mut ranked = stats::top_n(&counts, TOP_BIGRAMS);
    ranked.retain(|r| r.count > 1);
    ranked
}
