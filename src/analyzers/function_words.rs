//! Function-word stylometry.
//!
//! Frequencies per 1000 words are compared against a reference-English
//! baseline. There is no smoothing, so short corpora give noisy z-scores; the
//! report says so in its recommendations instead of refusing to score.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::reference::FunctionWordCategory;
use crate::stats;
use crate::text;
use crate::AnalysisContext;

const TOP_RECOMMENDED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distinctiveness {
    HighlyDistinctive,
    Distinctive,
    Normal,
    Avoided,
    HighlyAvoided,
}

impl Distinctiveness {
    pub fn from_z_score(z: f64) -> Self {
        if z > 2.0 {
            Self::HighlyDistinctive
        } else if z > 1.0 {
            Self::Distinctive
        } else if z < -2.0 {
            Self::HighlyAvoided
        } else if z < -1.0 {
            Self::Avoided
        } else {
            Self::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighlyDistinctive => "highly distinctive",
            Self::Distinctive => "distinctive",
            Self::Normal => "normal",
            Self::Avoided => "avoided",
            Self::HighlyAvoided => "highly avoided",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub category: FunctionWordCategory,
    pub tier: u8,
    pub count: usize,
    pub per_1000: f64,
    pub reference_mean: f64,
    pub z_score: f64,
    pub distinctiveness: Distinctiveness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BritishMarker {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionWordReport {
    pub total_words: usize,
    pub reliable: bool,
    pub frequencies: BTreeMap<String, f64>,
    pub z_scores: BTreeMap<String, f64>,
    pub scores: Vec<WordScore>,
    /// Sorted by descending z-score.
    pub distinctive: Vec<WordScore>,
    /// Sorted by ascending z-score.
    pub avoided: Vec<WordScore>,
    pub british_markers: Vec<BritishMarker>,
    pub recommendations: Vec<String>,
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> FunctionWordReport {
    let reference = &ctx.reference;
    let prose = text::paragraphs(text).join("\n\n");
    let total_words = text::word_count(&prose);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in reference.function_word_matches(&prose) {
        *counts.entry(m.as_str().to_lowercase()).or_insert(0) += 1;
    }

    let scores: Vec<WordScore> = reference
        .function_words
        .iter()
        .map(|entry| {
            let count = counts.get(entry.word).copied().unwrap_or(0);
            let per_1000 = stats::per_thousand_raw(count, total_words);
            let z = stats::z_score(per_1000, entry.mean_per_1000, entry.std_dev_per_1000);
            WordScore {
                word: entry.word.to_string(),
                category: entry.category,
                tier: entry.tier,
                count,
                per_1000: stats::round2(per_1000),
                reference_mean: entry.mean_per_1000,
                z_score: stats::round2(z),
                // Classify before rounding so 2.004 is not pulled onto the cutoff.
                distinctiveness: Distinctiveness::from_z_score(z),
            }
        })
        .collect();

    let frequencies = scores
        .iter()
        .map(|s| (s.word.clone(), s.per_1000))
        .collect();
    let z_scores = scores.iter().map(|s| (s.word.clone(), s.z_score)).collect();

    let mut distinctive: Vec<WordScore> = scores
        .iter()
        .filter(|s| {
            matches!(
                s.distinctiveness,
                Distinctiveness::HighlyDistinctive | Distinctiveness::Distinctive
            )
        })
        .cloned()
        .collect();
    distinctive.sort_by(|a, b| b.z_score.total_cmp(&a.z_score).then_with(|| a.word.cmp(&b.word)));

    let mut avoided: Vec<WordScore> = scores
        .iter()
        .filter(|s| {
            matches!(
                s.distinctiveness,
                Distinctiveness::HighlyAvoided | Distinctiveness::Avoided
            )
        })
        .cloned()
        .collect();
    avoided.sort_by(|a, b| a.z_score.total_cmp(&b.z_score).then_with(|| a.word.cmp(&b.word)));

    let british_markers: Vec<BritishMarker> = reference
        .function_words
        .iter()
        .filter(|e| e.british_marker)
        .filter_map(|e| {
            let count = counts.get(e.word).copied().unwrap_or(0);
            (count > 0).then(|| BritishMarker {
                word: e.word.to_string(),
                count,
            })
        })
        .collect();

    let reliable = total_words >= ctx.thresholds.function_words.min_reliable_words;
    let recommendations =
        recommendations(total_words, reliable, &distinctive, &avoided, &british_markers);

    tracing::debug!(
        total_words,
        distinctive = distinctive.len(),
        avoided = avoided.len(),
        "function-word profile computed"
    );

    FunctionWordReport {
        total_words,
        reliable,
        frequencies,
        z_scores,
        scores,
        distinctive,
        avoided,
        british_markers,
        recommendations,
    }
}

fn recommendations(
    total_words: usize,
    reliable: bool,
    distinctive: &[WordScore],
    avoided: &[WordScore],
    british: &[BritishMarker],
) -> Vec<String> {
    let mut out = Vec::new();
    if !reliable {
        out.push(format!(
            "Corpus has only {total_words} words; treat function-word z-scores as rough signals."
        ));
    }
    for s in distinctive.iter().take(TOP_RECOMMENDED) {
        out.push(format!(
            "Use '{}' freely ({:.1} per 1000 words vs {:.1} typical, z={:+.2}).",
            s.word, s.per_1000, s.reference_mean, s.z_score
        ));
    }
    for s in avoided.iter().take(TOP_RECOMMENDED) {
        out.push(format!(
            "Go easy on '{}' ({:.1} per 1000 words vs {:.1} typical, z={:+.2}).",
            s.word, s.per_1000, s.reference_mean, s.z_score
        ));
    }
    if !british.is_empty() {
        let words: Vec<&str> = british.iter().map(|b| b.word.as_str()).collect();
        out.push(format!(
            "British-English markers present: {}. Keep British spelling and word choice.",
            words.join(", ")
        ));
    }
    out
}
