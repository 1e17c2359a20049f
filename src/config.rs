//! Tunable thresholds.
//!
//! Every band, cutoff and truncation limit used by the analyzers and the guide
//! lives here. The defaults were calibrated by reading real corpora, not fitted
//! to labeled data, so they are exposed for override through a TOML file:
//!
//! ```toml
//! [burstiness]
//! uniform_below = -0.15
//!
//! [vocabulary_tiers]
//! high_formality = 12.0
//! ```
//!
//! Sections and fields that are omitted keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub general: GeneralThresholds,
    pub burstiness: BurstinessThresholds,
    pub naturalness: NaturalnessThresholds,
    pub function_words: FunctionWordThresholds,
    pub argument_flow: ArgumentFlowThresholds,
    pub vocabulary_tiers: VocabularyTierThresholds,
    pub guide: GuideLimits,
}

impl Thresholds {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let thresholds = Self::from_toml(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded thresholds from {}", path.display());
        Ok(thresholds)
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralThresholds {
    /// Examples kept per category.
    pub max_examples: usize,
    /// Width in chars of the excerpt kept around a match.
    pub context_window_chars: usize,
    /// Length in chars of paragraph excerpts.
    pub excerpt_chars: usize,
}

impl Default for GeneralThresholds {
    fn default() -> Self {
        Self {
            max_examples: 3,
            context_window_chars: 100,
            excerpt_chars: 160,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstinessThresholds {
    pub uniform_below: f64,
    pub natural_above: f64,
    /// Max word-count difference between neighbours in one cluster.
    pub cluster_threshold: f64,
    pub cluster_min_size: usize,
    /// Word-count jump between neighbours that counts as an abrupt shift.
    pub shift_threshold: f64,
}

impl Default for BurstinessThresholds {
    fn default() -> Self {
        Self {
            uniform_below: -0.1,
            natural_above: 0.2,
            cluster_threshold: 5.0,
            cluster_min_size: 2,
            shift_threshold: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalnessThresholds {
    pub very_natural_min: f64,
    pub natural_min: f64,
    pub somewhat_mechanical_min: f64,
}

impl Default for NaturalnessThresholds {
    fn default() -> Self {
        Self {
            very_natural_min: 85.0,
            natural_min: 65.0,
            somewhat_mechanical_min: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionWordThresholds {
    /// Below this many words z-scores are reported as unreliable.
    pub min_reliable_words: usize,
}

impl Default for FunctionWordThresholds {
    fn default() -> Self {
        Self {
            min_reliable_words: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentFlowThresholds {
    pub high_confidence: f64,
    pub medium_confidence: f64,
    pub max_sequences: usize,
}

impl Default for ArgumentFlowThresholds {
    fn default() -> Self {
        Self {
            high_confidence: 0.7,
            medium_confidence: 0.4,
            max_sequences: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyTierThresholds {
    /// Formal words per 1000 above which a corpus reads as formal.
    pub high_formality: f64,
    pub moderate_formality: f64,
}

impl Default for VocabularyTierThresholds {
    fn default() -> Self {
        Self {
            high_formality: 10.0,
            moderate_formality: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideLimits {
    pub top_words: usize,
    pub top_phrases: usize,
    pub top_sequences: usize,
    pub top_openers: usize,
    /// First-person singular rate per 1000 words treated as "heavy".
    pub first_person_heavy: f64,
    /// Contractions per 1000 words treated as habitual.
    pub contraction_habit: f64,
    /// Question share (percent of sentences) treated as "question heavy".
    pub question_heavy_pct: f64,
}

impl Default for GuideLimits {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_phrases: 15,
            top_sequences: 5,
            top_openers: 10,
            first_person_heavy: 20.0,
            contraction_habit: 10.0,
            question_heavy_pct: 10.0,
        }
    }
}
