//! Corpus analyzers.
//!
//! Each analyzer is a pure function `analyze(text, ctx) -> Report` over the
//! combined corpus text. None reads another's output.

use serde::{Deserialize, Serialize};

pub mod argument_flow;
pub mod burstiness;
pub mod function_words;
pub mod naturalness;
pub mod paragraph;
pub mod phrase_library;
pub mod punctuation;
pub mod sentence;
pub mod specificity;
pub mod transitions;
pub mod vocabulary;
pub mod vocabulary_tiers;
pub mod voice;

/// A representative excerpt and the index of the paragraph it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub excerpt: String,
    pub position: usize,
}
