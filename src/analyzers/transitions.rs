//! Paragraph-transition classification.
//!
//! The opening sentence of every paragraph after the first in an article is
//! matched against [`TRANSITION_PATTERNS`] in order; the first hit names the
//! transition. Multi-word causal openers ("That's why", "This means") sit
//! before the bare demonstrative reference row so they are not swallowed by it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzers::Example;
use crate::stats::{self, Ranked};
use crate::text;
use crate::AnalysisContext;

const TOP_OPENING_WORDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionType {
    Contrast,
    Causal,
    Example,
    Additive,
    Sequential,
    Question,
    Personal,
    Reference,
    Abrupt,
}

impl TransitionType {
    /// Whether the paragraph announces its relation to the previous one.
    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::Reference | Self::Abrupt | Self::Question | Self::Personal)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contrast => "contrast",
            Self::Causal => "causal",
            Self::Example => "example",
            Self::Additive => "additive",
            Self::Sequential => "sequential",
            Self::Question => "question",
            Self::Personal => "personal",
            Self::Reference => "back-reference",
            Self::Abrupt => "abrupt (no transition)",
        }
    }
}

pub static TRANSITION_PATTERNS: Lazy<Vec<(TransitionType, Regex)>> = Lazy::new(|| {
    vec![
        (
            TransitionType::Contrast,
            Regex::new(r"(?i)^(?:but|however|yet|still|that said|on the other hand|although|though|even so|instead)\b").unwrap(),
        ),
        (
            TransitionType::Causal,
            Regex::new(r"(?i)^(?:so|because|that's why|therefore|as a result|this means|that means|which is why|thanks to)\b").unwrap(),
        ),
        (
            TransitionType::Example,
            Regex::new(r"(?i)^(?:for example|for instance|take|case in point|consider)\b").unwrap(),
        ),
        (
            TransitionType::Additive,
            Regex::new(r"(?i)^(?:also|and|plus|another|besides|on top of that|additionally|what's more)\b").unwrap(),
        ),
        (
            TransitionType::Sequential,
            Regex::new(r"(?i)^(?:first|second|third|then|next|after|afterwards|finally|once|now|later|eventually)\b").unwrap(),
        ),
        (TransitionType::Question, Regex::new(r"^[^.!]*\?$").unwrap()),
        (
            TransitionType::Personal,
            Regex::new(r"(?i)^(?:i|i'm|i've|i'd|i'll|my|when i|we|our)\b").unwrap(),
        ),
        (
            TransitionType::Reference,
            Regex::new(r"(?i)^(?:this|that|these|those|it|such)\b").unwrap(),
        ),
    ]
});

pub fn classify(opening_sentence: &str) -> TransitionType {
    let opening = opening_sentence.trim();
    TRANSITION_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(opening))
        .map(|(t, _)| *t)
        .unwrap_or(TransitionType::Abrupt)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionStats {
    pub transition: TransitionType,
    pub count: usize,
    pub percentage: f64,
    /// `position` is the paragraph index across the corpus.
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionReport {
    pub total_transitions: usize,
    pub transitions: Vec<TransitionStats>,
    pub explicit_ratio: f64,
    pub entropy: f64,
    pub top_opening_words: Vec<Ranked<String>>,
}

impl TransitionReport {
    pub fn share(&self, transition: TransitionType) -> f64 {
        self.transitions
            .iter()
            .find(|t| t.transition == transition)
            .map(|t| t.percentage)
            .unwrap_or(0.0)
    }
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> TransitionReport {
    let general = &ctx.thresholds.general;

    // (paragraph index, opening sentence, type)
    let mut observed: Vec<(usize, String, TransitionType)> = Vec::new();
    let mut index = 0usize;
    for article in text::articles(text) {
        for (i, paragraph) in text::paragraphs(article).into_iter().enumerate() {
            if i > 0 {
                if let Some(opening) = text::first_sentence(&paragraph) {
                    let kind = classify(&opening);
                    observed.push((index, opening, kind));
                }
            }
            index += 1;
        }
    }

    let total = observed.len();
    let transitions: Vec<TransitionStats> = TRANSITION_PATTERNS
        .iter()
        .map(|(t, _)| *t)
        .chain(std::iter::once(TransitionType::Abrupt))
        .map(|transition| {
            let hits: Vec<&(usize, String, TransitionType)> =
                observed.iter().filter(|o| o.2 == transition).collect();
            TransitionStats {
                transition,
                count: hits.len(),
                percentage: stats::percentage(hits.len(), total),
                examples: hits
                    .iter()
                    .take(general.max_examples)
                    .map(|o| Example {
                        excerpt: text::excerpt(&o.1, general.excerpt_chars),
                        position: o.0,
                    })
                    .collect(),
            }
        })
        .collect();

    let explicit = observed.iter().filter(|o| o.2.is_explicit()).count();
    let labels: Vec<TransitionType> = observed.iter().map(|o| o.2).collect();
    let opening_words =
        stats::frequency_map(observed.iter().filter_map(|o| text::first_word(&o.1)));

    TransitionReport {
        total_transitions: total,
        transitions,
        explicit_ratio: stats::ratio(explicit, total),
        entropy: stats::round4(stats::entropy(&labels)),
        top_opening_words: stats::top_n(&opening_words, TOP_OPENING_WORDS),
    }
}
