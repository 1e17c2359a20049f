//! Vocabulary tiers and formality.
//!
//! Formality is formal-word hits per 1000 words. AI-slop terms are zero
//! tolerance: any hit produces a recommendation with its casual replacement.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::VocabularyTierThresholds;
use crate::reference::{Term, TermKind};
use crate::stats::{self, Ranked};
use crate::text;
use crate::AnalysisContext;

const TOP_TERMS: usize = 15;

static TECHNICAL_TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[A-Z]{2,}[A-Za-z]*|[A-Za-z]*\d+[A-Za-z][A-Za-z\d]*|[A-Za-z]+\d+|\d{3,})\b")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Casual,
    Formal,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    High,
    Moderate,
    Low,
}

impl Formality {
    pub fn from_score(score: f64, bands: &VocabularyTierThresholds) -> Self {
        if score > bands.high_formality {
            Self::High
        } else if score > bands.moderate_formality {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: Tier,
    pub count: usize,
    pub per_1000: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermHit {
    pub word: String,
    pub replacement: String,
    pub kind: TermKind,
    pub count: usize,
    pub contexts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyTierReport {
    pub total_words: usize,
    pub tiers: Vec<TierCount>,
    /// Formal words per 1000 words.
    pub formality_score: f64,
    pub formality: Formality,
    pub formal_hits: Vec<TermHit>,
    pub formal_verb_hits: usize,
    pub formal_connector_hits: usize,
    pub slop_hits: Vec<TermHit>,
    pub slop_total: usize,
    pub casual_markers: Vec<Ranked<String>>,
    pub technical_terms: Vec<Ranked<String>>,
    pub recommendations: Vec<String>,
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> VocabularyTierReport {
    let reference = &ctx.reference;
    let general = &ctx.thresholds.general;
    let prose = text::paragraphs(text).join("\n\n");
    let total_words = text::word_count(&prose);

    let width = general.context_window_chars;
    let formal_hits = term_hits(&prose, &reference.formal_terms, general.max_examples, width);
    let slop_hits = term_hits(&prose, &reference.slop_terms, general.max_examples, width);

    let formal_total: usize = formal_hits.iter().map(|h| h.count).sum();
    let kind_total = |kind: TermKind| -> usize {
        formal_hits
            .iter()
            .filter(|h| h.kind == kind)
            .map(|h| h.count)
            .sum()
    };
    let formal_verb_hits = kind_total(TermKind::Verb);
    let formal_connector_hits = kind_total(TermKind::Connector);
    let slop_total: usize = slop_hits.iter().map(|h| h.count).sum();

    let casual: Vec<String> = reference
        .casual_matches(&prose)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    let technical: Vec<String> = TECHNICAL_TERM_RE
        .find_iter(&prose)
        .map(|m| m.as_str().to_string())
        .collect();

    let tiers = vec![
        TierCount {
            tier: Tier::Casual,
            count: casual.len(),
            per_1000: stats::per_thousand(casual.len(), total_words),
        },
        TierCount {
            tier: Tier::Formal,
            count: formal_total,
            per_1000: stats::per_thousand(formal_total, total_words),
        },
        TierCount {
            tier: Tier::Technical,
            count: technical.len(),
            per_1000: stats::per_thousand(technical.len(), total_words),
        },
    ];

    let formality_score = stats::per_thousand(formal_total, total_words);
    let formality = Formality::from_score(formality_score, &ctx.thresholds.vocabulary_tiers);
    let recommendations = recommendations(formality, formality_score, &formal_hits, &slop_hits);

    VocabularyTierReport {
        total_words,
        tiers,
        formality_score,
        formality,
        formal_hits,
        formal_verb_hits,
        formal_connector_hits,
        slop_hits,
        slop_total,
        casual_markers: stats::top_n(&stats::frequency_map(casual), TOP_TERMS),
        technical_terms: stats::top_n(&stats::frequency_map(technical), TOP_TERMS),
        recommendations,
    }
}

fn term_hits(text: &str, terms: &[Term], max_examples: usize, width: usize) -> Vec<TermHit> {
    let mut hits: Vec<TermHit> = terms
        .iter()
        .filter_map(|term| {
            let matches: Vec<regex::Match> = term.find_iter(text).collect();
            if matches.is_empty() {
                return None;
            }
            Some(TermHit {
                word: term.word.to_string(),
                replacement: term.replacement.to_string(),
                kind: term.kind,
                count: matches.len(),
                contexts: matches
                    .iter()
                    .take(max_examples)
                    .map(|m| text::context_around(text, m.start(), m.end(), width))
                    .collect(),
            })
        })
        .collect();
    hits.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    hits
}

fn recommendations(
    formality: Formality,
    formality_score: f64,
    formal_hits: &[TermHit],
    slop_hits: &[TermHit],
) -> Vec<String> {
    let mut out = Vec::new();
    for hit in slop_hits {
        out.push(format!(
            "Never use '{}' (found {}x). Say '{}' instead.",
            hit.word, hit.count, hit.replacement
        ));
    }
    match formality {
        Formality::High => out.push(format!(
            "Formality is high ({formality_score:.1} formal words per 1000). Prefer plain alternatives."
        )),
        Formality::Moderate => out.push(format!(
            "Formality is moderate ({formality_score:.1} per 1000). Match it, but do not exceed it."
        )),
        Formality::Low => {}
    }
    for hit in formal_hits.iter().take(5) {
        out.push(format!("'{}' -> '{}'", hit.word, hit.replacement));
    }
    out
}
