use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stats::{self, Ranked};
use crate::text;
use crate::AnalysisContext;

const TOP_PHRASES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificityCategory {
    Possessive,
    GenericArticle,
    Measurement,
    ModelNumber,
    Price,
    ProperNoun,
    TimeReference,
    VagueQuantifier,
}

impl SpecificityCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Possessive => "possessive (my/our)",
            Self::GenericArticle => "generic article",
            Self::Measurement => "measurement",
            Self::ModelNumber => "model number",
            Self::Price => "price",
            Self::ProperNoun => "proper noun",
            Self::TimeReference => "time reference",
            Self::VagueQuantifier => "vague quantifier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specificity {
    Specific,
    Generic,
    Vague,
}

struct SpecificityPattern {
    category: SpecificityCategory,
    specificity: Specificity,
    pattern: Regex,
    /// Fold phrases to lowercase before counting.
    fold_case: bool,
    reject: Option<fn(&str) -> bool>,
}

fn looks_like_year(phrase: &str) -> bool {
    phrase
        .parse::<u32>()
        .is_ok_and(|n| (1900..=2099).contains(&n))
}

fn row(
    category: SpecificityCategory,
    specificity: Specificity,
    pattern: &str,
    fold_case: bool,
    reject: Option<fn(&str) -> bool>,
) -> SpecificityPattern {
    SpecificityPattern {
        category,
        specificity,
        pattern: Regex::new(pattern).unwrap(),
        fold_case,
        reject,
    }
}

/// Priority order. A span claimed by an earlier row is not counted again, so
/// "$1200" is a price and never a model number.
static SPECIFICITY_PATTERNS: Lazy<Vec<SpecificityPattern>> = Lazy::new(|| {
    use Specificity::*;
    use SpecificityCategory::*;
    vec![
        row(Price, Specific, r"[$\u{00A3}\u{20AC}]\s?\d[\d,]*(?:\.\d{2})?", false, None),
        row(
            TimeReference,
            Specific,
            concat!(
                r"(?i)\b(?:(?:last|this|next)\s+(?:week|month|year|summer|winter|spring|fall|autumn)",
                r"|yesterday|(?:19|20)\d{2}|\d+\s+(?:years?|months?|weeks?)\s+ago)\b"
            ),
            true,
            None,
        ),
        row(
            Measurement,
            Specific,
            concat!(
                r"(?i)\b\d+(?:\.\d+)?\s?(?:%|(?:gb|tb|mb|kb|w|watts?|hz|mhz|ghz|fps|ms|mm|cm|kg|lbs?|",
                r"hours?|hrs?|minutes?|mins?|days?|weeks?|months?|years?|degrees|°c|°f)\b)"
            ),
            true,
            None,
        ),
        row(Possessive, Specific, r"(?i)\b(?:my|our)\s+[a-z0-9][\w-]*", true, None),
        row(
            ModelNumber,
            Specific,
            r"\b(?:[A-Z]{1,5}-?\d{2,5}[A-Za-z]{0,3}|\d{4}(?:\s?(?:Ti|XT|Super))?)\b",
            false,
            Some(looks_like_year),
        ),
        row(
            ProperNoun,
            Specific,
            r"[a-z,;]\s+([A-Z][a-z]+(?:\s+[A-Z][A-Za-z0-9]+)*)",
            false,
            None,
        ),
        row(
            VagueQuantifier,
            Vague,
            r"(?i)\b(?:some|many|various|several|numerous|a lot of|lots of|a number of|plenty of)\b",
            true,
            None,
        ),
        row(GenericArticle, Generic, r"\b(?:[Tt]he|[Aa]n?)\s+[a-z][a-z-]+\b", true, None),
    ]
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: SpecificityCategory,
    pub specificity: Specificity,
    pub count: usize,
    pub per_1000: f64,
    pub top_phrases: Vec<Ranked<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificityReport {
    pub total_words: usize,
    pub categories: Vec<CategoryStats>,
    pub specific_total: usize,
    pub generic_total: usize,
    pub vague_total: usize,
    /// specific / (specific + generic + vague) × 100.
    pub specificity_score: f64,
    /// possessive / (possessive + generic article).
    pub possessive_share: f64,
}

impl SpecificityReport {
    pub fn category(&self, category: SpecificityCategory) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.category == category)
    }
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> SpecificityReport {
    let prose = text::paragraphs(text).join("\n\n");
    let total_words = text::word_count(&prose);

    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut categories = Vec::with_capacity(SPECIFICITY_PATTERNS.len());
    for row in SPECIFICITY_PATTERNS.iter() {
        let mut phrases = Vec::new();
        for caps in row.pattern.captures_iter(&prose) {
            let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            let span = m.range();
            if claimed.iter().any(|c| span.start < c.end && c.start < span.end) {
                continue;
            }
            let phrase = m.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
            if row.reject.is_some_and(|reject| reject(&phrase)) {
                continue;
            }
            claimed.push(span);
            phrases.push(if row.fold_case { phrase.to_lowercase() } else { phrase });
        }
        let count = phrases.len();
        categories.push(CategoryStats {
            category: row.category,
            specificity: row.specificity,
            count,
            per_1000: stats::per_thousand(count, total_words),
            top_phrases: stats::top_n(&stats::frequency_map(phrases), TOP_PHRASES),
        });
    }

    let sum = |s: Specificity| -> usize {
        categories
            .iter()
            .filter(|c| c.specificity == s)
            .map(|c| c.count)
            .sum()
    };
    let specific_total = sum(Specificity::Specific);
    let generic_total = sum(Specificity::Generic);
    let vague_total = sum(Specificity::Vague);

    let count_of = |category: SpecificityCategory| {
        categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    };
    let possessive = count_of(SpecificityCategory::Possessive);
    let generic_articles = count_of(SpecificityCategory::GenericArticle);

    SpecificityReport {
        total_words,
        specific_total,
        generic_total,
        vague_total,
        specificity_score: stats::percentage(
            specific_total,
            specific_total + generic_total + vague_total,
        ),
        possessive_share: stats::ratio(possessive, possessive + generic_articles),
        categories,
    }
}
