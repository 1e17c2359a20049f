use serde::{Deserialize, Serialize};

use crate::stats::{self, Bucket, BucketRange, Ranked, Summary};
use crate::text;
use crate::AnalysisContext;

/// Sentence length bands in words: short, medium, long and very long.
pub const LENGTH_BANDS: &[BucketRange] = &[
    BucketRange::new("short", 1.0, 11.0),
    BucketRange::new("medium", 11.0, 21.0),
    BucketRange::new("long", 21.0, 31.0),
    BucketRange::new("very_long", 31.0, f64::INFINITY),
];

const FRAGMENT_MAX_WORDS: usize = 3;
const TOP_OPENERS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    Declarative,
    Question,
    Exclamation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub sentence_type: SentenceType,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceReport {
    pub total_sentences: usize,
    pub length: Summary,
    pub length_distribution: Vec<Bucket>,
    pub types: Vec<TypeShare>,
    pub fragments: usize,
    pub fragment_ratio: f64,
    pub top_openers: Vec<Ranked<String>>,
}

impl SentenceReport {
    pub fn question_percentage(&self) -> f64 {
        self.share(SentenceType::Question)
    }

    pub fn exclamation_percentage(&self) -> f64 {
        self.share(SentenceType::Exclamation)
    }

    fn share(&self, sentence_type: SentenceType) -> f64 {
        self.types
            .iter()
            .find(|t| t.sentence_type == sentence_type)
            .map(|t| t.percentage)
            .unwrap_or(0.0)
    }
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> SentenceReport {
    let sentences: Vec<(String, Option<char>)> = text::paragraphs(text)
        .iter()
        .flat_map(|p| text::split_sentences_with_terminator(p))
        .filter(|(s, _)| text::word_count(s) > 0)
        .collect();
    let total = sentences.len();

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|(s, _)| text::word_count(s) as f64)
        .collect();

    let classified: Vec<SentenceType> = sentences
        .iter()
        .map(|(_, mark)| match mark {
            Some('?') => SentenceType::Question,
            Some('!') => SentenceType::Exclamation,
            _ => SentenceType::Declarative,
        })
        .collect();
    let types = [
        SentenceType::Declarative,
        SentenceType::Question,
        SentenceType::Exclamation,
    ]
    .into_iter()
    .map(|sentence_type| {
        let count = classified.iter().filter(|t| **t == sentence_type).count();
        TypeShare {
            sentence_type,
            count,
            percentage: stats::percentage(count, total),
        }
    })
    .collect();

    let fragments = lengths
        .iter()
        .filter(|&&n| n as usize <= FRAGMENT_MAX_WORDS)
        .count();
    let openers = stats::frequency_map(sentences.iter().filter_map(|(s, _)| text::first_word(s)));

    SentenceReport {
        total_sentences: total,
        length: Summary::of(&lengths),
        length_distribution: stats::distribution(&lengths, LENGTH_BANDS),
        types,
        fragments,
        fragment_ratio: stats::ratio(fragments, total),
        top_openers: stats::top_n(&openers, TOP_OPENERS),
    }
}
