use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stats::{self, Bucket, BucketRange, Summary};
use crate::text;
use crate::AnalysisContext;

const SENTENCE_COUNT_BUCKETS: &[BucketRange] = &[
    BucketRange::new("1", 1.0, 2.0),
    BucketRange::new("2-3", 2.0, 4.0),
    BucketRange::new("4-5", 4.0, 6.0),
    BucketRange::new("6+", 6.0, f64::INFINITY),
];

/// How a paragraph opens. Checked in declaration order; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Question,
    Quote,
    Number,
    Transition,
    FirstPerson,
    Statement,
}

static OPENING_PATTERNS: Lazy<Vec<(OpeningType, Regex)>> = Lazy::new(|| {
    vec![
        (OpeningType::Question, Regex::new(r"^[^.!]*\?").unwrap()),
        (
            OpeningType::Quote,
            Regex::new(r#"^["\u{201C}'\u{2018}>]"#).unwrap(),
        ),
        (OpeningType::Number, Regex::new(r"^[$\u{00A3}\u{20AC}]?\d").unwrap()),
        (
            OpeningType::Transition,
            Regex::new(concat!(
                r"(?i)^(?:but|however|so|and|also|then|still|yet|meanwhile|instead|",
                r"first|next|finally|that said|on the other hand|for example|for instance)\b"
            ))
            .unwrap(),
        ),
        (
            OpeningType::FirstPerson,
            Regex::new(r"(?i)^(?:i|i'm|i've|i'd|i'll|my|we|we're|we've|our)\b").unwrap(),
        ),
    ]
});

pub fn classify_opening(paragraph: &str) -> OpeningType {
    let first = text::first_sentence(paragraph).unwrap_or_default();
    OPENING_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&first))
        .map(|(kind, _)| *kind)
        .unwrap_or(OpeningType::Statement)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningShare {
    pub opening: OpeningType,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphReport {
    pub total_paragraphs: usize,
    pub sentences_per_paragraph: Summary,
    pub words_per_paragraph: Summary,
    pub sentence_count_distribution: Vec<Bucket>,
    pub single_sentence_ratio: f64,
    pub openings: Vec<OpeningShare>,
    pub opening_entropy: f64,
    pub opening_diversity: f64,
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> ParagraphReport {
    let paragraphs = text::paragraphs(text);
    let total = paragraphs.len();

    let sentence_counts: Vec<f64> = paragraphs
        .iter()
        .map(|p| text::split_sentences(p).len() as f64)
        .collect();
    let word_counts: Vec<f64> = paragraphs
        .iter()
        .map(|p| text::word_count(p) as f64)
        .collect();
    let single = sentence_counts.iter().filter(|&&n| n == 1.0).count();

    let labels: Vec<OpeningType> = paragraphs.iter().map(|p| classify_opening(p)).collect();
    let counts = stats::frequency_map(labels.iter().copied());
    let mut openings: Vec<OpeningShare> = counts
        .into_iter()
        .map(|(opening, count)| OpeningShare {
            opening,
            count,
            percentage: stats::percentage(count, total),
        })
        .collect();
    openings.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.opening.cmp(&b.opening)));

    ParagraphReport {
        total_paragraphs: total,
        sentences_per_paragraph: Summary::of(&sentence_counts),
        words_per_paragraph: Summary::of(&word_counts),
        sentence_count_distribution: stats::distribution(&sentence_counts, SENTENCE_COUNT_BUCKETS),
        single_sentence_ratio: stats::ratio(single, total),
        openings,
        opening_entropy: stats::round4(stats::entropy(&labels)),
        opening_diversity: stats::round4(stats::normalized_entropy(&labels)),
    }
}
