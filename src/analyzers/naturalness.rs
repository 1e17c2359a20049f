//! Anti-mechanical scoring.
//!
//! Four sub-scores of 0-25 points each sum to a 0-100 naturalness score. The
//! scoring is deterministic; the same text always gets the same score.

use serde::{Deserialize, Serialize};

use crate::analyzers::sentence::LENGTH_BANDS;
use crate::config::NaturalnessThresholds;
use crate::stats;
use crate::text;
use crate::AnalysisContext;

const SUB_SCORE_MAX: f64 = 25.0;

const CV_POINTS_PER_UNIT: f64 = 25.0;
const CV_POINTS_CAP: f64 = 20.0;
const ALL_BANDS_BONUS: f64 = 5.0;

const ASYMMETRY_BONUS: f64 = 10.0;
const LONG_PARAGRAPH_SENTENCES: usize = 5;
const PARAGRAPH_CV_POINTS_PER_UNIT: f64 = 15.0;
const PARAGRAPH_CV_POINTS_CAP: f64 = 15.0;

const FIRST_PERSON_HIGH_RATIO: f64 = 0.5;
const FIRST_PERSON_HIGH_PENALTY: f64 = 15.0;
const FIRST_PERSON_MODERATE_RATIO: f64 = 0.3;
const FIRST_PERSON_MODERATE_PENALTY: f64 = 8.0;
const I_RUN_SEVERE: usize = 4;
const I_RUN_SEVERE_PENALTY: f64 = 10.0;
const I_RUN_MILD: usize = 3;
const I_RUN_MILD_PENALTY: f64 = 5.0;

const FIRST_PERSON_OPENERS: &[&str] = &[
    "i", "i'm", "i've", "i'd", "i'll", "my", "me", "we", "we're", "we've", "our",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    VeryNatural,
    Natural,
    SomewhatMechanical,
    Mechanical,
}

impl Interpretation {
    pub fn from_score(score: f64, cutoffs: &NaturalnessThresholds) -> Self {
        if score >= cutoffs.very_natural_min {
            Self::VeryNatural
        } else if score >= cutoffs.natural_min {
            Self::Natural
        } else if score >= cutoffs.somewhat_mechanical_min {
            Self::SomewhatMechanical
        } else {
            Self::Mechanical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryNatural => "very natural",
            Self::Natural => "natural",
            Self::SomewhatMechanical => "somewhat mechanical",
            Self::Mechanical => "mechanical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceVariation {
    pub points: f64,
    pub coefficient_of_variation: f64,
    pub bands_represented: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphAsymmetry {
    pub points: f64,
    pub has_single_sentence: bool,
    pub has_long: bool,
    pub coefficient_of_variation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstPersonDistribution {
    pub points: f64,
    pub opening_ratio: f64,
    pub longest_i_run: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatedOpening {
    pub word: String,
    /// Index of the first sentence in the run.
    pub start: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repetition {
    pub points: f64,
    pub runs: Vec<RepeatedOpening>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalnessReport {
    pub score: f64,
    pub interpretation: Interpretation,
    pub sentence_variation: SentenceVariation,
    pub paragraph_asymmetry: ParagraphAsymmetry,
    pub first_person: FirstPersonDistribution,
    pub repetition: Repetition,
    pub issues: Vec<String>,
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> NaturalnessReport {
    let paragraphs: Vec<Vec<String>> = text::paragraphs(text)
        .iter()
        .map(|p| text::split_sentences(p))
        .filter(|s| !s.is_empty())
        .collect();
    let sentences: Vec<&String> = paragraphs.iter().flatten().collect();
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| text::word_count(s) as f64)
        .collect();
    let openers: Vec<Option<String>> = sentences.iter().map(|s| text::first_word(s)).collect();

    let mut issues = Vec::new();
    let sentence_variation = score_sentence_variation(&lengths, &mut issues);
    let paragraph_asymmetry = score_paragraph_asymmetry(&paragraphs, &mut issues);
    let first_person = score_first_person(&openers, &mut issues);
    let repetition = score_repetition(&openers, &mut issues);

    let score = stats::round2(
        sentence_variation.points
            + paragraph_asymmetry.points
            + first_person.points
            + repetition.points,
    );

    NaturalnessReport {
        score,
        interpretation: Interpretation::from_score(score, &ctx.thresholds.naturalness),
        sentence_variation,
        paragraph_asymmetry,
        first_person,
        repetition,
        issues: dedup(issues),
    }
}

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

fn score_sentence_variation(lengths: &[f64], issues: &mut Vec<String>) -> SentenceVariation {
    let cv = stats::coefficient_of_variation(lengths);
    let bands_represented = LENGTH_BANDS
        .iter()
        .filter(|band| lengths.iter().any(|l| band.contains(*l)))
        .count();

    let mut points = (cv * CV_POINTS_PER_UNIT).min(CV_POINTS_CAP);
    if bands_represented == LENGTH_BANDS.len() {
        points += ALL_BANDS_BONUS;
    } else if !lengths.is_empty() {
        issues.push(format!(
            "Only {bands_represented} of {} sentence-length bands used. \
             Mix in very short and very long sentences.",
            LENGTH_BANDS.len()
        ));
    }
    if !lengths.is_empty() && cv < 0.3 {
        issues.push(format!(
            "Sentence lengths are too uniform (CV={cv:.2}). Vary short and long."
        ));
    }

    SentenceVariation {
        points: stats::round2(points.min(SUB_SCORE_MAX)),
        coefficient_of_variation: stats::round4(cv),
        bands_represented,
    }
}

fn score_paragraph_asymmetry(
    paragraphs: &[Vec<String>],
    issues: &mut Vec<String>,
) -> ParagraphAsymmetry {
    let counts: Vec<f64> = paragraphs.iter().map(|p| p.len() as f64).collect();
    let has_single_sentence = paragraphs.iter().any(|p| p.len() == 1);
    let has_long = paragraphs.iter().any(|p| p.len() >= LONG_PARAGRAPH_SENTENCES);
    let cv = stats::coefficient_of_variation(&counts);

    let mut points = (cv * PARAGRAPH_CV_POINTS_PER_UNIT).min(PARAGRAPH_CV_POINTS_CAP);
    if has_single_sentence && has_long {
        points += ASYMMETRY_BONUS;
    } else if !paragraphs.is_empty() {
        issues.push(
            "Paragraphs are too even. Use some one-sentence paragraphs and some long ones."
                .to_string(),
        );
    }

    ParagraphAsymmetry {
        points: stats::round2(points.min(SUB_SCORE_MAX)),
        has_single_sentence,
        has_long,
        coefficient_of_variation: stats::round4(cv),
    }
}

fn is_i_opener(word: &str) -> bool {
    word == "i" || word.starts_with("i'")
}

fn score_first_person(
    openers: &[Option<String>],
    issues: &mut Vec<String>,
) -> FirstPersonDistribution {
    let total = openers.len();
    let first_person = openers
        .iter()
        .flatten()
        .filter(|w| FIRST_PERSON_OPENERS.contains(&w.as_str()))
        .count();
    let ratio = if total == 0 {
        0.0
    } else {
        first_person as f64 / total as f64
    };

    let mut longest_i_run = 0usize;
    let mut run = 0usize;
    for opener in openers {
        if opener.as_deref().is_some_and(is_i_opener) {
            run += 1;
            longest_i_run = longest_i_run.max(run);
        } else {
            run = 0;
        }
    }

    let mut points = SUB_SCORE_MAX;
    if ratio > FIRST_PERSON_HIGH_RATIO {
        points -= FIRST_PERSON_HIGH_PENALTY;
        issues.push(format!(
            "{:.0}% of sentences open with a first-person word. Lead with the subject instead.",
            ratio * 100.0
        ));
    } else if ratio > FIRST_PERSON_MODERATE_RATIO {
        points -= FIRST_PERSON_MODERATE_PENALTY;
        issues.push(format!(
            "{:.0}% of sentences open with a first-person word.",
            ratio * 100.0
        ));
    }
    if longest_i_run >= I_RUN_SEVERE {
        points -= I_RUN_SEVERE_PENALTY;
        issues.push(format!("{longest_i_run} sentences in a row start with \"I\"."));
    } else if longest_i_run >= I_RUN_MILD {
        points -= I_RUN_MILD_PENALTY;
        issues.push(format!("{longest_i_run} sentences in a row start with \"I\"."));
    }

    FirstPersonDistribution {
        points: stats::round2(points.max(0.0)),
        opening_ratio: stats::round4(ratio),
        longest_i_run,
    }
}

fn run_penalty(length: usize) -> f64 {
    match length {
        0..=2 => 0.0,
        3 => 3.0,
        4 => 6.0,
        _ => 10.0,
    }
}

fn score_repetition(openers: &[Option<String>], issues: &mut Vec<String>) -> Repetition {
    let mut runs = Vec::new();
    let mut start = 0usize;
    for i in 1..=openers.len() {
        let continues = i < openers.len()
            && openers[i].is_some()
            && openers[i] == openers[start];
        if continues {
            continue;
        }
        let length = i - start;
        if length >= 3 {
            if let Some(word) = &openers[start] {
                runs.push(RepeatedOpening {
                    word: word.clone(),
                    start,
                    length,
                });
            }
        }
        start = i;
    }

    let penalty: f64 = runs.iter().map(|r| run_penalty(r.length)).sum();
    for r in &runs {
        issues.push(format!("{} consecutive sentences start with \"{}\".", r.length, r.word));
    }

    Repetition {
        points: stats::round2((SUB_SCORE_MAX - penalty).max(0.0)),
        runs,
    }
}

fn dedup(issues: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    issues.into_iter().filter(|i| seen.insert(i.clone())).collect()
}
