use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stats::{self, Ranked};
use crate::text;
use crate::AnalysisContext;

const FIRST_SINGULAR: &[&str] = &[
    "i", "me", "my", "mine", "myself", "i'm", "i've", "i'd", "i'll",
];
const FIRST_PLURAL: &[&str] = &[
    "we", "us", "our", "ours", "ourselves", "we're", "we've", "we'd", "we'll",
];
const SECOND: &[&str] = &[
    "you", "your", "yours", "yourself", "yourselves", "you're", "you've", "you'd", "you'll",
];
const THIRD: &[&str] = &[
    "he", "him", "his", "she", "her", "hers", "they", "them", "their", "theirs", "it", "its",
];

static HEDGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bi think\b",
        r"(?i)\bi guess\b",
        r"(?i)\bi suspect\b",
        r"(?i)\bprobably\b",
        r"(?i)\bmaybe\b",
        r"(?i)\bperhaps\b",
        r"(?i)\bmight\b",
        r"(?i)\bseems?\b",
        r"(?i)\bsort of\b",
        r"(?i)\bkind of\b",
        r"(?i)\bin my (?:opinion|experience)\b",
        r"(?i)\bas far as i can tell\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CERTAINTY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bdefinitely\b",
        r"(?i)\babsolutely\b",
        r"(?i)\bclearly\b",
        r"(?i)\bobviously\b",
        r"(?i)\bcertainly\b",
        r"(?i)\bwithout a doubt\b",
        r"(?i)\bno question\b",
        r"(?i)\balways\b",
        r"(?i)\bnever\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DIRECT_QUESTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:you|your)\b[^.!?]*\?|\b(?:have you|do you|did you|are you|would you)\b[^.!?]*\?")
        .unwrap()
});

const TOP_MARKERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    FirstPersonSingular,
    FirstPersonPlural,
    SecondPerson,
    ThirdPerson,
    None,
}

impl Perspective {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstPersonSingular => "first person singular (I)",
            Self::FirstPersonPlural => "first person plural (we)",
            Self::SecondPerson => "second person (you)",
            Self::ThirdPerson => "third person",
            Self::None => "no dominant perspective",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronounUsage {
    pub count: usize,
    pub per_1000: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReport {
    pub total_words: usize,
    pub first_person_singular: PronounUsage,
    pub first_person_plural: PronounUsage,
    pub second_person: PronounUsage,
    pub third_person: PronounUsage,
    pub dominant_perspective: Perspective,
    pub contractions: usize,
    pub contraction_rate: f64,
    pub hedges: usize,
    pub hedge_rate: f64,
    pub top_hedges: Vec<Ranked<String>>,
    pub certainty_markers: usize,
    pub certainty_rate: f64,
    pub top_certainty_markers: Vec<Ranked<String>>,
    pub direct_questions: usize,
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> VoiceReport {
    let prose = text::paragraphs(text).join("\n\n");
    let words = text::lowercase_words(&prose);
    let total = words.len();

    let usage = |set: &[&str]| {
        let count = words.iter().filter(|w| set.contains(&w.as_str())).count();
        PronounUsage {
            count,
            per_1000: stats::per_thousand(count, total),
        }
    };
    let first_person_singular = usage(FIRST_SINGULAR);
    let first_person_plural = usage(FIRST_PLURAL);
    let second_person = usage(SECOND);
    let third_person = usage(THIRD);

    let dominant_perspective = dominant(&[
        (Perspective::FirstPersonSingular, first_person_singular.count),
        (Perspective::FirstPersonPlural, first_person_plural.count),
        (Perspective::SecondPerson, second_person.count),
        (Perspective::ThirdPerson, third_person.count),
    ]);

    let contractions = words.iter().filter(|w| text::is_contraction(w)).count();
    let hedge_hits = marker_hits(&prose, &HEDGE_PATTERNS);
    let certainty_hits = marker_hits(&prose, &CERTAINTY_PATTERNS);
    let hedges = hedge_hits.len();
    let certainty_markers = certainty_hits.len();

    VoiceReport {
        total_words: total,
        first_person_singular,
        first_person_plural,
        second_person,
        third_person,
        dominant_perspective,
        contractions,
        contraction_rate: stats::per_thousand(contractions, total),
        hedges,
        hedge_rate: stats::per_thousand(hedges, total),
        top_hedges: stats::top_n(&stats::frequency_map(hedge_hits), TOP_MARKERS),
        certainty_markers,
        certainty_rate: stats::per_thousand(certainty_markers, total),
        top_certainty_markers: stats::top_n(&stats::frequency_map(certainty_hits), TOP_MARKERS),
        direct_questions: DIRECT_QUESTION_RE.find_iter(&prose).count(),
    }
}

fn marker_hits(text: &str, patterns: &[Regex]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.as_str().to_lowercase()))
        .collect()
}

/// Highest count wins; ties go to the earlier entry.
fn dominant(counts: &[(Perspective, usize)]) -> Perspective {
    let mut best = Perspective::None;
    let mut best_count = 0usize;
    for &(perspective, count) in counts {
        if count > best_count {
            best = perspective;
            best_count = count;
        }
    }
    best
}
