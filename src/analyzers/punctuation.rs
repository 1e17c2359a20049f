use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stats;
use crate::text;
use crate::AnalysisContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Comma,
    Period,
    Semicolon,
    Colon,
    EmDash,
    EnDash,
    Parenthesis,
    Question,
    Exclamation,
    Ellipsis,
    DoubleQuote,
}

impl Mark {
    pub fn label(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Period => "period",
            Self::Semicolon => "semicolon",
            Self::Colon => "colon",
            Self::EmDash => "em dash",
            Self::EnDash => "en dash",
            Self::Parenthesis => "parenthesis",
            Self::Question => "question mark",
            Self::Exclamation => "exclamation mark",
            Self::Ellipsis => "ellipsis",
            Self::DoubleQuote => "double quote",
        }
    }
}

static MARK_PATTERNS: Lazy<Vec<(Mark, Regex)>> = Lazy::new(|| {
    vec![
        (Mark::Comma, Regex::new(r",").unwrap()),
        (Mark::Period, Regex::new(r"\.").unwrap()),
        (Mark::Semicolon, Regex::new(r";").unwrap()),
        (Mark::Colon, Regex::new(r":(?:\s|$)").unwrap()),
        (Mark::EmDash, Regex::new(r"\u{2014}| -- ").unwrap()),
        (Mark::EnDash, Regex::new(r"\u{2013}").unwrap()),
        (Mark::Parenthesis, Regex::new(r"\(").unwrap()),
        (Mark::Question, Regex::new(r"\?").unwrap()),
        (Mark::Exclamation, Regex::new(r"!").unwrap()),
        (Mark::Ellipsis, Regex::new(r"\.\.\.|\u{2026}").unwrap()),
        (Mark::DoubleQuote, Regex::new(r#"["\u{201C}]"#).unwrap()),
    ]
});

static ELLIPSIS_DOTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\.\.").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkUsage {
    pub mark: Mark,
    pub count: usize,
    pub per_1000: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuationReport {
    pub total_words: usize,
    pub total_sentences: usize,
    pub marks: Vec<MarkUsage>,
    pub commas_per_sentence: f64,
    pub uses_em_dashes: bool,
    pub uses_semicolons: bool,
}

impl PunctuationReport {
    pub fn usage(&self, mark: Mark) -> Option<&MarkUsage> {
        self.marks.iter().find(|m| m.mark == mark)
    }

    pub fn rate(&self, mark: Mark) -> f64 {
        self.usage(mark).map(|m| m.per_1000).unwrap_or(0.0)
    }
}

pub fn analyze(text: &str, _ctx: &AnalysisContext) -> PunctuationReport {
    let prose = text::paragraphs(text).join("\n\n");
    let total_words = text::word_count(&prose);
    let total_sentences = text::sentences(&prose).len();

    let ellipsis_dots = ELLIPSIS_DOTS_RE.find_iter(&prose).count() * 3;
    let marks: Vec<MarkUsage> = MARK_PATTERNS
        .iter()
        .map(|(mark, re)| {
            let mut count = re.find_iter(&prose).count();
            if *mark == Mark::Period {
                // Dots belonging to "..." are counted as ellipses.
                count = count.saturating_sub(ellipsis_dots);
            }
            MarkUsage {
                mark: *mark,
                count,
                per_1000: stats::per_thousand(count, total_words),
            }
        })
        .collect();

    let count_of = |mark: Mark| {
        marks
            .iter()
            .find(|m| m.mark == mark)
            .map(|m| m.count)
            .unwrap_or(0)
    };
    let commas = count_of(Mark::Comma);
    let commas_per_sentence = if total_sentences == 0 {
        0.0
    } else {
        stats::round2(commas as f64 / total_sentences as f64)
    };

    PunctuationReport {
        total_words,
        total_sentences,
        commas_per_sentence,
        uses_em_dashes: count_of(Mark::EmDash) > 0,
        uses_semicolons: count_of(Mark::Semicolon) > 0,
        marks,
    }
}
