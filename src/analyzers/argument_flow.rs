//! Argument-flow detection.
//!
//! Each paragraph is assigned the first argument move in [`FLOW_PATTERNS`]
//! whose trigger matches. A match is *strong* when every support pattern of
//! that row also matches the paragraph, and *weak* otherwise.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analyzers::Example;
use crate::config::ArgumentFlowThresholds;
use crate::stats;
use crate::text;
use crate::AnalysisContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentMove {
    Warning,
    Evidence,
    Comparison,
    Recommendation,
    PersonalExperience,
    QuestionHook,
    Conclusion,
    Exposition,
}

impl ArgumentMove {
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Evidence => "evidence",
            Self::Comparison => "comparison",
            Self::Recommendation => "recommendation",
            Self::PersonalExperience => "personal experience",
            Self::QuestionHook => "question hook",
            Self::Conclusion => "conclusion",
            Self::Exposition => "exposition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_ratio(strong_ratio: f64, bands: &ArgumentFlowThresholds) -> Self {
        if strong_ratio >= bands.high_confidence {
            Self::High
        } else if strong_ratio >= bands.medium_confidence {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

pub struct FlowPattern {
    pub argument_move: ArgumentMove,
    pub trigger: Regex,
    pub support: Vec<Regex>,
}

fn pattern(argument_move: ArgumentMove, trigger: &str, support: &[&str]) -> FlowPattern {
    FlowPattern {
        argument_move,
        trigger: Regex::new(trigger).unwrap(),
        support: support.iter().map(|s| Regex::new(s).unwrap()).collect(),
    }
}

const NUMBER: &str = r"\d";

/// Priority order. A paragraph holding both a warning and a personal marker is
/// a warning.
pub static FLOW_PATTERNS: Lazy<Vec<FlowPattern>> = Lazy::new(|| {
    vec![
        pattern(
            ArgumentMove::Warning,
            r"(?i)\b(?:don't|do not|never|avoid|beware|careful|watch out|warning|mistake|pitfall|gotcha)\b",
            &[
                r"(?i)\b(?:for example|for instance|e\.g\.|like when|in my case|i once|last time)|\d",
                r"(?i)\b(?:instead|should|try|recommend|better to|make sure|rather)\b",
            ],
        ),
        pattern(
            ArgumentMove::Evidence,
            r"(?i)\b(?:tested|testing|benchmark(?:s|ed)?|measured|data|results?|according to|study|studies|survey|numbers)\b",
            &[NUMBER],
        ),
        pattern(
            ArgumentMove::Comparison,
            r"(?i)\b(?:versus|vs\.?|compared (?:to|with)|better than|worse than|faster than|slower than|cheaper than|unlike|whereas)\b",
            &[NUMBER],
        ),
        pattern(
            ArgumentMove::Recommendation,
            r"(?i)\b(?:i recommend|i'd recommend|you should|my advice|go with|worth it|best (?:option|choice|bet)|i suggest)\b",
            &[r"(?i)\b(?:because|since|so that|which means|the reason)\b"],
        ),
        pattern(
            ArgumentMove::PersonalExperience,
            r"(?i)\b(?:i|my|i've|i'd|i was|when i)\b",
            &[
                r"(?i)\b(?:\w+ed|was|were|had|bought|built|ran|went|found|got|spent|took)\b",
                NUMBER,
            ],
        ),
        pattern(ArgumentMove::QuestionHook, r"\?", &[r"[.!](?:\s|$)"]),
        pattern(
            ArgumentMove::Conclusion,
            r"(?i)\b(?:in short|bottom line|overall|ultimately|to sum up|in the end|all in all|tl;?dr)\b",
            &[r"(?i)\b(?:recommend|worth|should|would|buy|skip)\b"],
        ),
    ]
});

/// The move for a paragraph and whether the match is strong.
pub fn classify(paragraph: &str) -> (ArgumentMove, bool) {
    for p in FLOW_PATTERNS.iter() {
        if p.trigger.is_match(paragraph) {
            let strong = p.support.iter().all(|s| s.is_match(paragraph));
            return (p.argument_move, strong);
        }
    }
    (ArgumentMove::Exposition, false)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStats {
    pub argument_move: ArgumentMove,
    pub count: usize,
    pub percentage: f64,
    pub strong: usize,
    pub weak: usize,
    pub confidence: Confidence,
    /// `position` is the paragraph index across the corpus.
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveTally {
    pub argument_move: ArgumentMove,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSequence {
    pub from: ArgumentMove,
    pub to: ArgumentMove,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentFlowReport {
    pub total_paragraphs: usize,
    pub classified_paragraphs: usize,
    pub exposition_paragraphs: usize,
    /// Pattern moves in priority order; exposition is not listed.
    pub moves: Vec<MoveStats>,
    pub strong_ratio: f64,
    pub overall_confidence: Confidence,
    pub article_openings: Vec<MoveTally>,
    pub article_closings: Vec<MoveTally>,
    pub sequences: Vec<FlowSequence>,
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> ArgumentFlowReport {
    let general = &ctx.thresholds.general;
    let bands = &ctx.thresholds.argument_flow;

    let mut classified: Vec<(usize, String, ArgumentMove, bool)> = Vec::new();
    let mut openings = Vec::new();
    let mut closings = Vec::new();
    let mut pairs = Vec::new();

    let mut index = 0usize;
    for article in text::articles(text) {
        let moves: Vec<ArgumentMove> = text::paragraphs(article)
            .into_iter()
            .map(|p| {
                let (m, strong) = classify(&p);
                classified.push((index, p, m, strong));
                index += 1;
                m
            })
            .collect();
        if let (Some(first), Some(last)) = (moves.first(), moves.last()) {
            openings.push(*first);
            closings.push(*last);
        }
        pairs.extend(moves.windows(2).map(|w| (w[0], w[1])));
    }

    let total = classified.len();
    let moves: Vec<MoveStats> = FLOW_PATTERNS
        .iter()
        .map(|p| {
            let hits: Vec<&(usize, String, ArgumentMove, bool)> = classified
                .iter()
                .filter(|c| c.2 == p.argument_move)
                .collect();
            let strong = hits.iter().filter(|c| c.3).count();
            let count = hits.len();
            // Strong matches make the better examples.
            let mut ordered = hits.clone();
            ordered.sort_by_key(|c| (!c.3, c.0));
            MoveStats {
                argument_move: p.argument_move,
                count,
                percentage: stats::percentage(count, total),
                strong,
                weak: count - strong,
                confidence: Confidence::from_ratio(stats::ratio_raw(strong, count), bands),
                examples: ordered
                    .into_iter()
                    .take(general.max_examples)
                    .map(|c| Example {
                        excerpt: text::excerpt(&c.1, general.excerpt_chars),
                        position: c.0,
                    })
                    .collect(),
            }
        })
        .collect();

    let matched: usize = moves.iter().map(|m| m.count).sum();
    let strong: usize = moves.iter().map(|m| m.strong).sum();
    let strong_ratio = stats::ratio_raw(strong, matched);

    let pair_counts = stats::frequency_map(pairs);
    let mut sequences: Vec<FlowSequence> = pair_counts
        .into_iter()
        .map(|((from, to), count)| FlowSequence { from, to, count })
        .collect();
    sequences.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| (a.from, a.to).cmp(&(b.from, b.to)))
    });
    sequences.truncate(bands.max_sequences);

    ArgumentFlowReport {
        total_paragraphs: total,
        classified_paragraphs: matched,
        exposition_paragraphs: total - matched,
        moves,
        strong_ratio: stats::round4(strong_ratio),
        overall_confidence: Confidence::from_ratio(strong_ratio, bands),
        article_openings: tally(&openings),
        article_closings: tally(&closings),
        sequences,
    }
}

fn tally(moves: &[ArgumentMove]) -> Vec<MoveTally> {
    let mut out: Vec<MoveTally> = stats::frequency_map(moves.iter().copied())
        .into_iter()
        .map(|(argument_move, count)| MoveTally {
            argument_move,
            count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.argument_move.cmp(&b.argument_move))
    });
    out
}
