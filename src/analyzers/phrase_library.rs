//! Phrase library: recurring phrasings worth imitating.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stats;
use crate::text;
use crate::AnalysisContext;

const TOP_PHRASES: usize = 15;
const OPENING_WORDS: usize = 3;
const MIN_REPEATS: usize = 2;
const NGRAM_MIN_N: usize = 3;
const NGRAM_MAX_N: usize = 5;

static TRANSITION_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "that said", "on the other hand", "in other words", "the thing is", "the problem is",
        "the catch is", "to be honest", "as it turns out", "it turns out", "in practice",
        "at this point", "for what it's worth", "long story short", "the good news",
        "the bad news", "which means", "that's why", "with that in mind", "on top of that",
        "even so", "for example", "for instance", "in the end", "by the way",
    ]
    .iter()
    .map(|p| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p))).unwrap())
    .collect()
});

static EQUIPMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:my|our)\s+(?:[\w-]+\s+)?",
        r"(?:rig|setup|build|pc|gpu|cpu|card|server|laptop|machine|box|monitor|keyboard|desk|",
        r"camera|lens|kit|gear|rack|nas|router|workstation|homelab|phone|tablet|car|bike)s?\b"
    ))
    .unwrap()
});

static CAVEAT_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "that said", "to be fair", "in my experience", "your mileage may vary", "ymmv",
        "of course", "granted", "admittedly", "the catch is", "the downside is", "the downside",
        "with one caveat", "one caveat", "to be clear", "i could be wrong", "depending on",
        "unless you",
    ]
    .iter()
    .map(|p| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p))).unwrap())
    .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseExample {
    pub phrase: String,
    pub count: usize,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseLibraryReport {
    pub opening_patterns: Vec<PhraseExample>,
    pub transitions: Vec<PhraseExample>,
    pub equipment_references: Vec<PhraseExample>,
    pub caveats: Vec<PhraseExample>,
    pub signature_phrases: Vec<PhraseExample>,
}

impl PhraseLibraryReport {
    pub fn total_phrases(&self) -> usize {
        self.opening_patterns.len()
            + self.transitions.len()
            + self.equipment_references.len()
            + self.caveats.len()
            + self.signature_phrases.len()
    }
}

pub fn analyze(text: &str, ctx: &AnalysisContext) -> PhraseLibraryReport {
    let width = ctx.thresholds.general.context_window_chars;
    let paragraphs = text::paragraphs(text);
    let prose = paragraphs.join("\n\n");

    PhraseLibraryReport {
        opening_patterns: opening_patterns(&paragraphs),
        transitions: pattern_phrases(&prose, &TRANSITION_PHRASES, width),
        equipment_references: pattern_phrases(
            &prose,
            std::slice::from_ref(&*EQUIPMENT_RE),
            width,
        ),
        caveats: pattern_phrases(&prose, &CAVEAT_PHRASES, width),
        signature_phrases: signature_phrases(&paragraphs),
    }
}

fn opening_patterns(paragraphs: &[String]) -> Vec<PhraseExample> {
    let openings: Vec<(String, String)> = paragraphs
        .iter()
        .filter_map(|p| {
            let sentence = text::first_sentence(p)?;
            let lead = text::leading_words(&sentence, OPENING_WORDS)?;
            Some((lead, sentence))
        })
        .collect();
    let counts = stats::frequency_map(openings.iter().map(|(lead, _)| lead.clone()));
    let mut first_seen: HashMap<&str, &str> = HashMap::new();
    for (lead, sentence) in &openings {
        first_seen.entry(lead.as_str()).or_insert(sentence.as_str());
    }
    stats::top_n(&counts, counts.len())
        .into_iter()
        .filter(|r| r.count >= MIN_REPEATS)
        .take(TOP_PHRASES)
        .map(|r| PhraseExample {
            context: first_seen.get(r.item.as_str()).map(|s| text::excerpt(s, 120)),
            phrase: r.item,
            count: r.count,
        })
        .collect()
}

/// Every match of every pattern, grouped by lowercased phrase; the context
/// is taken from the first occurrence.
fn pattern_phrases(text: &str, patterns: &[Regex], width: usize) -> Vec<PhraseExample> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut contexts: HashMap<String, String> = HashMap::new();
    for pat in patterns {
        for m in pat.find_iter(text) {
            let phrase = m
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            contexts
                .entry(phrase.clone())
                .or_insert_with(|| text::context_around(text, m.start(), m.end(), width));
            *counts.entry(phrase).or_insert(0) += 1;
        }
    }
    stats::top_n(&counts, TOP_PHRASES)
        .into_iter()
        .map(|r| PhraseExample {
            context: contexts.remove(&r.item),
            phrase: r.item,
            count: r.count,
        })
        .collect()
}

/// Repeated 3-5 word n-grams within sentences. Shorter n-grams contained in a
/// longer one with at least the same count are suppressed.
fn signature_phrases(paragraphs: &[String]) -> Vec<PhraseExample> {
    let mut ngram_counts: HashMap<Vec<String>, usize> = HashMap::new();
    for sentence in paragraphs.iter().flat_map(|p| text::split_sentences(p)) {
        let tokens = text::lowercase_words(&sentence);
        for n in NGRAM_MIN_N..=NGRAM_MAX_N {
            if tokens.len() < n {
                continue;
            }
            for gram in tokens.windows(n) {
                *ngram_counts.entry(gram.to_vec()).or_insert(0) += 1;
            }
        }
    }

    let repeated: HashMap<Vec<String>, usize> = ngram_counts
        .into_iter()
        .filter(|(gram, count)| {
            *count >= MIN_REPEATS && !gram.iter().all(|w| text::is_stopword(w))
        })
        .collect();

    let mut sorted_grams: Vec<(&Vec<String>, &usize)> = repeated.iter().collect();
    sorted_grams.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut suppressed: HashSet<&Vec<String>> = HashSet::new();
    for (i, &(longer, &longer_count)) in sorted_grams.iter().enumerate() {
        let longer_str = format!(" {} ", longer.join(" "));
        for &(shorter, &shorter_count) in sorted_grams.iter().skip(i + 1) {
            if shorter.len() >= longer.len() || suppressed.contains(shorter) {
                continue;
            }
            let shorter_str = format!(" {} ", shorter.join(" "));
            if longer_str.contains(&shorter_str) && longer_count >= shorter_count {
                suppressed.insert(shorter);
            }
        }
    }

    let mut kept: Vec<(&Vec<String>, usize)> = repeated
        .iter()
        .filter(|(gram, _)| !suppressed.contains(gram))
        .map(|(gram, &count)| (gram, count))
        .collect();
    kept.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.0.len().cmp(&a.0.len()))
            .then_with(|| a.0.cmp(b.0))
    });

    kept.into_iter()
        .take(TOP_PHRASES)
        .map(|(gram, count)| PhraseExample {
            phrase: gram.join(" "),
            count,
            context: None,
        })
        .collect()
}
