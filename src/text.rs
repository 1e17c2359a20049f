//! Tokenization shared by the analyzers.
//!
//! The corpus is Markdown. Code fences, headings, horizontal rules and HTML
//! comments are not prose and are dropped before paragraphs are formed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Joins articles in a combined corpus text.
pub const ARTICLE_SEPARATOR: &str = "\n\n<!-- article -->\n\n";

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+(?:['\u{2019}][A-Za-z]+)*").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\u{201D}\u{2019})\]]*(?:\s|$)"#).unwrap());

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([.!?])["'\u{201D}\u{2019})\]]*(?:\s|$)"#).unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

static FENCED_CODE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static HTML_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static HORIZONTAL_RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:---+|\*\*\*+|___+)\s*$").unwrap());

static PUNCT_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\w]+|[^\w]+$").unwrap());

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

/// Word tokens in document order, original case.
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn lowercase_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| normalize_apostrophes(&m.as_str().to_lowercase()))
        .collect()
}

pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

pub fn is_contraction(word: &str) -> bool {
    word.contains('\'') || word.contains('\u{2019}')
}

fn normalize_apostrophes(word: &str) -> String {
    word.replace('\u{2019}', "'")
}

/// Lowercased first word of a sentence with surrounding punctuation removed.
pub fn first_word(sentence: &str) -> Option<String> {
    sentence
        .split_whitespace()
        .map(|t| normalize_apostrophes(&PUNCT_STRIP_RE.replace_all(t, "").to_lowercase()))
        .find(|t| !t.is_empty())
}

/// The first `n` lowercased words of a sentence joined by spaces.
pub fn leading_words(sentence: &str, n: usize) -> Option<String> {
    let words = lowercase_words(sentence);
    if words.len() < n {
        return None;
    }
    Some(words[..n].join(" "))
}

// ---------------------------------------------------------------------------
// Paragraphs and sentences
// ---------------------------------------------------------------------------

pub fn strip_code_blocks(text: &str) -> String {
    FENCED_CODE_BLOCK_RE.replace_all(text, "").into_owned()
}

/// Prose paragraphs: blank-line separated blocks without headings, rules or
/// comments. Lines inside a paragraph are joined with single spaces.
pub fn paragraphs(text: &str) -> Vec<String> {
    let stripped = strip_code_blocks(text);
    let stripped = HTML_COMMENT_RE.replace_all(&stripped, "\n\n");
    PARAGRAPH_SPLIT_RE
        .split(&stripped)
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .filter(|l| !l.starts_with('#'))
                .filter(|l| !HORIZONTAL_RULE_RE.is_match(l))
                .collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join(" "))
            }
        })
        .collect()
}

pub fn split_sentences(paragraph: &str) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(paragraph)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Sentences with their terminal mark kept, so questions and exclamations can
/// be told apart.
pub fn split_sentences_with_terminator(paragraph: &str) -> Vec<(String, Option<char>)> {
    let mut out = Vec::new();
    let mut last = 0usize;
    for caps in SENTENCE_END_RE.captures_iter(paragraph) {
        let (Some(full), Some(mark)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body = paragraph[last..mark.start()].trim();
        if !body.is_empty() {
            out.push((body.to_string(), mark.as_str().chars().next()));
        }
        last = full.end();
    }
    let tail = paragraph[last..].trim();
    if !tail.is_empty() {
        out.push((tail.to_string(), None));
    }
    out
}

/// First sentence of a paragraph with its terminal mark restored.
pub fn first_sentence(paragraph: &str) -> Option<String> {
    split_sentences_with_terminator(paragraph)
        .into_iter()
        .next()
        .map(|(body, mark)| match mark {
            Some(m) => format!("{body}{m}"),
            None => body,
        })
}

pub fn sentences(text: &str) -> Vec<String> {
    paragraphs(text)
        .iter()
        .flat_map(|p| split_sentences(p))
        .collect()
}

pub fn sentence_word_counts(text: &str) -> Vec<f64> {
    sentences(text)
        .iter()
        .map(|s| word_count(s) as f64)
        .filter(|n| *n > 0.0)
        .collect()
}

/// Articles of a combined corpus text, in order.
pub fn articles(text: &str) -> Vec<&str> {
    text.split(ARTICLE_SEPARATOR)
        .filter(|a| !a.trim().is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Excerpts
// ---------------------------------------------------------------------------

pub fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    let mid = (start + end) / 2;
    let half = width / 2;
    let ctx_start = snap_to_char_boundary(text, mid.saturating_sub(half), false);
    let ctx_end = snap_to_char_boundary(text, std::cmp::min(text.len(), mid + half), true);

    let snippet = text[ctx_start..ctx_end].replace('\n', " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{}{suffix}", snippet.trim())
}

/// The first `max_chars` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", trimmed[..idx].trim_end()),
        None => trimmed.to_string(),
    }
}

/// Snap a byte offset to a valid char boundary, forward or backward.
pub fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    if forward {
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
    } else {
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
    }
    p
}

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

pub static STOPWORDS: Lazy<std::collections::HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "it",
        "that", "this", "with", "as", "by", "from", "was", "were", "are", "be", "been", "has",
        "have", "had", "not", "no", "do", "does", "did", "will", "would", "could", "should", "can",
        "may", "might", "if", "then", "than", "so", "up", "out", "about", "into", "over", "after",
        "before", "between", "through", "just", "also", "very", "more", "most", "some", "any",
        "each", "every", "all", "both", "few", "other", "such", "only", "own", "same", "too",
        "how", "what", "which", "who", "when", "where", "why", "i", "me", "my", "we", "our", "you",
        "your", "he", "she", "him", "her", "his", "they", "them", "their", "its", "there", "here",
        "it's", "i'm", "don't", "that's", "there's", "one", "get", "got",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
