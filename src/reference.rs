//! Static reference tables.
//!
//! Function-word baselines are per-1000-word means and standard deviations
//! for general written English (approximate figures from large reference
//! corpora). The AI-slop and formal-word tables pair each term with the
//! plainer word a casual writer would use.
//!
//! Tables are built once and handed to analyzers through
//! [`crate::AnalysisContext`]; nothing here is mutable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionWordCategory {
    Article,
    Preposition,
    Conjunction,
    Pronoun,
    Auxiliary,
    Adverb,
    Determiner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionWordEntry {
    pub word: &'static str,
    pub category: FunctionWordCategory,
    /// 1 is most discriminative between authors, 4 least.
    pub tier: u8,
    pub british_marker: bool,
    pub mean_per_1000: f64,
    pub std_dev_per_1000: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Verb,
    Connector,
    Word,
}

/// A flagged term and the plainer word to use instead.
#[derive(Debug, Clone)]
pub struct Term {
    pub word: &'static str,
    pub replacement: &'static str,
    pub kind: TermKind,
    pattern: Regex,
}

impl Term {
    /// `forms` is a regex fragment covering the inflections, e.g.
    /// `delv(?:e|es|ed|ing)`.
    pub fn new(
        word: &'static str,
        forms: &str,
        replacement: &'static str,
        kind: TermKind,
    ) -> Result<Self> {
        Ok(Self {
            word,
            replacement,
            kind,
            pattern: Regex::new(&format!(r"(?i)\b(?:{forms})\b"))?,
        })
    }

    pub fn find_iter<'t>(&self, text: &'t str) -> regex::Matches<'_, 't> {
        self.pattern.find_iter(text)
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub function_words: Vec<FunctionWordEntry>,
    pub slop_terms: Vec<Term>,
    pub formal_terms: Vec<Term>,
    pub casual_markers: Vec<&'static str>,
    function_word_re: Regex,
    casual_re: Regex,
}

impl ReferenceData {
    pub fn new(
        function_words: Vec<FunctionWordEntry>,
        slop_terms: Vec<Term>,
        formal_terms: Vec<Term>,
        casual_markers: Vec<&'static str>,
    ) -> Result<Self> {
        let function_word_re = alternation(function_words.iter().map(|e| e.word))?;
        let casual_re = alternation(casual_markers.iter().copied())?;
        Ok(Self {
            function_words,
            slop_terms,
            formal_terms,
            casual_markers,
            function_word_re,
            casual_re,
        })
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Case-insensitive, word-boundary matches of any reference function word.
    pub fn function_word_matches<'t>(&self, text: &'t str) -> regex::Matches<'_, 't> {
        self.function_word_re.find_iter(text)
    }

    pub fn casual_matches<'t>(&self, text: &'t str) -> regex::Matches<'_, 't> {
        self.casual_re.find_iter(text)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> Result<Regex> {
    let alt = words.map(regex::escape).collect::<Vec<_>>().join("|");
    if alt.is_empty() {
        // Matches nothing.
        return Ok(Regex::new(r"[^\s\S]")?);
    }
    Ok(Regex::new(&format!(r"(?i)\b(?:{alt})\b"))?)
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| {
    ReferenceData::new(
        function_word_table(),
        slop_table(),
        formal_table(),
        CASUAL_MARKERS.to_vec(),
    )
    .unwrap()
});

const fn fw(
    word: &'static str,
    category: FunctionWordCategory,
    tier: u8,
    british_marker: bool,
    mean_per_1000: f64,
    std_dev_per_1000: f64,
) -> FunctionWordEntry {
    FunctionWordEntry {
        word,
        category,
        tier,
        british_marker,
        mean_per_1000,
        std_dev_per_1000,
    }
}

fn function_word_table() -> Vec<FunctionWordEntry> {
    use FunctionWordCategory::*;
    vec![
        // Articles
        fw("the", Article, 4, false, 58.0, 12.0),
        fw("a", Article, 4, false, 21.0, 5.5),
        fw("an", Article, 3, false, 3.5, 1.6),
        // Prepositions
        fw("of", Preposition, 4, false, 29.0, 7.5),
        fw("to", Preposition, 4, false, 25.0, 5.0),
        fw("in", Preposition, 4, false, 18.5, 4.5),
        fw("for", Preposition, 3, false, 8.5, 2.5),
        fw("on", Preposition, 3, false, 6.5, 2.2),
        fw("with", Preposition, 3, false, 6.5, 2.0),
        fw("at", Preposition, 3, false, 4.5, 1.7),
        fw("by", Preposition, 2, false, 5.0, 2.2),
        fw("from", Preposition, 3, false, 4.3, 1.6),
        fw("about", Preposition, 2, false, 2.0, 1.2),
        fw("into", Preposition, 2, false, 1.7, 0.8),
        fw("through", Preposition, 2, false, 0.9, 0.5),
        fw("between", Preposition, 2, false, 0.8, 0.6),
        fw("without", Preposition, 2, false, 0.6, 0.4),
        fw("against", Preposition, 2, false, 0.5, 0.4),
        fw("within", Preposition, 1, false, 0.6, 0.5),
        fw("among", Preposition, 1, false, 0.35, 0.3),
        fw("toward", Preposition, 1, false, 0.15, 0.25),
        fw("upon", Preposition, 1, true, 0.35, 0.45),
        fw("amongst", Preposition, 1, true, 0.03, 0.06),
        fw("towards", Preposition, 1, true, 0.25, 0.25),
        fw("whilst", Conjunction, 1, true, 0.04, 0.08),
        // Conjunctions
        fw("and", Conjunction, 4, false, 27.0, 5.5),
        fw("but", Conjunction, 2, false, 4.5, 1.9),
        fw("or", Conjunction, 2, false, 3.8, 1.7),
        fw("if", Conjunction, 2, false, 2.6, 1.3),
        fw("than", Conjunction, 2, false, 1.6, 0.7),
        fw("so", Conjunction, 1, false, 2.5, 1.6),
        fw("because", Conjunction, 1, false, 1.0, 0.8),
        fw("although", Conjunction, 1, false, 0.45, 0.35),
        fw("though", Conjunction, 1, false, 0.55, 0.45),
        fw("while", Conjunction, 1, false, 0.6, 0.4),
        fw("whereas", Conjunction, 1, false, 0.1, 0.15),
        fw("unless", Conjunction, 1, false, 0.15, 0.15),
        fw("since", Conjunction, 2, false, 0.5, 0.35),
        fw("yet", Conjunction, 1, false, 0.4, 0.3),
        // Pronouns
        fw("i", Pronoun, 1, false, 9.0, 9.0),
        fw("me", Pronoun, 1, false, 1.3, 1.5),
        fw("my", Pronoun, 1, false, 1.8, 2.0),
        fw("we", Pronoun, 1, false, 3.5, 3.0),
        fw("us", Pronoun, 1, false, 0.7, 0.7),
        fw("our", Pronoun, 1, false, 1.3, 1.3),
        fw("you", Pronoun, 1, false, 6.0, 6.0),
        fw("your", Pronoun, 1, false, 1.4, 1.6),
        fw("it", Pronoun, 2, false, 10.0, 3.0),
        fw("they", Pronoun, 2, false, 3.8, 2.2),
        fw("he", Pronoun, 2, false, 6.5, 6.0),
        fw("she", Pronoun, 2, false, 3.0, 4.5),
        fw("this", Pronoun, 2, false, 5.0, 1.8),
        fw("that", Pronoun, 2, false, 11.0, 3.0),
        fw("which", Pronoun, 1, false, 3.0, 1.6),
        fw("what", Pronoun, 2, false, 2.2, 1.3),
        fw("who", Pronoun, 2, false, 2.0, 0.9),
        // Auxiliaries and modals
        fw("is", Auxiliary, 3, false, 9.5, 3.0),
        fw("was", Auxiliary, 2, false, 8.5, 5.0),
        fw("be", Auxiliary, 3, false, 6.0, 1.8),
        fw("have", Auxiliary, 3, false, 4.5, 1.7),
        fw("has", Auxiliary, 2, false, 2.5, 1.3),
        fw("had", Auxiliary, 2, false, 4.2, 3.5),
        fw("will", Auxiliary, 2, false, 2.8, 1.6),
        fw("would", Auxiliary, 2, false, 2.4, 1.4),
        fw("can", Auxiliary, 2, false, 2.6, 1.3),
        fw("could", Auxiliary, 2, false, 1.5, 0.9),
        fw("should", Auxiliary, 1, false, 1.0, 0.7),
        fw("must", Auxiliary, 1, false, 0.6, 0.5),
        fw("might", Auxiliary, 1, false, 0.5, 0.4),
        fw("may", Auxiliary, 1, false, 1.2, 0.9),
        fw("shall", Auxiliary, 1, true, 0.2, 0.3),
        // Adverbs
        fw("not", Adverb, 2, false, 4.5, 1.6),
        fw("just", Adverb, 1, false, 1.5, 1.2),
        fw("very", Adverb, 1, false, 1.0, 0.7),
        fw("really", Adverb, 1, false, 0.6, 0.7),
        fw("also", Adverb, 2, false, 1.5, 0.7),
        fw("only", Adverb, 2, false, 1.5, 0.6),
        fw("even", Adverb, 1, false, 0.8, 0.5),
        fw("still", Adverb, 1, false, 0.6, 0.4),
        fw("then", Adverb, 2, false, 1.5, 0.9),
        fw("there", Adverb, 2, false, 2.8, 1.1),
        fw("however", Adverb, 1, false, 0.5, 0.5),
        fw("quite", Adverb, 1, true, 0.4, 0.4),
        fw("rather", Adverb, 1, false, 0.3, 0.3),
        // Determiners and quantifiers
        fw("all", Determiner, 2, false, 2.7, 1.0),
        fw("some", Determiner, 2, false, 1.6, 0.8),
        fw("any", Determiner, 2, false, 1.0, 0.6),
        fw("each", Determiner, 2, false, 0.7, 0.5),
        fw("every", Determiner, 1, false, 0.4, 0.3),
        fw("much", Determiner, 2, false, 0.8, 0.5),
        fw("many", Determiner, 2, false, 0.8, 0.5),
        fw("these", Determiner, 2, false, 1.1, 0.7),
        fw("those", Determiner, 2, false, 0.7, 0.4),
    ]
}

fn slop_table() -> Vec<Term> {
    use TermKind::*;
    [
        ("delve", r"delv(?:e|es|ed|ing)", "dig into", Verb),
        ("leverage", r"leverag(?:e|es|ed|ing)", "use", Verb),
        ("harness", r"harness(?:es|ed|ing)?", "use", Verb),
        ("embark", r"embark(?:s|ed|ing)?", "start", Verb),
        ("foster", r"foster(?:s|ed|ing)?", "build", Verb),
        ("elevate", r"elevat(?:e|es|ed|ing)", "improve", Verb),
        ("unleash", r"unleash(?:es|ed|ing)?", "let loose", Verb),
        ("navigate", r"navigat(?:e|es|ed|ing)", "work through", Verb),
        ("showcase", r"showcas(?:e|es|ed|ing)", "show", Verb),
        ("underscore", r"underscor(?:e|es|ed|ing)", "show", Verb),
        ("streamline", r"streamlin(?:e|es|ed|ing)", "simplify", Verb),
        ("revolutionize", r"revolutioni[sz](?:e|es|ed|ing)", "change", Verb),
        ("boast", r"boast(?:s|ed|ing)?", "has", Verb),
        ("tapestry", r"tapestr(?:y|ies)", "mix", Word),
        ("testament", r"testaments?", "proof", Word),
        ("realm", r"realms?", "area", Word),
        ("landscape", r"landscapes?", "scene", Word),
        ("paradigm", r"paradigms?", "model", Word),
        ("synergy", r"synerg(?:y|ies)", "teamwork", Word),
        ("plethora", r"plethora", "lots", Word),
        ("journey", r"journeys?", "process", Word),
        ("game-changer", r"game-changers?|game-changing", "big deal", Word),
        ("seamless", r"seamless(?:ly)?", "smooth", Word),
        ("robust", r"robust", "solid", Word),
        ("crucial", r"crucial(?:ly)?", "key", Word),
        ("pivotal", r"pivotal", "key", Word),
        ("paramount", r"paramount", "most important", Word),
        ("multifaceted", r"multifaceted", "complicated", Word),
        ("intricate", r"intricate|intricacies", "detailed", Word),
        ("meticulous", r"meticulous(?:ly)?", "careful", Word),
        ("comprehensive", r"comprehensive", "full", Word),
        ("holistic", r"holistic", "whole", Word),
        ("cutting-edge", r"cutting-edge", "new", Word),
        ("groundbreaking", r"groundbreaking", "new", Word),
        ("vibrant", r"vibrant", "lively", Word),
        ("bustling", r"bustling", "busy", Word),
        ("nuanced", r"nuanced", "subtle", Word),
        ("moreover", r"moreover", "also", Connector),
        ("furthermore", r"furthermore", "also", Connector),
    ]
    .into_iter()
    .map(|(word, forms, replacement, kind)| Term::new(word, forms, replacement, kind).unwrap())
    .collect()
}

fn formal_table() -> Vec<Term> {
    use TermKind::*;
    [
        ("utilize", r"utili[sz](?:e|es|ed|ing|ation)", "use", Verb),
        ("facilitate", r"facilitat(?:e|es|ed|ing)", "help", Verb),
        ("commence", r"commenc(?:e|es|ed|ing)", "start", Verb),
        ("endeavor", r"endeavou?r(?:s|ed|ing)?", "try", Verb),
        ("ascertain", r"ascertain(?:s|ed|ing)?", "find out", Verb),
        ("demonstrate", r"demonstrat(?:e|es|ed|ing)", "show", Verb),
        ("implement", r"implement(?:s|ed|ing)?", "set up", Verb),
        ("obtain", r"obtain(?:s|ed|ing)?", "get", Verb),
        ("purchase", r"purchas(?:e|es|ed|ing)", "buy", Verb),
        ("acquire", r"acquir(?:e|es|ed|ing)", "get", Verb),
        ("assist", r"assist(?:s|ed|ing)?", "help", Verb),
        ("require", r"requir(?:e|es|ed|ing)", "need", Verb),
        ("terminate", r"terminat(?:e|es|ed|ing)", "end", Verb),
        ("modify", r"modif(?:y|ies|ied|ying)", "change", Verb),
        ("indicate", r"indicat(?:e|es|ed|ing)", "show", Verb),
        ("possess", r"possess(?:es|ed|ing)?", "have", Verb),
        ("construct", r"construct(?:s|ed|ing)?", "build", Verb),
        ("attempt", r"attempt(?:s|ed|ing)?", "try", Verb),
        ("inquire", r"inquir(?:e|es|ed|ing)", "ask", Verb),
        ("comprehend", r"comprehend(?:s|ed|ing)?", "understand", Verb),
        ("necessitate", r"necessitat(?:e|es|ed|ing)", "need", Verb),
        ("procure", r"procur(?:e|es|ed|ing)", "get", Verb),
        ("therefore", r"therefore", "so", Connector),
        ("consequently", r"consequently", "so", Connector),
        ("subsequently", r"subsequently", "later", Connector),
        ("nevertheless", r"nevertheless", "still", Connector),
        ("nonetheless", r"nonetheless", "still", Connector),
        ("additionally", r"additionally", "also", Connector),
        ("thus", r"thus", "so", Connector),
        ("hence", r"hence", "so", Connector),
        ("accordingly", r"accordingly", "so", Connector),
        ("approximately", r"approximately", "about", Word),
        ("sufficient", r"sufficient(?:ly)?", "enough", Word),
        ("numerous", r"numerous", "many", Word),
        ("regarding", r"regarding", "about", Word),
        ("individuals", r"individuals", "people", Word),
        ("prior to", r"prior\s+to", "before", Word),
        ("in order to", r"in\s+order\s+to", "to", Word),
        ("methodology", r"methodolog(?:y|ies)", "method", Word),
        ("functionality", r"functionalit(?:y|ies)", "feature", Word),
        ("assistance", r"assistance", "help", Word),
    ]
    .into_iter()
    .map(|(word, forms, replacement, kind)| Term::new(word, forms, replacement, kind).unwrap())
    .collect()
}

const CASUAL_MARKERS: &[&str] = &[
    "gonna", "wanna", "kinda", "sorta", "stuff", "awesome", "cool", "basically", "honestly",
    "literally", "totally", "super", "yeah", "nope", "okay", "ok", "lol", "tbh", "heck",
    "damn", "crazy", "bunch", "tons", "pretty much", "a ton",
];
