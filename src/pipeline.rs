//! Corpus orchestrator: run the selected analyzers and persist their reports.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyzers::{
    argument_flow, burstiness, function_words, naturalness, paragraph, phrase_library,
    punctuation, sentence, specificity, transitions, vocabulary, vocabulary_tiers, voice,
};
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::report::{AnyReport, ReportEnvelope};
use crate::AnalysisContext;

pub const CORPUS_FILE: &str = "corpus.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerKind {
    Vocabulary,
    Sentence,
    Voice,
    Punctuation,
    Paragraph,
    FunctionWords,
    Naturalness,
    Burstiness,
    ArgumentFlow,
    #[serde(rename = "paragraph-transitions")]
    Transitions,
    Specificity,
    VocabularyTiers,
    PhraseLibrary,
}

impl AnalyzerKind {
    /// Every analyzer, in the order the pipeline runs them.
    pub const ALL: [AnalyzerKind; 13] = [
        Self::Vocabulary,
        Self::Sentence,
        Self::Voice,
        Self::Punctuation,
        Self::Paragraph,
        Self::FunctionWords,
        Self::Naturalness,
        Self::Burstiness,
        Self::ArgumentFlow,
        Self::Transitions,
        Self::Specificity,
        Self::VocabularyTiers,
        Self::PhraseLibrary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Sentence => "sentence",
            Self::Voice => "voice",
            Self::Punctuation => "punctuation",
            Self::Paragraph => "paragraph",
            Self::FunctionWords => "function-words",
            Self::Naturalness => "naturalness",
            Self::Burstiness => "burstiness",
            Self::ArgumentFlow => "argument-flow",
            Self::Transitions => "paragraph-transitions",
            Self::Specificity => "specificity",
            Self::VocabularyTiers => "vocabulary-tiers",
            Self::PhraseLibrary => "phrase-library",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    pub fn analyze(self, text: &str, ctx: &AnalysisContext) -> AnyReport {
        match self {
            Self::Vocabulary => AnyReport::Vocabulary(vocabulary::analyze(text, ctx)),
            Self::Sentence => AnyReport::Sentence(sentence::analyze(text, ctx)),
            Self::Voice => AnyReport::Voice(voice::analyze(text, ctx)),
            Self::Punctuation => AnyReport::Punctuation(punctuation::analyze(text, ctx)),
            Self::Paragraph => AnyReport::Paragraph(paragraph::analyze(text, ctx)),
            Self::FunctionWords => AnyReport::FunctionWords(function_words::analyze(text, ctx)),
            Self::Naturalness => AnyReport::Naturalness(naturalness::analyze(text, ctx)),
            Self::Burstiness => AnyReport::Burstiness(burstiness::analyze(text, ctx)),
            Self::ArgumentFlow => AnyReport::ArgumentFlow(argument_flow::analyze(text, ctx)),
            Self::Transitions => AnyReport::Transitions(transitions::analyze(text, ctx)),
            Self::Specificity => AnyReport::Specificity(specificity::analyze(text, ctx)),
            Self::VocabularyTiers => {
                AnyReport::VocabularyTiers(vocabulary_tiers::analyze(text, ctx))
            }
            Self::PhraseLibrary => AnyReport::PhraseLibrary(phrase_library::analyze(text, ctx)),
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalyzerKind {
    type Err = Error;

    /// Accepts `function-words`, `function_words` and `function-words.json`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().trim_end_matches(".json").replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::UnknownAnalyzer(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub corpus: String,
    pub out_dir: PathBuf,
    pub word_count: usize,
    pub article_count: usize,
    pub files: Vec<PathBuf>,
}

pub struct Pipeline {
    ctx: AnalysisContext,
}

impl Pipeline {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self { ctx }
    }

    /// Runs `selection` over the corpus in memory. Duplicates are dropped and
    /// the fixed analyzer order is kept.
    pub fn analyze(&self, corpus: &Corpus, selection: &[AnalyzerKind]) -> Vec<AnyReport> {
        let text = corpus.combined_text();
        ordered(selection)
            .into_iter()
            .map(|kind| {
                debug!("Running {kind} analyzer");
                kind.analyze(&text, &self.ctx)
            })
            .collect()
    }

    /// Runs `selection` and writes `corpus.json` plus one envelope per report
    /// into `out_dir`.
    pub fn run(
        &self,
        corpus: &Corpus,
        selection: &[AnalyzerKind],
        out_dir: &Path,
    ) -> Result<RunSummary> {
        fs::create_dir_all(out_dir).map_err(|source| Error::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let metadata = corpus.metadata();
        let corpus_path = out_dir.join(CORPUS_FILE);
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(&corpus_path, json + "\n").map_err(|source| Error::Write {
            path: corpus_path.clone(),
            source,
        })?;
        let mut files = vec![corpus_path];

        for report in self.analyze(corpus, selection) {
            let kind = report.kind();
            let path = out_dir.join(kind.file_name());
            ReportEnvelope::new(kind, &corpus.name, report).write(&path)?;
            info!("Wrote {}", path.display());
            files.push(path);
        }

        Ok(RunSummary {
            corpus: corpus.name.clone(),
            out_dir: out_dir.to_path_buf(),
            word_count: metadata.word_count,
            article_count: metadata.article_count,
            files,
        })
    }
}

fn ordered(selection: &[AnalyzerKind]) -> Vec<AnalyzerKind> {
    AnalyzerKind::ALL
        .into_iter()
        .filter(|kind| selection.contains(kind))
        .collect()
}
