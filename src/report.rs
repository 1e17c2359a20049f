//! Versioned report envelope.
//!
//! Every persisted report is wrapped with the schema version it was written
//! under. Readers reject other versions outright instead of probing for
//! fields; bump [`SCHEMA_VERSION`] whenever a report shape changes.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analyzers::argument_flow::ArgumentFlowReport;
use crate::analyzers::burstiness::BurstinessReport;
use crate::analyzers::function_words::FunctionWordReport;
use crate::analyzers::naturalness::NaturalnessReport;
use crate::analyzers::paragraph::ParagraphReport;
use crate::analyzers::phrase_library::PhraseLibraryReport;
use crate::analyzers::punctuation::PunctuationReport;
use crate::analyzers::sentence::SentenceReport;
use crate::analyzers::specificity::SpecificityReport;
use crate::analyzers::transitions::TransitionReport;
use crate::analyzers::vocabulary::VocabularyReport;
use crate::analyzers::vocabulary_tiers::VocabularyTierReport;
use crate::analyzers::voice::VoiceReport;
use crate::error::{Error, Result};
use crate::pipeline::AnalyzerKind;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEnvelope<T> {
    pub schema_version: u32,
    pub analyzer: String,
    pub corpus: String,
    pub report: T,
}

impl<T> ReportEnvelope<T> {
    pub fn new(analyzer: AnalyzerKind, corpus: &str, report: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            analyzer: analyzer.name().to_string(),
            corpus: corpus.to_string(),
            report,
        }
    }
}

impl<T: Serialize> ReportEnvelope<T> {
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n").map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<T: DeserializeOwned> ReportEnvelope<T> {
    /// Reads an envelope, checking the schema version before the payload is
    /// decoded.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let malformed = |source: serde_json::Error| Error::MalformedReport {
            path: path.to_path_buf(),
            source,
        };
        let raw: ReportEnvelope<serde_json::Value> =
            serde_json::from_str(&contents).map_err(malformed)?;
        if raw.schema_version != SCHEMA_VERSION {
            return Err(Error::SchemaMismatch {
                path: path.to_path_buf(),
                found: raw.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(ReportEnvelope {
            schema_version: raw.schema_version,
            analyzer: raw.analyzer,
            corpus: raw.corpus,
            report: serde_json::from_value(raw.report).map_err(malformed)?,
        })
    }
}

/// The output of any one analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyReport {
    Vocabulary(VocabularyReport),
    Sentence(SentenceReport),
    Voice(VoiceReport),
    Punctuation(PunctuationReport),
    Paragraph(ParagraphReport),
    FunctionWords(FunctionWordReport),
    Naturalness(NaturalnessReport),
    Burstiness(BurstinessReport),
    ArgumentFlow(ArgumentFlowReport),
    Transitions(TransitionReport),
    Specificity(SpecificityReport),
    VocabularyTiers(VocabularyTierReport),
    PhraseLibrary(PhraseLibraryReport),
}

impl AnyReport {
    pub fn kind(&self) -> AnalyzerKind {
        match self {
            Self::Vocabulary(_) => AnalyzerKind::Vocabulary,
            Self::Sentence(_) => AnalyzerKind::Sentence,
            Self::Voice(_) => AnalyzerKind::Voice,
            Self::Punctuation(_) => AnalyzerKind::Punctuation,
            Self::Paragraph(_) => AnalyzerKind::Paragraph,
            Self::FunctionWords(_) => AnalyzerKind::FunctionWords,
            Self::Naturalness(_) => AnalyzerKind::Naturalness,
            Self::Burstiness(_) => AnalyzerKind::Burstiness,
            Self::ArgumentFlow(_) => AnalyzerKind::ArgumentFlow,
            Self::Transitions(_) => AnalyzerKind::Transitions,
            Self::Specificity(_) => AnalyzerKind::Specificity,
            Self::VocabularyTiers(_) => AnalyzerKind::VocabularyTiers,
            Self::PhraseLibrary(_) => AnalyzerKind::PhraseLibrary,
        }
    }
}
