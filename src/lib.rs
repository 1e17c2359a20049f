//! Derive an author's statistical voice fingerprint from a corpus of
//! articles and render it as a Markdown style guide.

pub mod analyzers;
pub mod config;
pub mod corpus;
pub mod error;
pub mod guide;
pub mod pipeline;
pub mod reference;
pub mod report;
pub mod stats;
pub mod text;

pub use config::Thresholds;
pub use corpus::{Article, Corpus};
pub use error::{Error, Result};
pub use pipeline::{AnalyzerKind, Pipeline, RunSummary};
pub use reference::ReferenceData;
pub use report::{AnyReport, ReportEnvelope, SCHEMA_VERSION};

/// Everything an analyzer reads besides the text itself.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub thresholds: Thresholds,
    pub reference: ReferenceData,
}

impl AnalysisContext {
    pub fn new(thresholds: Thresholds, reference: ReferenceData) -> Self {
        Self {
            thresholds,
            reference,
        }
    }
}
