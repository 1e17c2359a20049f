//! Markdown style-guide generator.
//!
//! Reads the persisted reports from an analysis directory and fills a fixed
//! template. Sections appear in a fixed order; sections backed by an optional
//! report are omitted when that report was not produced. A missing required
//! report fails the whole call and nothing is written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::analyzers::argument_flow::{ArgumentFlowReport, ArgumentMove};
use crate::analyzers::burstiness::BurstinessReport;
use crate::analyzers::function_words::FunctionWordReport;
use crate::analyzers::naturalness::NaturalnessReport;
use crate::analyzers::paragraph::ParagraphReport;
use crate::analyzers::phrase_library::{PhraseExample, PhraseLibraryReport};
use crate::analyzers::punctuation::{Mark, PunctuationReport};
use crate::analyzers::sentence::SentenceReport;
use crate::analyzers::specificity::{SpecificityCategory, SpecificityReport};
use crate::analyzers::transitions::TransitionReport;
use crate::analyzers::vocabulary::VocabularyReport;
use crate::analyzers::vocabulary_tiers::{Formality, VocabularyTierReport};
use crate::analyzers::voice::VoiceReport;
use crate::config::GuideLimits;
use crate::error::{Error, Result};
use crate::pipeline::AnalyzerKind;
use crate::reference::ReferenceData;
use crate::report::ReportEnvelope;
use crate::AnalysisContext;

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output file name inside the analysis directory.
pub const GUIDE_FILE: &str = "style-guide.md";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The reports a guide is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideInputs {
    pub corpus: String,
    pub vocabulary: VocabularyReport,
    pub sentence: SentenceReport,
    pub voice: VoiceReport,
    pub punctuation: PunctuationReport,
    pub function_words: FunctionWordReport,
    pub vocabulary_tiers: VocabularyTierReport,
    pub phrase_library: PhraseLibraryReport,
    pub paragraph: Option<ParagraphReport>,
    pub naturalness: Option<NaturalnessReport>,
    pub burstiness: Option<BurstinessReport>,
    pub argument_flow: Option<ArgumentFlowReport>,
    pub transitions: Option<TransitionReport>,
    pub specificity: Option<SpecificityReport>,
}

impl GuideInputs {
    pub fn load(dir: &Path) -> Result<Self> {
        let vocabulary = required::<VocabularyReport>(dir, AnalyzerKind::Vocabulary)?;
        Ok(Self {
            corpus: vocabulary.corpus,
            vocabulary: vocabulary.report,
            sentence: required(dir, AnalyzerKind::Sentence)?.report,
            voice: required(dir, AnalyzerKind::Voice)?.report,
            punctuation: required(dir, AnalyzerKind::Punctuation)?.report,
            function_words: required(dir, AnalyzerKind::FunctionWords)?.report,
            vocabulary_tiers: required(dir, AnalyzerKind::VocabularyTiers)?.report,
            phrase_library: required(dir, AnalyzerKind::PhraseLibrary)?.report,
            paragraph: optional(dir, AnalyzerKind::Paragraph)?,
            naturalness: optional(dir, AnalyzerKind::Naturalness)?,
            burstiness: optional(dir, AnalyzerKind::Burstiness)?,
            argument_flow: optional(dir, AnalyzerKind::ArgumentFlow)?,
            transitions: optional(dir, AnalyzerKind::Transitions)?,
            specificity: optional(dir, AnalyzerKind::Specificity)?,
        })
    }
}

fn required<T: DeserializeOwned>(dir: &Path, kind: AnalyzerKind) -> Result<ReportEnvelope<T>> {
    let path = dir.join(kind.file_name());
    if !path.is_file() {
        return Err(Error::MissingReport {
            analyzer: kind.name().to_string(),
            path,
        });
    }
    ReportEnvelope::read(&path)
}

fn optional<T: DeserializeOwned>(dir: &Path, kind: AnalyzerKind) -> Result<Option<T>> {
    let path = dir.join(kind.file_name());
    if !path.is_file() {
        debug!("No {kind} report, section omitted");
        return Ok(None);
    }
    Ok(Some(ReportEnvelope::read(&path)?.report))
}

// ---------------------------------------------------------------------------
// Derived traits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traits {
    pub skews_formal: bool,
    pub never_uses_em_dashes: bool,
    pub first_person_heavy: bool,
    pub uses_contractions: bool,
    pub question_heavy: bool,
    /// Too few words for the function-word z-scores to mean much.
    pub short_corpus: bool,
}

impl Traits {
    pub fn derive(inputs: &GuideInputs, limits: &GuideLimits) -> Self {
        Self {
            skews_formal: inputs.vocabulary_tiers.formality != Formality::Low,
            never_uses_em_dashes: !inputs.punctuation.uses_em_dashes,
            first_person_heavy: inputs.voice.first_person_singular.per_1000
                >= limits.first_person_heavy,
            uses_contractions: inputs.voice.contraction_rate >= limits.contraction_habit,
            question_heavy: inputs.sentence.question_percentage() >= limits.question_heavy_pct,
            short_corpus: !inputs.function_words.reliable,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Loads the reports in `analysis_dir`, renders the guide and writes it to
/// `output`. Returns the path written.
pub fn generate(analysis_dir: &Path, output: &Path, ctx: &AnalysisContext) -> Result<PathBuf> {
    let inputs = GuideInputs::load(analysis_dir)?;
    let md = render(&inputs, ctx);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, md).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Wrote style guide for {} to {}", inputs.corpus, output.display());
    Ok(output.to_path_buf())
}

/// Renders the full guide. Identical inputs give identical output.
pub fn render(inputs: &GuideInputs, ctx: &AnalysisContext) -> String {
    let limits = &ctx.thresholds.guide;
    let traits = Traits::derive(inputs, limits);

    let sections = [
        render_header(inputs, traits),
        render_quick_reference(inputs, traits),
        render_vocabulary(inputs, limits),
        render_sentence_rhythm(inputs, limits),
        render_voice(inputs, traits),
        render_punctuation(inputs, traits),
        render_function_words(inputs, traits, limits),
        render_formality(inputs, &ctx.reference, limits),
        render_phrases(inputs, limits),
        render_argument_flow(inputs, limits),
        render_transitions(inputs),
        render_specificity(inputs),
        render_naturalness(inputs),
        render_do_dont(inputs, traits),
        render_footer(inputs),
    ];

    let mut md = String::new();
    for section in sections.iter().filter(|s| !s.is_empty()) {
        md.push_str(section);
        md.push('\n');
    }
    md.truncate(md.trim_end().len());
    md.push('\n');
    md
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn render_header(inputs: &GuideInputs, traits: Traits) -> String {
    let mut md = format!(
        "# Writing Style Guide: {}\n\nDerived from {} words of published writing. \
         Use it to write in this author's voice.\n",
        inputs.corpus, inputs.vocabulary.total_words
    );
    if traits.short_corpus {
        md.push_str(
            "\n> **Note:** the corpus is small, so word-frequency figures below are noisy. \
             Treat them as hints rather than rules.\n",
        );
    }
    md
}

fn render_quick_reference(inputs: &GuideInputs, traits: Traits) -> String {
    let sentence = &inputs.sentence;
    let mut md = String::from("## Quick Reference\n\n");
    md.push_str("| Trait | Value |\n|---|---|\n");
    md.push_str(&format!(
        "| Average sentence length | {:.1} words |\n",
        sentence.length.mean
    ));
    md.push_str(&format!(
        "| Perspective | {} |\n",
        inputs.voice.dominant_perspective.label()
    ));
    md.push_str(&format!(
        "| Contractions | {} |\n",
        yes_no(traits.uses_contractions)
    ));
    md.push_str(&format!(
        "| Em dashes | {} |\n",
        if traits.never_uses_em_dashes { "never" } else { "used" }
    ));
    md.push_str(&format!(
        "| Formality | {:.1} formal words per 1000 |\n",
        inputs.vocabulary_tiers.formality_score
    ));
    md.push_str(&format!(
        "| Questions | {:.1}% of sentences |\n",
        sentence.question_percentage()
    ));
    if let Some(naturalness) = &inputs.naturalness {
        md.push_str(&format!(
            "| Naturalness | {:.0}/100 ({}) |\n",
            naturalness.score,
            naturalness.interpretation.label()
        ));
    }
    md
}

fn render_vocabulary(inputs: &GuideInputs, limits: &GuideLimits) -> String {
    let v = &inputs.vocabulary;
    let mut md = String::from("## Vocabulary\n\n");
    md.push_str(&format!(
        "- Type-token ratio: {:.4} ({} unique of {} words)\n",
        v.type_token_ratio, v.unique_words, v.total_words
    ));
    md.push_str(&format!(
        "- Words used exactly once: {} ({:.1}% of unique words)\n",
        v.hapax_legomena,
        v.hapax_ratio * 100.0
    ));
    md.push_str(&format!(
        "- Average word length: {:.2} characters\n",
        v.average_word_length
    ));

    let content_words: Vec<String> = v
        .top_words
        .iter()
        .take(limits.top_words)
        .map(|w| format!("`{}` ({})", w.item, w.count))
        .collect();
    if !content_words.is_empty() {
        md.push_str(&format!("\n**Most used words:** {}\n", content_words.join(", ")));
    }
    let bigrams: Vec<String> = v
        .top_bigrams
        .iter()
        .take(limits.top_words)
        .map(|b| format!("\"{}\"", b.item))
        .collect();
    if !bigrams.is_empty() {
        md.push_str(&format!("\n**Common pairings:** {}\n", bigrams.join(", ")));
    }
    md
}

fn render_sentence_rhythm(inputs: &GuideInputs, limits: &GuideLimits) -> String {
    let s = &inputs.sentence;
    let mut md = String::from("## Sentence Rhythm\n\n");
    md.push_str(&format!(
        "Sentences average {:.1} words (median {:.1}, spread {:.1}), ranging from {:.0} to {:.0}.\n\n",
        s.length.mean, s.length.median, s.length.std_dev, s.length.min, s.length.max
    ));
    md.push_str("| Length | Share |\n|---|---|\n");
    for bucket in &s.length_distribution {
        md.push_str(&format!("| {} | {:.1}% |\n", bucket.label, bucket.percentage));
    }

    if let Some(burstiness) = &inputs.burstiness {
        md.push_str(&format!(
            "\nRhythm is **{}** (burstiness {:.4}). {} clusters of similar-length sentences, \
             {} abrupt length shifts.\n",
            burstiness.rhythm.label(),
            burstiness.coefficient,
            burstiness.cluster_count,
            burstiness.abrupt_shifts
        ));
    }
    if let Some(paragraph) = &inputs.paragraph {
        md.push_str(&format!(
            "\nParagraphs average {:.1} sentences; {:.0}% are a single sentence.\n",
            paragraph.sentences_per_paragraph.mean,
            paragraph.single_sentence_ratio * 100.0
        ));
    }

    let openers: Vec<String> = s
        .top_openers
        .iter()
        .take(limits.top_openers)
        .map(|o| format!("\"{}\" ({:.1}%)", o.item, o.percentage))
        .collect();
    if !openers.is_empty() {
        md.push_str(&format!("\n**Favourite sentence openers:** {}\n", openers.join(", ")));
    }
    md
}

fn render_voice(inputs: &GuideInputs, traits: Traits) -> String {
    let v = &inputs.voice;
    let mut md = String::from("## Voice\n\n");
    md.push_str(&format!(
        "Written mostly in the {}.\n\n",
        v.dominant_perspective.label()
    ));
    md.push_str("| Pronouns | Per 1000 words |\n|---|---|\n");
    md.push_str(&format!("| I / me / my | {:.2} |\n", v.first_person_singular.per_1000));
    md.push_str(&format!("| we / us / our | {:.2} |\n", v.first_person_plural.per_1000));
    md.push_str(&format!("| you / your | {:.2} |\n", v.second_person.per_1000));
    md.push_str(&format!("| he / she / they | {:.2} |\n", v.third_person.per_1000));

    md.push('\n');
    if traits.first_person_heavy {
        md.push_str("- Speak from personal experience; \"I\" is the default subject.\n");
    }
    if traits.uses_contractions {
        md.push_str(&format!(
            "- Use contractions freely ({:.1} per 1000 words).\n",
            v.contraction_rate
        ));
    } else {
        md.push_str("- Contractions are rare; prefer the full forms.\n");
    }
    md.push_str(&format!(
        "- Hedges: {:.1} per 1000 words. Certainty markers: {:.1} per 1000 words.\n",
        v.hedge_rate, v.certainty_rate
    ));
    let hedges: Vec<String> = v.top_hedges.iter().map(|h| format!("\"{}\"", h.item)).collect();
    if !hedges.is_empty() {
        md.push_str(&format!("- Typical hedges: {}\n", hedges.join(", ")));
    }
    if v.direct_questions > 0 {
        md.push_str(&format!(
            "- Asks the reader directly {} times.\n",
            v.direct_questions
        ));
    }
    md
}

fn render_punctuation(inputs: &GuideInputs, traits: Traits) -> String {
    let p = &inputs.punctuation;
    let mut md = String::from("## Punctuation\n\n");
    md.push_str("| Mark | Per 1000 words |\n|---|---|\n");
    for usage in p.marks.iter().filter(|m| m.count > 0) {
        md.push_str(&format!("| {} | {:.2} |\n", usage.mark.label(), usage.per_1000));
    }
    md.push_str(&format!(
        "\n- {:.2} commas per sentence.\n",
        p.commas_per_sentence
    ));
    if traits.never_uses_em_dashes {
        md.push_str("- **Never use em dashes.** Use commas, parentheses or a new sentence.\n");
    }
    if !p.uses_semicolons {
        md.push_str("- Avoid semicolons.\n");
    }
    if p.rate(Mark::Exclamation) > 1.0 {
        md.push_str("- Exclamation marks are part of the voice; use them sparingly but do use them.\n");
    }
    md
}

fn render_function_words(inputs: &GuideInputs, traits: Traits, limits: &GuideLimits) -> String {
    let f = &inputs.function_words;
    let mut md = String::from("## Function-Word Fingerprint\n\n");
    if traits.short_corpus {
        md.push_str(&format!(
            "_Based on only {} words; these scores are indicative only._\n\n",
            f.total_words
        ));
    }
    if !f.distinctive.is_empty() {
        md.push_str("**Used more than typical English:**\n\n");
        for w in f.distinctive.iter().take(limits.top_words) {
            md.push_str(&format!(
                "- `{}`: {:.2} per 1000 (z = {:.2}, {})\n",
                w.word,
                w.per_1000,
                w.z_score,
                w.distinctiveness.label()
            ));
        }
        md.push('\n');
    }
    if !f.avoided.is_empty() {
        md.push_str("**Used less than typical English:**\n\n");
        for w in f.avoided.iter().take(limits.top_words) {
            md.push_str(&format!(
                "- `{}`: {:.2} per 1000 (z = {:.2}, {})\n",
                w.word,
                w.per_1000,
                w.z_score,
                w.distinctiveness.label()
            ));
        }
        md.push('\n');
    }
    if !f.british_markers.is_empty() {
        let words: Vec<String> = f
            .british_markers
            .iter()
            .map(|m| format!("`{}` ({})", m.word, m.count))
            .collect();
        md.push_str(&format!("British spellings and markers: {}\n\n", words.join(", ")));
    }
    for rec in &f.recommendations {
        md.push_str(&format!("- {rec}\n"));
    }
    md
}

fn render_formality(
    inputs: &GuideInputs,
    reference: &ReferenceData,
    limits: &GuideLimits,
) -> String {
    let t = &inputs.vocabulary_tiers;
    let mut md = String::from("## Formality & Words to Avoid\n\n");
    md.push_str(&format!(
        "Formality score: {:.2} formal words per 1000 ({}).\n\n",
        t.formality_score,
        t.formality.label()
    ));
    if t.slop_hits.is_empty() {
        md.push_str("No AI-cliché vocabulary appears in the corpus. Keep it that way:\n\n");
    } else {
        md.push_str("AI-cliché vocabulary found in the corpus (remove it):\n\n");
    }
    md.push_str("| Never write | Write instead |\n|---|---|\n");
    if t.slop_hits.is_empty() {
        for term in reference.slop_terms.iter().take(limits.top_words) {
            md.push_str(&format!("| {} | {} |\n", term.word, term.replacement));
        }
    } else {
        for hit in &t.slop_hits {
            md.push_str(&format!("| {} ({}x) | {} |\n", hit.word, hit.count, hit.replacement));
        }
    }

    if !t.formal_hits.is_empty() {
        md.push_str("\nFormal words the author does use, with plainer swaps:\n\n");
        for hit in t.formal_hits.iter().take(limits.top_words) {
            md.push_str(&format!(
                "- \"{}\" ({}x) -> \"{}\"\n",
                hit.word, hit.count, hit.replacement
            ));
        }
    }
    let casual: Vec<String> = t
        .casual_markers
        .iter()
        .take(limits.top_words)
        .map(|c| format!("\"{}\"", c.item))
        .collect();
    if !casual.is_empty() {
        md.push_str(&format!("\nCasual markers in regular use: {}\n", casual.join(", ")));
    }
    md
}

fn render_phrases(inputs: &GuideInputs, limits: &GuideLimits) -> String {
    let p = &inputs.phrase_library;
    if p.total_phrases() == 0 {
        return String::new();
    }
    let mut md = String::from("## Signature Phrases\n\n");
    let groups: [(&str, &[PhraseExample]); 5] = [
        ("Paragraph openings", &p.opening_patterns),
        ("Transitions", &p.transitions),
        ("Equipment references", &p.equipment_references),
        ("Caveats", &p.caveats),
        ("Recurring phrases", &p.signature_phrases),
    ];
    for (title, phrases) in groups {
        if phrases.is_empty() {
            continue;
        }
        md.push_str(&format!("### {title}\n\n"));
        for phrase in phrases.iter().take(limits.top_phrases) {
            md.push_str(&format!("- \"{}\" ({}x)", phrase.phrase, phrase.count));
            if let Some(context) = &phrase.context {
                md.push_str(&format!(": _{context}_"));
            }
            md.push('\n');
        }
        md.push('\n');
    }
    md
}

fn render_argument_flow(inputs: &GuideInputs, limits: &GuideLimits) -> String {
    let Some(flow) = &inputs.argument_flow else {
        return String::new();
    };
    let mut md = String::from("## Argument Structure\n\n");
    md.push_str(&format!(
        "{} of {} paragraphs make a recognisable move (confidence: {}).\n\n",
        flow.classified_paragraphs,
        flow.total_paragraphs,
        flow.overall_confidence.label()
    ));
    md.push_str("| Move | Share | Confidence |\n|---|---|---|\n");
    for m in flow.moves.iter().filter(|m| m.count > 0) {
        md.push_str(&format!(
            "| {} | {:.1}% | {} |\n",
            m.argument_move.label(),
            m.percentage,
            m.confidence.label()
        ));
    }
    if let Some(opening) = flow.article_openings.first() {
        md.push_str(&format!(
            "\nArticles usually open with **{}**",
            opening.argument_move.label()
        ));
        match flow.article_closings.first() {
            Some(closing) => md.push_str(&format!(
                " and close with **{}**.\n",
                closing.argument_move.label()
            )),
            None => md.push_str(".\n"),
        }
    }
    let sequences: Vec<String> = flow
        .sequences
        .iter()
        .filter(|s| s.from != ArgumentMove::Exposition || s.to != ArgumentMove::Exposition)
        .take(limits.top_sequences)
        .map(|s| format!("{} -> {} ({})", s.from.label(), s.to.label(), s.count))
        .collect();
    if !sequences.is_empty() {
        md.push_str("\nCommon sequences:\n\n");
        for s in sequences {
            md.push_str(&format!("- {s}\n"));
        }
    }
    if let Some(example) = flow
        .moves
        .iter()
        .find(|m| m.argument_move == ArgumentMove::Warning)
        .and_then(|m| m.examples.first())
    {
        md.push_str(&format!("\nExample warning:\n\n> {}\n", example.excerpt));
    }
    md
}

fn render_transitions(inputs: &GuideInputs) -> String {
    let Some(t) = &inputs.transitions else {
        return String::new();
    };
    let mut md = String::from("## Paragraph Transitions\n\n");
    md.push_str(&format!(
        "{:.0}% of paragraphs signal how they connect to the previous one.\n\n",
        t.explicit_ratio * 100.0
    ));
    md.push_str("| Transition | Share |\n|---|---|\n");
    for stats in t.transitions.iter().filter(|s| s.count > 0) {
        md.push_str(&format!("| {} | {:.1}% |\n", stats.transition.label(), stats.percentage));
    }
    let words: Vec<String> = t
        .top_opening_words
        .iter()
        .map(|w| format!("\"{}\"", w.item))
        .collect();
    if !words.is_empty() {
        md.push_str(&format!("\nParagraphs often start with: {}\n", words.join(", ")));
    }
    md
}

fn render_specificity(inputs: &GuideInputs) -> String {
    let Some(s) = &inputs.specificity else {
        return String::new();
    };
    let mut md = String::from("## Specificity\n\n");
    md.push_str(&format!(
        "Specificity score: {:.1}% of detail markers are concrete.\n\n",
        s.specificity_score
    ));
    for category in [
        SpecificityCategory::Possessive,
        SpecificityCategory::Measurement,
        SpecificityCategory::ModelNumber,
        SpecificityCategory::Price,
        SpecificityCategory::VagueQuantifier,
    ] {
        let Some(stats) = s.category(category).filter(|c| c.count > 0) else {
            continue;
        };
        let phrases: Vec<String> = stats
            .top_phrases
            .iter()
            .take(5)
            .map(|p| format!("\"{}\"", p.item))
            .collect();
        md.push_str(&format!(
            "- {}: {:.2} per 1000 words, e.g. {}\n",
            category.label(),
            stats.per_1000,
            phrases.join(", ")
        ));
    }
    if s.possessive_share >= 0.5 {
        md.push_str("\nName your own things (\"my rig\") rather than generic ones (\"the setup\").\n");
    }
    md
}

fn render_naturalness(inputs: &GuideInputs) -> String {
    let Some(n) = &inputs.naturalness else {
        return String::new();
    };
    let mut md = String::from("## Naturalness Checklist\n\n");
    md.push_str(&format!(
        "The corpus scores {:.0}/100 ({}). Before publishing, check:\n\n",
        n.score,
        n.interpretation.label()
    ));
    md.push_str("- [ ] Sentence lengths vary; mix short punches with long explanations.\n");
    md.push_str("- [ ] Some paragraphs are a single sentence; some run long.\n");
    md.push_str("- [ ] No more than two sentences in a row start with \"I\".\n");
    md.push_str("- [ ] No three sentences in a row start with the same word.\n");
    if !n.issues.is_empty() {
        md.push_str("\nIssues seen in the corpus itself:\n\n");
        for issue in &n.issues {
            md.push_str(&format!("- {issue}\n"));
        }
    }
    md
}

fn render_do_dont(inputs: &GuideInputs, traits: Traits) -> String {
    let mut dos = Vec::new();
    let mut donts = Vec::new();

    if traits.uses_contractions {
        dos.push("Use contractions (I'm, don't, it's).".to_string());
    }
    if traits.first_person_heavy {
        dos.push("Write from first-hand experience.".to_string());
    }
    if traits.question_heavy {
        dos.push("Ask the reader questions.".to_string());
    }
    if let Some(opener) = inputs.phrase_library.opening_patterns.first() {
        dos.push(format!("Open paragraphs the way the author does, e.g. \"{}...\"", opener.phrase));
    }
    dos.push(format!(
        "Keep sentences around {:.0} words on average, but vary them.",
        inputs.sentence.length.mean
    ));

    if traits.never_uses_em_dashes {
        donts.push("Use em dashes.".to_string());
    }
    if !traits.skews_formal {
        donts.push("Reach for formal connectors (therefore, thus, hence).".to_string());
    }
    for hit in &inputs.vocabulary_tiers.slop_hits {
        donts.push(format!("Write \"{}\".", hit.word));
    }
    donts.push("Use AI-cliché vocabulary (delve, leverage, tapestry).".to_string());

    let mut md = String::from("## Do / Don't\n\n**Do:**\n\n");
    for item in &dos {
        md.push_str(&format!("- {item}\n"));
    }
    md.push_str("\n**Don't:**\n\n");
    for item in &donts {
        md.push_str(&format!("- {item}\n"));
    }
    md
}

fn render_footer(inputs: &GuideInputs) -> String {
    format!(
        "---\n\n_Generated from corpus `{}` by voiceprint {}._\n",
        inputs.corpus, GENERATOR_VERSION
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
