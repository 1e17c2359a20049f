use std::fs;
use std::path::Path;

use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use voiceprint::analyzers::specificity::{self, SpecificityCategory};
use voiceprint::analyzers::vocabulary::VocabularyReport;
use voiceprint::analyzers::{naturalness, vocabulary_tiers};
use voiceprint::guide::{self, GuideInputs};
use voiceprint::report::ReportEnvelope;
use voiceprint::{
    AnalysisContext, AnalyzerKind, AnyReport, Corpus, Error, Pipeline, Thresholds, SCHEMA_VERSION,
};

const GPU_ARTICLE: &str = indoc! {"
    # Why my 3090 runs hot

    I own a 3090. My rig runs hot. The thermal pads help. I wish I'd known sooner.

    Don't trust the stock pads. In my case they lasted 6 months, so swap them for 2mm pads instead.

    I tested three brands over 2 weeks and measured a 12C drop with the Gelid pads. That's a big deal for $20.

    But the fans still ramp up under load. Honestly, it's loud. Maybe that's fine for you?

    Bottom line: the pad swap is worth it. I'd recommend it to anyone with a Founders Edition.
"};

const PSU_ARTICLE: &str = indoc! {"
    # Picking a power supply

    Power supplies are boring until they fail.

    My old rig died because of a cheap unit. I learned the hard way that the cheap unit is never cheap.

    Compared to the 650W model, the 850W unit is quieter and only $30 more. So I went with the 850W.

    That said, you probably don't need 1000W. Most builds draw under 500W from the wall.

    In short, buy a good 850W unit and skip the bargain bin.
"};

fn write_corpus(dir: &Path) {
    fs::write(dir.join("01-gpu.md"), GPU_ARTICLE).unwrap();
    fs::write(dir.join("02-psu.md"), PSU_ARTICLE).unwrap();
    fs::write(dir.join("notes.json"), "{}").unwrap();
}

fn analyzed_dir() -> (TempDir, TempDir) {
    let corpus_dir = TempDir::new().unwrap();
    write_corpus(corpus_dir.path());
    let out_dir = TempDir::new().unwrap();
    let corpus = Corpus::from_dir(corpus_dir.path(), "hardware-blog")
        .unwrap()
        .with_sitemap("https://example.com/sitemap.xml");
    Pipeline::new(AnalysisContext::default())
        .run(&corpus, &AnalyzerKind::ALL, out_dir.path())
        .unwrap();
    (corpus_dir, out_dir)
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn casual_hardware_text_has_no_slop_and_specific_detail() {
    let text = "I own a 3090. My rig runs hot. The thermal pads help. I wish I'd known sooner.";
    let ctx = AnalysisContext::default();

    let tiers = vocabulary_tiers::analyze(text, &ctx);
    assert_eq!(tiers.slop_total, 0, "slop hits: {:?}", tiers.slop_hits);
    assert!(tiers.slop_hits.is_empty());
    assert_eq!(tiers.formal_verb_hits, 0, "formal hits: {:?}", tiers.formal_hits);

    let detail = specificity::analyze(text, &ctx);
    let possessive = detail.category(SpecificityCategory::Possessive).unwrap();
    assert!(possessive.count >= 1);
    assert!(
        possessive.top_phrases.iter().any(|p| p.item == "my rig"),
        "possessives: {:?}",
        possessive.top_phrases
    );
    let generic = detail.category(SpecificityCategory::GenericArticle).unwrap();
    assert!(generic.count >= 1);
    assert!(
        generic.top_phrases.iter().any(|p| p.item == "the thermal"),
        "generic articles: {:?}",
        generic.top_phrases
    );
}

#[test]
fn reports_round_trip_through_json() {
    let corpus = Corpus::new(
        "round-trip",
        vec![
            voiceprint::Article::new("GPU", GPU_ARTICLE),
            voiceprint::Article::new("PSU", PSU_ARTICLE),
        ],
    );
    let reports = Pipeline::new(AnalysisContext::default()).analyze(&corpus, &AnalyzerKind::ALL);
    assert_eq!(reports.len(), AnalyzerKind::ALL.len());

    for report in &reports {
        let json = serde_json::to_string(report).unwrap();
        let parsed = match report {
            AnyReport::Vocabulary(_) => AnyReport::Vocabulary(serde_json::from_str(&json).unwrap()),
            AnyReport::Sentence(_) => AnyReport::Sentence(serde_json::from_str(&json).unwrap()),
            AnyReport::Voice(_) => AnyReport::Voice(serde_json::from_str(&json).unwrap()),
            AnyReport::Punctuation(_) => {
                AnyReport::Punctuation(serde_json::from_str(&json).unwrap())
            }
            AnyReport::Paragraph(_) => AnyReport::Paragraph(serde_json::from_str(&json).unwrap()),
            AnyReport::FunctionWords(_) => {
                AnyReport::FunctionWords(serde_json::from_str(&json).unwrap())
            }
            AnyReport::Naturalness(_) => {
                AnyReport::Naturalness(serde_json::from_str(&json).unwrap())
            }
            AnyReport::Burstiness(_) => {
                AnyReport::Burstiness(serde_json::from_str(&json).unwrap())
            }
            AnyReport::ArgumentFlow(_) => {
                AnyReport::ArgumentFlow(serde_json::from_str(&json).unwrap())
            }
            AnyReport::Transitions(_) => {
                AnyReport::Transitions(serde_json::from_str(&json).unwrap())
            }
            AnyReport::Specificity(_) => {
                AnyReport::Specificity(serde_json::from_str(&json).unwrap())
            }
            AnyReport::VocabularyTiers(_) => {
                AnyReport::VocabularyTiers(serde_json::from_str(&json).unwrap())
            }
            AnyReport::PhraseLibrary(_) => {
                AnyReport::PhraseLibrary(serde_json::from_str(&json).unwrap())
            }
        };
        assert_eq!(&parsed, report, "{} did not round-trip", report.kind());
    }
}

#[test]
fn empty_text_degrades_to_neutral_values() {
    let ctx = AnalysisContext::default();
    for kind in AnalyzerKind::ALL {
        let report = kind.analyze("", &ctx);
        assert_eq!(report.kind(), kind);
        serde_json::to_string(&report).unwrap_or_else(|e| panic!("{kind}: {e}"));
    }
    let score = naturalness::analyze("   \n\n  ", &ctx);
    assert_eq!(score.sentence_variation.points, 0.0);
    assert_eq!(score.score, 50.0);
}

// ---------------------------------------------------------------------------
// Corpus and pipeline
// ---------------------------------------------------------------------------

#[test]
fn corpus_loads_sorted_markdown_with_titles() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let corpus = Corpus::from_dir(dir.path(), "hardware-blog").unwrap();

    let titles: Vec<&str> = corpus.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Why my 3090 runs hot", "Picking a power supply"]);
    assert_eq!(corpus.article_count(), 2);
    assert!(corpus.word_count() > 100);
    assert_eq!(
        corpus.combined_text().matches(voiceprint::text::ARTICLE_SEPARATOR).count(),
        1
    );
}

#[test]
fn empty_corpus_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.json"), "{}").unwrap();
    let err = Corpus::from_dir(dir.path(), "nothing").unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus(_)), "got {err}");
}

#[test]
fn pipeline_writes_one_envelope_per_analyzer() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    let out = out_dir.path();

    assert!(out.join("corpus.json").is_file());
    for kind in AnalyzerKind::ALL {
        assert!(out.join(kind.file_name()).is_file(), "missing {}", kind.file_name());
    }
    assert!(out.join("function-words.json").is_file());
    assert!(out.join("paragraph-transitions.json").is_file());

    let envelope: ReportEnvelope<VocabularyReport> =
        ReportEnvelope::read(&out.join("vocabulary.json")).unwrap();
    assert_eq!(envelope.schema_version, SCHEMA_VERSION);
    assert_eq!(envelope.analyzer, "vocabulary");
    assert_eq!(envelope.corpus, "hardware-blog");
    assert!(envelope.report.total_words > 100);

    let metadata: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("corpus.json")).unwrap()).unwrap();
    assert_eq!(metadata["sitemap_url"], "https://example.com/sitemap.xml");
    assert_eq!(metadata["article_count"], 2);
}

#[test]
fn pipeline_runs_only_selected_analyzers() {
    let corpus_dir = TempDir::new().unwrap();
    write_corpus(corpus_dir.path());
    let out_dir = TempDir::new().unwrap();
    let corpus = Corpus::from_dir(corpus_dir.path(), "subset").unwrap();

    let selection = [AnalyzerKind::Voice, AnalyzerKind::Sentence, AnalyzerKind::Voice];
    let summary = Pipeline::new(AnalysisContext::default())
        .run(&corpus, &selection, out_dir.path())
        .unwrap();

    let names: Vec<String> = summary
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["corpus.json", "sentence.json", "voice.json"]);
}

#[test]
fn analyzer_names_parse() {
    assert_eq!(
        "function-words".parse::<AnalyzerKind>().unwrap(),
        AnalyzerKind::FunctionWords
    );
    assert_eq!(
        "vocabulary_tiers".parse::<AnalyzerKind>().unwrap(),
        AnalyzerKind::VocabularyTiers
    );
    assert_eq!(
        "paragraph-transitions.json".parse::<AnalyzerKind>().unwrap(),
        AnalyzerKind::Transitions
    );
    assert!(matches!(
        "sentiment".parse::<AnalyzerKind>(),
        Err(Error::UnknownAnalyzer(_))
    ));
}

// ---------------------------------------------------------------------------
// Guide
// ---------------------------------------------------------------------------

#[test]
fn guide_renders_sections_in_order() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    let output = out_dir.path().join("guide").join("style.md");
    guide::generate(out_dir.path(), &output, &AnalysisContext::default()).unwrap();
    let md = fs::read_to_string(&output).unwrap();

    assert!(md.starts_with("# Writing Style Guide: hardware-blog"));
    let headings = [
        "## Quick Reference",
        "## Vocabulary",
        "## Sentence Rhythm",
        "## Voice",
        "## Punctuation",
        "## Function-Word Fingerprint",
        "## Formality & Words to Avoid",
        "## Argument Structure",
        "## Paragraph Transitions",
        "## Specificity",
        "## Naturalness Checklist",
        "## Do / Don't",
    ];
    let mut last = 0;
    for heading in headings {
        let pos = md
            .find(heading)
            .unwrap_or_else(|| panic!("missing section {heading}"));
        assert!(pos >= last, "{heading} is out of order");
        last = pos;
    }
    assert!(md.contains("Never use em dashes"), "corpus has no em dashes");
    for raw in ["(High)", "(Moderate)", "(Low)", "| High |", "| Medium |", "| Low |"] {
        assert!(!md.contains(raw), "enum rendered with Debug: {raw}");
    }
    assert!(md.contains("formal words per 1000 (") && md.contains("(confidence: "));
    assert!(md.trim_end().ends_with(&format!(
        "_Generated from corpus `hardware-blog` by voiceprint {}._",
        guide::GENERATOR_VERSION
    )));
}

#[test]
fn guide_is_deterministic() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    let ctx = AnalysisContext::default();
    let inputs = GuideInputs::load(out_dir.path()).unwrap();
    assert_eq!(guide::render(&inputs, &ctx), guide::render(&inputs, &ctx));
}

#[test]
fn optional_reports_only_drop_their_sections() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    fs::remove_file(out_dir.path().join("argument-flow.json")).unwrap();
    fs::remove_file(out_dir.path().join("naturalness.json")).unwrap();

    let inputs = GuideInputs::load(out_dir.path()).unwrap();
    assert!(inputs.argument_flow.is_none());
    let md = guide::render(&inputs, &AnalysisContext::default());
    assert!(!md.contains("## Argument Structure"));
    assert!(!md.contains("## Naturalness Checklist"));
    assert!(md.contains("## Paragraph Transitions"));
}

#[test]
fn missing_required_report_fails_without_output() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    fs::remove_file(out_dir.path().join("phrase-library.json")).unwrap();
    let output = out_dir.path().join("style-guide.md");

    let err = guide::generate(out_dir.path(), &output, &AnalysisContext::default()).unwrap_err();
    match err {
        Error::MissingReport { analyzer, .. } => assert_eq!(analyzer, "phrase-library"),
        other => panic!("expected MissingReport, got {other}"),
    }
    assert!(!output.exists(), "no partial guide should be written");
}

#[test]
fn schema_version_mismatch_is_rejected() {
    let (_corpus_dir, out_dir) = analyzed_dir();
    let path = out_dir.path().join("voice.json");
    let mut envelope: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    envelope["schema_version"] = serde_json::json!(SCHEMA_VERSION + 1);
    fs::write(&path, envelope.to_string()).unwrap();

    let err = GuideInputs::load(out_dir.path()).unwrap_err();
    match err {
        Error::SchemaMismatch {
            found, expected, ..
        } => {
            assert_eq!(found, SCHEMA_VERSION + 1);
            assert_eq!(expected, SCHEMA_VERSION);
        }
        other => panic!("expected SchemaMismatch, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn thresholds_override_only_named_fields() {
    let toml = indoc! {"
        [burstiness]
        uniform_below = -0.25

        [guide]
        top_phrases = 5
    "};
    let thresholds = Thresholds::from_toml(toml).unwrap();
    assert_eq!(thresholds.burstiness.uniform_below, -0.25);
    assert_eq!(thresholds.burstiness.natural_above, 0.2);
    assert_eq!(thresholds.guide.top_phrases, 5);
    assert_eq!(thresholds.guide.top_words, 10);
    assert_eq!(thresholds.naturalness, Thresholds::default().naturalness);
}

#[test]
fn bad_config_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("thresholds.toml");
    fs::write(&path, "[burstiness]\nuniform_below = \"low\"\n").unwrap();
    let err = Thresholds::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("thresholds.toml"));
}
