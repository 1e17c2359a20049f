use pretty_assertions::assert_eq;

use voiceprint::analyzers::argument_flow::{self, ArgumentMove, Confidence};
use voiceprint::analyzers::burstiness::{self, Rhythm};
use voiceprint::analyzers::function_words::{self, Distinctiveness};
use voiceprint::analyzers::naturalness::{self, Interpretation};
use voiceprint::analyzers::paragraph::{self, OpeningType};
use voiceprint::analyzers::phrase_library;
use voiceprint::analyzers::punctuation;
use voiceprint::analyzers::sentence;
use voiceprint::analyzers::specificity::{self, SpecificityCategory};
use voiceprint::analyzers::transitions::{self, TransitionType};
use voiceprint::analyzers::vocabulary;
use voiceprint::analyzers::vocabulary_tiers::{self, Formality};
use voiceprint::analyzers::voice::{self, Perspective};
use voiceprint::reference::{FunctionWordCategory, FunctionWordEntry, ReferenceData};
use voiceprint::stats;
use voiceprint::text::ARTICLE_SEPARATOR;
use voiceprint::{AnalysisContext, Thresholds};

const OPENERS: &[&str] = &["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];

/// A sentence of exactly `words` words opening with a distinct word.
fn sentence_of(index: usize, words: usize) -> String {
    let mut tokens = vec![OPENERS[index % OPENERS.len()].to_string()];
    tokens.extend((1..words).map(|i| format!("w{i}")));
    format!("{}.", tokens.join(" "))
}

fn text_with_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &n)| sentence_of(i, n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn single_word_reference(word: &'static str, mean: f64, std_dev: f64) -> ReferenceData {
    ReferenceData::new(
        vec![FunctionWordEntry {
            word,
            category: FunctionWordCategory::Preposition,
            tier: 1,
            british_marker: true,
            mean_per_1000: mean,
            std_dev_per_1000: std_dev,
        }],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}

fn repeated(word: &str, times: usize) -> String {
    vec![word; times].join(" ")
}

// ---------------------------------------------------------------------------
// Function words
// ---------------------------------------------------------------------------

#[test]
fn z_score_cutoffs_classify_at_boundaries() {
    let (mean, sd) = (10.0, 2.0);
    let just_over = stats::z_score(mean + 2.01 * sd, mean, sd);
    let just_under = stats::z_score(mean + 1.99 * sd, mean, sd);
    assert_eq!(
        Distinctiveness::from_z_score(just_over),
        Distinctiveness::HighlyDistinctive
    );
    assert_eq!(
        Distinctiveness::from_z_score(just_under),
        Distinctiveness::Distinctive
    );
    assert_eq!(Distinctiveness::from_z_score(-2.01), Distinctiveness::HighlyAvoided);
    assert_eq!(Distinctiveness::from_z_score(-1.5), Distinctiveness::Avoided);
    assert_eq!(Distinctiveness::from_z_score(0.99), Distinctiveness::Normal);
}

#[test]
fn function_word_frequency_drives_classification() {
    let reference = single_word_reference("upon", 0.0, 100.0);
    let ctx = AnalysisContext::new(Thresholds::default(), reference);

    // 201 of 1000 words is 201 per 1000, z = 2.01.
    let text = format!("{} {}.", repeated("upon", 201), repeated("stone", 799));
    let report = function_words::analyze(&text, &ctx);
    assert_eq!(report.total_words, 1000);
    assert_eq!(report.scores[0].count, 201);
    assert_eq!(
        report.scores[0].distinctiveness,
        Distinctiveness::HighlyDistinctive
    );
    assert_eq!(report.distinctive.len(), 1);
    assert_eq!(report.british_markers[0].word, "upon");
    assert!(!report.reliable, "1000 words is below the reliability floor");
    assert!(
        report.recommendations[0].contains("only 1000 words"),
        "short corpus should be flagged, got {:?}",
        report.recommendations
    );

    let text = format!("{} {}.", repeated("upon", 199), repeated("stone", 801));
    let report = function_words::analyze(&text, &ctx);
    assert_eq!(report.scores[0].distinctiveness, Distinctiveness::Distinctive);
}

#[test]
fn zero_reference_spread_is_always_normal() {
    let reference = single_word_reference("whilst", 1.0, 0.0);
    let ctx = AnalysisContext::new(Thresholds::default(), reference);
    let report = function_words::analyze("whilst whilst whilst whilst.", &ctx);
    assert_eq!(report.z_scores["whilst"], 0.0);
    assert_eq!(report.scores[0].distinctiveness, Distinctiveness::Normal);
}

// ---------------------------------------------------------------------------
// Naturalness
// ---------------------------------------------------------------------------

#[test]
fn identical_sentence_lengths_score_low_on_variation() {
    let text = text_with_lengths(&[8, 8, 8, 8, 8]);
    let report = naturalness::analyze(&text, &AnalysisContext::default());
    assert_eq!(report.sentence_variation.coefficient_of_variation, 0.0);
    assert!(
        report.sentence_variation.points <= 5.0,
        "uniform lengths should score low, got {}",
        report.sentence_variation.points
    );
}

#[test]
fn varied_sentence_lengths_score_near_cap() {
    let text = text_with_lengths(&[3, 35, 5, 40, 4]);
    let report = naturalness::analyze(&text, &AnalysisContext::default());
    assert!(
        report.sentence_variation.coefficient_of_variation > 0.9,
        "cv was {}",
        report.sentence_variation.coefficient_of_variation
    );
    assert!(
        report.sentence_variation.points >= 20.0,
        "high variation should score near the cap, got {}",
        report.sentence_variation.points
    );
}

#[test]
fn runs_of_i_openers_are_penalized() {
    let text = "I went out. I came back. I sat down. I slept.";
    let report = naturalness::analyze(text, &AnalysisContext::default());
    assert_eq!(report.first_person.longest_i_run, 4);
    assert_eq!(report.first_person.points, 0.0);
    assert_eq!(report.repetition.runs.len(), 1);
    assert_eq!(report.repetition.runs[0].word, "i");
    assert_eq!(report.repetition.runs[0].length, 4);
    assert_eq!(report.repetition.points, 19.0);
    assert!(!report.issues.is_empty());
}

#[test]
fn empty_text_is_neutral() {
    let report = naturalness::analyze("", &AnalysisContext::default());
    assert_eq!(report.score, 50.0);
    assert_eq!(report.interpretation, Interpretation::SomewhatMechanical);
    assert!(report.issues.is_empty());
}

#[test]
fn interpretation_cutoffs_are_inclusive() {
    let cutoffs = Thresholds::default().naturalness;
    let cases = [
        (85.0, Interpretation::VeryNatural),
        (84.99, Interpretation::Natural),
        (65.0, Interpretation::Natural),
        (64.99, Interpretation::SomewhatMechanical),
        (45.0, Interpretation::SomewhatMechanical),
        (44.99, Interpretation::Mechanical),
    ];
    for (score, expected) in cases {
        assert_eq!(Interpretation::from_score(score, &cutoffs), expected, "score {score}");
    }
}

#[test]
fn single_and_long_paragraphs_earn_asymmetry_bonus() {
    let text = format!("{}\n\n{}", sentence_of(0, 3), text_with_lengths(&[4, 4, 4, 4, 4]));
    let report = naturalness::analyze(&text, &AnalysisContext::default());
    let asymmetry = &report.paragraph_asymmetry;
    assert!(asymmetry.has_single_sentence && asymmetry.has_long);
    // cv = 2/3 gives 10 points, plus the bonus
    assert_eq!(asymmetry.points, 20.0);
    assert!(!report.issues.iter().any(|i| i.starts_with("Paragraphs are too even")));
}

#[test]
fn four_sentence_paragraph_is_not_long() {
    let text = format!("{}\n\n{}", sentence_of(0, 3), text_with_lengths(&[4, 4, 4, 4]));
    let report = naturalness::analyze(&text, &AnalysisContext::default());
    let asymmetry = &report.paragraph_asymmetry;
    assert!(asymmetry.has_single_sentence);
    assert!(!asymmetry.has_long, "4 sentences is below the long-paragraph cutoff");
    assert_eq!(asymmetry.points, 9.0);
    assert!(report.issues.iter().any(|i| i.starts_with("Paragraphs are too even")));
}

// ---------------------------------------------------------------------------
// Burstiness
// ---------------------------------------------------------------------------

#[test]
fn uniform_lengths_are_flagged() {
    let text = text_with_lengths(&[8, 8, 8, 8, 8, 8]);
    let report = burstiness::analyze(&text, &AnalysisContext::default());
    assert_eq!(report.coefficient, -1.0);
    assert_eq!(report.rhythm, Rhythm::Uniform);
    assert_eq!(report.cluster_count, 1);
    assert_eq!(report.clusters[0].size, 6);
    assert_eq!(report.abrupt_shifts, 0);
}

#[test]
fn long_outlier_after_short_run_is_bursty() {
    let text = text_with_lengths(&[2, 2, 2, 2, 2, 60]);
    let report = burstiness::analyze(&text, &AnalysisContext::default());
    assert_eq!(report.rhythm, Rhythm::Natural, "coefficient {}", report.coefficient);
    assert_eq!(report.cluster_count, 1);
    assert_eq!(report.clusters[0].size, 5);
    assert_eq!(report.abrupt_shifts, 1);
}

// ---------------------------------------------------------------------------
// Pattern classifiers
// ---------------------------------------------------------------------------

#[test]
fn warning_outranks_personal_experience() {
    let (kind, _) = argument_flow::classify("I never overclock my GPU.");
    assert_eq!(kind, ArgumentMove::Warning);
}

#[test]
fn warning_with_example_and_advice_is_strong() {
    let (kind, strong) = argument_flow::classify(
        "Don't buy the cheap one. In my case it died after 3 weeks, so try the 750W unit instead.",
    );
    assert_eq!(kind, ArgumentMove::Warning);
    assert!(strong, "trigger plus example plus advice should be strong");

    let (kind, strong) = argument_flow::classify("Never trust marketing copy.");
    assert_eq!(kind, ArgumentMove::Warning);
    assert!(!strong, "bare trigger should be weak");
}

#[test]
fn evidence_outranks_personal_experience() {
    let (kind, strong) = argument_flow::classify("I tested it for 3 hours and measured 72C.");
    assert_eq!(kind, ArgumentMove::Evidence);
    assert!(strong);
}

#[test]
fn plain_statement_is_exposition() {
    assert_eq!(
        argument_flow::classify("The case has two fans."),
        (ArgumentMove::Exposition, false)
    );
}

#[test]
fn argument_flow_tracks_article_openings_and_sequences() {
    let article = "Why bother with water cooling?\n\n\
                   I tested three coolers for 2 weeks and measured the results.\n\n\
                   Don't skimp on the pump. For example, mine failed at 3 months, so buy the better one instead.";
    let text = format!("{article}{ARTICLE_SEPARATOR}{article}");
    let report = argument_flow::analyze(&text, &AnalysisContext::default());

    assert_eq!(report.total_paragraphs, 6);
    assert_eq!(report.exposition_paragraphs, 0);
    assert_eq!(report.article_openings[0].argument_move, ArgumentMove::QuestionHook);
    assert_eq!(report.article_openings[0].count, 2);
    assert_eq!(report.article_closings[0].argument_move, ArgumentMove::Warning);
    // Sequences never cross article boundaries.
    assert_eq!(report.sequences.len(), 2);
    assert!(report.sequences.iter().all(|s| s.count == 2));
    let warning = report
        .moves
        .iter()
        .find(|m| m.argument_move == ArgumentMove::Warning)
        .unwrap();
    assert_eq!(warning.count, 2);
    assert_eq!(warning.strong, 2);
    assert_eq!(warning.examples[0].position, 2);
}

#[test]
fn transition_priority_is_first_match() {
    assert_eq!(transitions::classify("But I tried it anyway."), TransitionType::Contrast);
    assert_eq!(transitions::classify("So I bought it."), TransitionType::Causal);
    assert_eq!(transitions::classify("However, is that fair?"), TransitionType::Contrast);
    assert_eq!(transitions::classify("Why does this matter?"), TransitionType::Question);
    assert_eq!(transitions::classify("I bought it anyway."), TransitionType::Personal);
    assert_eq!(transitions::classify("This changes things."), TransitionType::Reference);
    assert_eq!(transitions::classify("The fan spun up."), TransitionType::Abrupt);
}

#[test]
fn first_paragraph_of_each_article_has_no_transition() {
    let article =
        "Intro paragraph here.\n\nBut this one differs.\n\nSo we moved on.\n\nThe end came.";
    let text = format!("{article}{ARTICLE_SEPARATOR}{article}");
    let report = transitions::analyze(&text, &AnalysisContext::default());
    assert_eq!(report.total_transitions, 6);
    assert_eq!(report.share(TransitionType::Contrast), 33.33);
    assert_eq!(report.share(TransitionType::Abrupt), 33.33);
    assert_eq!(report.explicit_ratio, 0.6667);
}

#[test]
fn confidence_bands_are_inclusive() {
    let bands = Thresholds::default().argument_flow;
    assert_eq!(Confidence::from_ratio(0.7, &bands), Confidence::High);
    assert_eq!(Confidence::from_ratio(0.6999, &bands), Confidence::Medium);
    assert_eq!(Confidence::from_ratio(0.4, &bands), Confidence::Medium);
    assert_eq!(Confidence::from_ratio(0.3999, &bands), Confidence::Low);
}

#[test]
fn confidence_uses_unrounded_strong_ratio() {
    let text = "We tested the card for 3 days.\n\n\
                We measured 40 watts at the wall.\n\n\
                We measured the noise by ear.";
    let mut ctx = AnalysisContext::default();
    // 2/3 rounds to 0.6667, which would clear this band
    ctx.thresholds.argument_flow.high_confidence = 0.66668;

    let report = argument_flow::analyze(text, &ctx);
    let evidence = report
        .moves
        .iter()
        .find(|m| m.argument_move == ArgumentMove::Evidence)
        .unwrap();
    assert_eq!((evidence.count, evidence.strong), (3, 2));
    assert_eq!(evidence.confidence, Confidence::Medium);
    assert_eq!(report.strong_ratio, 0.6667);
    assert_eq!(report.overall_confidence, Confidence::Medium);
}

// ---------------------------------------------------------------------------
// Vocabulary tiers
// ---------------------------------------------------------------------------

#[test]
fn slop_terms_get_replacements() {
    let text = "We leverage a robust tapestry of tools. Moreover, the setup is seamless.";
    let report = vocabulary_tiers::analyze(text, &AnalysisContext::default());
    assert_eq!(report.slop_total, 5);
    let leverage = report
        .slop_hits
        .iter()
        .find(|h| h.word == "leverage")
        .expect("leverage should be flagged");
    assert_eq!(leverage.replacement, "use");
    assert!(
        report
            .recommendations
            .iter()
            .any(|r| r.contains("Never use 'leverage'")),
        "recommendations: {:?}",
        report.recommendations
    );
}

#[test]
fn formal_words_raise_formality() {
    let text = "Therefore we utilize the tool in order to obtain results.";
    let report = vocabulary_tiers::analyze(text, &AnalysisContext::default());
    assert_eq!(report.formal_verb_hits, 2);
    assert_eq!(report.formal_connector_hits, 1);
    assert_eq!(report.formality_score, 400.0);
    assert_eq!(report.formality, Formality::High);
}

// ---------------------------------------------------------------------------
// Phrases
// ---------------------------------------------------------------------------

#[test]
fn repeated_phrase_suppresses_its_sub_grams() {
    let text =
        "Sadly the stock cooler is loud at idle. Worse, the stock cooler is loud under load.";
    let report = phrase_library::analyze(text, &AnalysisContext::default());
    let phrases: Vec<&str> = report
        .signature_phrases
        .iter()
        .map(|p| p.phrase.as_str())
        .collect();
    assert_eq!(phrases, vec!["the stock cooler is loud"]);
    assert_eq!(report.signature_phrases[0].count, 2);
}

#[test]
fn equipment_and_caveats_are_collected() {
    let text =
        "My old rig still runs. That said, our new rig is faster.\n\nTo be fair, my rig is older.";
    let report = phrase_library::analyze(text, &AnalysisContext::default());
    let equipment: Vec<&str> = report
        .equipment_references
        .iter()
        .map(|p| p.phrase.as_str())
        .collect();
    assert!(equipment.contains(&"my old rig"), "equipment: {equipment:?}");
    assert!(equipment.contains(&"my rig"), "equipment: {equipment:?}");
    assert!(report.caveats.iter().any(|c| c.phrase == "that said"));
    assert!(report.caveats.iter().any(|c| c.phrase == "to be fair"));
    assert!(report.caveats.iter().all(|c| c.context.is_some()));
}

// ---------------------------------------------------------------------------
// Surface analyzers
// ---------------------------------------------------------------------------

#[test]
fn sentence_types_follow_terminal_mark() {
    let report = sentence::analyze("Really? Yes! Okay then.", &AnalysisContext::default());
    assert_eq!(report.total_sentences, 3);
    assert_eq!(report.question_percentage(), 33.33);
    assert_eq!(report.exclamation_percentage(), 33.33);
}

#[test]
fn first_person_dominates_voice() {
    let report = voice::analyze(
        "I think I like it. My setup is fine and I'm happy.",
        &AnalysisContext::default(),
    );
    assert_eq!(report.dominant_perspective, Perspective::FirstPersonSingular);
    assert_eq!(report.first_person_singular.count, 4);
    assert_eq!(report.hedges, 1);
    assert_eq!(report.contractions, 1);
}

#[test]
fn em_dash_and_semicolon_usage_detected() {
    let report = punctuation::analyze(
        "It works \u{2014} mostly. Fine; sure.",
        &AnalysisContext::default(),
    );
    assert!(report.uses_em_dashes);
    assert!(report.uses_semicolons);

    let report = punctuation::analyze("Plain text, nothing else.", &AnalysisContext::default());
    assert!(!report.uses_em_dashes);
}

#[test]
fn vocabulary_counts_hapaxes_and_contractions() {
    let report = vocabulary::analyze(
        "The cat saw the dog. It's late.",
        &AnalysisContext::default(),
    );
    assert_eq!(report.total_words, 7);
    assert_eq!(report.unique_words, 6);
    assert_eq!(report.hapax_legomena, 5);
    assert_eq!(report.contractions, 1);
    // Stopwords are left out of the top words; ties sort alphabetically.
    assert_eq!(report.top_words[0].item, "cat");
}

#[test]
fn paragraph_opening_priority_is_first_match() {
    let cases = [
        ("But is it worth it?", OpeningType::Question),
        ("So why did I bother?", OpeningType::Question),
        ("\"Never again,\" I said.", OpeningType::Quote),
        ("42 fans later, it works.", OpeningType::Number),
        ("But I disagree.", OpeningType::Transition),
        ("I built it.", OpeningType::FirstPerson),
        ("Cats sleep.", OpeningType::Statement),
    ];
    for (paragraph, expected) in cases {
        assert_eq!(paragraph::classify_opening(paragraph), expected, "{paragraph}");
    }
}

#[test]
fn paragraph_opening_entropy_reflects_variety() {
    let ctx = AnalysisContext::default();
    let mixed = paragraph::analyze(
        "Why now?\n\nI built it.\n\nWhy again?\n\nI fixed it.",
        &ctx,
    );
    assert_eq!(mixed.total_paragraphs, 4);
    assert_eq!(mixed.openings[0].opening, OpeningType::Question);
    assert_eq!(mixed.openings[0].percentage, 50.0);
    assert_eq!(mixed.opening_entropy, 1.0);
    assert_eq!(mixed.opening_diversity, 1.0);

    let flat = paragraph::analyze("Cats sleep.\n\nDogs bark.\n\nBirds sing.", &ctx);
    assert_eq!(flat.openings.len(), 1);
    assert_eq!(flat.opening_entropy, 0.0);
    assert_eq!(flat.opening_diversity, 0.0);
}

// ---------------------------------------------------------------------------
// Specificity
// ---------------------------------------------------------------------------

fn phrases(
    report: &specificity::SpecificityReport,
    category: SpecificityCategory,
) -> Vec<String> {
    report
        .category(category)
        .map(|c| c.top_phrases.iter().map(|p| p.item.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn each_specificity_category_is_detected() {
    let text = "I bought a GTX1080 from Newegg last week. It draws 350W and cost $499. \
                Some people say the card runs hot.";
    let report = specificity::analyze(text, &AnalysisContext::default());

    assert_eq!(phrases(&report, SpecificityCategory::Price), vec!["$499"]);
    assert_eq!(phrases(&report, SpecificityCategory::TimeReference), vec!["last week"]);
    assert_eq!(phrases(&report, SpecificityCategory::Measurement), vec!["350w"]);
    assert_eq!(phrases(&report, SpecificityCategory::ModelNumber), vec!["GTX1080"]);
    assert_eq!(phrases(&report, SpecificityCategory::ProperNoun), vec!["Newegg"]);
    assert_eq!(phrases(&report, SpecificityCategory::VagueQuantifier), vec!["some"]);
    assert_eq!(phrases(&report, SpecificityCategory::GenericArticle), vec!["the card"]);

    assert_eq!((report.specific_total, report.vague_total, report.generic_total), (5, 1, 1));
    assert_eq!(report.specificity_score, 71.43);
}

#[test]
fn overlapping_spans_count_once() {
    let report = specificity::analyze(
        "It cost $1200 and broke 3 weeks ago.",
        &AnalysisContext::default(),
    );
    assert_eq!(phrases(&report, SpecificityCategory::Price), vec!["$1200"]);
    assert_eq!(phrases(&report, SpecificityCategory::TimeReference), vec!["3 weeks ago"]);
    assert!(phrases(&report, SpecificityCategory::Measurement).is_empty());
    assert!(phrases(&report, SpecificityCategory::ModelNumber).is_empty());
    assert_eq!(report.specific_total, 2, "two facts, two hits");
    assert_eq!(report.specificity_score, 100.0);
}
