use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use voiceprint::analyzers::naturalness::{self, NaturalnessReport};
use voiceprint::analyzers::vocabulary_tiers::{self, VocabularyTierReport};
use voiceprint::guide::{self, GUIDE_FILE};
use voiceprint::{AnalysisContext, AnalyzerKind, Corpus, Pipeline, ReferenceData, Thresholds};

#[derive(Parser)]
#[command(
    name = "voiceprint",
    about = "Fingerprint an author's voice and turn it into a style guide",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the analyzers over a directory of articles and write JSON reports
    Analyze {
        /// Directory of .md/.txt articles
        corpus_dir: PathBuf,

        /// Corpus name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Sitemap URL the articles were collected from
        #[arg(long)]
        sitemap: Option<String>,

        /// Output directory for reports
        #[arg(long, default_value = "analysis")]
        out: PathBuf,

        /// Comma-separated analyzers to run (default: all)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// TOML file overriding thresholds
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render a Markdown style guide from an analysis directory
    Guide {
        analysis_dir: PathBuf,

        /// Output file (default: <ANALYSIS_DIR>/style-guide.md)
        #[arg(long)]
        output: Option<PathBuf>,

        /// TOML file overriding thresholds
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score text for naturalness and vocabulary tiers (reads stdin if no files)
    Score {
        files: Vec<PathBuf>,

        /// TOML file overriding thresholds
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ScoreOutput {
    source: String,
    naturalness: NaturalnessReport,
    vocabulary_tiers: VocabularyTierReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    match cli.command {
        Command::Analyze {
            corpus_dir,
            name,
            sitemap,
            out,
            only,
            config,
        } => analyze(&corpus_dir, name, sitemap, &out, &only, config.as_deref()),
        Command::Guide {
            analysis_dir,
            output,
            config,
        } => {
            let ctx = context(config.as_deref())?;
            let output = output.unwrap_or_else(|| analysis_dir.join(GUIDE_FILE));
            let written = guide::generate(&analysis_dir, &output, &ctx)
                .with_context(|| format!("generating guide from {}", analysis_dir.display()))?;
            println!("{}", written.display());
            Ok(())
        }
        Command::Score { files, config } => score(&files, config.as_deref()),
    }
}

fn context(config: Option<&Path>) -> Result<AnalysisContext> {
    let thresholds = match config {
        Some(path) => Thresholds::load(path)
            .with_context(|| format!("loading thresholds from {}", path.display()))?,
        None => Thresholds::default(),
    };
    Ok(AnalysisContext::new(thresholds, ReferenceData::builtin()))
}

fn analyze(
    corpus_dir: &Path,
    name: Option<String>,
    sitemap: Option<String>,
    out: &Path,
    only: &[String],
    config: Option<&Path>,
) -> Result<()> {
    let ctx = context(config)?;
    let selection: Vec<AnalyzerKind> = if only.is_empty() {
        AnalyzerKind::ALL.to_vec()
    } else {
        only.iter()
            .map(|s| s.parse())
            .collect::<voiceprint::Result<_>>()
            .context("parsing --only")?
    };

    let name = name.unwrap_or_else(|| {
        corpus_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "corpus".to_string())
    });
    let mut corpus = Corpus::from_dir(corpus_dir, name)
        .with_context(|| format!("loading corpus from {}", corpus_dir.display()))?;
    if let Some(url) = sitemap {
        corpus = corpus.with_sitemap(url);
    }

    let summary = Pipeline::new(ctx)
        .run(&corpus, &selection, out)
        .with_context(|| format!("writing reports to {}", out.display()))?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn score(files: &[PathBuf], config: Option<&Path>) -> Result<()> {
    let ctx = context(config)?;
    let score_text = |source: String, text: &str| -> Result<()> {
        let output = ScoreOutput {
            source,
            naturalness: naturalness::analyze(text, &ctx),
            vocabulary_tiers: vocabulary_tiers::analyze(text, &ctx),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    };

    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        return score_text("<stdin>".to_string(), &input);
    }
    for path in files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        score_text(path.display().to_string(), &text)?;
    }
    Ok(())
}
