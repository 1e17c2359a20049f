//! Corpus loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::text;

const ARTICLE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub source: Option<PathBuf>,
    pub text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: None,
            text: text.into(),
        }
    }

    /// Title is the first `# ` heading, falling back to the file stem.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let title = text
            .lines()
            .find_map(|line| line.trim().strip_prefix("# "))
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
        Ok(Self {
            title,
            source: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn word_count(&self) -> usize {
        text::word_count(&text::paragraphs(&self.text).join("\n\n"))
    }
}

/// An author's articles, in a stable order.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub name: String,
    pub sitemap_url: Option<String>,
    pub articles: Vec<Article>,
}

/// What gets written to `corpus.json` next to the reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    pub name: String,
    pub sitemap_url: Option<String>,
    pub word_count: usize,
    pub article_count: usize,
    pub titles: Vec<String>,
}

impl Corpus {
    pub fn new(name: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            name: name.into(),
            sitemap_url: None,
            articles,
        }
    }

    pub fn with_sitemap(mut self, url: impl Into<String>) -> Self {
        self.sitemap_url = Some(url.into());
        self
    }

    /// Loads every `.md`/`.txt` file under `dir`, sorted by path.
    pub fn from_dir(dir: &Path, name: impl Into<String>) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    warn!("Skipping unreadable entry: {err}");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if entry.file_type().is_file() && has_article_extension(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        let articles = paths
            .iter()
            .map(|p| {
                debug!("Loading article {}", p.display());
                Article::from_file(p)
            })
            .collect::<Result<Vec<_>>>()?;
        let articles: Vec<Article> = articles
            .into_iter()
            .filter(|a| !a.text.trim().is_empty())
            .collect();
        if articles.is_empty() {
            return Err(Error::EmptyCorpus(dir.to_path_buf()));
        }

        let corpus = Self::new(name, articles);
        info!(
            "Loaded {} articles ({} words) from {}",
            corpus.article_count(),
            corpus.word_count(),
            dir.display()
        );
        Ok(corpus)
    }

    /// All article texts joined with [`text::ARTICLE_SEPARATOR`].
    pub fn combined_text(&self) -> String {
        self.articles
            .iter()
            .map(|a| a.text.trim())
            .collect::<Vec<_>>()
            .join(text::ARTICLE_SEPARATOR)
    }

    pub fn word_count(&self) -> usize {
        self.articles.iter().map(Article::word_count).sum()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn metadata(&self) -> CorpusMetadata {
        CorpusMetadata {
            name: self.name.clone(),
            sitemap_url: self.sitemap_url.clone(),
            word_count: self.word_count(),
            article_count: self.article_count(),
            titles: self.articles.iter().map(|a| a.title.clone()).collect(),
        }
    }
}

fn has_article_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARTICLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
