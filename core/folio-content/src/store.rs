//! Directory-backed case-study store.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{ContentError, ContentResult};
use crate::front_matter::Document;
use crate::render::render_markdown;

/// Longest summary derived from body text, in characters.
pub const SUMMARY_MAX_CHARS: usize = 220;

/// A fully rendered case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    /// Sanitized HTML of the body.
    pub html: String,
}

/// One entry of the case-study index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudySummary {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub summary: String,
}

/// Read-only view over a directory of case-study files.
#[derive(Debug, Clone)]
pub struct CaseStudyStore {
    root: PathBuf,
    extension: String,
}

impl CaseStudyStore {
    /// File extension recognised when none is configured.
    pub const DEFAULT_EXTENSION: &'static str = "mdx";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Uses `extension` (without the leading dot) instead of `mdx`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Loads and renders the case study for `slug`.
    ///
    /// Slugs that are not a single plain path component are treated as
    /// missing, so a request can never read outside the content directory.
    pub async fn load(&self, slug: &str) -> ContentResult<CaseStudy> {
        if !is_valid_slug(slug) {
            debug!("Rejecting case study slug {:?}", slug);
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let path = self.root.join(format!("{slug}.{}", self.extension));
        let source = match fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(slug.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let doc = Document::parse(&source)?;
        Ok(CaseStudy {
            slug: slug.to_string(),
            title: doc.front_matter.title.unwrap_or_else(|| slug.to_string()),
            date: doc.front_matter.date,
            html: render_markdown(&doc.content),
        })
    }

    /// Returns the slug of every content file, sorted ascending.
    pub async fn slugs(&self) -> ContentResult<Vec<String>> {
        let mut slugs = Vec::new();
        let mut read_dir = fs::read_dir(&self.root).await?;

        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if let Some(slug) = self.slug_for(&name) {
                slugs.push(slug.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Builds the case-study index, newest first.
    ///
    /// Dates are compared as plain strings, so ordering is only chronological
    /// for zero-padded ISO dates. Entries without a date sort last. Files that
    /// cannot be read or parsed are skipped.
    pub async fn list(&self) -> ContentResult<Vec<CaseStudySummary>> {
        let mut entries = Vec::new();

        for slug in self.slugs().await? {
            let path = self.root.join(format!("{slug}.{}", self.extension));
            let source = match fs::read_to_string(&path).await {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping case study {slug}: {e}");
                    continue;
                }
            };
            let doc = match Document::parse(&source) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("Skipping case study {slug}: {e}");
                    continue;
                }
            };

            let summary = summarize(&doc);
            entries.push(CaseStudySummary {
                title: doc.front_matter.title.unwrap_or_else(|| slug.clone()),
                date: doc.front_matter.date,
                summary,
                slug,
            });
        }

        entries.sort_by(newest_first);
        Ok(entries)
    }

    fn slug_for<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let stem = file_name
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        is_valid_slug(stem).then_some(stem)
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\', '\0'])
}

fn summarize(doc: &Document) -> String {
    if let Some(summary) = doc.front_matter.summary.as_deref().filter(|s| !s.is_empty()) {
        return summary.to_string();
    }
    doc.content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(SUMMARY_MAX_CHARS).collect())
        .unwrap_or_default()
}

fn newest_first(a: &CaseStudySummary, b: &CaseStudySummary) -> Ordering {
    let a_date = a.date.as_deref().unwrap_or_default();
    let b_date = b.date.as_deref().unwrap_or_default();
    b_date.cmp(a_date).then_with(|| a.slug.cmp(&b.slug))
}
