//! Check report
//!
//! Aggregates every finding for a corpus run into one report: blocking
//! errors, warnings and suggestions per article, plus registry-level
//! discrepancies. All blocking errors are collected and reported
//! together per article, never one at a time.

use serde::Serialize;

use crate::services::{FrontMatterOutcome, QualityReport, TagCheck};

/// Exit code when every article passed
pub const EXIT_OK: i32 = 0;
/// Exit code when validation errors are present
pub const EXIT_VALIDATION: i32 = 1;
/// Exit code for I/O or parse failures
pub const EXIT_IO: i32 = 2;

/// Findings for a single article.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleReport {
    /// Article identifier (file stem)
    pub slug: String,
    /// Front-matter findings and warnings
    pub front_matter: FrontMatterOutcome,
    /// Tag consistency findings, absent when the tag list never parsed
    pub tags: Option<TagCheck>,
    /// Quality assessment, absent when the front matter never parsed
    pub quality: Option<QualityReport>,
}

impl ArticleReport {
    /// Number of blocking errors
    pub fn error_count(&self) -> usize {
        let tag_errors = self.tags.as_ref().map_or(0, |t| t.errors.len());
        self.front_matter.issues.len() + tag_errors
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        let quality_warnings = self.quality.as_ref().map_or(0, |q| {
            q.recommendations.len() + usize::from(q.is_low())
        });
        self.front_matter.warnings.len() + quality_warnings
    }

    /// Check whether the article may be published
    pub fn is_publishable(&self) -> bool {
        self.error_count() == 0
    }
}

/// Findings for the whole corpus run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusReport {
    /// Per-article findings, in corpus order
    pub articles: Vec<ArticleReport>,
    /// Registry documents that could not be regenerated this run and
    /// now lag behind the corpus
    pub registry_lag: Vec<String>,
}

impl CorpusReport {
    /// Total blocking errors across the corpus
    pub fn error_count(&self) -> usize {
        self.articles.iter().map(|a| a.error_count()).sum()
    }

    /// Total warnings across the corpus
    pub fn warning_count(&self) -> usize {
        self.articles.iter().map(|a| a.warning_count()).sum()
    }

    /// Check whether every article passed every blocking rule
    pub fn all_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.all_valid() {
            EXIT_OK
        } else {
            EXIT_VALIDATION
        }
    }

    /// Render the human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for article in &self.articles {
            let verdict = if article.is_publishable() {
                "PASS"
            } else {
                "FAIL"
            };
            out.push_str(&format!("{verdict} {}\n", article.slug));

            for issue in &article.front_matter.issues {
                out.push_str(&format!("  error: {issue}\n"));
            }
            if let Some(ref tags) = article.tags {
                for error in &tags.errors {
                    out.push_str(&format!("  error: {error}\n"));
                }
                for suggestion in &tags.suggestions {
                    out.push_str(&format!(
                        "  suggestion: did you mean '{}' instead of '{}'?\n",
                        suggestion.nearest, suggestion.tag
                    ));
                }
            }
            for warning in &article.front_matter.warnings {
                out.push_str(&format!("  warning: {warning}\n"));
            }
            if let Some(ref quality) = article.quality {
                for recommendation in &quality.recommendations {
                    out.push_str(&format!("  warning: {recommendation}\n"));
                }
                if quality.is_low() {
                    out.push_str(&format!(
                        "  warning: quality score {} is low\n",
                        quality.score
                    ));
                }
            }
        }

        if !self.registry_lag.is_empty() {
            out.push_str("\nRegistry lag (manual follow-up needed):\n");
            for lag in &self.registry_lag {
                out.push_str(&format!("  - {lag}\n"));
            }
        }

        out.push_str(&format!(
            "\nChecked {} article(s): {} error(s), {} warning(s)\n",
            self.articles.len(),
            self.error_count(),
            self.warning_count()
        ));

        out
    }
}
