//! Configuration management
//!
//! This module handles loading and parsing configuration for copydesk.
//! Configuration is loaded from a `copydesk.yml` file; a missing file
//! yields the built-in defaults, and missing optional values are filled
//! per field.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Corpus location and lint scope
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Per-article tag count bounds
    #[serde(default)]
    pub tags: TagRules,
    /// Description length bounds
    #[serde(default)]
    pub description: DescriptionRules,
    /// Quality checker settings
    #[serde(default)]
    pub quality: QualityConfig,
    /// Registry document paths
    #[serde(default)]
    pub registry: RegistryPaths,
}

/// Corpus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory holding the article Markdown files
    #[serde(default = "default_corpus_dir")]
    pub dir: PathBuf,
    /// Whether draft articles are linted too
    #[serde(default = "default_lint_drafts")]
    pub lint_drafts: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: default_corpus_dir(),
            lint_drafts: default_lint_drafts(),
        }
    }
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("content/posts")
}

fn default_lint_drafts() -> bool {
    true
}

/// Per-article tag count bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRules {
    /// Minimum number of tags per article
    #[serde(default = "default_min_tags")]
    pub min_per_article: usize,
    /// Maximum number of tags per article
    #[serde(default = "default_max_tags")]
    pub max_per_article: usize,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            min_per_article: default_min_tags(),
            max_per_article: default_max_tags(),
        }
    }
}

fn default_min_tags() -> usize {
    3
}

fn default_max_tags() -> usize {
    5
}

/// Description length bounds, in characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRules {
    /// Minimum description length
    #[serde(default = "default_description_min")]
    pub min_chars: usize,
    /// Maximum description length
    #[serde(default = "default_description_max")]
    pub max_chars: usize,
}

impl Default for DescriptionRules {
    fn default() -> Self {
        Self {
            min_chars: default_description_min(),
            max_chars: default_description_max(),
        }
    }
}

fn default_description_min() -> usize {
    50
}

fn default_description_max() -> usize {
    100
}

/// Quality checker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Lower bound of the target word-count range
    #[serde(default = "default_word_target_min")]
    pub word_target_min: usize,
    /// Upper bound of the target word-count range
    #[serde(default = "default_word_target_max")]
    pub word_target_max: usize,
    /// Categories whose articles must carry at least one fenced code block
    #[serde(default = "default_technical_categories")]
    pub technical_categories: Vec<String>,
    /// Heading keywords that count as a summary section
    #[serde(default = "default_summary_keywords")]
    pub summary_keywords: Vec<String>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            word_target_min: default_word_target_min(),
            word_target_max: default_word_target_max(),
            technical_categories: default_technical_categories(),
            summary_keywords: default_summary_keywords(),
        }
    }
}

fn default_word_target_min() -> usize {
    2500
}

fn default_word_target_max() -> usize {
    4000
}

fn default_technical_categories() -> Vec<String> {
    vec![
        "后端开发".to_string(),
        "Java".to_string(),
        "数据库".to_string(),
        "中间件".to_string(),
    ]
}

fn default_summary_keywords() -> Vec<String> {
    vec![
        "总结".to_string(),
        "小结".to_string(),
        "summary".to_string(),
        "conclusion".to_string(),
    ]
}

/// Registry document paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryPaths {
    /// Tag library document
    #[serde(default = "default_tag_library_path")]
    pub tag_library: PathBuf,
    /// Statistics document
    #[serde(default = "default_statistics_path")]
    pub statistics: PathBuf,
    /// Content plan document
    #[serde(default = "default_content_plan_path")]
    pub content_plan: PathBuf,
}

impl Default for RegistryPaths {
    fn default() -> Self {
        Self {
            tag_library: default_tag_library_path(),
            statistics: default_statistics_path(),
            content_plan: default_content_plan_path(),
        }
    }
}

fn default_tag_library_path() -> PathBuf {
    PathBuf::from("docs/tag-library.md")
}

fn default_statistics_path() -> PathBuf {
    PathBuf::from("docs/statistics.md")
}

fn default_content_plan_path() -> PathBuf {
    PathBuf::from("docs/content-plan.md")
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        // If the file doesn't exist, run on defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        // Handle empty file - return defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            })?;

        Ok(config)
    }
}

/// Format a YAML error with its location when one is available.
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}
