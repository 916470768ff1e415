//! Corpus loading
//!
//! This module reads the article corpus from disk:
//! - splits each Markdown file into its front-matter block and body
//! - walks the corpus directory collecting `.md` documents in a stable
//!   order
//!
//! Whole files are read into memory; the checker is a single-pass batch
//! tool and never holds partial file state.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Front-matter delimiter line
const FRONT_MATTER_FENCE: &str = "---";

/// Corpus-level errors
///
/// These are I/O and document-structure failures, reported with exit
/// code 2. Field-level validation findings are data, not errors, and
/// live in the per-article report.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus directory missing or unreadable
    #[error("Corpus directory not found: {0}")]
    DirNotFound(String),

    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Document has no leading front-matter block
    #[error("No front matter block in {0}")]
    MissingFrontMatter(String),
}

/// A raw document split into front matter and body, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// File stem, used as the article identifier in reports
    pub slug: String,
    /// Path the document was read from
    pub path: PathBuf,
    /// Raw YAML front-matter block, without the fence lines
    pub front_matter: String,
    /// Raw Markdown body
    pub body: String,
}

/// Split a document into its front-matter block and body.
///
/// The block must start on the first line with a `---` fence and end at
/// the next `---` fence. Returns `None` when the document has no such
/// block.
pub fn split_front_matter(content: &str) -> Option<(String, String)> {
    let rest = content.strip_prefix(FRONT_MATTER_FENCE)?;
    // The opening fence must be a full line
    let rest = rest.strip_prefix('\n').or_else(|| {
        rest.strip_prefix("\r\n")
    })?;

    let mut front = String::new();
    let mut lines = rest.lines();
    for line in lines.by_ref() {
        if line.trim_end() == FRONT_MATTER_FENCE {
            let body: String = lines.collect::<Vec<_>>().join("\n");
            return Some((front, body));
        }
        front.push_str(line);
        front.push('\n');
    }
    None
}

/// Read and split a single article file.
///
/// # Errors
/// - `FileRead` if the file cannot be read
/// - `MissingFrontMatter` if the document has no leading `---` block
pub fn load_document(path: &Path) -> Result<SourceDocument, CorpusError> {
    let content = fs::read_to_string(path).map_err(|e| CorpusError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let (front_matter, body) = split_front_matter(&content)
        .ok_or_else(|| CorpusError::MissingFrontMatter(path.display().to_string()))?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SourceDocument {
        slug,
        path: path.to_path_buf(),
        front_matter,
        body,
    })
}

/// Load every `.md` document under a corpus directory.
///
/// Subdirectories are walked recursively. Documents are returned sorted
/// by path so repeated runs over an unchanged corpus report in the same
/// order.
pub fn load_corpus(dir: &Path) -> Result<Vec<SourceDocument>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::DirNotFound(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    collect_markdown_files(dir, &mut paths)?;
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_document(&path)?);
    }
    Ok(documents)
}

/// Recursively collect `.md` file paths under a directory.
fn collect_markdown_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CorpusError> {
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::FileRead {
        path: dir.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::FileRead {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_markdown_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            out.push(path);
        }
    }
    Ok(())
}
