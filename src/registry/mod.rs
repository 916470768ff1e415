//! Registry documents - flat-file persistence
//!
//! The editorial registries are plain Markdown documents: the tag
//! library, the statistics document and the content plan. This module
//! parses and renders them; reads and writes are always whole-file.

pub mod content_plan;
pub mod statistics;
pub mod tag_library;

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Registry-level errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Document could not be read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Document could not be written
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },

    /// Document content does not match the expected format
    #[error("Malformed {kind} document at {path}: {message}")]
    Malformed {
        kind: &'static str,
        path: String,
        message: String,
    },
}

/// Read a registry document into memory.
pub fn read_document(path: &Path) -> Result<String, RegistryError> {
    fs::read_to_string(path).map_err(|e| RegistryError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a regenerated registry document, retrying once on failure.
///
/// Derived documents are allowed to lag behind the corpus, so a single
/// transient write failure is retried before the caller has to record
/// the discrepancy. The parent directory is created when missing.
pub fn write_with_retry(path: &Path, content: &str) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| RegistryError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;
        }
    }

    if let Err(first) = fs::write(path, content) {
        tracing::warn!(
            "write to {} failed ({first}); retrying once",
            path.display()
        );
        fs::write(path, content).map_err(|e| RegistryError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/statistics.md");
        write_with_retry(&path, "content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_read_missing_document() {
        let err = read_document(Path::new("/nonexistent/tags.md")).unwrap_err();
        assert!(matches!(err, RegistryError::FileRead { .. }));
    }
}
