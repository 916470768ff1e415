//! Statistics model
//!
//! Derived view over the article corpus: total article count and per-tag
//! usage counts. The statistics document has no lifecycle of its own; it
//! is fully regenerated from the corpus on every change, never patched
//! incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Usage count for a single tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagUsage {
    /// Tag name
    pub name: String,
    /// Number of articles carrying the tag
    pub count: usize,
}

impl TagUsage {
    /// Create a new tag usage entry
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// The derived statistics view.
///
/// `tag_usage` is ranked by count descending, ties broken by name, and
/// covers every tag appearing in at least one counted article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    /// Total number of counted articles
    pub total_articles: usize,
    /// Ranked per-tag usage table
    pub tag_usage: Vec<TagUsage>,
    /// Date the view was generated
    pub generated_on: NaiveDate,
}

impl Statistics {
    /// Look up the usage count for a tag, zero if unused
    pub fn count_for(&self, tag: &str) -> usize {
        self.tag_usage
            .iter()
            .find(|u| u.name == tag)
            .map(|u| u.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_for() {
        let stats = Statistics {
            total_articles: 2,
            tag_usage: vec![TagUsage::new("Java", 2), TagUsage::new("Spring", 1)],
            generated_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        assert_eq!(stats.count_for("Java"), 2);
        assert_eq!(stats.count_for("Spring"), 1);
        assert_eq!(stats.count_for("Redis"), 0);
    }
}
