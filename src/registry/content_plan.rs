//! Content plan document
//!
//! The content plan is a Markdown document with one `##` section per
//! priority tier, checklist bullets per topic and a trailing completion
//! summary:
//!
//! ```markdown
//! # Content Plan
//!
//! ## P0
//!
//! - [x] MySQL 索引优化实战 (completed: 2025-12-01)
//! - [ ] JVM 垃圾回收调优
//!
//! Completion: 50.00% (1/2)
//! ```
//!
//! The completion line is derived and recomputed on every render; parse
//! ignores it.

use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ContentPlan, PlannedTopic, Priority, TopicStatus};

use super::{read_document, RegistryError};

/// `## <tier>` heading
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+?)\s*$").unwrap());

/// `- [ ] title` / `- [x] title (completed: YYYY-MM-DD)` entry
static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-\s+\[( |x|X)\]\s+(.*?)(?:\s+\(completed:\s*(\d{4}-\d{2}-\d{2})\))?\s*$")
        .unwrap()
});

/// Parse a content plan document.
///
/// # Errors
/// - `Malformed` when a checklist entry appears before any priority
///   section, or a completion date does not parse
pub fn parse(content: &str, path: &Path) -> Result<ContentPlan, RegistryError> {
    let mut topics = Vec::new();
    let mut tier: Option<Priority> = None;

    for (lineno, line) in content.lines().enumerate() {
        if let Some(caps) = SECTION.captures(line) {
            tier = Priority::from_str(&caps[1]);
            continue;
        }
        let Some(caps) = ENTRY.captures(line) else {
            continue;
        };

        let Some(priority) = tier else {
            return Err(RegistryError::Malformed {
                kind: "content plan",
                path: path.display().to_string(),
                message: format!(
                    "line {}: checklist entry outside a P0/P1/P2 section",
                    lineno + 1
                ),
            });
        };

        let completed = !caps[1].trim().is_empty();
        let title = caps[2].trim().to_string();
        let completion_date = match caps.get(3) {
            Some(m) => Some(NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").map_err(
                |e| RegistryError::Malformed {
                    kind: "content plan",
                    path: path.display().to_string(),
                    message: format!("line {}: bad completion date: {e}", lineno + 1),
                },
            )?),
            None => None,
        };

        topics.push(PlannedTopic {
            title,
            priority,
            status: if completed {
                TopicStatus::Completed
            } else {
                TopicStatus::Pending
            },
            completion_date,
        });
    }

    Ok(ContentPlan::from_topics(topics))
}

/// Load the content plan from disk.
pub fn load(path: &Path) -> Result<ContentPlan, RegistryError> {
    let content = read_document(path)?;
    parse(&content, path)
}

/// Render a content plan back into its document form.
///
/// Tiers render in priority order; topics keep their plan order within
/// a tier. Empty tiers are omitted. The completion summary is always
/// recomputed from the topics.
pub fn render(plan: &ContentPlan) -> String {
    let mut out = String::from("# Content Plan\n");

    for tier in Priority::ALL {
        let topics: Vec<&PlannedTopic> = plan
            .topics
            .iter()
            .filter(|t| t.priority == tier)
            .collect();
        if topics.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {tier}\n\n"));
        for topic in topics {
            match (topic.status, topic.completion_date) {
                (TopicStatus::Completed, Some(date)) => {
                    out.push_str(&format!("- [x] {} (completed: {})\n", topic.title, date));
                }
                (TopicStatus::Completed, None) => {
                    out.push_str(&format!("- [x] {}\n", topic.title));
                }
                _ => {
                    out.push_str(&format!("- [ ] {}\n", topic.title));
                }
            }
        }
    }

    out.push_str(&format!(
        "\nCompletion: {:.2}% ({}/{})\n",
        plan.completion_percentage(),
        plan.completed_count(),
        plan.total_count()
    ));

    out
}
