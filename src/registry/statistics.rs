//! Statistics document
//!
//! The statistics document is a derived Markdown view: a total-count
//! line, a freshness date and a ranked tag usage list. It is always
//! rendered whole from a freshly recomputed `Statistics` value; nothing
//! ever parses it back as a source of truth.

use crate::models::Statistics;

/// Render the statistics document.
///
/// Output is deterministic for a given `Statistics` value, so repeated
/// regeneration over an unchanged corpus is byte-identical apart from
/// the generation date.
pub fn render(stats: &Statistics) -> String {
    let mut out = String::from("# Blog Statistics\n\n");
    out.push_str(&format!("- Total articles: {}\n", stats.total_articles));
    out.push_str(&format!("- Generated on: {}\n", stats.generated_on));
    out.push_str("\n## Tag usage\n\n");

    if stats.tag_usage.is_empty() {
        out.push_str("No tags in use.\n");
    } else {
        for (rank, usage) in stats.tag_usage.iter().enumerate() {
            out.push_str(&format!("{}. {} ({})\n", rank + 1, usage.name, usage.count));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagUsage;
    use chrono::NaiveDate;

    fn stats() -> Statistics {
        Statistics {
            total_articles: 12,
            tag_usage: vec![
                TagUsage::new("Java", 8),
                TagUsage::new("Spring", 5),
                TagUsage::new("最佳实践", 2),
            ],
            generated_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_render_layout() {
        let doc = render(&stats());
        assert!(doc.starts_with("# Blog Statistics\n"));
        assert!(doc.contains("- Total articles: 12\n"));
        assert!(doc.contains("- Generated on: 2026-01-15\n"));
        assert!(doc.contains("1. Java (8)\n"));
        assert!(doc.contains("2. Spring (5)\n"));
        assert!(doc.contains("3. 最佳实践 (2)\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(&stats()), render(&stats()));
    }

    #[test]
    fn test_render_empty_usage() {
        let stats = Statistics {
            total_articles: 0,
            tag_usage: vec![],
            generated_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        };
        let doc = render(&stats);
        assert!(doc.contains("- Total articles: 0\n"));
        assert!(doc.contains("No tags in use.\n"));
    }
}
