//! Statistics recomputation
//!
//! Rebuilds the derived statistics view from the full article corpus.
//! There is no incremental path: any change to any article triggers a
//! full recompute, which keeps the derived view from drifting away from
//! the source data. Only published articles are counted.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Article, Statistics, TagUsage};

/// Recompute the statistics view from the corpus.
///
/// Deterministic and idempotent: two runs over an unchanged corpus with
/// the same `today` produce identical output. The tag table is ranked by
/// count descending, ties broken by name, and covers every tag used by
/// at least one published article.
pub fn recompute(articles: &[Article], today: NaiveDate) -> Statistics {
    let published: Vec<&Article> = articles.iter().filter(|a| a.is_published()).collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in &published {
        for tag in &article.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tag_usage: Vec<TagUsage> = counts
        .into_iter()
        .map(|(name, count)| TagUsage::new(name, count))
        .collect();
    // BTreeMap iteration is name-ordered, so a stable sort by count
    // keeps name order within equal counts
    tag_usage.sort_by(|a, b| b.count.cmp(&a.count));

    Statistics {
        total_articles: published.len(),
        tag_usage,
        generated_on: today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FrontMatter;

    fn article(slug: &str, tags: &[&str], draft: bool) -> Article {
        let fm = FrontMatter {
            title: slug.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            categories: vec!["后端开发".to_string()],
            description: "d".repeat(60),
            draft,
        };
        Article::new(slug, fm, "正文")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_counts_published_only() {
        let articles = vec![
            article("a", &["Java", "Spring"], false),
            article("b", &["Java"], false),
            article("c", &["Redis"], true),
        ];
        let stats = recompute(&articles, today());
        assert_eq!(stats.total_articles, 2);
        assert_eq!(stats.count_for("Java"), 2);
        assert_eq!(stats.count_for("Spring"), 1);
        assert_eq!(stats.count_for("Redis"), 0);
    }

    #[test]
    fn test_ranking_by_count_then_name() {
        let articles = vec![
            article("a", &["Spring", "Java"], false),
            article("b", &["Java", "MySQL"], false),
        ];
        let stats = recompute(&articles, today());
        let names: Vec<&str> = stats.tag_usage.iter().map(|u| u.name.as_str()).collect();
        // Java has 2 uses; MySQL and Spring tie at 1 and sort by name
        assert_eq!(names, vec!["Java", "MySQL", "Spring"]);
    }

    #[test]
    fn test_idempotent_on_unchanged_corpus() {
        let articles = vec![
            article("a", &["Java", "Spring", "MySQL"], false),
            article("b", &["Java"], false),
        ];
        let first = recompute(&articles, today());
        let second = recompute(&articles, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = recompute(&[], today());
        assert_eq!(stats.total_articles, 0);
        assert!(stats.tag_usage.is_empty());
    }

    #[test]
    fn test_duplicate_tag_in_one_article_counts_twice() {
        // The checker flags duplicates elsewhere; the count stays honest
        let articles = vec![article("a", &["Java", "Java", "Spring"], false)];
        let stats = recompute(&articles, today());
        assert_eq!(stats.count_for("Java"), 2);
    }

    proptest::proptest! {
        /// Recomputing any corpus twice yields identical statistics
        #[test]
        fn prop_recompute_is_idempotent(tag_sets in proptest::collection::vec(
            proptest::collection::vec("[a-zA-Z]{1,8}", 1..6),
            0..20,
        )) {
            let articles: Vec<Article> = tag_sets
                .iter()
                .enumerate()
                .map(|(i, tags)| {
                    let refs: Vec<&str> = tags.iter().map(|s| s.as_str()).collect();
                    article(&format!("a{i}"), &refs, i % 4 == 0)
                })
                .collect();
            let first = recompute(&articles, today());
            let second = recompute(&articles, today());
            proptest::prop_assert_eq!(first, second);
        }
    }
}
