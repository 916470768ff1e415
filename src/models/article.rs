//! Article model
//!
//! This module provides:
//! - `FrontMatter` - the validated metadata header of an article file
//! - `Article` - a fully parsed corpus entry with its derived word count
//! - `count_words` - CJK-aware word counting over Markdown text

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated front matter of an article.
///
/// This is the strict form produced by the front-matter validator once
/// every required field has passed its shape checks. The permissive raw
/// form lives in the corpus loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrontMatter {
    /// Article title
    pub title: String,
    /// Publication date
    pub date: NaiveDate,
    /// Ordered tag list
    pub tags: Vec<String>,
    /// Category list
    pub categories: Vec<String>,
    /// One-paragraph description
    pub description: String,
    /// Whether the article is still a draft
    pub draft: bool,
}

/// A parsed article from the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// File stem, used as the article identifier in reports
    pub slug: String,
    /// Article title
    pub title: String,
    /// Publication date
    pub date: NaiveDate,
    /// Ordered tag list
    pub tags: Vec<String>,
    /// Category list
    pub categories: Vec<String>,
    /// One-paragraph description
    pub description: String,
    /// Whether the article is still a draft
    pub draft: bool,
    /// Derived word count of the body
    pub word_count: usize,
    /// Raw Markdown body
    pub body: String,
}

impl Article {
    /// Build an article from validated front matter and its body.
    ///
    /// The word count is derived here so every consumer sees the same
    /// number.
    pub fn new(slug: impl Into<String>, front_matter: FrontMatter, body: impl Into<String>) -> Self {
        let body = body.into();
        let word_count = count_words(&body);
        Self {
            slug: slug.into(),
            title: front_matter.title,
            date: front_matter.date,
            tags: front_matter.tags,
            categories: front_matter.categories,
            description: front_matter.description,
            draft: front_matter.draft,
            word_count,
            body,
        }
    }

    /// Check whether the article is published (not a draft)
    pub fn is_published(&self) -> bool {
        !self.draft
    }
}

/// Count words in Markdown text.
///
/// The corpus is a Chinese-language technical blog, so counting splits
/// on whitespace alone would undercount badly. Rules:
/// - each CJK ideograph counts as one word
/// - each maximal run of ASCII alphanumerics counts as one word
/// - everything else (punctuation, Markdown markers) separates words
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_ascii_word = false;
    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_ascii_word = false;
        } else if c.is_ascii_alphanumeric() {
            if !in_ascii_word {
                count += 1;
                in_ascii_word = true;
            }
        } else {
            in_ascii_word = false;
        }
    }
    count
}

/// Check whether a character is a CJK ideograph.
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'       // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'     // Extension A
        | '\u{F900}'..='\u{FAFF}'     // Compatibility Ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_front_matter() -> FrontMatter {
        FrontMatter {
            title: "分布式事务实战".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            tags: vec!["Java".to_string(), "Spring".to_string(), "最佳实践".to_string()],
            categories: vec!["后端开发".to_string()],
            description: "x".repeat(60),
            draft: false,
        }
    }

    #[test]
    fn test_article_new_derives_word_count() {
        let article = Article::new("dist-tx", sample_front_matter(), "Seata 支持 AT 模式");
        // "Seata" + "AT" + 4 ideographs
        assert_eq!(article.word_count, 6);
        assert_eq!(article.slug, "dist-tx");
    }

    #[test]
    fn test_is_published() {
        let mut fm = sample_front_matter();
        let published = Article::new("a", fm.clone(), "");
        assert!(published.is_published());

        fm.draft = true;
        let draft = Article::new("b", fm, "");
        assert!(!draft.is_published());
    }

    #[test]
    fn test_count_words_ascii_only() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("foo_bar baz-qux"), 4);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_count_words_cjk_only() {
        assert_eq!(count_words("分布式事务"), 5);
    }

    #[test]
    fn test_count_words_mixed() {
        // 4 ideographs + "JVM" + "GC"
        assert_eq!(count_words("调优 JVM 的 GC 策"), 6);
    }

    #[test]
    fn test_count_words_ignores_markdown_markers() {
        assert_eq!(count_words("## 标题\n\n- item"), 3);
    }

    #[test]
    fn test_count_words_digits_count_as_words() {
        assert_eq!(count_words("MySQL 8 支持"), 4);
    }
}
