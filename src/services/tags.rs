//! Tag consistency checker
//!
//! Implements the tag-library invariant: every tag an article references
//! must already be defined in the tag library (write-before-read), and
//! the per-article tag count must stay within the configured bounds.
//!
//! This module is the single authority on tag rules. Unknown tags are
//! blocking errors; each one carries the nearest registered tag as a
//! remediation suggestion. The count check is independent of per-tag
//! validity.

use serde::Serialize;

use crate::config::TagRules;
use crate::models::TagLibrary;

/// A blocking tag finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagIssue {
    /// Tag is not defined in the tag library
    UnknownTag { tag: String },
    /// Tag count is outside the configured bounds
    CountOutOfBounds { got: usize, min: usize, max: usize },
}

impl std::fmt::Display for TagIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagIssue::UnknownTag { tag } => {
                write!(f, "tag not in library: {tag} (add it to the library first)")
            }
            TagIssue::CountOutOfBounds { got, min, max } => {
                write!(f, "{min}-{max} tags required, got {got}")
            }
        }
    }
}

/// Nearest-match remediation for an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSuggestion {
    /// The unknown tag as written
    pub tag: String,
    /// Closest registered tag name
    pub nearest: String,
}

/// Result of checking one article's tag list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagCheck {
    /// Whether the tag list passed every blocking rule
    pub is_valid: bool,
    /// Blocking findings
    pub errors: Vec<TagIssue>,
    /// Nearest-match suggestions, one per unknown tag when the library
    /// has anything to suggest
    pub suggestions: Vec<TagSuggestion>,
}

/// Checker enforcing tag-library membership and count bounds.
pub struct TagChecker<'a> {
    library: &'a TagLibrary,
    rules: TagRules,
}

impl<'a> TagChecker<'a> {
    /// Create a checker over the given library with default count bounds.
    pub fn new(library: &'a TagLibrary) -> Self {
        Self {
            library,
            rules: TagRules::default(),
        }
    }

    /// Create a checker with configured count bounds.
    pub fn with_rules(library: &'a TagLibrary, rules: TagRules) -> Self {
        Self { library, rules }
    }

    /// Check an article's tag list.
    ///
    /// Membership is an exact-name lookup. For each unknown tag the
    /// closest library tag by case-insensitive edit distance is attached
    /// as a suggestion (ties broken by library order).
    pub fn check(&self, tags: &[String]) -> TagCheck {
        let mut check = TagCheck::default();

        let count = tags.len();
        if count < self.rules.min_per_article || count > self.rules.max_per_article {
            check.errors.push(TagIssue::CountOutOfBounds {
                got: count,
                min: self.rules.min_per_article,
                max: self.rules.max_per_article,
            });
        }

        for tag in tags {
            if self.library.contains(tag) {
                continue;
            }
            check.errors.push(TagIssue::UnknownTag { tag: tag.clone() });
            if let Some(nearest) = self.nearest(tag) {
                check.suggestions.push(TagSuggestion {
                    tag: tag.clone(),
                    nearest: nearest.to_string(),
                });
            }
        }

        check.is_valid = check.errors.is_empty();
        check
    }

    /// Find the registered tag closest to an unknown one.
    ///
    /// Returns `None` only when the library is empty.
    fn nearest(&self, tag: &str) -> Option<&str> {
        let needle = tag.to_lowercase();
        self.library
            .names()
            .map(|name| (levenshtein(&needle, &name.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

/// Levenshtein edit distance over Unicode scalar values.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TagCategory, TagDefinition};

    fn library() -> TagLibrary {
        TagLibrary::from_definitions(vec![
            TagDefinition::new("Java", TagCategory::Language, "JVM language"),
            TagDefinition::new("Spring", TagCategory::Framework, "Application framework"),
            TagDefinition::new("SpringBoot", TagCategory::Framework, "Boot starter stack"),
            TagDefinition::new("MySQL", TagCategory::Database, "Relational database"),
            TagDefinition::new("Redis", TagCategory::Database, "In-memory store"),
            TagDefinition::new("最佳实践", TagCategory::Scenario, "工程实践与规范"),
        ])
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_tags_known_and_count_in_range() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&["Java", "Spring", "最佳实践"]));
        assert!(check.is_valid);
        assert!(check.errors.is_empty());
        assert!(check.suggestions.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_error_with_suggestion() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&["Java", "Spring", "Kubernetes"]));
        assert!(!check.is_valid);
        assert_eq!(
            check.errors,
            vec![TagIssue::UnknownTag {
                tag: "Kubernetes".to_string()
            }]
        );
        assert_eq!(check.suggestions.len(), 1);
        assert_eq!(check.suggestions[0].tag, "Kubernetes");
        // Some registered tag is suggested as the nearest match
        assert!(lib.contains(&check.suggestions[0].nearest));
    }

    #[test]
    fn test_suggestion_prefers_close_match() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&["Java", "MySQL", "Springboot"]));
        assert_eq!(check.suggestions[0].nearest, "SpringBoot");
    }

    #[test]
    fn test_count_too_low_is_error() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&["Java", "Spring"]));
        assert!(!check.is_valid);
        assert_eq!(
            check.errors,
            vec![TagIssue::CountOutOfBounds {
                got: 2,
                min: 3,
                max: 5
            }]
        );
        // The two tags themselves are valid; only the count is wrong
        assert!(check.suggestions.is_empty());
    }

    #[test]
    fn test_count_too_high_is_error() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&[
            "Java",
            "Spring",
            "SpringBoot",
            "MySQL",
            "Redis",
            "最佳实践",
        ]));
        assert!(!check.is_valid);
        assert!(matches!(
            check.errors[0],
            TagIssue::CountOutOfBounds { got: 6, .. }
        ));
    }

    #[test]
    fn test_count_check_independent_of_membership() {
        let lib = library();
        let check = TagChecker::new(&lib).check(&tags(&["Kubernetes", "Docker"]));
        // Both the count error and the two membership errors are reported
        assert_eq!(check.errors.len(), 3);
    }

    #[test]
    fn test_empty_library_yields_no_suggestion() {
        let lib = TagLibrary::new();
        let check = TagChecker::new(&lib).check(&tags(&["Java", "Spring", "Redis"]));
        assert_eq!(check.errors.len(), 3);
        assert!(check.suggestions.is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let lib = library();
        let rules = TagRules {
            min_per_article: 1,
            max_per_article: 2,
        };
        let check = TagChecker::with_rules(&lib, rules).check(&tags(&["Java"]));
        assert!(check.is_valid);
    }

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("spring", "spring"), 0);
        assert_eq!(levenshtein("最佳实践", "最佳实战"), 1);
    }
}
