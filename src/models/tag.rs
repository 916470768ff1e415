//! Tag library model
//!
//! This module defines the tag registry types used by the consistency
//! checker:
//! - `TagCategory` enum grouping tags by kind
//! - `TagDefinition` entity for a single registered tag
//! - `TagLibrary` registry with name lookup
//!
//! A tag must be defined in the library before any article may reference
//! it; the checker treats unknown tags as blocking errors.

use serde::{Deserialize, Serialize};

/// Category a tag definition belongs to.
///
/// Categories group the tag library document into sections; unknown
/// section names parse as `Other` so a hand-edited library never fails
/// to load outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    /// Programming language (Java, Go, ...)
    Language,
    /// Framework or library (Spring, Netty, ...)
    Framework,
    /// Database (MySQL, Redis, ...)
    Database,
    /// Middleware (Kafka, RocketMQ, ...)
    Middleware,
    /// Practical scenario (分布式事务, 性能调优, ...)
    Scenario,
    /// Architecture topic (微服务, DDD, ...)
    Architecture,
    /// Anything else
    #[default]
    Other,
}

impl TagCategory {
    /// Convert category to its document section name
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Language => "language",
            TagCategory::Framework => "framework",
            TagCategory::Database => "database",
            TagCategory::Middleware => "middleware",
            TagCategory::Scenario => "scenario",
            TagCategory::Architecture => "architecture",
            TagCategory::Other => "other",
        }
    }

    /// Section heading used when rendering the library document
    pub fn label(&self) -> &'static str {
        match self {
            TagCategory::Language => "Language",
            TagCategory::Framework => "Framework",
            TagCategory::Database => "Database",
            TagCategory::Middleware => "Middleware",
            TagCategory::Scenario => "Scenario",
            TagCategory::Architecture => "Architecture",
            TagCategory::Other => "Other",
        }
    }

    /// Parse category from a document section name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "language" => Some(TagCategory::Language),
            "framework" => Some(TagCategory::Framework),
            "database" => Some(TagCategory::Database),
            "middleware" => Some(TagCategory::Middleware),
            "scenario" => Some(TagCategory::Scenario),
            "architecture" => Some(TagCategory::Architecture),
            "other" => Some(TagCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single registered tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagDefinition {
    /// Tag name, unique within the library
    pub name: String,
    /// Grouping category
    pub category: TagCategory,
    /// One-line description
    pub description: String,
    /// Number of articles using this tag (derived, recomputed from the corpus)
    #[serde(default)]
    pub usage_count: usize,
}

impl TagDefinition {
    /// Create a new tag definition with a zero usage count.
    pub fn new(
        name: impl Into<String>,
        category: TagCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            usage_count: 0,
        }
    }
}

/// The registry of allowed article tags.
///
/// Definitions keep their document order; lookup is by exact name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagLibrary {
    /// Registered tags in document order
    pub definitions: Vec<TagDefinition>,
}

impl TagLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from a list of definitions
    pub fn from_definitions(definitions: Vec<TagDefinition>) -> Self {
        Self { definitions }
    }

    /// Check whether a tag name is registered (exact match)
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|d| d.name == name)
    }

    /// Look up a definition by exact name
    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Iterate over registered tag names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> TagLibrary {
        TagLibrary::from_definitions(vec![
            TagDefinition::new("Java", TagCategory::Language, "JVM language"),
            TagDefinition::new("Spring", TagCategory::Framework, "Application framework"),
            TagDefinition::new("MySQL", TagCategory::Database, "Relational database"),
        ])
    }

    #[test]
    fn test_contains_exact_name() {
        let lib = sample_library();
        assert!(lib.contains("Java"));
        assert!(!lib.contains("java"));
        assert!(!lib.contains("Kubernetes"));
    }

    #[test]
    fn test_get_returns_definition() {
        let lib = sample_library();
        let def = lib.get("Spring").unwrap();
        assert_eq!(def.category, TagCategory::Framework);
        assert_eq!(def.description, "Application framework");
    }

    #[test]
    fn test_names_preserve_order() {
        let lib = sample_library();
        let names: Vec<&str> = lib.names().collect();
        assert_eq!(names, vec!["Java", "Spring", "MySQL"]);
    }

    #[test]
    fn test_category_round_trip() {
        for cat in [
            TagCategory::Language,
            TagCategory::Framework,
            TagCategory::Database,
            TagCategory::Middleware,
            TagCategory::Scenario,
            TagCategory::Architecture,
            TagCategory::Other,
        ] {
            assert_eq!(TagCategory::from_str(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_category_from_str_unknown() {
        assert_eq!(TagCategory::from_str("frontend"), None);
        assert_eq!(
            TagCategory::from_str(" Database "),
            Some(TagCategory::Database)
        );
    }

    #[test]
    fn test_empty_library() {
        let lib = TagLibrary::new();
        assert!(lib.is_empty());
        assert_eq!(lib.len(), 0);
        assert!(!lib.contains("Java"));
    }
}
