//! Tag library document
//!
//! The tag library is a Markdown document with one `##` section per
//! category and one bullet per registered tag:
//!
//! ```markdown
//! # Tag Library
//!
//! ## Language
//!
//! - **Java**: JVM 语言与核心特性
//! ```
//!
//! Unknown section names parse into the `Other` category; tags that
//! appear before any section heading do too.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{TagCategory, TagDefinition, TagLibrary};

use super::{read_document, RegistryError};

/// `## <section>` heading
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+?)\s*$").unwrap());

/// `- **name**: description` entry (full-width colon accepted)
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+\*\*(.+?)\*\*\s*[:：]\s*(.*)$").unwrap());

/// Parse a tag library document.
///
/// Duplicate names keep their first definition; later ones are ignored
/// with a warning so a hand-edited document still loads.
pub fn parse(content: &str) -> TagLibrary {
    let mut definitions: Vec<TagDefinition> = Vec::new();
    let mut category = TagCategory::Other;

    for line in content.lines() {
        if let Some(caps) = SECTION.captures(line) {
            category = TagCategory::from_str(&caps[1]).unwrap_or(TagCategory::Other);
            continue;
        }
        if let Some(caps) = ENTRY.captures(line) {
            let name = caps[1].trim().to_string();
            if definitions.iter().any(|d| d.name == name) {
                tracing::warn!("duplicate tag definition ignored: {name}");
                continue;
            }
            definitions.push(TagDefinition::new(name, category, caps[2].trim()));
        }
    }

    TagLibrary::from_definitions(definitions)
}

/// Load the tag library from disk.
pub fn load(path: &Path) -> Result<TagLibrary, RegistryError> {
    let content = read_document(path)?;
    Ok(parse(&content))
}

/// Render a tag library back into its document form.
///
/// Sections follow the category enum order; entries keep their library
/// order within a section. Empty sections are omitted.
pub fn render(library: &TagLibrary) -> String {
    let mut out = String::from("# Tag Library\n");

    for category in [
        TagCategory::Language,
        TagCategory::Framework,
        TagCategory::Database,
        TagCategory::Middleware,
        TagCategory::Scenario,
        TagCategory::Architecture,
        TagCategory::Other,
    ] {
        let entries: Vec<&TagDefinition> = library
            .definitions
            .iter()
            .filter(|d| d.category == category)
            .collect();
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {}\n\n", category.label()));
        for def in entries {
            out.push_str(&format!("- **{}**: {}\n", def.name, def.description));
        }
    }

    out
}
