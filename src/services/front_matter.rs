//! Front-matter validator
//!
//! Implements the metadata checks for article front matter:
//! - presence and shape of all required fields
//!   (title, date, tags, categories, description, draft)
//! - date parsing and the not-in-the-future rule
//! - description length bounds (warning only)
//!
//! The validator is a pure check: issues are collected, never raised
//! fail-fast, so an author sees every problem in one pass. Tag-library
//! membership and tag count are deliberately not checked here; the tag
//! consistency checker is the single authority for those rules.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use serde_yaml::Value;

use crate::config::DescriptionRules;
use crate::models::FrontMatter;

/// The required front-matter fields, in report order
const REQUIRED_FIELDS: [&str; 6] = ["title", "date", "tags", "categories", "description", "draft"];

/// A blocking front-matter finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrontMatterIssue {
    /// A required field is absent
    MissingField { field: String },
    /// A required field is present but empty
    EmptyField { field: String },
    /// A field has the wrong shape (e.g. `tags` is not a list)
    MalformedField { field: String, expected: String },
    /// `date` is unparsable or in the future
    InvalidDate { value: String, reason: String },
}

impl std::fmt::Display for FrontMatterIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontMatterIssue::MissingField { field } => {
                write!(f, "missing required field: {field}")
            }
            FrontMatterIssue::EmptyField { field } => {
                write!(f, "required field is empty: {field}")
            }
            FrontMatterIssue::MalformedField { field, expected } => {
                write!(f, "malformed field {field}: expected {expected}")
            }
            FrontMatterIssue::InvalidDate { value, reason } => {
                write!(f, "invalid date '{value}': {reason}")
            }
        }
    }
}

/// Outcome of validating one front-matter block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrontMatterOutcome {
    /// Blocking findings; publication is refused while any remain
    pub issues: Vec<FrontMatterIssue>,
    /// Non-blocking findings with remediation hints
    pub warnings: Vec<String>,
    /// The validated front matter, present only when no issue was found
    pub front_matter: Option<FrontMatter>,
    /// The tag list, present whenever it parsed, even if other fields
    /// failed. Lets the tag checker run so an author sees every
    /// blocking error in one pass.
    #[serde(skip)]
    pub tags: Option<Vec<String>>,
}

impl FrontMatterOutcome {
    /// Check whether the block passed every blocking rule
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validator for article front-matter blocks.
pub struct FrontMatterValidator {
    today: NaiveDate,
    description: DescriptionRules,
}

impl FrontMatterValidator {
    /// Create a validator checking dates against the given "today".
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            description: DescriptionRules::default(),
        }
    }

    /// Create a validator with configured description bounds.
    pub fn with_rules(today: NaiveDate, description: DescriptionRules) -> Self {
        Self { today, description }
    }

    /// Validate a raw YAML front-matter block.
    ///
    /// Returns every finding at once. A block that is not a YAML mapping
    /// at all reports a single `MalformedField` finding on the block
    /// itself rather than failing the run; document-level I/O failures
    /// are handled by the corpus loader.
    pub fn validate(&self, front_matter_yaml: &str) -> FrontMatterOutcome {
        let mut outcome = FrontMatterOutcome::default();

        let value: Value = match serde_yaml::from_str(front_matter_yaml) {
            Ok(v) => v,
            Err(e) => {
                outcome.issues.push(FrontMatterIssue::MalformedField {
                    field: "front matter".to_string(),
                    expected: format!("a YAML mapping ({e})"),
                });
                return outcome;
            }
        };
        let Some(mapping) = value.as_mapping() else {
            outcome.issues.push(FrontMatterIssue::MalformedField {
                field: "front matter".to_string(),
                expected: "a YAML mapping".to_string(),
            });
            return outcome;
        };

        for field in REQUIRED_FIELDS {
            if !mapping.contains_key(&Value::from(field)) {
                outcome.issues.push(FrontMatterIssue::MissingField {
                    field: field.to_string(),
                });
            }
        }

        let title = self.check_string(mapping, "title", &mut outcome);
        let date = self.check_date(mapping, &mut outcome);
        let tags = self.check_string_list(mapping, "tags", &mut outcome);
        let categories = self.check_string_list(mapping, "categories", &mut outcome);
        let description = self.check_string(mapping, "description", &mut outcome);
        let draft = self.check_bool(mapping, "draft", &mut outcome);

        outcome.tags = tags.clone();

        if let Some(ref description) = description {
            let len = description.chars().count();
            let (min, max) = (self.description.min_chars, self.description.max_chars);
            if len < min || len > max {
                outcome.warnings.push(format!(
                    "description is {len} characters, expected {min}-{max}; \
                     adjust it so list pages render a complete excerpt"
                ));
            }
        }

        if outcome.issues.is_empty() {
            // Zero issues means every extractor above returned a value,
            // so the defaults are never reached
            outcome.front_matter = Some(FrontMatter {
                title: title.unwrap_or_default(),
                date: date.unwrap_or_default(),
                tags: tags.unwrap_or_default(),
                categories: categories.unwrap_or_default(),
                description: description.unwrap_or_default(),
                draft: draft.unwrap_or_default(),
            });
        }

        outcome
    }

    /// Extract a non-empty string field, recording issues.
    fn check_string(
        &self,
        mapping: &serde_yaml::Mapping,
        field: &str,
        outcome: &mut FrontMatterOutcome,
    ) -> Option<String> {
        let value = mapping.get(&Value::from(field))?;
        match value.as_str() {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            Some(_) => {
                outcome.issues.push(FrontMatterIssue::EmptyField {
                    field: field.to_string(),
                });
                None
            }
            None => {
                outcome.issues.push(FrontMatterIssue::MalformedField {
                    field: field.to_string(),
                    expected: "a string".to_string(),
                });
                None
            }
        }
    }

    /// Extract a non-empty list of strings, recording issues.
    fn check_string_list(
        &self,
        mapping: &serde_yaml::Mapping,
        field: &str,
        outcome: &mut FrontMatterOutcome,
    ) -> Option<Vec<String>> {
        let value = mapping.get(&Value::from(field))?;
        let Some(seq) = value.as_sequence() else {
            outcome.issues.push(FrontMatterIssue::MalformedField {
                field: field.to_string(),
                expected: "a list of strings".to_string(),
            });
            return None;
        };
        if seq.is_empty() {
            outcome.issues.push(FrontMatterIssue::EmptyField {
                field: field.to_string(),
            });
            return None;
        }
        let mut items = Vec::with_capacity(seq.len());
        for item in seq {
            match item.as_str() {
                Some(s) if !s.trim().is_empty() => items.push(s.to_string()),
                _ => {
                    outcome.issues.push(FrontMatterIssue::MalformedField {
                        field: field.to_string(),
                        expected: "a list of non-empty strings".to_string(),
                    });
                    return None;
                }
            }
        }
        Some(items)
    }

    /// Extract a boolean field, recording issues.
    fn check_bool(
        &self,
        mapping: &serde_yaml::Mapping,
        field: &str,
        outcome: &mut FrontMatterOutcome,
    ) -> Option<bool> {
        let value = mapping.get(&Value::from(field))?;
        match value.as_bool() {
            Some(b) => Some(b),
            None => {
                outcome.issues.push(FrontMatterIssue::MalformedField {
                    field: field.to_string(),
                    expected: "a boolean".to_string(),
                });
                None
            }
        }
    }

    /// Extract and validate the `date` field.
    ///
    /// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 datetime (the
    /// form static-site generators write). The date must not be after
    /// today.
    fn check_date(
        &self,
        mapping: &serde_yaml::Mapping,
        outcome: &mut FrontMatterOutcome,
    ) -> Option<NaiveDate> {
        let value = mapping.get(&Value::from("date"))?;
        let Some(raw) = value.as_str() else {
            outcome.issues.push(FrontMatterIssue::MalformedField {
                field: "date".to_string(),
                expected: "a date string".to_string(),
            });
            return None;
        };

        let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .ok()
                    .map(|dt| dt.date_naive())
            });

        let Some(date) = parsed else {
            outcome.issues.push(FrontMatterIssue::InvalidDate {
                value: raw.to_string(),
                reason: "not a YYYY-MM-DD date or RFC 3339 datetime".to_string(),
            });
            return None;
        };

        if date > self.today {
            outcome.issues.push(FrontMatterIssue::InvalidDate {
                value: raw.to_string(),
                reason: format!("date is in the future (today is {})", self.today),
            });
            return None;
        }

        Some(date)
    }
}
