//! Services layer - the checkers
//!
//! This module contains the validation and recomputation logic:
//! - Front-matter validation (presence, shape, date rules)
//! - Tag consistency against the tag library
//! - Quality and word-count assessment
//! - Statistics recomputation
//! - Content plan completion tracking

pub mod front_matter;
pub mod plan;
pub mod quality;
pub mod stats;
pub mod tags;

pub use front_matter::{FrontMatterIssue, FrontMatterOutcome, FrontMatterValidator};
pub use plan::{complete_topic, PlanError};
pub use quality::{HeadingViolation, QualityChecker, QualityReport, LOW_SCORE_THRESHOLD};
pub use stats::recompute;
pub use tags::{TagCheck, TagChecker, TagIssue, TagSuggestion};
