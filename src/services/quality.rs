//! Quality and word-count checker
//!
//! Assesses whether an article body meets the structural and length
//! standards:
//! - word count within the target band (warning only, never blocking)
//! - at least one fenced code block for technical categories
//! - heading levels that never jump by more than one step
//! - a detectable summary section
//!
//! The body is scanned once as a stream of pulldown-cmark events; no
//! HTML is ever rendered.

use std::collections::BTreeMap;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::config::QualityConfig;
use crate::models::Article;

/// Scores below this value are surfaced as a quality warning
pub const LOW_SCORE_THRESHOLD: u8 = 60;

/// Named checks, in report order
const CHECK_WORD_COUNT: &str = "word_count_in_range";
const CHECK_CODE_BLOCK: &str = "has_code_block";
const CHECK_HEADINGS: &str = "heading_hierarchy_valid";
const CHECK_SUMMARY: &str = "has_summary_section";

/// A heading that jumps more than one level past its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingViolation {
    /// 1-based position of the offending heading in document order
    pub position: usize,
    /// Level of the preceding heading
    pub from: u32,
    /// Level of the offending heading
    pub to: u32,
}

/// Result of assessing one article body.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    /// Overall score, 0-100
    pub score: u8,
    /// Named checks and whether each passed
    pub checks: BTreeMap<String, bool>,
    /// Human-readable remediation hints, one per failed check
    pub recommendations: Vec<String>,
    /// Heading-hierarchy violations, empty when the hierarchy is valid
    pub heading_violations: Vec<HeadingViolation>,
}

impl QualityReport {
    /// Check whether the score falls below the warning threshold
    pub fn is_low(&self) -> bool {
        self.score < LOW_SCORE_THRESHOLD
    }
}

/// Checker for article structure and length.
pub struct QualityChecker {
    config: QualityConfig,
}

impl QualityChecker {
    /// Create a checker with default settings.
    pub fn new() -> Self {
        Self {
            config: QualityConfig::default(),
        }
    }

    /// Create a checker from configuration.
    pub fn with_config(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Assess an article.
    ///
    /// Every finding here is non-blocking: publication stays allowed,
    /// the author only has to acknowledge the warnings.
    pub fn assess(&self, article: &Article) -> QualityReport {
        let scan = scan_body(&article.body);

        let mut checks = BTreeMap::new();
        let mut recommendations = Vec::new();

        // Word count: deviation beyond 20% of the midpoint target warns
        let target = (self.config.word_target_min + self.config.word_target_max) / 2;
        let low = target * 4 / 5;
        let high = target * 6 / 5;
        let word_count_ok = (low..=high).contains(&article.word_count);
        checks.insert(CHECK_WORD_COUNT.to_string(), word_count_ok);
        if !word_count_ok {
            recommendations.push(format!(
                "word count {} deviates more than 20% from the {} target; aim for {}-{}",
                article.word_count, target, low, high
            ));
        }

        // Code block: required for technical categories only
        if self.is_technical(&article.categories) {
            checks.insert(CHECK_CODE_BLOCK.to_string(), scan.has_code_block);
            if !scan.has_code_block {
                recommendations.push(
                    "technical article has no fenced code block; add a runnable example"
                        .to_string(),
                );
            }
        }

        // Heading hierarchy: a level may increase by at most one step
        let headings_ok = scan.heading_violations.is_empty();
        checks.insert(CHECK_HEADINGS.to_string(), headings_ok);
        for violation in &scan.heading_violations {
            recommendations.push(format!(
                "heading #{} jumps from level {} to level {}; insert an intermediate heading",
                violation.position, violation.from, violation.to
            ));
        }

        // Summary section detected by heading keyword
        let has_summary = scan
            .heading_texts
            .iter()
            .any(|text| self.is_summary_heading(text));
        checks.insert(CHECK_SUMMARY.to_string(), has_summary);
        if !has_summary {
            recommendations.push(
                "no summary section found; close with a 总结/小结 heading".to_string(),
            );
        }

        let passed = checks.values().filter(|ok| **ok).count();
        let score = if checks.is_empty() {
            100
        } else {
            (passed * 100 / checks.len()) as u8
        };

        QualityReport {
            score,
            checks,
            recommendations,
            heading_violations: scan.heading_violations,
        }
    }

    /// Check whether any article category is configured as technical.
    fn is_technical(&self, categories: &[String]) -> bool {
        categories.iter().any(|c| {
            self.config
                .technical_categories
                .iter()
                .any(|t| t.eq_ignore_ascii_case(c))
        })
    }

    /// Check whether a heading reads as a summary section.
    fn is_summary_heading(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.config
            .summary_keywords
            .iter()
            .any(|kw| lowered.contains(&kw.to_lowercase()))
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural facts extracted in one pass over the body.
struct BodyScan {
    has_code_block: bool,
    heading_texts: Vec<String>,
    heading_violations: Vec<HeadingViolation>,
}

/// Scan the body as pulldown-cmark events, collecting headings in
/// document order and looking for fenced code blocks.
fn scan_body(body: &str) -> BodyScan {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);

    let mut has_code_block = false;
    let mut heading_texts = Vec::new();
    let mut heading_violations = Vec::new();

    let mut in_heading = false;
    let mut current_text = String::new();
    let mut current_level: u32 = 0;
    let mut prev_level: Option<u32> = None;
    let mut position = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                has_code_block = true;
            }
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                current_text.clear();
                current_level = heading_rank(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                position += 1;
                if let Some(prev) = prev_level {
                    if current_level > prev + 1 {
                        heading_violations.push(HeadingViolation {
                            position,
                            from: prev,
                            to: current_level,
                        });
                    }
                }
                prev_level = Some(current_level);
                heading_texts.push(current_text.clone());
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                current_text.push_str(&text);
            }
            _ => {}
        }
    }

    BodyScan {
        has_code_block,
        heading_texts,
        heading_violations,
    }
}

/// Numeric rank of a heading level.
fn heading_rank(level: HeadingLevel) -> u32 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
