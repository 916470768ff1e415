//! Content plan model
//!
//! This module provides:
//! - `Priority` enum for the P0/P1/P2 planning tiers
//! - `TopicStatus` enum for the one-way pending -> completed lifecycle
//! - `PlannedTopic` entity for a single planned article
//! - `ContentPlan` registry with tiered topic selection and completion
//!   bookkeeping

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planning priority tier, in descending order of urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Must write next
    P0,
    /// Write soon
    P1,
    /// Backlog
    P2,
}

impl Priority {
    /// All tiers in selection order
    pub const ALL: [Priority; 3] = [Priority::P0, Priority::P1, Priority::P2];

    /// Convert priority to its document label
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }

    /// Parse priority from a document label
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P0" => Some(Priority::P0),
            "P1" => Some(Priority::P1),
            "P2" => Some(Priority::P2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topic completion status.
///
/// The transition is one-way: once completed, a topic never returns to
/// pending. No in-progress state is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    /// Not yet written
    #[default]
    Pending,
    /// Written and published
    Completed,
}

/// A single planned topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedTopic {
    /// Topic title
    pub title: String,
    /// Priority tier
    pub priority: Priority,
    /// Completion status
    pub status: TopicStatus,
    /// Date the topic was completed, if it was
    pub completion_date: Option<NaiveDate>,
}

impl PlannedTopic {
    /// Create a new pending topic.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            status: TopicStatus::Pending,
            completion_date: None,
        }
    }

    /// Check whether the topic is still pending
    pub fn is_pending(&self) -> bool {
        self.status == TopicStatus::Pending
    }
}

/// The registry of planned topics.
///
/// Topics keep their document order, which doubles as FIFO order within
/// a priority tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentPlan {
    /// Planned topics in document order
    pub topics: Vec<PlannedTopic>,
}

impl ContentPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plan from a list of topics
    pub fn from_topics(topics: Vec<PlannedTopic>) -> Self {
        Self { topics }
    }

    /// Number of completed topics
    pub fn completed_count(&self) -> usize {
        self.topics
            .iter()
            .filter(|t| t.status == TopicStatus::Completed)
            .count()
    }

    /// Total number of topics
    pub fn total_count(&self) -> usize {
        self.topics.len()
    }

    /// Completion percentage, rounded to two decimals.
    ///
    /// An empty plan reports 0.00 rather than dividing by zero.
    pub fn completion_percentage(&self) -> f64 {
        if self.topics.is_empty() {
            return 0.0;
        }
        let raw = self.completed_count() as f64 / self.total_count() as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }

    /// Select the next topic to write.
    ///
    /// Pending topics are partitioned by tier; the first pending topic of
    /// the lowest-numbered non-empty tier wins. All P0 items are exhausted
    /// before any P1 is considered, and all P1 before any P2. Returns
    /// `None` when the plan is exhausted.
    pub fn next_topic(&self) -> Option<&PlannedTopic> {
        for tier in Priority::ALL {
            if let Some(topic) = self
                .topics
                .iter()
                .find(|t| t.priority == tier && t.is_pending())
            {
                return Some(topic);
            }
        }
        None
    }

    /// Find a topic by exact title
    pub fn find_topic_mut(&mut self, title: &str) -> Option<&mut PlannedTopic> {
        self.topics.iter_mut().find(|t| t.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ContentPlan {
        ContentPlan::from_topics(vec![
            PlannedTopic::new("JVM 垃圾回收调优", Priority::P0),
            PlannedTopic::new("MySQL 索引优化", Priority::P0),
            PlannedTopic::new("Redis 持久化机制", Priority::P1),
            PlannedTopic::new("Kafka 消息可靠性", Priority::P2),
        ])
    }

    #[test]
    fn test_next_topic_prefers_p0() {
        let plan = sample_plan();
        assert_eq!(plan.next_topic().unwrap().title, "JVM 垃圾回收调优");
    }

    #[test]
    fn test_next_topic_fifo_within_tier() {
        let mut plan = sample_plan();
        plan.topics[0].status = TopicStatus::Completed;
        assert_eq!(plan.next_topic().unwrap().title, "MySQL 索引优化");
    }

    #[test]
    fn test_next_topic_falls_through_tiers() {
        let mut plan = sample_plan();
        plan.topics[0].status = TopicStatus::Completed;
        plan.topics[1].status = TopicStatus::Completed;
        assert_eq!(plan.next_topic().unwrap().title, "Redis 持久化机制");
        plan.topics[2].status = TopicStatus::Completed;
        assert_eq!(plan.next_topic().unwrap().title, "Kafka 消息可靠性");
    }

    #[test]
    fn test_next_topic_exhausted() {
        let mut plan = sample_plan();
        for topic in &mut plan.topics {
            topic.status = TopicStatus::Completed;
        }
        assert!(plan.next_topic().is_none());
    }

    #[test]
    fn test_completion_percentage() {
        let mut plan = ContentPlan::from_topics(
            (0..10)
                .map(|i| PlannedTopic::new(format!("topic-{i}"), Priority::P1))
                .collect(),
        );
        for topic in plan.topics.iter_mut().take(3) {
            topic.status = TopicStatus::Completed;
        }
        assert_eq!(plan.completion_percentage(), 30.0);
    }

    #[test]
    fn test_completion_percentage_rounds_to_two_decimals() {
        let mut plan = ContentPlan::from_topics(
            (0..3)
                .map(|i| PlannedTopic::new(format!("topic-{i}"), Priority::P2))
                .collect(),
        );
        plan.topics[0].status = TopicStatus::Completed;
        // 1/3 = 33.333... -> 33.33
        assert_eq!(plan.completion_percentage(), 33.33);
    }

    #[test]
    fn test_completion_percentage_empty_plan() {
        assert_eq!(ContentPlan::new().completion_percentage(), 0.0);
    }

    #[test]
    fn test_priority_round_trip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_str(p.as_str()), Some(p));
        }
        assert_eq!(Priority::from_str("p1"), Some(Priority::P1));
        assert_eq!(Priority::from_str("P3"), None);
    }
}
