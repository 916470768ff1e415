//! Content plan tracker
//!
//! Completion bookkeeping for the content plan registry. Topic selection
//! itself lives on the `ContentPlan` model; this service owns the
//! pending -> completed transition and its error cases.

use chrono::NaiveDate;

use crate::models::{ContentPlan, TopicStatus};

/// Error types for content plan operations
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// No topic with the given title exists in the plan
    #[error("Topic not found in plan: {0}")]
    TopicNotFound(String),

    /// The topic was already completed; the transition is one-way
    #[error("Topic already completed: {0}")]
    AlreadyCompleted(String),
}

/// Mark a planned topic as completed.
///
/// The transition is one-way and terminal: completing an
/// already-completed topic is an error rather than a silent update, so
/// a stale completion date can never be overwritten.
///
/// # Arguments
/// * `plan` - The content plan to update
/// * `title` - Exact title of the topic
/// * `date` - Completion date to record
pub fn complete_topic(
    plan: &mut ContentPlan,
    title: &str,
    date: NaiveDate,
) -> Result<(), PlanError> {
    let topic = plan
        .find_topic_mut(title)
        .ok_or_else(|| PlanError::TopicNotFound(title.to_string()))?;

    if topic.status == TopicStatus::Completed {
        return Err(PlanError::AlreadyCompleted(title.to_string()));
    }

    topic.status = TopicStatus::Completed;
    topic.completion_date = Some(date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedTopic, Priority};

    fn plan() -> ContentPlan {
        ContentPlan::from_topics(vec![
            PlannedTopic::new("JVM 调优", Priority::P0),
            PlannedTopic::new("Redis 持久化", Priority::P1),
        ])
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    #[test]
    fn test_complete_topic() {
        let mut plan = plan();
        complete_topic(&mut plan, "JVM 调优", date()).unwrap();

        let topic = &plan.topics[0];
        assert_eq!(topic.status, TopicStatus::Completed);
        assert_eq!(topic.completion_date, Some(date()));
        assert_eq!(plan.completion_percentage(), 50.0);
    }

    #[test]
    fn test_complete_unknown_topic() {
        let mut plan = plan();
        let err = complete_topic(&mut plan, "不存在的主题", date()).unwrap_err();
        assert!(matches!(err, PlanError::TopicNotFound(_)));
    }

    #[test]
    fn test_complete_twice_is_error() {
        let mut plan = plan();
        complete_topic(&mut plan, "JVM 调优", date()).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let err = complete_topic(&mut plan, "JVM 调优", later).unwrap_err();
        assert!(matches!(err, PlanError::AlreadyCompleted(_)));
        // The original completion date is untouched
        assert_eq!(plan.topics[0].completion_date, Some(date()));
    }

    proptest::proptest! {
        /// After completing k of n topics the percentage is exact
        #[test]
        fn prop_completion_percentage_exact(n in 1usize..50, k_seed in 0usize..50) {
            let k = k_seed % (n + 1);
            let mut plan = ContentPlan::from_topics(
                (0..n).map(|i| PlannedTopic::new(format!("t{i}"), Priority::P1)).collect(),
            );
            for i in 0..k {
                complete_topic(&mut plan, &format!("t{i}"), date()).unwrap();
            }
            let expected = ((k as f64 / n as f64 * 100.0) * 100.0).round() / 100.0;
            proptest::prop_assert_eq!(plan.completion_percentage(), expected);
        }
    }
}
