//! Score aggregation over answered questions.
//!
//! Pure functions of the answer list: callable mid-session for an interim
//! snapshot or after completion for the final report, with identical
//! results either way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::AnswerRecord;

/// Integer percentage with round-half-up, `0` when `total` is zero.
pub fn percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u8
}

/// Correct/total counts for one topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicStats {
    pub correct: usize,
    pub total: usize,
    pub pct: u8,
}

/// Aggregate statistics across all answers of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_questions: usize,
    pub total_correct: usize,
    pub overall_pct: u8,
    /// Keyed by topic; topics listed by the caller appear even when no
    /// answer carries their tag.
    pub per_topic: BTreeMap<String, TopicStats>,
}

/// Compute overall and per-topic statistics.
///
/// Per-topic counts cover only answers tagged with that topic. Every topic
/// in `topics` gets an entry, zeroed when unanswered; tags outside the list
/// still get counted under their own key.
pub fn aggregate(answers: &[AnswerRecord], topics: &[String]) -> AggregateStats {
    let total_questions = answers.len();
    let total_correct = answers.iter().filter(|a| a.is_correct).count();

    let mut per_topic: BTreeMap<String, TopicStats> = topics
        .iter()
        .map(|topic| (topic.clone(), TopicStats::default()))
        .collect();

    for answer in answers {
        let Some(topic) = answer.question.topic() else {
            continue;
        };
        let entry = per_topic.entry(topic.to_string()).or_default();
        entry.total += 1;
        if answer.is_correct {
            entry.correct += 1;
        }
    }

    for stats in per_topic.values_mut() {
        stats.pct = percent(stats.correct, stats.total);
    }

    AggregateStats {
        total_questions,
        total_correct,
        overall_pct: percent(total_correct, total_questions),
        per_topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardSide, Question};
    use chrono::Utc;

    fn answer(topic: Option<&str>, is_correct: bool) -> AnswerRecord {
        AnswerRecord {
            question: Question::Flashcard {
                id: 0,
                topic: topic.map(str::to_string),
                concept: "c".into(),
                text: "t".into(),
                side: CardSide::Description,
            },
            is_correct,
            answered_at: Utc::now(),
        }
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(5, 8), 63);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(5, 5), 100);
        assert_eq!(percent(0, 7), 0);
    }

    #[test]
    fn percent_of_nothing_is_zero() {
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn empty_answers_zero_everything() {
        let topics = vec!["a".to_string(), "b".to_string()];
        let stats = aggregate(&[], &topics);
        assert_eq!(stats.total_questions, 0);
        assert_eq!(stats.overall_pct, 0);
        assert_eq!(stats.per_topic.len(), 2);
        for topic_stats in stats.per_topic.values() {
            assert_eq!(*topic_stats, TopicStats::default());
        }
    }

    #[test]
    fn two_of_three_is_sixty_seven() {
        let answers = vec![
            answer(Some("A"), true),
            answer(Some("A"), true),
            answer(Some("A"), false),
        ];
        let stats = aggregate(&answers, &["A".to_string()]);
        assert_eq!(stats.overall_pct, 67);
        let a = &stats.per_topic["A"];
        assert_eq!((a.correct, a.total, a.pct), (2, 3, 67));
    }

    #[test]
    fn untagged_answers_count_only_overall() {
        let answers = vec![answer(None, true), answer(Some("A"), false)];
        let stats = aggregate(&answers, &["A".to_string()]);
        assert_eq!(stats.total_questions, 2);
        assert_eq!(stats.total_correct, 1);
        assert_eq!(stats.per_topic["A"].total, 1);
    }

    #[test]
    fn listed_topics_without_answers_are_zeroed() {
        let answers = vec![answer(Some("seen"), true)];
        let topics = vec!["seen".to_string(), "unseen".to_string()];
        let stats = aggregate(&answers, &topics);
        assert_eq!(stats.per_topic["unseen"], TopicStats::default());
        assert_eq!(stats.per_topic["seen"].pct, 100);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let answers = vec![
            answer(Some("A"), true),
            answer(Some("B"), false),
            answer(Some("B"), true),
        ];
        let topics = vec!["A".to_string(), "B".to_string()];
        assert_eq!(aggregate(&answers, &topics), aggregate(&answers, &topics));
    }
}
