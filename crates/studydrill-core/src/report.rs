//! Session report types with JSON persistence.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Language, SessionMode};
use crate::session::QuizSession;
use crate::statistics::{aggregate, AggregateStats, TopicStats};

/// Topics scoring below this are flagged for review.
const IMPROVE_BELOW: u8 = 70;
/// Topics scoring at or above this count as strengths.
const STRENGTH_AT: u8 = 80;

/// Whether a topic is flagged as weak or strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Improve,
    Strength,
}

/// A per-topic study recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub topic: String,
    pub pct: u8,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecommendationKind::Improve => write!(f, "Review {} ({}%)", self.topic, self.pct),
            RecommendationKind::Strength => write!(f, "Strength: {} ({}%)", self.topic, self.pct),
        }
    }
}

/// Derive recommendations from per-topic statistics.
///
/// Topics under 70% come first, weakest first; topics at 80% or above
/// follow, strongest first. The 70–79% band and topics with no answered
/// questions appear in neither list.
pub fn recommendations(stats: &AggregateStats) -> Vec<Recommendation> {
    let mut improve: Vec<Recommendation> = stats
        .per_topic
        .iter()
        .filter(|(_, s)| s.total > 0 && s.pct < IMPROVE_BELOW)
        .map(|(topic, s)| Recommendation {
            kind: RecommendationKind::Improve,
            topic: topic.clone(),
            pct: s.pct,
        })
        .collect();
    improve.sort_by_key(|r| r.pct);

    let mut strength: Vec<Recommendation> = stats
        .per_topic
        .iter()
        .filter(|(_, s)| s.total > 0 && s.pct >= STRENGTH_AT)
        .map(|(topic, s)| Recommendation {
            kind: RecommendationKind::Strength,
            topic: topic.clone(),
            pct: s.pct,
        })
        .collect();
    strength.sort_by_key(|r| std::cmp::Reverse(r.pct));

    improve.into_iter().chain(strength).collect()
}

/// A complete session report, interim or final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier the report belongs to.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Document language of the session.
    pub language: Language,
    /// Session ordering mode.
    pub mode: SessionMode,
    /// Topics studied, in selection order.
    pub topics: Vec<String>,
    /// Answered questions (the batch size for a completed run).
    pub total_questions: usize,
    pub total_correct: usize,
    pub overall_pct: u8,
    /// Per-topic breakdown; empty for single-topic sessions, whose
    /// questions carry no topic tag.
    pub per_topic: BTreeMap<String, TopicStats>,
    pub recommendations: Vec<Recommendation>,
    /// Wall-clock duration, present once the session completed.
    pub duration_ms: Option<u64>,
}

impl SessionReport {
    /// Build a report from a session's answers so far.
    ///
    /// Safe to call mid-session for an interim snapshot; the aggregation is
    /// a pure function of the recorded answers.
    pub fn from_session(
        session: &QuizSession,
        topics: &[String],
        language: Language,
        mode: SessionMode,
    ) -> Self {
        // Per-topic rows only exist when questions carry topic tags, which
        // is the mixed-topic case.
        let tagged = session.questions().iter().any(|q| q.topic().is_some());
        let stats = if tagged {
            aggregate(session.answers(), topics)
        } else {
            aggregate(session.answers(), &[])
        };
        let recommendations = recommendations(&stats);

        Self {
            id: session.id(),
            created_at: Utc::now(),
            language,
            mode,
            topics: topics.to_vec(),
            total_questions: stats.total_questions,
            total_correct: stats.total_correct,
            overall_pct: stats.overall_pct,
            per_topic: stats.per_topic,
            recommendations,
            duration_ms: session
                .duration()
                .map(|d| d.num_milliseconds().max(0) as u64),
        }
    }

    /// Plain-text recommendation lines, in report order.
    pub fn recommendation_lines(&self) -> Vec<String> {
        self.recommendations.iter().map(ToString::to_string).collect()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardSide, Question};
    use crate::statistics::percent;

    fn topic_stats(correct: usize, total: usize) -> TopicStats {
        TopicStats {
            correct,
            total,
            pct: percent(correct, total),
        }
    }

    fn stats_from(entries: &[(&str, usize, usize)]) -> AggregateStats {
        let per_topic: BTreeMap<String, TopicStats> = entries
            .iter()
            .map(|(topic, correct, total)| (topic.to_string(), topic_stats(*correct, *total)))
            .collect();
        let total_correct: usize = entries.iter().map(|(_, c, _)| c).sum();
        let total_questions: usize = entries.iter().map(|(_, _, t)| t).sum();
        AggregateStats {
            total_questions,
            total_correct,
            overall_pct: percent(total_correct, total_questions),
            per_topic,
        }
    }

    fn tagged_question(id: u32, topic: &str) -> Question {
        Question::Flashcard {
            id,
            topic: Some(topic.into()),
            concept: format!("c{id}"),
            text: "t".into(),
            side: CardSide::Description,
        }
    }

    fn untagged_question(id: u32) -> Question {
        Question::Flashcard {
            id,
            topic: None,
            concept: format!("c{id}"),
            text: "t".into(),
            side: CardSide::Description,
        }
    }

    #[test]
    fn recommendations_split_and_order_by_pct() {
        // 45% and 60% improve (ascending), 80% and 95% strength
        // (descending), 75% in neither band.
        let stats = stats_from(&[
            ("weak", 9, 20),
            ("low", 3, 5),
            ("middle", 3, 4),
            ("edge", 4, 5),
            ("best", 19, 20),
        ]);
        let recs = recommendations(&stats);
        let rendered: Vec<String> = recs.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Review weak (45%)",
                "Review low (60%)",
                "Strength: best (95%)",
                "Strength: edge (80%)",
            ]
        );
    }

    #[test]
    fn band_boundaries() {
        let stats = stats_from(&[
            ("at69", 69, 100),
            ("at70", 70, 100),
            ("at79", 79, 100),
            ("at80", 80, 100),
        ]);
        let recs = recommendations(&stats);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].topic, "at69");
        assert_eq!(recs[0].kind, RecommendationKind::Improve);
        assert_eq!(recs[1].topic, "at80");
        assert_eq!(recs[1].kind, RecommendationKind::Strength);
    }

    #[test]
    fn unanswered_topics_are_not_recommended() {
        let stats = stats_from(&[("silent", 0, 0), ("good", 9, 10)]);
        let recs = recommendations(&stats);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].topic, "good");
    }

    #[test]
    fn from_session_mixed_fills_per_topic() {
        let questions = vec![
            tagged_question(0, "a"),
            tagged_question(1, "a"),
            tagged_question(2, "b"),
        ];
        let mut session = QuizSession::new(questions);
        session.start(Utc::now()).unwrap();
        session.submit_answer(true, Utc::now()).unwrap();
        session.submit_answer(false, Utc::now()).unwrap();
        session.submit_answer(true, Utc::now()).unwrap();

        let topics = vec!["a".to_string(), "b".to_string()];
        let report =
            SessionReport::from_session(&session, &topics, Language::En, SessionMode::Mixed);
        assert_eq!(report.total_questions, 3);
        assert_eq!(report.total_correct, 2);
        assert_eq!(report.per_topic["a"].total, 2);
        assert_eq!(report.per_topic["b"].pct, 100);
        assert!(report.duration_ms.is_some());
    }

    #[test]
    fn from_session_single_topic_has_no_per_topic_rows() {
        let mut session = QuizSession::new(vec![untagged_question(0), untagged_question(1)]);
        session.start(Utc::now()).unwrap();
        session.submit_answer(true, Utc::now()).unwrap();
        session.submit_answer(true, Utc::now()).unwrap();

        let topics = vec!["rust".to_string()];
        let report =
            SessionReport::from_session(&session, &topics, Language::En, SessionMode::Sequential);
        assert_eq!(report.overall_pct, 100);
        assert!(report.per_topic.is_empty());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.topics, topics);
    }

    #[test]
    fn interim_report_covers_answers_so_far() {
        let mut session = QuizSession::new(vec![
            tagged_question(0, "a"),
            tagged_question(1, "a"),
            tagged_question(2, "a"),
        ]);
        session.start(Utc::now()).unwrap();
        session.submit_answer(true, Utc::now()).unwrap();

        let topics = vec!["a".to_string()];
        let report =
            SessionReport::from_session(&session, &topics, Language::En, SessionMode::Mixed);
        assert_eq!(report.total_questions, 1);
        assert_eq!(report.overall_pct, 100);
        assert!(report.duration_ms.is_none(), "session never completed");
    }

    #[test]
    fn json_roundtrip() {
        let mut session = QuizSession::new(vec![tagged_question(0, "a")]);
        session.start(Utc::now()).unwrap();
        session.submit_answer(false, Utc::now()).unwrap();
        let report = SessionReport::from_session(
            &session,
            &["a".to_string()],
            Language::Es,
            SessionMode::Sequential,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("session.json");
        report.save_json(&path).unwrap();
        let loaded = SessionReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.language, Language::Es);
        assert_eq!(loaded.per_topic["a"].total, 1);
        assert_eq!(loaded.recommendation_lines(), vec!["Review a (0%)"]);
    }
}
