//! Core data model types for studydrill.
//!
//! These are the fundamental types that the entire studydrill system uses
//! to represent parsed concepts, quiz questions, and recorded answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single concept extracted from a study document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Concept name, taken from the section header.
    pub name: String,
    /// Definition text. Always non-empty for concepts the parser emits.
    pub description: String,
    /// Contrast against related concepts. May be empty.
    #[serde(default)]
    pub comparison: String,
}

impl Concept {
    /// The text stored on the given flashcard side, if non-empty.
    pub fn side_text(&self, side: CardSide) -> Option<&str> {
        let text = match side {
            CardSide::Description => self.description.as_str(),
            CardSide::Comparison => self.comparison.as_str(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Supported document languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Es => write!(f, "es"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Es),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Which field of a concept a flashcard shows on its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Description,
    Comparison,
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSide::Description => write!(f, "description"),
            CardSide::Comparison => write!(f, "comparison"),
        }
    }
}

/// A generated quiz question.
///
/// `id` is unique within a generated batch and assigned in insertion order,
/// so it stays stable across later shuffles. `topic` is `Some` only for
/// questions generated in a mixed-topic session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Question {
    /// Self-graded card: show the concept name, reveal `text` on demand.
    Flashcard {
        id: u32,
        #[serde(default)]
        topic: Option<String>,
        concept: String,
        /// The description or comparison body, depending on `side`.
        text: String,
        side: CardSide,
    },
    /// Multiple choice: exactly four options containing the correct answer once.
    Choice {
        id: u32,
        #[serde(default)]
        topic: Option<String>,
        concept: String,
        prompt: String,
        correct_answer: String,
        options: Vec<String>,
    },
}

impl Question {
    /// Batch-unique question id.
    pub fn id(&self) -> u32 {
        match self {
            Question::Flashcard { id, .. } | Question::Choice { id, .. } => *id,
        }
    }

    /// Topic tag, present only in mixed-topic batches.
    pub fn topic(&self) -> Option<&str> {
        match self {
            Question::Flashcard { topic, .. } | Question::Choice { topic, .. } => topic.as_deref(),
        }
    }

    /// Name of the concept this question drills.
    pub fn concept(&self) -> &str {
        match self {
            Question::Flashcard { concept, .. } | Question::Choice { concept, .. } => concept,
        }
    }

    pub fn is_flashcard(&self) -> bool {
        matches!(self, Question::Flashcard { .. })
    }
}

/// Which question kinds to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKinds {
    Flashcard,
    Choice,
    Both,
}

impl QuestionKinds {
    pub fn wants_flashcards(&self) -> bool {
        matches!(self, QuestionKinds::Flashcard | QuestionKinds::Both)
    }

    pub fn wants_choice(&self) -> bool {
        matches!(self, QuestionKinds::Choice | QuestionKinds::Both)
    }
}

impl fmt::Display for QuestionKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKinds::Flashcard => write!(f, "flashcard"),
            QuestionKinds::Choice => write!(f, "choice"),
            QuestionKinds::Both => write!(f, "both"),
        }
    }
}

impl FromStr for QuestionKinds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flashcard" | "flashcards" => Ok(QuestionKinds::Flashcard),
            "choice" | "choices" => Ok(QuestionKinds::Choice),
            "both" | "all" => Ok(QuestionKinds::Both),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Ordering of questions in a multi-topic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// All topics shuffled together.
    Mixed,
    /// Topic-grouped, one topic after another.
    Sequential,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Mixed => write!(f, "mixed"),
            SessionMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mixed" => Ok(SessionMode::Mixed),
            "sequential" | "seq" => Ok(SessionMode::Sequential),
            other => Err(format!("unknown session mode: {other}")),
        }
    }
}

/// One graded answer. Created once per submission, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The question as it was presented.
    pub question: Question,
    /// Whether the answer was correct (self-graded for flashcards).
    pub is_correct: bool,
    /// When the answer was submitted.
    pub answered_at: DateTime<Utc>,
}

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::NotStarted => write!(f, "not started"),
            SessionPhase::InProgress => write!(f, "in progress"),
            SessionPhase::Complete => write!(f, "complete"),
        }
    }
}
