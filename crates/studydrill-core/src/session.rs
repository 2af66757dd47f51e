//! Quiz session state machine.
//!
//! A [`QuizSession`] owns its entire state — question list, cursor, graded
//! answers, reveal flag — so any number of sessions can coexist without
//! cross-talk. Callers drive it with discrete actions (start, reveal,
//! submit, restart); calling a method in the wrong phase is a caller bug
//! and comes back as a [`SessionError`] instead of being swallowed.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{AnswerRecord, Question, SessionPhase};
use crate::shuffle::fisher_yates;

/// Errors from driving a session in the wrong state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called with no questions to ask.
    #[error("session has no questions")]
    Empty,

    /// `start` was called while a run is already in progress.
    #[error("session is already in progress")]
    AlreadyStarted,

    /// A mid-session action was called outside `InProgress`.
    #[error("session is {phase}, not in progress")]
    NotInProgress { phase: SessionPhase },
}

/// Point-in-time view of a session for presentation layers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSnapshot {
    /// Zero-based index of the current question.
    pub index: usize,
    /// Total questions in the batch.
    pub total: usize,
    /// Correct answers so far.
    pub correct_so_far: usize,
    pub phase: SessionPhase,
    /// Whether the current flashcard's back is showing.
    pub revealed: bool,
}

/// One run through a generated question batch.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<AnswerRecord>,
    phase: SessionPhase,
    revealed: bool,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Wrap a question batch in a not-yet-started session.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            current_index: 0,
            answers: Vec::new(),
            phase: SessionPhase::NotStarted,
            revealed: false,
            started_at: None,
            completed_at: None,
        }
    }

    /// Begin (or re-begin, after completion) the run.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            return Err(SessionError::Empty);
        }
        if self.phase == SessionPhase::InProgress {
            return Err(SessionError::AlreadyStarted);
        }
        self.phase = SessionPhase::InProgress;
        self.current_index = 0;
        self.answers.clear();
        self.revealed = false;
        self.started_at = Some(now);
        self.completed_at = None;
        Ok(())
    }

    /// Toggle the current flashcard's reveal state.
    ///
    /// Display-only: never advances the cursor or records an answer. For
    /// choice questions (which self-reveal on selection) this is an accepted
    /// no-op.
    pub fn reveal_answer(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::InProgress {
            return Err(SessionError::NotInProgress { phase: self.phase });
        }
        if self
            .current_question()
            .is_some_and(Question::is_flashcard)
        {
            self.revealed = !self.revealed;
        }
        Ok(())
    }

    /// Record a graded answer for the current question and advance.
    ///
    /// Returns the phase after the step; the last answer flips the session
    /// to `Complete`.
    pub fn submit_answer(
        &mut self,
        is_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<SessionPhase, SessionError> {
        if self.phase != SessionPhase::InProgress {
            return Err(SessionError::NotInProgress { phase: self.phase });
        }
        let question = self.questions[self.current_index].clone();
        self.answers.push(AnswerRecord {
            question,
            is_correct,
            answered_at: now,
        });
        self.revealed = false;
        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.phase = SessionPhase::Complete;
            self.completed_at = Some(now);
        }
        Ok(self.phase)
    }

    /// Reset to the beginning and start again.
    ///
    /// `reshuffle` re-applies the batch shuffle to the existing question
    /// list; it never regenerates questions, so ids are unchanged.
    pub fn restart(
        &mut self,
        reshuffle: bool,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.phase = SessionPhase::NotStarted;
        if reshuffle {
            fisher_yates(&mut self.questions, rng);
        }
        self.start(now)
    }

    /// Session identifier, stable across restarts.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The question awaiting an answer, while in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            index: self.current_index,
            total: self.questions.len(),
            correct_so_far: self.answers.iter().filter(|a| a.is_correct).count(),
            phase: self.phase,
            revealed: self.revealed,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Wall-clock time from start to completion, once complete.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
