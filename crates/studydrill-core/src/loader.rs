//! Async session loading pipeline.
//!
//! Coordinates the fetch → parse → generate chain for one session: every
//! topic's document is fetched concurrently, parsed into concepts, and fed
//! to the generator. Fetch failures degrade that topic to zero concepts and
//! surface as warnings — loading never fails outright, and an all-empty
//! batch is a valid zero state the caller can render distinctly.
//!
//! Rapid re-loads (a user flipping through topics) are handled with a
//! [`LoadSequencer`]: the last requested load wins, and a completed but
//! superseded load is discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use rand::Rng;

use crate::generator::{generate, generate_mixed, GeneratorConfig};
use crate::model::{Concept, Language, Question, QuestionKinds, SessionMode};
use crate::parser::parse_document;
use crate::traits::{DocumentRequest, DocumentSource};

/// Caller-facing configuration for one session load.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    /// Topics to study, in presentation order.
    pub topics: Vec<String>,
    pub language: Language,
    /// Concepts to take per topic when more than one topic is loaded.
    pub questions_per_topic: usize,
    pub kinds: QuestionKinds,
    pub mode: SessionMode,
}

impl SessionPlan {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            questions_per_topic: self.questions_per_topic,
            kinds: self.kinds,
            mode: self.mode,
            language: self.language,
        }
    }
}

/// A non-fatal problem encountered while loading a plan.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub topic: String,
    pub message: String,
}

/// A question batch ready to be wrapped in a session.
#[derive(Debug)]
pub struct LoadedBatch {
    pub questions: Vec<Question>,
    /// Topics in request order, including ones that yielded nothing.
    pub topics: Vec<String>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadedBatch {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Monotonic ticket dispenser for detecting superseded loads.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    counter: AtomicU64,
}

/// Claim on a load slot; stale once a newer ticket has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next ticket, making every earlier ticket stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket is still the most recently issued one.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket.0
    }
}

/// Turns a [`SessionPlan`] into a [`LoadedBatch`] against some source.
pub struct SessionLoader {
    source: Arc<dyn DocumentSource>,
}

impl SessionLoader {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Fetch, parse, and generate the question batch for a plan.
    ///
    /// One topic yields single-topic (untagged) generation; several topics
    /// yield a mixed batch ordered per `plan.mode`. Fetch failures and
    /// zero-concept documents are recorded as warnings, never errors.
    pub async fn load(&self, plan: &SessionPlan, rng: &mut impl Rng) -> LoadedBatch {
        let fetches = plan.topics.iter().map(|topic| {
            let request = DocumentRequest::new(topic.clone(), plan.language);
            let source = Arc::clone(&self.source);
            async move {
                let outcome = source.fetch(&request).await;
                (request, outcome)
            }
        });

        let mut warnings = Vec::new();
        let mut parsed: Vec<(String, Vec<Concept>)> = Vec::new();

        // join_all preserves request order regardless of completion order.
        for (request, outcome) in join_all(fetches).await {
            match outcome {
                Ok(text) => {
                    let concepts = parse_document(&text);
                    tracing::debug!(
                        "parsed {} concepts from {}",
                        concepts.len(),
                        request.document_name()
                    );
                    if concepts.is_empty() {
                        warnings.push(LoadWarning {
                            topic: request.topic.clone(),
                            message: "document contains no usable concepts".into(),
                        });
                    }
                    parsed.push((request.topic, concepts));
                }
                Err(e) => {
                    tracing::warn!("fetch failed for {}: {}", request.document_name(), e);
                    warnings.push(LoadWarning {
                        topic: request.topic.clone(),
                        message: e.to_string(),
                    });
                    parsed.push((request.topic, Vec::new()));
                }
            }
        }

        let config = plan.generator_config();
        let questions = match parsed.as_slice() {
            [(_, concepts)] => generate(concepts, &config, rng),
            _ => generate_mixed(&parsed, &config, rng),
        };

        LoadedBatch {
            questions,
            topics: plan.topics.clone(),
            warnings,
        }
    }

    /// Load a plan, discarding the result if another load began meanwhile.
    ///
    /// Returns `None` for superseded loads so a slow fetch can never
    /// overwrite session state built from a newer request.
    pub async fn load_latest(
        &self,
        plan: &SessionPlan,
        sequencer: &LoadSequencer,
        rng: &mut impl Rng,
    ) -> Option<LoadedBatch> {
        let ticket = sequencer.begin();
        let batch = self.load(plan, rng).await;
        if sequencer.is_current(ticket) {
            Some(batch)
        } else {
            tracing::debug!("discarding superseded load for topics {:?}", plan.topics);
            None
        }
    }
}
