//! Question generator.
//!
//! Turns parsed [`Concept`]s into flashcards and multiple-choice questions,
//! including distractor selection. A single configuration object covers both
//! single-topic and mixed-topic generation; randomness is injected so callers
//! control determinism.

use rand::Rng;

use crate::model::{CardSide, Concept, Language, Question, QuestionKinds, SessionMode};
use crate::shuffle::{fisher_yates, sample_distinct};

/// How many distractors a choice question needs.
const DISTRACTOR_COUNT: usize = 3;

/// Generation parameters shared by single-topic and mixed-topic sessions.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Concepts to take per topic in mixed-topic generation. Clamped to the
    /// available count; single-topic generation ignores it and uses every
    /// concept.
    pub questions_per_topic: usize,
    /// Which question kinds to emit.
    pub kinds: QuestionKinds,
    /// Ordering of a mixed-topic batch.
    pub mode: SessionMode,
    /// Language for choice prompts.
    pub language: Language,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            questions_per_topic: 10,
            kinds: QuestionKinds::Both,
            mode: SessionMode::Mixed,
            language: Language::En,
        }
    }
}

/// Generate questions for a single topic, in concept order.
///
/// Every concept contributes a flashcard per populated side (when `kinds`
/// allows) and a choice question per populated side when at least three
/// distinct distractors exist among the other concepts. Empty input yields
/// empty output; shortages skip silently.
pub fn generate(
    concepts: &[Concept],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut out = Vec::new();
    let mut next_id = 0u32;
    emit_for_pool(concepts, None, config, &mut next_id, &mut out, rng);
    out
}

/// Generate a mixed-topic batch.
///
/// Takes the first `questions_per_topic` concepts of each topic (parse
/// order), tags every question with its topic, then orders the combined
/// list per `config.mode`: `Mixed` shuffles everything together,
/// `Sequential` keeps topic-grouped order.
pub fn generate_mixed(
    topics: &[(String, Vec<Concept>)],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut out = Vec::new();
    let mut next_id = 0u32;

    for (topic, concepts) in topics {
        let take = config.questions_per_topic.min(concepts.len());
        emit_for_pool(
            &concepts[..take],
            Some(topic),
            config,
            &mut next_id,
            &mut out,
            rng,
        );
    }

    if config.mode == SessionMode::Mixed {
        fisher_yates(&mut out, rng);
    }
    out
}

/// Emit questions for every concept in `pool`, using the pool itself as the
/// distractor source. IDs are consumed only for questions actually emitted.
fn emit_for_pool(
    pool: &[Concept],
    topic: Option<&str>,
    config: &GeneratorConfig,
    next_id: &mut u32,
    out: &mut Vec<Question>,
    rng: &mut impl Rng,
) {
    for (index, concept) in pool.iter().enumerate() {
        for side in [CardSide::Description, CardSide::Comparison] {
            let Some(text) = concept.side_text(side) else {
                continue;
            };

            if config.kinds.wants_flashcards() {
                let id = *next_id;
                *next_id += 1;
                out.push(Question::Flashcard {
                    id,
                    topic: topic.map(str::to_string),
                    concept: concept.name.clone(),
                    text: text.to_string(),
                    side,
                });
            }

            if config.kinds.wants_choice() {
                let candidates: Vec<String> = pool
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != index)
                    .filter_map(|(_, c)| c.side_text(side))
                    .filter(|candidate| *candidate != text)
                    .map(str::to_string)
                    .collect();

                // Fewer than three distinct distractors: skip, by policy.
                let Some(distractors) = sample_distinct(&candidates, DISTRACTOR_COUNT, rng) else {
                    continue;
                };

                let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
                options.push(text.to_string());
                options.extend(distractors);
                fisher_yates(&mut options, rng);

                let id = *next_id;
                *next_id += 1;
                out.push(Question::Choice {
                    id,
                    topic: topic.map(str::to_string),
                    concept: concept.name.clone(),
                    prompt: choice_prompt(config.language, side, &concept.name),
                    correct_answer: text.to_string(),
                    options,
                });
            }
        }
    }
}

fn choice_prompt(language: Language, side: CardSide, concept: &str) -> String {
    match (language, side) {
        (Language::En, CardSide::Description) => {
            format!("Which description matches \"{concept}\"?")
        }
        (Language::En, CardSide::Comparison) => {
            format!("Which comparison matches \"{concept}\"?")
        }
        (Language::Es, CardSide::Description) => {
            format!("¿Qué descripción corresponde a \"{concept}\"?")
        }
        (Language::Es, CardSide::Comparison) => {
            format!("¿Qué comparación corresponde a \"{concept}\"?")
        }
    }
}
