//! Subcommand implementations.

pub mod init;
pub mod preview;
pub mod run;
pub mod topics;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studydrill_core::loader::SessionPlan;
use studydrill_core::model::{Language, QuestionKinds, SessionMode};
use studydrill_core::traits::DocumentSource;
use studydrill_sources::{create_source, load_config_from, SourceConfig};

/// Selection flags shared by `run` and `preview`.
#[derive(Debug, clap::Args)]
pub struct SelectionArgs {
    /// Topics to study (comma-separated)
    #[arg(long)]
    pub topics: String,

    /// Directory of study documents (overrides config)
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// Base URL serving study documents (overrides config)
    #[arg(long, conflicts_with = "docs")]
    pub base_url: Option<String>,

    /// Document language: en, es
    #[arg(long)]
    pub language: Option<Language>,

    /// Concepts per topic in multi-topic sessions
    #[arg(long)]
    pub questions_per_topic: Option<usize>,

    /// Question ordering: mixed, sequential
    #[arg(long)]
    pub mode: Option<SessionMode>,

    /// Question kinds: flashcard, choice, both
    #[arg(long)]
    pub kinds: Option<QuestionKinds>,

    /// RNG seed for reproducible shuffles and distractor draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A resolved selection: the plan, the source to load from, and where
/// report artifacts go by default.
pub struct Selection {
    pub plan: SessionPlan,
    pub source: Arc<dyn DocumentSource>,
    pub output_dir: PathBuf,
}

/// Merge CLI flags over the loaded configuration.
pub fn resolve(args: &SelectionArgs) -> Result<Selection> {
    let config = load_config_from(args.config.as_deref())?;

    let source_config = if let Some(dir) = &args.docs {
        SourceConfig::Fs { dir: dir.clone() }
    } else if let Some(base_url) = &args.base_url {
        SourceConfig::Http {
            base_url: base_url.clone(),
        }
    } else {
        config.source.clone()
    };

    let questions_per_topic = args.questions_per_topic.unwrap_or(config.questions_per_topic);
    anyhow::ensure!(
        questions_per_topic >= 1,
        "questions-per-topic must be at least 1"
    );

    let plan = SessionPlan {
        topics: parse_topics(&args.topics)?,
        language: args.language.unwrap_or(config.language),
        questions_per_topic,
        kinds: args.kinds.unwrap_or(config.kinds),
        mode: args.mode.unwrap_or(config.mode),
    };

    Ok(Selection {
        plan,
        source: Arc::from(create_source(&source_config)),
        output_dir: config.output_dir,
    })
}

/// Split a comma-separated topic list, rejecting an empty selection.
pub fn parse_topics(raw: &str) -> Result<Vec<String>> {
    let topics: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    anyhow::ensure!(!topics.is_empty(), "no topics selected");
    Ok(topics)
}

/// Seeded RNG when `--seed` was given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Topics present in a docs directory for a language, derived from the
/// `{topic}-{language}.md` naming contract.
pub fn discover_topics(dir: &Path, language: Language) -> Result<Vec<String>> {
    let suffix = format!("-{language}.md");
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut topics = Vec::new();
    for entry in entries {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(topic) = name.strip_suffix(&suffix) {
            if !topic.is_empty() {
                topics.push(topic.to_string());
            }
        }
    }
    topics.sort();
    Ok(topics)
}
