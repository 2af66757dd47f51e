//! Configuration loading and the source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studydrill_core::model::{Language, QuestionKinds, SessionMode};
use studydrill_core::traits::DocumentSource;

use crate::fs::FsSource;
use crate::http::HttpSource;

/// Where study documents come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Fs {
        #[serde(default = "default_docs_dir")]
        dir: PathBuf,
    },
    Http {
        base_url: String,
    },
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Fs {
            dir: default_docs_dir(),
        }
    }
}

/// Top-level studydrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudydrillConfig {
    /// Document source selection.
    #[serde(default)]
    pub source: SourceConfig,
    /// Default document language.
    #[serde(default = "default_language")]
    pub language: Language,
    /// Default concepts per topic in mixed-topic sessions.
    #[serde(default = "default_questions_per_topic")]
    pub questions_per_topic: usize,
    /// Default session ordering.
    #[serde(default = "default_mode")]
    pub mode: SessionMode,
    /// Default question kinds.
    #[serde(default = "default_kinds")]
    pub kinds: QuestionKinds,
    /// Output directory for report artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_language() -> Language {
    Language::En
}
fn default_questions_per_topic() -> usize {
    10
}
fn default_mode() -> SessionMode {
    SessionMode::Mixed
}
fn default_kinds() -> QuestionKinds {
    QuestionKinds::Both
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./studydrill-results")
}

impl Default for StudydrillConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            language: default_language(),
            questions_per_topic: default_questions_per_topic(),
            mode: default_mode(),
            kinds: default_kinds(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studydrill.toml` in the current directory
/// 2. `~/.config/studydrill/config.toml`
///
/// Environment variable override: `STUDYDRILL_DOCS_DIR` forces a filesystem
/// source rooted at that directory.
pub fn load_config() -> Result<StudydrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudydrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studydrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StudydrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudydrillConfig::default(),
    };

    if let Ok(dir) = std::env::var("STUDYDRILL_DOCS_DIR") {
        config.source = SourceConfig::Fs {
            dir: PathBuf::from(dir),
        };
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studydrill"))
}

/// Create a document source from its configuration.
pub fn create_source(config: &SourceConfig) -> Box<dyn DocumentSource> {
    match config {
        SourceConfig::Fs { dir } => Box::new(FsSource::new(dir.clone())),
        SourceConfig::Http { base_url } => Box::new(HttpSource::new(base_url)),
    }
}
