//! Core trait definition for document sources.
//!
//! This async trait is implemented by the `studydrill-sources` crate
//! (filesystem, HTTP, and in-memory mock).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::model::Language;

/// Request for one (topic, language) study document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// Topic identifier (e.g. "ownership").
    pub topic: String,
    /// Document language.
    pub language: Language,
}

impl DocumentRequest {
    pub fn new(topic: impl Into<String>, language: Language) -> Self {
        Self {
            topic: topic.into(),
            language,
        }
    }

    /// Deterministic document name: `"{topic}-{language}"`.
    ///
    /// This is the addressing contract shared by all sources; each source
    /// appends its own extension or path convention.
    pub fn document_name(&self) -> String {
        format!("{}-{}", self.topic, self.language)
    }
}

/// A read-only source of study documents.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable source name (e.g. "fs").
    fn name(&self) -> &str;

    /// Fetch the raw text of the requested document.
    async fn fetch(&self, request: &DocumentRequest) -> Result<String, DocumentError>;
}
