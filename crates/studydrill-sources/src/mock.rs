//! Mock source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use studydrill_core::error::DocumentError;
use studydrill_core::traits::{DocumentRequest, DocumentSource};

/// An in-memory document source for testing the loading pipeline without
/// touching the filesystem or network.
///
/// Documents are keyed by their full document name (`{topic}-{language}`).
pub struct MockSource {
    documents: HashMap<String, String>,
    /// Artificial per-fetch delay, for exercising stale-load handling.
    delay: Option<Duration>,
    /// Number of fetches made.
    call_count: AtomicU32,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            delay: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Register a document under its full name.
    pub fn with_document(mut self, name: &str, text: &str) -> Self {
        self.documents.insert(name.to_string(), text.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, request: &DocumentRequest) -> Result<String, DocumentError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.documents
            .get(&request.document_name())
            .cloned()
            .ok_or_else(|| DocumentError::NotFound {
                name: request.document_name(),
            })
    }
}
