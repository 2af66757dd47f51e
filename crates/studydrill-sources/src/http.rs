//! HTTP document source.

use async_trait::async_trait;
use tracing::instrument;

use studydrill_core::error::DocumentError;
use studydrill_core::traits::{DocumentRequest, DocumentSource};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches study documents over HTTP.
///
/// Documents are addressed as `{base_url}/{topic}-{language}.md`.
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(document = %request.document_name()))]
    async fn fetch(&self, request: &DocumentRequest) -> Result<String, DocumentError> {
        let url = format!("{}/{}.md", self.base_url, request.document_name());

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                DocumentError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                DocumentError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(DocumentError::NotFound {
                name: request.document_name(),
            });
        }
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DocumentError::Http { status, message });
        }

        response
            .text()
            .await
            .map_err(|e| DocumentError::Network(e.to_string()))
    }
}
