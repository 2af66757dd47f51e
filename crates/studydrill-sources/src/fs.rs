//! Filesystem document source.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use studydrill_core::error::DocumentError;
use studydrill_core::traits::{DocumentRequest, DocumentSource};

/// Reads study documents from a local directory.
///
/// Documents follow the naming contract `{topic}-{language}.md` under the
/// configured directory.
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, request: &DocumentRequest) -> PathBuf {
        self.dir.join(format!("{}.md", request.document_name()))
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    fn name(&self) -> &str {
        "fs"
    }

    async fn fetch(&self, request: &DocumentRequest) -> Result<String, DocumentError> {
        let path = self.path_for(request);
        tracing::debug!("reading document from {}", path.display());

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DocumentError::NotFound {
                name: request.document_name(),
            }),
            Err(e) => Err(DocumentError::Io(format!("{}: {e}", path.display()))),
        }
    }
}
