// src/services/extractor.rs
//! Résumé text extraction

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Turns a stored résumé into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// PDF extraction through `pdf-extract`
///
/// Pages without a text layer contribute nothing; only a file that cannot be
/// opened or parsed at all is an error.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let shown = path.display().to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ExtractionError::Io {
                path: shown.clone(),
                source,
            })?;

        // pdf-extract is synchronous and panics on some malformed inputs
        let outcome =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

        match outcome {
            Ok(Ok(text)) => {
                debug!(path = %shown, chars = text.len(), "Extracted résumé text");
                Ok(text)
            }
            Ok(Err(e)) => Err(ExtractionError::Parse {
                path: shown,
                reason: format!("PDF extraction error: {}", e),
            }),
            Err(join_err) => Err(ExtractionError::Parse {
                path: shown,
                reason: format!("PDF extraction aborted: {}", join_err),
            }),
        }
    }
}
