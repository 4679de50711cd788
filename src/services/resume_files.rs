// src/services/resume_files.rs
//! On-disk résumé storage keyed by server-generated names

use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::common::generate_resume_key;

const PDF_MIME: &str = "application/pdf";
const MAX_KEY_ATTEMPTS: usize = 5;

/// True when the bytes carry a PDF signature
pub fn is_pdf(bytes: &[u8]) -> bool {
    infer::get(bytes)
        .map(|kind| kind.mime_type() == PDF_MIME)
        .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct ResumeFiles {
    dir: PathBuf,
}

impl ResumeFiles {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writes the bytes under a fresh `R_XXXXXXXX.pdf` name and returns the full path
    pub async fn save(&self, bytes: &[u8]) -> io::Result<PathBuf> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let path = self.dir.join(format!("{}.pdf", generate_resume_key()));

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };

            file.write_all(bytes).await?;
            file.flush().await?;
            info!(path = %path.display(), bytes = bytes.len(), "Stored résumé file");
            return Ok(path);
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "could not allocate a unique résumé file name",
        ))
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, path: &Path) -> io::Result<bool> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                info!(path = %path.display(), "Removed résumé file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Résumé file already missing");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
