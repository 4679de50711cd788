// Application state shared across all modules

use std::sync::Arc;
use tokio::sync::Mutex;

use super::config::AppConfig;
use crate::auth::session::SessionKeys;
use crate::services::{ResumeFiles, TextExtractor};
use crate::storage::Store;

/// Application state containing the repository, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub extractor: Arc<dyn TextExtractor>,
    pub resume_files: ResumeFiles,
    pub session_keys: SessionKeys,
    /// Held for the duration of a selection pass so two passes never interleave
    pub selection_lock: Arc<Mutex<()>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn Store>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            store,
            extractor,
            resume_files: ResumeFiles::new(config.resumes_dir.clone()),
            session_keys: SessionKeys::new(
                &config.session_secret,
                config.session_ttl_hours,
                config.cookie_secure,
            ),
            selection_lock: Arc::new(Mutex::new(())),
            config,
        }
    }
}
