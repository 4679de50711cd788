// src/hr/handlers/selection.rs

use axum::{
    extract::{rejection::FormRejection, Extension, Form},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::{require_hr, SessionContext};
use crate::common::{ApiError, AppState};
use crate::hr::models::SelectionForm;
use crate::hr::validators::parse_top_n;
use crate::services::selection::{run_selection as run_pass, SelectionReport};

/// POST /hr/run_selection - Score, rank and label every candidate with a résumé
pub async fn run_selection(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
    form: Result<Form<SelectionForm>, FormRejection>,
) -> Result<Json<SelectionReport>, ApiError> {
    let hr = require_hr(&session)?;
    let Form(form) = form?;
    let top_n = parse_top_n(&form)?;
    let state = state_lock.read().await.clone();

    let _pass = state.selection_lock.lock().await;
    info!(hr = %hr.username, top_n = top_n, "Selection pass requested");

    let report = run_pass(state.store.as_ref(), state.extractor.as_ref(), top_n)
        .await
        .map_err(|e| {
            warn!(hr = %hr.username, error = %e, "Selection pass aborted");
            ApiError::from(e)
        })?;

    Ok(Json(report))
}
