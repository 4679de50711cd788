// src/hr/handlers/candidates.rs

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::auth::{require_hr, SessionContext};
use crate::common::{ApiError, AppState};
use crate::hr::models::{CandidateListView, CandidateQuery};
use crate::storage::{CandidateFilter, CandidateStatus};

/// GET /hr/candidates?search=&status= - Candidates ordered by rank
pub async fn list_candidates(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
    Query(query): Query<CandidateQuery>,
) -> Result<Json<CandidateListView>, ApiError> {
    require_hr(&session)?;
    let state = state_lock.read().await.clone();

    let filter = CandidateFilter {
        search: query.search.unwrap_or_default().trim().to_string(),
        status: query.status.unwrap_or_default().trim().to_string(),
    };

    let candidates = state.store.search_candidates(&filter).await?;

    Ok(Json(CandidateListView {
        count: candidates.len(),
        candidates,
        search: filter.search,
        status: filter.status,
    }))
}

/// POST /hr/delete_resume/:candidate_id - Remove the stored résumé and reset the outcome
pub async fn delete_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
    Path(candidate_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let hr = require_hr(&session)?;
    let state = state_lock.read().await.clone();

    let candidate = state
        .store
        .get_candidate_by_id(candidate_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Candidate {} not found", candidate_id)))?;

    let Some(resume_path) = candidate.resume_path else {
        return Ok(Json(json!({
            "candidate_id": candidate_id,
            "message": "No résumé on file",
            "status": candidate.status,
        })));
    };

    // the row goes first so it never points at a removed file
    state.store.clear_resume(candidate_id).await?;

    if let Err(e) = state
        .resume_files
        .remove(std::path::Path::new(&resume_path))
        .await
    {
        error!(
            error = %e,
            candidate_id = candidate_id,
            path = %resume_path,
            "Failed to remove résumé file"
        );
    }

    info!(hr = %hr.username, candidate_id = candidate_id, "Résumé deleted");

    Ok(Json(json!({
        "candidate_id": candidate_id,
        "message": "Résumé deleted",
        "status": CandidateStatus::UnderReview.as_str(),
    })))
}
