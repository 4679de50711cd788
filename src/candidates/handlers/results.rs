// src/candidates/handlers/results.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::{require_candidate, SessionContext};
use crate::candidates::models::CandidateResultView;
use crate::common::{ApiError, AppState};

/// GET /candidate/result - Score, rank and status from the last selection pass
pub async fn candidate_result(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
) -> Result<Json<CandidateResultView>, ApiError> {
    let candidate_id = require_candidate(&session)?;
    let state = state_lock.read().await.clone();

    let candidate = state
        .store
        .get_candidate_by_id(candidate_id)
        .await?
        .ok_or(ApiError::NotAuthenticated {
            login: "/candidate/login",
        })?;

    Ok(Json(candidate.into()))
}
