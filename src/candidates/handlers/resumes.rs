// src/candidates/handlers/resumes.rs

use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::auth::{require_candidate, SessionContext};
use crate::candidates::models::{CandidateDashboardView, UploadResponse};
use crate::common::{ApiError, AppState};
use crate::services::resume_files::is_pdf;

/// GET /candidate/dashboard - The candidate's own record
pub async fn candidate_dashboard(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
) -> Result<Json<CandidateDashboardView>, ApiError> {
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

/// POST /candidate/dashboard - Upload a résumé (multipart field `resume`)
pub async fn upload_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate_id = require_candidate(&session)?;
    let mut multipart = multipart?;
    let state = state_lock.read().await.clone();

    info!(candidate_id = candidate_id, "Candidate uploading résumé");

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart body");
        ApiError::BadRequest("Invalid upload".to_string())
    })? {
        if field.name() != Some("resume") {
            continue;
        }

        let client_filename = field.file_name().unwrap_or("resume.pdf").to_string();

        let data = field.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read résumé upload");
            ApiError::BadRequest("Invalid file".to_string())
        })?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
        }

        if !is_pdf(&data) {
            warn!(
                candidate_id = candidate_id,
                filename = %client_filename,
                "Rejected non-PDF résumé upload"
            );
            return Err(ApiError::BadRequest(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let stored = state.resume_files.save(&data).await.map_err(|e| {
            error!(error = %e, "Failed to save résumé");
            ApiError::InternalServer("Failed to save résumé".to_string())
        })?;
        let stored_path = stored.to_string_lossy().to_string();

        let previous = match state.store.set_resume_path(candidate_id, &stored_path).await {
            Ok(previous) => previous,
            Err(e) => {
                // keep the directory free of files no record points at
                let _ = state.resume_files.remove(&stored).await;
                return Err(e.into());
            }
        };

        if let Some(old) = previous.as_deref().filter(|old| *old != stored_path) {
            if let Err(e) = state.resume_files.remove(Path::new(old)).await {
                warn!(error = %e, path = %old, "Failed to remove replaced résumé");
            }
        }

        let stored_as = stored
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        info!(
            candidate_id = candidate_id,
            filename = %client_filename,
            stored_as = %stored_as,
            bytes = data.len(),
            "Résumé uploaded successfully"
        );

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                message: "Résumé uploaded successfully".to_string(),
                stored_as,
                replaced_previous: previous.is_some(),
            }),
        ));
    }

    Err(ApiError::BadRequest("No résumé file provided".to_string()))
}
