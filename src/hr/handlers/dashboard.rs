// src/hr/handlers/dashboard.rs

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::auth::{require_hr, SessionContext};
use crate::common::{ApiError, AppState};
use crate::hr::models::DashboardView;

/// GET /hr/dashboard - Candidate counts
pub async fn hr_dashboard(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
) -> Result<Json<DashboardView>, ApiError> {
    let hr = require_hr(&session)?;
    let state = state_lock.read().await.clone();

    info!(hr = %hr.username, "Fetching dashboard counts");

    let counts = state.store.dashboard_counts().await.map_err(|e| {
        error!(error = %e, "Database error fetching dashboard counts");
        ApiError::from(e)
    })?;

    Ok(Json(DashboardView {
        hr: hr.username.clone(),
        counts,
        last_updated: chrono::Utc::now().to_rfc3339(),
    }))
}
