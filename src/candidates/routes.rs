// src/candidates/routes.rs

use crate::candidates::handlers;
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Candidate self-service routes; uploads may be up to `max_upload_bytes`
pub fn candidates_routes(max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            "/candidate/dashboard",
            get(handlers::candidate_dashboard)
                .post(handlers::upload_resume)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/candidate/result", get(handlers::candidate_result))
}
