// src/hr/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn hr_routes() -> Router {
    Router::new()
        .route("/hr/dashboard", get(handlers::dashboard::hr_dashboard))
        // Skill registry
        .route(
            "/hr/skills",
            get(handlers::skills::list_skills).post(handlers::skills::manage_skills),
        )
        // Selection pass
        .route(
            "/hr/run_selection",
            post(handlers::selection::run_selection),
        )
        // Candidate management
        .route(
            "/hr/candidates",
            get(handlers::candidates::list_candidates),
        )
        .route(
            "/hr/delete_resume/:candidate_id",
            post(handlers::candidates::delete_resume),
        )
}
