//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /` - Redirect to candidate login
/// - `GET|POST /hr/login`, `GET /hr/logout`
/// - `GET|POST /candidate/register`
/// - `GET|POST /candidate/login`, `GET /candidate/logout`
pub fn auth_routes() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/hr/login",
            get(handlers::hr_login_page).post(handlers::hr_login),
        )
        .route("/hr/logout", get(handlers::hr_logout))
        .route(
            "/candidate/register",
            get(handlers::candidate_register_page).post(handlers::candidate_register),
        )
        .route(
            "/candidate/login",
            get(handlers::candidate_login_page).post(handlers::candidate_login),
        )
        .route("/candidate/logout", get(handlers::candidate_logout))
}
