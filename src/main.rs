// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod candidates;
mod common;
mod hr;
mod logging_middleware;
mod services;
mod storage;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::{AppConfig, AppState};
use services::PdfTextExtractor;
use storage::SqliteStore;

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

pub fn app_router(shared: Arc<RwLock<AppState>>, max_upload_bytes: usize) -> Router {
    Router::new()
        // Login, registration and logout for both roles
        .merge(auth::auth_routes())
        // HR dashboard, skill registry, selection pass, candidate management
        .merge(hr::hr_routes())
        // Candidate dashboard, résumé upload, result
        .merge(candidates::candidates_routes(max_upload_bytes))
        // Request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    // ========================================================================
    // DIRECTORY SETUP
    // ========================================================================

    tokio::fs::create_dir_all(&config.resumes_dir).await?;

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool, config.reset_db).await?;

    let store = Arc::new(SqliteStore::new(pool));
    common::migrations::seed_default_hr_account(
        store.as_ref(),
        &config.hr_default_username,
        &config.hr_default_password,
    )
    .await?;

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let port = config.port;
    let max_upload_bytes = config.max_resume_bytes;
    info!(
        resumes_dir = %config.resumes_dir.display(),
        max_resume_bytes = max_upload_bytes,
        session_ttl_hours = config.session_ttl_hours,
        "Configuration loaded"
    );

    let app_state = AppState::new(config, store, Arc::new(PdfTextExtractor));
    let shared = Arc::new(RwLock::new(app_state));

    let app = app_router(shared, max_upload_bytes);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
