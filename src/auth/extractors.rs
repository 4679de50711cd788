//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use super::session::SessionContext;
use crate::common::{ApiError, AppState};

/// Decodes both session cookies. Never rejects a request for missing or bad
/// cookies; handlers decide through the guards in `session`.
#[async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    error!("AppState extension missing from request");
                    ApiError::InternalServer("missing app state".to_string())
                })?;

        let keys = state_lock.read().await.session_keys.clone();
        let jar = CookieJar::from_headers(&parts.headers);

        Ok(SessionContext::from_jar(&jar, &keys))
    }
}
