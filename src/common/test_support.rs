//! Shared fixtures for router-level tests

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::migrations::{seed_default_hr_account, test_pool};
use super::{AppConfig, AppState};
use crate::services::extractor::{ExtractionError, TextExtractor};
use crate::storage::SqliteStore;

pub const MULTIPART_BOUNDARY: &str = "ats-test-boundary";

/// Reads "résumés" as UTF-8 text so tests can control their content
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ExtractionError::Io {
                path: path.display().to_string(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|e| ExtractionError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<RwLock<AppState>>,
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        resumes_dir: dir.path().to_path_buf(),
        session_secret: "test-secret".to_string(),
        session_ttl_hours: 1,
        cookie_secure: false,
        hr_default_username: "hr".to_string(),
        hr_default_password: "hr123".to_string(),
        max_resume_bytes: 1024 * 1024,
        reset_db: false,
        port: 0,
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let store = Arc::new(SqliteStore::new(test_pool().await));
        seed_default_hr_account(store.as_ref(), "hr", "hr123")
            .await
            .unwrap();

        let state = AppState::new(config, store, Arc::new(PlainTextExtractor));
        let max_upload = state.config.max_resume_bytes;
        let shared = Arc::new(RwLock::new(state));
        let router = crate::app_router(shared.clone(), max_upload);

        Self { router, state: shared, dir }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn upload_resume(&self, filename: &str, bytes: &[u8], cookie: Option<&str>) -> Response {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{f}\"\r\nContent-Type: application/pdf\r\n\r\n",
                b = MULTIPART_BOUNDARY,
                f = filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

        let mut builder = Request::builder()
            .method("POST")
            .uri("/candidate/dashboard")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
            );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn login_hr(&self) -> String {
        let response = self
            .post_form("/hr/login", "username=hr&password=hr123", None)
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response)
    }

    /// Registers a candidate and returns its session cookie
    pub async fn register_and_login(&self, name: &str, email: &str) -> String {
        let body = format!("name={}&email={}&password=secret1", name, email);
        let response = self.post_form("/candidate/register", &body, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let body = format!("email={}&password=secret1", email);
        let response = self.post_form("/candidate/login", &body, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response)
    }
}

/// "name=value" of the first Set-Cookie header
pub fn session_cookie(response: &Response) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets a cookie")
        .to_str()
        .unwrap();
    raw.split(';').next().unwrap().to_string()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
