// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::to_bytes;
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, Level};

use crate::common::redact_form_field;

/// Requests above this size are passed through without being logged
const MAX_LOGGED_BODY: usize = 64 * 1024;
const MAX_BUFFERED_RESPONSE: usize = 4 * 1024 * 1024;

fn is_text_body(headers: &HeaderMap) -> bool {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    content_type.starts_with("application/json")
        || content_type.starts_with("application/x-www-form-urlencoded")
}

fn is_loggable(headers: &HeaderMap) -> bool {
    let small = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(|len| len <= MAX_LOGGED_BODY)
        .unwrap_or(false);

    small && is_text_body(headers)
}

fn render_body(bytes: &[u8]) -> Option<String> {
    let body_str = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(json) => Some(
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| body_str.to_string()),
        ),
        Err(_) => Some(redact_form_field(body_str, "password")),
    }
}

/// Logs urlencoded and JSON bodies in both directions when debug logging is on.
/// Multipart uploads and password values never reach the log.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !tracing::enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let request = if is_loggable(request.headers()) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        if let Some(rendered) = render_body(&bytes) {
            debug!(
                method = %parts.method,
                uri = %parts.uri,
                request_body = %rendered,
                "Request"
            );
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(method = %request.method(), uri = %request.uri(), "Request");
        request
    };

    let response = next.run(request).await;

    if !is_text_body(response.headers()) {
        debug!(status = %response.status(), "Response");
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, MAX_BUFFERED_RESPONSE)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(rendered) = render_body(&bytes) {
        debug!(status = %parts.status, response_body = %rendered, "Response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_multipart_is_not_buffered() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=x"),
        );
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("10"));
        assert!(!is_loggable(&headers));
    }

    #[test]
    fn test_form_body_is_loggable_when_small() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("30"));
        assert!(is_loggable(&headers));

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("999999"));
        assert!(!is_loggable(&headers));
    }

    #[test]
    fn test_password_is_redacted() {
        let rendered = render_body(b"username=hr&password=hr123").unwrap();
        assert_eq!(rendered, "username=hr&password=***");
    }
}
