//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Password hashing
//! - Session token issue/verify and scope separation
//! - Guards
//! - Login, logout and registration over HTTP

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::{body_json, location, session_cookie, TestApp};
    use crate::common::{ApiError, Validator};
    use axum::http::{header, StatusCode};
    use axum_extra::extract::CookieJar;
    use chrono::Utc;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use models::{Claims, HrIdentity, RegisterForm, Role};
    use session::SessionKeys;

    fn jar_with(name: &'static str, value: String) -> CookieJar {
        CookieJar::new().add(axum_extra::extract::cookie::Cookie::new(name, value))
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let hash = password::hash_password("hr123").await.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(password::verify_password("hr123", &hash).await);
        assert!(!password::verify_password("hr124", &hash).await);
        assert!(!password::verify_password("hr123", "not-a-phc-string").await);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_hashing_leaves_the_runtime_responsive() {
        // on a single-threaded runtime a ticker only advances if hashing is off-thread
        let ticks = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = ticks.clone();
        let ticker = tokio::spawn(async move {
            loop {
                counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                tokio::task::yield_now().await;
            }
        });

        password::hash_password("hr123").await.unwrap();
        ticker.abort();
        assert!(ticks.load(std::sync::atomic::Ordering::SeqCst) > 0);
    }

    #[test]
    fn test_session_round_trip_per_scope() {
        let keys = SessionKeys::new("secret", 1, false);

        let hr_cookie = keys.issue(Role::Hr, "hr").unwrap();
        assert_eq!(hr_cookie.name(), "hr_session");
        assert_eq!(hr_cookie.http_only(), Some(true));

        let claims = keys.verify(hr_cookie.value(), Role::Hr).unwrap();
        assert_eq!(claims.sub, "hr");

        // an HR token is not a candidate session
        assert!(keys.verify(hr_cookie.value(), Role::Candidate).is_none());
    }

    #[test]
    fn test_session_rejects_foreign_secret_and_expiry() {
        let keys = SessionKeys::new("secret", 1, false);
        let other = SessionKeys::new("other-secret", 1, false);

        let cookie = other.issue(Role::Candidate, "7").unwrap();
        assert!(keys.verify(cookie.value(), Role::Candidate).is_none());

        let expired = encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                sub: "7".to_string(),
                role: Role::Candidate,
                exp: (Utc::now().timestamp() - 3600) as usize,
            },
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(keys.verify(&expired, Role::Candidate).is_none());
    }

    #[test]
    fn test_session_context_from_jar() {
        let keys = SessionKeys::new("secret", 1, false);

        let empty = SessionContext::from_jar(&CookieJar::new(), &keys);
        assert_eq!(empty, SessionContext::default());

        let candidate = keys.issue(Role::Candidate, "42").unwrap();
        let ctx = SessionContext::from_jar(
            &jar_with("candidate_session", candidate.value().to_string()),
            &keys,
        );
        assert_eq!(ctx.candidate_id, Some(42));
        assert!(ctx.hr.is_none());

        let garbage = SessionContext::from_jar(&jar_with("hr_session", "xyz".to_string()), &keys);
        assert!(garbage.hr.is_none());
    }

    #[test]
    fn test_guards() {
        let anonymous = SessionContext::default();
        assert!(matches!(
            require_hr(&anonymous),
            Err(ApiError::NotAuthenticated { login: "/hr/login" })
        ));
        assert!(matches!(
            require_candidate(&anonymous),
            Err(ApiError::NotAuthenticated {
                login: "/candidate/login"
            })
        ));

        let both = SessionContext {
            hr: Some(HrIdentity {
                username: "hr".to_string(),
            }),
            candidate_id: Some(3),
        };
        assert_eq!(require_hr(&both).unwrap().username, "hr");
        assert_eq!(require_candidate(&both).unwrap(), 3);
    }

    #[test]
    fn test_registration_validator() {
        let valid = RegisterForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validators::RegistrationValidator.validate(&valid).is_valid);

        let invalid = RegisterForm {
            name: "  ".to_string(),
            email: "ann@localhost".to_string(),
            password: "abc".to_string(),
        };
        let result = validators::RegistrationValidator.validate(&invalid);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[tokio::test]
    async fn test_home_redirects_to_candidate_login() {
        let app = TestApp::new().await;
        let response = app.get("/", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/candidate/login");
    }

    #[tokio::test]
    async fn test_hr_login_success_and_failure() {
        let app = TestApp::new().await;

        let response = app
            .post_form("/hr/login", "username=hr&password=wrong", None)
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_CREDENTIALS");

        let response = app
            .post_form("/hr/login", "username=nobody&password=hr123", None)
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .post_form("/hr/login", "username=hr&password=hr123", None)
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/hr/dashboard");
        assert!(session_cookie(&response).starts_with("hr_session="));
    }

    #[tokio::test]
    async fn test_hr_logout_clears_cookie() {
        let app = TestApp::new().await;
        let cookie = app.login_hr().await;

        let response = app.get("/hr/logout", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/hr/login");
        assert_eq!(session_cookie(&response), "hr_session=");
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let app = TestApp::new().await;
        let cookie = app.register_and_login("Ann", "Ann@Example.com").await;
        assert!(cookie.starts_with("candidate_session="));

        // stored lower-cased, so any casing logs in
        let response = app
            .post_form(
                "/candidate/login",
                "email=ann@example.com&password=secret1",
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/candidate/dashboard");

        let response = app
            .post_form(
                "/candidate/login",
                "email=ann@example.com&password=nope",
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let app = TestApp::new().await;
        app.register_and_login("Ann", "ann@example.com").await;

        let response = app
            .post_form(
                "/candidate/register",
                "name=Other&email=ann@example.com&password=secret2",
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_registration_is_rejected() {
        let app = TestApp::new().await;
        let response = app
            .post_form("/candidate/register", "name=&email=bad&password=1", None)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_candidate_cookie_does_not_open_hr_scope() {
        let app = TestApp::new().await;
        let cookie = app.register_and_login("Ann", "ann@example.com").await;

        let response = app.get("/hr/dashboard", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/hr/login");
    }
}
