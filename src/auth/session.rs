//! Signed session cookies
//!
//! HR and candidate sessions are separate cookies carrying HS256 tokens, so
//! logging out of one scope leaves the other alone.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use super::models::{Claims, HrIdentity, Role};
use crate::common::ApiError;

pub const HR_COOKIE: &str = "hr_session";
pub const CANDIDATE_COOKIE: &str = "candidate_session";

impl Role {
    pub fn cookie_name(&self) -> &'static str {
        match self {
            Role::Hr => HR_COOKIE,
            Role::Candidate => CANDIDATE_COOKIE,
        }
    }
}

#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
    secure: bool,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_hours: i64, secure: bool) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
            secure,
        }
    }

    /// Builds the session cookie for `subject` in the given scope
    pub fn issue(&self, role: Role, subject: &str) -> Result<Cookie<'static>, ApiError> {
        let exp = (Utc::now() + Duration::hours(self.ttl_hours)).timestamp() as usize;
        let claims = Claims {
            sub: subject.to_string(),
            role,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            error!(error = %e, "Session token encoding failed");
            ApiError::InternalServer("session error".to_string())
        })?;

        Ok(Cookie::build((role.cookie_name(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build())
    }

    /// Cookie that clears the scope's session when added to a jar
    pub fn removal(role: Role) -> Cookie<'static> {
        Cookie::build(role.cookie_name()).path("/").build()
    }

    /// Claims of a valid, unexpired token minted for `role`
    pub fn verify(&self, token: &str, role: Role) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256)) {
            Ok(data) if data.claims.role == role => Some(data.claims),
            Ok(_) => {
                debug!(expected = ?role, "Session token presented for the wrong scope");
                None
            }
            Err(e) => {
                debug!(error = %e, scope = ?role, "Session token rejected");
                None
            }
        }
    }
}

/// Request-scoped view of who is logged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub hr: Option<HrIdentity>,
    pub candidate_id: Option<i64>,
}

impl SessionContext {
    pub fn from_jar(jar: &CookieJar, keys: &SessionKeys) -> Self {
        let hr = jar
            .get(HR_COOKIE)
            .and_then(|c| keys.verify(c.value(), Role::Hr))
            .map(|claims| HrIdentity {
                username: claims.sub,
            });

        let candidate_id = jar
            .get(CANDIDATE_COOKIE)
            .and_then(|c| keys.verify(c.value(), Role::Candidate))
            .and_then(|claims| claims.sub.parse::<i64>().ok());

        Self { hr, candidate_id }
    }
}

/// Guard for HR-scoped operations
pub fn require_hr(session: &SessionContext) -> Result<&HrIdentity, ApiError> {
    session
        .hr
        .as_ref()
        .ok_or(ApiError::NotAuthenticated { login: "/hr/login" })
}

/// Guard for candidate-scoped operations; yields the candidate id
pub fn require_candidate(session: &SessionContext) -> Result<i64, ApiError> {
    session
        .candidate_id
        .ok_or(ApiError::NotAuthenticated {
            login: "/candidate/login",
        })
}
