//! Authentication handlers: HR and candidate login, logout, registration

use axum::{
    extract::{Extension, Form},
    response::{Json, Redirect},
};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{CandidateLoginForm, HrLoginForm, RegisterForm, Role};
use super::password::{hash_password, verify_password};
use super::session::SessionKeys;
use super::validators::{normalize_email, RegistrationValidator};
use crate::common::{safe_email_log, ApiError, AppState, Validator};
use crate::storage::NewCandidate;

fn login_page(page: &str, action: &str, fields: &[&str]) -> Json<Value> {
    Json(json!({
        "page": page,
        "action": action,
        "method": "POST",
        "fields": fields,
    }))
}

/// GET /
pub async fn home() -> Redirect {
    Redirect::to("/candidate/login")
}

// ============================================================================
// HR
// ============================================================================

/// GET /hr/login
pub async fn hr_login_page() -> Json<Value> {
    login_page("hr_login", "/hr/login", &["username", "password"])
}

/// POST /hr/login
pub async fn hr_login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    jar: CookieJar,
    Form(form): Form<HrLoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let state = state_lock.read().await.clone();

    let account = state.store.find_hr_account(form.username.trim()).await?;
    let verified = match &account {
        Some(account) => verify_password(&form.password, &account.password).await,
        None => false,
    };

    match account {
        Some(account) if verified => {
            let cookie = state.session_keys.issue(Role::Hr, &account.username)?;
            info!(username = %account.username, "HR login successful");
            Ok((jar.add(cookie), Redirect::to("/hr/dashboard")))
        }
        _ => {
            warn!(username = %form.username, "HR login rejected");
            Err(ApiError::InvalidCredentials(
                "Invalid HR credentials".to_string(),
            ))
        }
    }
}

/// GET /hr/logout
pub async fn hr_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (
        jar.remove(SessionKeys::removal(Role::Hr)),
        Redirect::to("/hr/login"),
    )
}

// ============================================================================
// Candidate
// ============================================================================

/// GET /candidate/register
pub async fn candidate_register_page() -> Json<Value> {
    login_page(
        "candidate_register",
        "/candidate/register",
        &["name", "email", "password"],
    )
}

/// POST /candidate/register
pub async fn candidate_register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();

    RegistrationValidator.validate(&form).into_result()?;

    let email = normalize_email(&form.email);
    let password_hash = hash_password(&form.password).await.map_err(|e| {
        warn!(error = %e, "Password hashing failed during registration");
        ApiError::InternalServer("registration failed".to_string())
    })?;

    let candidate_id = state
        .store
        .create_candidate(NewCandidate {
            name: form.name.trim().to_string(),
            email: email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| {
            warn!(email = %safe_email_log(&email), error = %e, "Candidate registration failed");
            ApiError::from(e)
        })?;

    info!(
        candidate_id = candidate_id,
        email = %safe_email_log(&email),
        "Candidate registered"
    );

    Ok(Redirect::to("/candidate/login"))
}

/// GET /candidate/login
pub async fn candidate_login_page() -> Json<Value> {
    login_page("candidate_login", "/candidate/login", &["email", "password"])
}

/// POST /candidate/login
pub async fn candidate_login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    jar: CookieJar,
    Form(form): Form<CandidateLoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let state = state_lock.read().await.clone();

    let email = normalize_email(&form.email);
    let candidate = state.store.find_candidate_by_email(&email).await?;
    let verified = match &candidate {
        Some(candidate) => verify_password(&form.password, &candidate.password).await,
        None => false,
    };

    match candidate {
        Some(candidate) if verified => {
            let cookie = state
                .session_keys
                .issue(Role::Candidate, &candidate.id.to_string())?;
            info!(candidate_id = candidate.id, "Candidate login successful");
            Ok((jar.add(cookie), Redirect::to("/candidate/dashboard")))
        }
        _ => {
            warn!(email = %safe_email_log(&email), "Candidate login rejected");
            Err(ApiError::InvalidCredentials("Invalid credentials".to_string()))
        }
    }
}

/// GET /candidate/logout
pub async fn candidate_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (
        jar.remove(SessionKeys::removal(Role::Candidate)),
        Redirect::to("/candidate/login"),
    )
}
