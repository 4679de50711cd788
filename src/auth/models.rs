//! Authentication data models

use serde::{Deserialize, Serialize};

/// Which login scope a session cookie belongs to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Candidate,
}

/// Session token claims
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    /// HR username, or the candidate id in decimal
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrIdentity {
    pub username: String,
}

#[derive(Deserialize, Debug)]
pub struct HrLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct CandidateLoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}
