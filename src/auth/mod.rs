//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - HR and candidate login/logout
//! - Candidate registration
//! - Password hashing
//! - Session cookies, the `SessionContext` extractor, and scope guards

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod session;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::auth_routes;
pub use session::{require_candidate, require_hr, SessionContext};
