// src/common/config.rs
//! Environment-driven configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_SESSION_SECRET: &str = "replace_with_strong_secret";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub resumes_dir: PathBuf,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
    pub hr_default_username: String,
    pub hr_default_password: String,
    pub max_resume_bytes: usize,
    pub reset_db: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string());
        if session_secret == DEFAULT_SESSION_SECRET {
            warn!("SESSION_SECRET not set, using the built-in default. Do not run like this in production");
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://ats.db".to_string()),
            resumes_dir: PathBuf::from(
                env::var("RESUMES_DIR").unwrap_or_else(|_| "./uploads/resumes".to_string()),
            ),
            session_secret,
            session_ttl_hours: parse_or("SESSION_TTL_HOURS", 12),
            cookie_secure: flag("COOKIE_SECURE"),
            hr_default_username: env::var("HR_DEFAULT_USERNAME")
                .unwrap_or_else(|_| "hr".to_string()),
            hr_default_password: env::var("HR_DEFAULT_PASSWORD")
                .unwrap_or_else(|_| "hr123".to_string()),
            max_resume_bytes: parse_or("MAX_RESUME_BYTES", 10 * 1024 * 1024),
            reset_db: flag("RESET_DB"),
            port: parse_or("PORT", 8080),
        }
    }
}

fn flag(key: &str) -> bool {
    env::var(key)
        .unwrap_or_else(|_| "false".to_string())
        .to_lowercase()
        == "true"
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = %key, value = %raw, default = %default, "Unparseable setting, using default");
            default
        }),
        Err(_) => default,
    }
}
