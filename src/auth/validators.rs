//! Registration form validation

use super::models::RegisterForm;
use crate::common::{ValidationResult, Validator};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct RegistrationValidator;

impl Validator<RegisterForm> for RegistrationValidator {
    fn validate(&self, data: &RegisterForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        let name = data.name.trim();
        if name.is_empty() {
            result.add_error("name", "Name is required");
        } else if name.len() > 200 {
            result.add_error("name", "Name must be less than 200 characters");
        }

        if !is_plausible_email(data.email.trim()) {
            result.add_error("email", "A valid email address is required");
        }

        if data.password.chars().count() < MIN_PASSWORD_LEN {
            result.add_error("password", "Password must be at least 6 characters");
        }

        result
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Emails are matched case-insensitively by storing them lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
