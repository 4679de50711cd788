// src/hr/validators.rs

use super::models::{SelectionForm, SkillCommand, SkillForm};
use crate::common::{ApiError, ValidationResult, Validator};
use crate::services::scoring::parse_weight;

pub struct SkillFormValidator;

impl Validator<SkillForm> for SkillFormValidator {
    fn validate(&self, data: &SkillForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(raw_id) = non_empty(&data.skill_id) {
            if raw_id.parse::<i64>().is_err() {
                result.add_error("skill_id", "Skill ID must be an integer");
            }
        }

        if data.is_delete() {
            if non_empty(&data.skill_id).is_none() {
                result.add_error("skill_id", "Skill ID is required to delete a skill");
            }
        } else {
            match non_empty(&data.skill) {
                None => result.add_error("skill", "Skill name is required"),
                Some(name) if name.len() > 100 => {
                    result.add_error("skill", "Skill name must be less than 100 characters")
                }
                Some(_) => {}
            }
        }

        result
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Turns a skill form into a command; a weight that is not a finite number
/// fails with `InvalidSkillWeight`
pub fn parse_skill_form(form: &SkillForm) -> Result<SkillCommand, ApiError> {
    SkillFormValidator.validate(form).into_result()?;

    let id = non_empty(&form.skill_id).and_then(|raw| raw.parse::<i64>().ok());

    if form.is_delete() {
        // presence checked by the validator
        return id
            .map(|id| SkillCommand::Delete { id })
            .ok_or_else(|| ApiError::ValidationError("skill_id: missing".to_string()));
    }

    let name = non_empty(&form.skill).unwrap_or_default().to_string();
    let weight = parse_weight(&name, form.weight.as_deref().unwrap_or_default())?;

    Ok(SkillCommand::Upsert { id, name, weight })
}

/// `top_n` must be a non-negative integer
pub fn parse_top_n(form: &SelectionForm) -> Result<usize, ApiError> {
    let raw = form.top_n.as_deref().map(str::trim).unwrap_or_default();

    match raw.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n as usize),
        _ => {
            let mut result = ValidationResult::new();
            result.add_error("top_n", "top_n must be a non-negative integer");
            Err(result.into())
        }
    }
}
