// src/services/scoring.rs
//! Keyword scoring of résumé text against the skill registry
//!
//! Matching is plain case-insensitive substring containment: a skill named
//! "java" also matches "javascript", and duplicate skill rows each count.

use crate::storage::Skill;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("skill '{name}' has a non-numeric weight '{weight}'")]
    InvalidSkillWeight { name: String, weight: String },
}

/// Parses a weight as entered in the skill form
pub fn parse_weight(name: &str, raw: &str) -> Result<f64, ScoringError> {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(ScoringError::InvalidSkillWeight {
            name: name.to_string(),
            weight: raw.to_string(),
        }),
    }
}

/// Fails on the first skill whose stored weight is NaN or infinite
pub fn validate_weights(skills: &[Skill]) -> Result<(), ScoringError> {
    match skills.iter().find(|s| !s.weight.is_finite()) {
        Some(skill) => Err(ScoringError::InvalidSkillWeight {
            name: skill.name.clone(),
            weight: skill.weight.to_string(),
        }),
        None => Ok(()),
    }
}

/// Sum of the weights of every skill whose lower-cased name occurs in the
/// lower-cased résumé text, rounded to 2 decimal places
pub fn score(resume_text: &str, skills: &[Skill]) -> Result<f64, ScoringError> {
    validate_weights(skills)?;

    let haystack = resume_text.to_lowercase();
    let total: f64 = skills
        .iter()
        .filter(|skill| haystack.contains(&skill.name.to_lowercase()))
        .map(|skill| skill.weight)
        .sum();

    Ok(round2(total))
}

/// Rounds to 2 decimals; a zero result is always `+0.0`
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
