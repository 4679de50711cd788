// src/hr/models.rs

use serde::{Deserialize, Serialize};

use crate::storage::{Candidate, DashboardCounts, Skill};

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub hr: String,
    #[serde(flatten)]
    pub counts: DashboardCounts,
    pub last_updated: String,
}

// ============================================================================
// Skill Registry
// ============================================================================

/// `POST /hr/skills` form. Every field is optional so a malformed form still
/// reaches the session guard.
#[derive(Debug, Default, Deserialize)]
pub struct SkillForm {
    pub action: Option<String>,
    pub skill_id: Option<String>,
    pub skill: Option<String>,
    pub weight: Option<String>,
}

impl SkillForm {
    pub fn is_delete(&self) -> bool {
        self.action.as_deref().map(str::trim) == Some("delete")
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsView {
    pub skills: Vec<Skill>,
}

/// What a skill form post resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum SkillCommand {
    Delete { id: i64 },
    Upsert {
        id: Option<i64>,
        name: String,
        weight: f64,
    },
}

// ============================================================================
// Selection
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SelectionForm {
    pub top_n: Option<String>,
}

// ============================================================================
// Candidate Listing
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CandidateQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListView {
    pub candidates: Vec<Candidate>,
    pub search: String,
    pub status: String,
    pub count: usize,
}
