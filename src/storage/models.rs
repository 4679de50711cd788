// src/storage/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

// ============================================================================
// Account Models
// ============================================================================

#[derive(FromRow, Debug, Clone)]
pub struct HrAccount {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub resume_path: Option<String>,
    pub skill_score: Option<f64>,
    pub rank: Option<i64>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

// ============================================================================
// Status
// ============================================================================

/// Conventional candidate status labels. The column itself is free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Selected")]
    Selected,
    #[serde(rename = "Not Selected")]
    NotSelected,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::UnderReview => "Under Review",
            CandidateStatus::Selected => "Selected",
            CandidateStatus::NotSelected => "Not Selected",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Skill Registry
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub weight: f64,
}

// ============================================================================
// Selection Pass
// ============================================================================

/// A candidate with a résumé on file, as loaded at the start of a selection pass
#[derive(FromRow, Debug, Clone)]
pub struct ResumeHolder {
    pub id: i64,
    pub resume_path: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankingUpdate {
    pub candidate_id: i64,
    pub score: f64,
    pub rank: i64,
    pub status: CandidateStatus,
}

// ============================================================================
// Dashboard & Listing
// ============================================================================

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total: i64,
    pub uploaded: i64,
    pub selected: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Case-insensitive substring matched against name or email
    pub search: String,
    /// Exact status match; empty means any
    pub status: String,
}

impl CandidateFilter {
    /// Case-insensitive (full Unicode) literal substring match on name or email
    pub fn matches_text(&self, candidate: &Candidate) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || candidate.name.to_lowercase().contains(&needle)
            || candidate.email.to_lowercase().contains(&needle)
    }
}
