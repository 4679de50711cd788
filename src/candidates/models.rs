// src/candidates/models.rs

use serde::Serialize;

use crate::storage::Candidate;

#[derive(Debug, Serialize)]
pub struct CandidateDashboardView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub has_resume: bool,
    pub status: String,
}

impl From<Candidate> for CandidateDashboardView {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            email: candidate.email,
            has_resume: candidate.resume_path.is_some(),
            status: candidate.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub stored_as: String,
    pub replaced_previous: bool,
}

/// Score, rank and status as of the last selection pass
#[derive(Debug, Serialize)]
pub struct CandidateResultView {
    pub skill_score: Option<f64>,
    pub rank: Option<i64>,
    pub status: String,
}

impl From<Candidate> for CandidateResultView {
    fn from(candidate: Candidate) -> Self {
        Self {
            skill_score: candidate.skill_score,
            rank: candidate.rank,
            status: candidate.status,
        }
    }
}
