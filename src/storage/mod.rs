//! # Storage Module
//!
//! Typed repository over the three tables (HR accounts, candidates, skills).
//! Handlers and the selection engine only see the `Store` trait, so the
//! engine can be exercised against an in-memory implementation.

pub mod models;
pub mod sqlite;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

pub use models::*;
pub use sqlite::SqliteStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Not found: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_hr_account(&self, username: &str) -> Result<Option<HrAccount>, StoreError>;

    /// Inserts the account unless one with that username exists. Returns true when inserted.
    async fn ensure_hr_account(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError>;

    /// Registers a candidate with status "Under Review" and returns its id
    async fn create_candidate(&self, candidate: NewCandidate) -> Result<i64, StoreError>;

    async fn find_candidate_by_email(&self, email: &str)
        -> Result<Option<Candidate>, StoreError>;

    async fn get_candidate_by_id(&self, id: i64) -> Result<Option<Candidate>, StoreError>;

    /// Records a new résumé path and returns the one it replaced
    async fn set_resume_path(&self, id: i64, path: &str) -> Result<Option<String>, StoreError>;

    /// Clears path, score and rank and reverts status to "Under Review"
    async fn clear_resume(&self, id: i64) -> Result<(), StoreError>;

    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError>;

    /// Updates the skill when `id` is given, inserts otherwise
    async fn upsert_skill(
        &self,
        id: Option<i64>,
        name: &str,
        weight: f64,
    ) -> Result<Skill, StoreError>;

    /// Returns false when no row had that id
    async fn delete_skill(&self, id: i64) -> Result<bool, StoreError>;

    /// Candidates with a résumé on file, ascending by id
    async fn list_resume_holders(&self) -> Result<Vec<ResumeHolder>, StoreError>;

    /// Writes score, rank and status for every update atomically
    async fn batch_update_ranking(&self, updates: &[RankingUpdate]) -> Result<(), StoreError>;

    async fn dashboard_counts(&self) -> Result<DashboardCounts, StoreError>;

    async fn search_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, StoreError>;
}
