// src/storage/sqlite.rs

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::*;
use super::{Store, StoreError};

const CANDIDATE_COLUMNS: &str =
    "id, name, email, password, resume_path, skill_score, rank, status";

/// `Store` backed by the application's SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

fn map_unique_violation(e: sqlx::Error) -> StoreError {
    let unique = e
        .as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false);
    if unique {
        StoreError::DuplicateEmail
    } else {
        StoreError::Database(e)
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn find_hr_account(&self, username: &str) -> Result<Option<HrAccount>, StoreError> {
        let account = sqlx::query_as::<_, HrAccount>(
            "SELECT id, username, password FROM hr_users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    async fn ensure_hr_account(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("INSERT OR IGNORE INTO hr_users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO candidates (name, email, password, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.password_hash)
        .bind(CandidateStatus::UnderReview.as_str())
        .execute(&self.db)
        .await
        .map_err(map_unique_violation)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_candidate_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Candidate>, StoreError> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {} FROM candidates WHERE email = ?",
            CANDIDATE_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(candidate)
    }

    async fn get_candidate_by_id(&self, id: i64) -> Result<Option<Candidate>, StoreError> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {} FROM candidates WHERE id = ?",
            CANDIDATE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(candidate)
    }

    async fn set_resume_path(&self, id: i64, path: &str) -> Result<Option<String>, StoreError> {
        let mut tx = self.db.begin().await?;

        let previous: Option<(Option<String>,)> =
            sqlx::query_as("SELECT resume_path FROM candidates WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let previous = match previous {
            Some((path,)) => path,
            None => return Err(StoreError::NotFound(format!("candidate {}", id))),
        };

        sqlx::query("UPDATE candidates SET resume_path = ? WHERE id = ?")
            .bind(path)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(previous)
    }

    async fn clear_resume(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET resume_path = NULL,
                skill_score = NULL,
                rank = NULL,
                status = ?
            WHERE id = ?
            "#,
        )
        .bind(CandidateStatus::UnderReview.as_str())
        .bind(id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("candidate {}", id)));
        }
        Ok(())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT id, skill_name AS name, weight FROM skills ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(skills)
    }

    async fn upsert_skill(
        &self,
        id: Option<i64>,
        name: &str,
        weight: f64,
    ) -> Result<Skill, StoreError> {
        let id = match id {
            Some(id) => {
                let result = sqlx::query("UPDATE skills SET skill_name = ?, weight = ? WHERE id = ?")
                    .bind(name)
                    .bind(weight)
                    .bind(id)
                    .execute(&self.db)
                    .await?;
                if result.rows_affected() == 0 {
                    return Err(StoreError::NotFound(format!("skill {}", id)));
                }
                id
            }
            None => sqlx::query("INSERT INTO skills (skill_name, weight) VALUES (?, ?)")
                .bind(name)
                .bind(weight)
                .execute(&self.db)
                .await?
                .last_insert_rowid(),
        };

        Ok(Skill {
            id,
            name: name.to_string(),
            weight,
        })
    }

    async fn delete_skill(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_resume_holders(&self) -> Result<Vec<ResumeHolder>, StoreError> {
        let holders = sqlx::query_as::<_, ResumeHolder>(
            "SELECT id, resume_path FROM candidates WHERE resume_path IS NOT NULL ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(holders)
    }

    async fn batch_update_ranking(&self, updates: &[RankingUpdate]) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;

        for update in updates {
            sqlx::query(
                r#"
                UPDATE candidates
                SET skill_score = ?, rank = ?, status = ?
                WHERE id = ?
                "#,
            )
            .bind(update.score)
            .bind(update.rank)
            .bind(update.status.as_str())
            .bind(update.candidate_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(updated = updates.len(), "Ranking batch committed");
        Ok(())
    }

    async fn dashboard_counts(&self) -> Result<DashboardCounts, StoreError> {
        let (total, uploaded, selected, rejected): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(resume_path),
                COALESCE(SUM(CASE WHEN status = ? THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN status = ? THEN 1 ELSE 0 END), 0)
            FROM candidates
            "#,
        )
        .bind(CandidateStatus::Selected.as_str())
        .bind(CandidateStatus::NotSelected.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(DashboardCounts {
            total,
            uploaded,
            selected,
            rejected,
        })
    }

    async fn search_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, StoreError> {
        debug!(search = %filter.search, status = %filter.status, "Searching candidates");

        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            r#"
            SELECT {}
            FROM candidates
            WHERE (? = '' OR status = ?)
            ORDER BY rank IS NULL, rank, id
            "#,
            CANDIDATE_COLUMNS
        ))
        .bind(&filter.status)
        .bind(&filter.status)
        .fetch_all(&self.db)
        .await?;

        // SQLite LIKE folds ASCII only, so the text match happens here
        let candidates = candidates
            .into_iter()
            .filter(|c| filter.matches_text(c))
            .collect();

        Ok(candidates)
    }
}
