// src/storage/memory.rs
//! In-memory `Store` used by unit tests that don't need SQLite

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::models::*;
use super::{Store, StoreError};

#[derive(Default)]
struct Tables {
    hr_users: Vec<HrAccount>,
    candidates: Vec<Candidate>,
    skills: Vec<Skill>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn candidate_mut(&mut self, id: i64) -> Result<&mut Candidate, StoreError> {
        self.candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("candidate {}", id)))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_hr_account(&self, username: &str) -> Result<Option<HrAccount>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.hr_users.iter().find(|a| a.username == username).cloned())
    }

    async fn ensure_hr_account(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.hr_users.iter().any(|a| a.username == username) {
            return Ok(false);
        }
        let id = tables.next_id();
        tables.hr_users.push(HrAccount {
            id,
            username: username.to_string(),
            password: password_hash.to_string(),
        });
        Ok(true)
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> Result<i64, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.candidates.iter().any(|c| c.email == candidate.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let id = tables.next_id();
        tables.candidates.push(Candidate {
            id,
            name: candidate.name,
            email: candidate.email,
            password: candidate.password_hash,
            resume_path: None,
            skill_score: None,
            rank: None,
            status: CandidateStatus::UnderReview.to_string(),
        });
        Ok(id)
    }

    async fn find_candidate_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Candidate>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.candidates.iter().find(|c| c.email == email).cloned())
    }

    async fn get_candidate_by_id(&self, id: i64) -> Result<Option<Candidate>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn set_resume_path(&self, id: i64, path: &str) -> Result<Option<String>, StoreError> {
        let mut tables = self.tables.lock().await;
        let candidate = tables.candidate_mut(id)?;
        Ok(candidate.resume_path.replace(path.to_string()))
    }

    async fn clear_resume(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let candidate = tables.candidate_mut(id)?;
        candidate.resume_path = None;
        candidate.skill_score = None;
        candidate.rank = None;
        candidate.status = CandidateStatus::UnderReview.to_string();
        Ok(())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        Ok(self.tables.lock().await.skills.clone())
    }

    async fn upsert_skill(
        &self,
        id: Option<i64>,
        name: &str,
        weight: f64,
    ) -> Result<Skill, StoreError> {
        let mut tables = self.tables.lock().await;
        match id {
            Some(id) => {
                let skill = tables
                    .skills
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or_else(|| StoreError::NotFound(format!("skill {}", id)))?;
                skill.name = name.to_string();
                skill.weight = weight;
                Ok(skill.clone())
            }
            None => {
                let skill = Skill {
                    id: tables.next_id(),
                    name: name.to_string(),
                    weight,
                };
                tables.skills.push(skill.clone());
                Ok(skill)
            }
        }
    }

    async fn delete_skill(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().await;
        let before = tables.skills.len();
        tables.skills.retain(|s| s.id != id);
        Ok(tables.skills.len() != before)
    }

    async fn list_resume_holders(&self) -> Result<Vec<ResumeHolder>, StoreError> {
        let tables = self.tables.lock().await;
        let mut holders: Vec<ResumeHolder> = tables
            .candidates
            .iter()
            .filter_map(|c| {
                c.resume_path.as_ref().map(|path| ResumeHolder {
                    id: c.id,
                    resume_path: path.clone(),
                })
            })
            .collect();
        holders.sort_by_key(|h| h.id);
        Ok(holders)
    }

    async fn batch_update_ranking(&self, updates: &[RankingUpdate]) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        // validate the whole batch first so a bad id leaves nothing half-written
        for update in updates {
            tables.candidate_mut(update.candidate_id)?;
        }
        for update in updates {
            let candidate = tables.candidate_mut(update.candidate_id)?;
            candidate.skill_score = Some(update.score);
            candidate.rank = Some(update.rank);
            candidate.status = update.status.to_string();
        }
        Ok(())
    }

    async fn dashboard_counts(&self) -> Result<DashboardCounts, StoreError> {
        let tables = self.tables.lock().await;
        let count_status = |status: CandidateStatus| {
            tables
                .candidates
                .iter()
                .filter(|c| c.status == status.as_str())
                .count() as i64
        };
        Ok(DashboardCounts {
            total: tables.candidates.len() as i64,
            uploaded: tables
                .candidates
                .iter()
                .filter(|c| c.resume_path.is_some())
                .count() as i64,
            selected: count_status(CandidateStatus::Selected),
            rejected: count_status(CandidateStatus::NotSelected),
        })
    }

    async fn search_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, StoreError> {
        let tables = self.tables.lock().await;
        let mut found: Vec<Candidate> = tables
            .candidates
            .iter()
            .filter(|c| filter.matches_text(c))
            .filter(|c| filter.status.is_empty() || c.status == filter.status)
            .cloned()
            .collect();
        found.sort_by_key(|c| (c.rank.is_none(), c.rank, c.id));
        Ok(found)
    }
}
