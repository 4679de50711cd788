// src/services/selection.rs
//! Selection pass: score every résumé on file, rank, and label
//!
//! Ordering is by score descending. The sort is stable and candidates are
//! loaded in ascending id order, so equal scores keep registration order.
//! Any unreadable résumé aborts the pass before anything is written.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use super::extractor::TextExtractor;
use super::scoring::{self, ScoringError};
use crate::storage::{CandidateStatus, RankingUpdate, Store, StoreError};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentFailure {
    pub candidate_id: i64,
    pub reason: String,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate {}: {}", self.candidate_id, self.reason)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection aborted, {} résumé(s) could not be read: {}", .0.len(), join_failures(.0))]
    UnreadableDocuments(Vec<DocumentFailure>),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_failures(failures: &[DocumentFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub top_n: usize,
    pub processed: usize,
    pub selected: usize,
    pub not_selected: usize,
    pub ranking: Vec<RankingUpdate>,
}

/// Ranks `(candidate_id, score)` pairs given in load order
pub fn rank_candidates(mut scored: Vec<(i64, f64)>, top_n: usize) -> Vec<RankingUpdate> {
    // equal scores (including -0.0 against 0.0) compare Equal and keep load order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (candidate_id, score))| {
            let rank = position + 1;
            RankingUpdate {
                candidate_id,
                score,
                rank: rank as i64,
                status: if rank <= top_n {
                    CandidateStatus::Selected
                } else {
                    CandidateStatus::NotSelected
                },
            }
        })
        .collect()
}

pub async fn run_selection(
    store: &dyn Store,
    extractor: &dyn TextExtractor,
    top_n: usize,
) -> Result<SelectionReport, SelectionError> {
    let skills = store.list_skills().await?;
    scoring::validate_weights(&skills)?;

    let holders = store.list_resume_holders().await?;
    info!(
        candidates = holders.len(),
        skills = skills.len(),
        top_n = top_n,
        "Starting selection pass"
    );

    let mut scored = Vec::with_capacity(holders.len());
    let mut failures = Vec::new();

    for holder in &holders {
        match extractor.extract_text(Path::new(&holder.resume_path)).await {
            Ok(text) => scored.push((holder.id, scoring::score(&text, &skills)?)),
            Err(e) => {
                warn!(candidate_id = holder.id, error = %e, "Résumé unreadable during selection");
                failures.push(DocumentFailure {
                    candidate_id: holder.id,
                    reason: e.to_string(),
                });
            }
        }
    }

    if !failures.is_empty() {
        return Err(SelectionError::UnreadableDocuments(failures));
    }

    let ranking = rank_candidates(scored, top_n);
    store.batch_update_ranking(&ranking).await?;

    let selected = ranking
        .iter()
        .filter(|r| r.status == CandidateStatus::Selected)
        .count();

    info!(
        processed = ranking.len(),
        selected = selected,
        "Selection pass committed"
    );

    Ok(SelectionReport {
        top_n,
        processed: ranking.len(),
        selected,
        not_selected: ranking.len() - selected,
        ranking,
    })
}
