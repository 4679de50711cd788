// src/hr/handlers/skills.rs

use axum::{
    extract::{rejection::FormRejection, Extension, Form},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::{require_hr, SessionContext};
use crate::common::{ApiError, AppState};
use crate::hr::models::{SkillCommand, SkillForm, SkillsView};
use crate::hr::validators::parse_skill_form;

/// GET /hr/skills - Current skill registry
pub async fn list_skills(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
) -> Result<Json<SkillsView>, ApiError> {
    require_hr(&session)?;
    let state = state_lock.read().await.clone();

    let skills = state.store.list_skills().await?;
    Ok(Json(SkillsView { skills }))
}

/// POST /hr/skills - Create, update (`skill_id` present) or delete (`action=delete`)
pub async fn manage_skills(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: SessionContext,
    form: Result<Form<SkillForm>, FormRejection>,
) -> Result<Json<SkillsView>, ApiError> {
    let hr = require_hr(&session)?;
    let Form(form) = form?;
    let state = state_lock.read().await.clone();

    let command = parse_skill_form(&form).map_err(|e| {
        warn!(hr = %hr.username, error = %e, "Rejected skill form");
        e
    })?;

    match command {
        SkillCommand::Delete { id } => {
            if state.store.delete_skill(id).await? {
                info!(hr = %hr.username, skill_id = id, "Skill deleted");
            } else {
                return Err(ApiError::NotFound(format!("Skill {} not found", id)));
            }
        }
        SkillCommand::Upsert { id, name, weight } => {
            let skill = state.store.upsert_skill(id, &name, weight).await?;
            info!(
                hr = %hr.username,
                skill_id = skill.id,
                skill = %skill.name,
                weight = skill.weight,
                updated = id.is_some(),
                "Skill saved"
            );
        }
    }

    let skills = state.store.list_skills().await?;
    Ok(Json(SkillsView { skills }))
}
