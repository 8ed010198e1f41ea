//! Axum route handler for the Sourcing API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::sourcing::pipeline::{run_sourcing, SourcingResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SourcingRequest {
    #[serde(default)]
    pub job_description: Option<String>,
}

/// POST /api/v1/sourcing
///
/// Finds, scores and drafts outreach for candidates matching a job description.
pub async fn handle_sourcing(
    State(state): State<AppState>,
    payload: Result<Json<SourcingRequest>, JsonRejection>,
) -> Result<Json<SourcingResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let job_description = request
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(AppError::missing_job_description)?;

    Ok(Json(run_sourcing(&state, &job_description).await))
}
