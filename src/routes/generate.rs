/// Generation proxy endpoints
use crate::error::ApiError;
use crate::services::generation_service::{self, GenerationRequest, GenerationResponse};
use crate::services::orchestrator;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// POST /generate-email - proxy a raw generation request
pub async fn generate_email(
    State(state): State<AppState>,
    Json(req): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let resp = generation_service::generate_email(&state.pool, &state.generator, req).await?;
    Ok(Json(resp))
}

/// POST /prospects/:id/generate - generate from stored campaign/prospect rows
pub async fn generate_for_prospect(
    State(state): State<AppState>,
    Path(prospect_id): Path<String>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let resp = orchestrator::generate_for_prospect(&state, &prospect_id).await?;
    Ok(Json(resp))
}
