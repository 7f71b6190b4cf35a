/// Send proxy endpoints
use crate::error::ApiError;
use crate::services::orchestrator;
use crate::services::send_service::{self, SendRequest, SendResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

/// POST /send-email - proxy a raw send request
pub async fn send_email(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    let resp = send_service::send_email(&state.pool, &state.mailer, req).await?;
    Ok(Json(resp))
}

#[derive(Debug, Deserialize)]
pub struct SendForProspectRequest {
    pub user_id: Option<String>,
}

/// POST /prospects/:id/send - send the approved email for a prospect
pub async fn send_for_prospect(
    State(state): State<AppState>,
    Path(prospect_id): Path<String>,
    Json(req): Json<SendForProspectRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    let user_id = req
        .user_id
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::Validation("user_id".into()))?;
    let resp = orchestrator::send_for_prospect(&state, &prospect_id, &user_id).await?;
    Ok(Json(resp))
}
