/// Mailjet credential settings. Key material is never serialized back out.
use crate::error::ApiError;
use crate::models::UserApiKeys;
use crate::services::credential_service;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

/// GET /settings/api-keys/:user_id
pub async fn get_api_keys(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<Json<UserApiKeys>, ApiError> {
    let keys = credential_service::get_api_keys(&pool, &user_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("API keys".into()))?;
    Ok(Json(keys))
}

#[derive(Debug, Deserialize)]
pub struct PutApiKeysRequest {
    pub mailjet_api_key: Option<String>,
    pub mailjet_secret_key: Option<String>,
}

/// PUT /settings/api-keys/:user_id
pub async fn put_api_keys(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
    Json(req): Json<PutApiKeysRequest>,
) -> Result<Json<UserApiKeys>, ApiError> {
    let api_key = req
        .mailjet_api_key
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("mailjet_api_key".into()))?;
    let secret_key = req
        .mailjet_secret_key
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("mailjet_secret_key".into()))?;

    let keys = credential_service::put_api_keys(&pool, &user_id, &api_key, &secret_key)
        .await
        .map_err(ApiError::Internal)?;
    Ok(Json(keys))
}
