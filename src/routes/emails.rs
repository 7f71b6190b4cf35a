/// Email record endpoints: review, edit, approve, reject
use crate::error::ApiError;
use crate::models::Email;
use crate::services::email_service;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

/// GET /prospects/:id/email
pub async fn get_prospect_email(
    State(pool): State<SqlitePool>,
    Path(prospect_id): Path<String>,
) -> Result<Json<Email>, ApiError> {
    let email = email_service::find_by_prospect(&pool, &prospect_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Email".into()))?;
    Ok(Json(email))
}

#[derive(Debug, Deserialize)]
pub struct EditEmailRequest {
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// PATCH /emails/:id - edit a draft's subject/body
pub async fn edit_email(
    State(pool): State<SqlitePool>,
    Path(email_id): Path<String>,
    Json(req): Json<EditEmailRequest>,
) -> Result<Json<Email>, ApiError> {
    let email =
        email_service::edit_draft(&pool, &email_id, req.subject.as_deref(), req.body.as_deref())
            .await?;
    Ok(Json(email))
}

/// POST /emails/:id/approve
pub async fn approve_email(
    State(pool): State<SqlitePool>,
    Path(email_id): Path<String>,
) -> Result<Json<Email>, ApiError> {
    let email = email_service::approve(&pool, &email_id).await?;
    tracing::info!(email_id = %email.id, "email approved");
    Ok(Json(email))
}

/// POST /emails/:id/reject
pub async fn reject_email(
    State(pool): State<SqlitePool>,
    Path(email_id): Path<String>,
) -> Result<Json<Email>, ApiError> {
    let email = email_service::reject(&pool, &email_id).await?;
    tracing::info!(email_id = %email.id, "email rejected");
    Ok(Json(email))
}
