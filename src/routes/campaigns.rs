/// Campaign CRUD endpoints
use crate::db::now_epoch;
use crate::error::ApiError;
use crate::models::Campaign;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub representative_name: Option<String>,
    pub representative_role: Option<String>,
    pub representative_email: Option<String>,
}

/// POST /campaigns
pub async fn create_campaign(
    State(pool): State<SqlitePool>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    let user_id = req
        .user_id
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("user_id".into()))?;
    let name = req
        .name
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("name".into()))?;

    let now = now_epoch();
    let campaign = Campaign {
        id: uuid::Uuid::new_v4().to_string(),
        user_id,
        name,
        description: req.description,
        company_name: req.company_name,
        company_description: req.company_description,
        representative_name: req.representative_name,
        representative_role: req.representative_role,
        representative_email: req.representative_email,
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO campaigns (
            id, user_id, name, description, company_name, company_description,
            representative_name, representative_role, representative_email,
            status, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&campaign.id)
    .bind(&campaign.user_id)
    .bind(&campaign.name)
    .bind(&campaign.description)
    .bind(&campaign.company_name)
    .bind(&campaign.company_description)
    .bind(&campaign.representative_name)
    .bind(&campaign.representative_role)
    .bind(&campaign.representative_email)
    .bind(&campaign.status)
    .bind(campaign.created_at)
    .bind(campaign.updated_at)
    .execute(&pool)
    .await?;

    tracing::info!(campaign_id = %campaign.id, "campaign created");
    Ok((StatusCode::CREATED, Json(campaign)))
}

#[derive(Debug, Deserialize)]
pub struct ListCampaignsQuery {
    pub user_id: Option<String>,
}

/// GET /campaigns?user_id=...
pub async fn list_campaigns(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListCampaignsQuery>,
) -> Result<Json<Vec<Campaign>>, ApiError> {
    let campaigns = match query.user_id {
        Some(user_id) => {
            sqlx::query_as::<_, Campaign>(
                "SELECT * FROM campaigns WHERE user_id = ? ORDER BY created_at DESC",
            )
            .bind(user_id)
            .fetch_all(&pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns ORDER BY created_at DESC")
                .fetch_all(&pool)
                .await?
        }
    };
    Ok(Json(campaigns))
}

/// GET /campaigns/:id
pub async fn get_campaign(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = ?")
        .bind(&id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Campaign".into()))?;
    Ok(Json(campaign))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub representative_name: Option<String>,
    pub representative_role: Option<String>,
    pub representative_email: Option<String>,
    pub status: Option<String>,
}

/// PATCH /campaigns/:id - update mutable fields, falling back to existing values
pub async fn update_campaign(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, ApiError> {
    let existing = sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = ?")
        .bind(&id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Campaign".into()))?;

    let updated = Campaign {
        name: req.name.unwrap_or(existing.name),
        description: req.description.or(existing.description),
        company_name: req.company_name.or(existing.company_name),
        company_description: req.company_description.or(existing.company_description),
        representative_name: req.representative_name.or(existing.representative_name),
        representative_role: req.representative_role.or(existing.representative_role),
        representative_email: req.representative_email.or(existing.representative_email),
        status: req.status.unwrap_or(existing.status),
        updated_at: now_epoch(),
        ..existing
    };

    sqlx::query(
        "UPDATE campaigns SET name = ?, description = ?, company_name = ?,
         company_description = ?, representative_name = ?, representative_role = ?,
         representative_email = ?, status = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&updated.name)
    .bind(&updated.description)
    .bind(&updated.company_name)
    .bind(&updated.company_description)
    .bind(&updated.representative_name)
    .bind(&updated.representative_role)
    .bind(&updated.representative_email)
    .bind(&updated.status)
    .bind(updated.updated_at)
    .bind(&id)
    .execute(&pool)
    .await?;

    Ok(Json(updated))
}

/// DELETE /campaigns/:id - cascades to prospects and their emails
pub async fn delete_campaign(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM campaigns WHERE id = ?")
        .bind(&id)
        .execute(&pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Campaign".into()));
    }
    tracing::info!(campaign_id = %id, "campaign deleted");
    Ok(StatusCode::NO_CONTENT)
}
