/// Prospect endpoints: single add, bulk import, list, delete
use crate::db::now_epoch;
use crate::error::ApiError;
use crate::models::Prospect;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Deserialize)]
pub struct NewProspect {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub role: Option<String>,
}

impl NewProspect {
    fn validate(&self) -> Result<(String, String, String), ApiError> {
        let name = self
            .name
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Validation("name".into()))?;
        let email = self
            .email
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Validation("email".into()))?;
        let company_name = self
            .company_name
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Validation("company_name".into()))?;
        Ok((name, email, company_name))
    }
}

async fn campaign_exists(pool: &SqlitePool, campaign_id: &str) -> Result<(), ApiError> {
    let found = sqlx::query("SELECT id FROM campaigns WHERE id = ?")
        .bind(campaign_id)
        .fetch_optional(pool)
        .await?;
    if found.is_none() {
        return Err(ApiError::NotFound("Campaign".into()));
    }
    Ok(())
}

async fn insert_prospect(
    pool: &SqlitePool,
    campaign_id: &str,
    name: &str,
    email: &str,
    company_name: &str,
    role: Option<&str>,
) -> Result<Prospect, sqlx::Error> {
    let now = now_epoch();
    let prospect = Prospect {
        id: uuid::Uuid::new_v4().to_string(),
        campaign_id: campaign_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        company_name: company_name.to_string(),
        role: role.map(|r| r.to_string()),
        created_at: now,
        updated_at: now,
    };
    sqlx::query(
        "INSERT INTO prospects (id, campaign_id, name, email, company_name, role, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&prospect.id)
    .bind(&prospect.campaign_id)
    .bind(&prospect.name)
    .bind(&prospect.email)
    .bind(&prospect.company_name)
    .bind(&prospect.role)
    .bind(prospect.created_at)
    .bind(prospect.updated_at)
    .execute(pool)
    .await?;
    Ok(prospect)
}

/// POST /campaigns/:id/prospects
pub async fn add_prospect(
    State(pool): State<SqlitePool>,
    Path(campaign_id): Path<String>,
    Json(req): Json<NewProspect>,
) -> Result<(StatusCode, Json<Prospect>), ApiError> {
    campaign_exists(&pool, &campaign_id).await?;
    let (name, email, company_name) = req.validate()?;
    let prospect = insert_prospect(
        &pool,
        &campaign_id,
        &name,
        &email,
        &company_name,
        req.role.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(prospect)))
}

#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub prospects: Vec<Prospect>,
}

/// POST /campaigns/:id/prospects/import - bulk import (CSV rows already
/// parsed client-side). Rows missing a required field are skipped, not fatal.
pub async fn import_prospects(
    State(pool): State<SqlitePool>,
    Path(campaign_id): Path<String>,
    Json(rows): Json<Vec<NewProspect>>,
) -> Result<Json<ImportResult>, ApiError> {
    campaign_exists(&pool, &campaign_id).await?;

    let mut imported = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        match row.validate() {
            Ok((name, email, company_name)) => {
                let prospect = insert_prospect(
                    &pool,
                    &campaign_id,
                    &name,
                    &email,
                    &company_name,
                    row.role.as_deref(),
                )
                .await?;
                imported.push(prospect);
            }
            Err(_) => skipped += 1,
        }
    }

    tracing::info!(campaign_id = %campaign_id, imported = imported.len(), skipped, "prospect import finished");
    Ok(Json(ImportResult {
        imported: imported.len(),
        skipped,
        prospects: imported,
    }))
}

/// GET /campaigns/:id/prospects
pub async fn list_prospects(
    State(pool): State<SqlitePool>,
    Path(campaign_id): Path<String>,
) -> Result<Json<Vec<Prospect>>, ApiError> {
    campaign_exists(&pool, &campaign_id).await?;
    let prospects = sqlx::query_as::<_, Prospect>(
        "SELECT * FROM prospects WHERE campaign_id = ? ORDER BY created_at ASC",
    )
    .bind(&campaign_id)
    .fetch_all(&pool)
    .await?;
    Ok(Json(prospects))
}

/// DELETE /prospects/:id - cascades to the prospect's email record
pub async fn delete_prospect(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM prospects WHERE id = ?")
        .bind(&id)
        .execute(&pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Prospect".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
