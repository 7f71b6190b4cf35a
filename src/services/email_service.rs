/// Email record store: one generated email per prospect.
use crate::db::now_epoch;
use crate::error::ApiError;
use crate::models::{Email, EmailStatus};
use anyhow::Result;
use sqlx::SqlitePool;

pub async fn find_by_prospect(pool: &SqlitePool, prospect_id: &str) -> Result<Option<Email>> {
    let email = sqlx::query_as::<_, Email>("SELECT * FROM emails WHERE prospect_id = ?")
        .bind(prospect_id)
        .fetch_optional(pool)
        .await?;
    Ok(email)
}

pub async fn find_by_id(pool: &SqlitePool, email_id: &str) -> Result<Option<Email>> {
    let email = sqlx::query_as::<_, Email>("SELECT * FROM emails WHERE id = ?")
        .bind(email_id)
        .fetch_optional(pool)
        .await?;
    Ok(email)
}

/// Insert a fresh draft for a prospect.
pub async fn insert_draft(
    pool: &SqlitePool,
    prospect_id: &str,
    subject: &str,
    body: &str,
) -> Result<Email> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = now_epoch();
    sqlx::query(
        "INSERT INTO emails (id, prospect_id, subject, body, status, created_at, updated_at)
         VALUES (?, ?, ?, ?, 'draft', ?, ?)",
    )
    .bind(&id)
    .bind(prospect_id)
    .bind(subject)
    .bind(body)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Email {
        id,
        prospect_id: prospect_id.to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        status: EmailStatus::Draft.as_str().to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Replace subject/body of an existing record and force the status back to
/// draft. Regeneration must reset any prior approval.
pub async fn replace_content(
    pool: &SqlitePool,
    email_id: &str,
    subject: &str,
    body: &str,
) -> Result<Email> {
    let now = now_epoch();
    sqlx::query("UPDATE emails SET subject = ?, body = ?, status = 'draft', updated_at = ? WHERE id = ?")
        .bind(subject)
        .bind(body)
        .bind(now)
        .bind(email_id)
        .execute(pool)
        .await?;

    let email = find_by_id(pool, email_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("email {} disappeared during update", email_id))?;
    Ok(email)
}

/// Update a row's status. Returns false when no row matched.
pub async fn set_status(pool: &SqlitePool, email_id: &str, status: EmailStatus) -> Result<bool> {
    let now = now_epoch();
    let result = sqlx::query("UPDATE emails SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(now)
        .bind(email_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Edit subject/body of a draft. Only drafts are editable; approved or sent
/// content is frozen until regenerated.
pub async fn edit_draft(
    pool: &SqlitePool,
    email_id: &str,
    subject: Option<&str>,
    body: Option<&str>,
) -> Result<Email, ApiError> {
    let email = find_by_id(pool, email_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Email".into()))?;

    if email.status_enum() != EmailStatus::Draft {
        return Err(ApiError::InvalidTransition(format!(
            "Only draft emails can be edited (current status: {})",
            email.status
        )));
    }

    let new_subject = subject.map(str::to_string).unwrap_or_else(|| email.subject.clone());
    let new_body = body.map(str::to_string).unwrap_or_else(|| email.body.clone());
    let now = now_epoch();
    sqlx::query("UPDATE emails SET subject = ?, body = ?, updated_at = ? WHERE id = ?")
        .bind(&new_subject)
        .bind(&new_body)
        .bind(now)
        .bind(email_id)
        .execute(pool)
        .await?;

    Ok(Email {
        subject: new_subject,
        body: new_body,
        updated_at: now,
        ..email
    })
}

/// draft -> approved.
pub async fn approve(pool: &SqlitePool, email_id: &str) -> Result<Email, ApiError> {
    transition(pool, email_id, &[EmailStatus::Draft], EmailStatus::Approved).await
}

/// draft|approved -> rejected. A sent email can no longer be rejected.
pub async fn reject(pool: &SqlitePool, email_id: &str) -> Result<Email, ApiError> {
    transition(
        pool,
        email_id,
        &[EmailStatus::Draft, EmailStatus::Approved],
        EmailStatus::Rejected,
    )
    .await
}

async fn transition(
    pool: &SqlitePool,
    email_id: &str,
    allowed_from: &[EmailStatus],
    to: EmailStatus,
) -> Result<Email, ApiError> {
    let email = find_by_id(pool, email_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Email".into()))?;

    if !allowed_from.contains(&email.status_enum()) {
        return Err(ApiError::InvalidTransition(format!(
            "Cannot move email from '{}' to '{}'",
            email.status,
            to.as_str()
        )));
    }

    set_status(pool, email_id, to).await.map_err(ApiError::Internal)?;
    Ok(Email {
        status: to.as_str().to_string(),
        updated_at: now_epoch(),
        ..email
    })
}
