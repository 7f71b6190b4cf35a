/// Credential store accessor. Absence of a row is a normal outcome, not an
/// error; the send proxy turns it into a user-actionable message.
use crate::db::now_epoch;
use crate::models::UserApiKeys;
use anyhow::Result;
use sqlx::SqlitePool;

pub async fn get_api_keys(pool: &SqlitePool, user_id: &str) -> Result<Option<UserApiKeys>> {
    let keys = sqlx::query_as::<_, UserApiKeys>("SELECT * FROM user_api_keys WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(keys)
}

/// Upsert from the settings surface; not on the send path.
pub async fn put_api_keys(
    pool: &SqlitePool,
    user_id: &str,
    api_key: &str,
    secret_key: &str,
) -> Result<UserApiKeys> {
    let now = now_epoch();
    if let Some(existing) = get_api_keys(pool, user_id).await? {
        sqlx::query(
            "UPDATE user_api_keys SET mailjet_api_key = ?, mailjet_secret_key = ?, updated_at = ? WHERE user_id = ?",
        )
        .bind(api_key)
        .bind(secret_key)
        .bind(now)
        .bind(user_id)
        .execute(pool)
        .await?;
        return Ok(UserApiKeys {
            mailjet_api_key: api_key.to_string(),
            mailjet_secret_key: secret_key.to_string(),
            updated_at: now,
            ..existing
        });
    }

    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO user_api_keys (id, user_id, mailjet_api_key, mailjet_secret_key, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(api_key)
    .bind(secret_key)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(UserApiKeys {
        id,
        user_id: user_id.to_string(),
        mailjet_api_key: api_key.to_string(),
        mailjet_secret_key: secret_key.to_string(),
        created_at: now,
        updated_at: now,
    })
}
