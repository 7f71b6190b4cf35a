#![allow(dead_code)]

use axum::Router;
use outreach_hub::clients::{GeneratorClient, MailerClient};
use outreach_hub::db::{self, now_epoch};
use outreach_hub::services::orchestrator::FlightTracker;
use outreach_hub::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

/// In-memory database. One connection so every query sees the same memory.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

pub fn test_state(pool: SqlitePool, generator_url: &str, mailer_url: &str) -> AppState {
    AppState {
        pool,
        generator: GeneratorClient::new(generator_url),
        mailer: MailerClient::new(mailer_url),
        flights: Arc::new(FlightTracker::new()),
    }
}

/// Serve a throwaway router on an ephemeral port; returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn seed_campaign(pool: &SqlitePool, id: &str, user_id: &str) {
    let now = now_epoch();
    sqlx::query(
        "INSERT INTO campaigns (
            id, user_id, name, description, company_name, company_description,
            representative_name, representative_role, representative_email,
            status, created_at, updated_at
        ) VALUES (?, ?, 'Spring outreach', 'Intro campaign', 'Acme', 'We build widgets',
                  'Bob Smith', 'CEO', 'bob@acme.com', 'active', ?, ?)",
    )
    .bind(id)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_prospect(pool: &SqlitePool, id: &str, campaign_id: &str) {
    let now = now_epoch();
    sqlx::query(
        "INSERT INTO prospects (id, campaign_id, name, email, company_name, role, created_at, updated_at)
         VALUES (?, ?, 'Jane Doe', 'jane@x.com', 'Xcorp', 'CTO', ?, ?)",
    )
    .bind(id)
    .bind(campaign_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_api_keys(pool: &SqlitePool, user_id: &str) {
    let now = now_epoch();
    sqlx::query(
        "INSERT INTO user_api_keys (id, user_id, mailjet_api_key, mailjet_secret_key, created_at, updated_at)
         VALUES (?, ?, 'mj-key', 'mj-secret', ?, ?)",
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn email_row(pool: &SqlitePool, prospect_id: &str) -> Option<(String, String, String)> {
    sqlx::query_as::<_, (String, String, String)>(
        "SELECT id, subject, status FROM emails WHERE prospect_id = ?",
    )
    .bind(prospect_id)
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn email_count(pool: &SqlitePool) -> i64 {
    sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM emails")
        .fetch_one(pool)
        .await
        .unwrap()
        .0
}
