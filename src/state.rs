use crate::clients::{GeneratorClient, MailerClient};
use crate::config::Config;
use crate::services::orchestrator::FlightTracker;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared handles, constructed once at process start and passed into every
/// handler. No module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub generator: GeneratorClient,
    pub mailer: MailerClient,
    pub flights: Arc<FlightTracker>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        AppState {
            pool,
            generator: GeneratorClient::new(&config.generator_url),
            mailer: MailerClient::new(&config.mailer_url),
            flights: Arc::new(FlightTracker::new()),
        }
    }
}

impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
