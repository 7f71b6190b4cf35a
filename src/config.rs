use serde::Deserialize;
use std::env;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    /// Base URL of the external AI email-generation service.
    pub generator_url: String,
    /// Base URL of the external transactional-email service.
    pub mailer_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://outreach_hub.db".into());
        let http_port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3030);
        let generator_url =
            env::var("GENERATOR_URL").unwrap_or_else(|_| "http://localhost:8100".into());
        let mailer_url = env::var("MAILER_URL").unwrap_or_else(|_| "http://localhost:8100".into());

        Config {
            database_url,
            http_port,
            generator_url,
            mailer_url,
        }
    }
}
