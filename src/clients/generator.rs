use anyhow::{bail, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Fully-populated prompt context for the external generator. Built by the
/// normalization step; no field is ever empty-absent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorPayload {
    pub company_name: String,
    pub company_description: String,
    pub campaign_description: String,
    pub company_rep_name: String,
    pub company_rep_role: String,
    pub company_rep_email: String,
    pub prospect_company_name: String,
    pub prospect_rep_name: String,
    pub prospect_rep_email: String,
    pub prospect_rep_role: String,
}

/// What the generator returns. Both fields are optional: the caller defaults
/// each one individually.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedContent {
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// HTTP client for the AI email-generation service.
#[derive(Clone)]
pub struct GeneratorClient {
    pub base_url: String,
    pub client: Client,
}

impl GeneratorClient {
    pub fn new(base_url: &str) -> Self {
        GeneratorClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Call the generator. Any failure (connect, non-2xx, bad JSON) is an Err;
    /// the fallback decision lives with the caller.
    pub async fn generate(&self, payload: &GeneratorPayload) -> Result<GeneratedContent> {
        let url = format!("{}/", self.base_url);
        let resp = self.client.post(&url).json(payload).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("generator returned {}: {}", status, text);
        }

        Ok(resp.json().await?)
    }
}
