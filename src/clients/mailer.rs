use reqwest::Client;
use serde::Serialize;

/// Wire format of the transactional-email service. The body is forwarded
/// exactly as received; HTML markup must survive untouched.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
    pub mailjet_api_key: String,
    pub mailjet_api_secret: String,
}

/// HTTP client for the transactional-email service.
#[derive(Clone)]
pub struct MailerClient {
    pub base_url: String,
    pub client: Client,
}

impl MailerClient {
    pub fn new(base_url: &str) -> Self {
        MailerClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Send one email. On failure the remote message is extracted: the JSON
    /// `error` field when parseable, the raw response text otherwise.
    pub async fn send(&self, payload: &OutboundEmail) -> Result<serde_json::Value, String> {
        let url = format!("{}/send_email", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(v) => v
                    .get("error")
                    .and_then(|e| e.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or(text),
                Err(_) => {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    }
                }
            };
            return Err(message);
        }

        resp.json().await.map_err(|e| e.to_string())
    }
}
