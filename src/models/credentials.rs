use serde::{Deserialize, Serialize};

/// Per-user Mailjet credentials. At most one row per user; read by the send
/// proxy, written from the settings surface.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserApiKeys {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing)]
    pub mailjet_api_key: String,
    #[serde(skip_serializing)]
    pub mailjet_secret_key: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserApiKeys {
    /// Empty key material is treated the same as a missing row.
    pub fn is_configured(&self) -> bool {
        !self.mailjet_api_key.is_empty() && !self.mailjet_secret_key.is_empty()
    }
}
