use serde::{Deserialize, Serialize};

/// A target contact inside a campaign. Name, email and company name are
/// required; role is optional.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Prospect {
    pub id: String,
    pub campaign_id: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub role: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
