use serde::{Deserialize, Serialize};

/// A named outbound-email initiative. The company/representative fields feed
/// the generation prompt as template context.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub representative_name: Option<String>,
    pub representative_role: Option<String>,
    pub representative_email: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}
