/// Generated-email record: at most one per prospect.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    #[default]
    Draft,
    Approved,
    Sent,
    Rejected,
}

impl EmailStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "approved" => Self::Approved,
            "sent" => Self::Sent,
            "rejected" => Self::Rejected,
            _ => Self::Draft,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Sent => "sent",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Email {
    pub id: String,
    pub prospect_id: String,
    pub subject: String,
    /// HTML-capable; stored and forwarded without re-encoding.
    pub body: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Email {
    pub fn status_enum(&self) -> EmailStatus {
        EmailStatus::from_str(&self.status)
    }
}
