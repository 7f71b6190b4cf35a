/// Email send proxy: validate, resolve Mailjet credentials, forward to the
/// transactional-email service, best-effort mark the record sent.
use crate::clients::mailer::{MailerClient, OutboundEmail};
use crate::error::ApiError;
use crate::models::EmailStatus;
use crate::services::{credential_service, email_service};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SendRequest {
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub to_email: Option<String>,
    pub to_name: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<String>,
    pub email_id: Option<String>,
}

/// Request with every required field present and non-empty.
#[derive(Debug, Clone)]
pub struct ValidatedSend {
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
    pub user_id: String,
    pub email_id: Option<String>,
}

impl SendRequest {
    /// Fail fast on the first missing field, naming it. No external call is
    /// attempted for an incomplete request.
    pub fn validate(self) -> Result<ValidatedSend, ApiError> {
        fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
            match value {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(ApiError::Validation(name.to_string())),
            }
        }

        Ok(ValidatedSend {
            from_email: required(self.from_email, "from_email")?,
            from_name: required(self.from_name, "from_name")?,
            to_email: required(self.to_email, "to_email")?,
            to_name: required(self.to_name, "to_name")?,
            subject: required(self.subject, "subject")?,
            body: required(self.body, "body")?,
            user_id: required(self.user_id, "user_id")?,
            email_id: self.email_id,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    pub message: String,
    pub email_result: serde_json::Value,
}

pub async fn send_email(
    pool: &SqlitePool,
    mailer: &MailerClient,
    req: SendRequest,
) -> Result<SendResponse, ApiError> {
    let req = req.validate()?;

    let keys = credential_service::get_api_keys(pool, &req.user_id)
        .await
        .map_err(ApiError::Internal)?
        .filter(|k| k.is_configured())
        .ok_or(ApiError::CredentialsMissing)?;

    // Body goes through byte-for-byte; HTML stays intact.
    let payload = OutboundEmail {
        from_email: req.from_email,
        from_name: req.from_name,
        to_email: req.to_email,
        to_name: req.to_name,
        subject: req.subject,
        body: req.body,
        mailjet_api_key: keys.mailjet_api_key,
        mailjet_api_secret: keys.mailjet_secret_key,
    };

    let email_result = mailer.send(&payload).await.map_err(ApiError::UpstreamSend)?;

    // The email is already out; a failed status update must not turn the
    // overall result into a failure.
    if let Some(email_id) = req.email_id.as_deref() {
        match email_service::set_status(pool, email_id, EmailStatus::Sent).await {
            Ok(true) => tracing::info!(email_id, "email status updated to sent"),
            Ok(false) => tracing::warn!(email_id, "no email row matched for post-send update"),
            Err(e) => tracing::error!(email_id, error = %e, "post-send status update failed"),
        }
    } else {
        tracing::debug!("no email_id provided, skipping status update");
    }

    Ok(SendResponse {
        message: "Email sent successfully!".to_string(),
        email_result,
    })
}
