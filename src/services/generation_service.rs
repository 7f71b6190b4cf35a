/// Email generation proxy: normalize the prompt context, call the external
/// generator, fall back to a templated email when it fails, and upsert the
/// prospect's draft record.
use crate::clients::generator::{GeneratedContent, GeneratorClient, GeneratorPayload};
use crate::error::ApiError;
use crate::models::Email;
use crate::services::email_service;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Wire request. Every textual field is optional; normalization fills the
/// gaps before anything goes downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub campaign_description: Option<String>,
    pub company_rep_name: Option<String>,
    pub company_rep_role: Option<String>,
    pub company_rep_email: Option<String>,
    pub prospect_company_name: Option<String>,
    pub prospect_rep_name: Option<String>,
    pub prospect_rep_email: Option<String>,
    pub prospect_rep_role: Option<String>,
    pub prospect_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub sender_email: String,
    pub sender_name: String,
    pub prospect_name: String,
    pub prospect_email: String,
    pub prospect_company_name: String,
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_record: Option<Email>,
}

const NO_DESCRIPTION: &str = "No description provided.";

fn or_default(value: Option<String>, description_like: bool) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            if description_like {
                NO_DESCRIPTION.to_string()
            } else {
                String::new()
            }
        }
    }
}

/// Produce the fully-populated payload the generator expects. Description
/// fields default to a placeholder sentence, the rest to an empty string.
pub fn normalize(req: &GenerationRequest) -> GeneratorPayload {
    GeneratorPayload {
        company_name: or_default(req.company_name.clone(), false),
        company_description: or_default(req.company_description.clone(), true),
        campaign_description: or_default(req.campaign_description.clone(), true),
        company_rep_name: or_default(req.company_rep_name.clone(), false),
        company_rep_role: or_default(req.company_rep_role.clone(), false),
        company_rep_email: or_default(req.company_rep_email.clone(), false),
        prospect_company_name: or_default(req.prospect_company_name.clone(), false),
        prospect_rep_name: or_default(req.prospect_rep_name.clone(), false),
        prospect_rep_email: or_default(req.prospect_rep_email.clone(), false),
        prospect_rep_role: or_default(req.prospect_rep_role.clone(), false),
    }
}

pub fn fallback_subject(ctx: &GeneratorPayload) -> String {
    format!("Partnership opportunity with {}", ctx.company_name)
}

/// Deterministic templated email used whenever the generator is unavailable.
pub fn fallback_body(ctx: &GeneratorPayload) -> String {
    format!(
        "<p>Dear {prospect},</p>\
         <p>I hope this email finds you well. I'm {rep}, {role} at {company}.</p>\
         <p>{description}</p>\
         <p>I'm reaching out because I believe there might be potential synergies between our companies.</p>\
         <p>Would you be available for a brief call to discuss how we might work together?</p>\
         <p>Best regards,<br>{rep}<br>{role}<br>{company}</p>",
        prospect = ctx.prospect_rep_name,
        rep = ctx.company_rep_name,
        role = ctx.company_rep_role,
        company = ctx.company_name,
        description = ctx.company_description,
    )
}

pub async fn generate_email(
    pool: &SqlitePool,
    generator: &GeneratorClient,
    req: GenerationRequest,
) -> Result<GenerationResponse, ApiError> {
    let ctx = normalize(&req);

    // Generator failure is soft: the caller always receives something.
    let content = match generator.generate(&ctx).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "generator unavailable, using templated fallback");
            GeneratedContent {
                subject: Some(fallback_subject(&ctx)),
                body: Some(fallback_body(&ctx)),
            }
        }
    };

    let subject = content
        .subject
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_subject(&ctx));
    let body = content
        .body
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| fallback_body(&ctx));

    // Persistence failure is hard: the caller depends on the returned record.
    let email_record = match req.prospect_id.as_deref() {
        Some(prospect_id) => Some(upsert_record(pool, prospect_id, &subject, &body).await?),
        None => {
            tracing::debug!("no prospect_id provided, skipping persistence");
            None
        }
    };

    Ok(GenerationResponse {
        sender_email: ctx.company_rep_email,
        sender_name: ctx.company_rep_name,
        prospect_name: ctx.prospect_rep_name,
        prospect_email: ctx.prospect_rep_email,
        prospect_company_name: ctx.prospect_company_name,
        subject,
        body,
        email_record,
    })
}

/// Lookup-then-branch upsert. Regeneration overwrites subject/body in place
/// and resets the status to draft; the row id never changes.
async fn upsert_record(
    pool: &SqlitePool,
    prospect_id: &str,
    subject: &str,
    body: &str,
) -> Result<Email, ApiError> {
    let existing = email_service::find_by_prospect(pool, prospect_id)
        .await
        .map_err(ApiError::Internal)?;

    let record = match existing {
        Some(email) => {
            tracing::info!(email_id = %email.id, prospect_id, "updating existing email record");
            email_service::replace_content(pool, &email.id, subject, body)
                .await
                .map_err(ApiError::Internal)?
        }
        None => {
            tracing::info!(prospect_id, "creating new email record");
            email_service::insert_draft(pool, prospect_id, subject, body)
                .await
                .map_err(ApiError::Internal)?
        }
    };
    Ok(record)
}
