/// Sequencing layer over the two proxies: builds requests from stored
/// Campaign + Prospect rows and enforces one in-flight operation per
/// prospect. Operations on different prospects run independently.
use crate::error::ApiError;
use crate::models::{Campaign, EmailStatus, Prospect};
use crate::services::generation_service::{self, GenerationRequest, GenerationResponse};
use crate::services::send_service::{self, SendRequest, SendResponse};
use crate::services::email_service;
use crate::state::AppState;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Tracks prospect ids with a generate-or-send operation in flight. A second
/// invocation for the same prospect is rejected, never queued.
#[derive(Default)]
pub struct FlightTracker {
    inflight: Mutex<HashSet<String>>,
}

impl FlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a prospect. Returns None when an operation is already running.
    pub fn begin(self: &Arc<Self>, prospect_id: &str) -> Option<FlightGuard> {
        let mut inflight = self.inflight.lock().unwrap();
        if !inflight.insert(prospect_id.to_string()) {
            return None;
        }
        Some(FlightGuard {
            tracker: Arc::clone(self),
            prospect_id: prospect_id.to_string(),
        })
    }

    pub fn is_busy(&self, prospect_id: &str) -> bool {
        self.inflight.lock().unwrap().contains(prospect_id)
    }
}

/// Releases the claim on drop, including on error paths.
pub struct FlightGuard {
    tracker: Arc<FlightTracker>,
    prospect_id: String,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.tracker
            .inflight
            .lock()
            .unwrap()
            .remove(&self.prospect_id);
    }
}

async fn load_prospect(state: &AppState, prospect_id: &str) -> Result<(Prospect, Campaign), ApiError> {
    let prospect = sqlx::query_as::<_, Prospect>("SELECT * FROM prospects WHERE id = ?")
        .bind(prospect_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Prospect".into()))?;

    let campaign = sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = ?")
        .bind(&prospect.campaign_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Campaign".into()))?;

    Ok((prospect, campaign))
}

/// Generate (or regenerate) the email for one prospect. Available from any
/// state; the resulting record is always a draft.
pub async fn generate_for_prospect(
    state: &AppState,
    prospect_id: &str,
) -> Result<GenerationResponse, ApiError> {
    let _guard = state
        .flights
        .begin(prospect_id)
        .ok_or_else(|| ApiError::Busy(prospect_id.to_string()))?;

    let (prospect, campaign) = load_prospect(state, prospect_id).await?;

    let req = GenerationRequest {
        company_name: campaign.company_name,
        company_description: campaign.company_description,
        campaign_description: campaign.description,
        company_rep_name: campaign.representative_name,
        company_rep_role: campaign.representative_role,
        company_rep_email: campaign.representative_email,
        prospect_company_name: Some(prospect.company_name),
        prospect_rep_name: Some(prospect.name),
        prospect_rep_email: Some(prospect.email),
        prospect_rep_role: prospect.role,
        prospect_id: Some(prospect.id),
    };

    generation_service::generate_email(&state.pool, &state.generator, req).await
}

/// Send the approved email for one prospect on behalf of the campaign's
/// representative.
pub async fn send_for_prospect(
    state: &AppState,
    prospect_id: &str,
    user_id: &str,
) -> Result<SendResponse, ApiError> {
    let _guard = state
        .flights
        .begin(prospect_id)
        .ok_or_else(|| ApiError::Busy(prospect_id.to_string()))?;

    let (prospect, campaign) = load_prospect(state, prospect_id).await?;

    let email = email_service::find_by_prospect(&state.pool, prospect_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Email".into()))?;

    if email.status_enum() != EmailStatus::Approved {
        return Err(ApiError::InvalidTransition(format!(
            "Email must be approved before sending (current status: {})",
            email.status
        )));
    }

    let req = SendRequest {
        from_email: campaign.representative_email,
        from_name: campaign.representative_name,
        to_email: Some(prospect.email),
        to_name: Some(prospect.name),
        subject: Some(email.subject),
        body: Some(email.body),
        user_id: Some(user_id.to_string()),
        email_id: Some(email.id),
    };

    send_service::send_email(&state.pool, &state.mailer, req).await
}
