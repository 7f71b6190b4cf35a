pub mod campaigns;
pub mod emails;
pub mod generate;
pub mod prospects;
pub mod send;
pub mod settings;

use crate::state::AppState;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn router(state: AppState) -> Router {
    // Browser dashboard calls these endpoints directly; preflight must pass.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/generate-email", post(generate::generate_email))
        .route("/send-email", post(send::send_email))
        .route(
            "/campaigns",
            post(campaigns::create_campaign).get(campaigns::list_campaigns),
        )
        .route(
            "/campaigns/:id",
            get(campaigns::get_campaign)
                .patch(campaigns::update_campaign)
                .delete(campaigns::delete_campaign),
        )
        .route(
            "/campaigns/:id/prospects",
            post(prospects::add_prospect).get(prospects::list_prospects),
        )
        .route(
            "/campaigns/:id/prospects/import",
            post(prospects::import_prospects),
        )
        .route("/prospects/:id", delete(prospects::delete_prospect))
        .route("/prospects/:id/email", get(emails::get_prospect_email))
        .route("/prospects/:id/generate", post(generate::generate_for_prospect))
        .route("/prospects/:id/send", post(send::send_for_prospect))
        .route("/emails/:id", patch(emails::edit_email))
        .route("/emails/:id/approve", post(emails::approve_email))
        .route("/emails/:id/reject", post(emails::reject_email))
        .route(
            "/settings/api-keys/:user_id",
            get(settings::get_api_keys).put(settings::put_api_keys),
        )
        .layer(cors)
        .with_state(state)
}
