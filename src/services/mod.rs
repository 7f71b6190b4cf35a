pub mod credential_service;
pub mod email_service;
pub mod generation_service;
pub mod orchestrator;
pub mod send_service;
