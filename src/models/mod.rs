pub mod campaign;
pub mod credentials;
pub mod email;
pub mod prospect;

pub use campaign::Campaign;
pub use credentials::UserApiKeys;
pub use email::{Email, EmailStatus};
pub use prospect::Prospect;
