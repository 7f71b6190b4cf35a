pub mod generator;
pub mod mailer;

pub use generator::GeneratorClient;
pub use mailer::MailerClient;
