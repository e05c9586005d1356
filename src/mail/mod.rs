pub mod smtp;

use async_trait::async_trait;

use crate::models::OutgoingEmail;

pub use smtp::SmtpMailer;

/// Mailer abstraction (currently backed by SMTP)
///
/// One call is one delivery attempt. Implementations must not retry.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MailError {
    #[error("SMTP credentials are not configured")]
    MissingCredentials,

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}
