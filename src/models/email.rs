use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const SUCCESS_MESSAGE: &str = "Email sent successfully!";

/// Body of `POST /`
///
/// Missing fields default to empty so they are reported by [`RelayRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub subject: String,
    /// Raw HTML, inserted into the email unescaped.
    #[serde(default)]
    pub message: String,
}

impl RelayRequest {
    /// Reject the first empty field (recipient, subject, message), then a malformed recipient.
    ///
    /// The recipient is any RFC 5322 mailbox, so `Ann <a@b.com>` is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.recipient.is_empty() {
            return Err(AppError::MissingField("recipient"));
        }
        if self.subject.is_empty() {
            return Err(AppError::MissingField("subject"));
        }
        if self.message.is_empty() {
            return Err(AppError::MissingField("message"));
        }

        self.recipient
            .parse::<Mailbox>()
            .map_err(|_| AppError::InvalidRecipient(self.recipient.clone()))?;

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub message: String,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// A fully rendered message, ready for the mailer.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}
