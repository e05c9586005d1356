use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::mail::Mailer;
use crate::models::{OutgoingEmail, RelayRequest, RelayResponse};
use crate::template::render_email;

/// Turns a relay request into exactly one delivery attempt.
#[derive(Clone)]
pub struct RelayService {
    mailer: Arc<dyn Mailer>,
    sender: String,
}

impl RelayService {
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
        }
    }

    /// Validate, render and send. Failures are reported once; nothing is retried.
    pub async fn relay(&self, request: RelayRequest) -> Result<RelayResponse> {
        request.validate()?;

        let html_body = render_email(&request.message)?;

        let email = OutgoingEmail {
            from: self.sender.clone(),
            to: request.recipient,
            subject: request.subject,
            html_body,
        };

        tracing::info!(recipient = %email.to, subject = %email.subject, "Sending email");

        self.mailer
            .send(&email)
            .await
            .map_err(|e| AppError::from_mail(e, &email.to))?;

        tracing::info!(recipient = %email.to, "Email sent successfully");

        Ok(RelayResponse::sent())
    }
}
