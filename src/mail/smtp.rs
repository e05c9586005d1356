//! SMTP delivery through `lettre`.
//!
//! Every call to [`SmtpMailer::send`] dials the relay, upgrades with STARTTLS,
//! authenticates, sends one message and drops the connection.

use async_trait::async_trait;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, Mailer};
use crate::config::Config;
use crate::models::OutgoingEmail;

#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16, credentials: Option<Credentials>) -> Self {
        Self {
            host: host.into(),
            port,
            credentials,
        }
    }

    /// Build a mailer authenticating as the configured sender.
    pub fn from_config(config: &Config) -> Self {
        let credentials = (!config.sender_email.is_empty() && !config.sender_password.is_empty())
            .then(|| {
                Credentials::new(
                    config.sender_email.clone(),
                    config.sender_password.clone(),
                )
            });

        Self::new(config.smtp_host.clone(), config.smtp_port, credentials)
    }

    fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.from.clone()))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .singlepart(SinglePart::html(email.html_body.clone()))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let credentials = self
            .credentials
            .clone()
            .ok_or(MailError::MissingCredentials)?;

        let message = Self::build_message(email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(self.port)
            .credentials(credentials)
            .build();

        tracing::debug!(host = %self.host, port = self.port, to = %email.to, "Dialing SMTP relay");

        transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}
