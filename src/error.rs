use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::mail::MailError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0} is a required field")]
    MissingField(&'static str),

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Template render error: {0}")]
    Render(String),

    #[error("Failed to send email to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidBody(_)
            | AppError::MissingField(_)
            | AppError::InvalidRecipient(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Render(_) | AppError::Delivery { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the caller. Never carries internal detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MethodNotAllowed => "Method not allowed.".to_string(),
            AppError::InvalidBody(_) => "Invalid request body.".to_string(),
            AppError::MissingField(field) => format!("{field} is a required field."),
            AppError::InvalidRecipient(_) => {
                "recipient must be a valid email address.".to_string()
            }
            AppError::Configuration(_) => "Server configuration error.".to_string(),
            AppError::Render(_) => "Failed to generate email content.".to_string(),
            AppError::Delivery { .. } => "Failed to send email.".to_string(),
        }
    }

    /// Map a mail-layer failure for `recipient` onto the HTTP taxonomy.
    pub fn from_mail(err: MailError, recipient: &str) -> Self {
        match &err {
            // Recipients are validated before sending, so a bad address here is the sender.
            MailError::MissingCredentials | MailError::InvalidAddress(_) => {
                AppError::Configuration(err.to_string())
            }
            MailError::Build(_) | MailError::Smtp(_) => AppError::Delivery {
                recipient: recipient.to_string(),
                reason: err.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Delivery { recipient, reason } => {
                tracing::error!(recipient = %recipient, error = %reason, "Failed to send email");
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %self, "Request failed");
            }
            _ => {
                tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
            }
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidBody(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
