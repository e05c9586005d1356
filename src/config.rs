use std::env;

use lettre::message::Mailbox;

pub const DEFAULT_SMTP_HOST: &str = "smtp.mail.yahoo.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "https://tbilisi.hackclub.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Sender address, also used as the SMTP username.
    pub sender_email: String,
    pub sender_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. An empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let config = Config {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: get("SERVER_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            sender_email: get("YAHOO_EMAIL").ok_or(ConfigError::MissingSenderEmail)?,
            sender_password: get("YAHOO_APP_PASSWORD")
                .ok_or(ConfigError::MissingSenderPassword)?,
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: match get("SMTP_PORT") {
                Some(port) => port.parse().map_err(|_| ConfigError::InvalidSmtpPort)?,
                None => DEFAULT_SMTP_PORT,
            },
            allowed_origins: parse_origins(
                &get("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Startup checks that would otherwise surface as per-request 500s.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sender_email.is_empty() {
            return Err(ConfigError::MissingSenderEmail);
        }
        if self.sender_password.is_empty() {
            return Err(ConfigError::MissingSenderPassword);
        }
        self.sender_email
            .parse::<Mailbox>()
            .map_err(|_| ConfigError::InvalidSenderAddress(self.sender_email.clone()))?;
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("Invalid SMTP port")]
    InvalidSmtpPort,
    #[error("YAHOO_EMAIL environment variable is required")]
    MissingSenderEmail,
    #[error("YAHOO_APP_PASSWORD environment variable is required")]
    MissingSenderPassword,
    #[error("YAHOO_EMAIL is not a valid email address: {0}")]
    InvalidSenderAddress(String),
}
