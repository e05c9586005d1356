use std::sync::Arc;

use crate::config::Config;
use crate::cors::AllowedOrigins;
use crate::mail::Mailer;
use crate::relay::RelayService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay: Arc<RelayService>,
    pub origins: Arc<AllowedOrigins>,
}

impl AppState {
    pub fn new(config: Config, mailer: Arc<dyn Mailer>) -> Self {
        let relay = RelayService::new(mailer, config.sender_email.clone());
        let origins = AllowedOrigins::new(config.allowed_origins.iter().cloned());

        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
            origins: Arc::new(origins),
        }
    }
}
