//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: reqwest client for the admin REST API
//! - Config: client configuration from the environment
//! - Session: in-memory bearer token holder
//! - Notifier: notification sink that writes to the log
//! - Logging: tracing subscriber setup

pub mod config;
pub mod http_client;
pub mod logging;
pub mod notifier;
pub mod session;

use std::sync::Arc;

use confdesk_app::{ConferenceEditForm, ConferenceService, ConferenceWizard};
use confdesk_domain::Conference;
use confdesk_ports::{NotificationPort, SessionPort};

use self::config::ClientConfig;
use self::http_client::HttpApiAdapter;
use self::notifier::TracingNotifier;
use self::session::SessionHandle;

/// Wired service plus the handles a host needs to keep.
#[derive(Clone)]
pub struct Connection {
    pub service: ConferenceService,
    pub session: SessionHandle,
    pub notifier: Arc<dyn NotificationPort>,
}

impl Connection {
    pub fn wizard(&self) -> ConferenceWizard {
        ConferenceWizard::new(self.service.clone(), self.notifier.clone())
    }

    pub fn edit_form(&self, conference: &Conference) -> ConferenceEditForm {
        ConferenceEditForm::load(self.service.clone(), self.notifier.clone(), conference)
    }
}

/// Build a connection from explicit config, seeding the session from
/// `config.api_token` when present.
pub fn connect(config: &ClientConfig, notifier: Arc<dyn NotificationPort>) -> Connection {
    let session = SessionHandle::new();
    if let Some(token) = &config.api_token {
        session.sign_in(token.clone());
    }
    let session_port: Arc<dyn SessionPort> = Arc::new(session.clone());
    let api = HttpApiAdapter::new(config, session_port);
    Connection {
        service: ConferenceService::new(Arc::new(api)),
        session,
        notifier,
    }
}

/// Load `.env` files and the environment, then connect with a [`TracingNotifier`].
pub fn connect_from_env() -> anyhow::Result<Connection> {
    config::load_dotenv();
    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "Connecting to admin API");
    Ok(connect(&config, Arc::new(TracingNotifier)))
}
