//! Confdesk Adapters - infrastructure for the conference admin client
//!
//! Concrete implementations of the outbound ports: a reqwest-backed admin API
//! client, an in-memory session, a tracing notification sink, plus config and
//! logging setup for headless use.

pub mod infrastructure;

pub use infrastructure::config::{load_dotenv, ClientConfig};
pub use infrastructure::http_client::HttpApiAdapter;
pub use infrastructure::logging::init_tracing;
pub use infrastructure::notifier::TracingNotifier;
pub use infrastructure::session::SessionHandle;
pub use infrastructure::{connect, connect_from_env, Connection};
