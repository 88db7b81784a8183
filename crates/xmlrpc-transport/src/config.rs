//! Transport configuration.

use serde::{Deserialize, Serialize};

/// The public WebFaction API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.webfaction.com/";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::XmlRpcTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// URL the `methodCall` documents are posted to.
    pub endpoint: String,
    /// Upper bound on one round trip, in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("webfaction-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
