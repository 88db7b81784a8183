//! Error types for the XML-RPC transport.

use thiserror::Error;

/// Errors raised by the transport itself.
///
/// Failures during a call reach the client wrapped in
/// [`webfaction::TransportError`]; configuration errors are returned directly
/// by [`crate::XmlRpcTransport::new`].
#[derive(Debug, Error)]
pub enum XmlRpcError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to encode request: {0}")]
    Encode(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("endpoint answered with HTTP status {status}")]
    HttpStatus { status: u16 },
}
