//! XML-RPC over HTTPS transport for the WebFaction client.
//!
//! Implements the [`webfaction::Transport`] port: arguments are encoded as
//! XML-RPC values, posted as a `methodCall` document to the API endpoint, and
//! the `methodResponse` is parsed back into either a success payload or a
//! fault.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Document construction and parsing are delegated to the
//! [`xmlrpc`] crate; the HTTP round trip is made with a blocking
//! [`reqwest`] client. The [`webfaction`] crate sees only
//! [`webfaction::Transport`].
//!
//! ## Configuration
//!
//! [`TransportConfig`] selects the endpoint (default
//! [`DEFAULT_ENDPOINT`]), request timeout, and `User-Agent`. Plain `http://`
//! endpoints are refused unless they point at a loopback host.

pub mod codec;
pub mod config;
pub mod error;
pub mod transport;

pub use config::{TransportConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use error::XmlRpcError;
pub use transport::XmlRpcTransport;
