//! Client for the WebFaction control-plane API.
//!
//! A [`Client`] logs in once, holds the resulting session token for its whole
//! lifetime, and exposes one method per remote procedure (account, domains,
//! databases, mail, applications, DNS, files, users). Every method funnels
//! through [`Client::send`], which checks preconditions, marshals arguments,
//! invokes the [`Transport`], and translates remote faults into
//! [`ClientError`].
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies. It
//! defines *what* a transport must provide ([`Transport`]); the
//! `xmlrpc-transport` crate supplies the XML-RPC over HTTPS implementation.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`Client`], login handshake, dispatch |
//! | [`operations`] | Per-resource methods and their option types |
//! | [`method`] | [`Method`] table and the version gate |
//! | [`website`] | Version-dependent argument shaping for websites |
//! | [`transport`] | The [`Transport`] port |
//! | [`types`] | [`Value`], [`ApiVersion`], [`DbType`] |
//! | [`identifiers`] | [`SessionToken`] |
//! | [`errors`] | [`ClientError`] and [`ErrorKind`] |
//! | [`password`] | [`generate_password`] |
//!
//! ## Example
//!
//! ```rust,ignore
//! use webfaction::{ApiVersion, Client};
//! use xmlrpc_transport::XmlRpcTransport;
//!
//! let transport = XmlRpcTransport::new(Default::default())?;
//! let client = Client::login(transport, "alice", "secret", None, ApiVersion::V2)?;
//! let usage = client.list_disk_usage()?;
//! println!("{:?}", usage.get("percentage"));
//! ```

pub mod client;
pub mod errors;
pub mod identifiers;
pub mod method;
pub mod operations;
pub mod password;
pub mod transport;
pub mod types;
pub mod website;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use client::Client;
pub use errors::{ClientError, ErrorKind, Result, NO_REMOTE_CODE, PRECONDITION_FAILED_CODE};
pub use identifiers::SessionToken;
pub use method::{Method, UnknownMethod};
pub use operations::{AppOptions, DnsOverride, EmailOptions, MailboxOptions, DEFAULT_WRITE_MODE};
pub use password::{generate_password, DEFAULT_PASSWORD_LENGTH};
pub use transport::{Response, Transport, TransportError};
pub use types::{ApiVersion, DbType, UnsupportedVersion, Value};
pub use website::{SiteApp, WebsiteRequest};
