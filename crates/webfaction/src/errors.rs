//! Error and error-kind types for the WebFaction client.
//!
//! [`ClientError`] is the single error type returned by every operation on
//! [`crate::Client`]. It exposes a numeric [`code`](ClientError::code) and a
//! human-readable [`message`](ClientError::message) for every failure.
//!
//! [`ErrorKind`] is a cross-cutting classification: callers that need to tell
//! a local precondition failure apart from a fault reported by the remote
//! side branch on [`ClientError::kind`] instead of matching message text.
//!
//! ## Codes
//!
//! - [`PRECONDITION_FAILED_CODE`] (`403`) is reserved for failures detected
//!   locally before any network activity.
//! - Remote faults carry the remote side's own code, verbatim.
//! - Transport failures and malformed login responses carry
//!   [`NO_REMOTE_CODE`] (`0`).

use thiserror::Error;

use crate::transport::TransportError;
use crate::{ApiVersion, Method};

/// Code attached to every locally-detected precondition failure.
pub const PRECONDITION_FAILED_CODE: i32 = 403;

/// Code attached to failures that never produced a remote fault code.
pub const NO_REMOTE_CODE: i32 = 0;

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

/// Broad classification of a [`ClientError`].
///
/// ## Rules
///
/// - `Precondition` errors are raised before the transport is touched: no
///   session, a version-gated method, or arguments that cannot be shaped into
///   the remote contract.
/// - `RemoteFault` errors mean a round trip completed and the remote side
///   reported failure (including a login response without a session token).
/// - `Transport` errors come from the transport unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Detected locally; no network activity took place.
    Precondition,
    /// Reported by the remote side after a completed round trip.
    RemoteFault,
    /// Connection, HTTP, or wire-decoding failure inside the transport.
    Transport,
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

/// Errors returned by [`crate::Client`] operations.
///
/// None of these are retried or recovered from inside the client; every
/// failure is terminal for the call that produced it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A method other than `login` was dispatched without a session token.
    #[error("You are not logged in")]
    NotLoggedIn,

    /// The method is not part of the configured API version's contract.
    #[error("This functionality is not available in version {version} of the API")]
    VersionUnavailable {
        /// The gated method that was requested.
        method: Method,
        /// The API version the client is configured for.
        version: ApiVersion,
    },

    /// The supplied arguments do not fit the method's positional contract.
    ///
    /// Produced by: [`crate::WebsiteRequest::from_positional`].
    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments {
        /// The method whose argument list was rejected.
        method: Method,
        /// Description of what was missing or malformed.
        reason: String,
    },

    /// The remote side reported a fault.
    ///
    /// `code` and `message` are the remote fault's `faultCode` and
    /// `faultString`, unmodified.
    #[error("{message}")]
    Fault {
        /// Remote fault code.
        code: i32,
        /// Remote fault message.
        message: String,
    },

    /// `login` succeeded at the transport level but the response did not
    /// carry a usable session token.
    #[error("Login response did not contain a session token")]
    InvalidLoginResponse,

    /// The transport failed before a response could be obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotLoggedIn | Self::VersionUnavailable { .. } | Self::InvalidArguments { .. } => {
                ErrorKind::Precondition
            }
            Self::Fault { .. } | Self::InvalidLoginResponse => ErrorKind::RemoteFault,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the numeric code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotLoggedIn | Self::VersionUnavailable { .. } | Self::InvalidArguments { .. } => {
                PRECONDITION_FAILED_CODE
            }
            Self::Fault { code, .. } => *code,
            Self::InvalidLoginResponse | Self::Transport(_) => NO_REMOTE_CODE,
        }
    }

    /// Returns the human-readable message for this error.
    ///
    /// For remote faults this is the remote `faultString` exactly.
    pub fn message(&self) -> String {
        match self {
            Self::Fault { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns `true` if the error was detected locally, before any network call.
    pub fn is_precondition(&self) -> bool {
        self.kind() == ErrorKind::Precondition
    }

    /// Returns `true` if the remote side reported the failure.
    pub fn is_remote_fault(&self) -> bool {
        self.kind() == ErrorKind::RemoteFault
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_errors_use_reserved_code() {
        let errors = [
            ClientError::NotLoggedIn,
            ClientError::VersionUnavailable {
                method: Method::ListCertificates,
                version: ApiVersion::V1,
            },
            ClientError::InvalidArguments {
                method: Method::CreateWebsite,
                reason: "missing name".into(),
            },
        ];

        for err in errors {
            assert_eq!(err.code(), 403, "{err}");
            assert_eq!(err.kind(), ErrorKind::Precondition);
        }
    }

    #[test]
    fn test_fault_passes_code_and_message_verbatim() {
        let err = ClientError::Fault {
            code: 1,
            message: "LoginError".into(),
        };

        assert_eq!(err.code(), 1);
        assert_eq!(err.message(), "LoginError");
        assert!(err.is_remote_fault());
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_version_unavailable_message_names_the_version() {
        let err = ClientError::VersionUnavailable {
            method: Method::CreateCertificate,
            version: ApiVersion::V1,
        };

        assert_eq!(
            err.message(),
            "This functionality is not available in version 1 of the API"
        );
    }

    #[test]
    fn test_transport_error_is_its_own_kind() {
        let err = ClientError::from(TransportError::new("connection reset"));

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.code(), NO_REMOTE_CODE);
        assert_eq!(err.message(), "connection reset");
    }
}
