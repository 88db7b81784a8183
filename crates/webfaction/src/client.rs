//! The session-bound client and its dispatch routine.
//!
//! [`Client::login`] performs the login handshake and returns a client bound to
//! the resulting session. Every public operation (see [`crate::operations`])
//! reduces to one call to [`Client::send`], which:
//!
//! 1. refuses any method other than `login` when no session token is held,
//! 2. applies the version gate ([`Method::ensure_available_in`]),
//! 3. encodes the session token (except for `login`) followed by each argument,
//! 4. invokes the transport,
//! 5. turns a remote fault into [`ClientError::Fault`], otherwise decodes the
//!    payload and returns it.
//!
//! Nothing is retried. The session token is fixed when the client is built
//! and never changes; there is no re-login or token refresh.

use tracing::{debug, instrument, warn};

use crate::errors::{ClientError, Result};
use crate::transport::{Response, Transport};
use crate::{ApiVersion, Method, SessionToken, Value};

/// A client bound to one authenticated WebFaction session.
///
/// Independent clients share nothing; create one per session.
pub struct Client<T: Transport> {
    transport: T,
    session: Option<SessionToken>,
    version: ApiVersion,
    account: Option<Value>,
}

impl<T: Transport> Client<T> {
    /// Logs in and returns a client bound to the new session.
    ///
    /// Sends `login(username, password, machine, version)`. A missing
    /// `machine` is sent as the empty string, which the remote side accepts
    /// for single-machine accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fault`] when the remote side rejects the
    /// credentials, [`ClientError::InvalidLoginResponse`] when the response
    /// carries no session token, and [`ClientError::Transport`] when the
    /// round trip fails. No client is produced in any of these cases.
    pub fn login(
        transport: T,
        username: &str,
        password: &str,
        machine: Option<&str>,
        version: ApiVersion,
    ) -> Result<Self> {
        let unauthenticated = Self {
            transport,
            session: None,
            version,
            account: None,
        };

        let response = unauthenticated.send(
            Method::Login,
            vec![
                Value::from(username),
                Value::from(password),
                Value::from(machine.unwrap_or_default()),
                Value::from(version.as_u32()),
            ],
        )?;
        let (session, account) = parse_login_response(response)?;

        debug!(api_version = %version, "logged in");
        Ok(Self {
            session: Some(session),
            account,
            ..unauthenticated
        })
    }

    /// Returns a client bound to an already-established session.
    ///
    /// No round trip is made; the token is trusted as given.
    pub fn with_session(transport: T, version: ApiVersion, session: SessionToken) -> Self {
        Self {
            transport,
            session: Some(session),
            version,
            account: None,
        }
    }

    /// The API version this client speaks.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The session token, if one is held.
    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    /// The account record returned alongside the session token by `login`.
    ///
    /// `None` for clients built with [`Client::with_session`].
    pub fn account(&self) -> Option<&Value> {
        self.account.as_ref()
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatches `method` with the positional `args`.
    ///
    /// This is the single path to the transport; every operation method on
    /// [`Client`] calls it. Arguments are sent exactly as given; use
    /// [`Client::call`] for lists that still need per-method shaping.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotLoggedIn`] if `method` is not `login` and no
    ///   session token is held.
    /// - [`ClientError::VersionUnavailable`] if `method` is not part of this
    ///   client's API version.
    /// - [`ClientError::Fault`] if the remote side reports a fault.
    /// - [`ClientError::Transport`] if the transport fails.
    #[instrument(
        name = "webfaction.send",
        level = "debug",
        skip_all,
        fields(method = %method, api_version = %self.version, arg_count = args.len())
    )]
    pub fn send(&self, method: Method, args: Vec<Value>) -> Result<Value> {
        let session = match (method, &self.session) {
            (Method::Login, _) => None,
            (_, Some(session)) => Some(session),
            (_, None) => {
                debug!("refusing dispatch without a session");
                return Err(ClientError::NotLoggedIn);
            }
        };

        if let Err(err) = method.ensure_available_in(self.version) {
            debug!("method not available in this API version");
            return Err(err);
        }

        let mut params = Vec::with_capacity(args.len() + 1);
        if let Some(session) = session {
            params.push(self.transport.encode(&Value::from(session.as_str())));
        }
        params.extend(args.iter().map(|arg| self.transport.encode(arg)));

        match self.transport.send(method.as_str(), params)? {
            Response::Success(payload) => {
                debug!("call succeeded");
                Ok(self.transport.decode(payload))
            }
            Response::Fault { code, message } => {
                warn!(fault_code = code, fault_message = %message, "remote fault");
                Err(ClientError::Fault { code, message })
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn without_session(transport: T, version: ApiVersion) -> Self {
        Self {
            transport,
            session: None,
            version,
            account: None,
        }
    }
}

impl<T: Transport> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("session", &self.session)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// Extracts the session token and account record from a `login` payload.
///
/// The payload is `[session_id, account]`.
fn parse_login_response(response: Value) -> Result<(SessionToken, Option<Value>)> {
    let mut items = response
        .into_array()
        .ok_or(ClientError::InvalidLoginResponse)?
        .into_iter();

    let session = match items.next() {
        Some(Value::String(token)) => SessionToken::new(token),
        _ => None,
    }
    .ok_or(ClientError::InvalidLoginResponse)?;

    Ok((session, items.next()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::transport::TransportError;

    /// Identity-encoding transport that records every call it receives.
    #[derive(Default)]
    struct StubTransport {
        calls: RefCell<Vec<(String, Vec<Value>)>>,
        reply: RefCell<Option<Response<Value>>>,
    }

    impl StubTransport {
        fn replying(reply: Response<Value>) -> Self {
            Self {
                calls: RefCell::default(),
                reply: RefCell::new(Some(reply)),
            }
        }
    }

    impl Transport for StubTransport {
        type Wire = Value;

        fn encode(&self, value: &Value) -> Value {
            value.clone()
        }

        fn send(&self, method: &str, params: Vec<Value>) -> std::result::Result<Response<Value>, TransportError> {
            self.calls.borrow_mut().push((method.to_owned(), params));
            self.reply
                .borrow_mut()
                .take()
                .ok_or_else(|| TransportError::new("no reply configured"))
        }

        fn decode(&self, wire: Value) -> Value {
            wire
        }
    }

    fn login_reply() -> Response<Value> {
        Response::Success(Value::Array(vec![
            Value::from("session-1"),
            Value::Struct([("username".to_owned(), Value::from("alice"))].into()),
        ]))
    }

    #[test]
    fn test_login_sends_credentials_without_session() {
        let transport = StubTransport::replying(login_reply());

        let client = Client::login(&transport, "alice", "pw", None, ApiVersion::V2).unwrap();

        assert_eq!(client.session().map(SessionToken::as_str), Some("session-1"));
        assert_eq!(
            client.account().and_then(|a| a.get("username")).and_then(Value::as_str),
            Some("alice")
        );
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "login");
        assert_eq!(
            calls[0].1,
            vec![Value::from("alice"), Value::from("pw"), Value::from(""), Value::Int(2)]
        );
    }

    #[test]
    fn test_login_fault_is_remote_fault() {
        let transport = StubTransport::replying(Response::Fault {
            code: 1,
            message: "LoginError".into(),
        });

        let err = Client::login(&transport, "bad", "bad", Some("bad"), ApiVersion::V1).unwrap_err();

        assert!(err.is_remote_fault());
        assert_eq!(err.code(), 1);
        assert_eq!(err.message(), "LoginError");
    }

    #[test]
    fn test_login_without_token_is_rejected() {
        for payload in [Value::Array(vec![]), Value::from("token"), Value::Array(vec![Value::from("")])] {
            let transport = StubTransport::replying(Response::Success(payload));

            let err = Client::login(&transport, "alice", "pw", None, ApiVersion::V1).unwrap_err();

            assert!(matches!(err, ClientError::InvalidLoginResponse));
        }
    }

    #[test]
    fn test_send_without_session_fails_before_transport() {
        let transport = StubTransport::default();
        let client = Client::without_session(&transport, ApiVersion::V1);

        let err = client.list_disk_usage().unwrap_err();

        assert!(matches!(err, ClientError::NotLoggedIn));
        assert_eq!(err.code(), 403);
        assert!(err.is_precondition());
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn test_send_prepends_session_token() {
        let transport = StubTransport::replying(Response::Success(Value::Bool(true)));
        let session = SessionToken::new("session-9").unwrap();
        let client = Client::with_session(&transport, ApiVersion::V1, session);

        let result = client.delete_mailbox("inbox").unwrap();

        assert_eq!(result, Value::Bool(true));
        let calls = transport.calls.borrow();
        assert_eq!(calls[0].0, "delete_mailbox");
        assert_eq!(calls[0].1, vec![Value::from("session-9"), Value::from("inbox")]);
    }

    #[test]
    fn test_transport_failure_propagates() {
        let transport = StubTransport::default();
        let client = Client::with_session(&transport, ApiVersion::V1, SessionToken::new("s").unwrap());

        let err = client.list_apps().unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), "no reply configured");
    }

    #[test]
    fn test_debug_output_hides_session() {
        let transport = StubTransport::default();
        let client = Client::with_session(&transport, ApiVersion::V2, SessionToken::new("hunter2").unwrap());

        let debug = format!("{client:?}");

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("V2"));
    }
}
