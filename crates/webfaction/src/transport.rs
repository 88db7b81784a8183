//! The transport port.
//!
//! [`Transport`] is the only seam between the client and the wire. The
//! client depends on exactly four capabilities and nothing else:
//!
//! 1. encode a [`Value`] into the wire representation,
//! 2. send a named method with a positional list of wire values,
//! 3. report the outcome as either a success payload or a fault pair,
//! 4. decode a wire value back into a [`Value`].
//!
//! Request construction, encryption, connection handling and timeouts are
//! the implementation's concern. See the `xmlrpc-transport` crate for the
//! XML-RPC over HTTPS implementation.

use std::error::Error as StdError;
use std::fmt;

use crate::Value;

/// Outcome of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<W> {
    /// The remote side returned a payload.
    Success(W),
    /// The remote side reported a fault.
    Fault {
        /// Remote fault code.
        code: i32,
        /// Remote fault message.
        message: String,
    },
}

/// A remote-procedure transport.
///
/// Implementations are synchronous: [`send`](Transport::send) blocks until
/// the round trip has completed or failed.
pub trait Transport {
    /// The transport's native value representation.
    type Wire;

    /// Encodes one argument into the wire representation.
    fn encode(&self, value: &Value) -> Self::Wire;

    /// Sends `method` with the already-encoded positional `params`.
    ///
    /// Returns `Err` only when no response could be obtained. A fault
    /// reported by the remote side is `Ok(Response::Fault { .. })`.
    fn send(&self, method: &str, params: Vec<Self::Wire>) -> Result<Response<Self::Wire>, TransportError>;

    /// Decodes a wire value into a plain structured value.
    fn decode(&self, wire: Self::Wire) -> Value;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Wire = T::Wire;

    fn encode(&self, value: &Value) -> Self::Wire {
        (**self).encode(value)
    }

    fn send(&self, method: &str, params: Vec<Self::Wire>) -> Result<Response<Self::Wire>, TransportError> {
        (**self).send(method, params)
    }

    fn decode(&self, wire: Self::Wire) -> Value {
        (**self).decode(wire)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    type Wire = T::Wire;

    fn encode(&self, value: &Value) -> Self::Wire {
        (**self).encode(value)
    }

    fn send(&self, method: &str, params: Vec<Self::Wire>) -> Result<Response<Self::Wire>, TransportError> {
        (**self).send(method, params)
    }

    fn decode(&self, wire: Self::Wire) -> Value {
        (**self).decode(wire)
    }
}

// ---------------------------------------------------------------------------
// Transport failures
// ---------------------------------------------------------------------------

/// A failure inside the transport.
///
/// Wraps the transport's own error without altering it: `Display` and
/// `source()` delegate to the wrapped error, and the original can be
/// recovered with [`downcast_ref`](TransportError::downcast_ref) or
/// [`into_inner`](TransportError::into_inner).
pub struct TransportError {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    /// Wraps a transport-specific error.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self { inner: error.into() }
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Consumes the wrapper and returns the transport's error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}
