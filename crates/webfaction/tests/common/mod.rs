//! Shared test transport.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use webfaction::{ApiVersion, Client, Response, SessionToken, Transport, TransportError, Value};

pub const SESSION: &str = "test-session";

/// A dispatched call as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: String,
    pub params: Vec<Value>,
}

/// Identity-encoding transport that records calls and replays queued responses.
///
/// When the queue is empty every call succeeds with `Value::Bool(true)`.
#[derive(Default)]
pub struct RecordingTransport {
    calls: RefCell<Vec<Call>>,
    replies: RefCell<VecDeque<Response<Value>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, response: Response<Value>) -> Self {
        self.replies.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls.borrow().last().cloned().expect("no call was dispatched")
    }
}

impl Transport for RecordingTransport {
    type Wire = Value;

    fn encode(&self, value: &Value) -> Value {
        value.clone()
    }

    fn send(&self, method: &str, params: Vec<Value>) -> Result<Response<Value>, TransportError> {
        self.calls.borrow_mut().push(Call {
            method: method.to_owned(),
            params,
        });
        Ok(self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Response::Success(Value::Bool(true))))
    }

    fn decode(&self, wire: Value) -> Value {
        wire
    }
}

/// A client bound to [`SESSION`] without a login round trip.
pub fn client(transport: &RecordingTransport, version: ApiVersion) -> Client<&RecordingTransport> {
    Client::with_session(transport, version, SessionToken::new(SESSION).unwrap())
}

/// `[SESSION, args...]`
pub fn with_session(args: Vec<Value>) -> Vec<Value> {
    std::iter::once(Value::from(SESSION)).chain(args).collect()
}
