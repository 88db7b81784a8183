//! Login, dispatch, fault translation and version gating against a recording transport.

mod common;

use common::{client, with_session, RecordingTransport, SESSION};
use webfaction::{ApiVersion, Client, ClientError, ErrorKind, Method, Response, Value};

fn login_success() -> Response<Value> {
    Response::Success(Value::Array(vec![
        Value::from(SESSION),
        Value::Struct([("id".to_owned(), Value::Int(7))].into()),
    ]))
}

#[test]
fn test_login_then_call_uses_returned_session() {
    let transport = RecordingTransport::new().reply(login_success());

    let client = Client::login(&transport, "alice", "secret", Some("Web500"), ApiVersion::V1).unwrap();
    client.list_domains().unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "login");
    assert_eq!(
        calls[0].params,
        vec![Value::from("alice"), Value::from("secret"), Value::from("Web500"), Value::Int(1)]
    );
    assert_eq!(calls[1].method, "list_domains");
    assert_eq!(calls[1].params, vec![Value::from(SESSION)]);
}

#[test]
fn test_invalid_credentials_raise_remote_fault() {
    let transport = RecordingTransport::new().reply(Response::Fault {
        code: 1,
        message: "LoginError".into(),
    });

    let err = Client::login(&transport, "bad-username", "bad-password", Some("bad-machine"), ApiVersion::V1)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteFault);
    assert_ne!(err.code(), 403);
}

#[test]
fn test_remote_fault_is_not_retried() {
    let transport = RecordingTransport::new().reply(Response::Fault {
        code: 2,
        message: "DataError: no such mailbox".into(),
    });
    let client = client(&transport, ApiVersion::V1);

    let err = client.delete_mailbox("missing").unwrap_err();

    match err {
        ClientError::Fault { code, message } => {
            assert_eq!(code, 2);
            assert_eq!(message, "DataError: no such mailbox");
        }
        other => panic!("expected a remote fault, got {other:?}"),
    }
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn test_certificate_methods_are_gated_in_v1_without_network() {
    let transport = RecordingTransport::new();
    let client = client(&transport, ApiVersion::V1);

    let results = [
        client.list_certificates(),
        client.create_certificate("cert", "PEM", "KEY", ""),
        client.update_certificate("cert", "PEM", "KEY", ""),
        client.delete_certificate("cert"),
    ];

    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::VersionUnavailable { version: ApiVersion::V1, .. }));
        assert_eq!(err.code(), 403);
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }
    assert!(transport.calls().is_empty());
}

#[test]
fn test_certificate_methods_dispatch_in_v2() {
    let transport = RecordingTransport::new();
    let client = client(&transport, ApiVersion::V2);

    client.create_certificate("cert", "PEM", "KEY", "CHAIN").unwrap();

    let call = transport.last_call();
    assert_eq!(call.method, "create_certificate");
    assert_eq!(
        call.params,
        with_session(vec!["cert".into(), "PEM".into(), "KEY".into(), "CHAIN".into()])
    );
}

#[test]
fn test_send_parsed_method_goes_through_gate() {
    let transport = RecordingTransport::new();
    let client = client(&transport, ApiVersion::V1);
    let method: Method = "list_certificates".parse().unwrap();

    let err = client.send(method, vec![]).unwrap_err();

    assert!(err.is_precondition());
    assert!(transport.calls().is_empty());
}

#[test]
fn test_success_payload_is_returned_unvalidated() {
    let payload = Value::Array(vec![Value::Int(1), Value::from("anything"), Value::Nil]);
    let transport = RecordingTransport::new().reply(Response::Success(payload.clone()));
    let client = client(&transport, ApiVersion::V1);

    assert_eq!(client.list_ips().unwrap(), payload);
}

#[test]
fn test_independent_clients_keep_their_own_sessions() {
    let first = RecordingTransport::new();
    let second = RecordingTransport::new();
    let a = Client::with_session(&first, ApiVersion::V1, webfaction::SessionToken::new("a").unwrap());
    let b = Client::with_session(&second, ApiVersion::V2, webfaction::SessionToken::new("b").unwrap());

    a.list_apps().unwrap();
    b.list_apps().unwrap();

    assert_eq!(first.last_call().params, vec![Value::from("a")]);
    assert_eq!(second.last_call().params, vec![Value::from("b")]);
}
