//! Executes one parsed command against an authenticated client.

use anyhow::{bail, Context};
use tracing::info;
use webfaction::{generate_password, Client, Transport, Value};
use xmlrpc_transport::XmlRpcTransport;

use crate::config::{Args, Command, RemoteCommand};

/// Runs the command selected on the command line and returns its result.
pub fn execute(args: &Args) -> anyhow::Result<Value> {
    let remote = match &args.command {
        Command::GeneratePassword { length } => return Ok(Value::String(generate_password(*length))),
        Command::Remote(remote) => remote,
    };

    let (Some(user), Some(password)) = (args.user.as_deref(), args.password.as_deref()) else {
        bail!("--user and --password (or WEBFACTION_USER and WEBFACTION_PASSWORD) are required");
    };

    let transport = XmlRpcTransport::new(args.transport_config()).context("invalid transport settings")?;
    let client = Client::login(transport, user, password, args.machine.as_deref(), args.api_version)
        .with_context(|| format!("login as '{user}' failed"))?;
    info!(user, api_version = %client.version(), "logged in");

    run(&client, remote)
}

/// Dispatches a session command through `client`.
///
/// `call` arguments go through [`Client::call`], so they get the same
/// per-method shaping as the typed operations.
pub fn run<T: Transport>(client: &Client<T>, command: &RemoteCommand) -> anyhow::Result<Value> {
    let result = match command {
        RemoteCommand::DiskUsage => client.list_disk_usage()?,
        RemoteCommand::List { resource } => client.send(resource.method(), Vec::new())?,
        RemoteCommand::Call { method, args } => client.call(*method, parse_arguments(args)?)?,
    };
    Ok(result)
}

/// Parses each raw argument as a JSON document.
pub fn parse_arguments(raw: &[String]) -> anyhow::Result<Vec<Value>> {
    raw.iter()
        .enumerate()
        .map(|(index, arg)| {
            serde_json::from_str::<serde_json::Value>(arg)
                .map(Value::from)
                .with_context(|| format!("argument {} is not valid JSON: {arg}", index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use webfaction::{ApiVersion, ClientError, Method, Response, SessionToken, TransportError};

    use super::*;
    use crate::config::Resource;

    /// Identity transport that records wire method names.
    #[derive(Default)]
    struct EchoTransport {
        methods: RefCell<Vec<String>>,
    }

    fn call(method: Method, args: &[&str]) -> RemoteCommand {
        RemoteCommand::Call {
            method,
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
        }
    }

    impl Transport for EchoTransport {
        type Wire = Value;

        fn encode(&self, value: &Value) -> Value {
            value.clone()
        }

        fn send(&self, method: &str, params: Vec<Value>) -> Result<Response<Value>, TransportError> {
            self.methods.borrow_mut().push(method.to_owned());
            Ok(Response::Success(Value::Array(params)))
        }

        fn decode(&self, wire: Value) -> Value {
            wire
        }
    }

    fn client(transport: &EchoTransport, version: ApiVersion) -> Client<&EchoTransport> {
        let token = SessionToken::new("token").unwrap();
        Client::with_session(transport, version, token)
    }

    #[test]
    fn test_parse_arguments_accepts_json_values() {
        let raw = vec!["\"inbox\"".to_owned(), "true".to_owned(), "[\"a\", \"b\"]".to_owned(), "7".to_owned()];

        let values = parse_arguments(&raw).unwrap();

        assert_eq!(
            values,
            vec![Value::from("inbox"), Value::Bool(true), Value::from(vec!["a", "b"]), Value::Int(7)]
        );
    }

    #[test]
    fn test_parse_arguments_names_the_bad_argument() {
        let raw = vec!["1".to_owned(), "inbox".to_owned()];

        let err = parse_arguments(&raw).unwrap_err();

        assert!(err.to_string().contains("argument 2"), "{err}");
    }

    #[test]
    fn test_call_sends_session_then_arguments() {
        let transport = EchoTransport::default();
        let command = call(Method::DeleteApp, &["\"blog\""]);

        let result = run(&client(&transport, ApiVersion::V1), &command).unwrap();

        assert_eq!(result, Value::from(vec!["token", "blog"]));
        assert_eq!(*transport.methods.borrow(), ["delete_app"]);
    }

    #[test]
    fn test_list_goes_through_the_version_gate() {
        let transport = EchoTransport::default();
        let command = RemoteCommand::List {
            resource: Resource::Certificates,
        };

        let err = run(&client(&transport, ApiVersion::V1), &command).unwrap_err();

        let client_err = err.downcast_ref::<ClientError>().unwrap();
        assert_eq!(client_err.code(), 403);
        assert!(transport.methods.borrow().is_empty());
    }

    #[test]
    fn test_disk_usage_dispatches_once() {
        let transport = EchoTransport::default();

        run(&client(&transport, ApiVersion::V2), &RemoteCommand::DiskUsage).unwrap();

        assert_eq!(*transport.methods.borrow(), ["list_disk_usage"]);
    }

    #[test]
    fn test_call_create_db_with_owner_drops_password() {
        let transport = EchoTransport::default();
        let command = call(Method::CreateDb, &["\"db\"", "\"mysql\"", "\"secret\"", "\"alice\""]);

        let result = run(&client(&transport, ApiVersion::V1), &command).unwrap();

        assert_eq!(result, Value::from(vec!["token", "db", "mysql", "", "alice"]));
    }

    #[test]
    fn test_call_create_website_is_shaped_per_version() {
        let args = [
            "\"site\"",
            "\"10.0.0.1\"",
            "true",
            "[\"example.com\"]",
            "\"cert\"",
            "[\"blog\", \"/\"]",
        ];
        let expected_v2 = Value::Array(vec![
            "token".into(),
            "site".into(),
            "10.0.0.1".into(),
            true.into(),
            Value::from(vec!["example.com"]),
            "cert".into(),
            Value::from(vec!["blog", "/"]),
        ]);

        let transport = EchoTransport::default();
        let result = run(&client(&transport, ApiVersion::V2), &call(Method::CreateWebsite, &args)).unwrap();
        assert_eq!(result, expected_v2);

        // Under version 1 the fifth argument is already a site app.
        let transport = EchoTransport::default();
        let v1_args = [args[0], args[1], args[2], args[3], args[5]];
        let result = run(&client(&transport, ApiVersion::V1), &call(Method::UpdateWebsite, &v1_args)).unwrap();
        assert_eq!(
            result,
            Value::Array(vec![
                "token".into(),
                "site".into(),
                "10.0.0.1".into(),
                true.into(),
                Value::from(vec!["example.com"]),
                Value::from(vec!["blog", "/"]),
            ])
        );
        assert_eq!(*transport.methods.borrow(), ["update_website"]);
    }

    #[test]
    fn test_call_malformed_website_fails_locally() {
        let transport = EchoTransport::default();

        let err = run(&client(&transport, ApiVersion::V1), &call(Method::CreateWebsite, &["\"site\""])).unwrap_err();

        assert_eq!(err.downcast_ref::<ClientError>().map(ClientError::code), Some(403));
        assert!(transport.methods.borrow().is_empty());
    }

    #[test]
    fn test_call_create_domain_lowercases_name() {
        let transport = EchoTransport::default();

        let result = run(
            &client(&transport, ApiVersion::V1),
            &call(Method::CreateDomain, &["\"Example.COM\"", "\"www\""]),
        )
        .unwrap();

        assert_eq!(result, Value::from(vec!["token", "example.com", "www"]));
    }
}
