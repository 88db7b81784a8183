//! The HTTP round trip.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::{debug, instrument};
use webfaction::{Response, Transport, TransportError, Value};

use crate::codec;
use crate::config::TransportConfig;
use crate::error::XmlRpcError;

/// Sends XML-RPC calls to one endpoint over a blocking HTTP client.
pub struct XmlRpcTransport {
    http: HttpClient,
    endpoint: Url,
}

impl XmlRpcTransport {
    /// Builds a transport for `config.endpoint`.
    ///
    /// # Errors
    ///
    /// [`XmlRpcError::InvalidEndpoint`] if the endpoint is not a URL, or is a
    /// plain `http://` URL for a non-loopback host.
    /// [`XmlRpcError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self, XmlRpcError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(XmlRpcError::HttpClient)?;

        Ok(Self { http, endpoint })
    }

    /// The URL calls are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for XmlRpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlRpcTransport")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl Transport for XmlRpcTransport {
    type Wire = xmlrpc::Value;

    fn encode(&self, value: &Value) -> xmlrpc::Value {
        codec::encode(value)
    }

    #[instrument(
        name = "xmlrpc.call",
        level = "debug",
        skip_all,
        fields(method = method, endpoint = %self.endpoint)
    )]
    fn send(&self, method: &str, params: Vec<xmlrpc::Value>) -> Result<Response<xmlrpc::Value>, TransportError> {
        let request = params
            .into_iter()
            .fold(xmlrpc::Request::new(method), |request, param| request.arg(param));

        let post = HttpPost {
            http: &self.http,
            endpoint: &self.endpoint,
        };

        match request.call(post) {
            Ok(value) => Ok(Response::Success(value)),
            Err(err) => match err.fault() {
                Some(fault) => Ok(Response::Fault {
                    code: fault.fault_code,
                    message: fault.fault_string.clone(),
                }),
                None => {
                    debug!(error = %err, "XML-RPC call failed");
                    Err(TransportError::new(err))
                }
            },
        }
    }

    fn decode(&self, wire: xmlrpc::Value) -> Value {
        codec::decode(wire)
    }
}

/// One `POST` of a `methodCall` document.
struct HttpPost<'a> {
    http: &'a HttpClient,
    endpoint: &'a Url,
}

impl xmlrpc::Transport for HttpPost<'_> {
    type Stream = reqwest::blocking::Response;

    fn transmit(
        self,
        request: &xmlrpc::Request<'_>,
    ) -> Result<Self::Stream, Box<dyn StdError + Send + Sync>> {
        let mut body = Vec::new();
        request.write_as_xml(&mut body).map_err(XmlRpcError::Encode)?;
        debug!(bytes = body.len(), "posting methodCall");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()
            .map_err(XmlRpcError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Box::new(XmlRpcError::HttpStatus {
                status: status.as_u16(),
            }));
        }

        Ok(response)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, XmlRpcError> {
    let invalid = |reason: String| XmlRpcError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "https" => Ok(url),
        "http" if is_loopback(url.host_str()) => Ok(url),
        "http" => Err(invalid("plain http is only allowed for loopback hosts".into())),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn is_loopback(host: Option<&str>) -> bool {
    matches!(host, Some("localhost" | "127.0.0.1" | "[::1]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_default_endpoint_is_accepted() {
        let url = parse_endpoint(DEFAULT_ENDPOINT).unwrap();

        assert_eq!(url.as_str(), "https://api.webfaction.com/");
    }

    #[test]
    fn test_plain_http_requires_loopback() {
        assert!(parse_endpoint("http://127.0.0.1:8080/").is_ok());
        assert!(parse_endpoint("http://localhost/").is_ok());
        assert!(matches!(
            parse_endpoint("http://api.webfaction.com/"),
            Err(XmlRpcError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            parse_endpoint("ftp://api.webfaction.com/"),
            Err(XmlRpcError::InvalidEndpoint { .. })
        ));
        assert!(parse_endpoint("not a url").is_err());
    }
}
