//! Argument shaping for `create_website` and `update_website`.
//!
//! The two website methods take a different positional list per API version:
//!
//! | Version | Parameters after the session token |
//! |---------|------------------------------------|
//! | 1 | name, ip, https, subdomains, site_app... |
//! | 2 | name, ip, https, subdomains, certificate, site_app... |
//!
//! [`WebsiteRequest`] holds the arguments as explicit fields and
//! [`WebsiteRequest::into_params`] produces the exact list for a version. The
//! reshaping is pure; it performs no I/O.

use tracing::warn;

use crate::errors::{ClientError, Result};
use crate::{ApiVersion, Method, Value};

/// Mounts an application at a URL path of a website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteApp {
    /// Name of an existing application.
    pub app: String,
    /// URL path the application is served under (e.g. `"/"` or `"/blog"`).
    pub path: String,
}

impl SiteApp {
    /// Creates a new application mount.
    pub fn new(app: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            path: path.into(),
        }
    }
}

impl From<SiteApp> for Value {
    /// Encodes as the two-element array `[app, path]`.
    fn from(site_app: SiteApp) -> Self {
        Value::Array(vec![Value::String(site_app.app), Value::String(site_app.path)])
    }
}

/// Arguments of a `create_website` or `update_website` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebsiteRequest {
    /// Website name.
    pub name: String,
    /// IP address the website is served on.
    pub ip_address: String,
    /// Whether the website is served over HTTPS.
    pub https: bool,
    /// Domains and subdomains the website answers for.
    pub subdomains: Vec<String>,
    /// Certificate name. Only sent from API version 2; empty means none.
    pub certificate: String,
    /// Applications mounted on the website, in order.
    pub site_apps: Vec<SiteApp>,
}

impl WebsiteRequest {
    /// Creates a request with no certificate and no applications.
    pub fn new(name: impl Into<String>, ip_address: impl Into<String>, https: bool) -> Self {
        Self {
            name: name.into(),
            ip_address: ip_address.into(),
            https,
            ..Self::default()
        }
    }

    /// Adds a domain or subdomain.
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomains.push(subdomain.into());
        self
    }

    /// Sets the certificate name.
    pub fn certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = certificate.into();
        self
    }

    /// Mounts an application at `path`.
    pub fn site_app(mut self, app: impl Into<String>, path: impl Into<String>) -> Self {
        self.site_apps.push(SiteApp::new(app, path));
        self
    }

    /// Produces the positional parameter list `version`'s contract expects.
    pub fn into_params(self, version: ApiVersion) -> Vec<Value> {
        let mut params = vec![
            Value::String(self.name),
            Value::String(self.ip_address),
            Value::Bool(self.https),
            Value::from(self.subdomains),
        ];

        match version {
            ApiVersion::V1 => {
                if !self.certificate.is_empty() {
                    warn!(
                        certificate = %self.certificate,
                        "API version 1 has no website certificate argument; certificate dropped"
                    );
                }
            }
            ApiVersion::V2 => params.push(Value::String(self.certificate)),
        }

        params.extend(self.site_apps.into_iter().map(Value::from));
        params
    }

    /// Builds a request from a loose ordered argument list.
    ///
    /// The list starts with the four fixed arguments (name, ip, https,
    /// subdomains). Under API version 2 the next element is the certificate
    /// name. The remaining elements are site apps, each a two-element array
    /// of strings. `method` is only used to label errors.
    pub fn from_positional(method: Method, version: ApiVersion, args: Vec<Value>) -> Result<Self> {
        let invalid = |reason: String| ClientError::InvalidArguments { method, reason };
        let mut args = args.into_iter();

        let name = expect_string(args.next(), "name").map_err(invalid)?;
        let ip_address = expect_string(args.next(), "ip address").map_err(invalid)?;
        let https = match args.next() {
            Some(Value::Bool(b)) => b,
            other => return Err(invalid(describe_mismatch("https flag", "a boolean", other.as_ref()))),
        };
        let subdomains = match args.next() {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| expect_string(Some(item), "subdomain"))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(invalid)?,
            other => {
                return Err(invalid(describe_mismatch(
                    "subdomains",
                    "an array of strings",
                    other.as_ref(),
                )))
            }
        };

        let certificate = match version {
            ApiVersion::V1 => String::new(),
            ApiVersion::V2 => match args.next() {
                None => String::new(),
                Some(value) => expect_string(Some(value), "certificate").map_err(invalid)?,
            },
        };

        let site_apps = args
            .map(|value| match value {
                Value::Array(pair) if pair.len() == 2 => {
                    let mut pair = pair.into_iter();
                    let app = expect_string(pair.next(), "site app name")?;
                    let path = expect_string(pair.next(), "site app path")?;
                    Ok(SiteApp { app, path })
                }
                other => Err(describe_mismatch(
                    "site app",
                    "an [app, path] array",
                    Some(&other),
                )),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(invalid)?;

        Ok(Self {
            name,
            ip_address,
            https,
            subdomains,
            certificate,
            site_apps,
        })
    }
}

fn expect_string(value: Option<Value>, what: &str) -> std::result::Result<String, String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(describe_mismatch(what, "a string", other.as_ref())),
    }
}

fn describe_mismatch(what: &str, expected: &str, found: Option<&Value>) -> String {
    match found {
        None => format!("missing {what}"),
        Some(value) => format!("{what} must be {expected}, found {value:?}"),
    }
}
