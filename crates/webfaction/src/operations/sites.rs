//! Certificates, domains and websites.
//!
//! Certificate management exists only from API version 2; the methods below
//! fail with [`ClientError::VersionUnavailable`](crate::ClientError::VersionUnavailable)
//! on a version 1 client without making a network call. The website methods
//! take a [`WebsiteRequest`], which shapes its arguments per version.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value, WebsiteRequest};

// ---------------------------------------------------------------------------
// Certificates
// ---------------------------------------------------------------------------

impl<T: Transport> Client<T> {
    pub fn list_certificates(&self) -> Result<Value> {
        self.send(Method::ListCertificates, vec![])
    }

    /// Uploads a certificate. All arguments are PEM text except `name`.
    pub fn create_certificate(
        &self,
        name: &str,
        certificate: &str,
        private_key: &str,
        intermediates: &str,
    ) -> Result<Value> {
        self.send(
            Method::CreateCertificate,
            vec![name.into(), certificate.into(), private_key.into(), intermediates.into()],
        )
    }

    /// Replaces the PEM material of an existing certificate.
    pub fn update_certificate(
        &self,
        name: &str,
        certificate: &str,
        private_key: &str,
        intermediates: &str,
    ) -> Result<Value> {
        self.send(
            Method::UpdateCertificate,
            vec![name.into(), certificate.into(), private_key.into(), intermediates.into()],
        )
    }

    pub fn delete_certificate(&self, name: &str) -> Result<Value> {
        self.send(Method::DeleteCertificate, vec![name.into()])
    }
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

impl<T: Transport> Client<T> {
    pub fn list_domains(&self) -> Result<Value> {
        self.send(Method::ListDomains, vec![])
    }

    /// Creates `name` (lower-cased) and, optionally, subdomains of it.
    ///
    /// Each subdomain is the leading label only: `"www"` for `www.example.com`.
    pub fn create_domain(&self, name: &str, subdomains: &[&str]) -> Result<Value> {
        self.send(Method::CreateDomain, domain_params(name, subdomains))
    }

    /// Deletes the listed subdomains of `name`, or the domain itself when
    /// `subdomains` is empty.
    pub fn delete_domain(&self, name: &str, subdomains: &[&str]) -> Result<Value> {
        self.send(Method::DeleteDomain, domain_params(name, subdomains))
    }
}

fn domain_params(name: &str, subdomains: &[&str]) -> Vec<Value> {
    std::iter::once(Value::from(name.to_lowercase()))
        .chain(subdomains.iter().map(|s| Value::from(*s)))
        .collect()
}

/// Lower-cases the leading domain name of a loose argument list.
pub(crate) fn lowercase_domain_arg(mut args: Vec<Value>) -> Vec<Value> {
    if let Some(Value::String(name)) = args.first_mut() {
        *name = name.to_lowercase();
    }
    args
}

// ---------------------------------------------------------------------------
// Websites
// ---------------------------------------------------------------------------

impl<T: Transport> Client<T> {
    pub fn list_websites(&self) -> Result<Value> {
        self.send(Method::ListWebsites, vec![])
    }

    pub fn create_website(&self, request: WebsiteRequest) -> Result<Value> {
        self.send(Method::CreateWebsite, request.into_params(self.version()))
    }

    /// Replaces every setting of the website named in `request`.
    pub fn update_website(&self, request: WebsiteRequest) -> Result<Value> {
        self.send(Method::UpdateWebsite, request.into_params(self.version()))
    }

    pub fn delete_website(&self, name: &str, ip_address: &str, https: bool) -> Result<Value> {
        self.send(Method::DeleteWebsite, vec![name.into(), ip_address.into(), https.into()])
    }
}
