//! DNS overrides.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

/// Record values of a DNS override. Empty fields are not overridden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsOverride {
    /// IPv4 address for an `A` record.
    pub a_ip: String,
    pub cname: String,
    pub mx_name: String,
    pub mx_priority: String,
    pub spf_record: String,
    /// IPv6 address for an `AAAA` record.
    pub aaaa_ip: String,
    pub srv_record: String,
}

impl DnsOverride {
    fn to_params(&self, domain: &str) -> Vec<Value> {
        vec![
            domain.into(),
            (&self.a_ip).into(),
            (&self.cname).into(),
            (&self.mx_name).into(),
            (&self.mx_priority).into(),
            (&self.spf_record).into(),
            (&self.aaaa_ip).into(),
            (&self.srv_record).into(),
        ]
    }
}

impl<T: Transport> Client<T> {
    pub fn list_dns_overrides(&self) -> Result<Value> {
        self.send(Method::ListDnsOverrides, vec![])
    }

    pub fn create_dns_override(&self, domain: &str, records: &DnsOverride) -> Result<Value> {
        self.send(Method::CreateDnsOverride, records.to_params(domain))
    }

    /// Removes the override records of `domain` that match `records`.
    pub fn delete_dns_override(&self, domain: &str, records: &DnsOverride) -> Result<Value> {
        self.send(Method::DeleteDnsOverride, records.to_params(domain))
    }
}
