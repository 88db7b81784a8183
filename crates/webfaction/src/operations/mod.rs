//! One method per remote operation, grouped by resource.
//!
//! Every method here reduces to a single [`Client::send`](crate::Client::send)
//! call with a fixed method name and argument order. Optional arguments take
//! the documented defaults through the `*Options` types' `Default` impls.
//!
//! | Module | Resources |
//! |--------|-----------|
//! | [`general`] | disk and bandwidth usage, servers, cron, scripts, ACLs, `system` |
//! | [`mail`] | mailboxes, email addresses |
//! | [`sites`] | certificates, domains, websites |
//! | [`apps`] | applications |
//! | [`dns`] | DNS overrides |
//! | [`databases`] | databases, database users |
//! | [`files`] | file writes and in-place replacement |
//! | [`users`] | shell users |
//! | [`positional`] | [`Client::call`](crate::Client::call) for run-time argument lists |

pub mod apps;
pub mod databases;
pub mod dns;
pub mod files;
pub mod general;
pub mod mail;
pub mod positional;
pub mod sites;
pub mod users;

pub use apps::AppOptions;
pub use dns::DnsOverride;
pub use files::DEFAULT_WRITE_MODE;
pub use mail::{EmailOptions, MailboxOptions};
