//! Command-line arguments and environment variable handling.
//!
//! Every connection setting can come from a flag or from the matching
//! `WEBFACTION_*` variable, so credentials need not appear in shell history.

use clap::{Parser, Subcommand, ValueEnum};
use webfaction::{ApiVersion, Method, DEFAULT_PASSWORD_LENGTH};
use xmlrpc_transport::{TransportConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// wfctl - command-line client for the WebFaction control panel API
#[derive(Parser, Debug, Clone)]
#[command(name = "wfctl", version)]
#[command(about = "Run WebFaction API operations from the command line")]
pub struct Args {
    /// Account username used to log in
    #[arg(long, env = "WEBFACTION_USER")]
    pub user: Option<String>,

    /// Account password used to log in
    #[arg(long, env = "WEBFACTION_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Machine to operate on, for accounts that have more than one
    #[arg(long, env = "WEBFACTION_MACHINE")]
    pub machine: Option<String>,

    /// API revision to negotiate at login (1 or 2)
    #[arg(long, env = "WEBFACTION_API_VERSION", default_value_t = ApiVersion::V1)]
    pub api_version: ApiVersion,

    /// XML-RPC endpoint
    #[arg(long, env = "WEBFACTION_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log filter directives (trace, debug, info, warn, error, or per-target)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Transport settings derived from the connection flags.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
            ..TransportConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a random alphanumeric password (no login)
    GeneratePassword {
        /// Number of characters
        #[arg(short, long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
        length: usize,
    },

    #[command(flatten)]
    Remote(RemoteCommand),
}

/// Commands that run against a logged-in session.
#[derive(Debug, Clone, Subcommand)]
pub enum RemoteCommand {
    /// Show disk usage for the account
    DiskUsage,

    /// List one kind of resource
    List {
        #[arg(value_enum)]
        resource: Resource,
    },

    /// Call any remote method by its wire name
    ///
    /// Each argument is parsed as JSON, so strings must be quoted:
    /// `wfctl call create_mailbox '"inbox"' true false '""' false '""'`
    Call {
        /// Wire name of the method, e.g. `list_websites`
        method: Method,

        /// Positional arguments as JSON values
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Resources reachable through `wfctl list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Mailboxes,
    Emails,
    Certificates,
    Domains,
    Websites,
    Apps,
    AppTypes,
    DnsOverrides,
    Dbs,
    DbUsers,
    Users,
    Ips,
    Machines,
    Bandwidth,
}

impl Resource {
    /// The no-argument listing method for this resource.
    pub fn method(self) -> Method {
        match self {
            Resource::Mailboxes => Method::ListMailboxes,
            Resource::Emails => Method::ListEmails,
            Resource::Certificates => Method::ListCertificates,
            Resource::Domains => Method::ListDomains,
            Resource::Websites => Method::ListWebsites,
            Resource::Apps => Method::ListApps,
            Resource::AppTypes => Method::ListAppTypes,
            Resource::DnsOverrides => Method::ListDnsOverrides,
            Resource::Dbs => Method::ListDbs,
            Resource::DbUsers => Method::ListDbUsers,
            Resource::Users => Method::ListUsers,
            Resource::Ips => Method::ListIps,
            Resource::Machines => Method::ListMachines,
            Resource::Bandwidth => Method::ListBandwidthUsage,
        }
    }
}
