//! The remote method table and its version gate.
//!
//! Every remote procedure the client can call is a [`Method`] variant. The
//! variant carries the exact wire name and the range of [`ApiVersion`]s whose
//! contract includes it. [`Method::ensure_available_in`] is the version gate:
//! a static lookup, checked before dispatch, that never touches the network.

use crate::errors::{ClientError, Result};
use crate::ApiVersion;

// ---------------------------------------------------------------------------
// Macro for the method table.
// Generates: enum, ALL, as_str(), min_version(), max_version(), FromStr.
// Each entry may carry `since Vn` and/or `until Vn`; the defaults are "first
// supported version" and "no upper bound".
// ---------------------------------------------------------------------------
macro_rules! methods {
    (@min) => { ApiVersion::V1 };
    (@min $min:ident) => { ApiVersion::$min };
    (@max) => { None };
    (@max $max:ident) => { Some(ApiVersion::$max) };
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $wire:literal $(, since $min:ident)? $(, until $max:ident)?;
        )*
    ) => {
        /// A remote procedure of the WebFaction API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Method {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl Method {
            /// Every method in the table, in declaration order.
            pub const ALL: &'static [Method] = &[$(Method::$variant,)*];

            /// Returns the wire name of the method.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Method::$variant => $wire,)*
                }
            }

            /// Returns the earliest API version whose contract includes the method.
            pub fn min_version(self) -> ApiVersion {
                match self {
                    $(Method::$variant => methods!(@min $($min)?),)*
                }
            }

            /// Returns the last API version whose contract includes the method,
            /// or `None` if it has not been withdrawn.
            pub fn max_version(self) -> Option<ApiVersion> {
                match self {
                    $(Method::$variant => methods!(@max $($max)?),)*
                }
            }
        }

        impl std::str::FromStr for Method {
            type Err = UnknownMethod;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Method::$variant),)*
                    other => Err(UnknownMethod(other.to_owned())),
                }
            }
        }
    };
}

methods! {
    /// Authenticate and obtain a session token.
    Login => "login";

    // General
    ListDiskUsage => "list_disk_usage";

    // Email: mailboxes
    ListMailboxes => "list_mailboxes";
    CreateMailbox => "create_mailbox";
    UpdateMailbox => "update_mailbox";
    ChangeMailboxPassword => "change_mailbox_password";
    DeleteMailbox => "delete_mailbox";

    // Email: addresses
    CreateEmail => "create_email";
    DeleteEmail => "delete_email";
    ListEmails => "list_emails";
    UpdateEmail => "update_email";

    // Certificates
    ListCertificates => "list_certificates", since V2;
    CreateCertificate => "create_certificate", since V2;
    UpdateCertificate => "update_certificate", since V2;
    DeleteCertificate => "delete_certificate", since V2;

    // Domains
    ListDomains => "list_domains";
    CreateDomain => "create_domain";
    DeleteDomain => "delete_domain";
    ListBandwidthUsage => "list_bandwidth_usage";

    // Websites
    ListWebsites => "list_websites";
    CreateWebsite => "create_website";
    UpdateWebsite => "update_website";
    DeleteWebsite => "delete_website";

    // Applications
    ListAppTypes => "list_app_types";
    ListApps => "list_apps";
    CreateApp => "create_app";
    DeleteApp => "delete_app";

    // Cron
    CreateCronjob => "create_cronjob";
    DeleteCronjob => "delete_cronjob";

    // DNS
    ListDnsOverrides => "list_dns_overrides";
    CreateDnsOverride => "create_dns_override";
    DeleteDnsOverride => "delete_dns_override";

    // Databases
    ListDbs => "list_dbs";
    CreateDb => "create_db";
    EnableAddon => "enable_addon";
    DeleteDb => "delete_db";
    ListDbUsers => "list_db_users";
    CreateDbUser => "create_db_user";
    ChangeDbUserPassword => "change_db_user_password";
    GrantDbPermissions => "grant_db_permissions";
    MakeUserOwnerOfDb => "make_user_owner_of_db";
    RevokeDbPermissions => "revoke_db_permissions";
    DeleteDbUser => "delete_db_user";

    // Files
    WriteFile => "write_file";
    ReplaceInFile => "replace_in_file";

    // Shell users
    ListUsers => "list_users";
    CreateUser => "create_user";
    ChangeUserPassword => "change_user_password";
    DeleteUser => "delete_user";

    // Servers
    ListIps => "list_ips";
    ListMachines => "list_machines";

    // Miscellaneous
    RunPhpScript => "run_php_script";
    SetApacheAcl => "set_apache_acl";
    System => "system";
}

impl Method {
    /// Returns `true` if `version`'s contract includes this method.
    pub fn is_available_in(self, version: ApiVersion) -> bool {
        version >= self.min_version() && self.max_version().is_none_or(|max| version <= max)
    }

    /// Fails with [`ClientError::VersionUnavailable`] if `version`'s contract
    /// does not include this method.
    pub fn ensure_available_in(self, version: ApiVersion) -> Result<()> {
        if self.is_available_in(version) {
            Ok(())
        } else {
            Err(ClientError::VersionUnavailable { method: self, version })
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wire name that does not correspond to any [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}'")]
pub struct UnknownMethod(pub String);
