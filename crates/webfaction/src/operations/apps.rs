//! Applications.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

/// Optional settings of `create_app`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppOptions {
    /// Start the application automatically. Default `false`.
    pub autostart: bool,
    /// Type-specific extra information (e.g. a symlink target). Default empty.
    pub extra_info: String,
    /// Open the application's port to the outside. Default `false`.
    pub open_port: bool,
}

impl<T: Transport> Client<T> {
    /// Application types installable on the account's machine.
    pub fn list_app_types(&self) -> Result<Value> {
        self.send(Method::ListAppTypes, vec![])
    }

    pub fn list_apps(&self) -> Result<Value> {
        self.send(Method::ListApps, vec![])
    }

    /// Installs an application of `app_type` (a name from [`Client::list_app_types`]).
    pub fn create_app(&self, name: &str, app_type: &str, options: &AppOptions) -> Result<Value> {
        self.send(
            Method::CreateApp,
            vec![
                name.into(),
                app_type.into(),
                options.autostart.into(),
                (&options.extra_info).into(),
                options.open_port.into(),
            ],
        )
    }

    pub fn delete_app(&self, name: &str) -> Result<Value> {
        self.send(Method::DeleteApp, vec![name.into()])
    }
}
