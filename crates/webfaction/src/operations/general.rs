//! Account-wide, server, cron and miscellaneous operations.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

impl<T: Transport> Client<T> {
    /// Disk usage per category plus `total`, `quota` and `percentage`.
    pub fn list_disk_usage(&self) -> Result<Value> {
        self.send(Method::ListDiskUsage, vec![])
    }

    pub fn list_bandwidth_usage(&self) -> Result<Value> {
        self.send(Method::ListBandwidthUsage, vec![])
    }

    pub fn list_ips(&self) -> Result<Value> {
        self.send(Method::ListIps, vec![])
    }

    pub fn list_machines(&self) -> Result<Value> {
        self.send(Method::ListMachines, vec![])
    }

    // -----------------------------------------------------------------------
    // Cron
    // -----------------------------------------------------------------------

    /// Appends `line` to the account's crontab.
    pub fn create_cronjob(&self, line: &str) -> Result<Value> {
        self.send(Method::CreateCronjob, vec![line.into()])
    }

    /// Removes `line` from the account's crontab. The line must match exactly.
    pub fn delete_cronjob(&self, line: &str) -> Result<Value> {
        self.send(Method::DeleteCronjob, vec![line.into()])
    }

    // -----------------------------------------------------------------------
    // Miscellaneous
    // -----------------------------------------------------------------------

    /// Runs the PHP script at `script_path`, evaluating `code_before` first.
    pub fn run_php_script(&self, script_path: &str, code_before: &str) -> Result<Value> {
        self.send(Method::RunPhpScript, vec![script_path.into(), code_before.into()])
    }

    /// Grants the web server `permission` (e.g. `"rwx"`) on `paths`.
    ///
    /// A single path is sent as a string and several as an array, matching
    /// the two forms the remote side accepts.
    pub fn set_apache_acl(&self, paths: &[&str], permission: &str, recursive: bool) -> Result<Value> {
        let paths = match paths {
            [single] => Value::from(*single),
            many => Value::from(many),
        };
        self.send(Method::SetApacheAcl, vec![paths, permission.into(), recursive.into()])
    }

    /// Runs `command` in the account's shell and returns its output.
    pub fn system(&self, command: &str) -> Result<Value> {
        self.send(Method::System, vec![command.into()])
    }
}
