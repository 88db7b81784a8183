//! Shell users.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

impl<T: Transport> Client<T> {
    pub fn list_users(&self) -> Result<Value> {
        self.send(Method::ListUsers, vec![])
    }

    /// Creates a shell user with login `shell` (e.g. `"bash"`, or `"none"`
    /// for an FTP-only user) and supplementary `groups`.
    pub fn create_user(&self, username: &str, shell: &str, groups: &[&str]) -> Result<Value> {
        self.send(Method::CreateUser, vec![username.into(), shell.into(), groups.into()])
    }

    pub fn change_user_password(&self, username: &str, password: &str) -> Result<Value> {
        self.send(Method::ChangeUserPassword, vec![username.into(), password.into()])
    }

    pub fn delete_user(&self, username: &str) -> Result<Value> {
        self.send(Method::DeleteUser, vec![username.into()])
    }
}
