//! Databases and database users.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, DbType, Method, Value};

impl<T: Transport> Client<T> {
    pub fn list_dbs(&self) -> Result<Value> {
        self.send(Method::ListDbs, vec![])
    }

    /// Creates a database.
    ///
    /// With `db_user` set to an existing database user, that user becomes the
    /// owner and `password` is not sent (an empty string takes its place).
    /// Without an owner, a new user named after the database is created with
    /// `password`. An empty `db_user` counts as no owner.
    pub fn create_db(
        &self,
        name: &str,
        db_type: DbType,
        password: &str,
        db_user: Option<&str>,
    ) -> Result<Value> {
        self.send(Method::CreateDb, create_db_params(name, db_type, password, db_user))
    }

    /// Enables an extension (e.g. `"postgis"`) on a database.
    pub fn enable_addon(&self, db_name: &str, db_type: DbType, addon: &str) -> Result<Value> {
        self.send(Method::EnableAddon, vec![db_name.into(), db_type.into(), addon.into()])
    }

    pub fn delete_db(&self, db_name: &str, db_type: DbType) -> Result<Value> {
        self.send(Method::DeleteDb, vec![db_name.into(), db_type.into()])
    }

    pub fn list_db_users(&self) -> Result<Value> {
        self.send(Method::ListDbUsers, vec![])
    }

    pub fn create_db_user(&self, username: &str, password: &str, db_type: DbType) -> Result<Value> {
        self.send(Method::CreateDbUser, vec![username.into(), password.into(), db_type.into()])
    }

    pub fn change_db_user_password(&self, username: &str, password: &str, db_type: DbType) -> Result<Value> {
        self.send(
            Method::ChangeDbUserPassword,
            vec![username.into(), password.into(), db_type.into()],
        )
    }

    pub fn grant_db_permissions(&self, username: &str, db_name: &str, db_type: DbType) -> Result<Value> {
        self.send(
            Method::GrantDbPermissions,
            vec![username.into(), db_name.into(), db_type.into()],
        )
    }

    pub fn make_user_owner_of_db(&self, username: &str, db_name: &str, db_type: DbType) -> Result<Value> {
        self.send(
            Method::MakeUserOwnerOfDb,
            vec![username.into(), db_name.into(), db_type.into()],
        )
    }

    pub fn revoke_db_permissions(&self, username: &str, db_name: &str, db_type: DbType) -> Result<Value> {
        self.send(
            Method::RevokeDbPermissions,
            vec![username.into(), db_name.into(), db_type.into()],
        )
    }

    pub fn delete_db_user(&self, username: &str, db_type: DbType) -> Result<Value> {
        self.send(Method::DeleteDbUser, vec![username.into(), db_type.into()])
    }
}

/// Password and owner are mutually exclusive: an owner suppresses the password.
fn owner_suppresses_password(db_user: &str) -> bool {
    !db_user.is_empty()
}

fn create_db_params(name: &str, db_type: DbType, password: &str, db_user: Option<&str>) -> Vec<Value> {
    let db_user = db_user.unwrap_or_default();
    let password = if owner_suppresses_password(db_user) { "" } else { password };

    vec![name.into(), db_type.into(), password.into(), db_user.into()]
}

/// Applies the owner rule to a loose `[name, db_type, password, db_user]`
/// list. A missing `db_user` is filled in as `""`.
pub(crate) fn shape_create_db_args(mut args: Vec<Value>) -> Vec<Value> {
    if args.len() == 3 {
        args.push(Value::from(""));
    }
    let suppress = args
        .get(3)
        .and_then(Value::as_str)
        .is_some_and(owner_suppresses_password);
    if suppress {
        args[2] = Value::from("");
    }
    args
}
