//! Dispatch of argument lists assembled at run time.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value, WebsiteRequest};

use super::{databases, sites};

impl<T: Transport> Client<T> {
    /// Dispatches `method` with a loose ordered argument list, applying the
    /// argument rules of the matching typed method first.
    ///
    /// - `create_website` / `update_website`: parsed with
    ///   [`WebsiteRequest::from_positional`] and reshaped for this client's
    ///   API version.
    /// - `create_db`: a non-empty owner replaces the password with `""`; a
    ///   missing owner is sent as `""`.
    /// - `create_domain` / `delete_domain`: the domain name is lower-cased.
    ///
    /// Every other method is sent as given, as with [`Client::send`].
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidArguments`](crate::ClientError::InvalidArguments)
    /// if a website argument list cannot be parsed, otherwise as
    /// [`Client::send`].
    pub fn call(&self, method: Method, args: Vec<Value>) -> Result<Value> {
        let args = match method {
            Method::CreateWebsite | Method::UpdateWebsite => {
                WebsiteRequest::from_positional(method, self.version(), args)?.into_params(self.version())
            }
            Method::CreateDb => databases::shape_create_db_args(args),
            Method::CreateDomain | Method::DeleteDomain => sites::lowercase_domain_arg(args),
            _ => args,
        };
        self.send(method, args)
    }
}
