//! Mailboxes and email addresses.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

/// Optional settings of `create_mailbox` / `update_mailbox`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxOptions {
    /// Default `true`.
    pub enable_spam_protection: bool,
    /// Default `false`.
    pub discard_spam: bool,
    /// Folder spam is moved to; default empty.
    pub spam_redirect_folder: String,
    /// Default `false`.
    pub use_manual_procmailrc: bool,
    /// Procmail rules used when `use_manual_procmailrc` is set; default empty.
    pub manual_procmailrc: String,
}

impl Default for MailboxOptions {
    fn default() -> Self {
        Self {
            enable_spam_protection: true,
            discard_spam: false,
            spam_redirect_folder: String::new(),
            use_manual_procmailrc: false,
            manual_procmailrc: String::new(),
        }
    }
}

impl MailboxOptions {
    fn to_params(&self, name: &str) -> Vec<Value> {
        vec![
            name.into(),
            self.enable_spam_protection.into(),
            self.discard_spam.into(),
            (&self.spam_redirect_folder).into(),
            self.use_manual_procmailrc.into(),
            (&self.manual_procmailrc).into(),
        ]
    }
}

/// Optional settings of `create_email` / `update_email`. All default to off
/// or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailOptions {
    pub autoresponder_on: bool,
    pub autoresponder_subject: String,
    pub autoresponder_message: String,
    pub autoresponder_from: String,
    /// Machine that runs `script_path` on delivery.
    pub script_machine: String,
    /// Script that receives each delivered message.
    pub script_path: String,
}

impl EmailOptions {
    fn to_params(&self, address: &str, targets: &str) -> Vec<Value> {
        vec![
            address.into(),
            targets.into(),
            self.autoresponder_on.into(),
            (&self.autoresponder_subject).into(),
            (&self.autoresponder_message).into(),
            (&self.autoresponder_from).into(),
            (&self.script_machine).into(),
            (&self.script_path).into(),
        ]
    }
}

impl<T: Transport> Client<T> {
    pub fn list_mailboxes(&self) -> Result<Value> {
        self.send(Method::ListMailboxes, vec![])
    }

    pub fn create_mailbox(&self, name: &str, options: &MailboxOptions) -> Result<Value> {
        self.send(Method::CreateMailbox, options.to_params(name))
    }

    pub fn update_mailbox(&self, name: &str, options: &MailboxOptions) -> Result<Value> {
        self.send(Method::UpdateMailbox, options.to_params(name))
    }

    pub fn change_mailbox_password(&self, mailbox: &str, password: &str) -> Result<Value> {
        self.send(Method::ChangeMailboxPassword, vec![mailbox.into(), password.into()])
    }

    pub fn delete_mailbox(&self, name: &str) -> Result<Value> {
        self.send(Method::DeleteMailbox, vec![name.into()])
    }

    /// Creates an address delivering to `targets`, a comma-separated list of
    /// mailboxes and/or external addresses.
    pub fn create_email(&self, address: &str, targets: &str, options: &EmailOptions) -> Result<Value> {
        self.send(Method::CreateEmail, options.to_params(address, targets))
    }

    /// Replaces every setting of an existing address.
    pub fn update_email(&self, address: &str, targets: &str, options: &EmailOptions) -> Result<Value> {
        self.send(Method::UpdateEmail, options.to_params(address, targets))
    }

    pub fn delete_email(&self, address: &str) -> Result<Value> {
        self.send(Method::DeleteEmail, vec![address.into()])
    }

    pub fn list_emails(&self) -> Result<Value> {
        self.send(Method::ListEmails, vec![])
    }
}
