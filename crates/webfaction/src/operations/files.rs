//! Files in the account's home directory.

use crate::errors::Result;
use crate::transport::Transport;
use crate::{Client, Method, Value};

/// Mode `write_file` opens the file with unless told otherwise.
pub const DEFAULT_WRITE_MODE: &str = "wb";

impl<T: Transport> Client<T> {
    /// Writes `content` to `filename`, truncating it first.
    pub fn write_file(&self, filename: &str, content: &str) -> Result<Value> {
        self.write_file_with_mode(filename, content, DEFAULT_WRITE_MODE)
    }

    /// Writes `content` to `filename` opened with `mode` (`"wb"` or `"ab"`).
    pub fn write_file_with_mode(&self, filename: &str, content: &str, mode: &str) -> Result<Value> {
        self.send(Method::WriteFile, vec![filename.into(), content.into(), mode.into()])
    }

    /// Replaces text in `filename`. Each change is an `(old, new)` pair,
    /// applied in order. All pairs travel as one array of `[old, new]` arrays.
    pub fn replace_in_file(&self, filename: &str, changes: &[(&str, &str)]) -> Result<Value> {
        self.send(Method::ReplaceInFile, vec![filename.into(), change_list(changes)])
    }
}

fn change_list(changes: &[(&str, &str)]) -> Value {
    Value::Array(
        changes
            .iter()
            .map(|(old, new)| Value::Array(vec![Value::from(*old), Value::from(*new)]))
            .collect(),
    )
}
