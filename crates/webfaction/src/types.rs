//! Shared value types for the WebFaction client.
//!
//! [`Value`] is the plain structured value exchanged with the transport: every
//! argument is converted into one before encoding, and every success payload
//! is decoded into one. No schema is imposed on decoded payloads; callers
//! inspect the shape they expect with the accessor helpers.
//!
//! [`ApiVersion`] enumerates the remote contract revisions the client
//! supports, and [`DbType`] the database engines accepted by the database
//! methods.

use std::collections::BTreeMap;

use base64::Engine;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Structured values
// ---------------------------------------------------------------------------

/// A decoded or to-be-encoded remote value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// An integer. Wire formats with 32-bit integers widen on decode.
    Int(i64),
    /// A floating point number.
    Double(f64),
    /// A string.
    String(String),
    /// Raw bytes, carried base64-encoded on the wire.
    Base64(Vec<u8>),
    /// An ISO-8601 timestamp, kept as text.
    DateTime(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A string-keyed mapping.
    Struct(BTreeMap<String, Value>),
}

impl Value {
    /// Creates a [`Value::Base64`] from raw bytes.
    pub fn base64(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Base64(bytes.into())
    }

    /// Returns `true` for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as `f64`, for both [`Value::Int`] and [`Value::Double`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text of a [`Value::String`] or [`Value::DateTime`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::DateTime(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a [`Value::Array`].
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the members, if this is a [`Value::Struct`].
    pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up `key` in a [`Value::Struct`].
    ///
    /// Returns `None` for missing keys and for values that are not structs.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|members| members.get(key))
    }

    /// Consumes the value and returns its elements, if it is a [`Value::Array`].
    pub fn into_array(self) -> Option<Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Double(d) => serializer.serialize_f64(*d),
            Self::String(s) | Self::DateTime(s) => serializer.serialize_str(s),
            Self::Base64(bytes) => {
                serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
            }
            Self::Array(items) => serializer.collect_seq(items),
            Self::Struct(members) => serializer.collect_map(members),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Self::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(members: BTreeMap<String, Value>) -> Self {
        Self::Struct(members)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    /// Numbers that fit in `i64` become [`Value::Int`]; all others become
    /// [`Value::Double`].
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(members) => {
                Self::Struct(members.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Revision of the remote API contract.
///
/// Sent to the remote side during `login`. Some methods exist only in later
/// revisions, and the website methods take a different argument list per
/// revision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum ApiVersion {
    /// The original contract. Default, as the earliest supported revision.
    #[default]
    V1 = 1,
    /// Adds certificate management and a certificate argument on websites.
    V2 = 2,
}

impl ApiVersion {
    /// Every supported revision, earliest first.
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    /// Returns the revision number sent on the wire.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ApiVersion {
    type Error = UnsupportedVersion;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(UnsupportedVersion(other)),
        }
    }
}

impl From<ApiVersion> for u32 {
    fn from(version: ApiVersion) -> Self {
        version.as_u32()
    }
}

impl std::str::FromStr for ApiVersion {
    type Err = UnsupportedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().parse::<u32>().map_err(|_| UnsupportedVersion(0))?;
        Self::try_from(number)
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// An API version number this client does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported API version {0}; supported versions are 1 and 2")]
pub struct UnsupportedVersion(pub u32);

// ---------------------------------------------------------------------------
// Databases
// ---------------------------------------------------------------------------

/// Database engine accepted by the database methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// MySQL.
    Mysql,
    /// PostgreSQL.
    Postgresql,
}

impl DbType {
    /// Returns the engine name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
        }
    }
}

impl std::str::FromStr for DbType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Self::Mysql),
            "postgresql" => Ok(Self::Postgresql),
            other => Err(format!("unknown database type '{other}'")),
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DbType> for Value {
    fn from(db_type: DbType) -> Self {
        Self::String(db_type.as_str().to_owned())
    }
}
