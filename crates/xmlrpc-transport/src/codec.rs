//! Conversion between [`webfaction::Value`] and [`xmlrpc::Value`].

use webfaction::Value;

/// Encodes a client value into an XML-RPC value.
///
/// Integers that fit in 32 bits use `<int>`; wider ones use the `<i8>`
/// extension. Timestamps are sent as strings.
pub fn encode(value: &Value) -> xmlrpc::Value {
    match value {
        Value::Nil => xmlrpc::Value::Nil,
        Value::Bool(b) => xmlrpc::Value::Bool(*b),
        Value::Int(i) => match i32::try_from(*i) {
            Ok(small) => xmlrpc::Value::Int(small),
            Err(_) => xmlrpc::Value::Int64(*i),
        },
        Value::Double(d) => xmlrpc::Value::Double(*d),
        Value::String(s) | Value::DateTime(s) => xmlrpc::Value::String(s.clone()),
        Value::Base64(bytes) => xmlrpc::Value::Base64(bytes.clone()),
        Value::Array(items) => xmlrpc::Value::Array(items.iter().map(encode).collect()),
        Value::Struct(members) => {
            xmlrpc::Value::Struct(members.iter().map(|(k, v)| (k.clone(), encode(v))).collect())
        }
    }
}

/// Decodes an XML-RPC value into a client value.
pub fn decode(value: xmlrpc::Value) -> Value {
    match value {
        xmlrpc::Value::Nil => Value::Nil,
        xmlrpc::Value::Bool(b) => Value::Bool(b),
        xmlrpc::Value::Int(i) => Value::Int(i64::from(i)),
        xmlrpc::Value::Int64(i) => Value::Int(i),
        xmlrpc::Value::Double(d) => Value::Double(d),
        xmlrpc::Value::String(s) => Value::String(s),
        xmlrpc::Value::DateTime(dt) => Value::DateTime(dt.to_string()),
        xmlrpc::Value::Base64(bytes) => Value::Base64(bytes),
        xmlrpc::Value::Array(items) => Value::Array(items.into_iter().map(decode).collect()),
        xmlrpc::Value::Struct(members) => {
            Value::Struct(members.into_iter().map(|(k, v)| (k, decode(v))).collect())
        }
    }
}
