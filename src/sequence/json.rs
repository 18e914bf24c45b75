//! Normalization of dynamically shaped JSON input.
//!
//! The shape of a [`serde_json::Value`] is only known at runtime, so
//! [`normalize_json`] classifies it when called: arrays, objects and strings
//! become a [`JsonCursor`], scalars are rejected.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::error::Error;
//! use lambseq::sequence::{normalize_json, JsonKey, Sequence};
//! use serde_json::json;
//!
//! let cursor = normalize_json(json!({"name": "Ada", "born": 1815})).unwrap();
//! assert_eq!(
//!     cursor.keys().collect::<Vec<_>>(),
//!     vec![JsonKey::Name("name".into()), JsonKey::Name("born".into())]
//! );
//!
//! assert_eq!(
//!     normalize_json(json!(42)).unwrap_err(),
//!     Error::UnsupportedSourceKind { kind: "number" }
//! );
//! ```

use std::fmt;

use serde_json::Value;

use super::cursor::Cursor;
use super::source::{ArrayCursor, TextCursor};
use crate::error::{Error, Result};

/// The key of an entry produced by a [`JsonCursor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JsonKey {
    /// A position in an array or a code point index in a string.
    Index(usize),
    /// A member name of an object.
    Name(String),
}

impl fmt::Display for JsonKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// A cursor over a JSON array, object or string.
///
/// Strings yield one single-character `Value::String` per code point.
#[derive(Debug, Clone)]
pub enum JsonCursor {
    /// Elements keyed by position.
    Array(ArrayCursor<usize, Value>),
    /// Members keyed by name, in document order.
    Object(ArrayCursor<String, Value>),
    /// Code points keyed by index.
    Text(TextCursor<'static>),
}

impl Cursor for JsonCursor {
    type Key = JsonKey;
    type Value = Value;

    fn pull(&mut self) -> Option<(JsonKey, Value)> {
        match self {
            Self::Array(cursor) => cursor
                .pull()
                .map(|(index, value)| (JsonKey::Index(index), value)),
            Self::Object(cursor) => cursor.pull().map(|(name, value)| (JsonKey::Name(name), value)),
            Self::Text(cursor) => cursor
                .pull()
                .map(|(index, character)| (JsonKey::Index(index), Value::String(character.to_string()))),
        }
    }
}

/// Classifies `value` and returns its cursor.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSourceKind`] for `null`, booleans and numbers.
pub fn normalize_json(value: Value) -> Result<JsonCursor> {
    let kind = match value {
        Value::Array(elements) => return Ok(JsonCursor::Array(ArrayCursor::from_values(elements))),
        Value::Object(members) => return Ok(JsonCursor::Object(ArrayCursor::from_entries(members))),
        Value::String(text) => return Ok(JsonCursor::Text(TextCursor::new(text))),
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
    };
    tracing::debug!(kind, "rejected a scalar JSON source");
    Err(Error::UnsupportedSourceKind { kind })
}
