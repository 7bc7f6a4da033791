//! Raw record entity as returned by the record store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON pointer to a record's title text.
pub const NAME_POINTER: &str = "/properties/name/title/0/text/content";

/// JSON pointer to a record's link text.
pub const LINK_POINTER: &str = "/properties/link/rich_text/0/plain_text";

/// JSON pointer to a record's description text.
pub const DESCRIPTION_POINTER: &str = "/properties/description/rich_text/0/plain_text";

/// A loosely-typed record from the external store.
///
/// The store returns nested objects whose properties may be missing, empty, or of
/// an unexpected shape. The record is kept as an opaque JSON value so that one
/// malformed entry never fails decoding of the whole result page; fields are read
/// on demand through [`ExternalRecord::text_at`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExternalRecord(Value);

impl ExternalRecord {
    /// Wraps a raw JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the store-assigned record id, if present.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Reads the string at `pointer`.
    ///
    /// Returns `None` when any segment is missing or the leaf is not a string.
    pub fn text_at(&self, pointer: &str) -> Option<&str> {
        self.0.pointer(pointer).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text_at(NAME_POINTER)
    }

    pub fn link(&self) -> Option<&str> {
        self.text_at(LINK_POINTER)
    }

    pub fn description(&self) -> Option<&str> {
        self.text_at(DESCRIPTION_POINTER)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ExternalRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
