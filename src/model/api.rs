use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a backend record, kept in whichever JSON form the backend used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Generic `{ "message": ... }` acknowledgement returned by action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageDto {
    /// Server message, or `default` when the backend sent none.
    pub fn message_or(self, default: &str) -> String {
        self.message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

impl EntityId {
    /// Reads an identifier from a JSON value; only integers and strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(id) => id.as_i64().map(Self::Number),
            Value::String(id) => Some(Self::Text(id.clone())),
            _ => None,
        }
    }
}

/// A backend record kept exactly as received.
///
/// Fields are read through typed accessors, which report `None` for absent, `null` or
/// differently typed values instead of rejecting the record. Writing it back yields the
/// same JSON object, nulls and unknown fields included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn id(&self) -> Option<EntityId> {
        self.get("id").and_then(EntityId::from_value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
