use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Movie identifier as sent by clients
///
/// Catalog clients send either strings (`"m1"`) or numbers (`550`), and both
/// end up in the persisted lists. The raw JSON value is kept as-is; `550` and
/// `"550"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(Value);

impl MovieId {
    /// False for the values a client uses to mean "nothing": null, false, 0,
    /// empty strings and empty arrays/objects
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(Value::String(id.to_string()))
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        MovieId(Value::from(id))
    }
}

impl PartialEq<&str> for MovieId {
    fn eq(&self, other: &&str) -> bool {
        matches!(&self.0, Value::String(s) if s == other)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Deserialize `null` as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
