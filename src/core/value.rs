//! Loggable values and their text serialization
//!
//! Every value handed to the dispatcher is one of a closed set of shapes:
//! scalars, an insertion-ordered mapping, an insertion-ordered unique
//! collection, an arbitrary composite (JSON) value, or an absent value.
//! Each value serializes to text independently; joining the resulting
//! strings is left to the transport that renders them.

use std::fmt;

/// Value type for loggable data
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Key-value entries, keys unique, insertion order preserved
    Map(Vec<(LogValue, LogValue)>),
    /// Unique items, insertion order preserved
    Set(Vec<LogValue>),
    /// Arbitrary structured value, rendered as compact JSON
    Composite(serde_json::Value),
    /// A value that was not supplied
    Absent,
}

impl LogValue {
    /// Serialize this value to its stable text representation.
    ///
    /// Rules, first match wins:
    /// 1. `Map` renders as `Map:{ k1 => v1, k2 => v2 }` with keys and values
    ///    serialized recursively.
    /// 2. `Set` renders as `Set:{ v1, v2 }`.
    /// 3. `Composite` renders as its compact JSON encoding.
    /// 4. `Absent` renders as the literal `undefined`.
    /// 5. Scalars render through their `Display` conversion.
    #[must_use]
    pub fn serialize(&self) -> String {
        match self {
            LogValue::Map(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| format!("{} => {}", key.serialize(), value.serialize()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Map:{{ {} }}", entries)
            }
            LogValue::Set(items) => {
                let items = items
                    .iter()
                    .map(LogValue::serialize)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Set:{{ {} }}", items)
            }
            LogValue::Composite(value) => value.to_string(),
            LogValue::Absent => "undefined".to_string(),
            LogValue::Text(s) => s.clone(),
            LogValue::Int(i) => i.to_string(),
            LogValue::Float(f) => f.to_string(),
            LogValue::Bool(b) => b.to_string(),
        }
    }

    /// Build a mapping value from key-value pairs, preserving order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<LogValue>,
        V: Into<LogValue>,
    {
        LogValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a unique-collection value from items, preserving order.
    pub fn set<V: Into<LogValue>>(items: impl IntoIterator<Item = V>) -> Self {
        LogValue::Set(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

/// Serialize a sequence of values, one string per value, no joining.
#[must_use]
pub fn serialize_values(values: &[LogValue]) -> Vec<String> {
    values.iter().map(LogValue::serialize).collect()
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Composite(value)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => LogValue::Absent,
        }
    }
}
