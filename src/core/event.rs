//! Log event structure

use super::severity::Severity;
use super::value::{serialize_values, LogValue};
use chrono::{DateTime, Utc};

/// Scope applied when the caller does not supply one.
pub const DEFAULT_SCOPE: &str = "default";

/// A single log call as observed by every transport.
///
/// Built once per dispatcher call and borrowed immutably by each transport;
/// the timestamp is shared across the whole fan-out.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: Severity,
    pub scope: String,
    pub values: Vec<LogValue>,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    pub fn new(severity: Severity, scope: impl Into<String>, values: Vec<LogValue>) -> Self {
        Self {
            severity,
            scope: scope.into(),
            values,
            timestamp: Utc::now(),
        }
    }

    /// Each value serialized independently, in order.
    #[must_use]
    pub fn serialized_values(&self) -> Vec<String> {
        serialize_values(&self.values)
    }

    /// All values serialized and space-joined.
    #[must_use]
    pub fn joined_message(&self) -> String {
        self.serialized_values().join(" ")
    }

    /// `<scope>: <joined values>`, or just the joined values when the scope
    /// is empty.
    #[must_use]
    pub fn scoped_message(&self) -> String {
        let message = self.joined_message();
        if self.scope.is_empty() {
            message
        } else {
            format!("{}: {}", self.scope, message)
        }
    }
}
