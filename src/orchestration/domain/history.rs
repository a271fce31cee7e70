//! Handover audit trail recorded on each task.
//!
//! Every action taken on a task appends one immutable entry. The log is
//! never truncated or reordered: entries are appended in occurrence order
//! and projected newest-first only at the display boundary.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Detail key conventionally carrying a human-readable message.
const MESSAGE_KEY: &str = "message";

/// One immutable audit-log record of an action taken on a task.
///
/// `details` is an open, order-irrelevant map: callers intentionally store
/// heterogeneous diagnostic payloads alongside the conventional `message`
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoverEntry {
    action: String,
    by: String,
    at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    details: HashMap<String, Value>,
}

impl HandoverEntry {
    /// Creates an entry timestamped with the current clock time.
    #[must_use]
    pub fn new(action: impl Into<String>, by: impl Into<String>, clock: &impl Clock) -> Self {
        Self::recorded_at(action, by, clock.utc())
    }

    /// Creates an entry with an explicit timestamp, for reconstruction
    /// from persisted histories.
    #[must_use]
    pub fn recorded_at(
        action: impl Into<String>,
        by: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            action: action.into(),
            by: by.into(),
            at,
            details: HashMap::new(),
        }
    }

    /// Adds one detail field.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Adds the conventional `message` detail field.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_detail(MESSAGE_KEY, Value::String(message.into()))
    }

    /// Returns the recorded action name.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the identity that performed the action.
    #[must_use]
    pub fn by(&self) -> &str {
        &self.by
    }

    /// Returns when the action occurred.
    #[must_use]
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Returns the open detail map.
    #[must_use]
    pub const fn details(&self) -> &HashMap<String, Value> {
        &self.details
    }

    /// Returns the `message` detail when present and textual.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.details.get(MESSAGE_KEY).and_then(Value::as_str)
    }
}

/// Ordered, append-only handover log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandoverLog(Vec<HandoverEntry>);

impl HandoverLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Reconstructs a log from persisted entries, preserving their order.
    #[must_use]
    pub const fn from_entries(entries: Vec<HandoverEntry>) -> Self {
        Self(entries)
    }

    /// Appends one entry to the end of the log.
    pub fn record(&mut self, entry: HandoverEntry) {
        self.0.push(entry);
    }

    /// Returns the entries in occurrence order, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HandoverEntry] {
        &self.0
    }

    /// Returns the entries newest first, as displayed.
    pub fn newest_first(&self) -> impl Iterator<Item = &HandoverEntry> {
        self.0.iter().rev()
    }

    /// Returns the most recently recorded entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HandoverEntry> {
        self.0.last()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
