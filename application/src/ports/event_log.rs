//! Port for local session event logging.
//!
//! Defines the [`EventLog`] trait for recording wizard events (session start,
//! step views and submits, exits, results and result actions) to a local,
//! bounded, append-only list used for diagnostics only.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the session
//! funnel in a machine-readable format (JSONL). The estimator never reads it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Mutex;

/// Kind of a recorded session event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStart,
    StepView,
    StepSubmit,
    Exit,
    ResultView,
    ResultAction,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SessionStart => "session_start",
            EventKind::StepView => "step_view",
            EventKind::StepSubmit => "step_submit",
            EventKind::Exit => "exit",
            EventKind::ResultView => "result_view",
            EventKind::ResultAction => "result_action",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single logged event: timestamp, session, kind and free-form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Milliseconds since the Unix epoch (UTC)
    pub ts: i64,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl EventRecord {
    /// Create a record stamped with the current UTC time.
    pub fn now(session_id: impl Into<String>, kind: EventKind, payload: Value) -> Self {
        Self {
            ts: chrono::Utc::now().timestamp_millis(),
            session_id: session_id.into(),
            kind,
            payload,
        }
    }
}

/// Port for appending session events to a local log.
///
/// The `log` method is intentionally synchronous and non-fallible: event
/// logging is best-effort and a failed write must never affect estimation.
pub trait EventLog: Send + Sync {
    /// Append an event record.
    fn log(&self, record: EventRecord);
}

/// No-op implementation for `--no-events` and when logging is disabled.
pub struct NoEventLog;

impl EventLog for NoEventLog {
    fn log(&self, _record: EventRecord) {}
}

/// In-memory event log keeping the most recent `capacity` records.
///
/// Useful for tests and for embedding the wizard without touching disk.
pub struct MemoryEventLog {
    records: Mutex<Vec<EventRecord>>,
    capacity: usize,
}

impl MemoryEventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Snapshot of the stored records, oldest first
    pub fn records(&self) -> Vec<EventRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Kinds of the stored records, oldest first
    pub fn kinds(&self) -> Vec<EventKind> {
        self.records().iter().map(|r| r.kind).collect()
    }
}

impl Default for MemoryEventLog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_EVENT_RECORDS)
    }
}

impl EventLog for MemoryEventLog {
    fn log(&self, record: EventRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
            if records.len() > self.capacity {
                let excess = records.len() - self.capacity;
                records.drain(..excess);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_type_field() {
        let record = EventRecord::now("abc", EventKind::StepView, json!({"step": "scope"}));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "step_view");
        assert_eq!(value["session_id"], "abc");
        assert_eq!(value["payload"]["step"], "scope");
        assert!(value["ts"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_null_payload_is_omitted() {
        let record = EventRecord::now("abc", EventKind::SessionStart, Value::Null);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("payload").is_none());

        let back: EventRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.payload, Value::Null);
    }

    #[test]
    fn test_memory_log_keeps_most_recent() {
        let log = MemoryEventLog::new(3);
        for i in 0..5 {
            log.log(EventRecord::now(format!("s{}", i), EventKind::StepView, Value::Null));
        }
        let ids: Vec<_> = log.records().into_iter().map(|r| r.session_id).collect();
        assert_eq!(ids, vec!["s2", "s3", "s4"]);
    }
}
