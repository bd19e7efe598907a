//! Logging infrastructure: the local, bounded session event log.
//!
//! Operational diagnostics go through `tracing`; this module only covers the
//! machine-readable JSONL funnel written by the wizard.

pub mod jsonl_event_log;

pub use jsonl_event_log::JsonlEventLog;
