//! Infrastructure layer for finruimte
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading and the
//! bounded JSONL event log.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEventsConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use logging::JsonlEventLog;
