//! Application layer for finruimte
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_EVENT_RECORDS, EventParams};
pub use ports::event_log::{EventKind, EventLog, EventRecord, MemoryEventLog, NoEventLog};
pub use use_cases::run_estimate::{RunEstimateInput, RunEstimateUseCase};
pub use use_cases::wizard::{WizardError, WizardSession, WizardStep};
