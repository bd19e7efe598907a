//! Application-level configuration.
//!
//! - [`EventParams`]: local event log behaviour (enabled flag, record cap)

pub mod event_params;

pub use event_params::{DEFAULT_MAX_EVENT_RECORDS, EventParams};
