//! Event log parameters: session logging control.
//!
//! [`EventParams`] groups the static parameters that control how the wizard
//! records its local event list. These are application-layer concerns: the
//! estimator itself never looks at them.

use serde::{Deserialize, Serialize};

/// Default cap on stored event records (most recent kept)
pub const DEFAULT_MAX_EVENT_RECORDS: usize = 2000;

/// Event logging parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParams {
    /// Record events at all.
    pub enabled: bool,
    /// Maximum number of records retained; older ones are dropped first.
    pub max_records: usize,
}

impl Default for EventParams {
    fn default() -> Self {
        Self {
            enabled: true,
            max_records: DEFAULT_MAX_EVENT_RECORDS,
        }
    }
}

impl EventParams {
    // ==================== Builder Methods ====================

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Cap actually applied: at least one record is always kept
    pub fn effective_max_records(&self) -> usize {
        self.max_records.max(1)
    }
}
