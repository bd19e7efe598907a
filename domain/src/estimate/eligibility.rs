//! Eligibility gate
//!
//! A single hard exclusion rule: businesses that have not been active for
//! twelve months are out of scope. Everything else proceeds to computation.

use crate::answers::AnswerSet;
use serde::{Deserialize, Serialize};

/// Machine-readable reason for the only exclusion rule
pub const OUT_OF_SCOPE: &str = "out_of_scope";

/// Human-readable explanation attached to [`OUT_OF_SCOPE`]
pub const OUT_OF_SCOPE_EXPLANATION: &str = "tool requires ≥12 months of trading history";

/// Result of the eligibility check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Eligibility {
    /// Proceed to range computation
    #[serde(rename = "ok")]
    Eligible,
    /// Outside the tool's scope
    Excluded { reason: String, explanation: String },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Eligibility::Excluded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Excluded { reason, .. } => Some(reason),
        }
    }
}

/// Apply the hard exclusion rule.
///
/// An unanswered or low revenue band never excludes; it flows through to a
/// zero-width range instead.
pub fn check_eligibility(answers: &AnswerSet) -> Eligibility {
    if answers.is_active() {
        Eligibility::Eligible
    } else {
        Eligibility::Excluded {
            reason: OUT_OF_SCOPE.to_string(),
            explanation: OUT_OF_SCOPE_EXPLANATION.to_string(),
        }
    }
}
