//! Estimation outcome value objects

use super::bucket::Bucket;
use super::eligibility::Eligibility;
use super::range::HeadroomRange;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Follow-up a user can pick from the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKey {
    ExploreIndependently,
    LearnMore,
    SeekAdvice,
}

impl ActionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKey::ExploreIndependently => "explore_independently",
            ActionKey::LearnMore => "learn_more",
            ActionKey::SeekAdvice => "seek_advice",
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "explore_independently" | "explore" | "vergelijken" => {
                Ok(ActionKey::ExploreIndependently)
            }
            "learn_more" | "learn" | "meer_uitleg" => Ok(ActionKey::LearnMore),
            "seek_advice" | "advice" | "advies" => Ok(ActionKey::SeekAdvice),
            _ => Err(DomainError::UnknownAction(s.to_string())),
        }
    }
}

/// A suggested next step with its label and explanatory note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub action_key: ActionKey,
    pub label: String,
    pub note: String,
}

/// Immutable result of one estimation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub bucket: Bucket,
    /// Absent only when the answers were excluded
    pub range: Option<HeadroomRange>,
    pub assumption_notes: Vec<String>,
    pub sensitivity_notes: Vec<String>,
    pub disclaimer_notes: Vec<String>,
    pub suggested_next_actions: Vec<SuggestedAction>,
}

impl Outcome {
    pub fn has_action(&self, key: ActionKey) -> bool {
        self.suggested_next_actions
            .iter()
            .any(|action| action.action_key == key)
    }

    pub fn action_keys(&self) -> Vec<ActionKey> {
        self.suggested_next_actions
            .iter()
            .map(|action| action.action_key)
            .collect()
    }
}

/// Eligibility verdict paired with the outcome it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub eligibility: Eligibility,
    pub outcome: Outcome,
}

impl Estimate {
    /// Result heading for display
    pub fn heading(&self) -> &'static str {
        if self.eligibility.is_excluded() {
            "Out of scope"
        } else {
            self.outcome.bucket.heading()
        }
    }
}
