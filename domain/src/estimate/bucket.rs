//! Bucket classification as an ordered decision table
//!
//! Rules are checked top to bottom and the first match is final. The table
//! is data ([`BUCKET_RULES`]), so the ordering can be asserted directly.

use super::range::HeadroomRange;
use crate::answers::AnswerSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum adjusted upper bound for the "likely headroom" bucket
pub const LIKELY_HEADROOM_MIN_HIGH: u64 = 90_000;

/// Categorical likelihood attached to a computed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Headroom likely available
    A,
    /// Uncertain, depends on further factors
    B,
    /// Headroom likely constrained
    C,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::A => "A",
            Bucket::B => "B",
            Bucket::C => "C",
        }
    }

    /// Result heading shown for an eligible outcome in this bucket
    pub fn heading(&self) -> &'static str {
        match self {
            Bucket::A => "Headroom likely available",
            Bucket::B => "Uncertain / dependent",
            Bucket::C => "Likely constrained",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Facts the decision table looks at, derived once per classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskProfile {
    pub loss: bool,
    pub heavy_debt: bool,
    pub no_guarantee: bool,
    pub low_revenue: bool,
    pub range: HeadroomRange,
}

impl RiskProfile {
    pub fn new(answers: &AnswerSet, range: HeadroomRange) -> Self {
        Self {
            loss: answers.is_loss_making(),
            heavy_debt: answers.has_heavy_debt(),
            no_guarantee: answers.lacks_guarantee(),
            low_revenue: answers.has_low_revenue(),
            range,
        }
    }

    pub fn risk_flags(&self) -> usize {
        [self.loss, self.heavy_debt, self.no_guarantee]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// One row of the decision table
#[derive(Debug, Clone, Copy)]
pub struct BucketRule {
    /// Stable identifier, reported in diagnostics
    pub name: &'static str,
    pub bucket: Bucket,
    predicate: fn(&RiskProfile) -> bool,
}

impl BucketRule {
    pub fn matches(&self, profile: &RiskProfile) -> bool {
        (self.predicate)(profile)
    }
}

/// Ordered decision table, first match wins
pub static BUCKET_RULES: [BucketRule; 6] = [
    BucketRule {
        name: "zero_range",
        bucket: Bucket::B,
        predicate: |p| p.range.is_zero(),
    },
    BucketRule {
        name: "loss_with_debt_or_low_revenue",
        bucket: Bucket::C,
        predicate: |p| p.loss && (p.heavy_debt || p.low_revenue),
    },
    BucketRule {
        name: "multiple_risk_flags",
        bucket: Bucket::B,
        predicate: |p| p.risk_flags() >= 2,
    },
    BucketRule {
        name: "healthy_with_sizeable_range",
        bucket: Bucket::A,
        predicate: |p| !p.loss && !p.heavy_debt && p.range.high >= LIKELY_HEADROOM_MIN_HIGH,
    },
    BucketRule {
        name: "healthy_low_revenue",
        bucket: Bucket::B,
        predicate: |p| p.low_revenue && !p.loss && !p.heavy_debt,
    },
    BucketRule {
        name: "default",
        bucket: Bucket::B,
        predicate: |_| true,
    },
];

/// Return the first rule that matches.
pub fn classify(answers: &AnswerSet, range: HeadroomRange) -> &'static BucketRule {
    let profile = RiskProfile::new(answers, range);
    let last = BUCKET_RULES.len() - 1;
    BUCKET_RULES
        .iter()
        .find(|rule| rule.matches(&profile))
        .unwrap_or(&BUCKET_RULES[last])
}

/// Classify an adjusted range into a bucket.
pub fn bucketize(answers: &AnswerSet, range: HeadroomRange) -> Bucket {
    classify(answers, range).bucket
}
