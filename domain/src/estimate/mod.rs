//! Headroom estimation
//!
//! The estimator is a short, order-sensitive pipeline:
//!
//! ```text
//! AnswerSet
//!    │
//!    ├─▶ check_eligibility ──(excluded)──▶ fixed Outcome, bucket C, no range
//!    │
//!    └─▶ base_range ─▶ adjust ─▶ bucketize ─▶ notes + actions ─▶ Outcome
//! ```
//!
//! Everything here is pure and synchronous. Lookup tables (base ranges,
//! stage factors, bucket rules, note text) are static data so tests can
//! assert against them directly.

pub mod bucket;
pub mod eligibility;
pub mod estimator;
pub mod notes;
pub mod outcome;
pub mod range;

pub use bucket::{BUCKET_RULES, Bucket, BucketRule, RiskProfile, bucketize, classify};
pub use eligibility::{Eligibility, check_eligibility};
pub use estimator::{build_outcome, sensitivity_notes};
pub use outcome::{ActionKey, Estimate, Outcome, SuggestedAction};
pub use range::{
    ADJUSTMENT_ORDER, AdjustmentStage, BASE_RANGES, HeadroomRange, MAX_HEADROOM, StageFactor,
    adjust, base_range,
};
