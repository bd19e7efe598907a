//! Domain layer for finruimte
//!
//! This crate contains the headroom estimator, its answer-set input and its
//! outcome types. It has no dependencies on infrastructure or presentation
//! concerns, performs no I/O and never fails for in-domain input.
//!
//! # Core Concepts
//!
//! ## Answer set
//!
//! Seven questionnaire fields collected by the wizard, each a closed enum
//! that may still be unanswered.
//!
//! ## Estimate
//!
//! - **Eligibility**: a single exclusion rule (less than 12 months active)
//! - **Range**: revenue-band base range scaled by four adjustment stages
//! - **Bucket**: A (likely headroom), B (uncertain), C (likely constrained)

pub mod answers;
pub mod config;
pub mod core;
pub mod estimate;
pub mod util;

// Re-export commonly used types
pub use answers::{
    AnswerSet, ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand, YesNo,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use estimate::{
    ActionKey, Bucket, Eligibility, Estimate, HeadroomRange, Outcome, SuggestedAction,
    build_outcome, check_eligibility,
};
pub use util::format_eur;
