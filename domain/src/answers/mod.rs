//! Questionnaire answers
//!
//! The [`AnswerSet`] accumulates across wizard steps and is handed by value
//! to the estimator once the review step is submitted.

pub mod entities;
pub mod value_objects;

pub use entities::AnswerSet;
pub use value_objects::{ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand, YesNo};
