//! Interactive questionnaire
//!
//! Walks a [`WizardSession`](finruimte_application::WizardSession) through its
//! steps with a line editor, printing the result when the answers are submitted.

mod line_source;
mod questions;
mod repl;

pub use line_source::{EditorLineSource, LineInput, LineSource, ScriptedLines};
pub use questions::{QUESTIONS, Question, questions_for};
pub use repl::WizardRepl;
