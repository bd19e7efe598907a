//! Presentation layer for finruimte
//!
//! This crate contains CLI definitions, output formatters
//! and the interactive questionnaire.

pub mod cli;
pub mod output;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EstimateArgs, EventsCommand, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use wizard::{EditorLineSource, LineInput, LineSource, ScriptedLines, WizardRepl};
