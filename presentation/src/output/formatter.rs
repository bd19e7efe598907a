//! Output formatter trait

use finruimte_domain::{Estimate, OutputFormat};

/// Trait for formatting estimation results
pub trait OutputFormatter {
    /// Format the complete estimate with every note block
    fn format(&self, estimate: &Estimate) -> String;

    /// Format as JSON
    fn format_json(&self, estimate: &Estimate) -> String;

    /// Format heading and range only (concise output)
    fn format_summary(&self, estimate: &Estimate) -> String;

    /// Dispatch on the configured output format
    fn render(&self, estimate: &Estimate, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(estimate),
            OutputFormat::Summary => self.format_summary(estimate),
            OutputFormat::Json => self.format_json(estimate),
        }
    }
}
