//! Console output formatter for estimation results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use finruimte_domain::{AnswerSet, Bucket, Eligibility, Estimate, HeadroomRange, format_eur};

/// Formats estimates for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete estimate
    pub fn format(estimate: &Estimate) -> String {
        let mut output = String::new();
        let outcome = &estimate.outcome;

        output.push_str(&Self::header("Financing headroom estimate"));
        output.push_str("\n\n");

        output.push_str(&format!("{}\n", Self::heading(estimate)));

        match &estimate.eligibility {
            Eligibility::Excluded { explanation, .. } => {
                output.push_str(&format!("{} {}\n", "Reason:".cyan().bold(), explanation));
            }
            Eligibility::Eligible => {
                output.push_str(&format!(
                    "{} {}\n{} {}\n",
                    "Indicative range:".cyan().bold(),
                    Self::range_text(outcome.range),
                    "Bucket:".cyan().bold(),
                    outcome.bucket
                ));
            }
        }

        Self::push_list(&mut output, "Assumptions", &outcome.assumption_notes);
        Self::push_list(&mut output, "Most sensitive to", &outcome.sensitivity_notes);

        output.push_str(&Self::section_header("Suggested next steps"));
        for (i, action) in outcome.suggested_next_actions.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {}\n     {}\n",
                i + 1,
                action.label.bold(),
                action.note.dimmed()
            ));
        }

        Self::push_list(&mut output, "Please note", &outcome.disclaimer_notes);

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(estimate: &Estimate) -> String {
        serde_json::to_string_pretty(estimate).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format heading and range only (concise output)
    pub fn format_summary(estimate: &Estimate) -> String {
        let detail = match &estimate.eligibility {
            Eligibility::Excluded { explanation, .. } => explanation.clone(),
            Eligibility::Eligible => Self::range_text(estimate.outcome.range),
        };
        format!("{}\n{}\n", Self::heading(estimate), detail)
    }

    /// Label/value rows of the answers, as shown on the review step
    pub fn format_review(answers: &AnswerSet) -> String {
        let rows = answers.summary_rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut output = Self::section_header("Your answers");
        for (label, value) in rows {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                label,
                value,
                width = width
            ));
        }
        output
    }

    /// `€ 31.000 - € 145.000`, or "not estimated" when absent
    pub fn range_text(range: Option<HeadroomRange>) -> String {
        match range {
            Some(range) => format!("{} - {}", format_eur(range.low), format_eur(range.high)),
            None => "not estimated".to_string(),
        }
    }

    fn heading(estimate: &Estimate) -> ColoredString {
        let heading = estimate.heading().bold();
        if estimate.eligibility.is_excluded() {
            return heading.red();
        }
        match estimate.outcome.bucket {
            Bucket::A => heading.green(),
            Bucket::B => heading.yellow(),
            Bucket::C => heading.red(),
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&Self::section_header(title));
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, estimate: &Estimate) -> String {
        Self::format(estimate)
    }

    fn format_json(&self, estimate: &Estimate) -> String {
        Self::format_json(estimate)
    }

    fn format_summary(&self, estimate: &Estimate) -> String {
        Self::format_summary(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finruimte_domain::{
        ExistingFinancing, OutputFormat, Profitability, Purpose, RevenueBand, YesNo,
        build_outcome,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn worked_example() -> Estimate {
        build_outcome(
            &AnswerSet::new()
                .with_active_12_months(YesNo::Yes)
                .with_revenue_band(RevenueBand::From100kTo250k)
                .with_profitability(Profitability::Profit)
                .with_existing_financing(ExistingFinancing::None)
                .with_guarantee(YesNo::Yes)
                .with_purpose(Purpose::Investment),
        )
    }

    #[test]
    fn test_full_output_lists_every_block() {
        plain();
        let output = ConsoleFormatter::format(&worked_example());
        assert!(output.contains("Headroom likely available"));
        assert!(output.contains("€ 31.000 - € 145.000"));
        assert!(output.contains("Assumptions"));
        assert!(output.contains("Most sensitive to"));
        assert!(output.contains("Suggested next steps"));
        assert!(output.contains("Please note"));
    }

    #[test]
    fn test_summary_for_excluded() {
        plain();
        let estimate = build_outcome(&AnswerSet::new().with_active_12_months(YesNo::No));
        let output = ConsoleFormatter::format_summary(&estimate);
        assert!(output.starts_with("Out of scope"));
        assert!(output.contains("12 months"));
        assert!(!output.contains('€'));
    }

    #[test]
    fn test_json_is_parseable() {
        let json = ConsoleFormatter::format_json(&worked_example());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcome"]["bucket"], "A");
        assert_eq!(value["outcome"]["range"]["low"], 31_000);
        assert_eq!(value["eligibility"]["kind"], "ok");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        plain();
        let estimate = worked_example();
        let summary = ConsoleFormatter.render(&estimate, OutputFormat::Summary);
        assert_eq!(summary, ConsoleFormatter::format_summary(&estimate));
        assert!(ConsoleFormatter.render(&estimate, OutputFormat::Json).starts_with('{'));
    }

    #[test]
    fn test_review_marks_unanswered() {
        plain();
        let answers = AnswerSet::new().with_revenue_band(RevenueBand::Above1m);
        let output = ConsoleFormatter::format_review(&answers);
        assert!(output.contains("Annual revenue"));
        assert!(output.contains("€1m+"));
        assert!(output.lines().any(|l| l.trim_start().starts_with("Purpose") && l.ends_with('-')));
    }

    #[test]
    fn test_range_text_absent() {
        assert_eq!(ConsoleFormatter::range_text(None), "not estimated");
    }
}
