//! The questionnaire answer set

use super::value_objects::{
    ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand, YesNo,
};
use serde::{Deserialize, Serialize};

/// Answers collected across the wizard steps (Entity)
///
/// Every field is optional until the step that governs it is complete.
/// The estimator tolerates unanswered fields: they fall through to neutral
/// factors, and an unanswered revenue band yields a zero range.
///
/// # Example
///
/// ```
/// use finruimte_domain::answers::{AnswerSet, Profitability, RevenueBand, YesNo};
///
/// let answers = AnswerSet::new()
///     .with_active_12_months(YesNo::Yes)
///     .with_revenue_band(RevenueBand::From100kTo250k)
///     .with_profitability(Profitability::Profit);
/// assert!(answers.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub legal_form: Option<LegalForm>,
    pub active_12_months: Option<YesNo>,
    pub revenue_band: Option<RevenueBand>,
    pub profitability: Option<Profitability>,
    pub existing_financing: Option<ExistingFinancing>,
    pub purpose: Option<Purpose>,
    pub personal_guarantee_possible: Option<YesNo>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_legal_form(mut self, value: LegalForm) -> Self {
        self.legal_form = Some(value);
        self
    }

    pub fn with_active_12_months(mut self, value: YesNo) -> Self {
        self.active_12_months = Some(value);
        self
    }

    pub fn with_revenue_band(mut self, value: RevenueBand) -> Self {
        self.revenue_band = Some(value);
        self
    }

    pub fn with_profitability(mut self, value: Profitability) -> Self {
        self.profitability = Some(value);
        self
    }

    pub fn with_existing_financing(mut self, value: ExistingFinancing) -> Self {
        self.existing_financing = Some(value);
        self
    }

    pub fn with_purpose(mut self, value: Purpose) -> Self {
        self.purpose = Some(value);
        self
    }

    pub fn with_guarantee(mut self, value: YesNo) -> Self {
        self.personal_guarantee_possible = Some(value);
        self
    }

    // ==================== Queries ====================

    /// True unless the business explicitly answered "no" to 12 months of activity
    pub fn is_active(&self) -> bool {
        self.active_12_months != Some(YesNo::No)
    }

    pub fn is_loss_making(&self) -> bool {
        self.profitability == Some(Profitability::Loss)
    }

    pub fn has_heavy_debt(&self) -> bool {
        self.existing_financing == Some(ExistingFinancing::From50k)
    }

    pub fn lacks_guarantee(&self) -> bool {
        self.personal_guarantee_possible == Some(YesNo::No)
    }

    pub fn has_low_revenue(&self) -> bool {
        self.revenue_band == Some(RevenueBand::From50kTo100k)
    }

    /// Label/value rows for the review step, `-` for unanswered fields
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        fn show(value: Option<&'static str>) -> String {
            value.unwrap_or("-").to_string()
        }

        vec![
            ("Legal form", show(self.legal_form.map(|v| v.label()))),
            (
                "Active 12 months",
                show(self.active_12_months.map(|v| v.label())),
            ),
            ("Annual revenue", show(self.revenue_band.map(|v| v.label()))),
            ("Profitability", show(self.profitability.map(|v| v.label()))),
            (
                "Existing financing",
                show(self.existing_financing.map(|v| v.label())),
            ),
            ("Purpose", show(self.purpose.map(|v| v.label()))),
            (
                "Personal guarantee",
                show(self.personal_guarantee_possible.map(|v| v.label())),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unanswered() {
        let answers = AnswerSet::default();
        assert!(answers.active_12_months.is_none());
        assert!(answers.revenue_band.is_none());
        // Unanswered does not count as inactive
        assert!(answers.is_active());
    }

    #[test]
    fn test_is_active() {
        assert!(AnswerSet::new().with_active_12_months(YesNo::Yes).is_active());
        assert!(!AnswerSet::new().with_active_12_months(YesNo::No).is_active());
    }

    #[test]
    fn test_risk_queries() {
        let answers = AnswerSet::new()
            .with_profitability(Profitability::Loss)
            .with_existing_financing(ExistingFinancing::From50k)
            .with_guarantee(YesNo::No)
            .with_revenue_band(RevenueBand::From50kTo100k);

        assert!(answers.is_loss_making());
        assert!(answers.has_heavy_debt());
        assert!(answers.lacks_guarantee());
        assert!(answers.has_low_revenue());
    }

    #[test]
    fn test_summary_rows_placeholder() {
        let rows = AnswerSet::new()
            .with_purpose(Purpose::Investment)
            .summary_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Legal form", "-".to_string()));
        assert_eq!(rows[5], ("Purpose", "Investment".to_string()));
    }

    #[test]
    fn test_serde_round_trip_keeps_unanswered() {
        let answers = AnswerSet::new().with_revenue_band(RevenueBand::Above1m);
        let json = serde_json::to_string(&answers).unwrap();
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
        assert!(json.contains("\"revenue_band\":\"1000k+\""));
    }
}
