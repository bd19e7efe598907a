//! Outcome assembly
//!
//! [`build_outcome`] is the single entry point of the headroom estimator: a
//! pure function of the [`AnswerSet`] that never fails for any value inside
//! the declared enum domains.

use super::bucket::{Bucket, bucketize};
use super::eligibility::{Eligibility, check_eligibility};
use super::notes::{self, owned};
use super::outcome::{Estimate, Outcome};
use super::range::{adjust, base_range};
use crate::answers::{AnswerSet, ExistingFinancing, Profitability, Purpose};

/// Run the full estimation pipeline.
///
/// # Example
///
/// ```
/// use finruimte_domain::answers::*;
/// use finruimte_domain::estimate::{build_outcome, Bucket, HeadroomRange};
///
/// let answers = AnswerSet::new()
///     .with_active_12_months(YesNo::Yes)
///     .with_revenue_band(RevenueBand::From100kTo250k)
///     .with_profitability(Profitability::Profit)
///     .with_existing_financing(ExistingFinancing::None)
///     .with_guarantee(YesNo::Yes)
///     .with_purpose(Purpose::Investment);
///
/// let estimate = build_outcome(&answers);
/// assert_eq!(estimate.outcome.range, Some(HeadroomRange::new(31_000, 145_000)));
/// assert_eq!(estimate.outcome.bucket, Bucket::A);
/// ```
pub fn build_outcome(answers: &AnswerSet) -> Estimate {
    let eligibility = check_eligibility(answers);
    let outcome = match eligibility {
        Eligibility::Excluded { .. } => excluded_outcome(),
        Eligibility::Eligible => eligible_outcome(answers),
    };

    Estimate {
        eligibility,
        outcome,
    }
}

fn excluded_outcome() -> Outcome {
    Outcome {
        bucket: Bucket::C,
        range: None,
        assumption_notes: owned(&notes::EXCLUDED_ASSUMPTIONS),
        sensitivity_notes: owned(&notes::EXCLUDED_SENSITIVITIES),
        disclaimer_notes: owned(&notes::EXCLUDED_DISCLAIMERS),
        suggested_next_actions: notes::EXCLUDED_ACTIONS
            .iter()
            .map(|template| template.to_action())
            .collect(),
    }
}

fn eligible_outcome(answers: &AnswerSet) -> Outcome {
    let range = adjust(
        base_range(answers.revenue_band),
        answers.profitability,
        answers.existing_financing,
        answers.personal_guarantee_possible,
        answers.purpose,
    );
    let bucket = bucketize(answers, range);

    Outcome {
        bucket,
        range: Some(range),
        assumption_notes: owned(&notes::ASSUMPTIONS),
        sensitivity_notes: sensitivity_notes(answers),
        disclaimer_notes: owned(&notes::DISCLAIMERS),
        suggested_next_actions: notes::actions_for(bucket)
            .iter()
            .map(|template| template.to_action())
            .collect(),
    }
}

/// Factors the range is most sensitive to, in fixed order.
///
/// Unanswered profitability counts as "not profit" and unanswered financing
/// as "not none".
pub fn sensitivity_notes(answers: &AnswerSet) -> Vec<String> {
    let mut sensitivities = Vec::new();

    if answers.profitability != Some(Profitability::Profit) {
        sensitivities.push(notes::SENSITIVITY_PROFITABILITY);
    }
    if answers.existing_financing != Some(ExistingFinancing::None) {
        sensitivities.push(notes::SENSITIVITY_FINANCING);
    }
    if answers.lacks_guarantee() {
        sensitivities.push(notes::SENSITIVITY_GUARANTEE);
    }
    if answers.purpose == Some(Purpose::Refinancing) {
        sensitivities.push(notes::SENSITIVITY_REFINANCING);
    }
    if sensitivities.is_empty() {
        sensitivities.push(notes::SENSITIVITY_FALLBACK);
    }

    owned(&sensitivities)
}
