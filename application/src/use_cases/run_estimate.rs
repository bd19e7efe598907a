//! Run Estimate use case.
//!
//! Hands a completed [`AnswerSet`] to the headroom estimator and records the
//! result on the session event log.
//!
//! The estimator is pure and synchronous; this use case only adds the
//! peripheral logging around it. A failing event log never changes the
//! returned [`Estimate`].

use crate::ports::event_log::{EventKind, EventLog, EventRecord, NoEventLog};
use finruimte_domain::estimate::classify;
use finruimte_domain::{AnswerSet, Eligibility, Estimate, build_outcome};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Input for the [`RunEstimateUseCase`].
#[derive(Debug, Clone)]
pub struct RunEstimateInput {
    /// Session the estimate belongs to (for event records)
    pub session_id: String,
    /// The answers, passed by value
    pub answers: AnswerSet,
}

impl RunEstimateInput {
    pub fn new(session_id: impl Into<String>, answers: AnswerSet) -> Self {
        Self {
            session_id: session_id.into(),
            answers,
        }
    }

    /// Input outside any wizard session, under a fresh session id
    pub fn standalone(answers: AnswerSet) -> Self {
        Self::new(Uuid::new_v4().to_string(), answers)
    }
}

/// Use case for producing one estimate.
///
/// 1. Run [`build_outcome`] on the answers
/// 2. Log `exit` when the answers were excluded
/// 3. Log `result_view` with eligibility and outcome
#[derive(Clone)]
pub struct RunEstimateUseCase {
    event_log: Arc<dyn EventLog>,
}

impl Default for RunEstimateUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl RunEstimateUseCase {
    pub fn new() -> Self {
        Self {
            event_log: Arc::new(NoEventLog),
        }
    }

    /// Create with an event log.
    pub fn with_event_log(mut self, event_log: Arc<dyn EventLog>) -> Self {
        self.event_log = event_log;
        self
    }

    pub fn execute(&self, input: RunEstimateInput) -> Estimate {
        let RunEstimateInput {
            session_id,
            answers,
        } = input;

        let estimate = build_outcome(&answers);

        match &estimate.eligibility {
            Eligibility::Excluded {
                reason,
                explanation,
            } => {
                info!("Answers excluded: {} ({})", reason, explanation);
                self.event_log.log(EventRecord::now(
                    session_id.as_str(),
                    EventKind::Exit,
                    json!({ "reason": reason, "detail": explanation }),
                ));
            }
            Eligibility::Eligible => {
                if let Some(range) = estimate.outcome.range {
                    let rule = classify(&answers, range);
                    debug!(
                        "Estimate: range {}..{}, bucket {} via rule '{}'",
                        range.low, range.high, rule.bucket, rule.name
                    );
                }
            }
        }

        self.event_log.log(EventRecord::now(
            session_id,
            EventKind::ResultView,
            json!({
                "eligibility": estimate.eligibility,
                "outcome": estimate.outcome,
            }),
        ));

        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::event_log::MemoryEventLog;
    use finruimte_domain::{
        Bucket, ExistingFinancing, HeadroomRange, Profitability, Purpose, RevenueBand, YesNo,
    };

    fn answers() -> AnswerSet {
        AnswerSet::new()
            .with_active_12_months(YesNo::Yes)
            .with_revenue_band(RevenueBand::From100kTo250k)
            .with_profitability(Profitability::Profit)
            .with_existing_financing(ExistingFinancing::None)
            .with_guarantee(YesNo::Yes)
            .with_purpose(Purpose::Investment)
    }

    #[test]
    fn test_execute_logs_result_view() {
        let log = Arc::new(MemoryEventLog::default());
        let use_case = RunEstimateUseCase::new().with_event_log(log.clone());

        let estimate = use_case.execute(RunEstimateInput::new("s1", answers()));

        assert_eq!(estimate.outcome.bucket, Bucket::A);
        assert_eq!(
            estimate.outcome.range,
            Some(HeadroomRange::new(31_000, 145_000))
        );

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, EventKind::ResultView);
        assert_eq!(records[0].session_id, "s1");
        assert_eq!(records[0].payload["outcome"]["bucket"], "A");
        assert_eq!(records[0].payload["eligibility"]["kind"], "ok");
    }

    #[test]
    fn test_excluded_logs_exit_then_result_view() {
        let log = Arc::new(MemoryEventLog::default());
        let use_case = RunEstimateUseCase::new().with_event_log(log.clone());

        let estimate = use_case.execute(RunEstimateInput::new(
            "s2",
            answers().with_active_12_months(YesNo::No),
        ));

        assert!(estimate.eligibility.is_excluded());
        assert_eq!(log.kinds(), vec![EventKind::Exit, EventKind::ResultView]);
        assert_eq!(log.records()[0].payload["reason"], "out_of_scope");
    }

    #[test]
    fn test_standalone_input_gets_session_id() {
        let a = RunEstimateInput::standalone(answers());
        let b = RunEstimateInput::standalone(answers());
        assert_eq!(a.session_id.len(), 36);
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_without_event_log() {
        let estimate = RunEstimateUseCase::default().execute(RunEstimateInput::new("s3", answers()));
        assert!(estimate.eligibility.is_eligible());
    }
}
