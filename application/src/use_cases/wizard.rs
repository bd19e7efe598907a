//! Wizard session controller.
//!
//! Drives the multi-step questionnaire that feeds the estimator:
//!
//! ```text
//! start ─▶ scope ─▶ finance ─▶ goal ─▶ review ══submit══▶ result
//!   ◀──────── back ◀──────────────────────┘                  │
//!   ◀═══════════════════════ restart ════════════════════════┘
//! ```
//!
//! The session owns its [`AnswerSet`] and, once submitted, the read-only
//! [`Estimate`]. Each transition is recorded on the [`EventLog`] port.

use crate::ports::event_log::{EventKind, EventLog, EventRecord, NoEventLog};
use crate::use_cases::run_estimate::{RunEstimateInput, RunEstimateUseCase};
use finruimte_domain::{ActionKey, AnswerSet, Estimate};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Errors for wizard navigation misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step '{0}' is not complete")]
    IncompleteStep(WizardStep),

    #[error("Answers can only be submitted from the review step (current: {0})")]
    NotOnReview(WizardStep),

    #[error("The review step is completed with submit, not next")]
    SubmitRequired,

    #[error("The result is final; restart to change answers")]
    ResultIsFinal,

    #[error("No result available yet")]
    NoResult,

    #[error("Action '{0}' is not offered for this result")]
    ActionNotOffered(ActionKey),
}

/// Wizard steps in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Start,
    Scope,
    Finance,
    Goal,
    Review,
    Result,
}

impl WizardStep {
    pub const ORDER: [WizardStep; 6] = [
        WizardStep::Start,
        WizardStep::Scope,
        WizardStep::Finance,
        WizardStep::Goal,
        WizardStep::Review,
        WizardStep::Result,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Start => "start",
            WizardStep::Scope => "scope",
            WizardStep::Finance => "finance",
            WizardStep::Goal => "goal",
            WizardStep::Review => "review",
            WizardStep::Result => "result",
        }
    }

    /// Zero-based position in [`WizardStep::ORDER`]
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Start => 0,
            WizardStep::Scope => 1,
            WizardStep::Finance => 2,
            WizardStep::Goal => 3,
            WizardStep::Review => 4,
            WizardStep::Result => 5,
        }
    }

    pub fn next(&self) -> WizardStep {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }

    pub fn previous(&self) -> WizardStep {
        Self::ORDER[self.index().saturating_sub(1)]
    }

    /// Whether the answers governed by this step are all present.
    ///
    /// Steps without questions are always complete. Review and result depend
    /// on every question step being complete.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        match self {
            WizardStep::Start => true,
            WizardStep::Scope => {
                answers.legal_form.is_some()
                    && answers.active_12_months.is_some()
                    && answers.revenue_band.is_some()
            }
            WizardStep::Finance => {
                answers.profitability.is_some() && answers.existing_financing.is_some()
            }
            WizardStep::Goal => {
                answers.purpose.is_some() && answers.personal_guarantee_possible.is_some()
            }
            WizardStep::Review | WizardStep::Result => [
                WizardStep::Scope,
                WizardStep::Finance,
                WizardStep::Goal,
            ]
            .iter()
            .all(|step| step.is_complete(answers)),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One questionnaire session.
///
/// # Example
///
/// ```
/// use finruimte_application::use_cases::wizard::{WizardSession, WizardStep};
/// use finruimte_domain::{LegalForm, RevenueBand, YesNo};
///
/// let mut session = WizardSession::new();
/// session.next().unwrap(); // start -> scope
/// session.answers_mut().legal_form = Some(LegalForm::LimitedCompany);
/// session.answers_mut().active_12_months = Some(YesNo::No);
/// session.answers_mut().revenue_band = Some(RevenueBand::From50kTo100k);
/// assert_eq!(session.next().unwrap(), WizardStep::Finance);
/// ```
pub struct WizardSession {
    id: String,
    step: WizardStep,
    answers: AnswerSet,
    estimate: Option<Estimate>,
    use_case: RunEstimateUseCase,
    event_log: Arc<dyn EventLog>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// Start a session without event logging
    pub fn new() -> Self {
        Self::with_event_log(Arc::new(NoEventLog), Value::Null)
    }

    /// Start a session that records its events; `client` is stored on the
    /// `session_start` record.
    pub fn with_event_log(event_log: Arc<dyn EventLog>, client: Value) -> Self {
        let session = Self {
            id: Uuid::new_v4().to_string(),
            step: WizardStep::Start,
            answers: AnswerSet::default(),
            estimate: None,
            use_case: RunEstimateUseCase::new().with_event_log(event_log.clone()),
            event_log,
        };

        info!("Wizard session {} started", session.id);
        session.log(EventKind::SessionStart, json!({ "client": client }));
        session.log(EventKind::StepView, json!({ "step": session.step }));
        session
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Mutable access for the step currently being filled in.
    pub fn answers_mut(&mut self) -> &mut AnswerSet {
        &mut self.answers
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    /// 1-based position and total, e.g. "step 2 / 6"
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index() + 1, WizardStep::ORDER.len())
    }

    pub fn can_proceed(&self) -> bool {
        self.step.is_complete(&self.answers)
    }

    // ==================== Navigation ====================

    /// Submit the current step and move forward.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Review => return Err(WizardError::SubmitRequired),
            WizardStep::Result => return Ok(self.step),
            _ => {}
        }
        if !self.can_proceed() {
            return Err(WizardError::IncompleteStep(self.step));
        }

        self.log(
            EventKind::StepSubmit,
            json!({ "step": self.step, "answers": self.answers }),
        );
        self.go_to(self.step.next());
        Ok(self.step)
    }

    /// Move back one step, keeping the answers.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Result {
            return Err(WizardError::ResultIsFinal);
        }
        let previous = self.step.previous();
        if previous != self.step {
            self.go_to(previous);
        }
        Ok(self.step)
    }

    /// Compute the estimate from the review step and show the result.
    pub fn submit(&mut self) -> Result<&Estimate, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotOnReview(self.step));
        }
        if !self.can_proceed() {
            return Err(WizardError::IncompleteStep(self.step));
        }

        self.log(
            EventKind::StepSubmit,
            json!({ "step": self.step, "answers": self.answers }),
        );
        let estimate = self
            .use_case
            .execute(RunEstimateInput::new(self.id.as_str(), self.answers.clone()));
        let estimate = self.estimate.insert(estimate);
        self.step = WizardStep::Result;
        debug!("Session {} moved to {}", self.id, self.step);
        self.event_log.log(EventRecord::now(
            self.id.as_str(),
            EventKind::StepView,
            json!({ "step": WizardStep::Result }),
        ));
        Ok(estimate)
    }

    /// Record that the user picked one of the suggested actions.
    pub fn record_action(&self, key: ActionKey) -> Result<(), WizardError> {
        let estimate = self.estimate.as_ref().ok_or(WizardError::NoResult)?;
        if !estimate.outcome.has_action(key) {
            return Err(WizardError::ActionNotOffered(key));
        }
        self.log(EventKind::ResultAction, json!({ "key": key }));
        Ok(())
    }

    /// Discard answers and outcome and return to the start step.
    pub fn restart(&mut self) {
        info!("Wizard session {} restarted", self.id);
        self.answers = AnswerSet::default();
        self.estimate = None;
        self.go_to(WizardStep::Start);
    }

    fn go_to(&mut self, step: WizardStep) {
        debug!("Session {} moved {} -> {}", self.id, self.step, step);
        self.step = step;
        self.log(EventKind::StepView, json!({ "step": step }));
    }

    fn log(&self, kind: EventKind, payload: Value) {
        self.event_log
            .log(EventRecord::now(self.id.as_str(), kind, payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::event_log::MemoryEventLog;
    use finruimte_domain::{
        Bucket, ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand, YesNo,
    };

    fn session_with_log() -> (WizardSession, Arc<MemoryEventLog>) {
        let log = Arc::new(MemoryEventLog::default());
        let session = WizardSession::with_event_log(log.clone(), json!("test"));
        (session, log)
    }

    fn fill_to_review(session: &mut WizardSession, active: YesNo) {
        session.next().unwrap();

        let answers = session.answers_mut();
        answers.legal_form = Some(LegalForm::SoleProprietorship);
        answers.active_12_months = Some(active);
        answers.revenue_band = Some(RevenueBand::From100kTo250k);
        session.next().unwrap();

        let answers = session.answers_mut();
        answers.profitability = Some(Profitability::Profit);
        answers.existing_financing = Some(ExistingFinancing::None);
        session.next().unwrap();

        let answers = session.answers_mut();
        answers.purpose = Some(Purpose::Investment);
        answers.personal_guarantee_possible = Some(YesNo::Yes);
        session.next().unwrap();
    }

    #[test]
    fn test_step_order_helpers() {
        assert_eq!(WizardStep::Start.next(), WizardStep::Scope);
        assert_eq!(WizardStep::Result.next(), WizardStep::Result);
        assert_eq!(WizardStep::Start.previous(), WizardStep::Start);
        assert_eq!(WizardStep::Review.previous(), WizardStep::Goal);
        for (i, step) in WizardStep::ORDER.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn test_new_session_logs_start_and_view() {
        let (session, log) = session_with_log();
        assert_eq!(session.step(), WizardStep::Start);
        assert_eq!(log.kinds(), vec![EventKind::SessionStart, EventKind::StepView]);
        assert!(log.records().iter().all(|r| r.session_id == session.id()));
    }

    #[test]
    fn test_cannot_leave_incomplete_scope() {
        let (mut session, _log) = session_with_log();
        session.next().unwrap();
        session.answers_mut().legal_form = Some(LegalForm::LimitedCompany);
        assert!(!session.can_proceed());
        assert_eq!(
            session.next(),
            Err(WizardError::IncompleteStep(WizardStep::Scope))
        );
        assert_eq!(session.step(), WizardStep::Scope);
    }

    #[test]
    fn test_full_flow_to_result() {
        let (mut session, log) = session_with_log();
        fill_to_review(&mut session, YesNo::Yes);
        assert_eq!(session.step(), WizardStep::Review);
        assert_eq!(session.progress(), (5, 6));

        let bucket = session.submit().unwrap().outcome.bucket;
        assert_eq!(bucket, Bucket::A);
        assert_eq!(session.step(), WizardStep::Result);
        assert!(session.estimate().is_some());

        let kinds = log.kinds();
        assert!(kinds.contains(&EventKind::ResultView));
        assert_eq!(kinds.last(), Some(&EventKind::StepView));
        assert!(!kinds.contains(&EventKind::Exit));
    }

    #[test]
    fn test_excluded_flow_logs_exit() {
        let (mut session, log) = session_with_log();
        fill_to_review(&mut session, YesNo::No);
        let estimate = session.submit().unwrap();
        assert!(estimate.eligibility.is_excluded());
        assert!(log.kinds().contains(&EventKind::Exit));
    }

    #[test]
    fn test_review_requires_submit() {
        let (mut session, _log) = session_with_log();
        fill_to_review(&mut session, YesNo::Yes);
        assert_eq!(session.next(), Err(WizardError::SubmitRequired));
    }

    #[test]
    fn test_submit_outside_review_fails() {
        let (mut session, _log) = session_with_log();
        assert!(matches!(
            session.submit(),
            Err(WizardError::NotOnReview(WizardStep::Start))
        ));
    }

    #[test]
    fn test_back_keeps_answers() {
        let (mut session, _log) = session_with_log();
        fill_to_review(&mut session, YesNo::Yes);
        assert_eq!(session.back().unwrap(), WizardStep::Goal);
        assert_eq!(session.answers().purpose, Some(Purpose::Investment));
    }

    #[test]
    fn test_back_from_start_stays() {
        let (mut session, log) = session_with_log();
        let before = log.records().len();
        assert_eq!(session.back().unwrap(), WizardStep::Start);
        assert_eq!(log.records().len(), before);
    }

    #[test]
    fn test_result_is_final_until_restart() {
        let (mut session, _log) = session_with_log();
        fill_to_review(&mut session, YesNo::Yes);
        session.submit().unwrap();
        assert_eq!(session.back(), Err(WizardError::ResultIsFinal));
        assert_eq!(session.next(), Ok(WizardStep::Result));

        session.restart();
        assert_eq!(session.step(), WizardStep::Start);
        assert_eq!(session.answers(), &AnswerSet::default());
        assert!(session.estimate().is_none());
    }

    #[test]
    fn test_record_action() {
        let (mut session, log) = session_with_log();
        assert_eq!(
            session.record_action(ActionKey::LearnMore),
            Err(WizardError::NoResult)
        );

        fill_to_review(&mut session, YesNo::Yes);
        session.submit().unwrap();

        session.record_action(ActionKey::LearnMore).unwrap();
        assert_eq!(log.kinds().last(), Some(&EventKind::ResultAction));
        assert_eq!(
            log.records().last().unwrap().payload["key"],
            "learn_more"
        );

        assert_eq!(
            session.record_action(ActionKey::SeekAdvice),
            Err(WizardError::ActionNotOffered(ActionKey::SeekAdvice))
        );
    }

    #[test]
    fn test_step_submit_carries_answers() {
        let (mut session, log) = session_with_log();
        fill_to_review(&mut session, YesNo::Yes);
        let submits: Vec<_> = log
            .records()
            .into_iter()
            .filter(|r| r.kind == EventKind::StepSubmit)
            .collect();
        assert_eq!(submits.len(), 4);
        assert_eq!(submits[1].payload["step"], "scope");
        assert_eq!(submits[1].payload["answers"]["revenue_band"], "100-250k");
    }
}
