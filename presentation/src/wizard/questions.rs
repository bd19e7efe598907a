//! Questions asked on each wizard step.
//!
//! A static table in step order. Each entry knows its choices and how to write
//! a parsed answer into the [`AnswerSet`].

use finruimte_application::WizardStep;
use finruimte_domain::{
    AnswerSet, DomainError, ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand,
    YesNo,
};

/// A single multiple-choice question
pub struct Question {
    pub step: WizardStep,
    pub prompt: &'static str,
    /// `(token, label)` pairs offered to the user
    pub choices: fn() -> Vec<(&'static str, &'static str)>,
    apply: fn(&mut AnswerSet, &str) -> Result<(), DomainError>,
    current: fn(&AnswerSet) -> Option<&'static str>,
}

impl Question {
    /// Parse `input` (a choice number or any accepted token) into the answers.
    pub fn answer(&self, answers: &mut AnswerSet, input: &str) -> Result<(), DomainError> {
        let input = input.trim();
        let choices = (self.choices)();
        let token = match input.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => choices[n - 1].0,
            _ => input,
        };
        (self.apply)(answers, token)
    }

    /// Label of the stored answer, if any
    pub fn current(&self, answers: &AnswerSet) -> Option<&'static str> {
        (self.current)(answers)
    }
}

macro_rules! choices {
    ($ty:ty) => {
        || <$ty>::ALL.iter().map(|v| (v.as_str(), v.label())).collect()
    };
}

pub static QUESTIONS: [Question; 7] = [
    Question {
        step: WizardStep::Scope,
        prompt: "What is the legal form of the business?",
        choices: choices!(LegalForm),
        apply: |a, s| {
            a.legal_form = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.legal_form.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Scope,
        prompt: "Has the business been trading for at least 12 months?",
        choices: choices!(YesNo),
        apply: |a, s| {
            a.active_12_months = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.active_12_months.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Scope,
        prompt: "What was the annual revenue?",
        choices: choices!(RevenueBand),
        apply: |a, s| {
            a.revenue_band = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.revenue_band.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Finance,
        prompt: "How did last year end?",
        choices: choices!(Profitability),
        apply: |a, s| {
            a.profitability = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.profitability.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Finance,
        prompt: "Is there financing outstanding already?",
        choices: choices!(ExistingFinancing),
        apply: |a, s| {
            a.existing_financing = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.existing_financing.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Goal,
        prompt: "What is the financing for?",
        choices: choices!(Purpose),
        apply: |a, s| {
            a.purpose = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.purpose.map(|v| v.label()),
    },
    Question {
        step: WizardStep::Goal,
        prompt: "Could you give a personal guarantee?",
        choices: choices!(YesNo),
        apply: |a, s| {
            a.personal_guarantee_possible = Some(s.parse()?);
            Ok(())
        },
        current: |a| a.personal_guarantee_possible.map(|v| v.label()),
    },
];

/// Questions shown on `step`, in order
pub fn questions_for(step: WizardStep) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.step == step)
}
