//! Static advisory text tables

use super::bucket::Bucket;
use super::outcome::{ActionKey, SuggestedAction};

/// Template for a [`SuggestedAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTemplate {
    pub key: ActionKey,
    pub label: &'static str,
    pub note: &'static str,
}

impl ActionTemplate {
    pub fn to_action(&self) -> SuggestedAction {
        SuggestedAction {
            action_key: self.key,
            label: self.label.to_string(),
            note: self.note.to_string(),
        }
    }
}

const LEARN_MORE: &str = "Learn more";
const SEEK_ADVICE: &str = "Advice for complex situations";

// ==================== Excluded ====================

pub const EXCLUDED_ASSUMPTIONS: [&str; 2] = [
    "Your business has been active for less than 12 months, which is outside this tool's scope.",
    "This tool only gives ranges for businesses with a minimum trading history.",
];

pub const EXCLUDED_SENSITIVITIES: [&str; 2] = [
    "Length of trading history",
    "Availability of revenue and payment data",
];

pub const EXCLUDED_DISCLAIMERS: [&str; 2] = ["No credit approval", "No advice or guarantee"];

pub const EXCLUDED_ACTIONS: [ActionTemplate; 1] = [ActionTemplate {
    key: ActionKey::LearnMore,
    label: LEARN_MORE,
    note: "Why 12 months of history is a hard limit in many lending models.",
}];

// ==================== Eligible ====================

pub const ASSUMPTIONS: [&str; 3] = [
    "The range is based on revenue bands and coarse risk factors, not on full annual accounts.",
    "Sector, collateral, debtor quality and payment-provider data are not taken into account.",
    "The outcome assumes the business is operationally stable with no hidden payment arrears.",
];

pub const SENSITIVITY_PROFITABILITY: &str = "Profitability (margin, cash flow)";
pub const SENSITIVITY_FINANCING: &str = "Existing financing burden";
pub const SENSITIVITY_GUARANTEE: &str = "Guarantee / collateral availability";
pub const SENSITIVITY_REFINANCING: &str = "Refinancing documentation and existing loan terms";
pub const SENSITIVITY_FALLBACK: &str = "Quality of financial information";

pub const DISCLAIMERS: [&str; 3] = [
    "No credit approval or guarantee",
    "No interest rate indication or offer",
    "No financial or legal advice",
];

pub const BUCKET_A_ACTIONS: [ActionTemplate; 2] = [
    ActionTemplate {
        key: ActionKey::ExploreIndependently,
        label: "Explore / compare independently",
        note: "When the situation is simple and mistakes are reversible.",
    },
    ActionTemplate {
        key: ActionKey::LearnMore,
        label: LEARN_MORE,
        note: "Which additional factors lenders usually assess.",
    },
];

pub const BUCKET_B_ACTIONS: [ActionTemplate; 2] = [
    ActionTemplate {
        key: ActionKey::LearnMore,
        label: LEARN_MORE,
        note: "Which variables move the range the most.",
    },
    ActionTemplate {
        key: ActionKey::SeekAdvice,
        label: SEEK_ADVICE,
        note: "When structure or obligations are complex or mistakes are costly.",
    },
];

pub const BUCKET_C_ACTIONS: [ActionTemplate; 2] = [
    ActionTemplate {
        key: ActionKey::LearnMore,
        label: LEARN_MORE,
        note: "What is often needed to improve feasibility.",
    },
    ActionTemplate {
        key: ActionKey::SeekAdvice,
        label: SEEK_ADVICE,
        note: "When restructuring or a tailored arrangement is needed.",
    },
];

/// Action templates for an eligible outcome in the given bucket
pub fn actions_for(bucket: Bucket) -> &'static [ActionTemplate] {
    match bucket {
        Bucket::A => &BUCKET_A_ACTIONS,
        Bucket::B => &BUCKET_B_ACTIONS,
        Bucket::C => &BUCKET_C_ACTIONS,
    }
}

pub(crate) fn owned(notes: &[&str]) -> Vec<String> {
    notes.iter().map(|note| note.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_b_and_c_share_keys_but_not_notes() {
        let b: Vec<_> = BUCKET_B_ACTIONS.iter().map(|a| a.key).collect();
        let c: Vec<_> = BUCKET_C_ACTIONS.iter().map(|a| a.key).collect();
        assert_eq!(b, c);
        assert_ne!(BUCKET_B_ACTIONS[0].note, BUCKET_C_ACTIONS[0].note);
        assert_ne!(BUCKET_B_ACTIONS[1].note, BUCKET_C_ACTIONS[1].note);
    }

    #[test]
    fn test_actions_for_bucket_a() {
        let keys: Vec<_> = actions_for(Bucket::A).iter().map(|a| a.key).collect();
        assert_eq!(keys, vec![ActionKey::ExploreIndependently, ActionKey::LearnMore]);
    }

    #[test]
    fn test_template_to_action() {
        let action = EXCLUDED_ACTIONS[0].to_action();
        assert_eq!(action.action_key, ActionKey::LearnMore);
        assert_eq!(action.label, "Learn more");
    }
}
