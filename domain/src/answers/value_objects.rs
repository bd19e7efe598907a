//! Answer value objects
//!
//! Each questionnaire field is a closed enum. Wire names are stable
//! snake_case tokens; parsing also accepts short
//! and Dutch tokens (`50-100`, `<50`, `ja`, `bv`, ...).

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['€', ' '], "")
}

/// Legal form of the business (rechtsvorm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    SoleProprietorship,
    LimitedCompany,
}

impl LegalForm {
    pub const ALL: [LegalForm; 2] = [LegalForm::SoleProprietorship, LegalForm::LimitedCompany];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegalForm::SoleProprietorship => "sole_proprietorship",
            LegalForm::LimitedCompany => "limited_company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegalForm::SoleProprietorship => "Sole proprietorship",
            LegalForm::LimitedCompany => "Limited company (BV)",
        }
    }
}

impl fmt::Display for LegalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegalForm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sole_proprietorship" | "sole" | "eenmanszaak" => Ok(LegalForm::SoleProprietorship),
            "limited_company" | "limited" | "bv" => Ok(LegalForm::LimitedCompany),
            _ => Err(DomainError::invalid_answer(
                "legal_form",
                s,
                &["sole_proprietorship", "limited_company"],
            )),
        }
    }
}

/// Yes/no answer. Absence (`Option::None`) means unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "yes" | "y" | "true" | "ja" | "j" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "nee" => Ok(YesNo::No),
            _ => Err(DomainError::invalid_answer("yes_no", s, &["yes", "no"])),
        }
    }
}

/// Annual revenue band, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevenueBand {
    #[serde(rename = "50-100k")]
    From50kTo100k,
    #[serde(rename = "100-250k")]
    From100kTo250k,
    #[serde(rename = "250-1000k")]
    From250kTo1m,
    #[serde(rename = "1000k+")]
    Above1m,
}

impl RevenueBand {
    /// All bands in ascending order
    pub const ALL: [RevenueBand; 4] = [
        RevenueBand::From50kTo100k,
        RevenueBand::From100kTo250k,
        RevenueBand::From250kTo1m,
        RevenueBand::Above1m,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueBand::From50kTo100k => "50-100k",
            RevenueBand::From100kTo250k => "100-250k",
            RevenueBand::From250kTo1m => "250-1000k",
            RevenueBand::Above1m => "1000k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RevenueBand::From50kTo100k => "€50k – €100k",
            RevenueBand::From100kTo250k => "€100k – €250k",
            RevenueBand::From250kTo1m => "€250k – €1m",
            RevenueBand::Above1m => "€1m+",
        }
    }
}

impl fmt::Display for RevenueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RevenueBand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "50-100k" | "50-100" => Ok(RevenueBand::From50kTo100k),
            "100-250k" | "100-250" => Ok(RevenueBand::From100kTo250k),
            "250-1000k" | "250-1000" | "250k-1m" => Ok(RevenueBand::From250kTo1m),
            "1000k+" | "1000+" | "1m+" => Ok(RevenueBand::Above1m),
            _ => Err(DomainError::invalid_answer(
                "revenue_band",
                s,
                &["50-100k", "100-250k", "250-1000k", "1000k+"],
            )),
        }
    }
}

/// Profitability over the last financial year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profitability {
    Loss,
    Breakeven,
    Profit,
}

impl Profitability {
    pub const ALL: [Profitability; 3] = [
        Profitability::Loss,
        Profitability::Breakeven,
        Profitability::Profit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profitability::Loss => "loss",
            Profitability::Breakeven => "breakeven",
            Profitability::Profit => "profit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profitability::Loss => "Loss-making",
            Profitability::Breakeven => "Break-even",
            Profitability::Profit => "Profitable",
        }
    }
}

impl fmt::Display for Profitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profitability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "loss" | "verlies" => Ok(Profitability::Loss),
            "breakeven" | "break-even" | "break_even" => Ok(Profitability::Breakeven),
            "profit" | "profitable" | "winst" => Ok(Profitability::Profit),
            _ => Err(DomainError::invalid_answer(
                "profitability",
                s,
                &["loss", "breakeven", "profit"],
            )),
        }
    }
}

/// Outstanding business financing, ordered by burden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingFinancing {
    None,
    Under50k,
    #[serde(rename = "50k_or_more")]
    From50k,
}

impl ExistingFinancing {
    pub const ALL: [ExistingFinancing; 3] = [
        ExistingFinancing::None,
        ExistingFinancing::Under50k,
        ExistingFinancing::From50k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExistingFinancing::None => "none",
            ExistingFinancing::Under50k => "under_50k",
            ExistingFinancing::From50k => "50k_or_more",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExistingFinancing::None => "No",
            ExistingFinancing::Under50k => "Yes, under €50k",
            ExistingFinancing::From50k => "Yes, €50k or more",
        }
    }
}

impl fmt::Display for ExistingFinancing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExistingFinancing {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" | "no" | "nee" => Ok(ExistingFinancing::None),
            "under_50k" | "under50k" | "<50" | "<50k" => Ok(ExistingFinancing::Under50k),
            "50k_or_more" | "50k+" | "50+" | ">=50k" => Ok(ExistingFinancing::From50k),
            _ => Err(DomainError::invalid_answer(
                "existing_financing",
                s,
                &["none", "under_50k", "50k_or_more"],
            )),
        }
    }
}

/// What the financing would be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    WorkingCapital,
    Investment,
    Refinancing,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [
        Purpose::WorkingCapital,
        Purpose::Investment,
        Purpose::Refinancing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::WorkingCapital => "working_capital",
            Purpose::Investment => "investment",
            Purpose::Refinancing => "refinancing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::WorkingCapital => "Working capital",
            Purpose::Investment => "Investment",
            Purpose::Refinancing => "Refinancing",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "working_capital" | "working-capital" | "werkkapitaal" => Ok(Purpose::WorkingCapital),
            "investment" | "investering" => Ok(Purpose::Investment),
            "refinancing" | "herfinanciering" => Ok(Purpose::Refinancing),
            _ => Err(DomainError::invalid_answer(
                "purpose",
                s,
                &["working_capital", "investment", "refinancing"],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_band_order() {
        let mut sorted = RevenueBand::ALL;
        sorted.sort();
        assert_eq!(sorted, RevenueBand::ALL);
        assert!(RevenueBand::From50kTo100k < RevenueBand::Above1m);
    }

    #[test]
    fn test_parse_short_and_dutch_tokens() {
        assert_eq!("50-100".parse::<RevenueBand>(), Ok(RevenueBand::From50kTo100k));
        assert_eq!("1000+".parse::<RevenueBand>(), Ok(RevenueBand::Above1m));
        assert_eq!("<50".parse::<ExistingFinancing>(), Ok(ExistingFinancing::Under50k));
        assert_eq!("50+".parse::<ExistingFinancing>(), Ok(ExistingFinancing::From50k));
        assert_eq!("ja".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!("bv".parse::<LegalForm>(), Ok(LegalForm::LimitedCompany));
        assert_eq!("verlies".parse::<Profitability>(), Ok(Profitability::Loss));
        assert_eq!("herfinanciering".parse::<Purpose>(), Ok(Purpose::Refinancing));
    }

    #[test]
    fn test_parse_is_case_and_space_insensitive() {
        assert_eq!(" Profit ".parse::<Profitability>(), Ok(Profitability::Profit));
        assert_eq!("€1m+".parse::<RevenueBand>(), Ok(RevenueBand::Above1m));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "holiday".parse::<Purpose>().unwrap_err();
        assert_eq!(err.field(), Some("purpose"));
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for band in RevenueBand::ALL {
            assert_eq!(band.as_str().parse::<RevenueBand>(), Ok(band));
        }
        for fin in ExistingFinancing::ALL {
            assert_eq!(fin.as_str().parse::<ExistingFinancing>(), Ok(fin));
        }
        for purpose in Purpose::ALL {
            assert_eq!(purpose.to_string().parse::<Purpose>(), Ok(purpose));
        }
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&RevenueBand::From250kTo1m).unwrap(),
            "\"250-1000k\""
        );
        assert_eq!(
            serde_json::to_string(&ExistingFinancing::From50k).unwrap(),
            "\"50k_or_more\""
        );
        assert_eq!(
            serde_json::to_string(&Purpose::WorkingCapital).unwrap(),
            "\"working_capital\""
        );
        let parsed: ExistingFinancing = serde_json::from_str("\"under_50k\"").unwrap();
        assert_eq!(parsed, ExistingFinancing::Under50k);
    }
}
