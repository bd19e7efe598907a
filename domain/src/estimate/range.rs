//! Headroom range: base lookup and multiplicative adjustment
//!
//! # Pipeline
//!
//! ```text
//! revenue band ──▶ BASE_RANGES ──▶ (low, high)
//!                                      │
//!          ┌───────────────────────────┘
//!          ▼
//!   profitability ▶ existing financing ▶ guarantee ▶ purpose
//!          │
//!          ▼
//!   floor to 1000 ▶ clamp [0, 2_000_000] ▶ high = max(high, low)
//! ```
//!
//! Every stage scales the running value. The stages are pure multiplications
//! today and therefore commute, but [`ADJUSTMENT_ORDER`] is still applied
//! strictly in sequence so that a future additive stage keeps its place.

use crate::answers::{ExistingFinancing, Profitability, Purpose, RevenueBand, YesNo};
use serde::{Deserialize, Serialize};

/// Rounding step for adjusted bounds (whole thousands)
pub const ROUNDING_STEP: u64 = 1_000;

/// Upper clamp for adjusted bounds
pub const MAX_HEADROOM: u64 = 2_000_000;

/// Absorbs representation error so that e.g. 125999.99999999999 still floors to 126000
const ROUNDING_EPSILON: f64 = 1e-6;

/// Closed currency interval `[low, high]` in whole euros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadroomRange {
    pub low: u64,
    pub high: u64,
}

impl HeadroomRange {
    pub const ZERO: HeadroomRange = HeadroomRange { low: 0, high: 0 };

    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Base ranges per revenue band, ascending
pub const BASE_RANGES: [(RevenueBand, HeadroomRange); 4] = [
    (RevenueBand::From50kTo100k, HeadroomRange::new(15_000, 50_000)),
    (RevenueBand::From100kTo250k, HeadroomRange::new(30_000, 120_000)),
    (RevenueBand::From250kTo1m, HeadroomRange::new(75_000, 350_000)),
    (RevenueBand::Above1m, HeadroomRange::new(150_000, 750_000)),
];

/// Look up the base range for a revenue band; unanswered maps to `(0, 0)`
pub fn base_range(revenue_band: Option<RevenueBand>) -> HeadroomRange {
    revenue_band
        .and_then(|band| BASE_RANGES.iter().find(|(b, _)| *b == band))
        .map(|(_, range)| *range)
        .unwrap_or(HeadroomRange::ZERO)
}

/// Multipliers applied to the low and high bound by one stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageFactor {
    pub low: f64,
    pub high: f64,
}

impl StageFactor {
    /// Leaves the running range unchanged
    pub const NEUTRAL: StageFactor = StageFactor::new(1.0, 1.0);

    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

pub const PROFITABILITY_FACTORS: [(Profitability, StageFactor); 3] = [
    (Profitability::Loss, StageFactor::new(0.3, 0.6)),
    (Profitability::Breakeven, StageFactor::new(0.6, 0.85)),
    (Profitability::Profit, StageFactor::new(1.0, 1.05)),
];

pub const FINANCING_FACTORS: [(ExistingFinancing, StageFactor); 3] = [
    (ExistingFinancing::None, StageFactor::new(1.0, 1.0)),
    (ExistingFinancing::Under50k, StageFactor::new(0.8, 0.9)),
    (ExistingFinancing::From50k, StageFactor::new(0.5, 0.7)),
];

pub const GUARANTEE_FACTORS: [(YesNo, StageFactor); 2] = [
    (YesNo::Yes, StageFactor::new(1.05, 1.1)),
    (YesNo::No, StageFactor::new(0.85, 0.9)),
];

pub const PURPOSE_FACTORS: [(Purpose, StageFactor); 3] = [
    (Purpose::WorkingCapital, StageFactor::new(1.0, 1.0)),
    (Purpose::Investment, StageFactor::new(1.0, 1.05)),
    (Purpose::Refinancing, StageFactor::new(0.8, 0.9)),
];

fn lookup<K: PartialEq + Copy>(table: &[(K, StageFactor)], key: Option<K>) -> StageFactor {
    key.and_then(|k| table.iter().find(|(candidate, _)| *candidate == k))
        .map(|(_, factor)| *factor)
        .unwrap_or(StageFactor::NEUTRAL)
}

/// One adjustment stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentStage {
    Profitability,
    ExistingFinancing,
    Guarantee,
    Purpose,
}

/// Documented application order of the adjustment stages
pub const ADJUSTMENT_ORDER: [AdjustmentStage; 4] = [
    AdjustmentStage::Profitability,
    AdjustmentStage::ExistingFinancing,
    AdjustmentStage::Guarantee,
    AdjustmentStage::Purpose,
];

/// The answers that drive the adjustment stages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentInputs {
    pub profitability: Option<Profitability>,
    pub existing_financing: Option<ExistingFinancing>,
    pub guarantee: Option<YesNo>,
    pub purpose: Option<Purpose>,
}

impl AdjustmentStage {
    /// Factor this stage contributes for the given inputs
    pub fn factor(&self, inputs: &AdjustmentInputs) -> StageFactor {
        match self {
            AdjustmentStage::Profitability => lookup(&PROFITABILITY_FACTORS, inputs.profitability),
            AdjustmentStage::ExistingFinancing => {
                lookup(&FINANCING_FACTORS, inputs.existing_financing)
            }
            AdjustmentStage::Guarantee => lookup(&GUARANTEE_FACTORS, inputs.guarantee),
            AdjustmentStage::Purpose => lookup(&PURPOSE_FACTORS, inputs.purpose),
        }
    }
}

/// Apply the four adjustment stages, round down and clamp.
///
/// The result always satisfies `0 <= low <= high <= MAX_HEADROOM`.
pub fn adjust(
    range: HeadroomRange,
    profitability: Option<Profitability>,
    existing_financing: Option<ExistingFinancing>,
    guarantee: Option<YesNo>,
    purpose: Option<Purpose>,
) -> HeadroomRange {
    let inputs = AdjustmentInputs {
        profitability,
        existing_financing,
        guarantee,
        purpose,
    };

    let (low, high) = ADJUSTMENT_ORDER.iter().fold(
        (range.low as f64, range.high as f64),
        |(low, high), stage| {
            let factor = stage.factor(&inputs);
            (low * factor.low, high * factor.high)
        },
    );

    let low = round_and_clamp(low);
    let high = round_and_clamp(high).max(low);

    HeadroomRange { low, high }
}

fn round_and_clamp(value: f64) -> u64 {
    let step = ROUNDING_STEP as f64;
    let floored = ((value + ROUNDING_EPSILON) / step).floor() * step;
    floored.clamp(0.0, MAX_HEADROOM as f64) as u64
}
