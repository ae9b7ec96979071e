//! Documented ranges for every numeric scale on the needs profile.
//!
//! Mapping never rejects a raw value: anything outside its range is clamped,
//! and anything missing or non-numeric degrades to the scale minimum. The
//! ranges here are the single source of truth for both the clamping done by
//! the mappers and the advisory raw-item validation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive bounds for an integer clinical scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleRange {
    pub min: u8,
    pub max: u8,
}

impl ScaleRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Clamp a raw value into this range.
    pub fn clamp(&self, value: i64) -> u8 {
        value.clamp(i64::from(self.min), i64::from(self.max)) as u8
    }
}

/// ADL hierarchy / support level (0 independent – 6 total dependence).
pub const ADL_SUPPORT: ScaleRange = ScaleRange::new(0, 6);
/// IADL capacity / support level.
pub const IADL_SUPPORT: ScaleRange = ScaleRange::new(0, 6);
/// Mobility complexity (locomotion, transfers, stairs).
pub const MOBILITY: ScaleRange = ScaleRange::new(0, 6);
/// Cognitive performance (CPS-aligned).
pub const COGNITIVE: ScaleRange = ScaleRange::new(0, 6);
/// Behavioural complexity (0–4 from a full assessment, 0–5 via screener).
pub const BEHAVIOURAL: ScaleRange = ScaleRange::new(0, 5);
/// Mental-health complexity.
pub const MENTAL_HEALTH: ScaleRange = ScaleRange::new(0, 5);
/// Screener risk tiers (self-harm, violence).
pub const RISK_TIER: ScaleRange = ScaleRange::new(0, 3);
/// Disordered-thought screener sum.
pub const DISORDERED_THOUGHT: ScaleRange = ScaleRange::new(0, 20);
/// Risk-of-harm screener sum.
pub const RISK_OF_HARM: ScaleRange = ScaleRange::new(0, 11);
/// Falls risk.
pub const FALLS_RISK: ScaleRange = ScaleRange::new(0, 4);
/// Skin integrity / pressure-ulcer risk.
pub const SKIN_INTEGRITY: ScaleRange = ScaleRange::new(0, 4);
/// Pain scale.
pub const PAIN: ScaleRange = ScaleRange::new(0, 4);
/// Continence.
pub const CONTINENCE: ScaleRange = ScaleRange::new(0, 5);
/// Health instability (CHESS-aligned).
pub const HEALTH_INSTABILITY: ScaleRange = ScaleRange::new(0, 5);
/// Travel complexity for rural/remote service delivery.
pub const TRAVEL_COMPLEXITY: ScaleRange = ScaleRange::new(0, 3);

/// Contact Assessment algorithm scores.
pub const ASSESSMENT_URGENCY: ScaleRange = ScaleRange::new(1, 6);
pub const SERVICE_URGENCY: ScaleRange = ScaleRange::new(1, 4);
pub const REHABILITATION: ScaleRange = ScaleRange::new(1, 5);
pub const PERSONAL_SUPPORT: ScaleRange = ScaleRange::new(1, 6);
pub const DISTRESSED_MOOD: ScaleRange = ScaleRange::new(0, 9);
pub const CHESS_CA: ScaleRange = ScaleRange::new(0, 5);
