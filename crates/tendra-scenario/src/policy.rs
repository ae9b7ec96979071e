use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tendra_core::models::scenario_bundle::CostCapStatus;

/// Funding-cap policy a bundle is priced against.
///
/// Operators tune both figures per region and program; the engine never
/// hard-codes the boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioPolicy {
    /// Reference weekly funding cap in dollars.
    pub reference_weekly_cap: f64,
    /// Utilization percentage at which a bundle counts as nearing the cap.
    pub near_cap_threshold_pct: f64,
}

impl Default for ScenarioPolicy {
    fn default() -> Self {
        Self {
            reference_weekly_cap: 5000.0,
            near_cap_threshold_pct: 85.0,
        }
    }
}

impl ScenarioPolicy {
    /// Cap utilization as a percentage of the reference cap. A non-positive
    /// cap reports zero rather than dividing by it.
    pub fn cap_utilization_pct(&self, weekly_cost: f64) -> f64 {
        if self.reference_weekly_cap > 0.0 {
            weekly_cost / self.reference_weekly_cap * 100.0
        } else {
            0.0
        }
    }

    pub fn cap_status(&self, utilization_pct: f64) -> CostCapStatus {
        if utilization_pct >= 100.0 {
            CostCapStatus::OverCap
        } else if utilization_pct >= self.near_cap_threshold_pct {
            CostCapStatus::NearCap
        } else {
            CostCapStatus::WithinCap
        }
    }
}
