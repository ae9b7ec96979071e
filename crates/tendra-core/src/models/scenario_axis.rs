use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The labeled direction a scenario bundle leans in.
///
/// Which axes get generated for a given profile is a policy decision made
/// outside this engine; the engine only constructs a bundle for an axis it
/// is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScenarioAxis {
    RecoveryFocused,
    MaintenanceFocused,
    CostConscious,
    TechnologyEnabled,
    CaregiverRelief,
    SafetyFocused,
}

impl ScenarioAxis {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioAxis::RecoveryFocused => "Recovery focused",
            ScenarioAxis::MaintenanceFocused => "Maintenance focused",
            ScenarioAxis::CostConscious => "Cost conscious",
            ScenarioAxis::TechnologyEnabled => "Technology enabled",
            ScenarioAxis::CaregiverRelief => "Caregiver relief",
            ScenarioAxis::SafetyFocused => "Safety focused",
        }
    }

    /// Icon name consumed by the coordinator UI.
    pub fn icon(&self) -> &'static str {
        match self {
            ScenarioAxis::RecoveryFocused => "trending-up",
            ScenarioAxis::MaintenanceFocused => "shield",
            ScenarioAxis::CostConscious => "wallet",
            ScenarioAxis::TechnologyEnabled => "wifi",
            ScenarioAxis::CaregiverRelief => "users",
            ScenarioAxis::SafetyFocused => "alert-triangle",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            ScenarioAxis::RecoveryFocused => {
                "Front-loads rehabilitation to rebuild independence while the window is open"
            }
            ScenarioAxis::MaintenanceFocused => {
                "Steady support at current function, spread evenly across the week"
            }
            ScenarioAxis::CostConscious => {
                "Covers essential needs while staying well inside the weekly funding envelope"
            }
            ScenarioAxis::TechnologyEnabled => {
                "Substitutes remote monitoring and virtual visits where the home supports them"
            }
            ScenarioAxis::CaregiverRelief => {
                "Adds respite and shifts routine tasks off the family caregiver"
            }
            ScenarioAxis::SafetyFocused => {
                "Prioritizes every identified safety risk ahead of cost or convenience"
            }
        }
    }
}

impl FromStr for ScenarioAxis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recovery_focused" => Ok(ScenarioAxis::RecoveryFocused),
            "maintenance_focused" => Ok(ScenarioAxis::MaintenanceFocused),
            "cost_conscious" => Ok(ScenarioAxis::CostConscious),
            "technology_enabled" => Ok(ScenarioAxis::TechnologyEnabled),
            "caregiver_relief" => Ok(ScenarioAxis::CaregiverRelief),
            "safety_focused" => Ok(ScenarioAxis::SafetyFocused),
            other => Err(CoreError::UnknownScenarioAxis(other.to_string())),
        }
    }
}
