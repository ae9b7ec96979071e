//! Bundle labeling and the context block for the explanation model.

use tendra_core::models::needs_profile::{PatientNeedsProfile, PrimaryClassification};
use tendra_core::models::scenario_axis::ScenarioAxis;
use tendra_core::models::scenario_bundle::{CostCapStatus, ScenarioBundleDto};

pub fn bundle_title(axis: ScenarioAxis) -> String {
    format!("{} care plan", axis.label())
}

pub fn bundle_description(axis: ScenarioAxis, profile: &PatientNeedsProfile) -> String {
    format!(
        "{}. Built for {}.",
        axis.blurb(),
        classification_phrase(profile)
    )
}

/// One sentence combining the axis lean, the cost position, and the weekly
/// in-home effort, shown next to the bundle in the coordinator UI.
pub fn tradeoff_narrative(
    axis: ScenarioAxis,
    status: CostCapStatus,
    weekly_hours: f64,
) -> String {
    let lean = match axis {
        ScenarioAxis::RecoveryFocused => "Concentrates therapy up front to rebuild function early",
        ScenarioAxis::MaintenanceFocused => {
            "Spreads steady support across the week to hold current function"
        }
        ScenarioAxis::CostConscious => "Trims optional services to protect the funding envelope",
        ScenarioAxis::TechnologyEnabled => {
            "Shifts monitoring and consults to remote delivery where the home allows"
        }
        ScenarioAxis::CaregiverRelief => {
            "Schedules regular relief so the family caregiver can recover"
        }
        ScenarioAxis::SafetyFocused => "Covers every identified risk ahead of cost or convenience",
    };
    let cost = match status {
        CostCapStatus::WithinCap => "stays comfortably inside the weekly funding cap",
        CostCapStatus::NearCap => "runs close to the weekly funding cap, leaving little headroom",
        CostCapStatus::OverCap => "exceeds the weekly funding cap and needs funding approval",
    };
    format!("{lean}; the plan {cost} at {weekly_hours:.1} provider hours per week.")
}

/// Assemble the de-identified context block sent to the explanation model.
///
/// Builds only from the de-identified views, so no identifier can pass
/// through this path.
pub fn explanation_context(profile: &PatientNeedsProfile, bundle: &ScenarioBundleDto) -> String {
    let mut block = String::from("<needs_profile>\n");
    block.push_str(&pretty(&profile.to_deidentified_json()));
    block.push_str("\n</needs_profile>\n<scenario_bundle>\n");
    block.push_str(&pretty(&bundle.to_deidentified_json()));
    block.push_str("\n</scenario_bundle>");
    block
}

fn classification_phrase(profile: &PatientNeedsProfile) -> String {
    match profile.primary_classification() {
        PrimaryClassification::Rug {
            group, category, ..
        } => match category {
            Some(category) => format!("RUG group {group} ({category})"),
            None => format!("RUG group {group}"),
        },
        PrimaryClassification::Cluster { cluster } => {
            format!("the {} cluster", cluster.label())
        }
    }
}

fn pretty(view: &serde_json::Value) -> String {
    serde_json::to_string_pretty(view).unwrap_or_else(|_| view.to_string())
}
