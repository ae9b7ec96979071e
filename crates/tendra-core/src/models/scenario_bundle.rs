use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;
use uuid::Uuid;

use super::needs_profile::ConfidenceLevel;
use super::scenario_axis::ScenarioAxis;
use super::service_line::ScenarioServiceLine;

/// Where a bundle sits relative to the weekly funding cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CostCapStatus {
    WithinCap,
    NearCap,
    OverCap,
}

/// Provenance of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BundleSource {
    RuleEngine,
    Template,
    AiProposed,
    Coordinator,
}

/// One priced care-plan alternative for a patient along a labeled axis.
///
/// Bundles are constructed whole by the generator and never mutated;
/// the explanation text arrives out-of-band via `with_ai_explanation`,
/// which returns a new value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioBundleDto {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub primary_axis: ScenarioAxis,
    pub secondary_axes: Vec<ScenarioAxis>,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub service_lines: Vec<ScenarioServiceLine>,
    pub weekly_estimated_cost: f64,
    pub reference_cap: f64,
    pub cap_utilization_pct: f64,
    pub cost_cap_status: CostCapStatus,
    pub total_weekly_hours: f64,
    pub total_weekly_visits: f64,
    pub in_person_pct: f64,
    pub virtual_pct: f64,
    pub discipline_count: usize,
    pub tradeoff_narrative: String,
    pub meets_safety_requirements: bool,
    /// Ids of the safety needs the profile raised for this patient.
    pub safety_flags: Vec<String>,
    pub safety_warnings: Vec<String>,
    pub source: BundleSource,
    pub confidence_level: ConfidenceLevel,
    /// Human-readable rationale from the external explanation model.
    pub ai_explanation: Option<String>,
    pub generated_at: jiff::Timestamp,
}

impl ScenarioBundleDto {
    /// Attach the explanation text produced by the external model.
    pub fn with_ai_explanation(mut self, text: impl Into<String>) -> Self {
        self.ai_explanation = Some(text.into());
        self
    }

    /// Full internal view, identifiers included. Never send this across the
    /// explanation-model boundary.
    pub fn to_full_json(&self) -> serde_json::Value {
        let mut view = self.to_deidentified_json();
        if let Some(obj) = view.as_object_mut() {
            obj.insert("id".to_string(), json!(self.id));
            obj.insert("patient_id".to_string(), json!(self.patient_id));
        }
        view
    }

    /// De-identified view: the whole clinical and financial picture with
    /// every identifier stripped.
    pub fn to_deidentified_json(&self) -> serde_json::Value {
        json!({
            "axis": {
                "primary": self.primary_axis,
                "secondary": self.secondary_axes,
            },
            "label": {
                "title": self.title,
                "description": self.description,
                "icon": self.icon,
            },
            "services": self.service_lines,
            "cost": {
                "weekly_estimated_cost": self.weekly_estimated_cost,
                "reference_cap": self.reference_cap,
                "cap_utilization_pct": self.cap_utilization_pct,
                "cost_cap_status": self.cost_cap_status,
            },
            "operations": {
                "total_weekly_hours": self.total_weekly_hours,
                "total_weekly_visits": self.total_weekly_visits,
                "in_person_pct": self.in_person_pct,
                "virtual_pct": self.virtual_pct,
                "discipline_count": self.discipline_count,
            },
            "context": {
                "tradeoff_narrative": self.tradeoff_narrative,
            },
            "safety": {
                "meets_safety_requirements": self.meets_safety_requirements,
                "safety_flags": self.safety_flags,
                "safety_warnings": self.safety_warnings,
            },
            "source": {
                "source": self.source,
                "confidence_level": self.confidence_level,
            },
            "ai": {
                "explanation": self.ai_explanation,
            },
            "meta": {
                "generated_at": self.generated_at.to_string(),
            },
        })
    }
}
