use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The assessment instruments the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    /// InterRAI Home Care — the comprehensive instrument.
    HomeCare,
    /// InterRAI Contact Assessment — the abbreviated intake instrument.
    ContactAssessment,
    /// Brief Mental Health Screener — a supplement, never a primary source.
    MentalHealthScreener,
}

impl AssessmentType {
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentType::HomeCare => "hc",
            AssessmentType::ContactAssessment => "ca",
            AssessmentType::MentalHealthScreener => "bmhs",
        }
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hc" | "home_care" => Ok(AssessmentType::HomeCare),
            "ca" | "contact_assessment" => Ok(AssessmentType::ContactAssessment),
            "bmhs" | "mental_health_screener" => Ok(AssessmentType::MentalHealthScreener),
            other => Err(CoreError::UnknownAssessmentType(other.to_string())),
        }
    }
}

/// A raw assessment record as it comes out of the assessment store.
///
/// `raw_items` is a free-form JSON object of instrument items. Historical
/// records use several key spellings for the same item, so all item access
/// goes through the alias tables rather than direct key lookups; a missing
/// or malformed item is never an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAssessment {
    pub patient_id: Uuid,
    pub assessment_type: AssessmentType,
    pub assessment_date: Option<jiff::civil::Date>,
    pub raw_items: serde_json::Value,
    /// Case-mix classification attached by the assessment pipeline, when one
    /// was computed. Only Home Care records carry this.
    pub classification: Option<RugClassification>,
}

impl RawAssessment {
    /// The raw item object, or `None` when `raw_items` is not a JSON object.
    pub fn items(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.raw_items.as_object()
    }
}

/// A stored RUG-III/HC classification result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RugClassification {
    pub rug_group: String,
    pub rug_category: Option<String>,
    pub rug_numeric_rank: Option<u8>,
}

/// Referral or discharge-note data — the weakest usable source.
///
/// When neither a Home Care nor a Contact Assessment exists, these few
/// fields are all the engine has to work with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralData {
    pub referral_date: Option<jiff::civil::Date>,
    pub referral_reason: Option<String>,
    pub noted_conditions: Vec<String>,
    pub lives_alone: Option<bool>,
    pub caregiver_available: Option<bool>,
    pub mobility_concern: Option<bool>,
    pub cognition_concern: Option<bool>,
}
