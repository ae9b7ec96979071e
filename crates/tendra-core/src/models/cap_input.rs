use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::needs_profile::PatientNeedsProfile;

/// The standardized payload handed to the external CAP evaluator.
///
/// The snake_case key names are the wire contract the evaluator's rule set
/// is written against — renaming a field here breaks CAP evaluation even
/// though nothing in this workspace stops compiling. Missing profile data
/// degrades to the scale minimum (or false/null), never an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapInput {
    pub adl_support_level: u8,
    pub iadl_support_level: u8,
    pub mobility_complexity: u8,
    pub fall_risk_score: u8,
    pub cognitive_performance: u8,
    pub delirium_flag: bool,
    pub behaviour_score: u8,
    pub pain_score: u8,
    pub health_instability: u8,
    pub pressure_ulcer_risk: u8,
    pub polypharmacy_flag: bool,
    pub home_environment_concern: bool,
    pub caregiver_stress: bool,
    pub lives_alone: bool,
    pub recent_hospital_admission: bool,
    pub recent_ed_visit: bool,
    pub assessment_type: Option<String>,
    pub assessment_date: Option<jiff::civil::Date>,
    pub self_reliance_index: Option<bool>,
    pub assessment_urgency: Option<u8>,
    pub service_urgency: Option<u8>,
    pub rehabilitation_score: Option<u8>,
    pub personal_support_score: Option<u8>,
    pub distressed_mood_score: Option<u8>,
    pub chess_ca: Option<u8>,
}

impl CapInput {
    pub fn from_profile(profile: &PatientNeedsProfile) -> Self {
        let scores = &profile.algorithm_scores;
        Self {
            adl_support_level: profile.functional.adl_support_level.unwrap_or(0),
            iadl_support_level: profile.functional.iadl_support_level.unwrap_or(0),
            mobility_complexity: profile.functional.mobility_complexity.unwrap_or(0),
            fall_risk_score: profile.clinical.falls_risk_score.unwrap_or(0),
            cognitive_performance: profile.cognitive.cognitive_complexity.unwrap_or(0),
            delirium_flag: profile.cognitive.delirium_flag.unwrap_or(false),
            behaviour_score: profile.cognitive.behavioural_complexity.unwrap_or(0),
            pain_score: profile.clinical.pain_score.unwrap_or(0),
            health_instability: profile.clinical.health_instability_score.unwrap_or(0),
            pressure_ulcer_risk: profile.clinical.skin_integrity_score.unwrap_or(0),
            polypharmacy_flag: profile.clinical.polypharmacy_flag.unwrap_or(false),
            home_environment_concern: !profile.environment.home_environment_tags.is_empty(),
            caregiver_stress: profile.support.caregiver_stress.unwrap_or(false),
            lives_alone: profile.support.lives_alone.unwrap_or(false),
            recent_hospital_admission: profile.treatment.recent_hospital_admission.unwrap_or(false),
            recent_ed_visit: profile.treatment.recent_ed_visit.unwrap_or(false),
            assessment_type: profile
                .sources
                .primary_assessment_type
                .map(|t| t.code().to_string()),
            assessment_date: profile.sources.primary_assessment_date,
            self_reliance_index: scores.self_reliance_index,
            assessment_urgency: scores.assessment_urgency,
            service_urgency: scores.service_urgency,
            rehabilitation_score: scores.rehabilitation_score,
            personal_support_score: scores.personal_support_score,
            distressed_mood_score: scores.distressed_mood_score,
            chess_ca: scores.chess_ca,
        }
    }
}
