//! Axis sub-structures of the needs profile.
//!
//! Every scalar is optional and every list defaults to empty, so any subset
//! of sources can populate a profile. `fill_missing_from` is the precedence
//! merge primitive: it only writes fields the higher-precedence source left
//! unset, which is what keeps fusion order-sensitive but lossless.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which data sources contributed to a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourceFlags {
    pub has_full_hc_assessment: bool,
    pub has_ca_assessment: bool,
    pub has_bmhs_assessment: bool,
    pub has_referral_data: bool,
    pub primary_assessment_type: Option<super::assessment::AssessmentType>,
    pub primary_assessment_date: Option<jiff::civil::Date>,
}

/// Case classification: either a RUG-III/HC group (Home Care only) or the
/// synthetic needs cluster. Exactly one path is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub rug_group: Option<String>,
    pub rug_category: Option<String>,
    pub rug_numeric_rank: Option<u8>,
    pub needs_cluster: Option<NeedsCluster>,
}

impl Classification {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.rug_group.is_none() {
            self.rug_group = other.rug_group.clone();
        }
        if self.rug_category.is_none() {
            self.rug_category = other.rug_category.clone();
        }
        if self.rug_numeric_rank.is_none() {
            self.rug_numeric_rank = other.rug_numeric_rank;
        }
        if self.needs_cluster.is_none() {
            self.needs_cluster = other.needs_cluster;
        }
    }
}

/// Synthetic classification used whenever a RUG group is unavailable.
///
/// Variant order mirrors the classifier's decision list; `acuity_rank`
/// exposes the clinical ordering (higher = heavier needs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NeedsCluster {
    HighAdlCognitive,
    HighAdl,
    CognitiveComplex,
    MhComplex,
    MedicalComplex,
    ModerateAdl,
    LowAdl,
    General,
}

impl NeedsCluster {
    pub fn acuity_rank(&self) -> u8 {
        match self {
            NeedsCluster::General => 0,
            NeedsCluster::LowAdl => 1,
            NeedsCluster::ModerateAdl => 2,
            NeedsCluster::MedicalComplex => 3,
            NeedsCluster::MhComplex => 4,
            NeedsCluster::CognitiveComplex => 5,
            NeedsCluster::HighAdl => 6,
            NeedsCluster::HighAdlCognitive => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NeedsCluster::HighAdlCognitive => "High ADL with cognitive impairment",
            NeedsCluster::HighAdl => "High ADL support",
            NeedsCluster::CognitiveComplex => "Cognitively complex",
            NeedsCluster::MhComplex => "Mental-health complex",
            NeedsCluster::MedicalComplex => "Medically complex",
            NeedsCluster::ModerateAdl => "Moderate ADL support",
            NeedsCluster::LowAdl => "Low ADL support",
            NeedsCluster::General => "General home support",
        }
    }
}

/// Functional axis: ADL/IADL dependence and mobility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionalNeeds {
    pub adl_support_level: Option<u8>,
    pub iadl_support_level: Option<u8>,
    pub mobility_complexity: Option<u8>,
    pub adl_need_tags: Vec<String>,
}

impl FunctionalNeeds {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.adl_support_level.is_none() {
            self.adl_support_level = other.adl_support_level;
        }
        if self.iadl_support_level.is_none() {
            self.iadl_support_level = other.iadl_support_level;
        }
        if self.mobility_complexity.is_none() {
            self.mobility_complexity = other.mobility_complexity;
        }
        if self.adl_need_tags.is_empty() {
            self.adl_need_tags = other.adl_need_tags.clone();
        }
    }
}

/// Cognitive, behavioural, and mental-health axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveBehavioural {
    pub cognitive_complexity: Option<u8>,
    pub behavioural_complexity: Option<u8>,
    pub mental_health_complexity: Option<u8>,
    pub wandering_flag: Option<bool>,
    pub aggression_flag: Option<bool>,
    pub delirium_flag: Option<bool>,
    pub self_harm_risk: Option<u8>,
    pub violence_risk: Option<u8>,
    pub disordered_thought_score: Option<u8>,
    pub risk_of_harm_score: Option<u8>,
    pub requires_psychiatric_consult: Option<bool>,
    pub requires_crisis_intervention: Option<bool>,
    pub requires_behavioural_support: Option<bool>,
}

impl CognitiveBehavioural {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.cognitive_complexity.is_none() {
            self.cognitive_complexity = other.cognitive_complexity;
        }
        if self.behavioural_complexity.is_none() {
            self.behavioural_complexity = other.behavioural_complexity;
        }
        if self.mental_health_complexity.is_none() {
            self.mental_health_complexity = other.mental_health_complexity;
        }
        if self.wandering_flag.is_none() {
            self.wandering_flag = other.wandering_flag;
        }
        if self.aggression_flag.is_none() {
            self.aggression_flag = other.aggression_flag;
        }
        if self.delirium_flag.is_none() {
            self.delirium_flag = other.delirium_flag;
        }
        if self.self_harm_risk.is_none() {
            self.self_harm_risk = other.self_harm_risk;
        }
        if self.violence_risk.is_none() {
            self.violence_risk = other.violence_risk;
        }
        if self.disordered_thought_score.is_none() {
            self.disordered_thought_score = other.disordered_thought_score;
        }
        if self.risk_of_harm_score.is_none() {
            self.risk_of_harm_score = other.risk_of_harm_score;
        }
        if self.requires_psychiatric_consult.is_none() {
            self.requires_psychiatric_consult = other.requires_psychiatric_consult;
        }
        if self.requires_crisis_intervention.is_none() {
            self.requires_crisis_intervention = other.requires_crisis_intervention;
        }
        if self.requires_behavioural_support.is_none() {
            self.requires_behavioural_support = other.requires_behavioural_support;
        }
    }
}

/// Clinical risk axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRisks {
    pub falls_risk_score: Option<u8>,
    pub skin_integrity_score: Option<u8>,
    pub pain_score: Option<u8>,
    pub continence_score: Option<u8>,
    pub health_instability_score: Option<u8>,
    pub polypharmacy_flag: Option<bool>,
    pub clinical_risk_tags: Vec<String>,
    pub active_conditions: Vec<String>,
}

impl ClinicalRisks {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.falls_risk_score.is_none() {
            self.falls_risk_score = other.falls_risk_score;
        }
        if self.skin_integrity_score.is_none() {
            self.skin_integrity_score = other.skin_integrity_score;
        }
        if self.pain_score.is_none() {
            self.pain_score = other.pain_score;
        }
        if self.continence_score.is_none() {
            self.continence_score = other.continence_score;
        }
        if self.health_instability_score.is_none() {
            self.health_instability_score = other.health_instability_score;
        }
        if self.polypharmacy_flag.is_none() {
            self.polypharmacy_flag = other.polypharmacy_flag;
        }
        if self.clinical_risk_tags.is_empty() {
            self.clinical_risk_tags = other.clinical_risk_tags.clone();
        }
        if self.active_conditions.is_empty() {
            self.active_conditions = other.active_conditions.clone();
        }
    }
}

/// Treatment axis: rehabilitation and extensive services.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentContext {
    pub rehabilitation_potential: Option<bool>,
    pub extensive_service_flags: Vec<String>,
    pub therapy_minutes_weekly: Option<u32>,
    pub recent_hospital_admission: Option<bool>,
    pub recent_ed_visit: Option<bool>,
}

impl TreatmentContext {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.rehabilitation_potential.is_none() {
            self.rehabilitation_potential = other.rehabilitation_potential;
        }
        if self.extensive_service_flags.is_empty() {
            self.extensive_service_flags = other.extensive_service_flags.clone();
        }
        if self.therapy_minutes_weekly.is_none() {
            self.therapy_minutes_weekly = other.therapy_minutes_weekly;
        }
        if self.recent_hospital_admission.is_none() {
            self.recent_hospital_admission = other.recent_hospital_admission;
        }
        if self.recent_ed_visit.is_none() {
            self.recent_ed_visit = other.recent_ed_visit;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LivingSituation {
    Alone,
    WithSpouse,
    WithFamily,
    WithNonFamily,
    GroupSetting,
}

/// Informal support axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupportContext {
    pub caregiver_available: Option<bool>,
    pub caregiver_stress: Option<bool>,
    pub lives_alone: Option<bool>,
    pub living_situation: Option<LivingSituation>,
}

impl SupportContext {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.caregiver_available.is_none() {
            self.caregiver_available = other.caregiver_available;
        }
        if self.caregiver_stress.is_none() {
            self.caregiver_stress = other.caregiver_stress;
        }
        if self.lives_alone.is_none() {
            self.lives_alone = other.lives_alone;
        }
        if self.living_situation.is_none() {
            self.living_situation = other.living_situation;
        }
    }
}

/// Technology-readiness axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TechnologyContext {
    pub connectivity_available: Option<bool>,
    pub telemonitoring_suitable: Option<bool>,
}

impl TechnologyContext {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.connectivity_available.is_none() {
            self.connectivity_available = other.connectivity_available;
        }
        if self.telemonitoring_suitable.is_none() {
            self.telemonitoring_suitable = other.telemonitoring_suitable;
        }
    }
}

/// Home environment and geography axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnvironmentContext {
    pub rural_location: Option<bool>,
    pub travel_complexity: Option<u8>,
    pub home_environment_tags: Vec<String>,
}

impl EnvironmentContext {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.rural_location.is_none() {
            self.rural_location = other.rural_location;
        }
        if self.travel_complexity.is_none() {
            self.travel_complexity = other.travel_complexity;
        }
        if self.home_environment_tags.is_empty() {
            self.home_environment_tags = other.home_environment_tags.clone();
        }
    }
}

/// Contact Assessment algorithm scores. Populated only when a Contact
/// Assessment was mapped; no other source produces these.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaAlgorithmScores {
    pub self_reliance_index: Option<bool>,
    pub assessment_urgency: Option<u8>,
    pub service_urgency: Option<u8>,
    pub rehabilitation_score: Option<u8>,
    pub personal_support_score: Option<u8>,
    pub distressed_mood_score: Option<u8>,
    pub pain_scale: Option<u8>,
    pub chess_ca: Option<u8>,
}

impl CaAlgorithmScores {
    pub fn fill_missing_from(&mut self, other: &Self) {
        if self.self_reliance_index.is_none() {
            self.self_reliance_index = other.self_reliance_index;
        }
        if self.assessment_urgency.is_none() {
            self.assessment_urgency = other.assessment_urgency;
        }
        if self.service_urgency.is_none() {
            self.service_urgency = other.service_urgency;
        }
        if self.rehabilitation_score.is_none() {
            self.rehabilitation_score = other.rehabilitation_score;
        }
        if self.personal_support_score.is_none() {
            self.personal_support_score = other.personal_support_score;
        }
        if self.distressed_mood_score.is_none() {
            self.distressed_mood_score = other.distressed_mood_score;
        }
        if self.pain_scale.is_none() {
            self.pain_scale = other.pain_scale;
        }
        if self.chess_ca.is_none() {
            self.chess_ca = other.chess_ca;
        }
    }
}
