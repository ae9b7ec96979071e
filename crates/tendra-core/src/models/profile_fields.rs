//! The partial profile field set produced by a single mapper.
//!
//! `fields` holds the canonical field-name constants. Mappers declare which
//! of these they can populate, and fusion checks the same names against the
//! final merged value to compute the data-completeness score, so the name
//! table and `is_set` must stay in lockstep with the axis structs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile_axes::{
    CaAlgorithmScores, Classification, ClinicalRisks, CognitiveBehavioural, EnvironmentContext,
    FunctionalNeeds, SupportContext, TechnologyContext, TreatmentContext,
};

/// Canonical profile field names.
pub mod fields {
    pub const RUG_GROUP: &str = "rug_group";
    pub const RUG_CATEGORY: &str = "rug_category";
    pub const RUG_NUMERIC_RANK: &str = "rug_numeric_rank";
    pub const NEEDS_CLUSTER: &str = "needs_cluster";

    pub const ADL_SUPPORT_LEVEL: &str = "adl_support_level";
    pub const IADL_SUPPORT_LEVEL: &str = "iadl_support_level";
    pub const MOBILITY_COMPLEXITY: &str = "mobility_complexity";
    pub const ADL_NEED_TAGS: &str = "adl_need_tags";

    pub const COGNITIVE_COMPLEXITY: &str = "cognitive_complexity";
    pub const BEHAVIOURAL_COMPLEXITY: &str = "behavioural_complexity";
    pub const MENTAL_HEALTH_COMPLEXITY: &str = "mental_health_complexity";
    pub const WANDERING_FLAG: &str = "wandering_flag";
    pub const AGGRESSION_FLAG: &str = "aggression_flag";
    pub const DELIRIUM_FLAG: &str = "delirium_flag";
    pub const SELF_HARM_RISK: &str = "self_harm_risk";
    pub const VIOLENCE_RISK: &str = "violence_risk";
    pub const DISORDERED_THOUGHT_SCORE: &str = "disordered_thought_score";
    pub const RISK_OF_HARM_SCORE: &str = "risk_of_harm_score";
    pub const REQUIRES_PSYCHIATRIC_CONSULT: &str = "requires_psychiatric_consult";
    pub const REQUIRES_CRISIS_INTERVENTION: &str = "requires_crisis_intervention";
    pub const REQUIRES_BEHAVIOURAL_SUPPORT: &str = "requires_behavioural_support";

    pub const FALLS_RISK_SCORE: &str = "falls_risk_score";
    pub const SKIN_INTEGRITY_SCORE: &str = "skin_integrity_score";
    pub const PAIN_SCORE: &str = "pain_score";
    pub const CONTINENCE_SCORE: &str = "continence_score";
    pub const HEALTH_INSTABILITY_SCORE: &str = "health_instability_score";
    pub const POLYPHARMACY_FLAG: &str = "polypharmacy_flag";
    pub const CLINICAL_RISK_TAGS: &str = "clinical_risk_tags";
    pub const ACTIVE_CONDITIONS: &str = "active_conditions";

    pub const REHABILITATION_POTENTIAL: &str = "rehabilitation_potential";
    pub const EXTENSIVE_SERVICE_FLAGS: &str = "extensive_service_flags";
    pub const THERAPY_MINUTES_WEEKLY: &str = "therapy_minutes_weekly";
    pub const RECENT_HOSPITAL_ADMISSION: &str = "recent_hospital_admission";
    pub const RECENT_ED_VISIT: &str = "recent_ed_visit";

    pub const CAREGIVER_AVAILABLE: &str = "caregiver_available";
    pub const CAREGIVER_STRESS: &str = "caregiver_stress";
    pub const LIVES_ALONE: &str = "lives_alone";
    pub const LIVING_SITUATION: &str = "living_situation";

    pub const CONNECTIVITY_AVAILABLE: &str = "connectivity_available";
    pub const TELEMONITORING_SUITABLE: &str = "telemonitoring_suitable";

    pub const RURAL_LOCATION: &str = "rural_location";
    pub const TRAVEL_COMPLEXITY: &str = "travel_complexity";
    pub const HOME_ENVIRONMENT_TAGS: &str = "home_environment_tags";

    pub const SELF_RELIANCE_INDEX: &str = "self_reliance_index";
    pub const ASSESSMENT_URGENCY: &str = "assessment_urgency";
    pub const SERVICE_URGENCY: &str = "service_urgency";
    pub const REHABILITATION_SCORE: &str = "rehabilitation_score";
    pub const PERSONAL_SUPPORT_SCORE: &str = "personal_support_score";
    pub const DISTRESSED_MOOD_SCORE: &str = "distressed_mood_score";
    pub const PAIN_SCALE: &str = "pain_scale";
    pub const CHESS_CA: &str = "chess_ca";
}

/// A partial profile: what one source was able to say about a patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileFields {
    pub classification: Classification,
    pub functional: FunctionalNeeds,
    pub cognitive: CognitiveBehavioural,
    pub clinical: ClinicalRisks,
    pub treatment: TreatmentContext,
    pub support: SupportContext,
    pub technology: TechnologyContext,
    pub environment: EnvironmentContext,
    pub algorithm_scores: CaAlgorithmScores,
}

impl ProfileFields {
    /// Fill every field this set left unset from a lower-precedence source.
    pub fn merge_missing_from(&mut self, other: &ProfileFields) {
        self.classification.fill_missing_from(&other.classification);
        self.functional.fill_missing_from(&other.functional);
        self.cognitive.fill_missing_from(&other.cognitive);
        self.clinical.fill_missing_from(&other.clinical);
        self.treatment.fill_missing_from(&other.treatment);
        self.support.fill_missing_from(&other.support);
        self.technology.fill_missing_from(&other.technology);
        self.environment.fill_missing_from(&other.environment);
        self.algorithm_scores.fill_missing_from(&other.algorithm_scores);
    }

    /// Whether a field is populated, by canonical name.
    ///
    /// Unknown names report `false` so completeness can never overcount.
    pub fn is_set(&self, field: &str) -> bool {
        use fields as f;
        match field {
            f::RUG_GROUP => self.classification.rug_group.is_some(),
            f::RUG_CATEGORY => self.classification.rug_category.is_some(),
            f::RUG_NUMERIC_RANK => self.classification.rug_numeric_rank.is_some(),
            f::NEEDS_CLUSTER => self.classification.needs_cluster.is_some(),

            f::ADL_SUPPORT_LEVEL => self.functional.adl_support_level.is_some(),
            f::IADL_SUPPORT_LEVEL => self.functional.iadl_support_level.is_some(),
            f::MOBILITY_COMPLEXITY => self.functional.mobility_complexity.is_some(),
            f::ADL_NEED_TAGS => !self.functional.adl_need_tags.is_empty(),

            f::COGNITIVE_COMPLEXITY => self.cognitive.cognitive_complexity.is_some(),
            f::BEHAVIOURAL_COMPLEXITY => self.cognitive.behavioural_complexity.is_some(),
            f::MENTAL_HEALTH_COMPLEXITY => self.cognitive.mental_health_complexity.is_some(),
            f::WANDERING_FLAG => self.cognitive.wandering_flag.is_some(),
            f::AGGRESSION_FLAG => self.cognitive.aggression_flag.is_some(),
            f::DELIRIUM_FLAG => self.cognitive.delirium_flag.is_some(),
            f::SELF_HARM_RISK => self.cognitive.self_harm_risk.is_some(),
            f::VIOLENCE_RISK => self.cognitive.violence_risk.is_some(),
            f::DISORDERED_THOUGHT_SCORE => self.cognitive.disordered_thought_score.is_some(),
            f::RISK_OF_HARM_SCORE => self.cognitive.risk_of_harm_score.is_some(),
            f::REQUIRES_PSYCHIATRIC_CONSULT => {
                self.cognitive.requires_psychiatric_consult.is_some()
            }
            f::REQUIRES_CRISIS_INTERVENTION => {
                self.cognitive.requires_crisis_intervention.is_some()
            }
            f::REQUIRES_BEHAVIOURAL_SUPPORT => {
                self.cognitive.requires_behavioural_support.is_some()
            }

            f::FALLS_RISK_SCORE => self.clinical.falls_risk_score.is_some(),
            f::SKIN_INTEGRITY_SCORE => self.clinical.skin_integrity_score.is_some(),
            f::PAIN_SCORE => self.clinical.pain_score.is_some(),
            f::CONTINENCE_SCORE => self.clinical.continence_score.is_some(),
            f::HEALTH_INSTABILITY_SCORE => self.clinical.health_instability_score.is_some(),
            f::POLYPHARMACY_FLAG => self.clinical.polypharmacy_flag.is_some(),
            f::CLINICAL_RISK_TAGS => !self.clinical.clinical_risk_tags.is_empty(),
            f::ACTIVE_CONDITIONS => !self.clinical.active_conditions.is_empty(),

            f::REHABILITATION_POTENTIAL => self.treatment.rehabilitation_potential.is_some(),
            f::EXTENSIVE_SERVICE_FLAGS => !self.treatment.extensive_service_flags.is_empty(),
            f::THERAPY_MINUTES_WEEKLY => self.treatment.therapy_minutes_weekly.is_some(),
            f::RECENT_HOSPITAL_ADMISSION => self.treatment.recent_hospital_admission.is_some(),
            f::RECENT_ED_VISIT => self.treatment.recent_ed_visit.is_some(),

            f::CAREGIVER_AVAILABLE => self.support.caregiver_available.is_some(),
            f::CAREGIVER_STRESS => self.support.caregiver_stress.is_some(),
            f::LIVES_ALONE => self.support.lives_alone.is_some(),
            f::LIVING_SITUATION => self.support.living_situation.is_some(),

            f::CONNECTIVITY_AVAILABLE => self.technology.connectivity_available.is_some(),
            f::TELEMONITORING_SUITABLE => self.technology.telemonitoring_suitable.is_some(),

            f::RURAL_LOCATION => self.environment.rural_location.is_some(),
            f::TRAVEL_COMPLEXITY => self.environment.travel_complexity.is_some(),
            f::HOME_ENVIRONMENT_TAGS => !self.environment.home_environment_tags.is_empty(),

            f::SELF_RELIANCE_INDEX => self.algorithm_scores.self_reliance_index.is_some(),
            f::ASSESSMENT_URGENCY => self.algorithm_scores.assessment_urgency.is_some(),
            f::SERVICE_URGENCY => self.algorithm_scores.service_urgency.is_some(),
            f::REHABILITATION_SCORE => self.algorithm_scores.rehabilitation_score.is_some(),
            f::PERSONAL_SUPPORT_SCORE => self.algorithm_scores.personal_support_score.is_some(),
            f::DISTRESSED_MOOD_SCORE => self.algorithm_scores.distressed_mood_score.is_some(),
            f::PAIN_SCALE => self.algorithm_scores.pain_scale.is_some(),
            f::CHESS_CA => self.algorithm_scores.chess_ca.is_some(),

            _ => false,
        }
    }
}
