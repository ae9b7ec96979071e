//! Home Care (HC) mapper.
//!
//! The richest source: normalized scale items map almost one-to-one onto
//! the profile, and this is the only instrument that can carry or derive a
//! RUG-III/HC classification.

use tendra_core::models::assessment::{AssessmentType, RawAssessment};
use tendra_core::models::profile_axes::LivingSituation;
use tendra_core::models::profile_fields::{ProfileFields, fields};
use tendra_core::scales::{self, ScaleRange};

use crate::AssessmentMapper;
use crate::items::{self, ItemKey, ItemSpec};
use crate::rug::{self, RugInputs};

// Functional scales.
static ADL_HIERARCHY: ItemKey = ItemKey::new("adl_hierarchy", &["adl_h", "adl_hierarchy_scale"]);
static IADL_CAPACITY: ItemKey = ItemKey::new("iadl_capacity", &["iadl_c", "iadl_capacity_scale"]);
static LOCOMOTION: ItemKey = ItemKey::new("locomotion", &["locomotion_in_home", "mobility"]);
static BATHING: ItemKey = ItemKey::new("bathing", &["adl_bathing"]);
static TRANSFER: ItemKey = ItemKey::new("transfer", &["toilet_transfer", "adl_transfer"]);
static EATING: ItemKey = ItemKey::new("eating", &["adl_eating"]);

// Cognition and behaviour.
static CPS: ItemKey = ItemKey::new("cps", &["cognitive_performance_scale", "cps_score"]);
static DELIRIUM: ItemKey = ItemKey::new("delirium", &["acute_mental_change"]);
static WANDERING: ItemKey = ItemKey::new("wandering", &["wandering_freq"]);
static VERBAL_ABUSE: ItemKey = ItemKey::new("verbal_abuse", &["verbally_abusive"]);
static PHYSICAL_ABUSE: ItemKey = ItemKey::new("physical_abuse", &["physically_abusive"]);
static SOCIALLY_INAPPROPRIATE: ItemKey =
    ItemKey::new("socially_inappropriate", &["socially_inappropriate_behaviour"]);
static RESISTS_CARE: ItemKey = ItemKey::new("resists_care", &["care_resistance"]);

// Clinical risks.
static CHESS: ItemKey = ItemKey::new("chess", &["chess_scale", "health_instability"]);
static PAIN: ItemKey = ItemKey::new("pain_scale", &["pain"]);
static FALLS_90D: ItemKey = ItemKey::new("falls_90d", &["falls", "fall_count_90d"]);
static PRESSURE_ULCER_RISK: ItemKey = ItemKey::new("pressure_ulcer_risk", &["prs", "skin_risk"]);
static CONTINENCE: ItemKey = ItemKey::new("bladder_continence", &["continence", "bladder"]);
static MEDICATION_COUNT: ItemKey = ItemKey::new("medication_count", &["num_medications", "rx_count"]);
static CONDITIONS: ItemKey = ItemKey::new("active_conditions", &["diagnoses", "conditions"]);

// Treatments and service use.
static IV_THERAPY: ItemKey = ItemKey::new("iv_therapy", &["iv_meds"]);
static WOUND_CARE: ItemKey = ItemKey::new("wound_care", &["complex_wound_care"]);
static OXYGEN_THERAPY: ItemKey = ItemKey::new("oxygen_therapy", &["o2_therapy"]);
static DIALYSIS: ItemKey = ItemKey::new("dialysis", &[]);
static TUBE_FEEDING: ItemKey = ItemKey::new("tube_feeding", &["enteral_feeding"]);
static REHAB_PROSPECT: ItemKey =
    ItemKey::new("rehabilitation_prospect", &["good_prospect_of_recovery"]);
static PT_MINUTES: ItemKey = ItemKey::new("pt_minutes_weekly", &["physiotherapy_minutes"]);
static OT_MINUTES: ItemKey = ItemKey::new("ot_minutes_weekly", &["occupational_therapy_minutes"]);
static SLP_MINUTES: ItemKey = ItemKey::new("slp_minutes_weekly", &["speech_therapy_minutes"]);
static HOSPITAL_90D: ItemKey = ItemKey::new("hospital_admissions_90d", &["hospitalizations_90d"]);
static ED_90D: ItemKey = ItemKey::new("ed_visits_90d", &["er_visits_90d"]);

// Support, technology, environment.
static CAREGIVER_AVAILABLE: ItemKey = ItemKey::new("caregiver_available", &["informal_helper"]);
static CAREGIVER_DISTRESS: ItemKey = ItemKey::new("caregiver_distress", &["caregiver_stress"]);
static LIVES_ALONE: ItemKey = ItemKey::new("lives_alone", &["living_alone"]);
static LIVING_ARRANGEMENT: ItemKey = ItemKey::new("living_arrangement", &["living_situation"]);
static HAS_INTERNET: ItemKey = ItemKey::new("has_internet", &["internet_access", "connectivity"]);
static RURAL_ADDRESS: ItemKey = ItemKey::new("rural_address", &["rural", "rural_location"]);
static TRAVEL_COMPLEXITY: ItemKey = ItemKey::new("travel_complexity", &["travel_time_band"]);
static HOME_CONCERNS: ItemKey =
    ItemKey::new("home_environment_concerns", &["home_hazards", "environment_concerns"]);

const BEHAVIOUR_RANGE: ScaleRange = ScaleRange::new(0, 3);

static ITEM_SPECS: [ItemSpec; 16] = [
    ItemSpec { key: &ADL_HIERARCHY, range: scales::ADL_SUPPORT },
    ItemSpec { key: &IADL_CAPACITY, range: scales::IADL_SUPPORT },
    ItemSpec { key: &LOCOMOTION, range: scales::MOBILITY },
    ItemSpec { key: &BATHING, range: scales::ADL_SUPPORT },
    ItemSpec { key: &TRANSFER, range: scales::ADL_SUPPORT },
    ItemSpec { key: &EATING, range: scales::ADL_SUPPORT },
    ItemSpec { key: &CPS, range: scales::COGNITIVE },
    ItemSpec { key: &CHESS, range: scales::HEALTH_INSTABILITY },
    ItemSpec { key: &PAIN, range: scales::PAIN },
    ItemSpec { key: &PRESSURE_ULCER_RISK, range: scales::SKIN_INTEGRITY },
    ItemSpec { key: &CONTINENCE, range: scales::CONTINENCE },
    ItemSpec { key: &WANDERING, range: BEHAVIOUR_RANGE },
    ItemSpec { key: &VERBAL_ABUSE, range: BEHAVIOUR_RANGE },
    ItemSpec { key: &PHYSICAL_ABUSE, range: BEHAVIOUR_RANGE },
    ItemSpec { key: &SOCIALLY_INAPPROPRIATE, range: BEHAVIOUR_RANGE },
    ItemSpec { key: &RESISTS_CARE, range: BEHAVIOUR_RANGE },
];

static POPULATABLE: [&str; 34] = [
    fields::RUG_GROUP,
    fields::RUG_CATEGORY,
    fields::RUG_NUMERIC_RANK,
    fields::ADL_SUPPORT_LEVEL,
    fields::IADL_SUPPORT_LEVEL,
    fields::MOBILITY_COMPLEXITY,
    fields::ADL_NEED_TAGS,
    fields::COGNITIVE_COMPLEXITY,
    fields::BEHAVIOURAL_COMPLEXITY,
    fields::WANDERING_FLAG,
    fields::AGGRESSION_FLAG,
    fields::DELIRIUM_FLAG,
    fields::FALLS_RISK_SCORE,
    fields::SKIN_INTEGRITY_SCORE,
    fields::PAIN_SCORE,
    fields::CONTINENCE_SCORE,
    fields::HEALTH_INSTABILITY_SCORE,
    fields::POLYPHARMACY_FLAG,
    fields::CLINICAL_RISK_TAGS,
    fields::ACTIVE_CONDITIONS,
    fields::REHABILITATION_POTENTIAL,
    fields::EXTENSIVE_SERVICE_FLAGS,
    fields::THERAPY_MINUTES_WEEKLY,
    fields::RECENT_HOSPITAL_ADMISSION,
    fields::RECENT_ED_VISIT,
    fields::CAREGIVER_AVAILABLE,
    fields::CAREGIVER_STRESS,
    fields::LIVES_ALONE,
    fields::LIVING_SITUATION,
    fields::CONNECTIVITY_AVAILABLE,
    fields::TELEMONITORING_SUITABLE,
    fields::RURAL_LOCATION,
    fields::TRAVEL_COMPLEXITY,
    fields::HOME_ENVIRONMENT_TAGS,
];

/// Mapper for full Home Care assessments.
pub struct HcMapper;

impl AssessmentMapper for HcMapper {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::HomeCare
    }

    fn confidence_weight(&self) -> f64 {
        1.0
    }

    fn supports_rug_classification(&self) -> bool {
        true
    }

    fn populatable_fields(&self) -> &'static [&'static str] {
        &POPULATABLE
    }

    fn item_specs(&self) -> &'static [ItemSpec] {
        &ITEM_SPECS
    }

    fn map_to_profile_fields(&self, assessment: &RawAssessment) -> ProfileFields {
        let items = assessment.items();
        let mut out = ProfileFields::default();

        let adl = items::scaled_item(items, &ADL_HIERARCHY, scales::ADL_SUPPORT);
        let iadl = items::scaled_item(items, &IADL_CAPACITY, scales::IADL_SUPPORT);
        out.functional.adl_support_level = adl;
        out.functional.iadl_support_level = iadl;
        out.functional.mobility_complexity = items::scaled_item(items, &LOCOMOTION, scales::MOBILITY);
        out.functional.adl_need_tags = adl_need_tags(items);

        let cps = items::scaled_item(items, &CPS, scales::COGNITIVE);
        let behavioural = behaviour_composite(items);
        out.cognitive.cognitive_complexity = cps;
        out.cognitive.behavioural_complexity = behavioural;
        out.cognitive.wandering_flag = items::int_item(items, &WANDERING).map(|v| v > 0);
        out.cognitive.aggression_flag = items::int_item(items, &PHYSICAL_ABUSE).map(|v| v > 0);
        out.cognitive.delirium_flag = items::bool_item(items, &DELIRIUM);

        let chess = items::scaled_item(items, &CHESS, scales::HEALTH_INSTABILITY);
        let falls = items::int_item(items, &FALLS_90D);
        out.clinical.falls_risk_score = falls.map(|v| scales::FALLS_RISK.clamp(v));
        out.clinical.skin_integrity_score =
            items::scaled_item(items, &PRESSURE_ULCER_RISK, scales::SKIN_INTEGRITY);
        out.clinical.pain_score = items::scaled_item(items, &PAIN, scales::PAIN);
        out.clinical.continence_score = items::scaled_item(items, &CONTINENCE, scales::CONTINENCE);
        out.clinical.health_instability_score = chess;
        out.clinical.polypharmacy_flag = items::int_item(items, &MEDICATION_COUNT).map(|n| n >= 9);
        if falls.is_some_and(|v| v > 0) {
            out.clinical.clinical_risk_tags.push("recent_fall".to_string());
        }
        out.clinical.active_conditions = items::str_list_item(items, &CONDITIONS);

        let extensive = extensive_service_flags(items);
        out.treatment.rehabilitation_potential = items::bool_item(items, &REHAB_PROSPECT);
        out.treatment.therapy_minutes_weekly = therapy_minutes(items);
        out.treatment.recent_hospital_admission = items::int_item(items, &HOSPITAL_90D).map(|n| n > 0);
        out.treatment.recent_ed_visit = items::int_item(items, &ED_90D).map(|n| n > 0);

        out.support.caregiver_available = items::bool_item(items, &CAREGIVER_AVAILABLE);
        out.support.caregiver_stress = items::bool_item(items, &CAREGIVER_DISTRESS);
        out.support.lives_alone = items::bool_item(items, &LIVES_ALONE);
        out.support.living_situation =
            items::str_item(items, &LIVING_ARRANGEMENT).and_then(|s| parse_living_situation(&s));

        // Telemonitoring needs a connection and enough cognitive capacity
        // to engage with the devices.
        let connectivity = items::bool_item(items, &HAS_INTERNET);
        out.technology.connectivity_available = connectivity;
        out.technology.telemonitoring_suitable =
            connectivity.map(|c| c && cps.unwrap_or(0) <= 3);

        out.environment.rural_location = items::bool_item(items, &RURAL_ADDRESS);
        out.environment.travel_complexity =
            items::scaled_item(items, &TRAVEL_COMPLEXITY, scales::TRAVEL_COMPLEXITY);
        out.environment.home_environment_tags = items::str_list_item(items, &HOME_CONCERNS);

        let classification = match assessment.classification.clone() {
            Some(record) => rug::complete(record),
            None => rug::classify_fallback(&RugInputs {
                adl: adl.unwrap_or(0),
                iadl: iadl.unwrap_or(0),
                cps: cps.unwrap_or(0),
                chess: chess.unwrap_or(0),
                behavioural: behavioural.unwrap_or(0),
                extensive_services: !extensive.is_empty(),
            }),
        };
        out.classification.rug_group = Some(classification.rug_group);
        out.classification.rug_category = classification.rug_category;
        out.classification.rug_numeric_rank = classification.rug_numeric_rank;
        out.treatment.extensive_service_flags = extensive;

        out
    }
}

/// Count of the five behaviour items exhibited, capped at 4. Unset when
/// none of the items was recorded at all.
fn behaviour_composite(items: Option<&serde_json::Map<String, serde_json::Value>>) -> Option<u8> {
    let behaviour_items = [
        &WANDERING,
        &VERBAL_ABUSE,
        &PHYSICAL_ABUSE,
        &SOCIALLY_INAPPROPRIATE,
        &RESISTS_CARE,
    ];
    let mut recorded = false;
    let mut count = 0u8;
    for key in behaviour_items {
        if let Some(v) = items::int_item(items, key) {
            recorded = true;
            if v > 0 {
                count += 1;
            }
        }
    }
    recorded.then(|| count.min(4))
}

fn adl_need_tags(items: Option<&serde_json::Map<String, serde_json::Value>>) -> Vec<String> {
    let mut tags = Vec::new();
    for (key, tag) in [
        (&BATHING, "bathing_assist"),
        (&TRANSFER, "transfer_assist"),
        (&EATING, "eating_assist"),
    ] {
        if items::int_item(items, key).is_some_and(|v| v >= 3) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn extensive_service_flags(
    items: Option<&serde_json::Map<String, serde_json::Value>>,
) -> Vec<String> {
    let mut flags = Vec::new();
    for key in [&IV_THERAPY, &WOUND_CARE, &OXYGEN_THERAPY, &DIALYSIS, &TUBE_FEEDING] {
        if items::bool_item(items, key).unwrap_or(false) {
            flags.push(key.canonical.to_string());
        }
    }
    flags
}

fn therapy_minutes(items: Option<&serde_json::Map<String, serde_json::Value>>) -> Option<u32> {
    let mut recorded = false;
    let mut total: u32 = 0;
    for key in [&PT_MINUTES, &OT_MINUTES, &SLP_MINUTES] {
        if let Some(v) = items::int_item(items, key) {
            recorded = true;
            total = total.saturating_add(v.clamp(0, i64::from(u32::MAX)) as u32);
        }
    }
    recorded.then_some(total)
}

fn parse_living_situation(raw: &str) -> Option<LivingSituation> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "alone" => Some(LivingSituation::Alone),
        "with_spouse" | "spouse" | "spouse_only" => Some(LivingSituation::WithSpouse),
        "with_family" | "family" | "with_children" => Some(LivingSituation::WithFamily),
        "with_non_family" | "non_family" | "with_nonrelative" => {
            Some(LivingSituation::WithNonFamily)
        }
        "group_setting" | "group" | "group_home" => Some(LivingSituation::GroupSetting),
        _ => None,
    }
}
