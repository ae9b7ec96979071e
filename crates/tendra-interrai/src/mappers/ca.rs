//! Contact Assessment (CA) mapper.
//!
//! A screening instrument, so scores are coarser: small capacity-item
//! clusters are summed and scaled onto the profile's 0-6 ranges rather
//! than read directly. The CA is also the only source of the stored
//! algorithm scores (urgency, self-reliance, mood, CHESS-CA).

use tendra_core::models::assessment::{AssessmentType, RawAssessment};
use tendra_core::models::profile_fields::{ProfileFields, fields};
use tendra_core::scales::{self, ScaleRange};

use crate::AssessmentMapper;
use crate::items::{self, ItemKey, ItemSpec};

// ADL capacity cluster, each item 0-4.
static BATHING: ItemKey = ItemKey::new("ca_bathing", &["bathing_capacity"]);
static PERSONAL_HYGIENE: ItemKey =
    ItemKey::new("ca_personal_hygiene", &["hygiene_capacity", "personal_hygiene"]);
static DRESSING_LOWER: ItemKey = ItemKey::new("ca_dressing_lower", &["dressing_lower_body"]);
static LOCOMOTION: ItemKey = ItemKey::new("ca_locomotion", &["locomotion_capacity"]);
static EATING: ItemKey = ItemKey::new("ca_eating", &["eating_capacity"]);

// IADL capacity cluster, each item 0-4.
static MEAL_PREP: ItemKey = ItemKey::new("ca_meal_prep", &["meal_preparation"]);
static HOUSEWORK: ItemKey = ItemKey::new("ca_housework", &["ordinary_housework"]);
static MEDICATION_MGMT: ItemKey = ItemKey::new("ca_medication_mgmt", &["managing_medications"]);

// Mobility and cognition items.
static STAIRS: ItemKey = ItemKey::new("ca_stairs", &["stairs_capacity"]);
static DAILY_DECISION: ItemKey = ItemKey::new("ca_daily_decision", &["daily_decision_making"]);
static MEMORY_PROBLEM: ItemKey = ItemKey::new("ca_memory_problem", &["memory_problem"]);

// Stored algorithm outputs.
static SELF_RELIANCE: ItemKey = ItemKey::new("self_reliance_index", &["sri"]);
static ASSESSMENT_URGENCY: ItemKey =
    ItemKey::new("assessment_urgency", &["aua", "assessment_urgency_algorithm"]);
static SERVICE_URGENCY: ItemKey = ItemKey::new("service_urgency", &["sua"]);
static REHABILITATION: ItemKey = ItemKey::new("rehabilitation_score", &["rehab_index"]);
static PERSONAL_SUPPORT: ItemKey =
    ItemKey::new("personal_support_score", &["psa", "personal_support_algorithm"]);
static DISTRESSED_MOOD: ItemKey = ItemKey::new("distressed_mood_score", &["dmi", "mood_index"]);
static PAIN: ItemKey = ItemKey::new("pain_scale", &["ca_pain_scale"]);
static CHESS_CA: ItemKey = ItemKey::new("chess_ca", &["chess", "chess_scale"]);

const CAPACITY_RANGE: ScaleRange = ScaleRange::new(0, 4);
const MEMORY_RANGE: ScaleRange = ScaleRange::new(0, 1);

static ITEM_SPECS: [ItemSpec; 18] = [
    ItemSpec { key: &BATHING, range: CAPACITY_RANGE },
    ItemSpec { key: &PERSONAL_HYGIENE, range: CAPACITY_RANGE },
    ItemSpec { key: &DRESSING_LOWER, range: CAPACITY_RANGE },
    ItemSpec { key: &LOCOMOTION, range: CAPACITY_RANGE },
    ItemSpec { key: &EATING, range: CAPACITY_RANGE },
    ItemSpec { key: &MEAL_PREP, range: CAPACITY_RANGE },
    ItemSpec { key: &HOUSEWORK, range: CAPACITY_RANGE },
    ItemSpec { key: &MEDICATION_MGMT, range: CAPACITY_RANGE },
    ItemSpec { key: &STAIRS, range: CAPACITY_RANGE },
    ItemSpec { key: &DAILY_DECISION, range: CAPACITY_RANGE },
    ItemSpec { key: &MEMORY_PROBLEM, range: MEMORY_RANGE },
    ItemSpec { key: &ASSESSMENT_URGENCY, range: scales::ASSESSMENT_URGENCY },
    ItemSpec { key: &SERVICE_URGENCY, range: scales::SERVICE_URGENCY },
    ItemSpec { key: &REHABILITATION, range: scales::REHABILITATION },
    ItemSpec { key: &PERSONAL_SUPPORT, range: scales::PERSONAL_SUPPORT },
    ItemSpec { key: &DISTRESSED_MOOD, range: scales::DISTRESSED_MOOD },
    ItemSpec { key: &PAIN, range: scales::PAIN },
    ItemSpec { key: &CHESS_CA, range: scales::CHESS_CA },
];

static POPULATABLE: [&str; 12] = [
    fields::ADL_SUPPORT_LEVEL,
    fields::IADL_SUPPORT_LEVEL,
    fields::MOBILITY_COMPLEXITY,
    fields::COGNITIVE_COMPLEXITY,
    fields::SELF_RELIANCE_INDEX,
    fields::ASSESSMENT_URGENCY,
    fields::SERVICE_URGENCY,
    fields::REHABILITATION_SCORE,
    fields::PERSONAL_SUPPORT_SCORE,
    fields::DISTRESSED_MOOD_SCORE,
    fields::PAIN_SCALE,
    fields::CHESS_CA,
];

/// Mapper for Contact Assessment screeners.
pub struct CaMapper;

impl AssessmentMapper for CaMapper {
    fn assessment_type(&self) -> AssessmentType {
        AssessmentType::ContactAssessment
    }

    fn confidence_weight(&self) -> f64 {
        0.7
    }

    fn supports_rug_classification(&self) -> bool {
        false
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

        // Capacity clusters: missing items contribute 0; a cluster with no
        // recorded item at all stays unset.
        out.functional.adl_support_level = cluster_sum(
            items,
            &[&BATHING, &PERSONAL_HYGIENE, &DRESSING_LOWER, &LOCOMOTION, &EATING],
        )
        .map(|sum| scales::ADL_SUPPORT.clamp(sum / 3));
        out.functional.iadl_support_level =
            cluster_sum(items, &[&MEAL_PREP, &HOUSEWORK, &MEDICATION_MGMT])
                .map(|sum| scales::IADL_SUPPORT.clamp(sum / 2));
        out.functional.mobility_complexity = cluster_sum(items, &[&LOCOMOTION, &STAIRS])
            .map(|sum| scales::MOBILITY.clamp(sum));

        out.cognitive.cognitive_complexity = cognition_score(items);

        out.algorithm_scores.self_reliance_index = items::bool_item(items, &SELF_RELIANCE);
        out.algorithm_scores.assessment_urgency =
            items::scaled_item(items, &ASSESSMENT_URGENCY, scales::ASSESSMENT_URGENCY);
        out.algorithm_scores.service_urgency =
            items::scaled_item(items, &SERVICE_URGENCY, scales::SERVICE_URGENCY);
        out.algorithm_scores.rehabilitation_score =
            items::scaled_item(items, &REHABILITATION, scales::REHABILITATION);
        out.algorithm_scores.personal_support_score =
            items::scaled_item(items, &PERSONAL_SUPPORT, scales::PERSONAL_SUPPORT);
        out.algorithm_scores.distressed_mood_score =
            items::scaled_item(items, &DISTRESSED_MOOD, scales::DISTRESSED_MOOD);
        out.algorithm_scores.pain_scale = items::scaled_item(items, &PAIN, scales::PAIN);
        out.algorithm_scores.chess_ca = items::scaled_item(items, &CHESS_CA, scales::CHESS_CA);

        out
    }
}

/// Sum a capacity cluster, or `None` when no item in it was recorded.
fn cluster_sum(
    items: Option<&serde_json::Map<String, serde_json::Value>>,
    keys: &[&ItemKey],
) -> Option<i64> {
    let mut recorded = false;
    let mut sum = 0i64;
    for key in keys {
        if let Some(v) = items::int_item(items, key) {
            recorded = true;
            sum += v.max(0);
        }
    }
    recorded.then_some(sum)
}

/// Daily decision-making plus a doubled memory-problem indicator.
fn cognition_score(items: Option<&serde_json::Map<String, serde_json::Value>>) -> Option<u8> {
    let decision = items::int_item(items, &DAILY_DECISION);
    let memory = items::int_item(items, &MEMORY_PROBLEM);
    if decision.is_none() && memory.is_none() {
        return None;
    }
    let raw = decision.unwrap_or(0).max(0) + 2 * memory.unwrap_or(0).clamp(0, 1);
    Some(scales::COGNITIVE.clamp(raw))
}
