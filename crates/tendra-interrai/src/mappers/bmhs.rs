//! Brief Mental Health Screener (BMHS) supplement.
//!
//! Not a primary mapper. The screener only ever supplements the
//! cognitive/behavioural axis of a profile built from another source, so
//! it does not implement the mapper trait; fusion invokes it directly.
//! Scoring reads two item sections: Section B (disordered thought, ten
//! items coded 0 = absent, 1 = present, 2 = exhibited in last 24h) and
//! Section C (risk of harm).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tendra_core::models::assessment::{AssessmentType, RawAssessment};
use tendra_core::models::profile_fields::{ProfileFields, fields};
use tendra_core::scales::{self, ScaleRange};

use crate::items::{self, ItemKey, ItemSpec, ItemWarning};

// Section B: disordered thought.
static DELUSIONS: ItemKey = ItemKey::new("bmhs_delusions", &["delusions"]);
static HALLUCINATIONS: ItemKey = ItemKey::new("bmhs_hallucinations", &["hallucinations"]);
static COMMAND_HALLUCINATIONS: ItemKey =
    ItemKey::new("bmhs_command_hallucinations", &["command_hallucinations"]);
static ABNORMAL_THOUGHT: ItemKey =
    ItemKey::new("bmhs_abnormal_thought", &["abnormal_thought_process"]);
static LOSS_OF_INSIGHT: ItemKey = ItemKey::new("bmhs_loss_of_insight", &["loss_of_insight"]);
static DISORGANIZED_SPEECH: ItemKey =
    ItemKey::new("bmhs_disorganized_speech", &["disorganized_speech"]);
static PARANOIA: ItemKey = ItemKey::new("bmhs_paranoia", &["paranoia"]);
static PRESSURED_SPEECH: ItemKey = ItemKey::new("bmhs_pressured_speech", &["pressured_speech"]);
static EMOTIONAL_LABILITY: ItemKey =
    ItemKey::new("bmhs_emotional_lability", &["emotional_lability"]);
static GRANDIOSITY: ItemKey = ItemKey::new("bmhs_grandiosity", &["grandiosity"]);

static SECTION_B: [&ItemKey; 10] = [
    &DELUSIONS,
    &HALLUCINATIONS,
    &COMMAND_HALLUCINATIONS,
    &ABNORMAL_THOUGHT,
    &LOSS_OF_INSIGHT,
    &DISORGANIZED_SPEECH,
    &PARANOIA,
    &PRESSURED_SPEECH,
    &EMOTIONAL_LABILITY,
    &GRANDIOSITY,
];

// Section C: risk of harm.
static VIOLENCE_TO_OTHERS: ItemKey =
    ItemKey::new("bmhs_violence_to_others", &["violence_to_others"]);
static INTIMIDATION: ItemKey = ItemKey::new("bmhs_intimidation", &["intimidation_of_others"]);
static VIOLENT_IDEATION: ItemKey = ItemKey::new("bmhs_violent_ideation", &["violent_ideation"]);
static SELF_INJURY_ATTEMPT: ItemKey =
    ItemKey::new("bmhs_self_injury_attempt", &["self_injury_attempt", "self_harm_attempt"]);
static SUICIDE_PLAN: ItemKey = ItemKey::new("bmhs_suicide_plan", &["suicide_plan"]);
static SELF_HARM_IDEATION: ItemKey =
    ItemKey::new("bmhs_self_harm_ideation", &["self_harm_ideation", "suicidal_ideation"]);
static OTHERS_CONCERNED: ItemKey =
    ItemKey::new("bmhs_others_concerned", &["others_concerned_about_self_harm"]);
static WEAPON_HISTORY: ItemKey = ItemKey::new("bmhs_weapon_history", &["weapon_use_history"]);
static INAPPROPRIATE_BEHAVIOUR: ItemKey =
    ItemKey::new("bmhs_inappropriate_behaviour", &["inappropriate_behaviour"]);
static VERBAL_ABUSE: ItemKey = ItemKey::new("bmhs_verbal_abuse", &["verbal_abuse"]);
static HYPERAROUSAL: ItemKey = ItemKey::new("bmhs_hyperarousal", &["hyperarousal"]);

const SCREENER_RANGE: ScaleRange = ScaleRange::new(0, 2);
const PRESENCE_RANGE: ScaleRange = ScaleRange::new(0, 1);

static ITEM_SPECS: [ItemSpec; 21] = [
    ItemSpec { key: &DELUSIONS, range: SCREENER_RANGE },
    ItemSpec { key: &HALLUCINATIONS, range: SCREENER_RANGE },
    ItemSpec { key: &COMMAND_HALLUCINATIONS, range: SCREENER_RANGE },
    ItemSpec { key: &ABNORMAL_THOUGHT, range: SCREENER_RANGE },
    ItemSpec { key: &LOSS_OF_INSIGHT, range: SCREENER_RANGE },
    ItemSpec { key: &DISORGANIZED_SPEECH, range: SCREENER_RANGE },
    ItemSpec { key: &PARANOIA, range: SCREENER_RANGE },
    ItemSpec { key: &PRESSURED_SPEECH, range: SCREENER_RANGE },
    ItemSpec { key: &EMOTIONAL_LABILITY, range: SCREENER_RANGE },
    ItemSpec { key: &GRANDIOSITY, range: SCREENER_RANGE },
    ItemSpec { key: &VIOLENCE_TO_OTHERS, range: SCREENER_RANGE },
    ItemSpec { key: &INTIMIDATION, range: SCREENER_RANGE },
    ItemSpec { key: &VIOLENT_IDEATION, range: SCREENER_RANGE },
    ItemSpec { key: &SELF_INJURY_ATTEMPT, range: SCREENER_RANGE },
    ItemSpec { key: &SUICIDE_PLAN, range: SCREENER_RANGE },
    ItemSpec { key: &SELF_HARM_IDEATION, range: SCREENER_RANGE },
    ItemSpec { key: &OTHERS_CONCERNED, range: SCREENER_RANGE },
    ItemSpec { key: &WEAPON_HISTORY, range: PRESENCE_RANGE },
    ItemSpec { key: &INAPPROPRIATE_BEHAVIOUR, range: SCREENER_RANGE },
    ItemSpec { key: &VERBAL_ABUSE, range: SCREENER_RANGE },
    ItemSpec { key: &HYPERAROUSAL, range: SCREENER_RANGE },
];

static POPULATABLE: [&str; 10] = [
    fields::MENTAL_HEALTH_COMPLEXITY,
    fields::BEHAVIOURAL_COMPLEXITY,
    fields::SELF_HARM_RISK,
    fields::VIOLENCE_RISK,
    fields::DISORDERED_THOUGHT_SCORE,
    fields::RISK_OF_HARM_SCORE,
    fields::REQUIRES_PSYCHIATRIC_CONSULT,
    fields::REQUIRES_CRISIS_INTERVENTION,
    fields::REQUIRES_BEHAVIOURAL_SUPPORT,
    fields::AGGRESSION_FLAG,
];

/// Everything the screener derives, in one place for logging and triage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmhsRiskSummary {
    pub disordered_thought_score: u8,
    pub risk_of_harm_score: u8,
    pub self_harm_risk: u8,
    pub violence_risk: u8,
    pub mental_health_complexity: u8,
    pub behavioural_complexity: u8,
    pub requires_psychiatric_consult: bool,
    pub requires_crisis_intervention: bool,
    pub requires_behavioural_support: bool,
}

/// The screener supplement.
pub struct BmhsSupplement;

impl BmhsSupplement {
    pub fn assessment_type(&self) -> AssessmentType {
        AssessmentType::MentalHealthScreener
    }

    /// Fields the supplement can write, for completeness scoring.
    pub fn populatable_fields(&self) -> &'static [&'static str] {
        &POPULATABLE
    }

    pub fn item_specs(&self) -> &'static [ItemSpec] {
        &ITEM_SPECS
    }

    pub fn validate_items(&self, assessment: &RawAssessment) -> Vec<ItemWarning> {
        items::validate(assessment.items(), &ITEM_SPECS)
    }

    /// Score the screener. Unrecorded items contribute 0, so an empty
    /// payload yields an all-clear summary rather than an error.
    pub fn score(&self, assessment: &RawAssessment) -> BmhsRiskSummary {
        let items = assessment.items();
        let val = |key: &ItemKey| items::int_item(items, key).unwrap_or(0).clamp(0, 2);

        let disordered_thought: i64 = SECTION_B.iter().map(|key| val(*key)).sum();
        let disordered_thought = scales::DISORDERED_THOUGHT.clamp(disordered_thought);

        let command = val(&COMMAND_HALLUCINATIONS);
        let attempt = val(&SELF_INJURY_ATTEMPT);
        let plan = val(&SUICIDE_PLAN);
        let ideation = val(&SELF_HARM_IDEATION);
        let concerned = val(&OTHERS_CONCERNED);
        let violence = val(&VIOLENCE_TO_OTHERS);
        let intimidation = val(&INTIMIDATION);
        let violent_ideation = val(&VIOLENT_IDEATION);
        let weapon = val(&WEAPON_HISTORY);

        let self_harm_risk = if attempt > 0 || (plan > 0 && command > 0) {
            3
        } else if plan > 0 || (ideation > 0 && (concerned > 0 || command > 0)) {
            2
        } else if ideation > 0 || concerned > 0 {
            1
        } else {
            0
        };

        let violence_risk = if violence >= 2 {
            3
        } else if violence >= 1 || (intimidation > 0 && (weapon > 0 || command > 0)) {
            2
        } else if violent_ideation > 0 || intimidation > 0 {
            1
        } else {
            0
        };

        let self_harm_points =
            [attempt, plan, ideation, concerned].iter().filter(|v| **v > 0).count() as i64;
        let risk_of_harm = scales::RISK_OF_HARM.clamp(
            violence + intimidation + violent_ideation + self_harm_points + i64::from(weapon > 0),
        );

        let mental_health_complexity = scales::MENTAL_HEALTH.clamp(i64::from(
            2 * u8::from(command > 0)
                + u8::from(val(&HALLUCINATIONS) > 0)
                + u8::from(val(&DELUSIONS) > 0)
                + u8::from(val(&LOSS_OF_INSIGHT) > 0)
                + u8::from(val(&ABNORMAL_THOUGHT) > 0),
        ));
        let behavioural_complexity = scales::BEHAVIOURAL.clamp(i64::from(
            violence_risk
                + u8::from(val(&INAPPROPRIATE_BEHAVIOUR) > 0)
                + u8::from(val(&VERBAL_ABUSE) > 0)
                + u8::from(val(&HYPERAROUSAL) > 0),
        ));

        let requires_psychiatric_consult = command > 0
            || self_harm_risk >= 2
            || disordered_thought >= 8
            || (val(&LOSS_OF_INSIGHT) > 0 && disordered_thought >= 4);
        let requires_crisis_intervention = self_harm_risk >= 2 || violence_risk >= 2;
        let requires_behavioural_support = behavioural_complexity >= 2;

        BmhsRiskSummary {
            disordered_thought_score: disordered_thought,
            risk_of_harm_score: risk_of_harm,
            self_harm_risk,
            violence_risk,
            mental_health_complexity,
            behavioural_complexity,
            requires_psychiatric_consult,
            requires_crisis_intervention,
            requires_behavioural_support,
        }
    }

    /// The screener's contribution to a profile. Only cognitive-axis
    /// fields are ever touched.
    pub fn map_supplement(&self, assessment: &RawAssessment) -> ProfileFields {
        let summary = self.score(assessment);
        let items = assessment.items();

        let mut out = ProfileFields::default();
        out.cognitive.mental_health_complexity = Some(summary.mental_health_complexity);
        out.cognitive.behavioural_complexity = Some(summary.behavioural_complexity);
        out.cognitive.self_harm_risk = Some(summary.self_harm_risk);
        out.cognitive.violence_risk = Some(summary.violence_risk);
        out.cognitive.disordered_thought_score = Some(summary.disordered_thought_score);
        out.cognitive.risk_of_harm_score = Some(summary.risk_of_harm_score);
        out.cognitive.requires_psychiatric_consult = Some(summary.requires_psychiatric_consult);
        out.cognitive.requires_crisis_intervention = Some(summary.requires_crisis_intervention);
        out.cognitive.requires_behavioural_support = Some(summary.requires_behavioural_support);
        if items::present(items, &VIOLENCE_TO_OTHERS)
            || items::present(items, &INTIMIDATION)
            || items::present(items, &VIOLENT_IDEATION)
        {
            out.cognitive.aggression_flag = Some(true);
        }
        out
    }
}
