use serde_json::json;
use tendra_core::models::assessment::RawAssessment;
use tendra_interrai::mappers::bmhs::BmhsSupplement;

fn screener(raw_items: serde_json::Value) -> RawAssessment {
    serde_json::from_value(json!({
        "patient_id": "9d54a1c7-3bb2-47f5-8e0a-c2d9b4f6e813",
        "assessment_type": "mental_health_screener",
        "assessment_date": "2026-02-20",
        "raw_items": raw_items,
        "classification": null,
    }))
    .unwrap()
}

#[test]
fn empty_payload_scores_all_clear() {
    let summary = BmhsSupplement.score(&screener(json!({})));

    assert_eq!(summary.disordered_thought_score, 0);
    assert_eq!(summary.risk_of_harm_score, 0);
    assert_eq!(summary.self_harm_risk, 0);
    assert_eq!(summary.violence_risk, 0);
    assert_eq!(summary.mental_health_complexity, 0);
    assert_eq!(summary.behavioural_complexity, 0);
    assert!(!summary.requires_psychiatric_consult);
    assert!(!summary.requires_crisis_intervention);
    assert!(!summary.requires_behavioural_support);
}

#[test]
fn disordered_thought_sums_section_b_raw_values() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_delusions": 2,
        "bmhs_hallucinations": 1,
        "bmhs_paranoia": 2,
    })));
    assert_eq!(summary.disordered_thought_score, 5);
}

#[test]
fn disordered_thought_caps_at_twenty() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_delusions": 2,
        "bmhs_hallucinations": 2,
        "bmhs_command_hallucinations": 2,
        "bmhs_abnormal_thought": 2,
        "bmhs_loss_of_insight": 2,
        "bmhs_disorganized_speech": 2,
        "bmhs_paranoia": 2,
        "bmhs_pressured_speech": 2,
        "bmhs_emotional_lability": 2,
        "bmhs_grandiosity": 2,
    })));
    assert_eq!(summary.disordered_thought_score, 20);
}

#[test]
fn recent_attempt_is_critical_self_harm() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_self_injury_attempt": 1})));
    assert_eq!(summary.self_harm_risk, 3);
    assert!(summary.requires_crisis_intervention);
    assert!(summary.requires_psychiatric_consult);
}

#[test]
fn plan_with_command_hallucinations_is_critical() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_suicide_plan": 1,
        "bmhs_command_hallucinations": 2,
    })));
    assert_eq!(summary.self_harm_risk, 3);
}

#[test]
fn plan_alone_is_tier_two() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_suicide_plan": 1})));
    assert_eq!(summary.self_harm_risk, 2);
    assert!(summary.requires_crisis_intervention);
}

#[test]
fn ideation_with_others_concerned_is_tier_two() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_self_harm_ideation": 1,
        "bmhs_others_concerned": 1,
    })));
    assert_eq!(summary.self_harm_risk, 2);
}

#[test]
fn ideation_alone_is_tier_one() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_self_harm_ideation": 1})));
    assert_eq!(summary.self_harm_risk, 1);
    assert!(!summary.requires_crisis_intervention);
    assert!(!summary.requires_psychiatric_consult);
}

#[test]
fn recent_violence_is_tier_three() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_violence_to_others": 2})));
    assert_eq!(summary.violence_risk, 3);
    assert!(summary.requires_crisis_intervention);
}

#[test]
fn violence_history_is_tier_two() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_violence_to_others": 1})));
    assert_eq!(summary.violence_risk, 2);
}

#[test]
fn intimidation_with_weapon_history_is_tier_two() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_intimidation": 1,
        "bmhs_weapon_history": 1,
    })));
    assert_eq!(summary.violence_risk, 2);
}

#[test]
fn intimidation_alone_is_tier_one() {
    let summary = BmhsSupplement.score(&screener(json!({"bmhs_intimidation": 1})));
    assert_eq!(summary.violence_risk, 1);
}

#[test]
fn risk_of_harm_mixes_raw_sums_and_presence_points() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_violence_to_others": 2,
        "bmhs_intimidation": 1,
        "bmhs_violent_ideation": 1,
        "bmhs_self_injury_attempt": 1,
        "bmhs_suicide_plan": 2,
        "bmhs_self_harm_ideation": 1,
        "bmhs_others_concerned": 1,
        "bmhs_weapon_history": 1,
    })));
    assert_eq!(summary.risk_of_harm_score, 9);
}

#[test]
fn risk_of_harm_reaches_its_ceiling() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_violence_to_others": 2,
        "bmhs_intimidation": 2,
        "bmhs_violent_ideation": 2,
        "bmhs_self_injury_attempt": 2,
        "bmhs_suicide_plan": 2,
        "bmhs_self_harm_ideation": 2,
        "bmhs_others_concerned": 2,
        "bmhs_weapon_history": 1,
    })));
    assert_eq!(summary.risk_of_harm_score, 11);
}

#[test]
fn mental_health_complexity_weights_command_hallucinations() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_command_hallucinations": 1,
        "bmhs_hallucinations": 1,
    })));
    assert_eq!(summary.mental_health_complexity, 3);
    assert!(summary.requires_psychiatric_consult);
}

#[test]
fn mental_health_complexity_caps_at_five() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_command_hallucinations": 2,
        "bmhs_hallucinations": 2,
        "bmhs_delusions": 2,
        "bmhs_loss_of_insight": 2,
        "bmhs_abnormal_thought": 2,
    })));
    assert_eq!(summary.mental_health_complexity, 5);
}

#[test]
fn behavioural_complexity_builds_on_the_violence_tier() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_violence_to_others": 1,
        "bmhs_verbal_abuse": 1,
        "bmhs_hyperarousal": 1,
    })));
    assert_eq!(summary.behavioural_complexity, 4);
    assert!(summary.requires_behavioural_support);
}

#[test]
fn behavioural_support_triggers_without_violence() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_inappropriate_behaviour": 1,
        "bmhs_verbal_abuse": 2,
    })));
    assert_eq!(summary.behavioural_complexity, 2);
    assert!(summary.requires_behavioural_support);
    assert_eq!(summary.violence_risk, 0);
}

#[test]
fn heavy_disordered_thought_requires_consult() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_paranoia": 2,
        "bmhs_disorganized_speech": 2,
        "bmhs_pressured_speech": 2,
        "bmhs_emotional_lability": 2,
    })));
    assert_eq!(summary.disordered_thought_score, 8);
    assert!(summary.requires_psychiatric_consult);
}

#[test]
fn moderate_disordered_thought_with_lost_insight_requires_consult() {
    let summary = BmhsSupplement.score(&screener(json!({
        "bmhs_loss_of_insight": 2,
        "bmhs_delusions": 2,
    })));
    assert_eq!(summary.disordered_thought_score, 4);
    assert!(summary.requires_psychiatric_consult);
}

#[test]
fn map_supplement_writes_only_the_cognitive_axis() {
    let mapped = BmhsSupplement.map_supplement(&screener(json!({
        "bmhs_suicide_plan": 1,
        "bmhs_hallucinations": 1,
    })));

    assert_eq!(mapped.cognitive.self_harm_risk, Some(2));
    assert_eq!(mapped.cognitive.mental_health_complexity, Some(1));
    assert_eq!(mapped.cognitive.requires_crisis_intervention, Some(true));
    assert_eq!(mapped.cognitive.aggression_flag, None);
    assert_eq!(mapped.functional.adl_support_level, None);
    assert_eq!(mapped.classification.rug_group, None);
    assert!(mapped.clinical.clinical_risk_tags.is_empty());
}

#[test]
fn violence_items_set_the_aggression_flag() {
    let mapped = BmhsSupplement.map_supplement(&screener(json!({"bmhs_intimidation": 1})));
    assert_eq!(mapped.cognitive.aggression_flag, Some(true));
}

#[test]
fn alias_spellings_resolve() {
    let summary = BmhsSupplement.score(&screener(json!({
        "suicidal_ideation": 1,
        "violence_to_others": 2,
    })));
    assert_eq!(summary.self_harm_risk, 1);
    assert_eq!(summary.violence_risk, 3);
}
