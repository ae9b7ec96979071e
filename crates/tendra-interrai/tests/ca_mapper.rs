use serde_json::json;
use tendra_core::models::assessment::{AssessmentType, RawAssessment};
use tendra_core::models::profile_fields::fields;
use tendra_interrai::AssessmentMapper;
use tendra_interrai::mappers::ca::CaMapper;

fn ca(raw_items: serde_json::Value) -> RawAssessment {
    serde_json::from_value(json!({
        "patient_id": "7c1f26b3-1e0a-4d85-bb6e-55e1a3a0c7d9",
        "assessment_type": "contact_assessment",
        "assessment_date": "2026-01-12",
        "raw_items": raw_items,
        "classification": null,
    }))
    .unwrap()
}

#[test]
fn declares_the_screening_contract() {
    assert_eq!(CaMapper.assessment_type(), AssessmentType::ContactAssessment);
    assert_eq!(CaMapper.confidence_weight(), 0.7);
    assert!(!CaMapper.supports_rug_classification());
    assert!(CaMapper.populatable_fields().contains(&fields::CHESS_CA));
    assert!(!CaMapper.populatable_fields().contains(&fields::RUG_GROUP));
}

#[test]
fn full_adl_cluster_scales_to_the_maximum() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_bathing": 4,
        "ca_personal_hygiene": 4,
        "ca_dressing_lower": 4,
        "ca_locomotion": 4,
        "ca_eating": 4,
    })));
    assert_eq!(mapped.functional.adl_support_level, Some(6));
}

#[test]
fn partial_adl_cluster_treats_missing_items_as_zero() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({"ca_bathing": 3})));
    assert_eq!(mapped.functional.adl_support_level, Some(1));
}

#[test]
fn unrecorded_clusters_stay_unset() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({})));
    assert_eq!(mapped.functional.adl_support_level, None);
    assert_eq!(mapped.functional.iadl_support_level, None);
    assert_eq!(mapped.functional.mobility_complexity, None);
    assert_eq!(mapped.cognitive.cognitive_complexity, None);
    assert_eq!(mapped.algorithm_scores.chess_ca, None);
}

#[test]
fn iadl_cluster_halves_the_sum() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_meal_prep": 4,
        "ca_housework": 4,
        "ca_medication_mgmt": 4,
    })));
    assert_eq!(mapped.functional.iadl_support_level, Some(6));

    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "meal_preparation": 2,
        "ordinary_housework": 3,
    })));
    assert_eq!(mapped.functional.iadl_support_level, Some(2));
}

#[test]
fn mobility_combines_locomotion_and_stairs() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_locomotion": 4,
        "ca_stairs": 4,
    })));
    assert_eq!(mapped.functional.mobility_complexity, Some(6));

    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_locomotion": 1,
        "ca_stairs": 1,
    })));
    assert_eq!(mapped.functional.mobility_complexity, Some(2));
}

#[test]
fn cognition_doubles_the_memory_indicator() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_daily_decision": 2,
        "ca_memory_problem": 1,
    })));
    assert_eq!(mapped.cognitive.cognitive_complexity, Some(4));

    let mapped = CaMapper.map_to_profile_fields(&ca(json!({"memory_problem": 1})));
    assert_eq!(mapped.cognitive.cognitive_complexity, Some(2));

    let mapped = CaMapper.map_to_profile_fields(&ca(json!({"daily_decision_making": 3})));
    assert_eq!(mapped.cognitive.cognitive_complexity, Some(3));
}

#[test]
fn algorithm_scores_read_through_aliases() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "sri": true,
        "aua": 5,
        "sua": 2,
        "rehab_index": 4,
        "psa": 3,
        "dmi": 6,
        "ca_pain_scale": 2,
        "chess": 3,
    })));

    assert_eq!(mapped.algorithm_scores.self_reliance_index, Some(true));
    assert_eq!(mapped.algorithm_scores.assessment_urgency, Some(5));
    assert_eq!(mapped.algorithm_scores.service_urgency, Some(2));
    assert_eq!(mapped.algorithm_scores.rehabilitation_score, Some(4));
    assert_eq!(mapped.algorithm_scores.personal_support_score, Some(3));
    assert_eq!(mapped.algorithm_scores.distressed_mood_score, Some(6));
    assert_eq!(mapped.algorithm_scores.pain_scale, Some(2));
    assert_eq!(mapped.algorithm_scores.chess_ca, Some(3));
}

#[test]
fn urgency_scores_clamp_to_their_floors_and_ceilings() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "assessment_urgency": 9,
        "service_urgency": 0,
    })));
    assert_eq!(mapped.algorithm_scores.assessment_urgency, Some(6));
    assert_eq!(mapped.algorithm_scores.service_urgency, Some(1));
}

#[test]
fn screener_never_touches_clinical_or_classification_axes() {
    let mapped = CaMapper.map_to_profile_fields(&ca(json!({
        "ca_bathing": 4,
        "chess": 5,
    })));
    assert_eq!(mapped.classification.rug_group, None);
    assert_eq!(mapped.clinical.health_instability_score, None);
    assert_eq!(mapped.cognitive.behavioural_complexity, None);
}
