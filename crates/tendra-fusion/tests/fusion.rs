use serde_json::json;
use uuid::Uuid;

use tendra_core::models::assessment::{RawAssessment, ReferralData};
use tendra_core::models::needs_profile::{ConfidenceLevel, PrimaryClassification};
use tendra_core::models::profile_axes::NeedsCluster;
use tendra_fusion::{AssessmentInputs, build_profile};

fn record(assessment_type: &str, date: &str, raw_items: serde_json::Value) -> RawAssessment {
    serde_json::from_value(json!({
        "patient_id": "5b0c2f8e-99d1-4e6a-8a4d-7f3b921c6aa0",
        "assessment_type": assessment_type,
        "assessment_date": date,
        "raw_items": raw_items,
        "classification": null,
    }))
    .unwrap()
}

fn now() -> jiff::Timestamp {
    "2026-04-01T09:30:00Z".parse().unwrap()
}

#[test]
fn empty_inputs_produce_the_minimal_profile() {
    let profile = build_profile(Uuid::new_v4(), &AssessmentInputs::default(), now());

    assert_eq!(profile.confidence_level, ConfidenceLevel::Low);
    assert_eq!(profile.data_completeness_score, 0.0);
    assert!(!profile.is_sufficient_for_bundling());
    assert_eq!(profile.classification.needs_cluster, Some(NeedsCluster::General));
    assert!(!profile.sources.has_full_hc_assessment);
    assert!(!profile.sources.has_referral_data);
    assert_eq!(profile.profile_version, "2.1");
    assert_eq!(profile.profile_generated_at, now());
}

#[test]
fn home_care_outranks_contact_assessment() {
    let inputs = AssessmentInputs {
        hc: Some(record("home_care", "2026-03-10", json!({"adl_hierarchy": 4, "cps": 1}))),
        ca: Some(record(
            "contact_assessment",
            "2026-03-15",
            json!({
                "ca_bathing": 4,
                "ca_personal_hygiene": 4,
                "ca_dressing_lower": 4,
                "ca_locomotion": 4,
                "ca_eating": 4,
                "chess": 3,
            }),
        )),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    // The HC value wins even though the CA cluster maps to 6.
    assert_eq!(profile.functional.adl_support_level, Some(4));
    // Fields only the CA can supply still land.
    assert_eq!(profile.algorithm_scores.chess_ca, Some(3));
    assert_eq!(profile.confidence_level, ConfidenceLevel::High);
    assert!(profile.sources.has_full_hc_assessment);
    assert!(profile.sources.has_ca_assessment);
    assert_eq!(
        profile.sources.primary_assessment_date,
        Some("2026-03-10".parse().unwrap()),
    );
    // HC always produces a RUG path, so no cluster is assigned.
    assert!(profile.classification.rug_group.is_some());
    assert_eq!(profile.classification.needs_cluster, None);

    let cap = profile.to_cap_input();
    assert_eq!(cap.assessment_type.as_deref(), Some("hc"));
    assert_eq!(cap.adl_support_level, 4);
}

#[test]
fn contact_assessment_alone_is_medium_confidence_with_a_cluster() {
    let inputs = AssessmentInputs {
        ca: Some(record(
            "contact_assessment",
            "2026-03-18",
            json!({
                "ca_bathing": 4,
                "ca_personal_hygiene": 4,
                "ca_dressing_lower": 4,
                "ca_locomotion": 4,
                "ca_eating": 4,
            }),
        )),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    assert_eq!(profile.confidence_level, ConfidenceLevel::Medium);
    assert_eq!(profile.classification.rug_group, None);
    assert_eq!(profile.classification.needs_cluster, Some(NeedsCluster::HighAdl));
    match profile.primary_classification() {
        PrimaryClassification::Cluster { cluster } => assert_eq!(cluster, NeedsCluster::HighAdl),
        other => panic!("expected cluster classification, got {other:?}"),
    }
    assert!(profile.is_sufficient_for_bundling());
}

#[test]
fn screener_risk_fields_override_the_primary_source() {
    let inputs = AssessmentInputs {
        hc: Some(record("home_care", "2026-03-10", json!({"wandering": 1}))),
        bmhs: Some(record(
            "mental_health_screener",
            "2026-03-20",
            json!({"bmhs_violence_to_others": 2, "bmhs_verbal_abuse": 1}),
        )),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    // HC mapped a behaviour composite of 1; the screener's composite wins.
    assert_eq!(profile.cognitive.behavioural_complexity, Some(4));
    assert_eq!(profile.cognitive.violence_risk, Some(3));
    assert_eq!(profile.cognitive.aggression_flag, Some(true));
    assert_eq!(profile.cognitive.requires_crisis_intervention, Some(true));
    // Wandering still comes from the HC record.
    assert_eq!(profile.cognitive.wandering_flag, Some(true));
    assert_eq!(profile.confidence_level, ConfidenceLevel::High);
    assert!(profile.sources.has_bmhs_assessment);
}

#[test]
fn referral_data_fills_only_the_gaps() {
    let inputs = AssessmentInputs {
        hc: Some(record("home_care", "2026-03-10", json!({"lives_alone": false}))),
        referral: Some(ReferralData {
            lives_alone: Some(true),
            caregiver_available: Some(true),
            noted_conditions: vec!["chf".to_string()],
            ..ReferralData::default()
        }),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    assert_eq!(profile.support.lives_alone, Some(false));
    assert_eq!(profile.support.caregiver_available, Some(true));
    assert_eq!(profile.clinical.active_conditions, vec!["chf"]);
    assert!(profile.sources.has_referral_data);
}

#[test]
fn referral_only_profiles_stay_conservative() {
    let inputs = AssessmentInputs {
        referral: Some(ReferralData {
            lives_alone: Some(true),
            mobility_concern: Some(true),
            cognition_concern: Some(true),
            ..ReferralData::default()
        }),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    assert_eq!(profile.functional.mobility_complexity, Some(2));
    assert_eq!(profile.cognitive.cognitive_complexity, Some(2));
    // Concern flags alone never reach the clinical cluster rules.
    assert_eq!(profile.classification.needs_cluster, Some(NeedsCluster::General));
    assert_eq!(profile.confidence_level, ConfidenceLevel::Low);
    assert_eq!(profile.data_completeness_score, 0.0);
    assert!(profile.is_sufficient_for_bundling());
}

#[test]
fn complete_contact_assessment_scores_full_completeness() {
    let inputs = AssessmentInputs {
        ca: Some(record(
            "contact_assessment",
            "2026-03-18",
            json!({
                "ca_bathing": 2,
                "ca_personal_hygiene": 2,
                "ca_dressing_lower": 2,
                "ca_locomotion": 2,
                "ca_eating": 2,
                "ca_meal_prep": 2,
                "ca_housework": 2,
                "ca_medication_mgmt": 2,
                "ca_stairs": 1,
                "ca_daily_decision": 1,
                "ca_memory_problem": 0,
                "self_reliance_index": true,
                "assessment_urgency": 3,
                "service_urgency": 2,
                "rehabilitation_score": 3,
                "personal_support_score": 4,
                "distressed_mood_score": 2,
                "pain_scale": 1,
                "chess_ca": 1,
            }),
        )),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());
    assert_eq!(profile.data_completeness_score, 1.0);
}

#[test]
fn sparse_contact_assessment_scores_the_set_fraction() {
    let inputs = AssessmentInputs {
        ca: Some(record("contact_assessment", "2026-03-18", json!({"ca_bathing": 3}))),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());
    assert!((profile.data_completeness_score - 1.0 / 12.0).abs() < 1e-9);
}

#[test]
fn screener_alone_maps_risk_but_stays_insufficient() {
    let inputs = AssessmentInputs {
        bmhs: Some(record(
            "mental_health_screener",
            "2026-03-20",
            json!({"bmhs_suicide_plan": 1}),
        )),
        ..AssessmentInputs::default()
    };
    let profile = build_profile(Uuid::new_v4(), &inputs, now());

    assert_eq!(profile.cognitive.self_harm_risk, Some(2));
    assert_eq!(profile.cognitive.requires_crisis_intervention, Some(true));
    assert_eq!(profile.confidence_level, ConfidenceLevel::Low);
    assert!(!profile.is_sufficient_for_bundling());
    assert!(profile.sources.has_bmhs_assessment);
    // Nine of the screener's ten populatable fields land; the aggression
    // flag stays unset without a violence item.
    assert!((profile.data_completeness_score - 0.9).abs() < 1e-9);
}

#[test]
fn from_records_routes_by_type_and_keeps_the_latest() {
    let records = vec![
        record("home_care", "2026-01-05", json!({"adl_hierarchy": 1})),
        record("contact_assessment", "2026-02-11", json!({"ca_bathing": 2})),
        record("home_care", "2026-03-10", json!({"adl_hierarchy": 5})),
    ];
    let inputs = AssessmentInputs::from_records(records, None);

    assert!(inputs.ca.is_some());
    assert!(inputs.bmhs.is_none());
    assert!(inputs.referral.is_none());

    let profile = build_profile(Uuid::new_v4(), &inputs, now());
    assert_eq!(profile.functional.adl_support_level, Some(5));
}

#[test]
fn fusion_is_deterministic_for_the_same_inputs() {
    let inputs = AssessmentInputs {
        hc: Some(record("home_care", "2026-03-10", json!({"adl_hierarchy": 3, "cps": 2}))),
        ..AssessmentInputs::default()
    };
    let patient_id = Uuid::new_v4();
    let a = build_profile(patient_id, &inputs, now());
    let b = build_profile(patient_id, &inputs, now());
    assert_eq!(a.to_full_json(), b.to_full_json());
}
