use uuid::Uuid;

use tendra_core::models::needs_profile::PatientNeedsProfile;
use tendra_core::models::service_line::ServiceCategory;
use tendra_scenario::safety::derive_safety_needs;

fn profile() -> PatientNeedsProfile {
    PatientNeedsProfile::minimal(Uuid::new_v4(), "2026-04-01T09:30:00Z".parse().unwrap())
}

fn ids(profile: &PatientNeedsProfile) -> Vec<&'static str> {
    derive_safety_needs(profile).iter().map(|need| need.id).collect()
}

#[test]
fn unremarkable_profile_raises_no_needs() {
    assert!(derive_safety_needs(&profile()).is_empty());
}

#[test]
fn recent_fall_tag_raises_falls_prevention() {
    let mut needs = profile();
    needs.clinical.clinical_risk_tags = vec!["recent_fall".to_string()];

    assert_eq!(ids(&needs), vec!["falls_prevention"]);
}

#[test]
fn high_falls_score_raises_falls_prevention() {
    let mut needs = profile();
    needs.clinical.falls_risk_score = Some(3);
    assert_eq!(ids(&needs), vec!["falls_prevention"]);

    needs.clinical.falls_risk_score = Some(2);
    assert!(ids(&needs).is_empty());
}

#[test]
fn falls_prevention_accepts_either_therapy() {
    let mut needs = profile();
    needs.clinical.falls_risk_score = Some(4);

    let derived = derive_safety_needs(&needs);
    assert_eq!(
        derived[0].covering_categories,
        &[
            ServiceCategory::Physiotherapy,
            ServiceCategory::OccupationalTherapy
        ]
    );
}

#[test]
fn self_harm_tier_two_raises_crisis_mental_health() {
    let mut needs = profile();
    needs.cognitive.self_harm_risk = Some(2);
    assert_eq!(ids(&needs), vec!["crisis_mental_health"]);

    needs.cognitive.self_harm_risk = Some(1);
    assert!(ids(&needs).is_empty());
}

#[test]
fn violence_tier_two_raises_crisis_mental_health() {
    let mut needs = profile();
    needs.cognitive.violence_risk = Some(2);

    assert_eq!(ids(&needs), vec!["crisis_mental_health"]);
}

#[test]
fn crisis_flag_raises_crisis_mental_health() {
    let mut needs = profile();
    needs.cognitive.requires_crisis_intervention = Some(true);

    assert_eq!(ids(&needs), vec!["crisis_mental_health"]);
}

#[test]
fn skin_breakdown_raises_wound_care() {
    let mut needs = profile();
    needs.clinical.skin_integrity_score = Some(3);

    assert_eq!(ids(&needs), vec!["complex_wound_care"]);
}

#[test]
fn wound_care_flag_raises_wound_care() {
    let mut needs = profile();
    needs.treatment.extensive_service_flags = vec!["wound_care".to_string()];

    assert_eq!(ids(&needs), vec!["complex_wound_care"]);
}

#[test]
fn polypharmacy_raises_medication_oversight() {
    let mut needs = profile();
    needs.clinical.polypharmacy_flag = Some(true);

    assert_eq!(ids(&needs), vec!["medication_oversight"]);
}

#[test]
fn iv_therapy_raises_medication_oversight() {
    let mut needs = profile();
    needs.treatment.extensive_service_flags = vec!["iv_therapy".to_string()];

    assert_eq!(ids(&needs), vec!["medication_oversight"]);
}

#[test]
fn wandering_raises_supervision() {
    let mut needs = profile();
    needs.cognitive.wandering_flag = Some(true);

    assert_eq!(ids(&needs), vec!["supervision"]);
}

#[test]
fn needs_come_out_in_a_stable_order() {
    let mut needs = profile();
    needs.clinical.clinical_risk_tags = vec!["recent_fall".to_string()];
    needs.cognitive.self_harm_risk = Some(3);
    needs.clinical.skin_integrity_score = Some(4);
    needs.clinical.polypharmacy_flag = Some(true);
    needs.cognitive.wandering_flag = Some(true);

    assert_eq!(
        ids(&needs),
        vec![
            "falls_prevention",
            "crisis_mental_health",
            "complex_wound_care",
            "medication_oversight",
            "supervision",
        ]
    );
}
