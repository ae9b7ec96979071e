use uuid::Uuid;

use tendra_core::models::needs_profile::PatientNeedsProfile;
use tendra_core::models::scenario_axis::ScenarioAxis;
use tendra_core::models::scenario_bundle::CostCapStatus;
use tendra_scenario::catalog::default_catalog;
use tendra_scenario::generator::generate_bundle;
use tendra_scenario::narrative::{explanation_context, tradeoff_narrative};
use tendra_scenario::policy::ScenarioPolicy;

const PATIENT_ID: &str = "9c3f5a77-0db4-4f52-bd27-5a1d83a0c9be";

fn now() -> jiff::Timestamp {
    "2026-04-01T09:30:00Z".parse().unwrap()
}

fn profile() -> PatientNeedsProfile {
    PatientNeedsProfile::minimal(PATIENT_ID.parse::<Uuid>().unwrap(), now())
}

#[test]
fn title_icon_and_description_follow_the_axis() {
    let bundle = generate_bundle(
        &profile(),
        ScenarioAxis::MaintenanceFocused,
        &[],
        &default_catalog(),
        &ScenarioPolicy::default(),
        now(),
    );

    assert_eq!(bundle.title, "Maintenance focused care plan");
    assert_eq!(bundle.icon, "shield");
    assert!(bundle.description.contains("Steady support"));
}

#[test]
fn description_names_the_rug_group_when_present() {
    let mut needs = profile();
    needs.classification.rug_group = Some("CC1".to_string());
    needs.classification.rug_category = Some("Clinically Complex".to_string());

    let bundle = generate_bundle(
        &needs,
        ScenarioAxis::RecoveryFocused,
        &[],
        &default_catalog(),
        &ScenarioPolicy::default(),
        now(),
    );

    assert!(bundle.description.contains("RUG group CC1 (Clinically Complex)"));
}

#[test]
fn description_falls_back_to_the_needs_cluster() {
    let bundle = generate_bundle(
        &profile(),
        ScenarioAxis::RecoveryFocused,
        &[],
        &default_catalog(),
        &ScenarioPolicy::default(),
        now(),
    );

    assert!(bundle.description.contains("General home support"));
}

#[test]
fn tradeoff_reports_cost_position_and_hours() {
    let text = tradeoff_narrative(ScenarioAxis::CostConscious, CostCapStatus::OverCap, 12.25);

    assert!(text.contains("Trims optional services"));
    assert!(text.contains("exceeds the weekly funding cap"));
    assert!(text.contains("12.2 provider hours"));
}

#[test]
fn tradeoff_distinguishes_cap_statuses() {
    let within = tradeoff_narrative(ScenarioAxis::RecoveryFocused, CostCapStatus::WithinCap, 4.0);
    let near = tradeoff_narrative(ScenarioAxis::RecoveryFocused, CostCapStatus::NearCap, 4.0);

    assert!(within.contains("comfortably inside"));
    assert!(near.contains("little headroom"));
    assert_ne!(within, near);
}

#[test]
fn explanation_context_renders_both_views() {
    let needs = profile();
    let bundle = generate_bundle(
        &needs,
        ScenarioAxis::MaintenanceFocused,
        &[],
        &default_catalog(),
        &ScenarioPolicy::default(),
        now(),
    );

    let context = explanation_context(&needs, &bundle);

    assert!(context.starts_with("<needs_profile>"));
    assert!(context.ends_with("</scenario_bundle>"));
    assert!(context.contains("case_classification"));
    assert!(context.contains("weekly_estimated_cost"));
}

#[test]
fn explanation_context_never_carries_the_patient_identifier() {
    let needs = profile();
    let bundle = generate_bundle(
        &needs,
        ScenarioAxis::SafetyFocused,
        &[],
        &default_catalog(),
        &ScenarioPolicy::default(),
        now(),
    );

    let context = explanation_context(&needs, &bundle);

    assert!(!context.contains(PATIENT_ID));
    assert!(!context.contains("patient_id"));
    assert!(!context.contains(&bundle.id.to_string()));
}
