//! Rule-engine construction of priced scenario bundles.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use tendra_core::models::needs_profile::PatientNeedsProfile;
use tendra_core::models::profile_axes::ClinicalRisks;
use tendra_core::models::scenario_axis::ScenarioAxis;
use tendra_core::models::scenario_bundle::{BundleSource, ScenarioBundleDto};
use tendra_core::models::service_line::{
    DeliveryMode, PriorityLevel, ScenarioServiceLine, ServiceCategory,
};

use crate::catalog::ServiceTemplate;
use crate::narrative;
use crate::policy::ScenarioPolicy;
use crate::safety::{self, SafetyNeed};

/// Conditions that indicate speech-language involvement.
const SLP_CONDITIONS: &[&str] = &["stroke", "dysphagia", "aphasia", "parkinson"];

/// Conditions that indicate dietitian involvement.
const NUTRITION_CONDITIONS: &[&str] = &["diabetes", "malnutrition", "weight_loss", "dysphagia"];

/// Build one priced bundle for a profile along a primary axis.
///
/// Pure apart from the generated bundle id: the same profile, axes, catalog,
/// policy, and clock produce identical content.
pub fn generate_bundle(
    profile: &PatientNeedsProfile,
    primary_axis: ScenarioAxis,
    secondary_axes: &[ScenarioAxis],
    catalog: &[ServiceTemplate],
    policy: &ScenarioPolicy,
    now: jiff::Timestamp,
) -> ScenarioBundleDto {
    let selected = select_templates(profile, primary_axis, secondary_axes, catalog);
    debug!(
        axis = primary_axis.label(),
        templates = selected.len(),
        "template selection complete"
    );

    let mut lines: Vec<ScenarioServiceLine> = selected
        .iter()
        .map(|template| shape_line(template, primary_axis, secondary_axes))
        .collect();

    let needs = safety::derive_safety_needs(profile);
    let mut meets_safety_requirements = true;
    let mut safety_warnings = Vec::new();
    for need in &needs {
        if !ensure_coverage(&mut lines, need, catalog, primary_axis, secondary_axes) {
            meets_safety_requirements = false;
            safety_warnings.push(format!(
                "{}, but no catalog template covers it",
                need.description
            ));
        }
    }
    let safety_flags: Vec<String> = needs.iter().map(|need| need.id.to_string()).collect();
    if !meets_safety_requirements {
        warn!(flags = ?safety_flags, "bundle cannot cover every safety need");
    }

    let total_weekly_visits: f64 = lines.iter().map(ScenarioServiceLine::weekly_visits).sum();
    let total_weekly_hours: f64 = lines.iter().map(ScenarioServiceLine::weekly_hours).sum();
    let weekly_estimated_cost: f64 = lines
        .iter()
        .map(ScenarioServiceLine::effective_weekly_cost)
        .sum();
    let (in_person_pct, virtual_pct) = delivery_shares(&lines, total_weekly_visits);
    let discipline_count = lines
        .iter()
        .map(|line| line.discipline.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let cap_utilization_pct = policy.cap_utilization_pct(weekly_estimated_cost);
    let cost_cap_status = policy.cap_status(cap_utilization_pct);

    let bundle = ScenarioBundleDto {
        id: Uuid::new_v4(),
        patient_id: profile.patient_id,
        primary_axis,
        secondary_axes: secondary_axes.to_vec(),
        title: narrative::bundle_title(primary_axis),
        description: narrative::bundle_description(primary_axis, profile),
        icon: primary_axis.icon().to_string(),
        service_lines: lines,
        weekly_estimated_cost,
        reference_cap: policy.reference_weekly_cap,
        cap_utilization_pct,
        cost_cap_status,
        total_weekly_hours,
        total_weekly_visits,
        in_person_pct,
        virtual_pct,
        discipline_count,
        tradeoff_narrative: narrative::tradeoff_narrative(
            primary_axis,
            cost_cap_status,
            total_weekly_hours,
        ),
        meets_safety_requirements,
        safety_flags,
        safety_warnings,
        source: BundleSource::RuleEngine,
        confidence_level: profile.confidence_level,
        ai_explanation: None,
        generated_at: now,
    };

    info!(
        bundle_id = %bundle.id,
        axis = primary_axis.label(),
        service_lines = bundle.service_lines.len(),
        weekly_cost = bundle.weekly_estimated_cost,
        cost_cap_status = ?bundle.cost_cap_status,
        meets_safety = bundle.meets_safety_requirements,
        "scenario bundle generated"
    );

    bundle
}

/// Relevance selection shaped by the active axes.
///
/// The cost-conscious trim runs before the axis pulls, so a pull always
/// survives even when the pulled template is optional priority. Safety
/// forcing happens later and is never subject to shaping.
fn select_templates<'a>(
    profile: &PatientNeedsProfile,
    primary_axis: ScenarioAxis,
    secondary_axes: &[ScenarioAxis],
    catalog: &'a [ServiceTemplate],
) -> Vec<&'a ServiceTemplate> {
    let active = |axis| axis_active(axis, primary_axis, secondary_axes);

    let mut selected: Vec<&ServiceTemplate> = catalog
        .iter()
        .filter(|template| category_relevant(profile, template.category))
        .collect();

    if selected.is_empty() {
        // A minimal profile still gets a workable home-support base.
        selected = catalog
            .iter()
            .filter(|template| {
                matches!(
                    template.category,
                    ServiceCategory::PersonalSupport | ServiceCategory::Homemaking
                )
            })
            .collect();
    }

    if active(ScenarioAxis::CostConscious) {
        selected.retain(|template| template.priority != PriorityLevel::Optional);
    }

    if active(ScenarioAxis::RecoveryFocused) {
        pull_category(&mut selected, catalog, ServiceCategory::Physiotherapy);
        pull_category(&mut selected, catalog, ServiceCategory::OccupationalTherapy);
    }
    if active(ScenarioAxis::TechnologyEnabled)
        && profile.technology.telemonitoring_suitable != Some(false)
    {
        pull_category(&mut selected, catalog, ServiceCategory::Telemonitoring);
    }
    if active(ScenarioAxis::CaregiverRelief) {
        pull_category(&mut selected, catalog, ServiceCategory::Respite);
    }
    if active(ScenarioAxis::SafetyFocused) {
        for template in catalog.iter().filter(|template| template.is_safety_critical) {
            pull_template(&mut selected, template);
        }
    }

    selected
}

/// Whether a service category belongs in this profile's bundles at all.
/// Axis shaping and safety forcing both build on top of this base set.
fn category_relevant(profile: &PatientNeedsProfile, category: ServiceCategory) -> bool {
    let functional = &profile.functional;
    let cognitive = &profile.cognitive;
    let clinical = &profile.clinical;
    let treatment = &profile.treatment;
    let support = &profile.support;
    let scores = &profile.algorithm_scores;

    match category {
        ServiceCategory::Nursing => {
            !treatment.extensive_service_flags.is_empty()
                || clinical.health_instability_score.unwrap_or(0) >= 2
                || clinical.skin_integrity_score.unwrap_or(0) >= 2
                || clinical.polypharmacy_flag == Some(true)
                || treatment.recent_hospital_admission == Some(true)
        }
        ServiceCategory::PersonalSupport => {
            functional.adl_support_level.unwrap_or(0) >= 2
                || functional.iadl_support_level.unwrap_or(0) >= 3
                || scores.personal_support_score.unwrap_or(0) >= 3
        }
        ServiceCategory::Physiotherapy => {
            clinical.falls_risk_score.unwrap_or(0) >= 2
                || functional.mobility_complexity.unwrap_or(0) >= 2
                || treatment.rehabilitation_potential == Some(true)
        }
        ServiceCategory::OccupationalTherapy => {
            functional.adl_support_level.unwrap_or(0) >= 3
                || clinical.falls_risk_score.unwrap_or(0) >= 2
                || !profile.environment.home_environment_tags.is_empty()
        }
        ServiceCategory::SpeechLanguageTherapy => has_condition(clinical, SLP_CONDITIONS),
        ServiceCategory::SocialWork => {
            support.caregiver_stress == Some(true)
                || scores.distressed_mood_score.unwrap_or(0) >= 3
                || (support.lives_alone == Some(true)
                    && cognitive.mental_health_complexity.unwrap_or(0) >= 1)
        }
        ServiceCategory::MentalHealth => {
            cognitive.mental_health_complexity.unwrap_or(0) >= 2
                || cognitive.self_harm_risk.unwrap_or(0) >= 1
                || cognitive.violence_risk.unwrap_or(0) >= 1
                || cognitive.requires_psychiatric_consult == Some(true)
                || cognitive.behavioural_complexity.unwrap_or(0) >= 3
        }
        ServiceCategory::Respite => {
            support.caregiver_stress == Some(true)
                || (support.caregiver_available == Some(true)
                    && functional.adl_support_level.unwrap_or(0) >= 4)
                || cognitive.wandering_flag == Some(true)
        }
        ServiceCategory::Homemaking => {
            functional.iadl_support_level.unwrap_or(0) >= 2 || support.lives_alone == Some(true)
        }
        ServiceCategory::NutritionSupport => {
            has_condition(clinical, NUTRITION_CONDITIONS)
                || treatment
                    .extensive_service_flags
                    .iter()
                    .any(|flag| flag == "tube_feeding")
        }
        ServiceCategory::Telemonitoring => {
            profile.technology.telemonitoring_suitable == Some(true)
                && (clinical.health_instability_score.unwrap_or(0) >= 2
                    || scores.chess_ca.unwrap_or(0) >= 2
                    || treatment.recent_hospital_admission == Some(true)
                    || treatment.recent_ed_visit == Some(true))
        }
    }
}

/// Instantiate a template with axis-driven delivery adjustments applied.
fn shape_line(
    template: &ServiceTemplate,
    primary_axis: ScenarioAxis,
    secondary_axes: &[ScenarioAxis],
) -> ScenarioServiceLine {
    let mut line = template.instantiate();
    if axis_active(ScenarioAxis::TechnologyEnabled, primary_axis, secondary_axes)
        && line.delivery_mode == Some(DeliveryMode::Hybrid)
    {
        line.delivery_mode = Some(DeliveryMode::Virtual);
    }
    line
}

/// Make sure one line covers the need, forcing a template in if shaping
/// dropped every candidate. Returns false when the catalog has no cover.
fn ensure_coverage(
    lines: &mut Vec<ScenarioServiceLine>,
    need: &SafetyNeed,
    catalog: &[ServiceTemplate],
    primary_axis: ScenarioAxis,
    secondary_axes: &[ScenarioAxis],
) -> bool {
    if let Some(line) = lines
        .iter_mut()
        .find(|line| need.covering_categories.contains(&line.category))
    {
        line.is_safety_critical = true;
        return true;
    }
    if let Some(template) = catalog
        .iter()
        .find(|template| need.covering_categories.contains(&template.category))
    {
        let mut line = shape_line(template, primary_axis, secondary_axes);
        line.is_safety_critical = true;
        lines.push(line);
        return true;
    }
    false
}

fn axis_active(axis: ScenarioAxis, primary: ScenarioAxis, secondary: &[ScenarioAxis]) -> bool {
    primary == axis || secondary.contains(&axis)
}

fn pull_category<'a>(
    selected: &mut Vec<&'a ServiceTemplate>,
    catalog: &'a [ServiceTemplate],
    category: ServiceCategory,
) {
    for template in catalog.iter().filter(|template| template.category == category) {
        pull_template(selected, template);
    }
}

fn pull_template<'a>(selected: &mut Vec<&'a ServiceTemplate>, template: &'a ServiceTemplate) {
    let already_in = selected
        .iter()
        .any(|existing| existing.category == template.category && existing.name == template.name);
    if !already_in {
        selected.push(template);
    }
}

fn has_condition(clinical: &ClinicalRisks, needles: &[&str]) -> bool {
    clinical.active_conditions.iter().any(|condition| {
        let normalized = condition.to_lowercase().replace(' ', "_");
        needles.iter().any(|needle| normalized.contains(needle))
    })
}

/// Visit-weighted delivery shares as percentages.
fn delivery_shares(lines: &[ScenarioServiceLine], total_visits: f64) -> (f64, f64) {
    if total_visits <= 0.0 {
        return (0.0, 0.0);
    }
    let mut in_person = 0.0;
    let mut remote = 0.0;
    for line in lines {
        let visits = line.weekly_visits();
        let (in_person_fraction, virtual_fraction) = line.delivery_split();
        in_person += visits * in_person_fraction;
        remote += visits * virtual_fraction;
    }
    (
        in_person / total_visits * 100.0,
        remote / total_visits * 100.0,
    )
}
