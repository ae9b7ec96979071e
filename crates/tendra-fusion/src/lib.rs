//! tendra-fusion
//!
//! Confidence-weighted fusion of assessment sources into one
//! `PatientNeedsProfile`. Sources are merged by precedence (Home Care over
//! Contact Assessment over referral notes), the mental-health screener
//! supplements the cognitive axis, and classification falls back from RUG
//! to the needs-cluster decision list. Fusion never fails: with nothing to
//! work from it emits the minimal profile.

pub mod referral;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use tendra_core::models::assessment::{AssessmentType, RawAssessment, ReferralData};
use tendra_core::models::needs_profile::{ConfidenceLevel, PatientNeedsProfile};
use tendra_core::models::profile_axes::{CognitiveBehavioural, SourceFlags};
use tendra_core::models::profile_fields::ProfileFields;
use tendra_interrai::items::ItemWarning;
use tendra_interrai::mappers::bmhs::BmhsSupplement;
use tendra_interrai::{cluster, primary_mappers};

/// Everything known about a patient at fusion time. Any subset may be
/// present, including none of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentInputs {
    pub hc: Option<RawAssessment>,
    pub ca: Option<RawAssessment>,
    pub bmhs: Option<RawAssessment>,
    pub referral: Option<ReferralData>,
}

impl AssessmentInputs {
    /// Route a batch of fetched records into their slots. A later record of
    /// the same type replaces an earlier one, so callers can pass records
    /// oldest-first and keep the most recent of each.
    pub fn from_records(
        records: impl IntoIterator<Item = RawAssessment>,
        referral: Option<ReferralData>,
    ) -> Self {
        let mut inputs = Self { referral, ..Self::default() };
        for record in records {
            match record.assessment_type {
                AssessmentType::HomeCare => inputs.hc = Some(record),
                AssessmentType::ContactAssessment => inputs.ca = Some(record),
                AssessmentType::MentalHealthScreener => inputs.bmhs = Some(record),
            }
        }
        inputs
    }

    pub fn assessment_for(&self, assessment_type: AssessmentType) -> Option<&RawAssessment> {
        match assessment_type {
            AssessmentType::HomeCare => self.hc.as_ref(),
            AssessmentType::ContactAssessment => self.ca.as_ref(),
            AssessmentType::MentalHealthScreener => self.bmhs.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hc.is_none() && self.ca.is_none() && self.bmhs.is_none() && self.referral.is_none()
    }
}

/// Fuse all available sources into a needs profile.
///
/// Precedence: the first mapper in registry order that ran becomes the
/// primary source and lower-precedence sources only fill fields it left
/// unset. The screener's risk fields are the one exception and always
/// land. Completeness is the set-fraction of the union of the invoked
/// mappers' populatable fields.
pub fn build_profile(
    patient_id: Uuid,
    inputs: &AssessmentInputs,
    now: jiff::Timestamp,
) -> PatientNeedsProfile {
    if inputs.is_empty() {
        info!(patient_id = %patient_id, "no usable sources, emitting minimal profile");
        return PatientNeedsProfile::minimal(patient_id, now);
    }

    info!(
        patient_id = %patient_id,
        has_hc = inputs.hc.is_some(),
        has_ca = inputs.ca.is_some(),
        has_bmhs = inputs.bmhs.is_some(),
        has_referral = inputs.referral.is_some(),
        "fusing needs profile",
    );

    let mut merged = ProfileFields::default();
    let mut sources = SourceFlags::default();
    let mut populatable: Vec<&'static str> = Vec::new();

    for mapper in primary_mappers() {
        let Some(assessment) = inputs.assessment_for(mapper.assessment_type()) else {
            continue;
        };
        log_item_warnings(mapper.assessment_type(), &mapper.validate_items(assessment));

        let mapped = mapper.map_to_profile_fields(assessment);
        if sources.primary_assessment_type.is_none() {
            sources.primary_assessment_type = Some(mapper.assessment_type());
            sources.primary_assessment_date = assessment.assessment_date;
            merged = mapped;
        } else {
            merged.merge_missing_from(&mapped);
        }
        match mapper.assessment_type() {
            AssessmentType::HomeCare => sources.has_full_hc_assessment = true,
            AssessmentType::ContactAssessment => sources.has_ca_assessment = true,
            AssessmentType::MentalHealthScreener => {}
        }
        extend_union(&mut populatable, mapper.populatable_fields());
        debug!(
            assessment_type = mapper.assessment_type().code(),
            weight = mapper.confidence_weight(),
            "mapped assessment",
        );
    }

    if let Some(screener) = &inputs.bmhs {
        let supplement = BmhsSupplement;
        log_item_warnings(supplement.assessment_type(), &supplement.validate_items(screener));

        let mapped = supplement.map_supplement(screener);
        overlay_screener_risk(&mut merged.cognitive, &mapped.cognitive);
        sources.has_bmhs_assessment = true;
        extend_union(&mut populatable, supplement.populatable_fields());

        let summary = supplement.score(screener);
        if summary.requires_crisis_intervention {
            warn!(
                patient_id = %patient_id,
                self_harm_risk = summary.self_harm_risk,
                violence_risk = summary.violence_risk,
                "screener indicates crisis-level risk",
            );
        }
    }

    if let Some(referral) = &inputs.referral {
        merged.merge_missing_from(&referral::referral_fields(referral));
        sources.has_referral_data = true;
    }

    if merged.classification.rug_group.is_none() {
        let needs_cluster = cluster::classify(&merged);
        merged.classification.needs_cluster = Some(needs_cluster);
        debug!(cluster = needs_cluster.label(), "no RUG group, assigned needs cluster");
    }

    let confidence_level = if sources.has_full_hc_assessment {
        ConfidenceLevel::High
    } else if sources.has_ca_assessment {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };
    let data_completeness_score = if populatable.is_empty() {
        0.0
    } else {
        let set = populatable.iter().filter(|field| merged.is_set(field)).count();
        set as f64 / populatable.len() as f64
    };

    let profile = PatientNeedsProfile::from_fields(
        patient_id,
        now,
        confidence_level,
        data_completeness_score,
        sources,
        merged,
    );
    info!(
        patient_id = %patient_id,
        confidence = ?profile.confidence_level,
        data_completeness = profile.data_completeness_score,
        classification = ?profile.primary_classification(),
        "needs profile built",
    );
    profile
}

/// Screener values win for every field the screener populates; it has no
/// opinion elsewhere.
fn overlay_screener_risk(target: &mut CognitiveBehavioural, screener: &CognitiveBehavioural) {
    target.mental_health_complexity =
        screener.mental_health_complexity.or(target.mental_health_complexity);
    target.behavioural_complexity =
        screener.behavioural_complexity.or(target.behavioural_complexity);
    target.self_harm_risk = screener.self_harm_risk.or(target.self_harm_risk);
    target.violence_risk = screener.violence_risk.or(target.violence_risk);
    target.disordered_thought_score =
        screener.disordered_thought_score.or(target.disordered_thought_score);
    target.risk_of_harm_score = screener.risk_of_harm_score.or(target.risk_of_harm_score);
    target.requires_psychiatric_consult =
        screener.requires_psychiatric_consult.or(target.requires_psychiatric_consult);
    target.requires_crisis_intervention =
        screener.requires_crisis_intervention.or(target.requires_crisis_intervention);
    target.requires_behavioural_support =
        screener.requires_behavioural_support.or(target.requires_behavioural_support);
    target.aggression_flag = screener.aggression_flag.or(target.aggression_flag);
}

fn extend_union(union: &mut Vec<&'static str>, fields: &'static [&'static str]) {
    for field in fields {
        if !union.contains(field) {
            union.push(field);
        }
    }
}

fn log_item_warnings(assessment_type: AssessmentType, warnings: &[ItemWarning]) {
    for warning in warnings {
        warn!(
            assessment_type = assessment_type.code(),
            item = %warning.item,
            message = %warning.message,
            "assessment item outside documented range",
        );
    }
}
