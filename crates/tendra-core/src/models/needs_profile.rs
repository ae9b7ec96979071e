use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;
use uuid::Uuid;

use super::cap_input::CapInput;
use super::profile_axes::{
    CaAlgorithmScores, Classification, ClinicalRisks, CognitiveBehavioural, EnvironmentContext,
    FunctionalNeeds, NeedsCluster, SourceFlags, SupportContext, TechnologyContext,
    TreatmentContext,
};
use super::profile_fields::ProfileFields;

/// Version stamp written to every generated profile.
pub const PROFILE_VERSION: &str = "2.1";

/// How much trust a consumer should place in a profile or bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// The fused, de-duplicated view of everything known about a patient's care
/// needs at one point in time.
///
/// A profile is a value object: fusion constructs it once per generation run
/// and nothing mutates it afterwards. `with_triggered_caps` returns a new
/// value rather than editing in place.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientNeedsProfile {
    pub patient_id: Uuid,
    pub profile_generated_at: jiff::Timestamp,
    pub profile_version: String,
    pub confidence_level: ConfidenceLevel,
    /// Fraction of the invoked mappers' populatable fields that ended up
    /// set in the merged result, in [0, 1].
    pub data_completeness_score: f64,
    pub sources: SourceFlags,
    pub classification: Classification,
    pub functional: FunctionalNeeds,
    pub cognitive: CognitiveBehavioural,
    pub clinical: ClinicalRisks,
    pub treatment: TreatmentContext,
    pub support: SupportContext,
    pub technology: TechnologyContext,
    pub environment: EnvironmentContext,
    pub algorithm_scores: CaAlgorithmScores,
    /// CAP name → trigger level, attached by the external CAP evaluator.
    pub triggered_caps: Option<BTreeMap<String, u8>>,
}

/// The authoritative classification path for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "path", rename_all = "snake_case")]
#[ts(export)]
pub enum PrimaryClassification {
    Rug {
        group: String,
        category: Option<String>,
        numeric_rank: Option<u8>,
    },
    Cluster {
        cluster: NeedsCluster,
    },
}

impl PatientNeedsProfile {
    /// The terminal fallback when no assessment of any kind exists.
    ///
    /// Bundle generation still runs against this; it just produces the most
    /// generic scenarios at low confidence.
    pub fn minimal(patient_id: Uuid, now: jiff::Timestamp) -> Self {
        Self {
            patient_id,
            profile_generated_at: now,
            profile_version: PROFILE_VERSION.to_string(),
            confidence_level: ConfidenceLevel::Low,
            data_completeness_score: 0.0,
            sources: SourceFlags::default(),
            classification: Classification {
                needs_cluster: Some(NeedsCluster::General),
                ..Classification::default()
            },
            functional: FunctionalNeeds::default(),
            cognitive: CognitiveBehavioural::default(),
            clinical: ClinicalRisks::default(),
            treatment: TreatmentContext::default(),
            support: SupportContext::default(),
            technology: TechnologyContext::default(),
            environment: EnvironmentContext::default(),
            algorithm_scores: CaAlgorithmScores::default(),
            triggered_caps: None,
        }
    }

    /// Assemble a profile from merged mapper output plus fusion metadata.
    pub fn from_fields(
        patient_id: Uuid,
        now: jiff::Timestamp,
        confidence_level: ConfidenceLevel,
        data_completeness_score: f64,
        sources: SourceFlags,
        merged: ProfileFields,
    ) -> Self {
        Self {
            patient_id,
            profile_generated_at: now,
            profile_version: PROFILE_VERSION.to_string(),
            confidence_level,
            data_completeness_score: data_completeness_score.clamp(0.0, 1.0),
            sources,
            classification: merged.classification,
            functional: merged.functional,
            cognitive: merged.cognitive,
            clinical: merged.clinical,
            treatment: merged.treatment,
            support: merged.support,
            technology: merged.technology,
            environment: merged.environment,
            algorithm_scores: merged.algorithm_scores,
            triggered_caps: None,
        }
    }

    /// True when at least one usable source contributed. Bundle generation
    /// runs either way; this only tells the caller which tier it is in.
    pub fn is_sufficient_for_bundling(&self) -> bool {
        self.sources.has_full_hc_assessment
            || self.sources.has_ca_assessment
            || self.sources.has_referral_data
    }

    /// RUG when available, else the needs cluster. A profile with neither
    /// (which fusion never produces) reads as the general cluster.
    pub fn primary_classification(&self) -> PrimaryClassification {
        if let Some(group) = &self.classification.rug_group {
            return PrimaryClassification::Rug {
                group: group.clone(),
                category: self.classification.rug_category.clone(),
                numeric_rank: self.classification.rug_numeric_rank,
            };
        }
        PrimaryClassification::Cluster {
            cluster: self
                .classification
                .needs_cluster
                .unwrap_or(NeedsCluster::General),
        }
    }

    /// Attach the CAP evaluator's output.
    pub fn with_triggered_caps(mut self, caps: BTreeMap<String, u8>) -> Self {
        self.triggered_caps = Some(caps);
        self
    }

    /// The fixed-shape payload the CAP evaluator consumes.
    pub fn to_cap_input(&self) -> CapInput {
        CapInput::from_profile(self)
    }

    /// Full internal view, identifiers included. Never send this across the
    /// explanation-model boundary.
    pub fn to_full_json(&self) -> serde_json::Value {
        let mut view = self.to_deidentified_json();
        if let Some(obj) = view.as_object_mut() {
            obj.insert("patient_id".to_string(), json!(self.patient_id));
        }
        view
    }

    /// De-identified view: everything clinical, nothing identifying.
    pub fn to_deidentified_json(&self) -> serde_json::Value {
        json!({
            "data_sources": self.sources,
            "case_classification": {
                "rug_group": self.classification.rug_group,
                "rug_category": self.classification.rug_category,
                "rug_numeric_rank": self.classification.rug_numeric_rank,
                "needs_cluster": self.classification.needs_cluster,
                "primary": self.primary_classification(),
            },
            "functional_needs": self.functional,
            "cognitive_behavioural": self.cognitive,
            "clinical_risks": self.clinical,
            "treatment_context": self.treatment,
            "support_context": self.support,
            "technology": self.technology,
            "environment": self.environment,
            "confidence": {
                "confidence_level": self.confidence_level,
                "data_completeness_score": self.data_completeness_score,
                "profile_version": self.profile_version,
                "profile_generated_at": self.profile_generated_at.to_string(),
            },
            "algorithm_scores": self.algorithm_scores,
            "triggered_caps": self.triggered_caps,
        })
    }
}
