//! Safety requirements a bundle must cover regardless of axis.

use tendra_core::models::needs_profile::PatientNeedsProfile;
use tendra_core::models::service_line::ServiceCategory;

/// Risk tag the HC mapper records for a fall inside the lookback window.
const RECENT_FALL_TAG: &str = "recent_fall";

/// One non-negotiable coverage requirement derived from the profile.
#[derive(Debug, Clone)]
pub struct SafetyNeed {
    /// Stable identifier surfaced in `safety_flags`.
    pub id: &'static str,
    /// Human-readable sentence used when the need cannot be covered.
    pub description: &'static str,
    /// Categories that satisfy the need. Any one line is enough.
    pub covering_categories: &'static [ServiceCategory],
}

/// Derive the safety needs this profile raises, in a stable order.
pub fn derive_safety_needs(profile: &PatientNeedsProfile) -> Vec<SafetyNeed> {
    let cognitive = &profile.cognitive;
    let clinical = &profile.clinical;
    let treatment = &profile.treatment;

    let mut needs = Vec::new();

    let recent_fall = clinical
        .clinical_risk_tags
        .iter()
        .any(|tag| tag == RECENT_FALL_TAG);
    if recent_fall || clinical.falls_risk_score.unwrap_or(0) >= 3 {
        needs.push(SafetyNeed {
            id: "falls_prevention",
            description: "Recent falls or high falls risk call for a falls-prevention service",
            covering_categories: &[
                ServiceCategory::Physiotherapy,
                ServiceCategory::OccupationalTherapy,
            ],
        });
    }

    if cognitive.self_harm_risk.unwrap_or(0) >= 2
        || cognitive.violence_risk.unwrap_or(0) >= 2
        || cognitive.requires_crisis_intervention == Some(true)
    {
        needs.push(SafetyNeed {
            id: "crisis_mental_health",
            description: "Active self-harm or violence risk calls for a mental health service",
            covering_categories: &[ServiceCategory::MentalHealth],
        });
    }

    let wound_flag = treatment
        .extensive_service_flags
        .iter()
        .any(|flag| flag == "wound_care");
    if clinical.skin_integrity_score.unwrap_or(0) >= 3 || wound_flag {
        needs.push(SafetyNeed {
            id: "complex_wound_care",
            description: "Complex wound care calls for a nursing service",
            covering_categories: &[ServiceCategory::Nursing],
        });
    }

    let iv_flag = treatment
        .extensive_service_flags
        .iter()
        .any(|flag| flag == "iv_therapy");
    if clinical.polypharmacy_flag == Some(true) || iv_flag {
        needs.push(SafetyNeed {
            id: "medication_oversight",
            description: "A high-risk medication regimen calls for nursing oversight",
            covering_categories: &[ServiceCategory::Nursing],
        });
    }

    if cognitive.wandering_flag == Some(true) {
        needs.push(SafetyNeed {
            id: "supervision",
            description: "Wandering behaviour calls for in-home supervision",
            covering_categories: &[ServiceCategory::PersonalSupport, ServiceCategory::Respite],
        });
    }

    needs
}
