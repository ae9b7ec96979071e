//! Referral-note extraction.
//!
//! Referral and discharge notes carry a handful of coarse observations,
//! not scored items. They are mapped conservatively: concern flags become
//! low-moderate scores that inform service selection without tripping the
//! clinical rules of the needs-cluster list on their own.

use tendra_core::models::assessment::ReferralData;
use tendra_core::models::profile_fields::ProfileFields;

/// A referral's contribution to a profile. Applied last, so these values
/// only ever fill gaps the assessment sources left.
pub fn referral_fields(referral: &ReferralData) -> ProfileFields {
    let mut out = ProfileFields::default();

    out.support.lives_alone = referral.lives_alone;
    out.support.caregiver_available = referral.caregiver_available;
    out.clinical.active_conditions = referral.noted_conditions.clone();
    if referral.mobility_concern == Some(true) {
        out.functional.mobility_complexity = Some(2);
    }
    if referral.cognition_concern == Some(true) {
        out.cognitive.cognitive_complexity = Some(2);
    }

    out
}
