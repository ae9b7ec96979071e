//! Needs-cluster classification for records without a RUG result.
//!
//! An ordered decision list over the mapped profile scores. Rules are
//! evaluated top to bottom and the first match wins; the order encodes
//! clinical urgency, so it must not be rearranged.

use tendra_core::models::profile_axes::NeedsCluster;
use tendra_core::models::profile_fields::ProfileFields;

/// Classify a partially-mapped profile into a needs cluster.
///
/// Unset scores never trigger a rule, so a profile with no functional or
/// cognitive data lands in [`NeedsCluster::General`].
pub fn classify(fields: &ProfileFields) -> NeedsCluster {
    let adl = fields.functional.adl_support_level.unwrap_or(0);
    let cognitive = fields.cognitive.cognitive_complexity.unwrap_or(0);
    let behavioural = fields.cognitive.behavioural_complexity.unwrap_or(0);
    let instability = fields.clinical.health_instability_score.unwrap_or(0);

    if adl >= 4 && cognitive >= 3 {
        NeedsCluster::HighAdlCognitive
    } else if adl >= 4 {
        NeedsCluster::HighAdl
    } else if cognitive >= 3 {
        NeedsCluster::CognitiveComplex
    } else if behavioural >= 3 {
        NeedsCluster::MhComplex
    } else if instability >= 3 {
        NeedsCluster::MedicalComplex
    } else if adl >= 2 {
        NeedsCluster::ModerateAdl
    } else if adl >= 1 {
        NeedsCluster::LowAdl
    } else {
        NeedsCluster::General
    }
}
