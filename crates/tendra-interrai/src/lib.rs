//! tendra-interrai
//!
//! InterRAI instrument mappers. Pure data transformation — no I/O.
//! Each mapper turns one raw assessment record into a partial profile
//! field set with a declared confidence weight; the mental-health
//! screener is a supplement with its own narrower role and deliberately
//! does not implement the primary-mapper contract.

pub mod cluster;
pub mod error;
pub mod items;
pub mod mappers;
pub mod rug;

use tendra_core::models::assessment::{AssessmentType, RawAssessment};
use tendra_core::models::profile_fields::ProfileFields;

use error::MapperError;
use items::{ItemSpec, ItemWarning};

/// Contract implemented by each primary assessment mapper.
pub trait AssessmentMapper: Send + Sync {
    /// The instrument this mapper understands.
    fn assessment_type(&self) -> AssessmentType;

    /// Relative reliability of this source during fusion (1.0 = gold
    /// standard).
    fn confidence_weight(&self) -> f64;

    /// Whether this source can yield a RUG-III/HC classification.
    fn supports_rug_classification(&self) -> bool;

    /// Canonical names of every profile field this mapper can populate.
    /// Fusion scores data completeness against this list.
    fn populatable_fields(&self) -> &'static [&'static str];

    /// Map a raw record into a partial profile. Missing or malformed items
    /// degrade to unset or the scale minimum; this never fails.
    fn map_to_profile_fields(&self, assessment: &RawAssessment) -> ProfileFields;

    /// The documented ranges of this mapper's raw items.
    fn item_specs(&self) -> &'static [ItemSpec];

    /// Advisory check of raw items against their documented ranges. Purely
    /// diagnostic — mapping clamps regardless.
    fn validate_items(&self, assessment: &RawAssessment) -> Vec<ItemWarning> {
        items::validate(assessment.items(), self.item_specs())
    }
}

/// All primary mappers, in fusion precedence order.
pub fn primary_mappers() -> Vec<Box<dyn AssessmentMapper>> {
    vec![
        Box::new(mappers::hc::HcMapper),
        Box::new(mappers::ca::CaMapper),
    ]
}

/// Look up the primary mapper for an assessment type. The mental-health
/// screener has none — route those records to
/// [`mappers::bmhs::BmhsSupplement`] instead.
pub fn mapper_for(assessment_type: AssessmentType) -> Option<Box<dyn AssessmentMapper>> {
    primary_mappers()
        .into_iter()
        .find(|m| m.assessment_type() == assessment_type)
}

/// Like [`mapper_for`], erroring on types with no primary mapper.
pub fn require_mapper(
    assessment_type: AssessmentType,
) -> Result<Box<dyn AssessmentMapper>, MapperError> {
    mapper_for(assessment_type)
        .ok_or_else(|| MapperError::NoPrimaryMapper(assessment_type.code().to_string()))
}
