use tendra_core::models::profile_axes::NeedsCluster;
use tendra_core::models::profile_fields::ProfileFields;
use tendra_interrai::cluster::classify;

fn fields(
    adl: Option<u8>,
    cognitive: Option<u8>,
    behavioural: Option<u8>,
    instability: Option<u8>,
) -> ProfileFields {
    let mut f = ProfileFields::default();
    f.functional.adl_support_level = adl;
    f.cognitive.cognitive_complexity = cognitive;
    f.cognitive.behavioural_complexity = behavioural;
    f.clinical.health_instability_score = instability;
    f
}

#[test]
fn combined_adl_and_cognitive_takes_the_first_rule() {
    let f = fields(Some(4), Some(3), Some(5), Some(5));
    assert_eq!(classify(&f), NeedsCluster::HighAdlCognitive);
}

#[test]
fn high_adl_without_cognitive_impairment() {
    let f = fields(Some(5), Some(2), None, None);
    assert_eq!(classify(&f), NeedsCluster::HighAdl);
}

#[test]
fn cognitive_impairment_without_high_adl() {
    let f = fields(Some(1), Some(4), None, None);
    assert_eq!(classify(&f), NeedsCluster::CognitiveComplex);
}

#[test]
fn behavioural_score_drives_mh_complex() {
    let f = fields(Some(0), Some(1), Some(3), None);
    assert_eq!(classify(&f), NeedsCluster::MhComplex);
}

#[test]
fn health_instability_drives_medical_complex() {
    let f = fields(None, None, Some(2), Some(4));
    assert_eq!(classify(&f), NeedsCluster::MedicalComplex);
}

#[test]
fn adl_tiers_below_the_clinical_rules() {
    assert_eq!(classify(&fields(Some(2), None, None, None)), NeedsCluster::ModerateAdl);
    assert_eq!(classify(&fields(Some(3), Some(2), Some(2), Some(2))), NeedsCluster::ModerateAdl);
    assert_eq!(classify(&fields(Some(1), None, None, None)), NeedsCluster::LowAdl);
}

#[test]
fn unset_scores_fall_through_to_general() {
    assert_eq!(classify(&ProfileFields::default()), NeedsCluster::General);
    assert_eq!(classify(&fields(Some(0), Some(0), Some(0), Some(0))), NeedsCluster::General);
}

#[test]
fn acuity_rank_orders_clusters_by_urgency() {
    let ordered = [
        NeedsCluster::General,
        NeedsCluster::LowAdl,
        NeedsCluster::ModerateAdl,
        NeedsCluster::MedicalComplex,
        NeedsCluster::MhComplex,
        NeedsCluster::CognitiveComplex,
        NeedsCluster::HighAdl,
        NeedsCluster::HighAdlCognitive,
    ];
    for pair in ordered.windows(2) {
        assert!(pair[0].acuity_rank() < pair[1].acuity_rank());
    }
}
