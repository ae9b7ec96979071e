//! RUG-III/HC case-mix classification tables.
//!
//! The group taxonomy is fixed: seven categories identified by a two-letter
//! prefix, ordered within each category by a trailing digit. The case-mix
//! order below is the source of truth for the numeric rank (higher rank =
//! heavier care profile). A classification record attached to an assessment
//! wins; the fallback tree only runs when no record exists.

use tendra_core::models::assessment::RugClassification;

/// Case-mix groups from heaviest to lightest.
const CASE_MIX_ORDER: [&str; 24] = [
    "ES3", "ES2", "ES1", "CC3", "CC2", "CC1", "IB2", "IB1", "IA2", "IA1", "BB2", "BB1", "BA2",
    "BA1", "PE2", "PE1", "PD2", "PD1", "PC2", "PC1", "PB2", "PB1", "PA2", "PA1",
];

const CATEGORY_PREFIXES: [(&str, &str); 11] = [
    ("ES", "Extensive Services"),
    ("CC", "Clinically Complex"),
    ("IA", "Impaired Cognition"),
    ("IB", "Impaired Cognition"),
    ("BA", "Behaviour Problems"),
    ("BB", "Behaviour Problems"),
    ("PA", "Reduced Physical Function"),
    ("PB", "Reduced Physical Function"),
    ("PC", "Reduced Physical Function"),
    ("PD", "Reduced Physical Function"),
    ("PE", "Reduced Physical Function"),
];

/// Scale scores the fallback tree branches on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RugInputs {
    pub adl: u8,
    pub iadl: u8,
    pub cps: u8,
    pub chess: u8,
    pub behavioural: u8,
    pub extensive_services: bool,
}

/// Category label for a group's two-letter prefix, `Unknown` otherwise.
pub fn category_for_group(group: &str) -> &'static str {
    let prefix = group.get(..2).unwrap_or("");
    CATEGORY_PREFIXES
        .iter()
        .find(|(p, _)| prefix.eq_ignore_ascii_case(p))
        .map(|(_, category)| *category)
        .unwrap_or("Unknown")
}

/// Numeric case-mix rank for a group, higher = heavier. Groups outside the
/// fixed order get no rank.
pub fn numeric_rank(group: &str) -> Option<u8> {
    CASE_MIX_ORDER
        .iter()
        .position(|g| group.eq_ignore_ascii_case(g))
        .map(|idx| (CASE_MIX_ORDER.len() - idx) as u8)
}

/// Normalize a stored classification record, backfilling category and rank
/// from the tables when the record carries only the group code.
pub fn complete(mut record: RugClassification) -> RugClassification {
    record.rug_group = record.rug_group.trim().to_uppercase();
    if record.rug_category.is_none() {
        record.rug_category = Some(category_for_group(&record.rug_group).to_string());
    }
    if record.rug_numeric_rank.is_none() {
        record.rug_numeric_rank = numeric_rank(&record.rug_group);
    }
    record
}

/// Derive a classification from raw scale scores.
///
/// Categories are tried in the case-mix hierarchy order: extensive
/// services, clinically complex, impaired cognition, behaviour, reduced
/// physical function. ADL drives the within-category digit; IADL splits
/// the lowest tiers.
pub fn classify_fallback(inputs: &RugInputs) -> RugClassification {
    let group = fallback_group(inputs);
    RugClassification {
        rug_category: Some(category_for_group(&group).to_string()),
        rug_numeric_rank: numeric_rank(&group),
        rug_group: group,
    }
}

fn fallback_group(inputs: &RugInputs) -> String {
    if inputs.extensive_services {
        return tiered_group("ES", inputs.adl);
    }
    if inputs.chess >= 3 {
        return tiered_group("CC", inputs.adl);
    }
    if inputs.cps >= 3 {
        return split_group("IB", "IA", inputs.adl, inputs.iadl);
    }
    if inputs.behavioural >= 2 {
        return split_group("BB", "BA", inputs.adl, inputs.iadl);
    }
    physical_group(inputs.adl, inputs.iadl)
}

fn tiered_group(prefix: &str, adl: u8) -> String {
    let digit = if adl >= 5 {
        3
    } else if adl >= 3 {
        2
    } else {
        1
    };
    format!("{prefix}{digit}")
}

fn split_group(dependent: &str, independent: &str, adl: u8, iadl: u8) -> String {
    if adl >= 3 {
        format!("{dependent}2")
    } else if adl >= 1 {
        format!("{dependent}1")
    } else if iadl >= 3 {
        format!("{independent}2")
    } else {
        format!("{independent}1")
    }
}

fn physical_group(adl: u8, iadl: u8) -> String {
    let letter = match adl {
        0 | 1 => 'A',
        2 => 'B',
        3 => 'C',
        4 | 5 => 'D',
        _ => 'E',
    };
    let digit = if iadl >= 4 { 2 } else { 1 };
    format!("P{letter}{digit}")
}
