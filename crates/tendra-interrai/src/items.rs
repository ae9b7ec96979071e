//! Tolerant raw-item access.
//!
//! Assessment records accumulated several key spellings for the same item
//! over the years (normalized names, short codes, InterRAI scale codes).
//! Every known spelling is declared once on an [`ItemKey`] and all lookups
//! go through here, so alias knowledge stays data rather than scattered
//! fallback chains. Lookups never fail: wrong types coerce best-effort and
//! anything unusable reads as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use tendra_core::scales::ScaleRange;

/// A raw item with its canonical key and every historical alias.
#[derive(Debug, Clone, Copy)]
pub struct ItemKey {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl ItemKey {
    pub const fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }
}

/// An item paired with its documented range, for advisory validation.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    pub key: &'static ItemKey,
    pub range: ScaleRange,
}

/// A raw value that disagrees with its documented range or type.
/// Diagnostic only — mapping clamps or ignores the value either way.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemWarning {
    pub item: String,
    pub observed: Value,
    pub message: String,
}

/// The first raw value present under the canonical key or any alias.
pub fn raw_value<'a>(items: Option<&'a Map<String, Value>>, key: &ItemKey) -> Option<&'a Value> {
    let items = items?;
    if let Some(v) = items.get(key.canonical) {
        return Some(v);
    }
    key.aliases.iter().find_map(|alias| items.get(*alias))
}

/// Best-effort integer read: JSON numbers (floats truncate), numeric
/// strings, and booleans (as 0/1) all resolve; anything else is absent.
pub fn int_item(items: Option<&Map<String, Value>>, key: &ItemKey) -> Option<i64> {
    coerce_int(raw_value(items, key)?)
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Best-effort boolean read: booleans, numbers (non-zero = true), and the
/// usual string spellings.
pub fn bool_item(items: Option<&Map<String, Value>>, key: &ItemKey) -> Option<bool> {
    match raw_value(items, key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn str_item(items: Option<&Map<String, Value>>, key: &ItemKey) -> Option<String> {
    match raw_value(items, key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Read a list of strings; a single comma-separated string also resolves.
pub fn str_list_item(items: Option<&Map<String, Value>>, key: &ItemKey) -> Vec<String> {
    match raw_value(items, key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Integer read clamped into a documented range. Absent stays absent;
/// present-but-out-of-range degrades to the nearest bound.
pub fn scaled_item(
    items: Option<&Map<String, Value>>,
    key: &ItemKey,
    range: ScaleRange,
) -> Option<u8> {
    int_item(items, key).map(|v| range.clamp(v))
}

/// Whether an item is present with a positive value.
pub fn present(items: Option<&Map<String, Value>>, key: &ItemKey) -> bool {
    int_item(items, key).is_some_and(|v| v > 0)
}

/// Check every declared item against its documented range.
pub fn validate(items: Option<&Map<String, Value>>, specs: &[ItemSpec]) -> Vec<ItemWarning> {
    let mut warnings = Vec::new();
    for spec in specs {
        let Some(raw) = raw_value(items, spec.key) else {
            continue;
        };
        match coerce_int(raw) {
            Some(v) if spec.range.contains(v) => {}
            Some(v) => warnings.push(ItemWarning {
                item: spec.key.canonical.to_string(),
                observed: raw.clone(),
                message: format!(
                    "{}: value {} is outside range [{}, {}]",
                    spec.key.canonical, v, spec.range.min, spec.range.max,
                ),
            }),
            None => warnings.push(ItemWarning {
                item: spec.key.canonical.to_string(),
                observed: raw.clone(),
                message: format!("{}: value is not numeric", spec.key.canonical),
            }),
        }
    }
    warnings
}
