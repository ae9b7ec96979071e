use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Weeks per month used when normalizing monthly frequencies.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Broad service families a care plan draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ServiceCategory {
    Nursing,
    PersonalSupport,
    Physiotherapy,
    OccupationalTherapy,
    SpeechLanguageTherapy,
    SocialWork,
    MentalHealth,
    Respite,
    Homemaking,
    NutritionSupport,
    Telemonitoring,
}

impl ServiceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Nursing => "Nursing",
            ServiceCategory::PersonalSupport => "Personal support",
            ServiceCategory::Physiotherapy => "Physiotherapy",
            ServiceCategory::OccupationalTherapy => "Occupational therapy",
            ServiceCategory::SpeechLanguageTherapy => "Speech-language therapy",
            ServiceCategory::SocialWork => "Social work",
            ServiceCategory::MentalHealth => "Mental health",
            ServiceCategory::Respite => "Respite",
            ServiceCategory::Homemaking => "Homemaking",
            ServiceCategory::NutritionSupport => "Nutrition support",
            ServiceCategory::Telemonitoring => "Telemonitoring",
        }
    }

    /// The discipline code that usually delivers this category.
    pub fn default_discipline(&self) -> &'static str {
        match self {
            ServiceCategory::Nursing => "RN",
            ServiceCategory::PersonalSupport => "PSW",
            ServiceCategory::Physiotherapy => "PT",
            ServiceCategory::OccupationalTherapy => "OT",
            ServiceCategory::SpeechLanguageTherapy => "SLP",
            ServiceCategory::SocialWork => "SW",
            ServiceCategory::MentalHealth => "MHN",
            ServiceCategory::Respite => "PSW",
            ServiceCategory::Homemaking => "HMK",
            ServiceCategory::NutritionSupport => "RD",
            ServiceCategory::Telemonitoring => "RPM",
        }
    }
}

/// How often a service recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FrequencyPeriod {
    Day,
    Week,
    Month,
    /// One-time service; excluded from all weekly roll-ups.
    Episode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PriorityLevel {
    Core,
    Recommended,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeliveryMode {
    InPerson,
    Virtual,
    Hybrid,
    Automated,
}

/// One distinct service inside a scenario bundle.
///
/// Weekly visit and hour figures are always derived from the stored
/// frequency, never stored themselves — regenerating a line cannot drift
/// from its own roll-up.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioServiceLine {
    pub category: ServiceCategory,
    pub name: String,
    pub frequency_count: u32,
    pub frequency_period: FrequencyPeriod,
    pub duration_minutes: u32,
    pub discipline: String,
    pub cost_per_visit: Option<f64>,
    pub weekly_cost: Option<f64>,
    pub priority: Option<PriorityLevel>,
    #[serde(default)]
    pub is_safety_critical: bool,
    pub clinical_rationale: Option<String>,
    pub delivery_mode: Option<DeliveryMode>,
}

impl ScenarioServiceLine {
    /// Visits per week implied by the frequency. Episodic services are
    /// one-time and contribute nothing weekly.
    pub fn weekly_visits(&self) -> f64 {
        let count = f64::from(self.frequency_count);
        match self.frequency_period {
            FrequencyPeriod::Day => count * 7.0,
            FrequencyPeriod::Week => count,
            FrequencyPeriod::Month => count / WEEKS_PER_MONTH,
            FrequencyPeriod::Episode => 0.0,
        }
    }

    pub fn weekly_hours(&self) -> f64 {
        self.weekly_visits() * f64::from(self.duration_minutes) / 60.0
    }

    /// Weekly cost: the explicit figure when present, else per-visit cost
    /// times weekly visits, else zero.
    pub fn effective_weekly_cost(&self) -> f64 {
        if let Some(weekly) = self.weekly_cost {
            return weekly;
        }
        match self.cost_per_visit {
            Some(per_visit) => per_visit * self.weekly_visits(),
            None => 0.0,
        }
    }

    /// Core lines anchor safety validation: explicitly core priority, or
    /// any line flagged safety-critical.
    pub fn is_core(&self) -> bool {
        self.priority == Some(PriorityLevel::Core) || self.is_safety_critical
    }

    /// (in-person, virtual) fraction of this line's visit share. A missing
    /// mode counts as in-person; hybrid splits evenly; automated delivery
    /// is remote by nature.
    pub fn delivery_split(&self) -> (f64, f64) {
        match self.delivery_mode.unwrap_or(DeliveryMode::InPerson) {
            DeliveryMode::InPerson => (1.0, 0.0),
            DeliveryMode::Virtual => (0.0, 1.0),
            DeliveryMode::Hybrid => (0.5, 0.5),
            DeliveryMode::Automated => (0.0, 1.0),
        }
    }
}
