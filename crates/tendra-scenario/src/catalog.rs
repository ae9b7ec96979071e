//! Service-line templates the generator instantiates.
//!
//! A catalog is plain data. The built-in one carries a single realistic
//! template per service category; deployments with a regional price file
//! pass their own vector instead.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tendra_core::models::service_line::{
    DeliveryMode, FrequencyPeriod, PriorityLevel, ScenarioServiceLine, ServiceCategory,
};

/// A candidate service line before axis shaping and safety checks.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceTemplate {
    pub category: ServiceCategory,
    pub name: String,
    pub frequency_count: u32,
    pub frequency_period: FrequencyPeriod,
    pub duration_minutes: u32,
    pub discipline: String,
    pub cost_per_visit: f64,
    pub priority: PriorityLevel,
    pub delivery_mode: DeliveryMode,
    /// Safety-oriented templates are all pulled in by the safety axis.
    pub is_safety_critical: bool,
    pub rationale: String,
}

impl ServiceTemplate {
    /// Turn the template into a concrete service line.
    pub fn instantiate(&self) -> ScenarioServiceLine {
        ScenarioServiceLine {
            category: self.category,
            name: self.name.clone(),
            frequency_count: self.frequency_count,
            frequency_period: self.frequency_period,
            duration_minutes: self.duration_minutes,
            discipline: self.discipline.clone(),
            cost_per_visit: Some(self.cost_per_visit),
            weekly_cost: None,
            priority: Some(self.priority),
            is_safety_critical: self.is_safety_critical,
            clinical_rationale: Some(self.rationale.clone()),
            delivery_mode: Some(self.delivery_mode),
        }
    }
}

/// The built-in catalog: one template per service category.
pub fn default_catalog() -> Vec<ServiceTemplate> {
    use DeliveryMode::{Automated, Hybrid, InPerson, Virtual};
    use FrequencyPeriod::{Day, Month, Week};
    use PriorityLevel::{Core, Optional, Recommended};
    use ServiceCategory as Cat;

    vec![
        template(
            Cat::Nursing,
            "Community nursing visit",
            2,
            Week,
            45,
            110.0,
            Core,
            InPerson,
            true,
            "Skilled nursing for clinical monitoring, wounds, and medication management",
        ),
        template(
            Cat::PersonalSupport,
            "Personal support worker visits",
            7,
            Week,
            60,
            55.0,
            Core,
            InPerson,
            true,
            "Hands-on help with daily activities and in-home supervision",
        ),
        template(
            Cat::Physiotherapy,
            "In-home physiotherapy",
            2,
            Week,
            45,
            120.0,
            Recommended,
            InPerson,
            true,
            "Strength, balance, and falls-prevention program",
        ),
        template(
            Cat::OccupationalTherapy,
            "Occupational therapy home program",
            1,
            Week,
            60,
            125.0,
            Recommended,
            InPerson,
            false,
            "Home safety review and adaptive-equipment training",
        ),
        template(
            Cat::SpeechLanguageTherapy,
            "Speech-language therapy",
            1,
            Week,
            45,
            130.0,
            Optional,
            Hybrid,
            false,
            "Swallowing and communication therapy",
        ),
        template(
            Cat::SocialWork,
            "Social work counselling",
            1,
            Week,
            60,
            105.0,
            Optional,
            Hybrid,
            false,
            "Counselling, benefits navigation, and caregiver planning",
        ),
        template(
            Cat::MentalHealth,
            "Community mental health nursing",
            2,
            Week,
            60,
            115.0,
            Recommended,
            InPerson,
            true,
            "Psychiatric monitoring and crisis follow-up",
        ),
        template(
            Cat::Respite,
            "In-home respite block",
            1,
            Week,
            180,
            160.0,
            Optional,
            InPerson,
            false,
            "Extended relief shift so the family caregiver can step away",
        ),
        template(
            Cat::Homemaking,
            "Homemaking and errands",
            2,
            Week,
            90,
            48.0,
            Optional,
            InPerson,
            false,
            "Light housekeeping, laundry, and meal preparation",
        ),
        template(
            Cat::NutritionSupport,
            "Dietitian consultation",
            2,
            Month,
            45,
            95.0,
            Optional,
            Virtual,
            false,
            "Nutrition review for weight change or therapeutic diets",
        ),
        template(
            Cat::Telemonitoring,
            "Remote vitals monitoring",
            1,
            Day,
            10,
            6.0,
            Optional,
            Automated,
            false,
            "Daily automated vitals check with nurse escalation",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn template(
    category: ServiceCategory,
    name: &str,
    frequency_count: u32,
    frequency_period: FrequencyPeriod,
    duration_minutes: u32,
    cost_per_visit: f64,
    priority: PriorityLevel,
    delivery_mode: DeliveryMode,
    is_safety_critical: bool,
    rationale: &str,
) -> ServiceTemplate {
    ServiceTemplate {
        category,
        name: name.to_string(),
        frequency_count,
        frequency_period,
        duration_minutes,
        discipline: category.default_discipline().to_string(),
        cost_per_visit,
        priority,
        delivery_mode,
        is_safety_critical,
        rationale: rationale.to_string(),
    }
}
