use serde::{Deserialize, Serialize};

use crate::nutrition::constants::*;

/// Biological sex used by the BMR equations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Activity level for TDEE, each mapped to a fixed multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// 1-3 days/week.
    Light,
    /// 3-5 days/week.
    #[default]
    Moderate,
    /// 6-7 days/week.
    Active,
    /// Hard training twice a day or a physical job.
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier (1.2 to 1.9).
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Active => ACTIVITY_ACTIVE,
            ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

/// Which BMR equation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    Mifflin,
    Harris,
}

impl BmrFormula {
    pub const ALL: [BmrFormula; 2] = [BmrFormula::Mifflin, BmrFormula::Harris];

    pub fn label(self) -> &'static str {
        match self {
            BmrFormula::Mifflin => "mifflin",
            BmrFormula::Harris => "harris",
        }
    }
}

/// Snapshot of the body measurements a profile is computed from.
///
/// Replaced wholesale on edit. Values are not range-checked; nonsensical
/// measurements yield nonsensical (but finite) targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMetrics {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub formula: BmrFormula,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            sex: Sex::default(),
            age: DEFAULT_AGE,
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
            activity: ActivityLevel::default(),
            formula: BmrFormula::default(),
        }
    }
}

labelled_enum!(Sex, "sex");
labelled_enum!(ActivityLevel, "activity level");
labelled_enum!(BmrFormula, "BMR formula");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_factors_span() {
        assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
        assert_eq!(ActivityLevel::VeryActive.factor(), 1.9);

        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.factor()).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "very-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!("harris".parse::<BmrFormula>().unwrap(), BmrFormula::Harris);
        assert!("sprinter".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let metrics: BodyMetrics = serde_json::from_str(r#"{"weight_kg": 82.5}"#).unwrap();
        assert_eq!(metrics.weight_kg, 82.5);
        assert_eq!(metrics.age, DEFAULT_AGE);
        assert_eq!(metrics.formula, BmrFormula::Mifflin);
    }
}
