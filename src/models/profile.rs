use serde::{Deserialize, Serialize};

use crate::models::body::BodyMetrics;
use crate::nutrition::constants::{
    DEFAULT_FAT_PERCENT, DEFAULT_FAT_PER_KG, DEFAULT_PROTEIN_PER_KG,
};
use crate::nutrition::compute_targets;

/// Weight goal; decides which direction the calorie delta may move the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

/// How the fat allowance is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatMode {
    /// A fraction of the calorie target.
    #[default]
    Percent,
    /// Grams per kg of bodyweight.
    PerKg,
}

impl FatMode {
    pub const ALL: [FatMode; 2] = [FatMode::Percent, FatMode::PerKg];

    pub fn label(self) -> &'static str {
        match self {
            FatMode::Percent => "percent",
            FatMode::PerKg => "per_kg",
        }
    }
}

labelled_enum!(Goal, "goal");
labelled_enum!(FatMode, "fat mode");

/// Macro allocation preferences.
///
/// `fat_percent` is a fraction of calories (0.25 = 25%) and only applies in
/// [`FatMode::Percent`]; `fat_per_kg` only applies in [`FatMode::PerKg`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroPrefs {
    pub protein_per_kg: f64,
    pub fat_mode: FatMode,
    pub fat_percent: f64,
    pub fat_per_kg: f64,
}

impl Default for MacroPrefs {
    fn default() -> Self {
        Self {
            protein_per_kg: DEFAULT_PROTEIN_PER_KG,
            fat_mode: FatMode::default(),
            fat_percent: DEFAULT_FAT_PERCENT,
            fat_per_kg: DEFAULT_FAT_PER_KG,
        }
    }
}

/// Derived daily targets. Never edited directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Calorie target in kcal/day.
    pub calories: i32,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

/// A user's nutrition profile.
///
/// `targets` is always `compute_targets` of the other fields: every setter
/// recomputes it, and decoding rebuilds it from the decoded inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileRecord")]
pub struct NutritionProfile {
    metrics: BodyMetrics,
    goal: Goal,
    calorie_delta: i32,
    macro_prefs: MacroPrefs,
    targets: NutritionTargets,
}

/// Wire shape of a stored profile. Missing fields take defaults, a stored
/// `targets` object is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileRecord {
    metrics: BodyMetrics,
    goal: Goal,
    calorie_delta: i32,
    macro_prefs: MacroPrefs,
}

impl From<ProfileRecord> for NutritionProfile {
    fn from(record: ProfileRecord) -> Self {
        NutritionProfile::new(
            record.metrics,
            record.goal,
            record.calorie_delta,
            record.macro_prefs,
        )
    }
}

impl Default for NutritionProfile {
    fn default() -> Self {
        Self::new(
            BodyMetrics::default(),
            Goal::default(),
            0,
            MacroPrefs::default(),
        )
    }
}

impl NutritionProfile {
    pub fn new(
        metrics: BodyMetrics,
        goal: Goal,
        calorie_delta: i32,
        macro_prefs: MacroPrefs,
    ) -> Self {
        let mut profile = Self {
            metrics,
            goal,
            calorie_delta,
            macro_prefs,
            targets: NutritionTargets::default(),
        };
        profile.recompute();
        profile
    }

    pub fn metrics(&self) -> &BodyMetrics {
        &self.metrics
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Requested calorie change per day (signed; clamped by goal when applied).
    pub fn calorie_delta(&self) -> i32 {
        self.calorie_delta
    }

    pub fn macro_prefs(&self) -> &MacroPrefs {
        &self.macro_prefs
    }

    pub fn targets(&self) -> &NutritionTargets {
        &self.targets
    }

    pub fn set_metrics(&mut self, metrics: BodyMetrics) {
        self.metrics = metrics;
        self.recompute();
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
        self.recompute();
    }

    pub fn set_calorie_delta(&mut self, delta: i32) {
        self.calorie_delta = delta;
        self.recompute();
    }

    pub fn set_macro_prefs(&mut self, prefs: MacroPrefs) {
        self.macro_prefs = prefs;
        self.recompute();
    }

    /// Apply several edits and recompute once.
    pub fn update(
        &mut self,
        edit: impl FnOnce(&mut BodyMetrics, &mut Goal, &mut i32, &mut MacroPrefs),
    ) {
        edit(
            &mut self.metrics,
            &mut self.goal,
            &mut self.calorie_delta,
            &mut self.macro_prefs,
        );
        self.recompute();
    }

    fn recompute(&mut self) {
        self.targets = compute_targets(
            &self.metrics,
            self.goal,
            self.calorie_delta,
            &self.macro_prefs,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_targets() {
        let profile = NutritionProfile::default();
        // Mifflin male 70kg/175cm/30y = 1648.75, x1.55 = 2555.56
        assert_eq!(profile.targets().calories, 2556);
        assert!((profile.targets().protein_g - 112.0).abs() < 1e-9);
    }

    #[test]
    fn test_setters_recompute() {
        let mut profile = NutritionProfile::default();
        let before = *profile.targets();

        profile.set_goal(Goal::Lose);
        profile.set_calorie_delta(-500);
        assert_eq!(profile.targets().calories, before.calories - 500);

        let mut metrics = *profile.metrics();
        metrics.weight_kg = 90.0;
        profile.set_metrics(metrics);
        assert!(profile.targets().protein_g > before.protein_g);
    }

    #[test]
    fn test_update_recomputes_once_for_all_fields() {
        let mut profile = NutritionProfile::default();
        profile.update(|metrics, goal, delta, prefs| {
            metrics.weight_kg = 80.0;
            *goal = Goal::Gain;
            *delta = 300;
            prefs.protein_per_kg = 2.0;
        });

        let fresh = NutritionProfile::new(
            *profile.metrics(),
            Goal::Gain,
            300,
            *profile.macro_prefs(),
        );
        assert_eq!(profile, fresh);
        assert!((profile.targets().protein_g - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_stored_targets_are_ignored() {
        let json = r#"{
            "goal": "maintain",
            "targets": {"calories": 1, "protein_g": 0, "fat_g": 0, "carb_g": 0}
        }"#;
        let profile: NutritionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, NutritionProfile::default());
    }
}
