use tracing::debug;

use crate::models::{BodyMetrics, Goal, MacroPrefs, NutritionTargets};
use crate::nutrition::energy::{bmr, calorie_target, tdee};
use crate::nutrition::macros::macro_targets;

/// Run the full pipeline: BMR -> TDEE -> calorie target -> macro split.
pub fn compute_targets(
    metrics: &BodyMetrics,
    goal: Goal,
    calorie_delta: i32,
    prefs: &MacroPrefs,
) -> NutritionTargets {
    let bmr = bmr(
        metrics.formula,
        metrics.sex,
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age,
    );
    let tdee = tdee(bmr, metrics.activity);
    let calories = calorie_target(tdee, goal, calorie_delta);
    let macros = macro_targets(
        calories,
        metrics.weight_kg,
        prefs.protein_per_kg,
        prefs.fat_mode,
        prefs.fat_percent,
        prefs.fat_per_kg,
    );

    debug!(bmr, tdee, calories, goal = %goal, "recomputed nutrition targets");

    NutritionTargets {
        calories,
        protein_g: macros.protein,
        fat_g: macros.fat,
        carb_g: macros.carb,
    }
}
