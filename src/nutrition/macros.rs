use serde::Serialize;

use crate::models::{FatMode, NutritionTargets};
use crate::nutrition::constants::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Daily macro allowance in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

/// Split a calorie target into protein, fat and carbohydrate grams.
///
/// Protein is bodyweight-based; fat is either a fraction of calories or
/// bodyweight-based depending on `fat_mode`; carbs take whatever energy is
/// left. Carbs are floored at zero, so when protein and fat already exceed
/// the budget the split sums to more than `calories`.
pub fn macro_targets(
    calories: i32,
    weight_kg: f64,
    protein_per_kg: f64,
    fat_mode: FatMode,
    fat_percent: f64,
    fat_per_kg: f64,
) -> MacroGrams {
    let calories = f64::from(calories);
    let protein = weight_kg * protein_per_kg;

    let fat = match fat_mode {
        FatMode::Percent => calories * fat_percent / KCAL_PER_G_FAT,
        FatMode::PerKg => weight_kg * fat_per_kg,
    };

    let remaining = calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    let carb = (remaining / KCAL_PER_G_CARB).max(0.0);

    MacroGrams { protein, fat, carb }
}

/// Share of calories coming from each macro, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein_percent: f64,
    pub fat_percent: f64,
    pub carb_percent: f64,
}

impl MacroBreakdown {
    pub fn from_targets(targets: &NutritionTargets) -> Self {
        let protein_kcal = targets.protein_g * KCAL_PER_G_PROTEIN;
        let fat_kcal = targets.fat_g * KCAL_PER_G_FAT;
        let carb_kcal = targets.carb_g * KCAL_PER_G_CARB;
        let total = protein_kcal + fat_kcal + carb_kcal;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            protein_percent: protein_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
            carb_percent: carb_kcal / total * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy(m: &MacroGrams) -> f64 {
        m.protein * KCAL_PER_G_PROTEIN + m.fat * KCAL_PER_G_FAT + m.carb * KCAL_PER_G_CARB
    }

    #[test]
    fn test_percent_mode() {
        let m = macro_targets(2000, 70.0, 2.0, FatMode::Percent, 0.25, 0.0);
        assert!((m.protein - 140.0).abs() < 1e-9);
        assert!((m.fat - 2000.0 * 0.25 / 9.0).abs() < 1e-9);
        // 2000 - 560 - 500 = 940 kcal -> 235 g
        assert!((m.carb - 235.0).abs() < 1e-9);
        assert!((energy(&m) - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_per_kg_mode_ignores_percent() {
        let m = macro_targets(2400, 80.0, 1.8, FatMode::PerKg, 0.9, 1.0);
        assert!((m.fat - 80.0).abs() < 1e-9);
        assert!((energy(&m) - 2400.0).abs() < 1e-6);
    }

    #[test]
    fn test_carbs_floor_at_zero() {
        let m = macro_targets(1200, 120.0, 3.0, FatMode::PerKg, 0.0, 1.5);
        assert_eq!(m.carb, 0.0);
        assert!(energy(&m) > 1200.0);
    }

    #[test]
    fn test_breakdown_sums_to_hundred() {
        let targets = NutritionTargets {
            calories: 2000,
            protein_g: 150.0,
            fat_g: 60.0,
            carb_g: 215.0,
        };
        let b = MacroBreakdown::from_targets(&targets);
        assert!((b.protein_percent + b.fat_percent + b.carb_percent - 100.0).abs() < 1e-9);
        assert!((b.protein_percent - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_of_empty_targets() {
        let b = MacroBreakdown::from_targets(&NutritionTargets::default());
        assert_eq!(b, MacroBreakdown::default());
    }
}
