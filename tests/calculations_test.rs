use assert_float_eq::*;

use nutricook::models::{
    ActivityLevel, BmrFormula, BodyMetrics, FatMode, Goal, MacroPrefs, NutritionProfile, Sex,
};
use nutricook::nutrition::{
    bmr, calorie_target, compute_targets, macro_targets, tdee, KCAL_PER_G_CARB, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN, MIN_CALORIE_TARGET,
};

fn metrics(sex: Sex, formula: BmrFormula, activity: ActivityLevel) -> BodyMetrics {
    BodyMetrics {
        sex,
        age: 42,
        height_cm: 170.0,
        weight_kg: 75.0,
        activity,
        formula,
    }
}

#[test]
fn test_macro_energy_matches_calories() {
    let cases = [
        (1800, 60.0, 1.2, FatMode::Percent, 0.30, 0.0),
        (2500, 85.0, 2.0, FatMode::Percent, 0.25, 0.0),
        (3200, 95.0, 1.8, FatMode::PerKg, 0.0, 1.0),
        (1200, 50.0, 1.0, FatMode::PerKg, 0.0, 0.6),
    ];

    for (calories, weight, protein_per_kg, mode, fat_percent, fat_per_kg) in cases {
        let m = macro_targets(calories, weight, protein_per_kg, mode, fat_percent, fat_per_kg);
        let energy =
            m.protein * KCAL_PER_G_PROTEIN + m.fat * KCAL_PER_G_FAT + m.carb * KCAL_PER_G_CARB;

        assert!(m.carb > 0.0);
        assert_float_absolute_eq!(energy, f64::from(calories), 1e-6);
    }
}

#[test]
fn test_calorie_target_never_below_floor() {
    for delta in [-100, -1000, -5000, i32::MIN] {
        for tdee in [1000, 1500, 2500] {
            assert!(calorie_target(tdee, Goal::Lose, delta) >= MIN_CALORIE_TARGET);
        }
    }
}

#[test]
fn test_maintain_ignores_delta() {
    for delta in [-800, 0, 650] {
        assert_eq!(calorie_target(2300, Goal::Maintain, delta), 2300);
    }
}

#[test]
fn test_harris_exceeds_mifflin_for_typical_adult() {
    let m = metrics(Sex::Male, BmrFormula::Mifflin, ActivityLevel::Moderate);
    let mifflin = bmr(m.formula, m.sex, m.weight_kg, m.height_cm, m.age);
    let harris = bmr(BmrFormula::Harris, m.sex, m.weight_kg, m.height_cm, m.age);

    // 750 + 1062.5 - 210 + 5
    assert_float_absolute_eq!(mifflin, 1607.5, 1e-9);
    assert!(harris > mifflin);
}

#[test]
fn test_activity_scales_tdee() {
    let base = bmr(BmrFormula::Mifflin, Sex::Female, 60.0, 160.0, 35);
    let sedentary = tdee(base, ActivityLevel::Sedentary);
    let very_active = tdee(base, ActivityLevel::VeryActive);

    assert!(very_active > sedentary);
    assert_eq!(sedentary, (base * 1.2).round() as i32);
}

#[test]
fn test_profile_targets_follow_pipeline() {
    let m = metrics(Sex::Female, BmrFormula::Harris, ActivityLevel::Light);
    let prefs = MacroPrefs {
        protein_per_kg: 1.4,
        fat_mode: FatMode::PerKg,
        fat_percent: 0.0,
        fat_per_kg: 0.9,
    };

    let profile = NutritionProfile::new(m, Goal::Gain, 250, prefs);
    assert_eq!(*profile.targets(), compute_targets(&m, Goal::Gain, 250, &prefs));

    let expected_tdee = tdee(bmr(m.formula, m.sex, m.weight_kg, m.height_cm, m.age), m.activity);
    assert_eq!(profile.targets().calories, expected_tdee + 250);
    assert_float_absolute_eq!(profile.targets().fat_g, 67.5, 1e-9);
}

#[test]
fn test_lose_goal_profile_respects_floor() {
    let m = BodyMetrics {
        sex: Sex::Female,
        age: 70,
        height_cm: 150.0,
        weight_kg: 45.0,
        activity: ActivityLevel::Sedentary,
        formula: BmrFormula::Mifflin,
    };
    let profile = NutritionProfile::new(m, Goal::Lose, -1000, MacroPrefs::default());
    assert_eq!(profile.targets().calories, MIN_CALORIE_TARGET);
}
