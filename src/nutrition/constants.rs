/// Energy per gram of protein or carbohydrate (kcal).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Energy per gram of fat (kcal).
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Safety floor for any calorie target (kcal/day). Not user-configurable.
pub const MIN_CALORIE_TARGET: i32 = 1200;

/// Serving sizes are clamped to `0..=MAX_SERVING_GRAMS` before scaling.
pub const MAX_SERVING_GRAMS: f64 = 5000.0;

/// Catalog values are expressed per this many grams.
pub const REFERENCE_GRAMS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor (1990)
// ─────────────────────────────────────────────────────────────────────────────

pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = -5.0;
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict, revised by Roza & Shizgal (1984)
// ─────────────────────────────────────────────────────────────────────────────

pub const HB_MALE_CONSTANT: f64 = 88.362;
pub const HB_MALE_WEIGHT_COEF: f64 = 13.397;
pub const HB_MALE_HEIGHT_COEF: f64 = 4.799;
pub const HB_MALE_AGE_COEF: f64 = -5.677;

pub const HB_FEMALE_CONSTANT: f64 = 447.593;
pub const HB_FEMALE_WEIGHT_COEF: f64 = 9.247;
pub const HB_FEMALE_HEIGHT_COEF: f64 = 3.098;
pub const HB_FEMALE_AGE_COEF: f64 = -4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Activity factors (McArdle et al.)
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT: f64 = 1.375;
pub const ACTIVITY_MODERATE: f64 = 1.55;
pub const ACTIVITY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Profile defaults (first use)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_PROTEIN_PER_KG: f64 = 1.6;

/// Fraction of calories allocated to fat in percent mode.
pub const DEFAULT_FAT_PERCENT: f64 = 0.25;
pub const DEFAULT_FAT_PER_KG: f64 = 0.8;
