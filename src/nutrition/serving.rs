use crate::models::{CookingMethod, Food, ServingNutrients};
use crate::nutrition::constants::{KCAL_PER_G_FAT, MAX_SERVING_GRAMS, REFERENCE_GRAMS};

/// Scale a food's per-100 g values to a serving.
///
/// 1. `grams` is clamped to `0..=MAX_SERVING_GRAMS`.
/// 2. `net = grams * edible_portion` (portion defaults to 1.0).
/// 3. Energy and macros scale by `net / 100` and the method's loss factor;
///    the method's added fat is added to fat and (at 9 kcal/g) to energy.
///
/// Unknown macros stay unknown. Loss factor and edible portion are used as
/// given, even outside `0..=1`.
pub fn adjust_serving(food: &Food, grams: f64, method: Option<&CookingMethod>) -> ServingNutrients {
    let grams = grams.clamp(0.0, MAX_SERVING_GRAMS);
    let net_grams = grams * food.edible_portion.unwrap_or(1.0);
    let scale = net_grams / REFERENCE_GRAMS;

    let (loss, added_fat_per_100g) = method
        .map(|m| (m.loss_factor, m.added_fat_per_100g))
        .unwrap_or((1.0, 0.0));
    let added_fat = added_fat_per_100g * scale;

    let scaled = |per_100g: Option<f64>| per_100g.map(|v| v * scale * loss);

    ServingNutrients {
        food_name: food.name.clone(),
        method: method.map(|m| m.name.clone()),
        grams,
        net_grams,
        kcal: food.kcal_per_100g * scale * loss + added_fat * KCAL_PER_G_FAT,
        protein_g: scaled(food.protein_per_100g),
        carb_g: scaled(food.carb_per_100g),
        fat_g: scaled(food.fat_per_100g).map(|fat| fat + added_fat),
    }
}
