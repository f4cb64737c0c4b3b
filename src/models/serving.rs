use serde::Serialize;

/// Nutrients of one adjusted serving.
///
/// Macro fields are `None` when the catalog value is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServingNutrients {
    /// Name of the food.
    pub food_name: String,

    /// Cooking method applied, if any.
    pub method: Option<String>,

    /// Requested grams after clamping.
    pub grams: f64,

    /// Grams actually eaten (grams x edible portion).
    pub net_grams: f64,

    pub kcal: f64,
    pub protein_g: Option<f64>,
    pub carb_g: Option<f64>,
    pub fat_g: Option<f64>,
}
