use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::models::serving::ServingNutrients;
use crate::nutrition::serving::adjust_serving;

fn default_loss_factor() -> f64 {
    1.0
}

/// A named way of cooking a food.
///
/// `loss_factor` is the fraction of nutrients retained (0-1);
/// `added_fat_per_100g` is fat absorbed per 100 g of net food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingMethod {
    pub name: String,

    #[serde(default = "default_loss_factor")]
    pub loss_factor: f64,

    #[serde(default)]
    pub added_fat_per_100g: f64,
}

/// A catalog food with reference values per 100 g.
///
/// Macros are optional: `None` means unknown, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,

    pub kcal_per_100g: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_per_100g: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carb_per_100g: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_per_100g: Option<f64>,

    /// Fraction of raw mass that is eaten; `None` means 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edible_portion: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cooking_methods: Vec<CookingMethod>,
}

impl Food {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Find a cooking method by name (case-insensitive).
    pub fn method(&self, name: &str) -> Option<&CookingMethod> {
        let wanted = name.to_lowercase();
        self.cooking_methods
            .iter()
            .find(|m| m.name.to_lowercase() == wanted)
    }

    /// Nutrients for `grams` of this food, optionally cooked with `method`.
    pub fn serving(&self, grams: f64, method: Option<&str>) -> Result<ServingNutrients> {
        let cooked = match method {
            Some(name) => Some(self.method(name).ok_or_else(|| NutriError::MethodNotFound {
                food: self.name.clone(),
                method: name.to_string(),
            })?),
            None => None,
        };

        Ok(adjust_serving(self, grams, cooked))
    }

    /// One-line summary for listings.
    pub fn summary(&self) -> String {
        let fmt = |v: Option<f64>| v.map_or_else(|| "?".to_string(), |g| format!("{:.1}", g));
        let mut line = format!(
            "{}: {:.0} kcal, P:{} C:{} F:{} per 100g",
            self.name,
            self.kcal_per_100g,
            fmt(self.protein_per_100g),
            fmt(self.carb_per_100g),
            fmt(self.fat_per_100g),
        );
        if let Some(portion) = self.edible_portion {
            line.push_str(&format!(", edible {:.0}%", portion * 100.0));
        }
        if !self.cooking_methods.is_empty() {
            let names: Vec<&str> = self.cooking_methods.iter().map(|m| m.name.as_str()).collect();
            line.push_str(&format!(" [{}]", names.join(", ")));
        }
        line
    }
}
