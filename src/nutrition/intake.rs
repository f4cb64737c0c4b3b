use serde::Serialize;

use crate::models::{NutritionTargets, ServingNutrients};

/// Totals of a list of logged servings.
///
/// A macro total is `None` only when no serving knows it. When some servings
/// know it and others do not, the known values are summed and `incomplete`
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntakeSummary {
    pub servings: usize,
    pub kcal: f64,
    pub protein_g: Option<f64>,
    pub carb_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub incomplete: bool,
}

/// What is left of the daily targets. Negative values mean overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Remaining {
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

fn sum_known(values: impl Iterator<Item = Option<f64>>, incomplete: &mut bool) -> Option<f64> {
    let mut total: Option<f64> = None;
    for value in values {
        match value {
            Some(v) => *total.get_or_insert(0.0) += v,
            None => *incomplete = true,
        }
    }
    total
}

impl IntakeSummary {
    pub fn from_servings(servings: &[ServingNutrients]) -> Self {
        let mut incomplete = false;

        let protein_g = sum_known(servings.iter().map(|s| s.protein_g), &mut incomplete);
        let carb_g = sum_known(servings.iter().map(|s| s.carb_g), &mut incomplete);
        let fat_g = sum_known(servings.iter().map(|s| s.fat_g), &mut incomplete);

        Self {
            servings: servings.len(),
            kcal: servings.iter().map(|s| s.kcal).sum(),
            protein_g,
            carb_g,
            fat_g,
            incomplete,
        }
    }

    /// Remaining allowance against `targets`; unknown totals count as zero.
    pub fn remaining(&self, targets: &NutritionTargets) -> Remaining {
        Remaining {
            kcal: f64::from(targets.calories) - self.kcal,
            protein_g: targets.protein_g - self.protein_g.unwrap_or(0.0),
            carb_g: targets.carb_g - self.carb_g.unwrap_or(0.0),
            fat_g: targets.fat_g - self.fat_g.unwrap_or(0.0),
        }
    }
}
