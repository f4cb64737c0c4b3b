use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{Food, ServingNutrients};

/// Minimum Jaro-Winkler score for a fuzzy match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Read-only food catalog with case-insensitive lookup.
pub struct FoodCatalog {
    /// All foods keyed by lowercase name.
    foods: HashMap<String, Food>,
}

impl FoodCatalog {
    /// Build a catalog; later duplicates (case-insensitive) replace earlier ones.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Food> {
        self.foods.get(&name.trim().to_lowercase())
    }

    /// All foods sorted by name.
    pub fn all_sorted(&self) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self.foods.values().collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Fuzzy search over names, best match first.
    pub fn search(&self, query: &str) -> Vec<&Food> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|(key, f)| {
                let score = if key.contains(&query) {
                    1.0
                } else {
                    jaro_winkler(key, &query)
                };
                (f, score)
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates.into_iter().map(|(f, _)| f).collect()
    }

    /// Serving nutrients for a named food and optional cooking method.
    pub fn serving(
        &self,
        name: &str,
        grams: f64,
        method: Option<&str>,
    ) -> Result<ServingNutrients> {
        let food = self
            .get(name)
            .ok_or_else(|| NutriError::FoodNotFound(name.to_string()))?;
        food.serving(grams, method)
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<Food> {
        ["Brown Rice", "Broccoli", "Chicken Breast"]
            .iter()
            .map(|name| Food {
                name: name.to_string(),
                kcal_per_100g: 100.0,
                protein_per_100g: Some(5.0),
                carb_per_100g: None,
                fat_per_100g: None,
                edible_portion: None,
                cooking_methods: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::new(sample_foods());
        assert!(catalog.get("broccoli").is_some());
        assert!(catalog.get("BROCCOLI ").is_some());
        assert!(catalog.get("kale").is_none());
    }

    #[test]
    fn test_search_ranks_substring_first() {
        let catalog = FoodCatalog::new(sample_foods());
        let hits = catalog.search("chicken");
        assert_eq!(hits[0].name, "Chicken Breast");

        let hits = catalog.search("brocoli");
        assert_eq!(hits.first().map(|f| f.name.as_str()), Some("Broccoli"));

        assert!(catalog.search("zzzz").is_empty());
        assert!(catalog.search("  ").is_empty());
    }

    #[test]
    fn test_serving_unknown_food() {
        let catalog = FoodCatalog::new(sample_foods());
        let err = catalog.serving("Kale", 100.0, None).unwrap_err();
        assert!(matches!(err, NutriError::FoodNotFound(_)));
        assert!(catalog.serving("brown rice", 150.0, None).is_ok());
    }

    #[test]
    fn test_all_sorted() {
        let catalog = FoodCatalog::new(sample_foods());
        let names: Vec<&str> = catalog.all_sorted().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Broccoli", "Brown Rice", "Chicken Breast"]);
    }
}
