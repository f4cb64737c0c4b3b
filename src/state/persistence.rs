use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{NutriError, Result};
use crate::models::{Food, NutritionProfile};

const BUNDLED_CATALOG: &str = include_str!("../../assets/foods.json");

/// Encode a profile as pretty JSON.
pub fn encode_profile(profile: &NutritionProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Decode a profile, falling back to the default profile on any error.
///
/// Unknown fields are ignored and missing ones take defaults; stored targets
/// are recomputed from the decoded inputs.
pub fn decode_profile(content: &str) -> NutritionProfile {
    decode_profile_bytes(content.as_bytes())
}

/// Decode a raw profile blob. Invalid UTF-8 counts as a decode failure.
pub fn decode_profile_bytes(content: &[u8]) -> NutritionProfile {
    match serde_json::from_slice(content) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "could not decode nutrition profile, using defaults");
            NutritionProfile::default()
        }
    }
}

/// Stores one profile blob per user/device key under a directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the blob for `key`.
    ///
    /// Keys must be a plain file stem: non-empty, no path separators, no `..`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.trim().is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(NutriError::InvalidInput(format!("invalid profile key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Load the profile for `key`.
    ///
    /// A missing file yields the default profile (first use). Undecodable
    /// content also yields the default. Other IO errors propagate.
    pub fn load(&self, key: &str) -> Result<NutritionProfile> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded nutrition profile");
                Ok(decode_profile_bytes(&content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored profile, using defaults");
                Ok(NutritionProfile::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the profile for `key`, creating the directory if needed.
    pub fn save(&self, key: &str, profile: &NutritionProfile) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, encode_profile(profile)?)?;
        info!(
            path = %path.display(),
            calories = profile.targets().calories,
            "saved nutrition profile"
        );
        Ok(())
    }

    /// Delete the stored profile for `key`. Missing files are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// One row of a CSV catalog. CSV catalogs cannot carry cooking methods.
#[derive(Debug, Deserialize)]
struct CsvFoodRow {
    name: String,
    kcal_per_100g: f64,
    protein_per_100g: Option<f64>,
    carb_per_100g: Option<f64>,
    fat_per_100g: Option<f64>,
    edible_portion: Option<f64>,
}

impl From<CsvFoodRow> for Food {
    fn from(row: CsvFoodRow) -> Self {
        Food {
            name: row.name,
            kcal_per_100g: row.kcal_per_100g,
            protein_per_100g: row.protein_per_100g,
            carb_per_100g: row.carb_per_100g,
            fat_per_100g: row.fat_per_100g,
            edible_portion: row.edible_portion,
            cooking_methods: Vec::new(),
        }
    }
}

/// Deduplicate by lowercase name, keeping the last occurrence.
fn dedup_foods(foods: Vec<Food>) -> Vec<Food> {
    let mut seen: HashMap<String, Food> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }
    seen.into_values().collect()
}

/// Parse a JSON catalog.
pub fn parse_catalog_json(content: &str) -> Result<Vec<Food>> {
    let foods: Vec<Food> = serde_json::from_str(content)?;
    Ok(dedup_foods(foods))
}

/// The catalog shipped with the crate.
pub fn bundled_catalog() -> Result<Vec<Food>> {
    parse_catalog_json(BUNDLED_CATALOG)
}

/// Load a catalog file: CSV when the extension is `.csv`, JSON otherwise.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize::<CsvFoodRow>()
            .map(|row| row.map(Food::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(dedup_foods(rows))
    } else {
        let content = fs::read_to_string(path)?;
        parse_catalog_json(&content)
    }
}
