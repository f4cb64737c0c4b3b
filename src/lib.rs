pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{Food, NutritionProfile, NutritionTargets, ServingNutrients};
