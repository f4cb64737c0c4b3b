/// Implements `Display` and `FromStr` for a unit enum with `ALL` and `label()`.
/// Parsing is case-insensitive and accepts `-` for `_`.
macro_rules! labelled_enum {
    ($ty:ident, $what:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::error::NutriError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('-', "_");
                $ty::ALL
                    .into_iter()
                    .find(|v| v.label() == wanted)
                    .ok_or_else(|| {
                        crate::error::NutriError::InvalidInput(format!("unknown {}: {}", $what, s))
                    })
            }
        }
    };
}

pub mod body;
pub mod food;
pub mod profile;
pub mod serving;

pub use body::{ActivityLevel, BmrFormula, BodyMetrics, Sex};
pub use food::{CookingMethod, Food};
pub use profile::{FatMode, Goal, MacroPrefs, NutritionProfile, NutritionTargets};
pub use serving::ServingNutrients;
