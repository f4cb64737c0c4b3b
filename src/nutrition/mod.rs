pub mod constants;
pub mod energy;
pub mod intake;
pub mod macros;
pub mod serving;
pub mod targets;

pub use constants::*;
pub use energy::{bmr, calorie_target, tdee};
pub use intake::{IntakeSummary, Remaining};
pub use macros::{macro_targets, MacroBreakdown, MacroGrams};
pub use serving::adjust_serving;
pub use targets::compute_targets;
