pub mod prompts;
pub mod render;

pub use prompts::{edit_profile, prompt_yes_no, resolve_food};
pub use render::{display_food_list, display_intake, display_profile, display_serving};
