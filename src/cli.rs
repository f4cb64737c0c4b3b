use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, BmrFormula, FatMode, Goal, Sex};

/// NutriCook: daily nutrition targets and per-serving food numbers.
#[derive(Parser, Debug)]
#[command(name = "nutricook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding stored profiles.
    #[arg(long, env = "NUTRICOOK_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// User or device key the profile is stored under.
    #[arg(short, long, env = "NUTRICOOK_USER", default_value = "default")]
    pub user: String,

    /// Food catalog (JSON or CSV) to use instead of the bundled one.
    #[arg(long, env = "NUTRICOOK_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the profile and its daily targets.
    #[default]
    Targets,

    /// Edit the profile interactively.
    Edit,

    /// Change profile fields without prompting.
    Set(SetArgs),

    /// Nutrients for a serving of a catalog food.
    Serving {
        /// Food name (fuzzy matched if not exact).
        food: String,

        /// Grams of raw food (clamped to 0-5000).
        grams: f64,

        /// Cooking method name.
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Sum a day's servings and compare them to the targets.
    Intake {
        /// Entries as FOOD=GRAMS or FOOD=GRAMS@METHOD.
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// List or search the food catalog.
    Foods {
        /// Fuzzy search text.
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Restore the default profile.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct SetArgs {
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// sedentary, light, moderate, active or very_active.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// mifflin or harris.
    #[arg(long)]
    pub formula: Option<BmrFormula>,

    /// lose, maintain or gain.
    #[arg(long)]
    pub goal: Option<Goal>,

    /// Calorie change per day (kcal, signed).
    #[arg(long, allow_negative_numbers = true)]
    pub delta: Option<i32>,

    /// Protein in g per kg bodyweight.
    #[arg(long)]
    pub protein_per_kg: Option<f64>,

    /// percent or per_kg.
    #[arg(long)]
    pub fat_mode: Option<FatMode>,

    /// Fat as percent of calories (e.g. 25).
    #[arg(long)]
    pub fat_percent: Option<f64>,

    /// Fat in g per kg bodyweight.
    #[arg(long)]
    pub fat_per_kg: Option<f64>,
}

impl SetArgs {
    /// True when no field was given.
    pub fn is_empty(&self) -> bool {
        self.sex.is_none()
            && self.age.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.activity.is_none()
            && self.formula.is_none()
            && self.goal.is_none()
            && self.delta.is_none()
            && self.protein_per_kg.is_none()
            && self.fat_mode.is_none()
            && self.fat_percent.is_none()
            && self.fat_per_kg.is_none()
    }
}

/// One `intake` entry: food, grams and optional cooking method.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeEntry {
    pub food: String,
    pub grams: f64,
    pub method: Option<String>,
}

/// Parse `FOOD=GRAMS` or `FOOD=GRAMS@METHOD`.
pub fn parse_intake_entry(entry: &str) -> Result<IntakeEntry> {
    let invalid = || {
        NutriError::InvalidInput(format!("expected FOOD=GRAMS[@METHOD], got '{}'", entry))
    };

    let (food, rest) = entry.split_once('=').ok_or_else(invalid)?;
    let (grams, method) = match rest.split_once('@') {
        Some((grams, method)) => (grams, Some(method.trim().to_string())),
        None => (rest, None),
    };

    let food = food.trim();
    if food.is_empty() {
        return Err(invalid());
    }
    let grams: f64 = grams.trim().parse().map_err(|_| invalid())?;

    Ok(IntakeEntry {
        food: food.to_string(),
        grams,
        method: method.filter(|m| !m.is_empty()),
    })
}
