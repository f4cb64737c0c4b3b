use std::fmt::Display;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, BmrFormula, FatMode, Food, Goal, NutritionProfile, Sex};
use crate::state::FoodCatalog;

/// Prompt for a number, showing `current` as the default.
fn prompt_number<T>(prompt: &str, current: T) -> Result<T>
where
    T: FromStr + Display,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for one of a fixed set of options, preselecting `current`.
fn prompt_choice<T>(prompt: &str, options: &[T], current: T) -> Result<T>
where
    T: Copy + PartialEq + Display,
{
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Walk through every profile field and apply the answers in one update.
pub fn edit_profile(profile: &mut NutritionProfile) -> Result<()> {
    let mut metrics = *profile.metrics();
    let mut prefs = *profile.macro_prefs();

    metrics.sex = prompt_choice("Sex", &Sex::ALL, metrics.sex)?;
    metrics.age = prompt_number("Age (years)", metrics.age)?;
    metrics.height_cm = prompt_number("Height (cm)", metrics.height_cm)?;
    metrics.weight_kg = prompt_number("Weight (kg)", metrics.weight_kg)?;
    metrics.activity = prompt_choice("Activity level", &ActivityLevel::ALL, metrics.activity)?;
    metrics.formula = prompt_choice("BMR formula", &BmrFormula::ALL, metrics.formula)?;

    let goal = prompt_choice("Goal", &Goal::ALL, profile.goal())?;
    let delta = if goal == Goal::Maintain {
        0
    } else {
        prompt_number("Calorie change per day (kcal, signed)", profile.calorie_delta())?
    };

    prefs.protein_per_kg = prompt_number("Protein (g per kg)", prefs.protein_per_kg)?;
    prefs.fat_mode = prompt_choice("Fat allocation", &FatMode::ALL, prefs.fat_mode)?;
    match prefs.fat_mode {
        FatMode::Percent => {
            let percent = prompt_number("Fat (% of calories)", prefs.fat_percent * 100.0)?;
            prefs.fat_percent = percent / 100.0;
        }
        FatMode::PerKg => {
            prefs.fat_per_kg = prompt_number("Fat (g per kg)", prefs.fat_per_kg)?;
        }
    }

    profile.update(|m, g, d, p| {
        *m = metrics;
        *g = goal;
        *d = delta;
        *p = prefs;
    });

    Ok(())
}

/// Resolve a food name, offering fuzzy suggestions when there is no exact match.
pub fn resolve_food<'a>(catalog: &'a FoodCatalog, name: &str) -> Result<Option<&'a Food>> {
    if let Some(food) = catalog.get(name) {
        return Ok(Some(food));
    }

    let candidates = catalog.search(name);

    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", name);
            Ok(None)
        }
        [food] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*food))
        }
        _ => {
            let options: Vec<&Food> = candidates.iter().take(5).copied().collect();
            let mut labels: Vec<String> = options.iter().map(|f| f.name.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).copied())
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
