use crate::models::{FatMode, Food, NutritionProfile, ServingNutrients};
use crate::nutrition::{bmr, tdee, IntakeSummary, MacroBreakdown};

fn grams(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |g| format!("{:.1} g", g))
}

/// Display a profile and its derived targets.
pub fn display_profile(profile: &NutritionProfile) {
    let m = profile.metrics();
    let prefs = profile.macro_prefs();
    let targets = profile.targets();
    let bmr = bmr(m.formula, m.sex, m.weight_kg, m.height_cm, m.age);
    let tdee = tdee(bmr, m.activity);
    let split = MacroBreakdown::from_targets(targets);

    println!();
    println!("=== Nutrition Profile ===");
    println!();
    println!(
        "{}, {} y, {:.1} cm, {:.1} kg, {} ({:.3}x), {} formula",
        m.sex,
        m.age,
        m.height_cm,
        m.weight_kg,
        m.activity,
        m.activity.factor(),
        m.formula
    );
    println!(
        "Goal: {} ({:+} kcal/day requested)",
        profile.goal(),
        profile.calorie_delta()
    );
    match prefs.fat_mode {
        FatMode::Percent => println!(
            "Macros: protein {:.2} g/kg, fat {:.0}% of calories",
            prefs.protein_per_kg,
            prefs.fat_percent * 100.0
        ),
        FatMode::PerKg => println!(
            "Macros: protein {:.2} g/kg, fat {:.2} g/kg",
            prefs.protein_per_kg, prefs.fat_per_kg
        ),
    }

    println!();
    println!("--- Targets ---");
    println!("BMR:      {:>6.0} kcal", bmr);
    println!("TDEE:     {:>6} kcal", tdee);
    println!("Calories: {:>6} kcal", targets.calories);
    println!(
        "Protein:  {:>6.1} g ({:.0}%)",
        targets.protein_g, split.protein_percent
    );
    println!("Fat:      {:>6.1} g ({:.0}%)", targets.fat_g, split.fat_percent);
    println!("Carbs:    {:>6.1} g ({:.0}%)", targets.carb_g, split.carb_percent);
    println!();
}

/// Display one adjusted serving.
pub fn display_serving(serving: &ServingNutrients) {
    println!();
    match &serving.method {
        Some(method) => println!(
            "=== {} ({}), {:.0} g ===",
            serving.food_name, method, serving.grams
        ),
        None => println!("=== {}, {:.0} g ===", serving.food_name, serving.grams),
    }
    if (serving.net_grams - serving.grams).abs() > f64::EPSILON {
        println!("Edible: {:.0} g", serving.net_grams);
    }
    println!("Energy:  {:.0} kcal", serving.kcal);
    println!("Protein: {}", grams(serving.protein_g));
    println!("Carbs:   {}", grams(serving.carb_g));
    println!("Fat:     {}", grams(serving.fat_g));
    println!();
}

/// Display a serving log against the profile's targets.
pub fn display_intake(summary: &IntakeSummary, profile: &NutritionProfile) {
    let left = summary.remaining(profile.targets());

    println!("--- Intake ({} servings) ---", summary.servings);
    println!(
        "Eaten:     {:.0} kcal, P {}, C {}, F {}",
        summary.kcal,
        grams(summary.protein_g),
        grams(summary.carb_g),
        grams(summary.fat_g)
    );
    println!(
        "Remaining: {:.0} kcal, P {:.1} g, C {:.1} g, F {:.1} g",
        left.kcal, left.protein_g, left.carb_g, left.fat_g
    );
    if summary.incomplete {
        println!("(some macros unknown; totals are partial)");
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {}", food.summary());
    }

    println!();
}
