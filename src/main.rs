use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutricook::cli::{parse_intake_entry, Cli, Command, SetArgs};
use nutricook::error::Result;
use nutricook::interface::{
    display_food_list, display_intake, display_profile, display_serving, edit_profile,
    prompt_yes_no, resolve_food,
};
use nutricook::nutrition::IntakeSummary;
use nutricook::state::{bundled_catalog, load_catalog, FoodCatalog, ProfileStore};

fn main() {
    // Logs go to stderr so command output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nutricook=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = ProfileStore::new(&cli.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Targets => cmd_targets(&store, &cli.user),
        Command::Edit => cmd_edit(&store, &cli.user),
        Command::Set(args) => cmd_set(&store, &cli.user, args),
        Command::Serving {
            food,
            grams,
            method,
        } => {
            let catalog = open_catalog(cli.catalog.as_deref())?;
            cmd_serving(&catalog, &food, grams, method.as_deref())
        }
        Command::Intake { entries } => {
            let catalog = open_catalog(cli.catalog.as_deref())?;
            cmd_intake(&store, &cli.user, &catalog, &entries)
        }
        Command::Foods { search } => {
            let catalog = open_catalog(cli.catalog.as_deref())?;
            cmd_foods(&catalog, search.as_deref())
        }
        Command::Reset { yes } => cmd_reset(&store, &cli.user, yes),
    }
}

/// Load the catalog from a file, or the bundled one.
fn open_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    let foods = match path {
        Some(path) => load_catalog(path)?,
        None => bundled_catalog()?,
    };
    Ok(FoodCatalog::new(foods))
}

/// Show the stored profile and its targets.
fn cmd_targets(store: &ProfileStore, user: &str) -> Result<()> {
    let profile = store.load(user)?;
    display_profile(&profile);
    Ok(())
}

/// Edit every profile field interactively.
fn cmd_edit(store: &ProfileStore, user: &str) -> Result<()> {
    let mut profile = store.load(user)?;
    edit_profile(&mut profile)?;
    display_profile(&profile);

    if prompt_yes_no("Save profile?", true)? {
        store.save(user, &profile)?;
        println!("Profile saved.");
    }

    Ok(())
}

/// Apply the given fields and save.
fn cmd_set(store: &ProfileStore, user: &str, args: SetArgs) -> Result<()> {
    if args.is_empty() {
        println!("Nothing to change. See 'nutricook set --help' for the available fields.");
        return Ok(());
    }

    let mut profile = store.load(user)?;
    profile.update(|metrics, goal, delta, prefs| {
        if let Some(v) = args.sex {
            metrics.sex = v;
        }
        if let Some(v) = args.age {
            metrics.age = v;
        }
        if let Some(v) = args.height {
            metrics.height_cm = v;
        }
        if let Some(v) = args.weight {
            metrics.weight_kg = v;
        }
        if let Some(v) = args.activity {
            metrics.activity = v;
        }
        if let Some(v) = args.formula {
            metrics.formula = v;
        }
        if let Some(v) = args.goal {
            *goal = v;
        }
        if let Some(v) = args.delta {
            *delta = v;
        }
        if let Some(v) = args.protein_per_kg {
            prefs.protein_per_kg = v;
        }
        if let Some(v) = args.fat_mode {
            prefs.fat_mode = v;
        }
        if let Some(v) = args.fat_percent {
            prefs.fat_percent = v / 100.0;
        }
        if let Some(v) = args.fat_per_kg {
            prefs.fat_per_kg = v;
        }
    });

    store.save(user, &profile)?;
    display_profile(&profile);
    Ok(())
}

/// Show the nutrients of one serving.
fn cmd_serving(catalog: &FoodCatalog, name: &str, grams: f64, method: Option<&str>) -> Result<()> {
    let Some(food) = resolve_food(catalog, name)? else {
        return Ok(());
    };

    let serving = food.serving(grams, method)?;
    display_serving(&serving);
    Ok(())
}

/// Sum a list of servings against the profile's targets.
fn cmd_intake(
    store: &ProfileStore,
    user: &str,
    catalog: &FoodCatalog,
    entries: &[String],
) -> Result<()> {
    let profile = store.load(user)?;

    let servings = entries
        .iter()
        .map(|raw| {
            let entry = parse_intake_entry(raw)?;
            catalog.serving(&entry.food, entry.grams, entry.method.as_deref())
        })
        .collect::<Result<Vec<_>>>()?;

    for serving in &servings {
        display_serving(serving);
    }

    let summary = IntakeSummary::from_servings(&servings);
    display_intake(&summary, &profile);
    Ok(())
}

/// List or search the catalog.
fn cmd_foods(catalog: &FoodCatalog, search: Option<&str>) -> Result<()> {
    match search {
        Some(query) => {
            let hits = catalog.search(query);
            display_food_list(&hits, &format!("Matches for '{}'", query));
        }
        None => display_food_list(&catalog.all_sorted(), "Food catalog"),
    }
    Ok(())
}

/// Discard the stored profile so the defaults apply again.
fn cmd_reset(store: &ProfileStore, user: &str, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Reset profile to defaults?", false)? {
        return Ok(());
    }

    store.remove(user)?;
    println!("Profile reset to defaults.");
    display_profile(&store.load(user)?);
    Ok(())
}
