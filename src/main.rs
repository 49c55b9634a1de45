use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_planner_rs::catalog::{builtin_catalog, load_catalog, save_catalog};
use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::error::{DietError, Result};
use diet_planner_rs::estimator::CalorieEstimator;
use diet_planner_rs::interface::{
    collect_user_profile, display_calorie_target, display_catalog, display_meal_plan,
    prompt_yes_no,
};
use diet_planner_rs::models::FoodItem;
use diet_planner_rs::selector::select_meals;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { seed } => cmd_plan(cli.file.as_deref(), seed),
        Command::Catalog => cmd_catalog(cli.file.as_deref()),
        Command::Export { path } => cmd_export(&path),
    }
}

/// Built-in catalog, or the contents of `--file` when given.
fn active_catalog(file: Option<&str>) -> Result<Vec<FoodItem>> {
    match file {
        Some(path) => load_catalog(path),
        None => Ok(builtin_catalog()),
    }
}

/// Run an interactive planning session.
fn cmd_plan(file: Option<&str>, seed: Option<u64>) -> Result<()> {
    let catalog = active_catalog(file)?;
    if catalog.is_empty() {
        return Err(DietError::EmptyCatalog);
    }
    println!("Loaded {} foods", catalog.len());

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Model fitting is fatal on failure; nothing is prompted before it succeeds.
    let estimator = CalorieEstimator::train(&mut rng)?;
    println!("Calorie model ready.");
    println!();

    loop {
        let profile = collect_user_profile()?;

        let target = estimator.estimate(&profile);
        display_calorie_target(target);

        let plan = select_meals(&catalog, target, &mut rng);
        display_meal_plan(&plan);

        if !prompt_yes_no("Plan another meal?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Print the active food catalog.
fn cmd_catalog(file: Option<&str>) -> Result<()> {
    let catalog = active_catalog(file)?;
    display_catalog(&catalog, "Food Catalog");
    Ok(())
}

/// Write the built-in catalog to a JSON file for editing.
fn cmd_export(path: &str) -> Result<()> {
    save_catalog(path, &builtin_catalog())?;
    println!("Wrote built-in catalog to {}", path);
    println!("Pass it back with --file {} after editing.", path);
    Ok(())
}
