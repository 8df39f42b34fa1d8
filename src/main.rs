use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::info;

use meal_plan_rs::cli::{Cli, Command};
use meal_plan_rs::error::{PlanError, Result};
use meal_plan_rs::interface::{
    collect_preferences, display_day, display_grocery_list, display_weekly_summary, resolve_day,
};
use meal_plan_rs::logging::init_logging;
use meal_plan_rs::models::{MealPlanRequest, UserPreferences, WeeklyMealPlan};
use meal_plan_rs::planner::{RngEstimates, plan_from_response};
use meal_plan_rs::state::{
    PlanStateManager, export_grocery_csv, load_generation_response, load_weekly_plan,
    save_request, save_weekly_plan,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            day,
            goal,
            skip,
            portion,
            save,
        } => cmd_plan(&cli.file, cli.seed, day, goal, &skip, &portion, save),
        Command::Groceries { csv } => cmd_groceries(&cli.file, cli.seed, csv),
        Command::Request { out } => cmd_request(out),
    }
}

/// Load a week from either a raw generation response or a saved structured week.
fn load_plan(file_path: &str, seed: Option<u64>) -> Result<WeeklyMealPlan> {
    let path = Path::new(file_path);
    let response = load_generation_response(path)?;

    if response.meal_plan.is_none() && response.error.is_none() {
        return load_weekly_plan(path);
    }

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut estimates = RngEstimates::new(rng);
    plan_from_response(response, &mut estimates)
}

fn parse_portion(arg: &str) -> Result<(&str, f64)> {
    let (id, value) = arg.rsplit_once('=').ok_or_else(|| {
        PlanError::InvalidInput(format!("Expected <meal-id>=<multiplier>, got '{}'", arg))
    })?;
    let multiplier = value
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid portion multiplier '{}'", value)))?;
    Ok((id.trim(), multiplier))
}

/// Show the week (or one day) with nutrition totals.
fn cmd_plan(
    file_path: &str,
    seed: Option<u64>,
    day: Option<String>,
    goal: u32,
    skip: &[String],
    portion: &[String],
    save: Option<String>,
) -> Result<()> {
    if !Path::new(file_path).exists() {
        eprintln!("Meal plan file not found: {}", file_path);
        eprintln!("Save a generation response as meal_plan.json or pass --file.");
        return Ok(());
    }

    let mut manager = PlanStateManager::new(load_plan(file_path, seed)?);

    if manager.is_empty() {
        println!("The meal plan has no days with meals.");
        return Ok(());
    }

    for id in skip {
        manager.set_selected(id, false)?;
    }
    for arg in portion {
        let (id, multiplier) = parse_portion(arg)?;
        manager.set_portion(id, multiplier)?;
    }

    let goal_kcal = goal as f64;

    match day {
        Some(input) => {
            let name = resolve_day(&input, &manager.days())?;
            let daily = manager
                .day(&name)
                .ok_or_else(|| PlanError::DayNotFound(name.clone()))?;
            display_day(&name, daily, goal_kcal);
        }
        None => {
            println!("Loaded {} days", manager.len());
            for (name, daily) in manager.plan().iter() {
                display_day(name, daily, goal_kcal);
            }

            let prefs = UserPreferences {
                calories: goal,
                ..Default::default()
            };
            display_weekly_summary(manager.len(), &manager.weekly_totals(), &prefs);
        }
    }

    if let Some(out) = save {
        save_weekly_plan(&out, manager.plan())?;
        println!("Meal plan saved to {}.", out);
    }

    Ok(())
}

/// Show the grocery list for the whole week.
fn cmd_groceries(file_path: &str, seed: Option<u64>, csv: Option<String>) -> Result<()> {
    if !Path::new(file_path).exists() {
        eprintln!("Meal plan file not found: {}", file_path);
        return Ok(());
    }

    let manager = PlanStateManager::new(load_plan(file_path, seed)?);
    let items = manager.grocery_list();
    info!(items = items.len(), "aggregated grocery list");

    display_grocery_list(&items);

    if let Some(out) = csv {
        export_grocery_csv(&out, &items)?;
        println!("Grocery list written to {}.", out);
    }

    Ok(())
}

/// Build a generation request from prompts.
fn cmd_request(out: Option<String>) -> Result<()> {
    let prefs = collect_preferences()?;
    let request = MealPlanRequest::from_preferences(&prefs)?;

    println!();
    println!("{}", serde_json::to_string_pretty(&request)?);
    println!();
    println!("{}", prefs.nutrition_insight());

    if let Some(out) = out {
        save_request(&out, &request)?;
        println!("Request saved to {}.", out);
    }

    Ok(())
}
