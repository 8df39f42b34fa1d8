use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::UserPreferences;
use crate::planner::constants::{
    CALORIE_GOAL_MAX, CALORIE_GOAL_MIN, DAY_MATCH_THRESHOLD, DEFAULT_CALORIE_GOAL,
};

/// Outcome of matching user input against known day names.
#[derive(Debug, Clone, PartialEq)]
pub enum DayMatch {
    Exact(String),
    /// Fuzzy candidates, best first.
    Fuzzy(Vec<String>),
    NoMatch,
}

/// Match a day name: exact case-insensitive first, then Jaro-Winkler.
pub fn match_day(input: &str, days: &[&str]) -> DayMatch {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return DayMatch::NoMatch;
    }

    if let Some(day) = days.iter().find(|d| d.to_lowercase() == input) {
        return DayMatch::Exact(day.to_string());
    }

    let mut candidates: Vec<(&str, f64)> = days
        .iter()
        .map(|d| (*d, jaro_winkler(&d.to_lowercase(), &input)))
        .filter(|(_, score)| *score > DAY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        DayMatch::NoMatch
    } else {
        DayMatch::Fuzzy(candidates.into_iter().map(|(d, _)| d.to_string()).collect())
    }
}

/// Resolve a day name, asking the user when the match is ambiguous.
pub fn resolve_day(input: &str, days: &[&str]) -> Result<String> {
    match match_day(input, days) {
        DayMatch::Exact(day) => Ok(day),
        DayMatch::NoMatch => Err(PlanError::DayNotFound(input.to_string())),
        DayMatch::Fuzzy(candidates) if candidates.len() == 1 => {
            let day = &candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", day))
                .default(true)
                .interact()?;

            if confirm {
                Ok(day.clone())
            } else {
                Err(PlanError::DayNotFound(input.to_string()))
            }
        }
        DayMatch::Fuzzy(candidates) => {
            let options: Vec<String> = candidates.into_iter().take(5).collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which day did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            options
                .get(selection)
                .cloned()
                .ok_or_else(|| PlanError::DayNotFound(input.to_string()))
        }
    }
}

/// Prompt for the daily calorie goal.
pub fn prompt_calorie_goal() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Daily calorie goal ({}-{}, steps of 50)",
            CALORIE_GOAL_MIN, CALORIE_GOAL_MAX
        ))
        .default(DEFAULT_CALORIE_GOAL.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

fn prompt_text(prompt: &str, placeholder: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} (e.g., {})", prompt, placeholder))
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all preferences for a generation request.
pub fn collect_preferences() -> Result<UserPreferences> {
    let is_vegetarian = prompt_yes_no("Vegetarian?", false)?;
    let is_high_protein = prompt_yes_no("High protein?", false)?;
    let is_low_carb = prompt_yes_no("Low carb?", false)?;

    let diet_type = if is_vegetarian || is_high_protein || is_low_carb {
        String::new()
    } else {
        prompt_text("Diet type", "Balanced, Mediterranean")?
    };

    let calories = prompt_calorie_goal()?;
    let cuisine = prompt_text("Preferred cuisine", "Italian, Asian, Mediterranean")?;
    let allergies = prompt_text("Allergies / restrictions", "Nuts, Dairy, Gluten")?;
    let snacks = prompt_yes_no("Include snacks?", false)?;

    let prefs = UserPreferences {
        diet_type,
        calories,
        allergies,
        cuisine,
        snacks,
        is_vegetarian,
        is_high_protein,
        is_low_carb,
    };
    prefs.validate()?;
    Ok(prefs)
}
