use clap::{Parser, Subcommand};

use crate::planner::constants::DEFAULT_CALORIE_GOAL;

/// meal_plan: turn a generated weekly meal plan into meals, macros and a grocery list.
#[derive(Parser, Debug)]
#[command(name = "meal_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the generation response JSON file.
    #[arg(short, long, default_value = "meal_plan.json", env = "MEAL_PLAN_FILE", global = true)]
    pub file: String,

    /// Seed for the macro estimates. Random when omitted.
    #[arg(long, env = "MEAL_PLAN_SEED", global = true)]
    pub seed: Option<u64>,

    /// Log level for diagnostics on stderr.
    #[arg(long, default_value = "warn", env = "MEAL_PLAN_LOG", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the weekly plan, or a single day.
    Plan {
        /// Day to show (typos are matched to the closest day).
        #[arg(short, long)]
        day: Option<String>,

        /// Daily calorie goal used for the progress bar.
        #[arg(short, long, default_value_t = DEFAULT_CALORIE_GOAL)]
        goal: u32,

        /// Leave a meal out of the totals, by meal id (repeatable).
        #[arg(long)]
        skip: Vec<String>,

        /// Set a meal's portion as `<meal-id>=<multiplier>` (repeatable).
        #[arg(long)]
        portion: Vec<String>,

        /// Save the structured week to this JSON file.
        #[arg(long)]
        save: Option<String>,
    },

    /// Show the aggregated grocery list.
    Groceries {
        /// Also write the list to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Build a generation request from interactive prompts.
    Request {
        /// Write the request JSON to this file.
        #[arg(short, long)]
        out: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            day: None,
            goal: DEFAULT_CALORIE_GOAL,
            skip: Vec::new(),
            portion: Vec::new(),
            save: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["meal_plan"]).unwrap();
        assert_eq!(cli.file, "meal_plan.json");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_plan_with_day_and_seed() {
        let cli =
            Cli::try_parse_from(["meal_plan", "--seed", "7", "plan", "--day", "monday"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Some(Command::Plan { day, goal, .. }) => {
                assert_eq!(day.as_deref(), Some("monday"));
                assert_eq!(goal, DEFAULT_CALORIE_GOAL);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_repeatable_meal_edits() {
        let cli = Cli::try_parse_from([
            "meal_plan", "plan", "--skip", "0-snack-3", "--skip", "1-lunch-1", "--portion",
            "0-dinner-2=1.5",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Plan { skip, portion, .. }) => {
                assert_eq!(skip, vec!["0-snack-3", "1-lunch-1"]);
                assert_eq!(portion, vec!["0-dinner-2=1.5"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
