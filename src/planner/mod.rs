pub mod builder;
pub mod constants;
pub mod grocery;
pub mod macros;
pub mod parser;

pub use builder::{build_weekly_plan, plan_from_response};
pub use constants::*;
pub use grocery::{aggregate_grocery_list, checked_progress, group_by_category, toggle_checked};
pub use macros::{CalorieProgress, MacroSplit, aggregate_macros, daily_totals, weekly_totals};
pub use parser::{
    EstimateSource, FixedEstimates, MacroProfile, RngEstimates, estimate_macros,
    extract_ingredients, meal_name, parse_meal,
};
