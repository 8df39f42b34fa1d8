pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{GroceryItem, MacroNutrients, Meal, WeeklyMealPlan};
