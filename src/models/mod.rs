pub mod generation;
pub mod meal;
pub mod plan;
pub mod preferences;

pub use generation::{DayText, GenerationResponse, RawDailyPlan, SnackText};
pub use meal::{Ingredient, IngredientCategory, MacroNutrients, Meal, MealType};
pub use plan::{DailyMealPlan, GroceryItem, WeeklyMealPlan};
pub use preferences::{MealPlanRequest, UserPreferences};
