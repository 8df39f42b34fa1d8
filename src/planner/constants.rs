use crate::models::{IngredientCategory, MealType};

// ─────────────────────────────────────────────────────────────────────────────
// Macro estimation
// ─────────────────────────────────────────────────────────────────────────────

/// Base calories per slot before variance.
pub const BREAKFAST_BASE_CALORIES: f64 = 400.0;
pub const LUNCH_BASE_CALORIES: f64 = 550.0;
pub const DINNER_BASE_CALORIES: f64 = 650.0;
pub const SNACK_BASE_CALORIES: f64 = 200.0;

/// Calorie variance is drawn from the closed range [-50, 50].
pub const CALORIE_VARIANCE: f64 = 50.0;

/// Keywords that mark a description as high-protein.
pub const HIGH_PROTEIN_KEYWORDS: [&str; 5] = ["chicken", "fish", "egg", "beef", "tofu"];

/// Keywords that mark a description as high-carb.
pub const HIGH_CARB_KEYWORDS: [&str; 4] = ["rice", "pasta", "bread", "oat"];

/// Percent of calories from protein.
pub const PROTEIN_PERCENT_HIGH: f64 = 35.0;
pub const PROTEIN_PERCENT_DEFAULT: f64 = 25.0;

/// Percent of calories from carbs. Fat takes the remainder.
pub const CARB_PERCENT_HIGH: f64 = 50.0;
pub const CARB_PERCENT_DEFAULT: f64 = 40.0;

/// Energy density in kcal per gram.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Fiber estimate: FIBER_MIN + uniform[0, FIBER_SPREAD), rounded.
pub const FIBER_MIN: f64 = 3.0;
pub const FIBER_SPREAD: f64 = 8.0;

/// Prep time estimate in minutes: PREP_TIME_MIN + uniform[0, PREP_TIME_SPREAD), rounded.
pub const PREP_TIME_MIN: f64 = 15.0;
pub const PREP_TIME_SPREAD: f64 = 30.0;

/// Base calories for a meal slot.
pub fn base_calories(meal_type: MealType) -> f64 {
    match meal_type {
        MealType::Breakfast => BREAKFAST_BASE_CALORIES,
        MealType::Lunch => LUNCH_BASE_CALORIES,
        MealType::Dinner => DINNER_BASE_CALORIES,
        MealType::Snack => SNACK_BASE_CALORIES,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ingredient dictionary
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed quantity attached to a recognised ingredient keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientDefault {
    pub keyword: &'static str,
    pub unit: &'static str,
    pub amount: f64,
    pub category: IngredientCategory,
}

const fn entry(
    keyword: &'static str,
    unit: &'static str,
    amount: f64,
    category: IngredientCategory,
) -> IngredientDefault {
    IngredientDefault {
        keyword,
        unit,
        amount,
        category,
    }
}

/// Known ingredient keywords. Order here is the order ingredients are emitted.
pub const INGREDIENT_DICTIONARY: [IngredientDefault; 29] = [
    entry("chicken", "g", 150.0, IngredientCategory::Proteins),
    entry("fish", "g", 150.0, IngredientCategory::Proteins),
    entry("salmon", "g", 150.0, IngredientCategory::Proteins),
    entry("beef", "g", 150.0, IngredientCategory::Proteins),
    entry("tofu", "g", 200.0, IngredientCategory::Proteins),
    entry("egg", "pcs", 2.0, IngredientCategory::Proteins),
    entry("eggs", "pcs", 2.0, IngredientCategory::Proteins),
    entry("rice", "g", 100.0, IngredientCategory::Grains),
    entry("pasta", "g", 100.0, IngredientCategory::Grains),
    entry("bread", "slices", 2.0, IngredientCategory::Grains),
    entry("oats", "g", 50.0, IngredientCategory::Grains),
    entry("quinoa", "g", 80.0, IngredientCategory::Grains),
    entry("milk", "ml", 200.0, IngredientCategory::Dairy),
    entry("cheese", "g", 30.0, IngredientCategory::Dairy),
    entry("yogurt", "g", 150.0, IngredientCategory::Dairy),
    entry("spinach", "g", 100.0, IngredientCategory::Produce),
    entry("broccoli", "g", 150.0, IngredientCategory::Produce),
    entry("tomato", "pcs", 1.0, IngredientCategory::Produce),
    entry("tomatoes", "pcs", 2.0, IngredientCategory::Produce),
    entry("onion", "pcs", 1.0, IngredientCategory::Produce),
    entry("garlic", "cloves", 2.0, IngredientCategory::Spices),
    entry("olive", "tbsp", 2.0, IngredientCategory::Other),
    entry("avocado", "pcs", 1.0, IngredientCategory::Produce),
    entry("banana", "pcs", 1.0, IngredientCategory::Produce),
    entry("apple", "pcs", 1.0, IngredientCategory::Produce),
    entry("berries", "g", 100.0, IngredientCategory::Produce),
    entry("lemon", "pcs", 1.0, IngredientCategory::Produce),
    entry("pepper", "tsp", 1.0, IngredientCategory::Spices),
    entry("salt", "tsp", 1.0, IngredientCategory::Spices),
];

// ─────────────────────────────────────────────────────────────────────────────
// Portions and goals
// ─────────────────────────────────────────────────────────────────────────────

/// Allowed portion multiplier range and the step used by +/- controls.
pub const PORTION_MIN: f64 = 0.5;
pub const PORTION_MAX: f64 = 3.0;
pub const PORTION_STEP: f64 = 0.5;

/// Daily calorie goal slider.
pub const CALORIE_GOAL_MIN: u32 = 1200;
pub const CALORIE_GOAL_MAX: u32 = 4000;
pub const CALORIE_GOAL_STEP: u32 = 50;
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;

/// Days requested from the generator.
pub const PLAN_DAYS: u32 = 7;

/// Minimum Jaro-Winkler similarity for a fuzzy day-name match.
pub const DAY_MATCH_THRESHOLD: f64 = 0.7;
