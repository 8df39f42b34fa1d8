use rand::Rng;
use tracing::debug;

use crate::models::{Ingredient, MacroNutrients, Meal, MealType};
use crate::planner::constants::*;

/// Source of the random parts of a macro estimate.
///
/// Production code wraps an [`Rng`]; tests and reproducible runs use
/// [`FixedEstimates`].
pub trait EstimateSource {
    /// Calorie variance in the closed range [-50, 50].
    fn calorie_variance(&mut self) -> f64;

    /// Fiber offset in [0, 8) grams.
    fn fiber_offset(&mut self) -> f64;

    /// Prep time offset in [0, 30) minutes.
    fn prep_time_offset(&mut self) -> f64;
}

/// Uniform estimates drawn from a random number generator.
#[derive(Debug, Clone)]
pub struct RngEstimates<R> {
    rng: R,
}

impl<R: Rng> RngEstimates<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> EstimateSource for RngEstimates<R> {
    fn calorie_variance(&mut self) -> f64 {
        self.rng.gen_range(-CALORIE_VARIANCE..=CALORIE_VARIANCE)
    }

    fn fiber_offset(&mut self) -> f64 {
        self.rng.gen_range(0.0..FIBER_SPREAD)
    }

    fn prep_time_offset(&mut self) -> f64 {
        self.rng.gen_range(0.0..PREP_TIME_SPREAD)
    }
}

/// Constant estimates. Values are returned as given, without range checks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedEstimates {
    pub calorie_variance: f64,
    pub fiber_offset: f64,
    pub prep_time_offset: f64,
}

impl EstimateSource for FixedEstimates {
    fn calorie_variance(&mut self) -> f64 {
        self.calorie_variance
    }

    fn fiber_offset(&mut self) -> f64 {
        self.fiber_offset
    }

    fn prep_time_offset(&mut self) -> f64 {
        self.prep_time_offset
    }
}

/// Macro percentage split of calories chosen from the description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProfile {
    pub protein_percent: f64,
    pub carb_percent: f64,
    pub fat_percent: f64,
}

impl MacroProfile {
    /// Classify a description by its protein and carb keywords.
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        let high_protein = HIGH_PROTEIN_KEYWORDS.iter().any(|k| lower.contains(k));
        let high_carb = HIGH_CARB_KEYWORDS.iter().any(|k| lower.contains(k));

        let protein_percent = if high_protein {
            PROTEIN_PERCENT_HIGH
        } else {
            PROTEIN_PERCENT_DEFAULT
        };
        let carb_percent = if high_carb {
            CARB_PERCENT_HIGH
        } else {
            CARB_PERCENT_DEFAULT
        };

        Self {
            protein_percent,
            carb_percent,
            fat_percent: 100.0 - protein_percent - carb_percent,
        }
    }

    /// Gram values for a calorie total, each rounded on its own.
    pub fn grams(&self, calories: f64) -> (f64, f64, f64) {
        let protein = (calories * self.protein_percent / 100.0 / PROTEIN_KCAL_PER_GRAM).round();
        let carbs = (calories * self.carb_percent / 100.0 / CARB_KCAL_PER_GRAM).round();
        let fats = (calories * self.fat_percent / 100.0 / FAT_KCAL_PER_GRAM).round();
        (protein, carbs, fats)
    }
}

/// Upper-case the first character, leave the rest unchanged.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display name for a meal: the text before the first comma.
///
/// Falls back to the whole description when that text is empty.
pub fn meal_name(description: &str) -> String {
    match description.split(',').next() {
        Some(head) if !head.is_empty() => head.to_string(),
        _ => description.to_string(),
    }
}

/// Match dictionary keywords against a description.
///
/// Every keyword found as a substring contributes one ingredient, in
/// dictionary order. Overlapping keywords ("egg" inside "eggs") both match.
pub fn extract_ingredients(description: &str) -> Vec<Ingredient> {
    let lower = description.to_lowercase();

    INGREDIENT_DICTIONARY
        .iter()
        .filter(|d| lower.contains(d.keyword))
        .map(|d| Ingredient {
            name: capitalize(d.keyword),
            amount: d.amount,
            unit: d.unit.to_string(),
            category: d.category,
        })
        .collect()
}

/// Estimate macros for a description in a given slot.
pub fn estimate_macros(
    description: &str,
    meal_type: MealType,
    source: &mut impl EstimateSource,
) -> MacroNutrients {
    let calories = (base_calories(meal_type) + source.calorie_variance()).round();
    let (protein, carbs, fats) = MacroProfile::classify(description).grams(calories);
    let fiber = (FIBER_MIN + source.fiber_offset()).round();

    MacroNutrients {
        protein,
        carbs,
        fats,
        fiber: Some(fiber),
        calories,
    }
}

/// Turn one free-text meal description into a structured meal.
///
/// Never fails: unrecognised or empty text still yields a meal with a
/// slot-based macro estimate and no ingredients. Callers must pass distinct
/// `(day_index, meal_index)` pairs to get unique ids.
pub fn parse_meal(
    description: &str,
    meal_type: MealType,
    day_index: usize,
    meal_index: usize,
    source: &mut impl EstimateSource,
) -> Meal {
    let macros = estimate_macros(description, meal_type, source);
    let prep_time = (PREP_TIME_MIN + source.prep_time_offset()).round() as u32;

    let meal = Meal {
        id: format!("{}-{}-{}", day_index, meal_type, meal_index),
        name: meal_name(description),
        meal_type,
        description: Some(description.to_string()),
        macros,
        ingredients: extract_ingredients(description),
        prep_time: Some(prep_time),
        selected: true,
        portion_multiplier: 1.0,
    };

    debug!(meal = %meal.debug_string(), "parsed meal");
    meal
}
