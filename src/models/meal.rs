use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro totals for a meal or a set of meals.
///
/// Calories are estimated independently of the gram values, so they are not
/// expected to match `4 * protein + 4 * carbs + 9 * fats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    pub calories: f64,
}

impl MacroNutrients {
    /// All-zero totals, with fiber present.
    pub const fn zero() -> Self {
        Self {
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            fiber: Some(0.0),
            calories: 0.0,
        }
    }

    /// Every field multiplied by `factor`. Missing fiber counts as zero.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
            fiber: Some(self.fiber.unwrap_or(0.0) * factor),
            calories: self.calories * factor,
        }
    }

    /// Field-wise sum. Missing fiber counts as zero.
    pub fn sum_with(&self, other: &Self) -> Self {
        Self {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
            fiber: Some(self.fiber.unwrap_or(0.0) + other.fiber.unwrap_or(0.0)),
            calories: self.calories + other.calories,
        }
    }

    /// Sum of protein, carbs and fats in grams.
    #[inline]
    pub fn total_grams(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }
}

impl Default for MacroNutrients {
    fn default() -> Self {
        Self::zero()
    }
}

/// Grocery aisle an ingredient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Produce,
    Proteins,
    Grains,
    Dairy,
    Spices,
    Other,
}

impl IngredientCategory {
    /// Categories in shopping-list order.
    pub const SHOPPING_ORDER: [IngredientCategory; 6] = [
        IngredientCategory::Proteins,
        IngredientCategory::Produce,
        IngredientCategory::Grains,
        IngredientCategory::Dairy,
        IngredientCategory::Spices,
        IngredientCategory::Other,
    ];

    /// Position in the shopping list; lower sorts first.
    pub fn precedence(self) -> usize {
        match self {
            IngredientCategory::Proteins => 0,
            IngredientCategory::Produce => 1,
            IngredientCategory::Grains => 2,
            IngredientCategory::Dairy => 3,
            IngredientCategory::Spices => 4,
            IngredientCategory::Other => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IngredientCategory::Produce => "produce",
            IngredientCategory::Proteins => "proteins",
            IngredientCategory::Grains => "grains",
            IngredientCategory::Dairy => "dairy",
            IngredientCategory::Spices => "spices",
            IngredientCategory::Other => "other",
        }
    }

    /// Heading used when rendering a grocery list.
    pub fn label(self) -> &'static str {
        match self {
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Proteins => "Proteins",
            IngredientCategory::Grains => "Grains",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Spices => "Spices",
            IngredientCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_selected() -> bool {
    true
}

fn default_portion() -> f64 {
    1.0
}

/// A structured meal derived from a free-text description.
///
/// After creation only `selected` and `portion_multiplier` change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub macros: MacroNutrients,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default = "default_selected")]
    pub selected: bool,
    #[serde(default = "default_portion")]
    pub portion_multiplier: f64,
}

impl Meal {
    /// Macros for the chosen portion size.
    pub fn scaled_macros(&self) -> MacroNutrients {
        self.macros.scaled(self.portion_multiplier)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, P:{} C:{} F:{}, {} ingredients",
            self.id,
            self.name,
            self.macros.calories,
            self.macros.protein,
            self.macros.carbs,
            self.macros.fats,
            self.ingredients.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_macros() -> MacroNutrients {
        MacroNutrients {
            protein: 20.0,
            carbs: 30.0,
            fats: 10.0,
            fiber: None,
            calories: 300.0,
        }
    }

    #[test]
    fn test_scaled_treats_missing_fiber_as_zero() {
        let scaled = sample_macros().scaled(2.0);
        assert_eq!(scaled.protein, 40.0);
        assert_eq!(scaled.fiber, Some(0.0));
        assert_eq!(scaled.calories, 600.0);
    }

    #[test]
    fn test_sum_with_is_fieldwise() {
        let sum = MacroNutrients::zero().sum_with(&sample_macros());
        assert_eq!(sum.total_grams(), 60.0);
        assert_eq!(sum.calories, 300.0);
    }

    #[test]
    fn test_category_precedence_matches_shopping_order() {
        for (i, category) in IngredientCategory::SHOPPING_ORDER.iter().enumerate() {
            assert_eq!(category.precedence(), i);
        }
    }

    #[test]
    fn test_meal_defaults_when_deserialized() {
        let json = r#"{
            "id": "0-lunch-1",
            "name": "Salad",
            "type": "lunch",
            "macros": {"protein": 10, "carbs": 20, "fats": 5, "calories": 200},
            "ingredients": []
        }"#;

        let meal: Meal = serde_json::from_str(json).unwrap();
        assert!(meal.selected);
        assert_eq!(meal.portion_multiplier, 1.0);
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert!(meal.prep_time.is_none());
    }

    #[test]
    fn test_meal_serializes_camel_case() {
        let meal = Meal {
            id: "1-dinner-2".to_string(),
            name: "Stew".to_string(),
            meal_type: MealType::Dinner,
            description: None,
            macros: sample_macros(),
            ingredients: vec![],
            prep_time: Some(30),
            selected: false,
            portion_multiplier: 1.5,
        };

        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["type"], "dinner");
        assert_eq!(value["prepTime"], 30);
        assert_eq!(value["portionMultiplier"], 1.5);
        assert_eq!(value["selected"], false);
    }
}
