use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::{
    CALORIE_GOAL_MAX, CALORIE_GOAL_MIN, CALORIE_GOAL_STEP, DEFAULT_CALORIE_GOAL, PLAN_DAYS,
};

/// What the user asked for when generating a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub diet_type: String,
    pub calories: u32,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub snacks: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_high_protein: bool,
    #[serde(default)]
    pub is_low_carb: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            diet_type: String::new(),
            calories: DEFAULT_CALORIE_GOAL,
            allergies: String::new(),
            cuisine: String::new(),
            snacks: false,
            is_vegetarian: false,
            is_high_protein: false,
            is_low_carb: false,
        }
    }
}

impl UserPreferences {
    /// Calorie goal must sit on the slider: 1200..=4000 in steps of 50.
    pub fn validate(&self) -> Result<()> {
        if !(CALORIE_GOAL_MIN..=CALORIE_GOAL_MAX).contains(&self.calories) {
            return Err(PlanError::InvalidInput(format!(
                "Daily calories must be between {} and {}, got {}",
                CALORIE_GOAL_MIN, CALORIE_GOAL_MAX, self.calories
            )));
        }
        if self.calories % CALORIE_GOAL_STEP != 0 {
            return Err(PlanError::InvalidInput(format!(
                "Daily calories must be a multiple of {}, got {}",
                CALORIE_GOAL_STEP, self.calories
            )));
        }
        Ok(())
    }

    /// Diet label sent to the generator.
    ///
    /// Toggles win over the free-text diet type; "Balanced" if neither is set.
    pub fn effective_diet_type(&self) -> String {
        let mut toggles = Vec::new();
        if self.is_vegetarian {
            toggles.push("Vegetarian");
        }
        if self.is_high_protein {
            toggles.push("High-Protein");
        }
        if self.is_low_carb {
            toggles.push("Low-Carb");
        }

        if !toggles.is_empty() {
            toggles.join(", ")
        } else if !self.diet_type.trim().is_empty() {
            self.diet_type.trim().to_string()
        } else {
            "Balanced".to_string()
        }
    }

    /// One-line summary shown under a generated plan.
    pub fn nutrition_insight(&self) -> &'static str {
        if self.is_high_protein {
            "High protein focus achieved! Great for muscle building and recovery."
        } else if self.is_low_carb {
            "Low carb plan optimized for steady energy levels."
        } else if self.is_vegetarian {
            "Plant-based nutrition with complete protein sources."
        } else {
            "Balanced nutrition plan with optimal macro distribution."
        }
    }
}

/// Request body for the meal plan generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub diet_type: String,
    pub calories: u32,
    pub allergies: String,
    pub cuisine: String,
    pub snacks: bool,
    pub days: u32,
}

impl MealPlanRequest {
    pub fn from_preferences(prefs: &UserPreferences) -> Result<Self> {
        prefs.validate()?;
        Ok(Self {
            diet_type: prefs.effective_diet_type(),
            calories: prefs.calories,
            allergies: prefs.allergies.trim().to_string(),
            cuisine: prefs.cuisine.trim().to_string(),
            snacks: prefs.snacks,
            days: PLAN_DAYS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_valid() {
        assert!(UserPreferences::default().validate().is_ok());
    }

    #[test]
    fn test_calorie_range_and_step() {
        let mut prefs = UserPreferences::default();

        prefs.calories = 1150;
        assert!(prefs.validate().is_err());

        prefs.calories = 4050;
        assert!(prefs.validate().is_err());

        prefs.calories = 2025;
        assert!(prefs.validate().is_err());

        prefs.calories = 1200;
        assert!(prefs.validate().is_ok());
        prefs.calories = 4000;
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_diet_type_toggles_joined_in_order() {
        let prefs = UserPreferences {
            diet_type: "Keto".to_string(),
            is_low_carb: true,
            is_vegetarian: true,
            ..Default::default()
        };
        assert_eq!(prefs.effective_diet_type(), "Vegetarian, Low-Carb");
    }

    #[test]
    fn test_diet_type_fallbacks() {
        let mut prefs = UserPreferences::default();
        assert_eq!(prefs.effective_diet_type(), "Balanced");

        prefs.diet_type = "Mediterranean".to_string();
        assert_eq!(prefs.effective_diet_type(), "Mediterranean");
    }

    #[test]
    fn test_insight_priority() {
        let prefs = UserPreferences {
            is_vegetarian: true,
            is_low_carb: true,
            ..Default::default()
        };
        assert!(prefs.nutrition_insight().starts_with("Low carb"));
    }

    #[test]
    fn test_request_serializes_for_endpoint() {
        let prefs = UserPreferences {
            calories: 1800,
            cuisine: " Italian ".to_string(),
            snacks: true,
            ..Default::default()
        };
        let request = MealPlanRequest::from_preferences(&prefs).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["dietType"], "Balanced");
        assert_eq!(value["calories"], 1800);
        assert_eq!(value["cuisine"], "Italian");
        assert_eq!(value["snacks"], true);
        assert_eq!(value["days"], 7);
    }
}
