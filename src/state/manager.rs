use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{DailyMealPlan, GroceryItem, MacroNutrients, Meal, WeeklyMealPlan};
use crate::planner::constants::{PORTION_MAX, PORTION_MIN, PORTION_STEP};
use crate::planner::{aggregate_grocery_list, daily_totals, weekly_totals};

/// Holds the current week and applies the user's edits to it.
///
/// Only `selected` and `portion_multiplier` are ever changed on a meal.
/// Totals and grocery lists are recomputed on every call.
pub struct PlanStateManager {
    plan: WeeklyMealPlan,
}

impl PlanStateManager {
    pub fn new(plan: WeeklyMealPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &WeeklyMealPlan {
        &self.plan
    }

    /// Swap in a freshly generated week.
    pub fn replace_plan(&mut self, plan: WeeklyMealPlan) -> WeeklyMealPlan {
        std::mem::replace(&mut self.plan, plan)
    }

    pub fn day(&self, name: &str) -> Option<&DailyMealPlan> {
        self.plan.get(name)
    }

    pub fn days(&self) -> Vec<&str> {
        self.plan.day_names()
    }

    /// Find a meal by id anywhere in the week.
    pub fn get_meal(&self, meal_id: &str) -> Option<&Meal> {
        self.plan.all_meals().find(|m| m.id == meal_id)
    }

    fn get_meal_mut(&mut self, meal_id: &str) -> Result<&mut Meal> {
        self.plan
            .iter_mut()
            .flat_map(|(_, day)| day.meals_mut())
            .find(|m| m.id == meal_id)
            .ok_or_else(|| PlanError::MealNotFound(meal_id.to_string()))
    }

    /// Flip whether a meal counts toward nutrition totals. Returns the new state.
    pub fn toggle_selected(&mut self, meal_id: &str) -> Result<bool> {
        let meal = self.get_meal_mut(meal_id)?;
        meal.selected = !meal.selected;
        debug!(meal = meal_id, selected = meal.selected, "toggled meal");
        Ok(meal.selected)
    }

    /// Include or exclude a meal from nutrition totals.
    pub fn set_selected(&mut self, meal_id: &str, selected: bool) -> Result<()> {
        let meal = self.get_meal_mut(meal_id)?;
        meal.selected = selected;
        debug!(meal = meal_id, selected, "set meal selection");
        Ok(())
    }

    /// Set a meal's portion multiplier; must lie in [0.5, 3].
    pub fn set_portion(&mut self, meal_id: &str, multiplier: f64) -> Result<()> {
        if !(PORTION_MIN..=PORTION_MAX).contains(&multiplier) {
            return Err(PlanError::InvalidInput(format!(
                "Portion multiplier must be between {} and {}, got {}",
                PORTION_MIN, PORTION_MAX, multiplier
            )));
        }

        let meal = self.get_meal_mut(meal_id)?;
        meal.portion_multiplier = multiplier;
        debug!(meal = meal_id, portion = multiplier, "set portion");
        Ok(())
    }

    /// Add half a portion, up to the maximum. Returns the new multiplier.
    pub fn increase_portion(&mut self, meal_id: &str) -> Result<f64> {
        let meal = self.get_meal_mut(meal_id)?;
        meal.portion_multiplier = (meal.portion_multiplier + PORTION_STEP).min(PORTION_MAX);
        Ok(meal.portion_multiplier)
    }

    /// Remove half a portion, down to the minimum. Returns the new multiplier.
    pub fn decrease_portion(&mut self, meal_id: &str) -> Result<f64> {
        let meal = self.get_meal_mut(meal_id)?;
        meal.portion_multiplier = (meal.portion_multiplier - PORTION_STEP).max(PORTION_MIN);
        Ok(meal.portion_multiplier)
    }

    pub fn totals_for_day(&self, name: &str) -> Result<MacroNutrients> {
        self.plan
            .get(name)
            .map(daily_totals)
            .ok_or_else(|| PlanError::DayNotFound(name.to_string()))
    }

    pub fn weekly_totals(&self) -> MacroNutrients {
        weekly_totals(&self.plan)
    }

    pub fn grocery_list(&self) -> Vec<GroceryItem> {
        aggregate_grocery_list(&self.plan)
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }
}
