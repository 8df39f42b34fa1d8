use crate::models::{DailyMealPlan, MacroNutrients, Meal, WeeklyMealPlan};

/// Sum macros over a set of meals.
///
/// Absent and deselected meals are skipped; every other meal is scaled by
/// its portion multiplier. An empty input yields all zeros.
pub fn aggregate_macros<'a, I>(meals: I) -> MacroNutrients
where
    I: IntoIterator<Item = Option<&'a Meal>>,
{
    meals
        .into_iter()
        .flatten()
        .filter(|meal| meal.selected)
        .fold(MacroNutrients::zero(), |acc, meal| {
            acc.sum_with(&meal.scaled_macros())
        })
}

/// Totals for one day.
pub fn daily_totals(day: &DailyMealPlan) -> MacroNutrients {
    aggregate_macros(day.slots())
}

/// Totals for the whole week.
pub fn weekly_totals(plan: &WeeklyMealPlan) -> MacroNutrients {
    aggregate_macros(plan.all_meals().map(Some))
}

/// Share of protein, carbs and fats by grams.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroSplit {
    /// Fractions in [0, 1]; they sum to 1 unless all grams are zero.
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroSplit {
    pub fn from_macros(macros: &MacroNutrients) -> Self {
        let total = macros.total_grams();
        if total <= 0.0 {
            return Self::default();
        }

        Self {
            protein: macros.protein / total,
            carbs: macros.carbs / total,
            fats: macros.fats / total,
        }
    }

    /// Whole-number percentages for display.
    pub fn percentages(&self) -> (u32, u32, u32) {
        (
            (self.protein * 100.0).round() as u32,
            (self.carbs * 100.0).round() as u32,
            (self.fats * 100.0).round() as u32,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fats == 0.0
    }
}

/// Calories eaten against a daily goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieProgress {
    pub current: f64,
    pub goal: f64,
    /// Percent of goal, capped at 100.
    pub percentage: f64,
    pub is_over_goal: bool,
}

impl CalorieProgress {
    pub fn new(current: f64, goal: f64) -> Self {
        let percentage = if goal > 0.0 {
            (current / goal * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            current,
            goal,
            percentage,
            is_over_goal: current > goal,
        }
    }
}
