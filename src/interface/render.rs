use crate::models::{DailyMealPlan, GroceryItem, MacroNutrients, Meal, UserPreferences};
use crate::planner::{CalorieProgress, MacroSplit, checked_progress, daily_totals, group_by_category};

/// Width of the text progress bar.
const BAR_WIDTH: usize = 30;

fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn display_meal(meal: &Meal) {
    let macros = meal.scaled_macros();
    let marker = if meal.selected { "x" } else { " " };

    println!(
        "  [{}] {:<9} {}{}",
        marker,
        meal.meal_type.label(),
        meal.name,
        if meal.portion_multiplier != 1.0 {
            format!("  ({}x)", meal.portion_multiplier)
        } else {
            String::new()
        }
    );
    println!(
        "      {:>4.0} kcal | P {:.0}g  C {:.0}g  F {:.0}g{}",
        macros.calories,
        macros.protein,
        macros.carbs,
        macros.fats,
        meal.prep_time
            .map(|t| format!(" | {} min", t))
            .unwrap_or_default()
    );
}

/// Print the macro split line for a set of totals.
pub fn display_macro_split(macros: &MacroNutrients) {
    let split = MacroSplit::from_macros(macros);
    if split.is_empty() {
        println!("Macros: (no selected meals)");
        return;
    }

    let (p, c, f) = split.percentages();
    println!(
        "Macros: Protein {:.0}g ({}%) | Carbs {:.0}g ({}%) | Fats {:.0}g ({}%) | Fiber {:.0}g",
        macros.protein,
        p,
        macros.carbs,
        c,
        macros.fats,
        f,
        macros.fiber.unwrap_or(0.0)
    );
}

/// Print the calorie bar against a daily goal.
pub fn display_calorie_progress(progress: &CalorieProgress) {
    let flag = if progress.is_over_goal { "  OVER GOAL" } else { "" };
    println!(
        "Calories: {} {:.0} / {:.0} kcal ({:.0}%){}",
        progress_bar(progress.percentage),
        progress.current,
        progress.goal,
        progress.percentage,
        flag
    );
}

/// Print one day's meals with totals.
pub fn display_day(name: &str, day: &DailyMealPlan, calorie_goal: f64) {
    println!();
    println!("=== {} ===", name);
    println!();

    if day.is_empty() {
        println!("  No meals planned");
        return;
    }

    for meal in day.meals() {
        display_meal(meal);
    }

    let totals = daily_totals(day);
    println!();
    display_calorie_progress(&CalorieProgress::new(totals.calories, calorie_goal));
    display_macro_split(&totals);
}

/// Print the weekly summary footer.
pub fn display_weekly_summary(days: usize, totals: &MacroNutrients, prefs: &UserPreferences) {
    println!();
    println!("--- Weekly Summary ---");
    println!("Days planned: {}", days);
    println!("Total calories: {:.0}", totals.calories);
    if days > 0 {
        println!("Average per day: {:.0} kcal", totals.calories / days as f64);
    }
    display_macro_split(totals);
    println!();
    println!("{}", prefs.nutrition_insight());
    println!();
}

/// Print the grocery list grouped by category.
pub fn display_grocery_list(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("Grocery list is empty (no ingredients recognised in the plan).");
        return;
    }

    let (checked, total, percent) = checked_progress(items);

    println!();
    println!("=== Grocery List ===");
    println!("{} of {} items checked {}", checked, total, progress_bar(percent));

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (category, group) in group_by_category(items) {
        println!();
        println!("{} ({})", category.label(), group.len());
        for item in group {
            let mark = if item.checked { "x" } else { " " };
            println!(
                "  [{}] {:<width$}  {} {}",
                mark,
                item.name,
                item.total_amount,
                item.unit,
                width = max_name_len
            );
        }
    }

    println!();
}
