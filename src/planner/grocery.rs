use std::collections::HashMap;

use crate::models::{GroceryItem, IngredientCategory, WeeklyMealPlan};

/// Build the shopping list for a week.
///
/// Every present meal counts, whether or not it is selected and regardless of
/// portion size. Ingredients merge on lower-cased name plus unit; the first
/// occurrence supplies name, unit and category. The result is stably sorted
/// by category, so items within a category stay in first-seen order.
pub fn aggregate_grocery_list(plan: &WeeklyMealPlan) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for ingredient in plan.all_meals().flat_map(|meal| meal.ingredients.iter()) {
        let key = (ingredient.name.to_lowercase(), ingredient.unit.clone());
        match index.get(&key) {
            Some(&pos) => items[pos].total_amount += ingredient.amount,
            None => {
                index.insert(key, items.len());
                items.push(GroceryItem {
                    name: ingredient.name.clone(),
                    total_amount: ingredient.amount,
                    unit: ingredient.unit.clone(),
                    category: ingredient.category,
                    checked: false,
                });
            }
        }
    }

    // sort_by_key is stable
    items.sort_by_key(|item| item.category.precedence());
    items
}

/// Items grouped under their category, in shopping order. Empty groups are left out.
pub fn group_by_category(items: &[GroceryItem]) -> Vec<(IngredientCategory, Vec<&GroceryItem>)> {
    IngredientCategory::SHOPPING_ORDER
        .iter()
        .map(|&category| {
            let group: Vec<&GroceryItem> =
                items.iter().filter(|i| i.category == category).collect();
            (category, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Flip the checked state of every item named `name` (case-insensitive).
///
/// Returns false if nothing matched.
pub fn toggle_checked(items: &mut [GroceryItem], name: &str) -> bool {
    let needle = name.to_lowercase();
    let mut found = false;
    for item in items.iter_mut().filter(|i| i.name.to_lowercase() == needle) {
        item.checked = !item.checked;
        found = true;
    }
    found
}

/// Checked count, total count and percent done (0 for an empty list).
pub fn checked_progress(items: &[GroceryItem]) -> (usize, usize, f64) {
    let total = items.len();
    let checked = items.iter().filter(|i| i.checked).count();
    let percent = if total == 0 {
        0.0
    } else {
        checked as f64 / total as f64 * 100.0
    };
    (checked, total, percent)
}
