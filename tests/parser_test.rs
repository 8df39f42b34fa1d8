use assert_float_eq::assert_float_absolute_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_plan_rs::models::{IngredientCategory, MealType};
use meal_plan_rs::planner::{FixedEstimates, RngEstimates, parse_meal};

const GRILLED_CHICKEN: &str = "Grilled chicken with rice and broccoli, olive oil";

#[test]
fn test_dictionary_ingredients_in_order() {
    let meal = parse_meal(GRILLED_CHICKEN, MealType::Dinner, 0, 0, &mut FixedEstimates::default());

    let found: Vec<(&str, f64, &str, IngredientCategory)> = meal
        .ingredients
        .iter()
        .map(|i| (i.name.as_str(), i.amount, i.unit.as_str(), i.category))
        .collect();

    assert_eq!(
        found,
        vec![
            ("Chicken", 150.0, "g", IngredientCategory::Proteins),
            ("Rice", 100.0, "g", IngredientCategory::Grains),
            ("Broccoli", 150.0, "g", IngredientCategory::Produce),
            ("Olive", 2.0, "tbsp", IngredientCategory::Other),
        ]
    );
    assert_eq!(meal.name, "Grilled chicken with rice and broccoli");
    assert_eq!(meal.id, "0-dinner-0");
}

#[test]
fn test_high_protein_high_carb_lunch_macros() {
    let meal = parse_meal(GRILLED_CHICKEN, MealType::Lunch, 0, 1, &mut FixedEstimates::default());

    assert_float_absolute_eq!(meal.macros.calories, 550.0, 1e-9);
    assert_float_absolute_eq!(meal.macros.protein, 48.0, 1e-9);
    assert_float_absolute_eq!(meal.macros.carbs, 69.0, 1e-9);
    assert_float_absolute_eq!(meal.macros.fats, 9.0, 1e-9);
    assert_eq!(meal.macros.fiber, Some(3.0));
    assert_eq!(meal.prep_time, Some(15));
}

#[test]
fn test_calories_stay_within_variance_band() {
    let mut estimates = RngEstimates::new(StdRng::seed_from_u64(42));

    for i in 0..200 {
        let meal = parse_meal("Toast", MealType::Breakfast, 0, i, &mut estimates);
        assert!((350.0..=450.0).contains(&meal.macros.calories));

        let fiber = meal.macros.fiber.unwrap_or_default();
        assert!((3.0..=11.0).contains(&fiber));

        let prep = meal.prep_time.unwrap_or_default();
        assert!((15..=45).contains(&prep));
    }
}

#[test]
fn test_same_seed_gives_same_meal() {
    let a = parse_meal(
        GRILLED_CHICKEN,
        MealType::Dinner,
        2,
        2,
        &mut RngEstimates::new(StdRng::seed_from_u64(7)),
    );
    let b = parse_meal(
        GRILLED_CHICKEN,
        MealType::Dinner,
        2,
        2,
        &mut RngEstimates::new(StdRng::seed_from_u64(7)),
    );
    assert_eq!(a, b);
}

#[test]
fn test_ingredients_do_not_depend_on_estimates() {
    let fixed = parse_meal(GRILLED_CHICKEN, MealType::Snack, 1, 3, &mut FixedEstimates::default());
    let random = parse_meal(
        GRILLED_CHICKEN,
        MealType::Snack,
        1,
        3,
        &mut RngEstimates::new(StdRng::seed_from_u64(99)),
    );

    assert_eq!(fixed.ingredients, random.ingredients);
    assert_eq!(fixed.name, random.name);
    assert_eq!(fixed.id, random.id);
}

#[test]
fn test_unrecognised_text_still_yields_a_meal() {
    let meal = parse_meal("", MealType::Snack, 0, 3, &mut FixedEstimates::default());

    assert!(meal.ingredients.is_empty());
    assert_eq!(meal.name, "");
    assert_float_absolute_eq!(meal.macros.calories, 200.0, 1e-9);
    assert!(meal.selected);
    assert_float_absolute_eq!(meal.portion_multiplier, 1.0, 1e-9);
}
