use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{DailyMealPlan, GenerationResponse, MealType, RawDailyPlan, WeeklyMealPlan};
use crate::planner::parser::{EstimateSource, parse_meal};

/// Slot position of the first snack; breakfast, lunch and dinner take 0..=2.
const FIRST_SNACK_INDEX: usize = 3;

/// Parse every slot of a generated week into structured meals.
///
/// Days keep their response order. Days without any meal text are dropped,
/// and `day_index` counts the days that were kept. A repeated day name
/// replaces the earlier entry but still takes a fresh index, so meal ids
/// stay unique across the week.
pub fn build_weekly_plan<I>(days: I, source: &mut impl EstimateSource) -> WeeklyMealPlan
where
    I: IntoIterator<Item = (String, RawDailyPlan)>,
{
    let mut plan = WeeklyMealPlan::new();
    let mut next_day_index = 0;

    for (day, raw) in days {
        let Some(text) = raw.normalize() else {
            warn!(day = %day, "skipping day without meals");
            continue;
        };

        let day_index = next_day_index;
        next_day_index += 1;

        let daily = DailyMealPlan {
            breakfast: text
                .breakfast
                .as_deref()
                .map(|d| parse_meal(d, MealType::Breakfast, day_index, 0, source)),
            lunch: text
                .lunch
                .as_deref()
                .map(|d| parse_meal(d, MealType::Lunch, day_index, 1, source)),
            dinner: text
                .dinner
                .as_deref()
                .map(|d| parse_meal(d, MealType::Dinner, day_index, 2, source)),
            snacks: text
                .snacks
                .iter()
                .enumerate()
                .map(|(i, d)| parse_meal(d, MealType::Snack, day_index, FIRST_SNACK_INDEX + i, source))
                .collect(),
        };

        debug!(day = %day, meals = daily.meals().count(), "built day");
        if plan.insert(day.clone(), daily).is_some() {
            warn!(day = %day, "duplicate day in response, keeping the later one");
        }
    }

    plan
}

/// Build a structured week straight from a generation response.
pub fn plan_from_response(
    response: GenerationResponse,
    source: &mut impl EstimateSource,
) -> Result<WeeklyMealPlan> {
    let days = response.into_days()?;
    Ok(build_weekly_plan(days, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::parser::FixedEstimates;

    fn response(json: &str) -> GenerationResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_builds_days_in_response_order() {
        let json = r#"{"mealPlan": {
            "Tuesday": {"breakfast": "Oatmeal with banana", "dinner": "Salmon, rice"},
            "Monday": {"Lunch": "Chicken salad"}
        }}"#;

        let plan = plan_from_response(response(json), &mut FixedEstimates::default()).unwrap();
        assert_eq!(plan.day_names(), vec!["Tuesday", "Monday"]);

        let tuesday = plan.get("Tuesday").unwrap();
        assert_eq!(tuesday.breakfast.as_ref().unwrap().id, "0-breakfast-0");
        assert_eq!(tuesday.dinner.as_ref().unwrap().id, "0-dinner-2");
        assert_eq!(tuesday.dinner.as_ref().unwrap().name, "Salmon");
        assert!(tuesday.lunch.is_none());

        let monday = plan.get("Monday").unwrap();
        assert_eq!(monday.lunch.as_ref().unwrap().id, "1-lunch-1");
    }

    #[test]
    fn test_snacks_get_sequential_indexes() {
        let json = r#"{"mealPlan": {"Friday": {"snacks": ["Apple", "Yogurt with berries"]}}}"#;
        let plan = plan_from_response(response(json), &mut FixedEstimates::default()).unwrap();

        let ids: Vec<&str> = plan
            .get("Friday")
            .unwrap()
            .snacks
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["0-snack-3", "0-snack-4"]);
    }

    #[test]
    fn test_empty_days_dropped_without_shifting_ids() {
        let json = r#"{"mealPlan": {
            "Sunday": {},
            "Monday": {"dinner": "Tofu stir fry"}
        }}"#;
        let plan = plan_from_response(response(json), &mut FixedEstimates::default()).unwrap();

        assert_eq!(plan.day_names(), vec!["Monday"]);
        assert_eq!(
            plan.get("Monday").unwrap().dinner.as_ref().unwrap().id,
            "0-dinner-2"
        );
    }

    #[test]
    fn test_repeated_day_keeps_ids_unique() {
        let raw = |dinner: &str| RawDailyPlan {
            dinner: Some(dinner.to_string()),
            ..Default::default()
        };
        let days = vec![
            ("Monday".to_string(), raw("Beef")),
            ("Monday".to_string(), raw("Tofu")),
            ("Tuesday".to_string(), raw("Fish")),
        ];
        let plan = build_weekly_plan(days, &mut FixedEstimates::default());

        assert_eq!(plan.day_names(), vec!["Monday", "Tuesday"]);
        let monday = plan.get("Monday").unwrap().dinner.as_ref().unwrap();
        assert_eq!(monday.name, "Tofu");

        let ids: Vec<&str> = plan.all_meals().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1-dinner-2", "2-dinner-2"]);
    }

    #[test]
    fn test_error_response_propagates() {
        let json = r#"{"error": "Failed to generate meal plan."}"#;
        assert!(plan_from_response(response(json), &mut FixedEstimates::default()).is_err());
    }
}
