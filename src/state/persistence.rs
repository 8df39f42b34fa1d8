use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{GenerationResponse, GroceryItem, MealPlanRequest, WeeklyMealPlan};

/// Load a saved response from the meal plan generation endpoint.
pub fn load_generation_response<P: AsRef<Path>>(path: P) -> Result<GenerationResponse> {
    let content = fs::read_to_string(path.as_ref())?;
    let response: GenerationResponse = serde_json::from_str(&content)?;
    info!(path = %path.as_ref().display(), "loaded generation response");
    Ok(response)
}

/// Load a structured week written by [`save_weekly_plan`].
pub fn load_weekly_plan<P: AsRef<Path>>(path: P) -> Result<WeeklyMealPlan> {
    let content = fs::read_to_string(path.as_ref())?;
    let plan: WeeklyMealPlan = serde_json::from_str(&content)?;
    info!(path = %path.as_ref().display(), days = plan.len(), "loaded weekly plan");
    Ok(plan)
}

/// Save a structured week as pretty JSON.
pub fn save_weekly_plan<P: AsRef<Path>>(path: P, plan: &WeeklyMealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved weekly plan");
    Ok(())
}

/// Save a generation request body as pretty JSON.
pub fn save_request<P: AsRef<Path>>(path: P, request: &MealPlanRequest) -> Result<()> {
    let json = serde_json::to_string_pretty(request)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved generation request");
    Ok(())
}

/// Write the grocery list as CSV, one row per item in list order.
pub fn export_grocery_csv<P: AsRef<Path>>(path: P, items: &[GroceryItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["category", "name", "amount", "unit", "checked"])?;
    for item in items {
        wtr.write_record([
            item.category.as_str().to_string(),
            item.name.clone(),
            item.total_amount.to_string(),
            item.unit.clone(),
            item.checked.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.as_ref().display(), items = items.len(), "exported grocery list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyMealPlan, IngredientCategory, MealType, UserPreferences};
    use crate::planner::{FixedEstimates, parse_meal};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_generation_response() {
        let json = r#"{"mealPlan": {"Monday": {"Breakfast": "Greek yogurt with berries"}}}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let response = load_generation_response(file.path()).unwrap();
        let days = response.into_days().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].0, "Monday");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_generation_response(file.path()).is_err());
    }

    #[test]
    fn test_export_grocery_csv() {
        let items = vec![GroceryItem {
            name: "Chicken".to_string(),
            total_amount: 300.0,
            unit: "g".to_string(),
            category: IngredientCategory::Proteins,
            checked: false,
        }];

        let file = NamedTempFile::new().unwrap();
        export_grocery_csv(file.path(), &items).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "category,name,amount,unit,checked");
        assert_eq!(lines[1], "proteins,Chicken,300,g,false");
    }

    #[test]
    fn test_weekly_plan_round_trip() {
        let mut plan = WeeklyMealPlan::new();
        plan.insert(
            "Friday",
            DailyMealPlan {
                dinner: Some(parse_meal(
                    "Tofu stir fry, rice",
                    MealType::Dinner,
                    0,
                    2,
                    &mut FixedEstimates::default(),
                )),
                ..Default::default()
            },
        );

        let file = NamedTempFile::new().unwrap();
        save_weekly_plan(file.path(), &plan).unwrap();
        let loaded = load_weekly_plan(file.path()).unwrap();
        assert_eq!(loaded, plan);

        // A saved week carries neither `mealPlan` nor `error`.
        let as_response = load_generation_response(file.path()).unwrap();
        assert!(as_response.meal_plan.is_none());
        assert!(as_response.error.is_none());
    }

    #[test]
    fn test_save_request() {
        let request = MealPlanRequest::from_preferences(&UserPreferences::default()).unwrap();

        let file = NamedTempFile::new().unwrap();
        save_request(file.path(), &request).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["dietType"], "Balanced");
        assert_eq!(value["days"], 7);
    }
}
