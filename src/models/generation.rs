use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Snack text from the generation service: a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnackText {
    One(String),
    Many(Vec<String>),
}

impl SnackText {
    /// Non-blank snack descriptions in order.
    pub fn descriptions(&self) -> Vec<&str> {
        match self {
            SnackText::One(text) => vec![text.as_str()],
            SnackText::Many(texts) => texts.iter().map(String::as_str).collect(),
        }
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .collect()
    }
}

/// One day of meal text as returned by the generation service.
///
/// The service is inconsistent about slot key casing, so both forms are
/// accepted. Lower-case keys take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDailyPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snacks: Option<SnackText>,
    #[serde(rename = "Breakfast", default, skip_serializing_if = "Option::is_none")]
    pub breakfast_alt: Option<String>,
    #[serde(rename = "Lunch", default, skip_serializing_if = "Option::is_none")]
    pub lunch_alt: Option<String>,
    #[serde(rename = "Dinner", default, skip_serializing_if = "Option::is_none")]
    pub dinner_alt: Option<String>,
    #[serde(rename = "Snacks", default, skip_serializing_if = "Option::is_none")]
    pub snacks_alt: Option<SnackText>,
}

/// Meal text for one day after slot-key normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayText {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub snacks: Vec<String>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

impl RawDailyPlan {
    /// Merge the two key casings. Returns `None` if the day has no meal text.
    pub fn normalize(self) -> Option<DayText> {
        let breakfast = non_blank(self.breakfast.or(self.breakfast_alt));
        let lunch = non_blank(self.lunch.or(self.lunch_alt));
        let dinner = non_blank(self.dinner.or(self.dinner_alt));
        let snacks: Vec<String> = self
            .snacks
            .or(self.snacks_alt)
            .map(|s| s.descriptions().into_iter().map(str::to_string).collect())
            .unwrap_or_default();

        if breakfast.is_none() && lunch.is_none() && dinner.is_none() && snacks.is_empty() {
            return None;
        }

        Some(DayText {
            breakfast,
            lunch,
            dinner,
            snacks,
        })
    }
}

/// Response body of the meal plan generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Day entries in response order.
    ///
    /// Fails with the service's own error message when it reported one, or
    /// when the response carries no plan.
    pub fn into_days(self) -> Result<Vec<(String, RawDailyPlan)>> {
        if let Some(message) = self.error {
            return Err(PlanError::Generation(message));
        }

        let plan = self.meal_plan.ok_or(PlanError::MissingPlan)?;
        plan.into_iter()
            .map(|(day, value)| Ok((day, serde_json::from_value(value)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_keys_take_precedence() {
        let json = r#"{"breakfast": "Oats", "Breakfast": "Toast", "Lunch": "Soup"}"#;
        let raw: RawDailyPlan = serde_json::from_str(json).unwrap();
        let day = raw.normalize().unwrap();

        assert_eq!(day.breakfast.as_deref(), Some("Oats"));
        assert_eq!(day.lunch.as_deref(), Some("Soup"));
        assert!(day.dinner.is_none());
    }

    #[test]
    fn test_empty_day_normalizes_to_none() {
        let json = r#"{"breakfast": "", "snacks": "  "}"#;
        let raw: RawDailyPlan = serde_json::from_str(json).unwrap();
        assert!(raw.normalize().is_none());
    }

    #[test]
    fn test_snacks_accept_string_or_list() {
        let one: RawDailyPlan = serde_json::from_str(r#"{"snacks": "Apple"}"#).unwrap();
        assert_eq!(one.normalize().unwrap().snacks, vec!["Apple"]);

        let many: RawDailyPlan =
            serde_json::from_str(r#"{"Snacks": ["Apple", "", "Yogurt"]}"#).unwrap();
        assert_eq!(many.normalize().unwrap().snacks, vec!["Apple", "Yogurt"]);
    }

    #[test]
    fn test_service_error_is_surfaced() {
        let response = GenerationResponse {
            meal_plan: None,
            error: Some("quota exceeded".to_string()),
        };
        match response.into_days() {
            Err(PlanError::Generation(message)) => assert_eq!(message, "quota exceeded"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_plan_is_an_error() {
        let response = GenerationResponse::default();
        assert!(matches!(response.into_days(), Err(PlanError::MissingPlan)));
    }
}
