use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::meal::{IngredientCategory, Meal};

/// Meals for one day: up to one breakfast, lunch and dinner plus any snacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<Meal>,
}

impl DailyMealPlan {
    /// Present meals in slot order: breakfast, lunch, dinner, then snacks.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }

    pub fn meals_mut(&mut self) -> impl Iterator<Item = &mut Meal> {
        self.breakfast
            .iter_mut()
            .chain(self.lunch.iter_mut())
            .chain(self.dinner.iter_mut())
            .chain(self.snacks.iter_mut())
    }

    /// Every slot as an optional meal, suitable for macro aggregation.
    pub fn slots(&self) -> Vec<Option<&Meal>> {
        let mut slots = vec![
            self.breakfast.as_ref(),
            self.lunch.as_ref(),
            self.dinner.as_ref(),
        ];
        slots.extend(self.snacks.iter().map(Some));
        slots
    }

    pub fn is_empty(&self) -> bool {
        self.meals().next().is_none()
    }
}

/// A week of daily plans keyed by day name.
///
/// Day names are unique and keep the order they were inserted in; that order
/// drives first-seen ordering in the grocery list. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyMealPlan {
    days: Vec<(String, DailyMealPlan)>,
}

impl WeeklyMealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the plan for `day`. A replaced day keeps its position.
    pub fn insert(&mut self, day: impl Into<String>, plan: DailyMealPlan) -> Option<DailyMealPlan> {
        let day = day.into();
        match self.days.iter_mut().find(|(name, _)| *name == day) {
            Some((_, existing)) => Some(std::mem::replace(existing, plan)),
            None => {
                self.days.push((day, plan));
                None
            }
        }
    }

    pub fn get(&self, day: &str) -> Option<&DailyMealPlan> {
        self.days
            .iter()
            .find(|(name, _)| name == day)
            .map(|(_, plan)| plan)
    }

    /// Days in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DailyMealPlan)> {
        self.days.iter().map(|(name, plan)| (name.as_str(), plan))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut DailyMealPlan)> {
        self.days.iter_mut().map(|(name, plan)| (name.as_str(), plan))
    }

    pub fn day_names(&self) -> Vec<&str> {
        self.days.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Every present meal across the week, day by day in slot order.
    pub fn all_meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|(_, plan)| plan.meals())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for WeeklyMealPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, plan) in &self.days {
            map.serialize_entry(day, plan)?;
        }
        map.end()
    }
}

struct WeeklyMealPlanVisitor;

impl<'de> Visitor<'de> for WeeklyMealPlanVisitor {
    type Value = WeeklyMealPlan;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of day names to daily meal plans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut plan = WeeklyMealPlan::new();
        while let Some((day, daily)) = access.next_entry::<String, DailyMealPlan>()? {
            plan.insert(day, daily);
        }
        Ok(plan)
    }
}

impl<'de> Deserialize<'de> for WeeklyMealPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeeklyMealPlanVisitor)
    }
}

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    pub total_amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
    #[serde(default)]
    pub checked: bool,
}
