use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Meal plan returned by the recommendation service.
///
/// The body is forwarded as-is. The accessors only read the fields the plan
/// display relies on and never validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan(Value);

impl MealPlan {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// `daily_targets.daily_calories`, if present and numeric.
    pub fn daily_calories(&self) -> Option<f64> {
        self.0.get("daily_targets")?.get("daily_calories")?.as_f64()
    }

    /// `current_season`, if present.
    pub fn current_season(&self) -> Option<&str> {
        self.0.get("current_season")?.as_str()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_read_display_fields() {
        let plan = MealPlan::new(json!({
            "daily_targets": { "daily_calories": 2150.5 },
            "current_season": "autumn",
            "meals": []
        }));
        assert_eq!(plan.daily_calories(), Some(2150.5));
        assert_eq!(plan.current_season(), Some("autumn"));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let plan = MealPlan::new(json!({ "unexpected": true }));
        assert_eq!(plan.daily_calories(), None);
        assert_eq!(plan.current_season(), None);
    }

    #[test]
    fn test_body_forwarded_unchanged() {
        let body = json!({ "current_season": "spring", "extra": [1, 2, 3] });
        let plan: MealPlan = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(plan.into_value(), body);
    }
}
