use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::constants::{AGE_MAX, AGE_MIN, HEIGHT_MIN_CM, WEIGHT_MIN_KG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (hard exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (very hard exercise & physical job)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainWeight,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseWeight, Goal::Maintain, Goal::GainWeight];

    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Lose Weight",
            Goal::Maintain => "Maintain Weight",
            Goal::GainWeight => "Gain Weight",
        }
    }

    /// Phrase used when the goal is offered as a recommendation.
    pub fn recommendation_label(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Weight Loss",
            Goal::Maintain => "Weight Maintenance",
            Goal::GainWeight => "Weight Gain",
        }
    }
}

/// Diet type. Serialized capitalized, matching the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    Regular,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Regular, DietType::Vegetarian, DietType::Vegan];

    pub fn label(self) -> &'static str {
        match self {
            DietType::Regular => "Omnivore",
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Slots the wizard lets the user edit directly. Snack is only reached by the
    /// balanced preset.
    pub const PRESENTED: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snacks",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "🍳",
            MealSlot::Lunch => "🥗",
            MealSlot::Dinner => "🍛",
            MealSlot::Snack => "🍪",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Cuisine identifiers chosen for each meal slot.
///
/// Every slot is a field, so a slot can be empty but never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineSelections {
    pub breakfast: BTreeSet<String>,
    pub lunch: BTreeSet<String>,
    pub dinner: BTreeSet<String>,
    pub snack: BTreeSet<String>,
}

impl CuisineSelections {
    pub fn slot(&self, slot: MealSlot) -> &BTreeSet<String> {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut BTreeSet<String> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    pub fn is_selected(&self, slot: MealSlot, cuisine: &str) -> bool {
        self.slot(slot).contains(cuisine)
    }

    /// True when no slot has any selection.
    pub fn is_empty(&self) -> bool {
        MealSlot::ALL.iter().all(|s| self.slot(*s).is_empty())
    }
}

/// The profile being edited by the wizard.
///
/// Numeric fields are `None` while the user has not entered a usable value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub sex: Sex,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: ActivityLevel,
    pub goal: Option<Goal>,
    pub diet_type: DietType,
    pub allergies_raw: String,
    pub cuisines: CuisineSelections,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set age from raw text. Blank or non-numeric text clears the field.
    pub fn set_age_text(&mut self, text: &str) {
        self.age = text.trim().parse().ok();
    }

    /// Set weight from raw text. Blank or non-numeric text clears the field.
    pub fn set_weight_text(&mut self, text: &str) {
        self.weight_kg = parse_decimal(text);
    }

    /// Set height from raw text. Blank or non-numeric text clears the field.
    pub fn set_height_text(&mut self, text: &str) {
        self.height_cm = parse_decimal(text);
    }

    pub fn age_in_bounds(&self) -> bool {
        self.age.is_some_and(|a| (AGE_MIN..=AGE_MAX).contains(&a))
    }

    pub fn weight_in_bounds(&self) -> bool {
        self.weight_kg.is_some_and(|w| w >= WEIGHT_MIN_KG)
    }

    pub fn height_in_bounds(&self) -> bool {
        self.height_cm.is_some_and(|h| h >= HEIGHT_MIN_CM)
    }

    /// Trimmed, non-empty allergy tokens in entry order.
    pub fn allergy_tags(&self) -> Vec<String> {
        normalize_allergies(&self.allergies_raw)
    }

    /// Non-blank allergy tokens paired with their raw index, for removal.
    pub fn allergy_entries(&self) -> Vec<(usize, String)> {
        self.allergies_raw
            .split(',')
            .enumerate()
            .map(|(i, token)| (i, token.trim().to_string()))
            .filter(|(_, token)| !token.is_empty())
            .collect()
    }

    /// Append an allergy to the raw list. Blank input is ignored.
    pub fn add_allergy(&mut self, text: &str) {
        let allergy = text.trim();
        if allergy.is_empty() {
            return;
        }

        if self.allergies_raw.is_empty() {
            self.allergies_raw = allergy.to_string();
        } else {
            self.allergies_raw = format!("{},{}", self.allergies_raw, allergy);
        }
    }

    /// Remove the raw comma-separated token at `index`.
    ///
    /// Indexes count raw tokens, including blank ones, so they line up with a
    /// plain split of `allergies_raw`.
    pub fn remove_allergy(&mut self, index: usize) {
        self.allergies_raw = self
            .allergies_raw
            .split(',')
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, token)| token)
            .collect::<Vec<_>>()
            .join(",");
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split comma-separated allergies into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are kept.
pub fn normalize_allergies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Whether the given wizard step (1-based) has all it needs.
///
/// Step 1 needs age, weight and height within bounds. Step 2 needs a goal.
/// Step 3 never blocks; submission has its own guard.
pub fn validate_step(step: u8, profile: &UserProfile) -> bool {
    match step {
        1 => profile.age_in_bounds() && profile.weight_in_bounds() && profile.height_in_bounds(),
        2 => profile.goal.is_some(),
        3 => true,
        _ => false,
    }
}

/// Normalized profile as sent to the recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub age: Option<u32>,
    pub sex: Sex,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: DietType,
    pub allergies: Vec<String>,
    pub cuisines: CuisineSelections,
}

impl ProfileRequest {
    /// Snapshot a profile into a request. Returns `None` when no goal is set.
    pub fn from_profile(profile: &UserProfile) -> Option<Self> {
        let goal = profile.goal?;
        Some(Self {
            age: profile.age,
            sex: profile.sex,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            activity_level: profile.activity_level,
            goal,
            diet_type: profile.diet_type,
            allergies: normalize_allergies(&profile.allergies_raw),
            cuisines: profile.cuisines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> UserProfile {
        UserProfile {
            age: Some(30),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            goal: Some(Goal::Maintain),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_normalize_allergies_drops_blanks() {
        assert_eq!(
            normalize_allergies("nuts, ,peanuts,  "),
            vec!["nuts".to_string(), "peanuts".to_string()]
        );
        assert!(normalize_allergies("").is_empty());
        assert!(normalize_allergies(",,,").is_empty());
    }

    #[test]
    fn test_normalize_allergies_keeps_order_and_duplicates() {
        assert_eq!(
            normalize_allergies("soy,milk,soy"),
            vec!["soy".to_string(), "milk".to_string(), "soy".to_string()]
        );
    }

    #[test]
    fn test_step_one_requires_bounds() {
        let mut profile = complete_profile();
        assert!(validate_step(1, &profile));

        profile.age = Some(0);
        assert!(!validate_step(1, &profile));
        profile.age = Some(121);
        assert!(!validate_step(1, &profile));
        profile.age = Some(120);
        assert!(validate_step(1, &profile));

        profile.weight_kg = Some(19.9);
        assert!(!validate_step(1, &profile));
        profile.weight_kg = None;
        assert!(!validate_step(1, &profile));
        profile.weight_kg = Some(20.0);

        profile.height_cm = Some(49.0);
        assert!(!validate_step(1, &profile));
    }

    #[test]
    fn test_step_two_requires_goal() {
        let mut profile = complete_profile();
        assert!(validate_step(2, &profile));
        profile.goal = None;
        assert!(!validate_step(2, &profile));
        assert!(validate_step(3, &profile));
        assert!(!validate_step(4, &profile));
    }

    #[test]
    fn test_text_setters_clear_on_garbage() {
        let mut profile = complete_profile();
        profile.set_age_text("");
        profile.set_weight_text("abc");
        profile.set_height_text("  180.5 ");
        assert_eq!(profile.age, None);
        assert_eq!(profile.weight_kg, None);
        assert_eq!(profile.height_cm, Some(180.5));
    }

    #[test]
    fn test_add_and_remove_allergy() {
        let mut profile = UserProfile::new();
        profile.add_allergy("  nuts ");
        profile.add_allergy("   ");
        profile.add_allergy("gluten");
        assert_eq!(profile.allergies_raw, "nuts,gluten");

        profile.allergies_raw = "nuts,,gluten".to_string();
        assert_eq!(
            profile.allergy_entries(),
            vec![(0, "nuts".to_string()), (2, "gluten".to_string())]
        );

        profile.remove_allergy(0);
        assert_eq!(profile.allergies_raw, ",gluten");
        assert_eq!(profile.allergy_tags(), vec!["gluten".to_string()]);
    }

    #[test]
    fn test_request_requires_goal() {
        let mut profile = complete_profile();
        profile.allergies_raw = "nuts,,shellfish ".to_string();
        let request = ProfileRequest::from_profile(&profile).unwrap();
        assert_eq!(request.allergies, vec!["nuts", "shellfish"]);

        profile.goal = None;
        assert!(ProfileRequest::from_profile(&profile).is_none());
    }

    #[test]
    fn test_request_wire_format() {
        let mut profile = complete_profile();
        profile.activity_level = ActivityLevel::VeryActive;
        profile.cuisines.lunch.insert("Thai".to_string());
        let request = ProfileRequest::from_profile(&profile).unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sex"], "male");
        assert_eq!(json["activity_level"], "very_active");
        assert_eq!(json["goal"], "maintain");
        assert_eq!(json["diet_type"], "Regular");
        assert_eq!(json["weight_kg"], 70.0);
        assert_eq!(json["cuisines"]["lunch"][0], "Thai");
        assert!(json["cuisines"]["snack"].as_array().unwrap().is_empty());
    }
}
