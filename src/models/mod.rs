pub mod plan;
pub mod profile;

pub use plan::MealPlan;
pub use profile::{
    normalize_allergies, validate_step, ActivityLevel, CuisineSelections, DietType, Goal,
    MealSlot, ProfileRequest, Sex, UserProfile,
};
