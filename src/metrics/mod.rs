pub mod calculations;
pub mod constants;

pub use calculations::{
    bmi, bmi_category, bmi_for_profile, recommended_goal, BmiCategory, DerivedMetrics, Severity,
};
pub use constants::*;
