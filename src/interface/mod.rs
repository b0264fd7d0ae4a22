pub mod prompts;
pub mod render;

pub use prompts::{prompt_basic_info, prompt_cuisines, prompt_goals_and_diet, Navigation};
pub use render::{
    display_bmi, display_catalog, display_plan_summary, display_recommendation,
    display_step_header, display_submission_error,
};
