pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod metrics;
pub mod models;
pub mod preferences;
pub mod state;
pub mod submission;

pub use config::ServiceConfig;
pub use error::{Result, SubmissionError, WizardError};
pub use models::{MealPlan, ProfileRequest, UserProfile};
pub use state::{SubmissionStatus, Wizard, WizardStep};
pub use submission::{submit, HttpRecommendationService, RecommendationService, Submission};
