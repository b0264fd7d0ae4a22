pub mod pipeline;
pub mod service;

pub use pipeline::{submit, Submission};
pub use service::{rejection_message, HttpRecommendationService, RecommendationService, PROFILE_PATH};
