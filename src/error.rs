use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Unknown cuisine: {0}")]
    UnknownCuisine(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, WizardError>;

/// Shown when the service gives no usable message of its own.
pub const GENERIC_SUBMISSION_ERROR: &str =
    "There was an error generating your meal plan. Please try again.";

/// Failure of a meal plan submission. Always caught by the wizard.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Submission not allowed: {0}")]
    NotReady(&'static str),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Service rejected profile (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Malformed meal plan response: {0}")]
    MalformedResponse(String),
}

impl SubmissionError {
    /// Text to show the user: the service's own message when it sent one,
    /// otherwise a generic retry hint.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_SUBMISSION_ERROR.to_string(),
        }
    }
}
