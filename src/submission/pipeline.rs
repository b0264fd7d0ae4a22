use tracing::info;

use crate::error::SubmissionError;
use crate::models::{MealPlan, ProfileRequest};
use crate::state::Wizard;
use crate::submission::service::RecommendationService;

/// What a successful submission hands back to the caller: the profile as
/// sent and the plan as received. The wizard keeps neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub profile: ProfileRequest,
    pub plan: MealPlan,
}

/// Normalize the wizard's profile, send it, and record the outcome.
///
/// Fails with `NotReady` (leaving the wizard untouched) when submission is
/// not currently allowed. Any other error has already been recorded on the
/// wizard as a failed submission with a user-facing message.
pub async fn submit<S>(wizard: &mut Wizard, service: &S) -> Result<Submission, SubmissionError>
where
    S: RecommendationService + ?Sized,
{
    let profile = wizard.begin_submission().ok_or(SubmissionError::NotReady(
        "a goal is required and no other submission may be pending",
    ))?;

    info!(
        allergies = profile.allergies.len(),
        goal = ?profile.goal,
        "requesting meal plan"
    );
    let outcome = service.request_plan(&profile).await;
    let plan = wizard.complete_submission(outcome)?;

    Ok(Submission { profile, plan })
}
