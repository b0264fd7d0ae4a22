use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::error::{Result, SubmissionError, WizardError};
use crate::metrics::DerivedMetrics;
use crate::models::{validate_step, MealPlan, MealSlot, ProfileRequest, UserProfile};
use crate::preferences::{emit_quietly, find_cuisine, FeedbackCue, FeedbackSink, NoopFeedback};

/// The three wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    GoalsAndDiet,
    Cuisines,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::BasicInfo,
        WizardStep::GoalsAndDiet,
        WizardStep::Cuisines,
    ];

    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::GoalsAndDiet => 2,
            WizardStep::Cuisines => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::GoalsAndDiet => "Goals & Diet",
            WizardStep::Cuisines => "Cuisines",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::GoalsAndDiet),
            WizardStep::GoalsAndDiet => Some(WizardStep::Cuisines),
            WizardStep::Cuisines => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::GoalsAndDiet => Some(WizardStep::BasicInfo),
            WizardStep::Cuisines => Some(WizardStep::GoalsAndDiet),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Profile wizard: owns the profile being edited and the navigation and
/// submission state around it.
pub struct Wizard {
    profile: UserProfile,
    step: WizardStep,
    status: SubmissionStatus,
    last_error: Option<String>,
    balanced_preset: bool,
    feedback: Box<dyn FeedbackSink>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Fresh wizard on step 1 with silent feedback.
    pub fn new() -> Self {
        Self::with_feedback(Box::new(NoopFeedback))
    }

    pub fn with_feedback(feedback: Box<dyn FeedbackSink>) -> Self {
        Self {
            profile: UserProfile::default(),
            step: WizardStep::BasicInfo,
            status: SubmissionStatus::Idle,
            last_error: None,
            balanced_preset: false,
            feedback,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Mutable access for field edits (numbers, enums, allergies).
    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(&self.profile)
    }

    /// Whether the current step's fields are complete. Informational only:
    /// navigation is not gated on it.
    pub fn step_is_valid(&self) -> bool {
        validate_step(self.step.number(), &self.profile)
    }

    /// Advance one step. Returns false when already on the last step or the
    /// wizard is finished.
    pub fn next(&mut self) -> bool {
        self.move_to(self.step.next())
    }

    /// Go back one step. Returns false on the first step or once finished.
    pub fn back(&mut self) -> bool {
        self.move_to(self.step.previous())
    }

    fn move_to(&mut self, target: Option<WizardStep>) -> bool {
        if self.status == SubmissionStatus::Succeeded {
            return false;
        }
        match target {
            Some(step) => {
                info!(from = self.step.number(), to = step.number(), "wizard step");
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Submit is offered on the last step once a goal is chosen, and never
    /// while a request is pending or after success.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Cuisines
            && self.profile.goal.is_some()
            && !matches!(
                self.status,
                SubmissionStatus::InFlight | SubmissionStatus::Succeeded
            )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Cuisine preferences
    // ─────────────────────────────────────────────────────────────────────

    pub fn toggle_cuisine(&mut self, slot: MealSlot, cuisine: &str) -> Result<bool> {
        let selected = self.profile.cuisines.toggle(slot, cuisine)?;
        debug!(%slot, cuisine, selected, "cuisine toggled");
        emit_quietly(self.feedback.as_ref(), FeedbackCue::Click);
        Ok(selected)
    }

    /// Make the slot match `picks` by toggling every cuisine whose state
    /// differs. Returns how many cuisines changed.
    ///
    /// Every changed id is checked against the catalog first, so an unknown
    /// cuisine leaves the slot untouched.
    pub fn set_slot_picks(&mut self, slot: MealSlot, picks: &BTreeSet<String>) -> Result<usize> {
        let changed: Vec<String> = self
            .profile
            .cuisines
            .slot(slot)
            .symmetric_difference(picks)
            .cloned()
            .collect();
        if let Some(unknown) = changed.iter().find(|c| find_cuisine(c).is_none()) {
            return Err(WizardError::UnknownCuisine(unknown.clone()));
        }

        for cuisine in &changed {
            self.toggle_cuisine(slot, cuisine)?;
        }
        Ok(changed.len())
    }

    pub fn select_all(&mut self, slot: MealSlot) {
        self.profile.cuisines.select_all(slot);
        debug!(%slot, "all cuisines selected");
        emit_quietly(self.feedback.as_ref(), FeedbackCue::Select);
    }

    pub fn clear_all(&mut self, slot: MealSlot) {
        self.profile.cuisines.clear_all(slot);
        debug!(%slot, "cuisines cleared");
        emit_quietly(self.feedback.as_ref(), FeedbackCue::Clear);
    }

    pub fn balanced_preset(&self) -> bool {
        self.balanced_preset
    }

    /// Flip the balanced preset. Turning it on overwrites every slot with the
    /// preset; turning it off empties every slot. Returns the new flag.
    pub fn toggle_balanced_preset(&mut self) -> bool {
        emit_quietly(self.feedback.as_ref(), FeedbackCue::Select);
        self.balanced_preset = !self.balanced_preset;
        if self.balanced_preset {
            self.profile.cuisines.apply_balanced_preset();
        } else {
            self.profile.cuisines.clear_preset();
        }
        debug!(enabled = self.balanced_preset, "balanced preset");
        self.balanced_preset
    }

    // ─────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────

    /// Start a submission: normalize and snapshot the profile and mark the
    /// wizard in flight.
    ///
    /// Returns `None` when submitting is not allowed. The snapshot is
    /// independent of the wizard, so edits made while the request is pending
    /// do not change what was sent.
    pub fn begin_submission(&mut self) -> Option<ProfileRequest> {
        if !self.can_submit() {
            return None;
        }

        let request = ProfileRequest::from_profile(&self.profile)?;
        self.status = SubmissionStatus::InFlight;
        self.last_error = None;
        info!("submission started");
        Some(request)
    }

    /// Record the outcome of the pending submission and pass it through.
    ///
    /// On failure the wizard stays on the cuisines step with every field
    /// intact and the user-facing message stored in `last_error`. With nothing
    /// in flight the outcome is discarded, the wizard is left as is and
    /// `NotReady` is returned.
    pub fn complete_submission(
        &mut self,
        outcome: std::result::Result<MealPlan, SubmissionError>,
    ) -> std::result::Result<MealPlan, SubmissionError> {
        if self.status != SubmissionStatus::InFlight {
            warn!(status = ?self.status, "submission outcome with nothing in flight");
            return Err(SubmissionError::NotReady("no submission is in flight"));
        }

        match &outcome {
            Ok(_) => {
                self.status = SubmissionStatus::Succeeded;
                self.last_error = None;
                info!("submission succeeded");
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed;
                self.last_error = Some(e.user_message());
                self.step = WizardStep::Cuisines;
                warn!(error = %e, "submission failed");
            }
        }
        outcome
    }
}
