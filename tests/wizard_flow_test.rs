use std::sync::atomic::{AtomicUsize, Ordering};

use assert_float_eq::assert_float_absolute_eq;
use async_trait::async_trait;
use serde_json::json;

use meal_plan_wizard_rs::error::SubmissionError;
use meal_plan_wizard_rs::metrics::{bmi, BmiCategory, DerivedMetrics};
use meal_plan_wizard_rs::models::{Goal, MealPlan, MealSlot, ProfileRequest};
use meal_plan_wizard_rs::preferences::catalog;
use meal_plan_wizard_rs::state::{SubmissionStatus, Wizard, WizardStep};
use meal_plan_wizard_rs::submission::{submit, RecommendationService};

/// Service that answers every request with a fixed outcome and counts calls.
struct StubService {
    reject_with: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubService {
    fn accepting() -> Self {
        Self {
            reject_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn rejecting(message: &'static str) -> Self {
        Self {
            reject_with: Some(message),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecommendationService for StubService {
    async fn request_plan(&self, profile: &ProfileRequest) -> Result<MealPlan, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reject_with {
            Some(message) => Err(SubmissionError::Rejected {
                status: 422,
                message: Some(message.to_string()),
            }),
            None => Ok(MealPlan::new(json!({
                "daily_targets": { "daily_calories": 2000 },
                "current_season": "winter",
                "goal_echo": profile.goal,
            }))),
        }
    }
}

fn filled_wizard() -> Wizard {
    let mut wizard = Wizard::new();
    let profile = wizard.profile_mut();
    profile.age = Some(30);
    profile.weight_kg = Some(70.0);
    profile.height_cm = Some(175.0);
    wizard
}

#[test]
fn test_bmi_formula_over_a_grid() {
    for weight in [45.0, 62.5, 70.0, 98.3, 140.0] {
        for height in [150.0, 165.0, 175.0, 190.0] {
            let expected = weight / ((height / 100.0) * (height / 100.0));
            let value = bmi(Some(weight), Some(height)).unwrap();
            assert_float_absolute_eq!(value, (expected * 10.0).round() / 10.0, 1e-9);
        }
    }
}

#[test]
fn test_metrics_follow_weight_without_touching_goal() {
    let mut wizard = filled_wizard();
    wizard.profile_mut().goal = Some(Goal::Maintain);

    wizard.profile_mut().set_weight_text("50");
    let metrics = wizard.metrics();
    assert_eq!(metrics.bmi_category, Some(BmiCategory::Underweight));
    assert_eq!(metrics.recommended_goal, Some(Goal::GainWeight));

    wizard.profile_mut().set_weight_text("95");
    assert_eq!(wizard.metrics().recommended_goal, Some(Goal::LoseWeight));
    assert_eq!(wizard.profile().goal, Some(Goal::Maintain));

    wizard.profile_mut().set_height_text("");
    assert_eq!(
        wizard.metrics(),
        DerivedMetrics {
            bmi: None,
            bmi_category: None,
            recommended_goal: None
        }
    );
}

#[test]
fn test_steps_reachable_one_at_a_time() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::GoalsAndDiet));
    assert_eq!(WizardStep::Cuisines.previous(), Some(WizardStep::GoalsAndDiet));
    assert_eq!(WizardStep::Cuisines.next(), None);

    wizard.next();
    wizard.next();
    assert_eq!(wizard.step(), WizardStep::Cuisines);
    wizard.back();
    assert_eq!(wizard.step(), WizardStep::GoalsAndDiet);
}

#[test]
fn test_select_all_then_clear_all_empties_slot() {
    let mut wizard = Wizard::new();
    wizard.toggle_balanced_preset();

    wizard.select_all(MealSlot::Lunch);
    assert_eq!(wizard.profile().cuisines.lunch.len(), catalog().len());
    wizard.clear_all(MealSlot::Lunch);
    assert!(wizard.profile().cuisines.lunch.is_empty());
    assert_eq!(wizard.profile().cuisines.dinner.len(), 3);
}

#[tokio::test]
async fn test_submit_refused_without_goal() {
    let service = StubService::accepting();
    let mut wizard = filled_wizard();
    wizard.next();
    wizard.next();

    let err = submit(&mut wizard, &service).await.unwrap_err();

    assert!(matches!(err, SubmissionError::NotReady(_)));
    assert_eq!(wizard.status(), SubmissionStatus::Idle);
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_scenario() {
    let service = StubService::accepting();
    let mut wizard = filled_wizard();
    wizard.profile_mut().goal = Some(Goal::Maintain);
    wizard.next();
    wizard.next();

    let submission = submit(&mut wizard, &service).await.unwrap();

    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert_eq!(wizard.status(), SubmissionStatus::Succeeded);
    assert_eq!(submission.plan.current_season(), Some("winter"));
    assert_eq!(submission.plan.as_value()["goal_echo"], "maintain");
    assert!(submission.profile.allergies.is_empty());

    let again = submit(&mut wizard, &service).await;
    assert!(matches!(again, Err(SubmissionError::NotReady(_))));
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_scenario_keeps_wizard_usable() {
    let service = StubService::rejecting("Invalid age");
    let mut wizard = filled_wizard();
    wizard.profile_mut().goal = Some(Goal::Maintain);
    wizard.profile_mut().allergies_raw = "milk".to_string();
    wizard.next();
    wizard.next();

    submit(&mut wizard, &service).await.unwrap_err();

    assert_eq!(wizard.status(), SubmissionStatus::Failed);
    assert_eq!(wizard.last_error(), Some("Invalid age"));
    assert_eq!(wizard.step(), WizardStep::Cuisines);
    assert_eq!(wizard.profile().allergies_raw, "milk");

    assert!(wizard.back());
    assert!(wizard.next());
    assert!(wizard.can_submit());
}
