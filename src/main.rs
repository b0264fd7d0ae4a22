use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_plan_wizard_rs::cli::{Cli, Command};
use meal_plan_wizard_rs::config::ServiceConfig;
use meal_plan_wizard_rs::error::{Result, SubmissionError, WizardError};
use meal_plan_wizard_rs::interface::{
    display_bmi, display_catalog, display_plan_summary, display_recommendation,
    display_step_header, display_submission_error, prompt_basic_info, prompt_cuisines,
    prompt_goals_and_diet, Navigation,
};
use meal_plan_wizard_rs::metrics::{bmi, bmi_category, recommended_goal, DerivedMetrics};
use meal_plan_wizard_rs::preferences::{filter_by_query, NoopFeedback, TerminalBell};
use meal_plan_wizard_rs::state::{Wizard, WizardStep};
use meal_plan_wizard_rs::submission::{submit, HttpRecommendationService};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meal_plan_wizard_rs=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Wizard => {
            let config = ServiceConfig::from_env()?.with_overrides(
                cli.service_url,
                cli.timeout_secs,
                cli.quiet,
            )?;
            cmd_wizard(&config).await
        }
        Command::Bmi { weight, height } => cmd_bmi(weight, height),
        Command::Cuisines { query } => cmd_cuisines(query.as_deref().unwrap_or("")),
    }
}

/// Run the three-step wizard and request a meal plan.
async fn cmd_wizard(config: &ServiceConfig) -> Result<()> {
    let service = HttpRecommendationService::new(config)?;
    let mut wizard = if config.feedback {
        Wizard::with_feedback(Box::new(TerminalBell))
    } else {
        Wizard::with_feedback(Box::new(NoopFeedback))
    };
    let mut query = String::new();

    println!("Create Your Meal Plan");
    println!("Let's get to know you better to personalize your plan");

    loop {
        display_step_header(wizard.step());

        let navigation = match wizard.step() {
            WizardStep::BasicInfo => prompt_basic_info(&mut wizard)?,
            WizardStep::GoalsAndDiet => prompt_goals_and_diet(&mut wizard)?,
            WizardStep::Cuisines => prompt_cuisines(&mut wizard, &mut query)?,
        };

        match navigation {
            Navigation::Next => {
                wizard.next();
            }
            Navigation::Back => {
                wizard.back();
            }
            Navigation::Submit => {
                println!("Generating Plan...");
                match submit(&mut wizard, &service).await {
                    Ok(submission) => {
                        display_plan_summary(&submission);
                        return Ok(());
                    }
                    Err(SubmissionError::NotReady(reason)) => {
                        display_submission_error(reason);
                    }
                    Err(e) => {
                        let message = wizard
                            .last_error()
                            .map(String::from)
                            .unwrap_or_else(|| e.user_message());
                        display_submission_error(&message);
                    }
                }
            }
        }
    }
}

/// Print BMI, category and recommended goal for the given measurements.
fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    let value = bmi(Some(weight), Some(height)).ok_or_else(|| {
        WizardError::InvalidInput("BMI needs a positive weight and height".to_string())
    })?;

    let metrics = DerivedMetrics {
        bmi: Some(value),
        bmi_category: Some(bmi_category(value)),
        recommended_goal: Some(recommended_goal(value)),
    };
    display_bmi(&metrics);
    display_recommendation(&metrics);
    Ok(())
}

/// List the cuisine catalog, filtered by name.
fn cmd_cuisines(query: &str) -> Result<()> {
    display_catalog(&filter_by_query(query));
    Ok(())
}
