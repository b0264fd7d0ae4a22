use clap::{Parser, Subcommand};

/// Meal plan wizard — describe yourself, pick cuisines, get a personalized meal plan.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the recommendation service (overrides MEAL_PLAN_SERVICE_URL).
    #[arg(short, long, global = true)]
    pub service_url: Option<String>,

    /// Give up on the request after this many seconds (overrides MEAL_PLAN_TIMEOUT_SECS).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Disable the terminal bell on bulk cuisine changes.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Walk through the profile wizard and request a meal plan.
    #[default]
    Wizard,

    /// Compute BMI, its category, and the recommended goal.
    Bmi {
        /// Body weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimeters.
        #[arg(long)]
        height: f64,
    },

    /// List the cuisine catalog, optionally filtered by name.
    Cuisines {
        /// Case-insensitive name filter.
        #[arg(long)]
        query: Option<String>,
    },
}
