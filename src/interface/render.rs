use crate::metrics::{DerivedMetrics, Severity};
use crate::models::{CuisineSelections, MealSlot};
use crate::preferences::{grid_columns, CatalogView};
use crate::state::WizardStep;
use crate::submission::Submission;

/// Terminal width from `COLUMNS`, or 80 when unknown.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(80)
}

/// Display the step progress bar and title.
pub fn display_step_header(step: WizardStep) {
    let bar: String = WizardStep::ALL
        .iter()
        .map(|s| if *s <= step { "■■■■" } else { "□□□□" })
        .collect::<Vec<_>>()
        .join(" ");

    println!();
    println!("{}", bar);
    println!(
        "=== Step {}/{}: {} ===",
        step.number(),
        WizardStep::ALL.len(),
        step.label()
    );
    println!();
}

/// Display BMI and its category, or nothing when BMI cannot be computed.
pub fn display_bmi(metrics: &DerivedMetrics) {
    let (Some(bmi), Some(category)) = (metrics.bmi, metrics.bmi_category) else {
        return;
    };

    let marker = match category.severity() {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Danger => "!!",
    };
    println!("Your BMI: {:.1} ({} {})", bmi, category.label(), marker);
}

pub fn display_recommendation(metrics: &DerivedMetrics) {
    if let Some(goal) = metrics.recommended_goal {
        println!(
            "Based on your BMI, we recommend: {}",
            goal.recommendation_label()
        );
    }
}

pub fn display_allergies(tags: &[String]) {
    if tags.is_empty() {
        println!("Allergies: (none)");
    } else {
        let chips: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
        println!("Allergies: {}", chips.join(" "));
    }
}

/// Display the filtered catalog as a grid, marking the slot's selections.
pub fn display_cuisine_grid(slot: MealSlot, view: &CatalogView, selections: &CuisineSelections) {
    let columns = grid_columns(terminal_width());
    let total = crate::preferences::catalog().len();

    println!(
        "{} {} ({}/{})",
        slot.glyph(),
        slot.title(),
        selections.selected_count(slot),
        total
    );

    let cells: Vec<String> = view
        .iter()
        .map(|c| {
            let mark = if selections.is_selected(slot, c.id) { "x" } else { " " };
            format!("[{}] {} {:<10}", mark, c.glyph, c.id)
        })
        .collect();

    if cells.is_empty() {
        println!("  (no cuisine matches '{}')", view.query());
        return;
    }

    for row in cells.chunks(columns) {
        println!("  {}", row.join("  "));
    }
    println!();
}

/// Display the catalog without any selection state.
pub fn display_catalog(view: &CatalogView) {
    let columns = grid_columns(terminal_width());
    let cells: Vec<String> = view
        .iter()
        .map(|c| format!("{} {:<10} {}", c.glyph, c.id, c.color))
        .collect();

    if cells.is_empty() {
        println!("No cuisine matches '{}'.", view.query());
        return;
    }

    for row in cells.chunks(columns) {
        println!("{}", row.join("   "));
    }
}

pub fn display_submission_error(message: &str) {
    println!();
    println!("Error: {}", message);
    println!();
}

/// Display a short summary of the plan returned by the service.
pub fn display_plan_summary(submission: &Submission) {
    let plan = &submission.plan;

    println!();
    println!("=== Meal Plan Ready ===");
    println!();
    match plan.daily_calories() {
        Some(calories) => println!("Daily calories: {:.0}", calories),
        None => println!("Daily calories: (not provided)"),
    }
    if let Some(season) = plan.current_season() {
        println!("Season: {}", season);
    }
    println!("Goal: {}", submission.profile.goal.label());
    if !submission.profile.allergies.is_empty() {
        println!("Avoiding: {}", submission.profile.allergies.join(", "));
    }
    println!();
}
