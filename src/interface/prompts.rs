use std::collections::BTreeSet;
use std::str::FromStr;

use dialoguer::{Input, MultiSelect, Select};

use crate::error::Result;
use crate::interface::render::{
    display_allergies, display_bmi, display_cuisine_grid, display_recommendation,
};
use crate::metrics::constants::{AGE_MAX, AGE_MIN, HEIGHT_MIN_CM, WEIGHT_MIN_KG};
use crate::models::{ActivityLevel, DietType, Goal, MealSlot, Sex};
use crate::preferences::{filter_by_query, suggest};
use crate::state::Wizard;

/// Where the user wants to go after a step's prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Back,
    Submit,
}

/// Prompt until the input parses and passes `accept`.
///
/// The current value, if any, is offered as the default.
fn prompt_number<T>(
    prompt: &str,
    current: Option<T>,
    accept: impl Fn(&T) -> bool,
    hint: &str,
) -> Result<T>
where
    T: FromStr + ToString,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(value) = &current {
            input = input.default(value.to_string());
        }
        let text = input.interact_text()?;

        match text.trim().parse::<T>() {
            Ok(value) if accept(&value) => return Ok(value),
            _ => println!("{}", hint),
        }
    }
}

/// Pick one of `options`, labelled by `label`, starting at `current`.
fn prompt_choice<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    current: Option<T>,
    label: impl Fn(T) -> &'static str,
) -> Result<T> {
    let items: Vec<&str> = options.iter().map(|o| label(*o)).collect();
    let default = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Step 1: age, sex, weight, height and activity level.
pub fn prompt_basic_info(wizard: &mut Wizard) -> Result<Navigation> {
    let profile = wizard.profile_mut();

    profile.age = Some(prompt_number(
        "Age (years)",
        profile.age,
        |a: &u32| (AGE_MIN..=AGE_MAX).contains(a),
        &format!("Please enter a whole number between {} and {}.", AGE_MIN, AGE_MAX),
    )?);

    profile.sex = prompt_choice("Sex", &Sex::ALL, Some(profile.sex), Sex::label)?;

    profile.weight_kg = Some(prompt_number(
        "Weight (kg)",
        profile.weight_kg,
        |w: &f64| w.is_finite() && *w >= WEIGHT_MIN_KG,
        &format!("Please enter a weight of at least {} kg.", WEIGHT_MIN_KG),
    )?);

    profile.height_cm = Some(prompt_number(
        "Height (cm)",
        profile.height_cm,
        |h: &f64| h.is_finite() && *h >= HEIGHT_MIN_CM,
        &format!("Please enter a height of at least {} cm.", HEIGHT_MIN_CM),
    )?);

    display_bmi(&wizard.metrics());

    let profile = wizard.profile_mut();
    profile.activity_level = prompt_choice(
        "Activity level",
        &ActivityLevel::ALL,
        Some(profile.activity_level),
        ActivityLevel::label,
    )?;

    Ok(Navigation::Next)
}

/// Step 2: goal, diet type and allergies.
pub fn prompt_goals_and_diet(wizard: &mut Wizard) -> Result<Navigation> {
    let metrics = wizard.metrics();
    display_recommendation(&metrics);

    let profile = wizard.profile_mut();
    let current_goal = profile.goal.or(metrics.recommended_goal);
    profile.goal = Some(prompt_choice("Your goal", &Goal::ALL, current_goal, Goal::label)?);

    profile.diet_type = prompt_choice(
        "Diet type",
        &DietType::ALL,
        Some(profile.diet_type),
        DietType::label,
    )?;

    edit_allergies(wizard)?;

    let choice = Select::new()
        .with_prompt("Continue")
        .items(&["Next: choose cuisines", "Back: basic info"])
        .default(0)
        .interact()?;

    Ok(if choice == 0 { Navigation::Next } else { Navigation::Back })
}

fn edit_allergies(wizard: &mut Wizard) -> Result<()> {
    loop {
        display_allergies(&wizard.profile().allergy_tags());

        let action = Select::new()
            .with_prompt("Allergies")
            .items(&["Done", "Add allergy", "Remove allergy"])
            .default(0)
            .interact()?;

        match action {
            1 => {
                let text: String = Input::new()
                    .with_prompt("Type an allergy (commas add several)")
                    .allow_empty(true)
                    .interact_text()?;
                wizard.profile_mut().add_allergy(&text);
            }
            2 => {
                let entries = wizard.profile().allergy_entries();
                if entries.is_empty() {
                    println!("No allergies to remove.");
                    continue;
                }
                let labels: Vec<&str> = entries.iter().map(|(_, tag)| tag.as_str()).collect();
                let selection = Select::new()
                    .with_prompt("Remove which allergy?")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                wizard.profile_mut().remove_allergy(entries[selection].0);
            }
            _ => return Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CuisineAction {
    Search,
    Choose(MealSlot),
    SelectAll(MealSlot),
    ClearAll(MealSlot),
    Surprise,
    Back,
    Submit,
}

impl CuisineAction {
    fn label(self, wizard: &Wizard, query: &str) -> String {
        match self {
            CuisineAction::Search if query.is_empty() => "Search cuisines".to_string(),
            CuisineAction::Search => format!("Search cuisines (filter: '{}')", query),
            CuisineAction::Choose(slot) => format!("{} Choose {} cuisines", slot.glyph(), slot),
            CuisineAction::SelectAll(slot) => format!("Select all for {}", slot),
            CuisineAction::ClearAll(slot) => format!("Clear all for {}", slot),
            CuisineAction::Surprise => format!(
                "Surprise me! Balanced variety [{}]",
                if wizard.balanced_preset() { "on" } else { "off" }
            ),
            CuisineAction::Back => "← Back".to_string(),
            CuisineAction::Submit => "🍽 Generate Meal Plan".to_string(),
        }
    }
}

/// Step 3: cuisine preferences, then back or submit.
///
/// Only returns `Submit` when the wizard currently allows submission.
pub fn prompt_cuisines(wizard: &mut Wizard, query: &mut String) -> Result<Navigation> {
    loop {
        let view = filter_by_query(query);
        for slot in MealSlot::PRESENTED {
            display_cuisine_grid(slot, &view, &wizard.profile().cuisines);
        }

        let mut actions = vec![CuisineAction::Search];
        actions.extend(MealSlot::PRESENTED.map(CuisineAction::Choose));
        for slot in MealSlot::PRESENTED {
            actions.push(CuisineAction::SelectAll(slot));
            actions.push(CuisineAction::ClearAll(slot));
        }
        actions.push(CuisineAction::Surprise);
        actions.push(CuisineAction::Back);
        if wizard.can_submit() {
            actions.push(CuisineAction::Submit);
        }

        let labels: Vec<String> = actions.iter().map(|a| a.label(wizard, query)).collect();
        let selection = Select::new()
            .with_prompt("Cuisines")
            .items(&labels)
            .default(actions.len() - 1)
            .interact()?;

        match actions[selection] {
            CuisineAction::Search => {
                *query = prompt_search_query(query)?;
            }
            CuisineAction::Choose(slot) => choose_slot(wizard, slot, query)?,
            CuisineAction::SelectAll(slot) => wizard.select_all(slot),
            CuisineAction::ClearAll(slot) => wizard.clear_all(slot),
            CuisineAction::Surprise => {
                wizard.toggle_balanced_preset();
            }
            CuisineAction::Back => return Ok(Navigation::Back),
            CuisineAction::Submit => return Ok(Navigation::Submit),
        }
    }
}

fn prompt_search_query(current: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt("Search cuisines (empty shows all)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    let text = text.trim().to_string();
    if filter_by_query(&text).is_empty() {
        match suggest(&text) {
            Some(entry) => println!("No cuisine matches '{}'. Did you mean '{}'?", text, entry.id),
            None => println!("No cuisine matches '{}'.", text),
        }
    }
    Ok(text)
}

/// Multi-select over the filtered catalog. Cuisines hidden by the filter keep
/// their current state.
fn choose_slot(wizard: &mut Wizard, slot: MealSlot, query: &str) -> Result<()> {
    let view = filter_by_query(query);
    let entries: Vec<_> = view.iter().collect();
    if entries.is_empty() {
        println!("No cuisine matches '{}'.", query);
        return Ok(());
    }

    let selections = &wizard.profile().cuisines;
    let items: Vec<String> = entries.iter().map(|c| format!("{} {}", c.glyph, c.id)).collect();
    let defaults: Vec<bool> = entries
        .iter()
        .map(|c| selections.is_selected(slot, c.id))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt(format!("{} cuisines (space to toggle, enter to confirm)", slot))
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    let mut picks: BTreeSet<String> = selections
        .slot(slot)
        .iter()
        .filter(|id| !entries.iter().any(|c| c.id == id.as_str()))
        .cloned()
        .collect();
    picks.extend(picked.into_iter().map(|i| entries[i].id.to_string()));

    wizard.set_slot_picks(slot, &picks)?;
    Ok(())
}
