use crate::error::{Result, WizardError};
use crate::models::{CuisineSelections, MealSlot};
use crate::preferences::catalog::{catalog, find_cuisine};

/// Curated one-click selection: three distinct cuisines per slot.
pub const BALANCED_PRESET: [(MealSlot, [&str; 3]); 4] = [
    (MealSlot::Breakfast, ["American", "French", "Japanese"]),
    (MealSlot::Lunch, ["Italian", "Mexican", "Indian"]),
    (MealSlot::Dinner, ["Chinese", "Thai", "Greek"]),
    (MealSlot::Snack, ["Fruit", "Spanish", "Vietnamese"]),
];

impl CuisineSelections {
    /// Add the cuisine to the slot if absent, remove it if present.
    ///
    /// Returns whether the cuisine is selected afterwards.
    pub fn toggle(&mut self, slot: MealSlot, cuisine: &str) -> Result<bool> {
        let entry =
            find_cuisine(cuisine).ok_or_else(|| WizardError::UnknownCuisine(cuisine.to_string()))?;

        let set = self.slot_mut(slot);
        if set.remove(entry.id) {
            Ok(false)
        } else {
            set.insert(entry.id.to_string());
            Ok(true)
        }
    }

    /// Replace the slot with the whole catalog.
    pub fn select_all(&mut self, slot: MealSlot) {
        *self.slot_mut(slot) = catalog().iter().map(|c| c.id.to_string()).collect();
    }

    pub fn clear_all(&mut self, slot: MealSlot) {
        self.slot_mut(slot).clear();
    }

    /// Overwrite every slot with the balanced preset. Earlier picks are discarded.
    pub fn apply_balanced_preset(&mut self) {
        for (slot, cuisines) in BALANCED_PRESET {
            *self.slot_mut(slot) = cuisines.iter().map(|c| c.to_string()).collect();
        }
    }

    /// Empty every slot, including edits made after the preset was applied.
    pub fn clear_preset(&mut self) {
        for slot in MealSlot::ALL {
            self.clear_all(slot);
        }
    }

    /// Number of catalog cuisines selected for the slot.
    pub fn selected_count(&self, slot: MealSlot) -> usize {
        self.slot(slot).len()
    }
}
