use crate::error::{NutriError, Result};
use crate::models::{Food, Meal, PlanEntry, Targets};
use crate::planner::{detect_group, solve_for_protein};

/// Aggregate macro totals across the plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutrientTotals {
    pub kcal: f64,
    pub protein_g: f64,
    pub lipid_g: f64,
    pub carb_g: f64,
}

/// Session-scoped plan state: the ordered list of selected entries and
/// the targets they are measured against.
///
/// Entries keep insertion order; the same food may appear any number
/// of times, across any meals. One manager per client session, owned
/// by the host layer, single writer.
pub struct PlanManager {
    entries: Vec<PlanEntry>,
    pub targets: Targets,
}

impl PlanManager {
    pub fn new(targets: Targets) -> Self {
        Self {
            entries: Vec::new(),
            targets,
        }
    }

    /// Append an entry to the plan.
    pub fn add(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    /// Add `quantity_g` grams of a catalog food to the given meal.
    /// Returns a copy of the appended entry for display.
    pub fn add_food(&mut self, food: &Food, meal: Meal, quantity_g: f64) -> PlanEntry {
        let group = detect_group(&food.name);
        let entry = PlanEntry::from_catalog(food, group, meal, quantity_g);
        self.entries.push(entry.clone());
        entry
    }

    /// Solve the remaining protein gap with `food` and append the
    /// resulting entry. Surfaces the solver's failures unchanged; the
    /// plan is untouched when no quantity can be computed.
    pub fn solve_and_add(&mut self, food: &Food, meal: Meal) -> Result<PlanEntry> {
        let remaining = self.remaining_protein();
        let quantity_g = solve_for_protein(remaining, food)?;
        let group = detect_group(&food.name);
        let entry = PlanEntry::solved(food, group, meal, quantity_g, remaining);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove an entry by position. Later entries shift down.
    pub fn remove(&mut self, index: usize) -> Result<PlanEntry> {
        if index >= self.entries.len() {
            return Err(NutriError::InvalidInput(format!(
                "no plan entry at position {}",
                index + 1
            )));
        }
        Ok(self.entries.remove(index))
    }

    /// Elementwise totals across all entries; zeros when empty.
    pub fn totals(&self) -> NutrientTotals {
        let mut totals = NutrientTotals::default();
        for entry in &self.entries {
            totals.kcal += entry.kcal;
            totals.protein_g += entry.protein_g;
            totals.lipid_g += entry.lipid_g;
            totals.carb_g += entry.carb_g;
        }
        totals
    }

    /// Protein still missing against the target. Negative when over.
    pub fn remaining_protein(&self) -> f64 {
        self.targets.protein_g - self.totals().protein_g
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
