use crate::models::{Food, FoodGroup};

/// Slot of the day a plan entry belongs to.
///
/// The four standard slots use the labels the export service expects;
/// `Other` keeps any free-form label the practitioner typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Meal {
    Morning,
    Noon,
    Snack,
    Evening,
    Other(String),
}

impl Meal {
    /// The four standard slots, in export order.
    pub const EXPORT_ORDER: [Meal; 4] = [Meal::Morning, Meal::Noon, Meal::Snack, Meal::Evening];

    pub fn label(&self) -> &str {
        match self {
            Meal::Morning => "Matin",
            Meal::Noon => "Midi",
            Meal::Snack => "Collation",
            Meal::Evening => "Soir",
            Meal::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One selected food in the plan, with derived macros at its quantity.
///
/// Entries are created and removed, never edited in place. `per_100g`
/// snapshots the catalog row the entry was built from.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub meal: Meal,
    pub food_name: String,
    pub group: FoodGroup,
    pub quantity_g: f64,
    pub protein_g: f64,
    pub lipid_g: f64,
    pub carb_g: f64,
    pub kcal: f64,
    pub per_100g: Food,
}

impl PlanEntry {
    /// Build an entry for `quantity_g` grams of a catalog food.
    ///
    /// All four derived macros are recomputed from the per-100g row.
    pub fn from_catalog(food: &Food, group: FoodGroup, meal: Meal, quantity_g: f64) -> Self {
        let macros = food.macros_at(quantity_g);
        Self {
            meal,
            food_name: food.name.clone(),
            group,
            quantity_g,
            protein_g: macros.protein_g,
            lipid_g: macros.lipid_g,
            carb_g: macros.carb_g,
            kcal: macros.kcal,
            per_100g: food.clone(),
        }
    }

    /// Build an entry from a solved protein quantity.
    ///
    /// The protein field is set to the exact deficit being closed, so
    /// the plan total lands on the target by construction. Lipids,
    /// carbs and calories are recomputed from the rounded quantity,
    /// which leaves a small residual against the stored protein. That
    /// asymmetry is deliberate and must not be "corrected".
    pub fn solved(
        food: &Food,
        group: FoodGroup,
        meal: Meal,
        quantity_g: f64,
        protein_g: f64,
    ) -> Self {
        let macros = food.macros_at(quantity_g);
        Self {
            meal,
            food_name: food.name.clone(),
            group,
            quantity_g,
            protein_g,
            lipid_g: macros.lipid_g,
            carb_g: macros.carb_g,
            kcal: macros.kcal,
            per_100g: food.clone(),
        }
    }
}
