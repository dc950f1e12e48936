/// A catalog row: one food with its macros per 100 g.
///
/// Rows are immutable once loaded from the composition table.
#[derive(Debug, Clone, Default)]
pub struct Food {
    pub name: String,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub carb_per_100g: f64,
    pub lipid_per_100g: f64,
}

/// Macro amounts derived for a concrete quantity of a food.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroAmounts {
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub lipid_g: f64,
}

impl Food {
    /// Macros contained in `quantity_g` grams of this food.
    ///
    /// Each value is per-100g × quantity / 100; derived fields on plan
    /// entries must always come from here, never be edited directly.
    pub fn macros_at(&self, quantity_g: f64) -> MacroAmounts {
        let factor = quantity_g / 100.0;
        MacroAmounts {
            kcal: self.kcal_per_100g * factor,
            protein_g: self.protein_per_100g * factor,
            carb_g: self.carb_per_100g * factor,
            lipid_g: self.lipid_per_100g * factor,
        }
    }

    /// Basic validation: all macros non-negative.
    pub fn is_valid(&self) -> bool {
        self.kcal_per_100g >= 0.0
            && self.protein_per_100g >= 0.0
            && self.carb_per_100g >= 0.0
            && self.lipid_per_100g >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
