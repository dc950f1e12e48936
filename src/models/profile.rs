use clap::ValueEnum;

/// Biological sex, as used by the BMR formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Homme",
            Sex::Female => "Femme",
        }
    }
}

/// Anthropometric inputs for the energy expenditure calculator.
///
/// Range checking happens at the input layer; the calculator itself
/// accepts any in-range numbers it is handed.
#[derive(Debug, Clone)]
pub struct ClientProfile {
    pub name: String,
    pub sex: Sex,
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Body fat percentage, only read by the lean-mass formulas.
    pub body_fat_pct: f64,
}

/// Daily macro targets the plan is built against.
#[derive(Debug, Clone, Copy)]
pub struct Targets {
    pub kcal: f64,
    pub protein_g: f64,
    pub lipid_g: f64,
    pub carb_g: f64,
}

pub const DEFAULT_PROTEIN_TARGET_G: f64 = 180.0;
pub const DEFAULT_LIPID_TARGET_G: f64 = 80.0;
pub const DEFAULT_CARB_TARGET_G: f64 = 300.0;

impl Targets {
    /// Default targets with the calorie goal seeded from the computed
    /// TDEE. Every field stays overridable by the practitioner.
    pub fn from_tdee(tdee: f64) -> Self {
        Self {
            kcal: tdee.round(),
            protein_g: DEFAULT_PROTEIN_TARGET_G,
            lipid_g: DEFAULT_LIPID_TARGET_G,
            carb_g: DEFAULT_CARB_TARGET_G,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_seeded_from_tdee() {
        let targets = Targets::from_tdee(2555.6);
        assert_eq!(targets.kcal, 2556.0);
        assert_eq!(targets.protein_g, DEFAULT_PROTEIN_TARGET_G);
        assert_eq!(targets.lipid_g, DEFAULT_LIPID_TARGET_G);
        assert_eq!(targets.carb_g, DEFAULT_CARB_TARGET_G);
    }
}
