use clap::ValueEnum;

use crate::models::{ClientProfile, Sex};

/// Basal metabolic rate formula.
///
/// Two historical versions of the intake form disagreed on the formula
/// set (one offered the first three, the other only Harris-Benedict),
/// so all four remain selectable and none is a hardcoded default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Formula {
    MifflinStJeor,
    KatchMcArdle,
    Cunningham,
    HarrisBenedict,
}

impl Formula {
    pub const ALL: [Formula; 4] = [
        Formula::MifflinStJeor,
        Formula::KatchMcArdle,
        Formula::Cunningham,
        Formula::HarrisBenedict,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Formula::MifflinStJeor => "Mifflin-St Jeor",
            Formula::KatchMcArdle => "Katch-McArdle",
            Formula::Cunningham => "Cunningham",
            Formula::HarrisBenedict => "Harris-Benedict",
        }
    }

    /// Whether the formula works on lean body mass and therefore needs
    /// a body fat percentage.
    pub fn needs_body_fat(&self) -> bool {
        matches!(self, Formula::KatchMcArdle | Formula::Cunningham)
    }
}

/// Daily activity multiplier applied to the BMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sédentaire (1.2)",
            ActivityLevel::Light => "Légèrement actif (1.375)",
            ActivityLevel::Moderate => "Modérément actif (1.55)",
            ActivityLevel::Active => "Très actif (1.725)",
            ActivityLevel::VeryActive => "Extrêmement actif (1.9)",
        }
    }
}

/// Lean body mass from total weight and body fat percentage.
pub fn lean_body_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * (1.0 - body_fat_pct / 100.0)
}

/// Basal metabolic rate in kcal/day under the selected formula.
///
/// Pure arithmetic; out-of-range inputs are the input layer's problem.
pub fn compute_bmr(profile: &ClientProfile, formula: Formula) -> f64 {
    let weight = profile.weight_kg;
    let height = profile.height_cm;
    let age = f64::from(profile.age_years);

    match formula {
        Formula::MifflinStJeor => {
            let base = 10.0 * weight + 6.25 * height - 5.0 * age;
            match profile.sex {
                Sex::Male => base + 5.0,
                Sex::Female => base - 161.0,
            }
        }
        Formula::KatchMcArdle => 370.0 + 21.6 * lean_body_mass(weight, profile.body_fat_pct),
        Formula::Cunningham => 500.0 + 22.0 * lean_body_mass(weight, profile.body_fat_pct),
        Formula::HarrisBenedict => match profile.sex {
            Sex::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
            Sex::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
        },
    }
}

/// Total daily energy expenditure.
pub fn compute_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_profile() -> ClientProfile {
        ClientProfile {
            name: "Client 1".to_string(),
            sex: Sex::Male,
            age_years: 30,
            weight_kg: 70.0,
            height_cm: 175.0,
            body_fat_pct: 15.0,
        }
    }

    #[test]
    fn test_mifflin_male() {
        // 10×70 + 6.25×175 − 5×30 + 5 = 1648.75
        let bmr = compute_bmr(&male_profile(), Formula::MifflinStJeor);
        assert!((bmr - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_female_offset() {
        let mut profile = male_profile();
        profile.sex = Sex::Female;
        let male = compute_bmr(&male_profile(), Formula::MifflinStJeor);
        let female = compute_bmr(&profile, Formula::MifflinStJeor);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle() {
        // lbm = 70 × 0.85 = 59.5; 370 + 21.6 × 59.5 = 1655.2
        let bmr = compute_bmr(&male_profile(), Formula::KatchMcArdle);
        assert!((bmr - 1655.2).abs() < 1e-9);
    }

    #[test]
    fn test_cunningham() {
        // 500 + 22 × 59.5 = 1809.0
        let bmr = compute_bmr(&male_profile(), Formula::Cunningham);
        assert!((bmr - 1809.0).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict_reference_value() {
        // 88.362 + 13.397×70 + 4.799×175 − 5.677×30 = 1695.337
        let bmr = compute_bmr(&male_profile(), Formula::HarrisBenedict);
        assert!((bmr - 1695.337).abs() < 1e-6);
    }

    #[test]
    fn test_harris_benedict_female() {
        let mut profile = male_profile();
        profile.sex = Sex::Female;
        // 447.593 + 9.247×70 + 3.098×175 − 4.330×30 = 1508.823
        let bmr = compute_bmr(&profile, Formula::HarrisBenedict);
        assert!((bmr - 1508.823).abs() < 1e-6);
    }

    #[test]
    fn test_tdee_factors() {
        assert!((compute_tdee(1600.0, ActivityLevel::Sedentary) - 1920.0).abs() < 1e-9);
        assert!((compute_tdee(1600.0, ActivityLevel::Moderate) - 2480.0).abs() < 1e-9);
        assert!((compute_tdee(1600.0, ActivityLevel::VeryActive) - 3040.0).abs() < 1e-9);
    }

    #[test]
    fn test_lean_mass_formulas_ignore_height_and_age() {
        let mut profile = male_profile();
        profile.height_cm = 200.0;
        profile.age_years = 60;
        assert_eq!(
            compute_bmr(&profile, Formula::KatchMcArdle),
            compute_bmr(&male_profile(), Formula::KatchMcArdle)
        );
    }
}
