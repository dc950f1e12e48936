use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{ClientProfile, Food, Meal, Sex, Targets};
use crate::planner::{ActivityLevel, Formula};
use crate::state::{Catalog, PractitionerSettings};

/// Actions offered by the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    AddFood,
    DescribeMeal,
    SolveProtein,
    RemoveEntry,
    ShowPlan,
    Export,
    Quit,
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))
}

/// Collect the client profile for the energy calculator.
pub fn prompt_client_profile() -> Result<ClientProfile> {
    let name: String = Input::new()
        .with_prompt("Client name")
        .default("Client 1".to_string())
        .interact_text()?;

    let sexes = [Sex::Male, Sex::Female];
    let sex_labels: Vec<&str> = sexes.iter().map(|s| s.label()).collect();
    let sex_index = Select::new()
        .with_prompt("Sex")
        .items(&sex_labels)
        .default(0)
        .interact()?;

    let age = prompt_number("Age (years)", "30")?;
    let weight = prompt_number("Weight (kg)", "70")?;
    let height = prompt_number("Height (cm)", "175")?;

    Ok(ClientProfile {
        name,
        sex: sexes[sex_index],
        age_years: age as u32,
        weight_kg: weight,
        height_cm: height,
        body_fat_pct: 0.0,
    })
}

/// Select the BMR formula. No implicit default is applied.
pub fn prompt_formula() -> Result<Formula> {
    let labels: Vec<&str> = Formula::ALL.iter().map(|f| f.label()).collect();
    let index = Select::new()
        .with_prompt("BMR formula")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Formula::ALL[index])
}

/// Body fat percentage, asked only for lean-mass formulas.
pub fn prompt_body_fat() -> Result<f64> {
    prompt_number("Body fat (%)", "15")
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(2)
        .interact()?;
    Ok(ActivityLevel::ALL[index])
}

/// Targets pre-filled from the computed TDEE, all overridable.
pub fn prompt_targets(tdee: f64) -> Result<Targets> {
    let defaults = Targets::from_tdee(tdee);
    let kcal = prompt_number("Calorie target (kcal)", &format!("{:.0}", defaults.kcal))?;
    let protein = prompt_number("Protein target (g)", &format!("{:.0}", defaults.protein_g))?;
    let lipid = prompt_number("Lipid target (g)", &format!("{:.0}", defaults.lipid_g))?;
    let carb = prompt_number("Carb target (g)", &format!("{:.0}", defaults.carb_g))?;

    Ok(Targets {
        kcal,
        protein_g: protein,
        lipid_g: lipid,
        carb_g: carb,
    })
}

/// Search the catalog for a food by name.
///
/// Exact (case-insensitive) match first, then substring and fuzzy
/// candidates offered as a pick list. Returns None when the user gives
/// up or nothing matches.
pub fn prompt_food(catalog: &Catalog) -> Result<Option<Food>> {
    let input: String = Input::new()
        .with_prompt("Search a food (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return Ok(None);
    }

    if let Some(food) = catalog.get(&query) {
        return Ok(Some(food.clone()));
    }

    // Substring hits outrank fuzzy ones; both are shown together.
    let mut candidates: Vec<(&Food, f64)> = catalog
        .foods()
        .iter()
        .map(|f| {
            let name = f.name.to_lowercase();
            let score = if name.contains(&query) {
                1.0
            } else {
                jaro_winkler(&name, &query)
            };
            (f, score)
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input.trim());
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| food.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(8)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(catalog.get(&options[selection]).cloned())
    } else {
        Ok(None)
    }
}

/// Pick the meal slot for an entry.
pub fn prompt_meal() -> Result<Meal> {
    let mut options: Vec<String> = Meal::EXPORT_ORDER.iter().map(|m| m.label().to_string()).collect();
    options.push("Autre…".to_string());

    let selection = Select::new()
        .with_prompt("Meal")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < Meal::EXPORT_ORDER.len() {
        return Ok(Meal::EXPORT_ORDER[selection].clone());
    }

    let label: String = Input::new().with_prompt("Meal label").interact_text()?;
    let label = label.trim();
    if label.is_empty() {
        return Err(NutriError::InvalidInput("Empty meal label".to_string()));
    }
    Ok(Meal::Other(label.to_string()))
}

pub fn prompt_quantity() -> Result<f64> {
    let quantity = prompt_number("Quantity (g)", "100")?;
    if quantity < 0.0 {
        return Err(NutriError::InvalidInput(
            "Quantity must be non-negative".to_string(),
        ));
    }
    Ok(quantity)
}

/// 1-based plan position, for entry removal.
pub fn prompt_entry_position(entry_count: usize) -> Result<usize> {
    let input = prompt_number("Entry number to remove", "1")?;
    let position = input as usize;
    if position == 0 || position > entry_count {
        return Err(NutriError::InvalidInput(format!(
            "Entry number must be between 1 and {}",
            entry_count
        )));
    }
    Ok(position - 1)
}

/// Free-form meal description for the analysis webhook.
pub fn prompt_meal_description() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Describe the meal")
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Main session menu.
pub fn prompt_menu() -> Result<SessionAction> {
    const ACTIONS: [(SessionAction, &str); 7] = [
        (SessionAction::AddFood, "Add a food"),
        (SessionAction::DescribeMeal, "Describe a meal (AI analysis)"),
        (SessionAction::SolveProtein, "Solve the protein gap"),
        (SessionAction::RemoveEntry, "Remove an entry"),
        (SessionAction::ShowPlan, "Show the plan"),
        (SessionAction::Export, "Export the plan"),
        (SessionAction::Quit, "Quit"),
    ];

    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("Next action")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ACTIONS[selection].0)
}

/// Edit practitioner settings, field by field.
pub fn prompt_settings(current: &PractitionerSettings) -> Result<PractitionerSettings> {
    let starches = prompt_number(
        "Starch portion (g)",
        &format!("{:.0}", current.starches_portion_g),
    )?;
    let meat = prompt_number("Meat portion (g)", &format!("{:.0}", current.meat_portion_g))?;
    let fish = prompt_number("Fish portion (g)", &format!("{:.0}", current.fish_portion_g))?;
    let water = prompt_number("Water target (L)", &format!("{}", current.water_litres))?;

    let advice: String = Input::new()
        .with_prompt("General advice")
        .default(current.general_advice.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(PractitionerSettings {
        starches_portion_g: starches,
        meat_portion_g: meat,
        fish_portion_g: fish,
        water_litres: water,
        general_advice: advice,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
