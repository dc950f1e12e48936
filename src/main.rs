use clap::Parser;
use log::warn;

use nutri_solver_rs::cli::{Cli, Command};
use nutri_solver_rs::error::Result;
use nutri_solver_rs::export::{analyze_meal_description, build_payload, dispatch_plan};
use nutri_solver_rs::interface::{
    SessionAction, display_energy, display_entry_added, display_plan, display_progress,
    prompt_activity, prompt_body_fat, prompt_client_profile, prompt_entry_position, prompt_food,
    prompt_formula, prompt_meal, prompt_meal_description, prompt_menu, prompt_quantity,
    prompt_settings, prompt_targets, prompt_yes_no,
};
use nutri_solver_rs::models::{ClientProfile, Sex};
use nutri_solver_rs::planner::{
    ActivityLevel, Formula, compute_bmr, compute_tdee, detect_group,
};
use nutri_solver_rs::state::{
    Catalog, PlanManager, PractitionerSettings, load_catalog, load_settings, save_settings,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli {
        command,
        catalog,
        settings,
        export_url,
        ai_url,
    } = Cli::parse();

    match command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog, &settings, &export_url, &ai_url),
        Command::Energy {
            sex,
            age,
            weight,
            height,
            body_fat,
            formula,
            activity,
        } => cmd_energy(sex, age, weight, height, body_fat, formula, activity),
        Command::Settings { edit } => cmd_settings(&settings, edit),
    }
}

/// Load the catalog, degrading to an empty one on failure so the
/// session can still run (solver and energy tools stay usable).
fn load_catalog_or_empty(path: &str) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => {
            println!("Loaded {} foods from {}", catalog.len(), path);
            catalog
        }
        Err(e) => {
            warn!("catalog degraded to empty: {}", e);
            println!("Warning: {}. Continuing with an empty catalog.", e);
            Catalog::empty()
        }
    }
}

/// Rules string sent along with meal descriptions, summarizing the
/// practitioner's portion preferences.
fn nutrition_rules(settings: &PractitionerSettings) -> String {
    let mut rules = format!(
        "Portions par défaut : féculents {:.0}g, viande {:.0}g, poisson {:.0}g. Eau : {:.1}L par jour.",
        settings.starches_portion_g,
        settings.meat_portion_g,
        settings.fish_portion_g,
        settings.water_litres
    );
    if !settings.general_advice.is_empty() {
        rules.push(' ');
        rules.push_str(&settings.general_advice);
    }
    rules
}

/// Interactive planning session for one client.
fn cmd_plan(catalog_path: &str, settings_path: &str, export_url: &str, ai_url: &str) -> Result<()> {
    let settings = load_settings(settings_path);
    let catalog = load_catalog_or_empty(catalog_path);

    let mut profile = prompt_client_profile()?;
    let formula = prompt_formula()?;
    if formula.needs_body_fat() {
        profile.body_fat_pct = prompt_body_fat()?;
    }
    let activity = prompt_activity()?;

    let bmr = compute_bmr(&profile, formula);
    let tdee = compute_tdee(bmr, activity);
    display_energy(formula, activity, bmr, tdee);

    let targets = prompt_targets(tdee)?;
    let mut manager = PlanManager::new(targets);

    loop {
        println!();
        match prompt_menu()? {
            SessionAction::AddFood => {
                if catalog.is_empty() {
                    println!("The catalog is empty; provide a composition file to add foods.");
                    continue;
                }
                let Some(food) = prompt_food(&catalog)? else {
                    continue;
                };
                println!("Detected group: {}", detect_group(&food.name));
                let meal = prompt_meal()?;
                match prompt_quantity() {
                    Ok(quantity) => {
                        let entry = manager.add_food(&food, meal, quantity);
                        display_entry_added(&entry);
                    }
                    Err(e) => println!("{}", e),
                }
            }

            SessionAction::DescribeMeal => {
                let query = prompt_meal_description()?;
                if query.is_empty() {
                    continue;
                }
                let meal = prompt_meal()?;
                let rules = nutrition_rules(&settings);
                match analyze_meal_description(ai_url, &query, &meal, &rules) {
                    Ok(analysis) => {
                        for entry in analysis.entries {
                            display_entry_added(&entry);
                            manager.add(entry);
                        }
                        if analysis.skipped > 0 {
                            println!(
                                "{} item(s) could not be read and were skipped.",
                                analysis.skipped
                            );
                        }
                    }
                    Err(e) => println!("Meal analysis failed: {}", e),
                }
            }

            SessionAction::SolveProtein => {
                if catalog.is_empty() {
                    println!("The catalog is empty; provide a composition file to solve with.");
                    continue;
                }
                println!("Remaining protein: {:.1}g", manager.remaining_protein());
                let Some(food) = prompt_food(&catalog)? else {
                    continue;
                };
                let meal = prompt_meal()?;
                match manager.solve_and_add(&food, meal) {
                    Ok(entry) => display_entry_added(&entry),
                    Err(e) => println!("{}", e),
                }
            }

            SessionAction::RemoveEntry => {
                if manager.is_empty() {
                    println!("The plan is empty.");
                    continue;
                }
                display_plan(manager.entries());
                match prompt_entry_position(manager.len()).and_then(|i| manager.remove(i)) {
                    Ok(removed) => println!("Removed: {}", removed.food_name),
                    Err(e) => println!("{}", e),
                }
            }

            SessionAction::ShowPlan => {
                display_plan(manager.entries());
                display_progress(&manager.totals(), &manager.targets);
            }

            SessionAction::Export => {
                if manager.is_empty()
                    && !prompt_yes_no("The plan is empty. Export anyway?", false)?
                {
                    continue;
                }
                let payload = build_payload(
                    &profile.name,
                    bmr,
                    tdee,
                    &settings.general_advice,
                    manager.entries(),
                );
                match dispatch_plan(export_url, &payload) {
                    Ok(()) => println!("Plan exported."),
                    Err(e) => println!("Export failed: {}. The plan is kept; try again.", e),
                }
            }

            SessionAction::Quit => break,
        }
    }

    Ok(())
}

/// One-shot BMR/TDEE computation from command-line values.
fn cmd_energy(
    sex: Sex,
    age: u32,
    weight: f64,
    height: f64,
    body_fat: f64,
    formula: Formula,
    activity: ActivityLevel,
) -> Result<()> {
    let profile = ClientProfile {
        name: String::new(),
        sex,
        age_years: age,
        weight_kg: weight,
        height_cm: height,
        body_fat_pct: body_fat,
    };

    let bmr = compute_bmr(&profile, formula);
    let tdee = compute_tdee(bmr, activity);
    display_energy(formula, activity, bmr, tdee);
    Ok(())
}

/// Show the practitioner settings, optionally editing them.
fn cmd_settings(path: &str, edit: bool) -> Result<()> {
    let current = load_settings(path);

    println!("Starch portion:  {:.0}g", current.starches_portion_g);
    println!("Meat portion:    {:.0}g", current.meat_portion_g);
    println!("Fish portion:    {:.0}g", current.fish_portion_g);
    println!("Water target:    {:.1}L", current.water_litres);
    if current.general_advice.is_empty() {
        println!("General advice:  (none)");
    } else {
        println!("General advice:  {}", current.general_advice);
    }

    if edit {
        let updated = prompt_settings(&current)?;
        save_settings(path, &updated)?;
        println!("Settings saved to {}", path);
    }

    Ok(())
}
