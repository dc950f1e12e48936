use crate::models::{FoodGroup, PlanEntry, Targets};
use crate::planner::{ActivityLevel, Formula};
use crate::state::NutrientTotals;

/// Display the computed energy needs.
pub fn display_energy(formula: Formula, activity: ActivityLevel, bmr: f64, tdee: f64) {
    println!();
    println!("=== Energy needs ===");
    println!("Formula:  {}", formula.label());
    println!("Activity: {}", activity.label());
    println!("BMR:      {:.0} kcal", bmr);
    println!("TDEE:     {:.0} kcal", tdee);
    println!();
}

/// Display the plan in a formatted table.
pub fn display_plan(entries: &[PlanEntry]) {
    if entries.is_empty() {
        println!("The plan is empty.");
        return;
    }

    println!();
    println!("=== Plan ===");
    println!();

    let max_name_len = entries
        .iter()
        .map(|e| e.food_name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, entry) in entries.iter().enumerate() {
        let group_tag = if entry.group == FoodGroup::Other {
            String::new()
        } else {
            format!(" ({})", entry.group)
        };

        println!(
            "{:>3}. {:<10} {:<width$} {:>6.0}g | {:>5.0} kcal | P {:>5.1} | L {:>5.1} | G {:>5.1}{}",
            i + 1,
            entry.meal.label(),
            entry.food_name,
            entry.quantity_g,
            entry.kcal,
            entry.protein_g,
            entry.lipid_g,
            entry.carb_g,
            group_tag,
            width = max_name_len
        );
    }

    println!();
}

fn progress_line(label: &str, current: f64, target: f64, unit: &str) {
    let delta = current - target;
    let marker = if delta > 0.0 { "over" } else { "left" };
    println!(
        "{:<10} {:>7.1} / {:<7.1} {} ({:.1} {})",
        label,
        current,
        target,
        unit,
        delta.abs(),
        marker
    );
}

/// Display plan totals against the targets.
pub fn display_progress(totals: &NutrientTotals, targets: &Targets) {
    println!();
    println!("--- Progress ---");
    progress_line("Calories", totals.kcal, targets.kcal, "kcal");
    progress_line("Protein", totals.protein_g, targets.protein_g, "g");
    progress_line("Lipids", totals.lipid_g, targets.lipid_g, "g");
    progress_line("Carbs", totals.carb_g, targets.carb_g, "g");
    println!();
}

/// One-line confirmation after an entry lands in the plan.
pub fn display_entry_added(entry: &PlanEntry) {
    println!(
        "Added: {:.1}g {} [{}] -> {:.0} kcal, P {:.1}g",
        entry.quantity_g,
        entry.food_name,
        entry.group,
        entry.kcal,
        entry.protein_g
    );
}
