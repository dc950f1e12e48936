use serde::Serialize;

use crate::models::{Meal, PlanEntry};
use crate::planner::equivalence_sentence;

/// Body POSTed to the document-generation webhook. Field names are the
/// service's contract, hence the French keys.
#[derive(Debug, Serialize)]
pub struct ExportPayload {
    pub client_ref: String,
    pub total_kcal: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub conseils_generaux: String,
    pub repas: Vec<MealSection>,
}

#[derive(Debug, Serialize)]
pub struct MealSection {
    pub nom: String,
    pub aliments: Vec<FoodLine>,
}

#[derive(Debug, Serialize)]
pub struct FoodLine {
    pub nom: String,
    pub poids: f64,
    pub groupe: String,
    pub equivalences: String,
    pub prot: f64,
    pub lip: f64,
    pub gluc: f64,
    pub kcal: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Assemble the export payload from the current plan.
///
/// Entries are grouped by meal; the four standard meals come out in
/// the fixed Matin, Midi, Collation, Soir order, then any free-form
/// meal labels in first-seen order. Each food line carries its
/// equivalence sentence, generated at the entry's calorie amount.
pub fn build_payload(
    client_ref: &str,
    bmr: f64,
    tdee: f64,
    general_advice: &str,
    entries: &[PlanEntry],
) -> ExportPayload {
    let mut buckets: Vec<(Meal, Vec<FoodLine>)> = Vec::new();

    for entry in entries {
        let line = FoodLine {
            nom: entry.food_name.clone(),
            poids: entry.quantity_g,
            groupe: entry.group.label().to_string(),
            equivalences: equivalence_sentence(entry.group, entry.kcal, &entry.food_name),
            prot: round1(entry.protein_g),
            lip: round1(entry.lipid_g),
            gluc: round1(entry.carb_g),
            kcal: round1(entry.kcal),
        };

        match buckets.iter_mut().find(|(meal, _)| *meal == entry.meal) {
            Some((_, lines)) => lines.push(line),
            None => buckets.push((entry.meal.clone(), vec![line])),
        }
    }

    let mut repas = Vec::new();
    for meal in Meal::EXPORT_ORDER {
        if let Some(position) = buckets.iter().position(|(m, _)| *m == meal) {
            let (meal, aliments) = buckets.remove(position);
            repas.push(MealSection {
                nom: meal.label().to_string(),
                aliments,
            });
        }
    }
    for (meal, aliments) in buckets {
        repas.push(MealSection {
            nom: meal.label().to_string(),
            aliments,
        });
    }

    let total_kcal: f64 = entries.iter().map(|e| e.kcal).sum();

    ExportPayload {
        client_ref: client_ref.to_string(),
        total_kcal: round1(total_kcal),
        bmr: round1(bmr),
        tdee: round1(tdee),
        conseils_generaux: general_advice.to_string(),
        repas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, FoodGroup};

    fn entry(name: &str, group: FoodGroup, meal: Meal, qty: f64, kcal_per_100g: f64) -> PlanEntry {
        let food = Food {
            name: name.to_string(),
            kcal_per_100g,
            protein_per_100g: 10.0,
            carb_per_100g: 20.0,
            lipid_per_100g: 5.0,
        };
        PlanEntry::from_catalog(&food, group, meal, qty)
    }

    #[test]
    fn test_meal_ordering_standard_then_first_seen() {
        let entries = vec![
            entry("Yaourt nature", FoodGroup::Dairy, Meal::Evening, 100.0, 50.0),
            entry("Riz cuit", FoodGroup::Starches, Meal::Noon, 200.0, 130.0),
            entry(
                "Banane",
                FoodGroup::Fruits,
                Meal::Other("Post-training".to_string()),
                120.0,
                89.0,
            ),
            entry("Pomme", FoodGroup::Fruits, Meal::Snack, 150.0, 52.0),
        ];

        let payload = build_payload("Client 1", 1650.0, 2557.5, "", &entries);
        let names: Vec<&str> = payload.repas.iter().map(|m| m.nom.as_str()).collect();
        assert_eq!(names, vec!["Midi", "Collation", "Soir", "Post-training"]);
    }

    #[test]
    fn test_entries_of_same_meal_are_grouped() {
        let entries = vec![
            entry("Riz cuit", FoodGroup::Starches, Meal::Noon, 200.0, 130.0),
            entry("Pomme", FoodGroup::Fruits, Meal::Snack, 150.0, 52.0),
            entry("Poulet rôti", FoodGroup::ProteinSources, Meal::Noon, 150.0, 190.0),
        ];

        let payload = build_payload("Client 1", 1650.0, 2557.5, "", &entries);
        assert_eq!(payload.repas.len(), 2);
        assert_eq!(payload.repas[0].nom, "Midi");
        assert_eq!(payload.repas[0].aliments.len(), 2);
    }

    #[test]
    fn test_macros_rounded_to_one_decimal() {
        let entries = vec![entry("Riz cuit", FoodGroup::Starches, Meal::Noon, 123.0, 130.0)];
        let payload = build_payload("Client 1", 1648.754, 2555.569, "", &entries);

        let line = &payload.repas[0].aliments[0];
        // 130 × 1.23 = 159.9
        assert_eq!(line.kcal, 159.9);
        assert_eq!(payload.bmr, 1648.8);
        assert_eq!(payload.tdee, 2555.6);
    }

    #[test]
    fn test_food_line_carries_equivalence_sentence() {
        let entries = vec![entry("Riz cuit", FoodGroup::Starches, Meal::Noon, 200.0, 130.0)];
        let payload = build_payload("Client 1", 1650.0, 2557.5, "", &entries);

        let line = &payload.repas[0].aliments[0];
        assert!(line.equivalences.starts_with("Ou environ : "));
        assert!(line.equivalences.contains("235g Pâtes cuites"));
        assert_eq!(line.groupe, "Féculents");
    }

    #[test]
    fn test_serialized_keys_are_french() {
        let entries = vec![entry("Riz cuit", FoodGroup::Starches, Meal::Noon, 100.0, 130.0)];
        let payload = build_payload("Client 1", 1650.0, 2557.5, "Bien mâcher.", &entries);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("repas").is_some());
        assert!(json.get("conseils_generaux").is_some());
        let line = &json["repas"][0]["aliments"][0];
        for key in ["nom", "poids", "groupe", "equivalences", "prot", "lip", "gluc", "kcal"] {
            assert!(line.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_empty_plan_payload() {
        let payload = build_payload("Client 1", 1650.0, 2557.5, "", &[]);
        assert!(payload.repas.is_empty());
        assert_eq!(payload.total_kcal, 0.0);
    }
}
