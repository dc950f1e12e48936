use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NutriError, Result};
use crate::models::{Food, FoodGroup, Meal, PlanEntry};
use crate::planner::detect_group;

/// Default endpoint of the meal-description analysis webhook.
pub const DEFAULT_AI_URL: &str = "https://n8n.srv775529.hstgr.cloud/webhook/description-repas";

#[derive(Debug, Serialize)]
struct AiRequest<'a> {
    user_query: &'a str,
    meal_type: &'a str,
    nutrition_rules: &'a str,
}

/// One analyzed food as the service reports it.
#[derive(Debug, Deserialize)]
struct AiFoodItem {
    aliment_reference: String,
    poids_g: f64,
    kcal_total: f64,
    prot: f64,
    lip: f64,
    gluc: f64,
    #[serde(default)]
    categorie: String,
}

/// Result of one analysis call: the entries that parsed, and how many
/// items were dropped as malformed.
#[derive(Debug)]
pub struct MealAnalysis {
    pub entries: Vec<PlanEntry>,
    pub skipped: usize,
}

/// Ask the analysis webhook to break a described meal into foods.
///
/// The plan state is not touched here; the caller appends the returned
/// entries. A malformed overall response is an error; individually
/// malformed items are skipped and counted.
pub fn analyze_meal_description(
    url: &str,
    user_query: &str,
    meal: &Meal,
    nutrition_rules: &str,
) -> Result<MealAnalysis> {
    let request = AiRequest {
        user_query,
        meal_type: meal.label(),
        nutrition_rules,
    };

    let client = reqwest::blocking::Client::new();
    let response = client.post(url).json(&request).send()?;

    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().unwrap_or_default();
        return Err(NutriError::ExportServer { status, body });
    }

    let value: Value = response
        .json()
        .map_err(|e| NutriError::AiResponseMalformed(e.to_string()))?;

    parse_analysis(value, meal)
}

/// Unwrap the service's envelope down to the analysis object.
///
/// The body arrives either as an object or as a one-element list of
/// objects, and the payload itself may sit under an `output` key as a
/// nested JSON string. Tolerates each of those shapes, nothing more.
fn unwrap_envelope(value: Value) -> Result<Value> {
    let mut value = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| NutriError::AiResponseMalformed("empty list response".to_string()))?,
        other => other,
    };

    if let Some(output) = value.get_mut("output").map(Value::take) {
        value = match output {
            Value::String(raw) => serde_json::from_str(&raw).map_err(|e| {
                NutriError::AiResponseMalformed(format!("nested output is not JSON: {}", e))
            })?,
            other => other,
        };
    }

    Ok(value)
}

/// Convert the unwrapped response into plan entries.
fn parse_analysis(value: Value, meal: &Meal) -> Result<MealAnalysis> {
    let value = unwrap_envelope(value)?;

    let items = value
        .get("analyse")
        .and_then(Value::as_array)
        .ok_or_else(|| NutriError::AiResponseMalformed("no 'analyse' list".to_string()))?;

    let mut entries = Vec::new();
    let mut skipped = 0;

    for item in items {
        match serde_json::from_value::<AiFoodItem>(item.clone()) {
            Ok(item) => entries.push(entry_from_item(item, meal)),
            Err(e) => {
                warn!("skipping malformed analysis item: {}", e);
                skipped += 1;
            }
        }
    }

    Ok(MealAnalysis { entries, skipped })
}

/// Build a plan entry from an analyzed item.
///
/// The group comes from the reported label, with keyword detection on
/// the food name as fallback. The per-100g snapshot is reconstructed
/// from the reported totals so the entry keeps the same invariant as
/// catalog entries.
fn entry_from_item(item: AiFoodItem, meal: &Meal) -> PlanEntry {
    let group = match FoodGroup::from_label(&item.categorie) {
        FoodGroup::Other => detect_group(&item.aliment_reference),
        group => group,
    };

    let per_100g = if item.poids_g > 0.0 {
        let factor = 100.0 / item.poids_g;
        Food {
            name: item.aliment_reference.clone(),
            kcal_per_100g: item.kcal_total * factor,
            protein_per_100g: item.prot * factor,
            carb_per_100g: item.gluc * factor,
            lipid_per_100g: item.lip * factor,
        }
    } else {
        Food {
            name: item.aliment_reference.clone(),
            ..Food::default()
        }
    };

    PlanEntry {
        meal: meal.clone(),
        food_name: item.aliment_reference,
        group,
        quantity_g: item.poids_g,
        protein_g: item.prot,
        lipid_g: item.lip,
        carb_g: item.gluc,
        kcal: item.kcal_total,
        per_100g,
    }
}
