use crate::models::FoodGroup;
use crate::planner::constants::{
    EQUIVALENCE_STEP_G, MAX_EQUIVALENCE_SUGGESTIONS, group_profile,
};

/// Round a weight to the nearest 5 g step, half away from zero.
fn round_to_step(weight_g: f64) -> f64 {
    (weight_g / EQUIVALENCE_STEP_G).round() * EQUIVALENCE_STEP_G
}

/// Suggest calorie-equivalent portions of the group's reference foods.
///
/// For each reference, the weight delivering `target_kcal` is computed
/// by rule of three and snapped to 5 g. References whose name and the
/// current food's name are substrings of each other (either direction,
/// case-insensitive) are skipped so a food is never suggested as its
/// own equivalent. At most four suggestions, in table order. Empty for
/// `Other`.
///
/// Pure function: no I/O, deterministic for a given input.
pub fn generate_equivalences(
    group: FoodGroup,
    target_kcal: f64,
    current_food_name: &str,
) -> Vec<String> {
    let Some(profile) = group_profile(group) else {
        return Vec::new();
    };

    let current = current_food_name.to_lowercase();
    let mut suggestions = Vec::new();

    for reference in profile.references {
        let ref_name = reference.name.to_lowercase();
        if ref_name.contains(&current) || current.contains(&ref_name) {
            continue;
        }
        if reference.kcal_per_100g <= 0.0 {
            continue;
        }

        let weight_g = round_to_step(target_kcal * 100.0 / reference.kcal_per_100g);
        suggestions.push(format!("{}g {}", weight_g as i64, reference.name));

        if suggestions.len() == MAX_EQUIVALENCE_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

/// Render the suggestions as the sentence embedded in exported plans.
///
/// Empty when there is nothing to suggest.
pub fn equivalence_sentence(group: FoodGroup, target_kcal: f64, current_food_name: &str) -> String {
    let suggestions = generate_equivalences(group, target_kcal, current_food_name);
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("Ou environ : {}", suggestions.join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rice_at_260_kcal() {
        let equivs = generate_equivalences(FoodGroup::Starches, 260.0, "Riz cuit");
        // 260 × 100 / 110 = 236.36 -> nearest 5 = 235
        assert!(equivs.contains(&"235g Pâtes cuites".to_string()));
        // The queried food never suggests itself.
        assert!(equivs.iter().all(|e| !e.contains("Riz cuit")));
        assert_eq!(equivs.len(), MAX_EQUIVALENCE_SUGGESTIONS);
    }

    #[test]
    fn test_weights_are_multiples_of_five() {
        for kcal in [37.0, 111.0, 260.0, 482.5] {
            for e in generate_equivalences(FoodGroup::Starches, kcal, "Semoule") {
                let grams: i64 = e.split('g').next().unwrap().parse().unwrap();
                assert!(grams >= 0);
                assert_eq!(grams % 5, 0, "{} not on the 5g step", e);
            }
        }
    }

    #[test]
    fn test_self_exclusion_both_directions() {
        // Reference name contained in the queried name.
        let equivs = generate_equivalences(FoodGroup::Fruits, 100.0, "Pomme Golden");
        assert!(equivs.iter().all(|e| !e.ends_with("Pomme")));

        // Queried name contained in a reference name.
        let equivs = generate_equivalences(FoodGroup::Starches, 100.0, "Pâtes");
        assert!(equivs.iter().all(|e| !e.contains("Pâtes cuites")));
    }

    #[test]
    fn test_other_group_is_empty() {
        assert!(generate_equivalences(FoodGroup::Other, 500.0, "Eau").is_empty());
    }

    #[test]
    fn test_truncated_to_four() {
        // Starches has 8 references; a name matching none yields 4.
        let equivs = generate_equivalences(FoodGroup::Starches, 200.0, "Boulgour");
        assert_eq!(equivs.len(), 4);
        // Declaration order preserved.
        assert!(equivs[0].ends_with("Riz cuit"));
        assert!(equivs[1].ends_with("Pâtes cuites"));
    }

    #[test]
    fn test_sentence_formatting() {
        let sentence = equivalence_sentence(FoodGroup::Vegetables, 30.0, "Epinards");
        assert!(sentence.starts_with("Ou environ : "));
        assert!(sentence.contains(" / "));

        assert_eq!(equivalence_sentence(FoodGroup::Other, 30.0, "Eau"), "");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 30 kcal of salade verte (15 kcal/100g) = 200g exactly. The
        // query excludes the first reference so the fifth one fits.
        let equivs = generate_equivalences(FoodGroup::Vegetables, 30.0, "Haricots verts du jardin");
        assert!(equivs.contains(&"200g Salade verte".to_string()));
        // 487.5 / 5 = 97.5 rounds up (away from zero) to 98 -> 490.
        assert_eq!(super::round_to_step(487.5), 490.0);
        assert_eq!(super::round_to_step(0.0), 0.0);
    }
}
