use crate::models::FoodGroup;
use crate::planner::constants::GROUP_PROFILES;

/// Classify a food into a group by keyword substring matching.
///
/// The name is lowercased and groups are scanned in the fixed table
/// order; the first group with a matching keyword wins, so a name
/// hitting keywords in two groups always resolves to the earlier one.
/// Total function: anything unmatched is `Other`.
///
/// Substring matching is known to be loose ("pomme de terre" contains
/// "pomme"), which is why starches are checked before fruits. Kept
/// as-is: the equivalence tables depend on these exact semantics.
pub fn detect_group(food_name: &str) -> FoodGroup {
    let name = food_name.to_lowercase();
    for profile in &GROUP_PROFILES {
        if profile.keywords.iter().any(|kw| name.contains(kw)) {
            return profile.group;
        }
    }
    FoodGroup::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_starches() {
        assert_eq!(detect_group("Riz cuit"), FoodGroup::Starches);
        assert_eq!(detect_group("Pain complet"), FoodGroup::Starches);
        assert_eq!(detect_group("Quinoa cuit, non salé"), FoodGroup::Starches);
    }

    #[test]
    fn test_detects_protein_sources() {
        assert_eq!(detect_group("Poulet, blanc, cuit"), FoodGroup::ProteinSources);
        assert_eq!(detect_group("Saumon fumé"), FoodGroup::ProteinSources);
        assert_eq!(detect_group("Oeuf dur"), FoodGroup::ProteinSources);
    }

    #[test]
    fn test_detects_remaining_groups() {
        assert_eq!(detect_group("Courgette crue"), FoodGroup::Vegetables);
        assert_eq!(detect_group("Kiwi vert"), FoodGroup::Fruits);
        assert_eq!(detect_group("Huile d'olive vierge"), FoodGroup::Fats);
        assert_eq!(detect_group("Yaourt nature"), FoodGroup::Dairy);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_group("RIZ BASMATI"), FoodGroup::Starches);
        assert_eq!(detect_group("PÂTES"), FoodGroup::Starches);
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(detect_group("Eau minérale"), FoodGroup::Other);
        assert_eq!(detect_group(""), FoodGroup::Other);
    }

    #[test]
    fn test_ambiguous_resolves_to_earlier_group() {
        // "pomme de terre" matches both the starch keyword and the
        // fruit keyword "pomme"; starches are scanned first.
        assert_eq!(detect_group("Pomme de terre vapeur"), FoodGroup::Starches);
        // "blanc" alone (dairy) vs "poulet" (protein): protein wins.
        assert_eq!(detect_group("Poulet blanc"), FoodGroup::ProteinSources);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(detect_group("Fromage blanc 3%"), FoodGroup::Dairy);
        }
    }
}
