use crate::models::FoodGroup;

/// A reference food used to suggest calorie-equivalent portions.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFood {
    pub name: &'static str,
    pub kcal_per_100g: f64,
}

/// Detection keywords and reference portions for one food group.
#[derive(Debug, Clone, Copy)]
pub struct GroupProfile {
    pub group: FoodGroup,
    pub keywords: &'static [&'static str],
    pub references: &'static [ReferenceFood],
}

const fn reference(name: &'static str, kcal_per_100g: f64) -> ReferenceFood {
    ReferenceFood {
        name,
        kcal_per_100g,
    }
}

/// Group tables in detection priority order. Classification is
/// first-match-wins over this array, so the order is load-bearing.
pub static GROUP_PROFILES: [GroupProfile; 6] = [
    GroupProfile {
        group: FoodGroup::Starches,
        keywords: &[
            "riz",
            "pâte",
            "pate",
            "pomme de terre",
            "semoule",
            "blé",
            "pain",
            "quinoa",
            "lentille",
            "pois",
            "haricot rouge",
            "fève",
            "igname",
            "patate douce",
            "boulgour",
            "maïs",
            "flocon",
        ],
        references: &[
            reference("Riz cuit", 130.0),
            reference("Pâtes cuites", 110.0),
            reference("Pommes de terre", 85.0),
            reference("Patate douce", 86.0),
            reference("Pain complet", 240.0),
            reference("Lentilles cuites", 115.0),
            reference("Quinoa cuit", 120.0),
            reference("Banane plantain", 120.0),
        ],
    },
    GroupProfile {
        group: FoodGroup::ProteinSources,
        keywords: &[
            "poulet",
            "boeuf",
            "veau",
            "porc",
            "agneau",
            "dinde",
            "canard",
            "steak",
            "jambon",
            "poisson",
            "saumon",
            "thon",
            "colin",
            "cabillaud",
            "crevette",
            "oeuf",
            "merlu",
            "sardine",
            "maquereau",
        ],
        references: &[
            reference("Poulet (blanc)", 110.0),
            reference("Boeuf (5% MG)", 125.0),
            reference("Saumon", 200.0),
            reference("Oeufs (2 unités)", 140.0),
            reference("Thon conserve", 110.0),
            reference("Cabillaud", 80.0),
            reference("Tofu", 76.0),
        ],
    },
    GroupProfile {
        group: FoodGroup::Vegetables,
        keywords: &[
            "tomate",
            "carotte",
            "courgette",
            "haricot vert",
            "brocoli",
            "chou",
            "épinard",
            "poivron",
            "salade",
            "aubergine",
            "concombre",
            "radis",
            "poireau",
            "champignon",
        ],
        references: &[
            reference("Haricots verts", 30.0),
            reference("Carottes cuites", 35.0),
            reference("Brocoli", 34.0),
            reference("Courgettes", 17.0),
            reference("Salade verte", 15.0),
        ],
    },
    GroupProfile {
        group: FoodGroup::Fruits,
        keywords: &[
            "pomme",
            "banane",
            "orange",
            "poire",
            "fraise",
            "framboise",
            "myrtille",
            "kiwi",
            "raisin",
            "pêche",
            "abricot",
            "ananas",
            "mangue",
            "clémentine",
        ],
        references: &[
            reference("Pomme", 52.0),
            reference("Banane", 89.0),
            reference("Orange", 47.0),
            reference("Kiwi", 61.0),
            reference("Raisins", 67.0),
        ],
    },
    GroupProfile {
        group: FoodGroup::Fats,
        keywords: &[
            "huile",
            "beurre",
            "margarine",
            "avocat",
            "amande",
            "noix",
            "cacahuète",
            "cajou",
            "pistache",
            "mayonnaise",
            "vinaigrette",
        ],
        references: &[
            reference("Huile d'olive (1 c.à.s)", 90.0),
            reference("Beurre (10g)", 75.0),
            reference("Avocat", 160.0),
            reference("Amandes", 600.0),
            reference("Noix", 650.0),
        ],
    },
    GroupProfile {
        group: FoodGroup::Dairy,
        keywords: &[
            "lait",
            "yaourt",
            "fromage",
            "crème",
            "skyr",
            "faisselle",
            "blanc",
            "petit suisse",
        ],
        references: &[
            reference("Lait demi-écrémé (ml)", 46.0),
            reference("Yaourt nature", 50.0),
            reference("Fromage blanc 0%", 48.0),
            reference("Mozzarella", 280.0),
            reference("Comté", 410.0),
        ],
    },
];

/// Lookup the profile for a group. `Other` has none.
pub fn group_profile(group: FoodGroup) -> Option<&'static GroupProfile> {
    GROUP_PROFILES.iter().find(|p| p.group == group)
}

/// Maximum number of equivalence suggestions emitted per entry.
pub const MAX_EQUIVALENCE_SUGGESTIONS: usize = 4;

/// Equivalent weights snap to this step (grams).
pub const EQUIVALENCE_STEP_G: f64 = 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_matches_detectable_order() {
        let order: Vec<FoodGroup> = GROUP_PROFILES.iter().map(|p| p.group).collect();
        assert_eq!(order, FoodGroup::DETECTABLE.to_vec());
    }

    #[test]
    fn test_other_has_no_profile() {
        assert!(group_profile(FoodGroup::Other).is_none());
    }

    #[test]
    fn test_all_references_have_positive_kcal() {
        for profile in &GROUP_PROFILES {
            for r in profile.references {
                assert!(r.kcal_per_100g > 0.0, "{} has no calories", r.name);
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        // detect_group lowercases the food name, so keywords must
        // already be lowercase to ever match.
        for profile in &GROUP_PROFILES {
            for kw in profile.keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}
