use std::fmt;

/// Food family used for equivalence suggestions.
///
/// Labels match the Ciqual-derived French group names that the rest of
/// the toolchain (export documents, AI webhook) exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    Starches,
    ProteinSources,
    Vegetables,
    Fruits,
    Fats,
    Dairy,
    Other,
}

impl FoodGroup {
    /// Groups that carry keyword and reference tables, in detection
    /// priority order. First keyword match wins.
    pub const DETECTABLE: [FoodGroup; 6] = [
        FoodGroup::Starches,
        FoodGroup::ProteinSources,
        FoodGroup::Vegetables,
        FoodGroup::Fruits,
        FoodGroup::Fats,
        FoodGroup::Dairy,
    ];

    /// Display label, as exchanged with the document generator.
    pub fn label(&self) -> &'static str {
        match self {
            FoodGroup::Starches => "Féculents",
            FoodGroup::ProteinSources => "Viandes/Poissons/Oeufs",
            FoodGroup::Vegetables => "Légumes",
            FoodGroup::Fruits => "Fruits",
            FoodGroup::Fats => "Matières Grasses",
            FoodGroup::Dairy => "Produits Laitiers",
            FoodGroup::Other => "Autre",
        }
    }

    /// Parse a group label back into a variant.
    ///
    /// Unknown labels map to `Other`, mirroring the classifier fallback.
    pub fn from_label(label: &str) -> FoodGroup {
        let needle = label.trim().to_lowercase();
        Self::DETECTABLE
            .into_iter()
            .find(|g| g.label().to_lowercase() == needle)
            .unwrap_or(FoodGroup::Other)
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for group in FoodGroup::DETECTABLE {
            assert_eq!(FoodGroup::from_label(group.label()), group);
        }
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(FoodGroup::from_label("féculents"), FoodGroup::Starches);
        assert_eq!(FoodGroup::from_label(" FRUITS "), FoodGroup::Fruits);
    }

    #[test]
    fn test_unknown_label_is_other() {
        assert_eq!(FoodGroup::from_label("Boissons"), FoodGroup::Other);
        assert_eq!(FoodGroup::from_label(""), FoodGroup::Other);
    }
}
