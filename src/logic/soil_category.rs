use serde::{Deserialize, Serialize};

/// Yield class of a free-text soil type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilCategory {
    Black,
    Red,
    Alluvial,
    Usar,
    Calcareous,
    Laterite,
    Other,
}

impl SoilCategory {
    /// Case-insensitive substring match, first hit wins in this order:
    /// black, red, alluvial, usar, calcareous, laterite.
    /// "red and yellow" is therefore Red and "black cotton" is Black.
    pub fn classify(soil_type: &str) -> Self {
        const ORDER: [(&str, SoilCategory); 6] = [
            ("black", SoilCategory::Black),
            ("red", SoilCategory::Red),
            ("alluvial", SoilCategory::Alluvial),
            ("usar", SoilCategory::Usar),
            ("calcareous", SoilCategory::Calcareous),
            ("laterite", SoilCategory::Laterite),
        ];

        let lower = soil_type.to_lowercase();
        ORDER
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map(|(_, category)| *category)
            .unwrap_or(SoilCategory::Other)
    }

    pub fn yield_factor(&self) -> f64 {
        match self {
            SoilCategory::Black => 1.18,
            SoilCategory::Red => 0.95,
            SoilCategory::Alluvial => 1.20,
            SoilCategory::Usar | SoilCategory::Calcareous => 0.75,
            SoilCategory::Laterite => 0.80,
            SoilCategory::Other => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilCategory::Black => "Black",
            SoilCategory::Red => "Red",
            SoilCategory::Alluvial => "Alluvial",
            SoilCategory::Usar => "Usar",
            SoilCategory::Calcareous => "Calcareous",
            SoilCategory::Laterite => "Laterite",
            SoilCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for SoilCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_table_soil_types() {
        assert_eq!(SoilCategory::classify("alluvial"), SoilCategory::Alluvial);
        assert_eq!(SoilCategory::classify("black cotton"), SoilCategory::Black);
        assert_eq!(SoilCategory::classify("red and yellow"), SoilCategory::Red);
        assert_eq!(SoilCategory::classify("red"), SoilCategory::Red);
        assert_eq!(SoilCategory::classify("usar"), SoilCategory::Usar);
        assert_eq!(SoilCategory::classify("calcareous"), SoilCategory::Calcareous);
        assert_eq!(SoilCategory::classify("laterite"), SoilCategory::Laterite);
    }

    #[test]
    fn classify_is_case_insensitive_substring() {
        assert_eq!(SoilCategory::classify("Deep BLACK Regur"), SoilCategory::Black);
        assert_eq!(SoilCategory::classify("Old Alluvial (bhangar)"), SoilCategory::Alluvial);
    }

    #[test]
    fn earlier_keyword_wins() {
        // "black" is checked before "red"
        assert_eq!(SoilCategory::classify("red-black mixed"), SoilCategory::Black);
        // "red" before "laterite"
        assert_eq!(SoilCategory::classify("red laterite"), SoilCategory::Red);
    }

    #[test]
    fn unknown_soil_is_neutral() {
        assert_eq!(SoilCategory::classify("loam"), SoilCategory::Other);
        assert_eq!(SoilCategory::classify(""), SoilCategory::Other);
        assert_eq!(SoilCategory::Other.yield_factor(), 1.0);
    }

    #[test]
    fn usar_and_calcareous_share_factor() {
        assert_eq!(SoilCategory::Usar.yield_factor(), 0.75);
        assert_eq!(SoilCategory::Calcareous.yield_factor(), 0.75);
    }
}
