use serde::{Deserialize, Serialize};

/// Observed range of a single soil parameter in a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
    pub typical: f64,
}

impl NutrientRange {
    /// `min <= typical <= max`
    pub fn is_consistent(&self) -> bool {
        self.min <= self.typical && self.typical <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilTypeProfile {
    pub name: String,
    pub description: String,
    pub ph: NutrientRange,
    pub nitrogen: NutrientRange,
    pub phosphorus: NutrientRange,
    pub potassium: NutrientRange,
    pub organic_matter: NutrientRange,
    #[serde(default)]
    pub crops: Vec<String>,
}

impl SoilTypeProfile {
    /// Named ranges in display order.
    pub fn ranges(&self) -> [(&'static str, &NutrientRange); 5] {
        [
            ("pH", &self.ph),
            ("Nitrogen", &self.nitrogen),
            ("Phosphorus", &self.phosphorus),
            ("Potassium", &self.potassium),
            ("Organic Matter", &self.organic_matter),
        ]
    }

    pub fn typical_parameters(&self) -> SoilParameters {
        SoilParameters {
            ph: self.ph.typical,
            nitrogen: self.nitrogen.typical,
            phosphorus: self.phosphorus.typical,
            potassium: self.potassium.typical,
            organic_matter: Some(self.organic_matter.typical),
        }
    }
}

/// Soil types keep the order they were authored in; the first one is the
/// region's predominant soil type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSoilProfile {
    pub region: String,
    pub soil_types: Vec<SoilTypeProfile>,
}

impl RegionSoilProfile {
    pub fn soil_type(&self, name: &str) -> Option<&SoilTypeProfile> {
        self.soil_types.iter().find(|s| s.name == name)
    }

    pub fn predominant(&self) -> Option<&SoilTypeProfile> {
        self.soil_types.first()
    }

    pub fn soil_type_names(&self) -> impl Iterator<Item = &str> {
        self.soil_types.iter().map(|s| s.name.as_str())
    }
}

/// A set of soil measurements, either typical values from a profile or
/// user-entered overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilParameters {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: Option<f64>,
}

impl Default for SoilParameters {
    fn default() -> Self {
        Self {
            ph: 7.0,
            nitrogen: 300.0,
            phosphorus: 15.0,
            potassium: 200.0,
            organic_matter: None,
        }
    }
}
