use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientStatus {
    Acidic,
    Optimal,
    Alkaline,
    Low,
    Medium,
    High,
}

impl NutrientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::Acidic => "Acidic",
            NutrientStatus::Optimal => "Optimal",
            NutrientStatus::Alkaline => "Alkaline",
            NutrientStatus::Low => "Low",
            NutrientStatus::Medium => "Medium",
            NutrientStatus::High => "High",
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, NutrientStatus::Optimal | NutrientStatus::Medium)
    }
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAssessment {
    pub value: f64,
    pub status: NutrientStatus,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilHealthReport {
    #[serde(rename = "pH")]
    pub ph: NutrientAssessment,
    pub nitrogen: NutrientAssessment,
    pub phosphorus: NutrientAssessment,
    pub potassium: NutrientAssessment,
}

impl SoilHealthReport {
    pub fn entries(&self) -> [(&'static str, &NutrientAssessment); 4] {
        [
            ("pH", &self.ph),
            ("Nitrogen", &self.nitrogen),
            ("Phosphorus", &self.phosphorus),
            ("Potassium", &self.potassium),
        ]
    }

    pub fn needs_attention(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, a)| !a.status.is_balanced())
            .map(|(name, _)| name)
            .collect()
    }
}
