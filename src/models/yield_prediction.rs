use serde::{Deserialize, Serialize};

/// Inputs for a single yield estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRequest {
    pub crop: String,
    pub variety: String,
    pub area_hectares: f64,
    pub soil_type: String,
    pub region: String,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorImpact {
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Adjustment Needed")]
    AdjustmentNeeded,
    Medium,
}

impl FactorImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorImpact::Positive => "Positive",
            FactorImpact::Neutral => "Neutral",
            FactorImpact::Negative => "Negative",
            FactorImpact::AdjustmentNeeded => "Adjustment Needed",
            FactorImpact::Medium => "Medium",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FactorImpact::Positive => "+",
            FactorImpact::Neutral => "=",
            FactorImpact::Negative => "-",
            FactorImpact::AdjustmentNeeded => "!",
            FactorImpact::Medium => "~",
        }
    }
}

impl std::fmt::Display for FactorImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldFactor {
    pub name: String,
    pub impact: FactorImpact,
    pub recommendation: String,
}

impl YieldFactor {
    pub fn new(name: &str, impact: FactorImpact, recommendation: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            impact,
            recommendation: recommendation.into(),
        }
    }
}

/// Yield in quintals for the whole area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub expected_yield: f64,
    pub yield_range: YieldRange,
    pub confidence: u8,
    pub factors: Vec<YieldFactor>,
}

impl YieldPrediction {
    pub fn per_hectare(&self, area_hectares: f64) -> f64 {
        self.expected_yield / area_hectares
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldSource {
    /// Parsed from the matching recommendation's yield estimate
    Table,
    /// No numeric table entry for the crop and variety
    Fallback,
}

/// Reference yield derived from the recommendation tables rather than the
/// soil-impact model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulatedYield {
    pub expected: f64,
    pub range: YieldRange,
    pub source: YieldSource,
}
