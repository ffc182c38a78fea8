use super::Season;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    pub variety: String,
    /// 0-100 fit for the region, soil type and season
    pub suitability: u8,
    /// "<min>-<max> quintals/hectare", or free text for non-numeric crops
    pub yield_estimate: String,
    pub water_requirement: String,
    pub fertilizers: String,
    pub growing_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
}

impl CropRecommendation {
    pub fn matches(&self, crop: &str, variety: &str) -> bool {
        self.crop.eq_ignore_ascii_case(crop) && self.variety.eq_ignore_ascii_case(variety)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRecommendations {
    #[serde(default)]
    pub primary: Vec<CropRecommendation>,
    #[serde(default)]
    pub alternatives: Vec<CropRecommendation>,
}

impl SeasonalRecommendations {
    /// Primary entries first, then alternatives.
    pub fn iter(&self) -> impl Iterator<Item = &CropRecommendation> {
        self.primary.iter().chain(self.alternatives.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CropRecommendation> {
        self.primary.iter_mut().chain(self.alternatives.iter_mut())
    }

    pub fn find(&self, crop: &str, variety: &str) -> Option<&CropRecommendation> {
        self.iter().find(|c| c.matches(crop, variety))
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilCropTable {
    pub soil_type: String,
    #[serde(default)]
    pub seasons: HashMap<Season, SeasonalRecommendations>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCropTable {
    pub region: String,
    pub soil_types: Vec<SoilCropTable>,
}

impl RegionCropTable {
    pub fn soil_type(&self, name: &str) -> Option<&SoilCropTable> {
        self.soil_types.iter().find(|s| s.soil_type == name)
    }
}

/// Region → soil type → season → recommendations, plus the generic entries
/// served when nothing matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendationTable {
    pub fallback: SeasonalRecommendations,
    #[serde(default)]
    pub regions: Vec<RegionCropTable>,
}

impl CropRecommendationTable {
    pub fn region(&self, name: &str) -> Option<&RegionCropTable> {
        self.regions.iter().find(|r| r.region == name)
    }
}

/// Crop → season → challenge lines.
pub type CropChallengeTable = HashMap<String, HashMap<Season, Vec<String>>>;
