use super::Catalog;
use crate::models::{MonthlyClimate, RegionForecast, RegionSoilProfile, SoilParameters};

/// Quintals per hectare used when neither variety nor crop is tabulated.
pub const DEFAULT_BASE_YIELD: f64 = 25.0;

// Soil profiles

impl Catalog {
    pub fn regions(&self) -> Vec<&str> {
        self.soil_profiles.iter().map(|p| p.region.as_str()).collect()
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.soil_profiles.iter().any(|p| p.region == region)
    }

    /// Profile for `region`, or the first authored region when unknown.
    pub fn soil_profile(&self, region: &str) -> Option<&RegionSoilProfile> {
        self.soil_profiles
            .iter()
            .find(|p| p.region == region)
            .or_else(|| {
                tracing::debug!("No soil profile for {:?} - using default region", region);
                self.soil_profiles.first()
            })
    }

    pub fn predominant_soil_type(&self, region: &str) -> Option<&str> {
        self.soil_profile(region)
            .and_then(|p| p.predominant())
            .map(|s| s.name.as_str())
    }

    /// Typical values for a soil type of the region. An omitted or unknown
    /// soil type uses the region's predominant soil type.
    pub fn typical_soil_parameters(
        &self,
        region: &str,
        soil_type: Option<&str>,
    ) -> Option<SoilParameters> {
        let profile = self.soil_profile(region)?;
        soil_type
            .and_then(|name| profile.soil_type(name))
            .or_else(|| profile.predominant())
            .map(|s| s.typical_parameters())
    }
}

// Weather

impl Catalog {
    /// Seven-day forecast for `region`, or the first authored region when unknown.
    pub fn weather_forecast(&self, region: &str) -> Option<&RegionForecast> {
        self.weather
            .regions
            .iter()
            .find(|f| f.region == region)
            .or_else(|| self.weather.regions.first())
    }

    pub fn seasonal_description(&self, region: &str) -> &'static str {
        let avg_rainfall = self
            .weather_forecast(region)
            .map(|f| f.average_rainfall())
            .unwrap_or(0.0);

        if avg_rainfall > 10.0 {
            "Heavy monsoon conditions expected, ensure proper drainage and consider water-resistant crop varieties."
        } else if avg_rainfall > 5.0 {
            "Moderate rainfall expected, good conditions for most crops with adequate irrigation planning."
        } else if avg_rainfall > 0.0 {
            "Light rainfall expected, supplemental irrigation may be necessary for optimal crop growth."
        } else {
            "Dry conditions expected, irrigation will be essential for crop survival and growth."
        }
    }

    pub fn long_term_forecast(&self) -> &[MonthlyClimate] {
        &self.weather.long_term
    }
}

// Base yields

impl Catalog {
    /// Quintals per hectare: exact variety first, then the lowercase crop name.
    pub fn base_yield(&self, crop: &str, variety: &str) -> f64 {
        self.base_yields
            .get(variety)
            .or_else(|| self.base_yields.get(&crop.to_lowercase()))
            .copied()
            .unwrap_or(DEFAULT_BASE_YIELD)
    }
}

// Crop varieties

impl Catalog {
    /// Varieties listed for `crop` (any case), default first. Empty when the
    /// crop is not tabulated.
    pub fn varieties(&self, crop: &str) -> &[String] {
        self.crop_varieties
            .get(&crop.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn default_variety(&self, crop: &str) -> Option<&str> {
        self.varieties(crop).first().map(String::as_str)
    }

    /// False only when the crop has listed varieties and `variety` is not
    /// one of them.
    pub fn variety_belongs_to(&self, crop: &str, variety: &str) -> bool {
        let varieties = self.varieties(crop);
        varieties.is_empty() || varieties.iter().any(|v| v == variety)
    }
}
