use crate::catalog::Catalog;
use crate::config::FarmConfig;
use crate::logic::calculations::tabulated_yield;
use crate::logic::{
    annotate_with_challenges, analyze_soil_health, estimate_yield, get_crop_challenges,
    get_crop_recommendations, resolve_season, RandomSource,
};
use crate::models::{
    FactorImpact, Season, SeasonalRecommendations, SoilHealthReport, SoilParameters,
    TabulatedYield, YieldFactor, YieldPrediction, YieldRequest,
};
use chrono::{Local, NaiveDate};

/// Working state for one farm's forecast: the selected location, crop and
/// soil readings plus everything derived from them.
pub struct ForecastSession<'a> {
    catalog: &'a Catalog,

    // Selection
    pub region: String,
    pub soil_type: String,
    pub crop: String,
    pub variety: String,
    pub area_hectares: f64,
    pub date: NaiveDate,
    pub season: Season,
    pub soil: SoilParameters,

    // Derived
    pub recommendations: SeasonalRecommendations,
    pub prediction: Option<YieldPrediction>,

    pub status_message: Option<String>,
}

impl<'a> ForecastSession<'a> {
    pub fn new(catalog: &'a Catalog, farm: &FarmConfig) -> Self {
        Self::new_on(catalog, farm, Local::now().date_naive())
    }

    /// Session pinned to `date` instead of today.
    pub fn new_on(catalog: &'a Catalog, farm: &FarmConfig, date: NaiveDate) -> Self {
        let mut session = Self {
            catalog,
            region: String::new(),
            soil_type: String::new(),
            crop: String::new(),
            variety: String::new(),
            area_hectares: farm.area_hectares,
            date,
            season: resolve_season(date),
            soil: SoilParameters::default(),
            recommendations: SeasonalRecommendations::default(),
            prediction: None,
            status_message: None,
        };

        session.set_crop(&farm.crop, Some(farm.variety.as_str()));
        session.set_region(&farm.region);
        if let Some(ref soil_type) = farm.soil_type {
            session.set_soil_type(soil_type);
        }
        session
    }

    /// Switch region: soil type becomes the region's predominant type and
    /// soil readings reset to its typical values.
    pub fn set_region(&mut self, region: &str) {
        if !self.catalog.has_region(region) {
            tracing::debug!("Region {:?} has no soil profile - using defaults", region);
        }

        self.region = region.to_string();
        self.soil_type = self
            .catalog
            .predominant_soil_type(region)
            .unwrap_or_default()
            .to_string();
        self.soil = self
            .catalog
            .typical_soil_parameters(region, None)
            .unwrap_or_default();
        self.prediction = None;
        self.refresh_recommendations();
    }

    /// Switch soil type and reset soil readings to that type's typical values.
    pub fn set_soil_type(&mut self, soil_type: &str) {
        let known = self
            .catalog
            .soil_profile(&self.region)
            .is_some_and(|p| p.soil_type_names().any(|name| name == soil_type));
        if !known {
            tracing::debug!(
                "Soil type {:?} not profiled for {:?} - using predominant soil values",
                soil_type,
                self.region
            );
        }

        self.soil_type = soil_type.to_string();
        self.soil = self
            .catalog
            .typical_soil_parameters(&self.region, Some(soil_type))
            .unwrap_or_default();
        self.prediction = None;
        self.refresh_recommendations();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.season = resolve_season(date);
        self.prediction = None;
        self.refresh_recommendations();
    }

    /// Use `season` regardless of the date's own season.
    pub fn set_season(&mut self, season: Season) {
        if season == self.season {
            return;
        }
        self.season = season;
        self.prediction = None;
        self.refresh_recommendations();
    }

    /// Switch crop. Without a variety the crop's default variety is used, or
    /// none at all for a crop with no listed varieties.
    pub fn set_crop(&mut self, crop: &str, variety: Option<&str>) {
        let variety = match variety {
            Some(variety) => {
                if !self.catalog.variety_belongs_to(crop, variety) {
                    tracing::warn!(
                        "Variety {:?} is not listed for {:?} (expected one of {})",
                        variety,
                        crop,
                        self.catalog.varieties(crop).join(", ")
                    );
                }
                variety
            }
            None => self.catalog.default_variety(crop).unwrap_or_default(),
        };

        self.crop = crop.to_string();
        self.variety = variety.to_string();
        self.prediction = None;
    }

    pub fn set_area(&mut self, area_hectares: f64) {
        self.area_hectares = area_hectares;
        self.prediction = None;
    }

    /// Override the soil readings. Recommendations are not refreshed.
    pub fn set_soil_inputs(&mut self, ph: f64, nitrogen: f64, phosphorus: f64, potassium: f64) {
        self.soil = SoilParameters {
            ph,
            nitrogen,
            phosphorus,
            potassium,
            organic_matter: self.soil.organic_matter,
        };
        self.prediction = None;
    }

    pub fn refresh_recommendations(&mut self) {
        let recommendations = get_crop_recommendations(
            self.catalog,
            &self.region,
            &self.soil_type,
            Some(self.season),
        );
        self.recommendations =
            annotate_with_challenges(self.catalog, recommendations, &self.region, self.season);
    }

    pub fn yield_request(&self) -> YieldRequest {
        YieldRequest {
            crop: self.crop.clone(),
            variety: self.variety.clone(),
            area_hectares: self.area_hectares,
            soil_type: self.soil_type.clone(),
            region: self.region.clone(),
            ph: self.soil.ph,
            nitrogen: self.soil.nitrogen,
            phosphorus: self.soil.phosphorus,
            potassium: self.soil.potassium,
        }
    }

    /// Estimate the yield for the current selection and append one
    /// "Seasonal Challenge" factor per challenge line for the crop.
    pub fn calculate(&mut self, random: &mut dyn RandomSource) -> &YieldPrediction {
        let mut prediction = estimate_yield(self.catalog, &self.yield_request(), random);

        let challenges = get_crop_challenges(self.catalog, &self.crop, &self.region, self.season);
        prediction.factors.extend(
            challenges
                .into_iter()
                .map(|line| YieldFactor::new("Seasonal Challenge", FactorImpact::Medium, line)),
        );

        self.set_status(&format!(
            "Expected yield for {} ({}) is {:.2} quintals",
            self.crop, self.variety, prediction.expected_yield
        ));
        self.prediction.insert(prediction)
    }

    pub fn soil_health(&self) -> SoilHealthReport {
        analyze_soil_health(
            self.soil.ph,
            self.soil.nitrogen,
            self.soil.phosphorus,
            self.soil.potassium,
        )
    }

    /// Reference yield from the current recommendations table.
    pub fn tabulated_yield(&self) -> TabulatedYield {
        tabulated_yield(
            &self.recommendations,
            &self.crop,
            &self.variety,
            self.area_hectares,
        )
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }
}
