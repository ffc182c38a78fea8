use super::random::RandomSource;
use super::soil_category::SoilCategory;
use super::thresholds::{region_factor, YieldBands};
use crate::catalog::Catalog;
use crate::models::{
    FactorImpact, YieldFactor, YieldPrediction, YieldRange, YieldRequest,
};

/// Perturbation is `PERTURBATION_MIN + u * PERTURBATION_SPAN` for `u` in [0, 1).
pub const PERTURBATION_MIN: f64 = 0.97;
pub const PERTURBATION_SPAN: f64 = 0.06;

pub const RANGE_LOW: f64 = 0.92;
pub const RANGE_HIGH: f64 = 1.08;

/// Composite soil and region multiplier for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilImpact {
    pub category: SoilCategory,
    pub bands: YieldBands,
    pub region_factor: f64,
    pub multiplier: f64,
}

impl SoilImpact {
    pub fn evaluate(
        soil_type: &str,
        region: &str,
        ph: f64,
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
    ) -> Self {
        let category = SoilCategory::classify(soil_type);
        let bands = YieldBands::evaluate(ph, nitrogen, phosphorus, potassium);
        let region_factor = region_factor(region);

        let multiplier = category.yield_factor() * bands.multiplier() * region_factor;

        Self {
            category,
            bands,
            region_factor,
            multiplier,
        }
    }

    pub fn for_request(request: &YieldRequest) -> Self {
        Self::evaluate(
            &request.soil_type,
            &request.region,
            request.ph,
            request.nitrogen,
            request.phosphorus,
            request.potassium,
        )
    }
}

pub fn perturbation(unit_draw: f64) -> f64 {
    PERTURBATION_MIN + unit_draw * PERTURBATION_SPAN
}

/// Estimate the harvest in quintals for the whole area.
///
/// The result varies by up to ±3% between calls unless `random` is
/// deterministic. Area and nutrient values are not validated: a zero or
/// negative area yields a zero or negative estimate.
pub fn estimate_yield(
    catalog: &Catalog,
    request: &YieldRequest,
    random: &mut dyn RandomSource,
) -> YieldPrediction {
    let base_yield = catalog.base_yield(&request.crop, &request.variety);
    let impact = SoilImpact::for_request(request);
    let random_factor = perturbation(random.next_unit());

    let expected_yield = base_yield * impact.multiplier * request.area_hectares * random_factor;

    tracing::debug!(
        crop = %request.crop,
        variety = %request.variety,
        base_yield,
        soil_impact = impact.multiplier,
        random_factor,
        "Estimated yield {:.2} q",
        expected_yield
    );

    YieldPrediction {
        expected_yield,
        yield_range: YieldRange {
            min: expected_yield * RANGE_LOW,
            max: expected_yield * RANGE_HIGH,
        },
        confidence: impact.bands.confidence(),
        factors: yield_factors(request, &impact),
    }
}

fn yield_factors(request: &YieldRequest, impact: &SoilImpact) -> Vec<YieldFactor> {
    let soil_quality = if impact.multiplier > 1.1 {
        "is excellent"
    } else if impact.multiplier > 1.0 {
        "is good"
    } else {
        "is adequate"
    };

    let (ph_impact, ph_text) = if impact.bands.ph {
        (FactorImpact::Positive, "Optimal pH for crop growth")
    } else {
        (
            FactorImpact::Negative,
            "Soil pH adjustment advised for better nutrient availability",
        )
    };

    let (n_impact, n_text) = if impact.bands.nitrogen {
        (FactorImpact::Positive, "Sufficient nitrogen for healthy growth")
    } else {
        (
            FactorImpact::AdjustmentNeeded,
            "Adjust nitrogen fertilizer application for best results",
        )
    };

    let region_quality = if impact.region_factor > 1.1 {
        "excellent"
    } else if impact.region_factor > 1.0 {
        "very good"
    } else {
        "suitable"
    };

    vec![
        YieldFactor::new(
            "Soil Type",
            if impact.multiplier > 1.0 {
                FactorImpact::Positive
            } else {
                FactorImpact::Neutral
            },
            format!(
                "Soil \"{}\" in {} {} for this crop",
                request.soil_type, request.region, soil_quality
            ),
        ),
        YieldFactor::new("pH", ph_impact, ph_text),
        YieldFactor::new("Nitrogen", n_impact, n_text),
        YieldFactor::new(
            "Region",
            if impact.region_factor > 1.0 {
                FactorImpact::Positive
            } else {
                FactorImpact::Neutral
            },
            format!(
                "{} has {} conditions for this crop",
                request.region, region_quality
            ),
        ),
    ]
}
