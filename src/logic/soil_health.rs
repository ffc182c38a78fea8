use super::thresholds::*;
use crate::models::{NutrientAssessment, NutrientStatus, SoilHealthReport};

/// Classify pH and N/P/K (kg/ha) against fixed agronomic bands.
///
/// Inputs are not validated: a negative pH is still "Acidic".
pub fn analyze_soil_health(
    ph: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> SoilHealthReport {
    SoilHealthReport {
        ph: assess(ph, classify_ph(ph), ph_advice),
        nitrogen: assess(
            nitrogen,
            classify_level(nitrogen, NITROGEN_LOW_BELOW, NITROGEN_HIGH_ABOVE),
            nitrogen_advice,
        ),
        phosphorus: assess(
            phosphorus,
            classify_level(phosphorus, PHOSPHORUS_LOW_BELOW, PHOSPHORUS_HIGH_ABOVE),
            phosphorus_advice,
        ),
        potassium: assess(
            potassium,
            classify_level(potassium, POTASSIUM_LOW_BELOW, POTASSIUM_HIGH_ABOVE),
            potassium_advice,
        ),
    }
}

fn assess(
    value: f64,
    status: NutrientStatus,
    advice: fn(NutrientStatus) -> &'static str,
) -> NutrientAssessment {
    NutrientAssessment {
        value,
        status,
        recommendation: advice(status).to_string(),
    }
}

fn classify_ph(ph: f64) -> NutrientStatus {
    if ph < PH_ACIDIC_BELOW {
        NutrientStatus::Acidic
    } else if ph > PH_ALKALINE_ABOVE {
        NutrientStatus::Alkaline
    } else {
        NutrientStatus::Optimal
    }
}

fn classify_level(value: f64, low_below: f64, high_above: f64) -> NutrientStatus {
    if value < low_below {
        NutrientStatus::Low
    } else if value > high_above {
        NutrientStatus::High
    } else {
        NutrientStatus::Medium
    }
}

fn ph_advice(status: NutrientStatus) -> &'static str {
    match status {
        NutrientStatus::Acidic => "Add lime to increase soil pH for better nutrient availability",
        NutrientStatus::Alkaline => "Add organic matter or sulfur to lower pH gradually",
        _ => "pH is in optimal range for most crops",
    }
}

fn nitrogen_advice(status: NutrientStatus) -> &'static str {
    match status {
        NutrientStatus::Low => {
            "Apply nitrogen-rich fertilizers or incorporate legumes in rotation"
        }
        NutrientStatus::High => "Reduce nitrogen application, consider nitrogen-consuming crops",
        _ => "Maintain current nitrogen management practices",
    }
}

fn phosphorus_advice(status: NutrientStatus) -> &'static str {
    match status {
        NutrientStatus::Low => "Apply phosphate fertilizers and incorporate organic matter",
        NutrientStatus::High => "Reduce phosphorus application to prevent runoff issues",
        _ => "Maintain current phosphorus levels with balanced fertilization",
    }
}

fn potassium_advice(status: NutrientStatus) -> &'static str {
    match status {
        NutrientStatus::Low => "Apply potassium-rich fertilizers like potassium sulfate",
        NutrientStatus::High => "Reduce potassium application in future seasons",
        _ => "Maintain current potassium management practices",
    }
}
