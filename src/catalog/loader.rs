use super::Catalog;
use crate::error::{KisanOpsError, Result};
use crate::logic::calculations::parse_yield_estimate;
use crate::models::{CropRecommendation, FORECAST_DAYS};
use serde::de::DeserializeOwned;
use std::path::Path;

pub(super) struct TableFile {
    pub name: &'static str,
    embedded: &'static str,
}

pub(super) const SOIL_PROFILES: TableFile = TableFile {
    name: "soil_profiles.yaml",
    embedded: include_str!("../../data/soil_profiles.yaml"),
};

pub(super) const CROP_RECOMMENDATIONS: TableFile = TableFile {
    name: "crop_recommendations.yaml",
    embedded: include_str!("../../data/crop_recommendations.yaml"),
};

pub(super) const CROP_CHALLENGES: TableFile = TableFile {
    name: "crop_challenges.yaml",
    embedded: include_str!("../../data/crop_challenges.yaml"),
};

pub(super) const BASE_YIELDS: TableFile = TableFile {
    name: "base_yields.yaml",
    embedded: include_str!("../../data/base_yields.yaml"),
};

pub(super) const CROP_VARIETIES: TableFile = TableFile {
    name: "crop_varieties.yaml",
    embedded: include_str!("../../data/crop_varieties.yaml"),
};

pub(super) const WEATHER: TableFile = TableFile {
    name: "weather.yaml",
    embedded: include_str!("../../data/weather.yaml"),
};

/// File names accepted in a tables directory.
pub const TABLE_FILES: [&str; 6] = [
    SOIL_PROFILES.name,
    CROP_RECOMMENDATIONS.name,
    CROP_CHALLENGES.name,
    BASE_YIELDS.name,
    CROP_VARIETIES.name,
    WEATHER.name,
];

const MONTHS_IN_OUTLOOK: usize = 12;

pub(super) fn load_table<T: DeserializeOwned>(dir: Option<&Path>, table: &TableFile) -> Result<T> {
    if let Some(dir) = dir {
        let path = dir.join(table.name);
        if path.is_file() {
            tracing::debug!("Loading {} from {:?}", table.name, path);
            let content = std::fs::read_to_string(&path)?;
            return serde_yaml::from_str(&content).map_err(|e| {
                KisanOpsError::InvalidData(format!("{}: {}", path.display(), e))
            });
        }
        tracing::debug!("{} not found in {:?} - using embedded copy", table.name, dir);
    }

    serde_yaml::from_str(table.embedded)
        .map_err(|e| KisanOpsError::InvalidData(format!("embedded {}: {}", table.name, e)))
}

/// Check the invariants every resolver relies on.
pub(super) fn validate(catalog: &Catalog) -> Result<()> {
    if catalog.soil_profiles.is_empty() {
        return Err(KisanOpsError::InvalidData(
            "soil profile table has no regions".into(),
        ));
    }

    for profile in &catalog.soil_profiles {
        if profile.soil_types.is_empty() {
            return Err(KisanOpsError::InvalidData(format!(
                "{}: no soil types defined",
                profile.region
            )));
        }
        for soil in &profile.soil_types {
            for (name, range) in soil.ranges() {
                if !range.is_consistent() {
                    return Err(KisanOpsError::InvalidData(format!(
                        "{}/{}: {} range {}..{} does not contain typical value {}",
                        profile.region, soil.name, name, range.min, range.max, range.typical
                    )));
                }
            }
        }
    }

    let table = &catalog.crop_recommendations;
    if table.fallback.is_empty() {
        return Err(KisanOpsError::InvalidData(
            "crop recommendation fallback has no entries".into(),
        ));
    }
    for rec in table.fallback.iter() {
        validate_recommendation("fallback", rec)?;
    }
    for region in &table.regions {
        for soil in &region.soil_types {
            for (season, recs) in &soil.seasons {
                let location = format!("{}/{}/{}", region.region, soil.soil_type, season);
                for rec in recs.iter() {
                    validate_recommendation(&location, rec)?;
                }
            }
        }
    }

    for (crop, varieties) in &catalog.crop_varieties {
        if crop.to_lowercase() != *crop {
            return Err(KisanOpsError::InvalidData(format!(
                "crop varieties: crop key '{}' must be lowercase",
                crop
            )));
        }
        if varieties.is_empty() {
            return Err(KisanOpsError::InvalidData(format!(
                "crop varieties: {} has no varieties",
                crop
            )));
        }
    }

    if catalog.weather.regions.is_empty() {
        return Err(KisanOpsError::InvalidData(
            "weather table has no regions".into(),
        ));
    }
    for forecast in &catalog.weather.regions {
        if forecast.days.len() != FORECAST_DAYS {
            return Err(KisanOpsError::InvalidData(format!(
                "{}: forecast has {} days, expected {}",
                forecast.region,
                forecast.days.len(),
                FORECAST_DAYS
            )));
        }
    }
    if catalog.weather.long_term.len() != MONTHS_IN_OUTLOOK {
        return Err(KisanOpsError::InvalidData(format!(
            "long-term outlook has {} months, expected {}",
            catalog.weather.long_term.len(),
            MONTHS_IN_OUTLOOK
        )));
    }

    Ok(())
}

fn validate_recommendation(location: &str, rec: &CropRecommendation) -> Result<()> {
    if rec.suitability > 100 {
        return Err(KisanOpsError::InvalidData(format!(
            "{}: {} ({}) suitability {} exceeds 100",
            location, rec.crop, rec.variety, rec.suitability
        )));
    }
    if let Some((min, max)) = parse_yield_estimate(&rec.yield_estimate) {
        if min > max {
            return Err(KisanOpsError::InvalidData(format!(
                "{}: {} ({}) yield estimate '{}' has min above max",
                location, rec.crop, rec.variety, rec.yield_estimate
            )));
        }
    }
    Ok(())
}
