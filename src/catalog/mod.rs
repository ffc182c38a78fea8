mod loader;
mod queries;

pub use loader::TABLE_FILES;

use crate::error::Result;
use crate::models::{CropChallengeTable, CropRecommendationTable, RegionSoilProfile, WeatherTable};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    Directory(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded tables"),
            CatalogSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Read-only reference tables. Built once at startup and shared by
/// reference with every resolver; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub soil_profiles: Vec<RegionSoilProfile>,
    pub crop_recommendations: CropRecommendationTable,
    pub crop_challenges: CropChallengeTable,
    pub base_yields: HashMap<String, f64>,
    /// Lowercase crop name to its varieties, default first
    pub crop_varieties: HashMap<String, Vec<String>>,
    pub weather: WeatherTable,
    source: CatalogSource,
}

impl Catalog {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::open(None)
    }

    /// Load tables from `tables_dir`, using the embedded copy for any file
    /// the directory does not provide.
    pub fn open(tables_dir: Option<&Path>) -> Result<Self> {
        let dir = tables_dir.filter(|d| {
            if d.is_dir() {
                true
            } else {
                tracing::warn!(
                    "Tables directory {:?} not found - using embedded tables",
                    d
                );
                false
            }
        });

        let catalog = Self {
            soil_profiles: loader::load_table(dir, &loader::SOIL_PROFILES)?,
            crop_recommendations: loader::load_table(dir, &loader::CROP_RECOMMENDATIONS)?,
            crop_challenges: loader::load_table(dir, &loader::CROP_CHALLENGES)?,
            base_yields: loader::load_table(dir, &loader::BASE_YIELDS)?,
            crop_varieties: loader::load_table(dir, &loader::CROP_VARIETIES)?,
            weather: loader::load_table(dir, &loader::WEATHER)?,
            source: match dir {
                Some(d) => CatalogSource::Directory(d.to_path_buf()),
                None => CatalogSource::Embedded,
            },
        };

        loader::validate(&catalog)?;

        tracing::info!(
            "Loaded catalog from {}: {} soil regions, {} crop regions, {} forecast regions",
            catalog.source,
            catalog.soil_profiles.len(),
            catalog.crop_recommendations.regions.len(),
            catalog.weather.regions.len()
        );

        Ok(catalog)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}
