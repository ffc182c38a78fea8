use crate::error::{KisanOpsError, Result};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TABLES_DIR_ENV: &str = "KISANOPS_TABLES_DIR";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Defaults for every command option the user leaves unspecified.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub region: String,
    /// Predominant soil type of the region when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    pub crop: String,
    pub variety: String,
    #[serde(deserialize_with = "deserialize_area")]
    pub area_hectares: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory whose table files replace the built-in ones
    #[serde(default)]
    pub tables_dir: Option<PathBuf>,
}

/// Accepts a number or a numeric string, so `${FARM_AREA}` substitutions work.
fn deserialize_area<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Area {
        Number(f64),
        Text(String),
    }

    match Area::deserialize(deserializer)? {
        Area::Number(n) => Ok(n),
        Area::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            D::Error::custom(format!(
                "invalid area_hectares '{}' - ensure the substituted environment variable is set",
                s
            ))
        }),
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(KisanOpsError::Config(format!(
                "Config file not found at {:?}. Run `kisanops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| KisanOpsError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML config text after environment substitution.
    pub fn parse(content: &str) -> Result<Self> {
        let config_str = Self::substitute_env_vars(content);

        serde_yaml::from_str(&config_str)
            .map_err(|e| KisanOpsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load the config if one exists, otherwise fall back to built-in defaults.
    /// An explicit `--config` path must exist.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::debug!("No config file found - using defaults");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("kisanops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/kisanops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KisanOpsError::Config("Cannot determine config directory".into()))?
            .join("kisanops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(regions: &[&str]) -> Result<(Self, PathBuf)> {
        let defaults = FarmConfig::default();

        println!();
        println!("Let's set up KisanOps!");
        println!();

        println!("Farm Profile");
        let name: String = Input::new()
            .with_prompt("  Farm name")
            .default(defaults.name.clone())
            .interact_text()
            .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;

        let region = if regions.is_empty() {
            defaults.region.clone()
        } else {
            let default_index = regions
                .iter()
                .position(|r| *r == defaults.region)
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("  Region")
                .items(regions)
                .default(default_index)
                .interact()
                .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;
            regions[index].to_string()
        };

        let soil_type: String = Input::new()
            .with_prompt("  Soil type (blank for the region's predominant type)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Crop");
        let crop: String = Input::new()
            .with_prompt("  Crop (rice, wheat, maize, ...)")
            .default(defaults.crop.clone())
            .interact_text()
            .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;

        let variety: String = Input::new()
            .with_prompt("  Variety")
            .default(defaults.variety.clone())
            .interact_text()
            .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;

        let area_hectares: f64 = Input::new()
            .with_prompt("  Area (hectares)")
            .default(defaults.area_hectares)
            .interact_text()
            .map_err(|e| KisanOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name,
                region,
                soil_type: if soil_type.trim().is_empty() {
                    None
                } else {
                    Some(soil_type.trim().to_string())
                },
                crop,
                variety,
                area_hectares,
            },
            data: DataConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;

        let content = format!(
            "# KisanOps Configuration\n# Generated by `kisanops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Table override directory: CLI flag, then `KISANOPS_TABLES_DIR`, then
    /// `data.tables_dir`. `None` means built-in tables only.
    pub fn tables_dir(&self, tables_dir_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(dir) = tables_dir_override {
            return Some(dir.to_path_buf());
        }

        if let Ok(dir) = std::env::var(TABLES_DIR_ENV) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }

        self.data.tables_dir.clone()
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "Home Farm".into(),
            region: "West Bengal".into(),
            soil_type: None,
            crop: "rice".into(),
            variety: "IR36".into(),
            area_hectares: 1.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig::default(),
            data: DataConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse(
            "farm:\n  name: Test Farm\n  region: Punjab\n  crop: wheat\n  variety: HD2967\n  area_hectares: 2.5\n",
        )
        .unwrap();
        assert_eq!(config.farm.region, "Punjab");
        assert_eq!(config.farm.soil_type, None);
        assert_eq!(config.farm.area_hectares, 2.5);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("KISANOPS_TEST_FARM_AREA", "3.25");
        std::env::set_var("KISANOPS_TEST_FARM_REGION", "Karnataka");
        let config = Config::parse(
            "farm:\n  name: Env Farm\n  region: ${KISANOPS_TEST_FARM_REGION}\n  crop: maize\n  variety: DHM117\n  area_hectares: \"${KISANOPS_TEST_FARM_AREA}\"\n",
        )
        .unwrap();
        assert_eq!(config.farm.region, "Karnataka");
        assert_eq!(config.farm.area_hectares, 3.25);
    }

    #[test]
    fn test_unset_area_variable_is_config_error() {
        let err = Config::parse(
            "farm:\n  name: X\n  region: Punjab\n  crop: wheat\n  variety: HD2967\n  area_hectares: \"${KISANOPS_TEST_UNSET_AREA}\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, KisanOpsError::Config(_)));
        assert!(err.to_string().contains("area_hectares"));
    }

    #[test]
    fn test_tables_dir_override_wins() {
        let config = Config {
            data: DataConfig {
                tables_dir: Some(PathBuf::from("/from/config")),
            },
            ..Config::default()
        };
        assert_eq!(
            config.tables_dir(Some(Path::new("/from/cli"))),
            Some(PathBuf::from("/from/cli"))
        );
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/kisanops.yaml"))).unwrap_err();
        assert!(err.to_string().contains("kisanops init"));
    }

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        let parsed = Config::parse(&yaml).unwrap();
        assert_eq!(parsed.farm, FarmConfig::default());
    }
}
