use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kisanops",
    version,
    about = "Crop recommendations, soil health and yield estimates for Indian farms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of table files overriding the built-in ones
    #[arg(short, long, global = true)]
    pub tables_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup
    Init,
    /// Validate config and data tables
    Check,
    /// Show the agricultural season for a date
    Season {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List soil profiles by region
    Regions,
    /// Recommend crops for a region, soil type and season
    Recommend {
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        when: SeasonArgs,
    },
    /// Show seasonal growing challenges for a crop
    Challenges {
        /// Crop name as listed in recommendations, e.g. Rice
        #[arg(long)]
        crop: String,
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        when: SeasonArgs,
    },
    /// Classify soil pH and nutrient readings
    SoilHealth {
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        soil: SoilArgs,
    },
    /// Estimate harvest yield
    Estimate {
        #[command(flatten)]
        location: LocationArgs,
        #[arg(long)]
        crop: Option<String>,
        /// Variety (default: the configured one, or the first listed for --crop)
        #[arg(long)]
        variety: Option<String>,
        /// Field area in hectares
        #[arg(long)]
        area: Option<f64>,
        #[command(flatten)]
        soil: SoilArgs,
        #[command(flatten)]
        when: SeasonArgs,
        /// Seed for a reproducible estimate
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the 7-day forecast and 12-month outlook
    Weather {
        #[arg(long)]
        region: Option<String>,
        /// Skip the 12-month outlook
        #[arg(long)]
        no_outlook: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Region, e.g. "West Bengal" (default: farm.region)
    #[arg(long)]
    pub region: Option<String>,
    /// Soil type, e.g. alluvial (default: the region's predominant type)
    #[arg(long)]
    pub soil: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SeasonArgs {
    /// Summer, Monsoon, Post-Monsoon or Winter (default: season of --date)
    #[arg(long)]
    pub season: Option<String>,
    /// Date as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Soil readings; each one missing falls back to the typical profile value.
#[derive(Args, Debug, Clone, Default)]
pub struct SoilArgs {
    #[arg(long)]
    pub ph: Option<f64>,
    /// kg/ha
    #[arg(long)]
    pub nitrogen: Option<f64>,
    /// kg/ha
    #[arg(long)]
    pub phosphorus: Option<f64>,
    /// kg/ha
    #[arg(long)]
    pub potassium: Option<f64>,
}

impl SoilArgs {
    pub fn is_empty(&self) -> bool {
        self.ph.is_none()
            && self.nitrogen.is_none()
            && self.phosphorus.is_none()
            && self.potassium.is_none()
    }
}
