mod app;
mod catalog;
mod cli;
mod config;
mod error;
mod logic;
mod models;
mod ui;

use anyhow::Context;
use app::ForecastSession;
use catalog::Catalog;
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands, LocationArgs, SeasonArgs, SoilArgs};
use config::Config;
use error::KisanOpsError;
use logic::{get_crop_challenges, resolve_season, RandomSource, SeededRandom, SystemRandom};
use models::Season;
use serde::Serialize;
use std::fmt::Display;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    ChallengesScreen, EstimateScreen, RecommendationsScreen, RegionsScreen, SeasonScreen,
    SoilHealthScreen, WeatherScreen,
};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // init must work even when the existing config is broken
    let config = if matches!(cli.command, Some(Commands::Init)) {
        Config::default()
    } else {
        Config::load_or_default(cli.config.clone()).context("Failed to load config")?
    };
    let tables_dir = config.tables_dir(cli.tables_dir.as_deref());
    let catalog = Catalog::open(tables_dir.as_deref()).with_context(|| match &tables_dir {
        Some(dir) => format!("Failed to load tables from {}", dir.display()),
        None => "Failed to load built-in tables".to_string(),
    })?;

    let command = cli.command.unwrap_or(Commands::Recommend {
        location: LocationArgs::default(),
        when: SeasonArgs::default(),
    });
    run(command, &config, &catalog, cli.json)
}

fn run(command: Commands, config: &Config, catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Init => {
            Config::setup_interactive(&catalog.regions()).context("Interactive setup failed")?;
        }
        Commands::Check => {
            let report = CheckReport::new(config, catalog);
            emit(&report, json)?;
        }
        Commands::Season { date } => {
            let date = parse_date(date.as_deref())?.unwrap_or_else(today);
            emit(&SeasonScreen::new(date, resolve_season(date)), json)?;
        }
        Commands::Regions => {
            emit(&RegionsScreen::new(&catalog.soil_profiles), json)?;
        }
        Commands::Recommend { location, when } => {
            let mut session = session_for(catalog, config, &location);
            let season = apply_season(&mut session, &when)?;
            emit(
                &RecommendationsScreen::new(
                    &session.region,
                    &session.soil_type,
                    season,
                    &session.recommendations,
                ),
                json,
            )?;
        }
        Commands::Challenges { crop, region, when } => {
            let region = region.unwrap_or_else(|| config.farm.region.clone());
            let season = season_from(&when)?;
            let challenges = get_crop_challenges(catalog, &crop, &region, season);
            emit(
                &ChallengesScreen::new(&crop, &region, season, &challenges),
                json,
            )?;
        }
        Commands::SoilHealth { location, soil } => {
            let mut session = session_for(catalog, config, &location);
            apply_soil(&mut session, &soil);
            let report = session.soil_health();
            emit(
                &SoilHealthScreen::new(&session.region, &session.soil_type, &report),
                json,
            )?;
        }
        Commands::Estimate {
            location,
            crop,
            variety,
            area,
            soil,
            when,
            seed,
        } => {
            let mut session = session_for(catalog, config, &location);
            apply_crop(&mut session, crop, variety.as_deref());
            if let Some(area) = area {
                session.set_area(area);
            }
            apply_season(&mut session, &when)?;
            apply_soil(&mut session, &soil);

            let mut random: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(SeededRandom::new(seed)),
                None => Box::new(SystemRandom::new()),
            };
            let prediction = session.calculate(random.as_mut()).clone();
            if let Some(ref status) = session.status_message {
                tracing::info!("{}", status);
            }

            let request = session.yield_request();
            let screen = EstimateScreen::new(&request, session.season, &prediction)
                .with_tabulated(session.tabulated_yield());
            emit(&screen, json)?;
        }
        Commands::Weather { region, no_outlook } => {
            let region = region.unwrap_or_else(|| config.farm.region.clone());
            let forecast = catalog
                .weather_forecast(&region)
                .ok_or_else(|| KisanOpsError::InvalidData("no forecast regions loaded".into()))?;
            let mut screen =
                WeatherScreen::new(&region, forecast, catalog.seasonal_description(&region));
            if !no_outlook {
                screen = screen.with_long_term(catalog.long_term_forecast());
            }
            emit(&screen, json)?;
        }
    }
    Ok(())
}

/// Print a result as pretty JSON or as its text rendering.
fn emit<T: Serialize + Display>(value: &T, json: bool) -> error::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", value);
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(date: Option<&str>) -> error::Result<Option<NaiveDate>> {
    date.map(|d| {
        NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|_| {
            KisanOpsError::InvalidInput(format!("invalid date '{}' - expected YYYY-MM-DD", d))
        })
    })
    .transpose()
}

fn parse_season(season: &str) -> error::Result<Season> {
    Season::from_str(season).ok_or_else(|| {
        let expected: Vec<_> = Season::ALL.iter().map(|s| s.as_str()).collect();
        KisanOpsError::InvalidInput(format!(
            "unknown season '{}' - expected one of {}",
            season,
            expected.join(", ")
        ))
    })
}

/// Explicit --season, else the season of --date, else today's.
fn season_from(when: &SeasonArgs) -> error::Result<Season> {
    if let Some(ref season) = when.season {
        return parse_season(season);
    }
    Ok(resolve_season(parse_date(when.date.as_deref())?.unwrap_or_else(today)))
}

/// Move the session to --date and return the season to report, which an
/// explicit --season overrides.
fn apply_season(session: &mut ForecastSession<'_>, when: &SeasonArgs) -> error::Result<Season> {
    if let Some(date) = parse_date(when.date.as_deref())? {
        session.set_date(date);
    }
    match when.season {
        Some(ref season) => {
            let season = parse_season(season)?;
            session.set_season(season);
            Ok(season)
        }
        None => Ok(session.season),
    }
}

fn session_for<'a>(
    catalog: &'a Catalog,
    config: &Config,
    location: &LocationArgs,
) -> ForecastSession<'a> {
    let mut session = ForecastSession::new(catalog, &config.farm);
    if let Some(ref region) = location.region {
        session.set_region(region);
    }
    if let Some(ref soil) = location.soil {
        session.set_soil_type(soil);
    }
    session
}

/// A new --crop without --variety takes that crop's default variety.
fn apply_crop(session: &mut ForecastSession<'_>, crop: Option<String>, variety: Option<&str>) {
    if crop.is_none() && variety.is_none() {
        return;
    }
    let crop = crop.unwrap_or_else(|| session.crop.clone());
    session.set_crop(&crop, variety);
}

fn apply_soil(session: &mut ForecastSession<'_>, soil: &SoilArgs) {
    if soil.is_empty() {
        return;
    }
    let current = session.soil;
    session.set_soil_inputs(
        soil.ph.unwrap_or(current.ph),
        soil.nitrogen.unwrap_or(current.nitrogen),
        soil.phosphorus.unwrap_or(current.phosphorus),
        soil.potassium.unwrap_or(current.potassium),
    );
}

#[derive(Serialize)]
struct CheckReport {
    farm: String,
    region: String,
    known_region: bool,
    tables: String,
    table_files: Vec<&'static str>,
    soil_regions: usize,
    crop_regions: usize,
    challenge_crops: usize,
    base_yields: usize,
    crop_varieties: usize,
    forecast_regions: usize,
    outlook_months: usize,
}

impl CheckReport {
    fn new(config: &Config, catalog: &Catalog) -> Self {
        Self {
            farm: config.farm.name.clone(),
            region: config.farm.region.clone(),
            known_region: catalog.has_region(&config.farm.region),
            tables: catalog.source().to_string(),
            table_files: catalog::TABLE_FILES.to_vec(),
            soil_regions: catalog.soil_profiles.len(),
            crop_regions: catalog.crop_recommendations.regions.len(),
            challenge_crops: catalog.crop_challenges.len(),
            base_yields: catalog.base_yields.len(),
            crop_varieties: catalog.crop_varieties.len(),
            forecast_regions: catalog.weather.regions.len(),
            outlook_months: catalog.long_term_forecast().len(),
        }
    }
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ui::Theme;

        Theme::title(f, "KisanOps Check")?;
        Theme::field(f, "Farm", &self.farm)?;
        Theme::field(
            f,
            "Region",
            if self.known_region {
                self.region.clone()
            } else {
                format!("{} (no soil profile - defaults apply)", self.region)
            },
        )?;
        Theme::field(f, "Tables", &self.tables)?;
        Theme::field(f, "Table files", self.table_files.join(", "))?;
        Theme::field(f, "Soil regions", self.soil_regions)?;
        Theme::field(f, "Crop regions", self.crop_regions)?;
        Theme::field(f, "Challenge crops", self.challenge_crops)?;
        Theme::field(f, "Base yields", self.base_yields)?;
        Theme::field(f, "Crops with varieties", self.crop_varieties)?;
        Theme::field(f, "Forecast regions", self.forecast_regions)?;
        Theme::field(f, "Outlook months", self.outlook_months)?;
        writeln!(f)?;
        writeln!(f, "All tables OK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2025-03-01")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(parse_date(None).unwrap(), None);
        assert!(matches!(
            parse_date(Some("01/03/2025")),
            Err(KisanOpsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_season_from_args() {
        let explicit = SeasonArgs {
            season: Some("rabi".into()),
            date: Some("2025-07-01".into()),
        };
        assert_eq!(season_from(&explicit).unwrap(), Season::Winter);

        let by_date = SeasonArgs {
            season: None,
            date: Some("2025-07-01".into()),
        };
        assert_eq!(season_from(&by_date).unwrap(), Season::Monsoon);

        let bad = SeasonArgs {
            season: Some("spring".into()),
            date: None,
        };
        assert!(matches!(season_from(&bad), Err(KisanOpsError::InvalidInput(_))));
    }

    #[test]
    fn test_apply_season_override_refreshes() {
        let catalog = Catalog::embedded().unwrap();
        let config = Config::default();
        let mut session = session_for(&catalog, &config, &LocationArgs::default());
        let when = SeasonArgs {
            season: Some("Winter".into()),
            date: Some("2025-08-01".into()),
        };
        assert_eq!(apply_season(&mut session, &when).unwrap(), Season::Winter);
        assert_eq!(session.recommendations.primary[0].crop, "Potato");
    }

    #[test]
    fn test_apply_soil_keeps_unset_readings() {
        let catalog = Catalog::embedded().unwrap();
        let config = Config::default();
        let mut session = session_for(&catalog, &config, &LocationArgs::default());
        let before = session.soil;
        apply_soil(
            &mut session,
            &SoilArgs {
                ph: Some(5.1),
                ..Default::default()
            },
        );
        assert_eq!(session.soil.ph, 5.1);
        assert_eq!(session.soil.nitrogen, before.nitrogen);
    }

    #[test]
    fn test_apply_crop_resets_variety() {
        let catalog = Catalog::embedded().unwrap();
        let config = Config::default();
        let mut session = session_for(&catalog, &config, &LocationArgs::default());
        assert_eq!(session.variety, "IR36");

        apply_crop(&mut session, Some("wheat".into()), None);
        assert_eq!(session.crop, "wheat");
        assert_eq!(session.variety, "HD2967");
        let request = session.yield_request();
        assert_eq!(catalog.base_yield(&request.crop, &request.variety), 48.0);

        apply_crop(&mut session, None, Some("PBW550"));
        assert_eq!(session.crop, "wheat");
        assert_eq!(session.variety, "PBW550");

        apply_crop(&mut session, None, None);
        assert_eq!(session.variety, "PBW550");
    }

    #[test]
    fn test_check_report() {
        let catalog = Catalog::embedded().unwrap();
        let report = CheckReport::new(&Config::default(), &catalog);
        assert!(report.known_region);
        assert_eq!(report.soil_regions, 5);
        assert_eq!(report.outlook_months, 12);
        assert_eq!(report.crop_varieties, 5);
        assert!(report.to_string().contains("All tables OK"));
        assert!(emit(&report, true).is_ok());
    }
}
