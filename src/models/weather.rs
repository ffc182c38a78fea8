use serde::{Deserialize, Serialize};

/// Number of days in a regional forecast (today + 6).
pub const FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    CloudSun,
    CloudRain,
    CloudDrizzle,
}

impl WeatherIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::CloudSun => "⛅",
            WeatherIcon::CloudRain => "☔",
            WeatherIcon::CloudDrizzle => "💧",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub day: String,
    /// °C
    pub temperature: f64,
    /// percent
    pub humidity: f64,
    /// mm
    pub rainfall: f64,
    pub description: String,
    pub icon: WeatherIcon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionForecast {
    pub region: String,
    pub days: Vec<WeatherDay>,
}

impl RegionForecast {
    pub fn average_rainfall(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.days.iter().map(|d| d.rainfall).sum::<f64>() / self.days.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    pub month: String,
    pub avg_temp: f64,
    pub rainfall: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherTable {
    pub regions: Vec<RegionForecast>,
    pub long_term: Vec<MonthlyClimate>,
}
