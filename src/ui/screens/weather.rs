use crate::models::{MonthlyClimate, RegionForecast};
use crate::ui::components::rainfall_gauge;
use crate::ui::Theme;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct WeatherScreen<'a> {
    pub region: &'a str,
    pub forecast: &'a RegionForecast,
    pub seasonal_description: &'static str,
    #[serde(skip_serializing_if = "no_months")]
    pub long_term: &'a [MonthlyClimate],
}

fn no_months(months: &&[MonthlyClimate]) -> bool {
    months.is_empty()
}

impl<'a> WeatherScreen<'a> {
    pub fn new(
        region: &'a str,
        forecast: &'a RegionForecast,
        seasonal_description: &'static str,
    ) -> Self {
        Self {
            region,
            forecast,
            seasonal_description,
            long_term: &[],
        }
    }

    pub fn with_long_term(mut self, long_term: &'a [MonthlyClimate]) -> Self {
        self.long_term = long_term;
        self
    }
}

impl fmt::Display for WeatherScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::title(f, &format!("Weather: {}", self.region))?;
        if self.forecast.region != self.region {
            writeln!(
                f,
                "{}(no forecast for {}; showing {})",
                Theme::INDENT,
                self.region,
                self.forecast.region
            )?;
        }

        Theme::header(f, "7-day forecast")?;
        for day in &self.forecast.days {
            writeln!(
                f,
                "{}{:<10} {} {:>5.1}°C {:>3.0}%  {}  {}",
                Theme::INDENT,
                day.day,
                day.icon.symbol(),
                day.temperature,
                day.humidity,
                rainfall_gauge(day.rainfall),
                day.description
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}{}", Theme::INDENT, self.seasonal_description)?;

        if !self.long_term.is_empty() {
            Theme::header(f, "12-month outlook")?;
            for month in self.long_term {
                writeln!(
                    f,
                    "{}{:<4} {:>5.1}°C {:>6.1} mm {:>3.0}%",
                    Theme::INDENT,
                    month.month,
                    month.avg_temp,
                    month.rainfall,
                    month.humidity
                )?;
            }
        }
        Ok(())
    }
}
