use crate::models::SoilHealthReport;
use crate::ui::Theme;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct SoilHealthScreen<'a> {
    pub region: &'a str,
    pub soil_type: &'a str,
    pub report: &'a SoilHealthReport,
}

impl<'a> SoilHealthScreen<'a> {
    pub fn new(region: &'a str, soil_type: &'a str, report: &'a SoilHealthReport) -> Self {
        Self {
            region,
            soil_type,
            report,
        }
    }
}

impl fmt::Display for SoilHealthScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::title(
            f,
            &format!("Soil Health: {} / {}", self.region, self.soil_type),
        )?;

        for (name, assessment) in self.report.entries() {
            let unit = if name == "pH" { "" } else { " kg/ha" };
            writeln!(
                f,
                "{}{} {:<11} {:>8.1}{:<6}  {:<9} {}",
                Theme::INDENT,
                Theme::status_marker(assessment.status),
                name,
                assessment.value,
                unit,
                assessment.status.as_str(),
                assessment.recommendation
            )?;
        }

        let attention = self.report.needs_attention();
        writeln!(f)?;
        if attention.is_empty() {
            writeln!(f, "{}All readings within balanced ranges", Theme::INDENT)?;
        } else {
            writeln!(f, "{}Needs attention: {}", Theme::INDENT, attention.join(", "))?;
        }
        Ok(())
    }
}
