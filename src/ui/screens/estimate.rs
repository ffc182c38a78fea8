use crate::models::{Season, TabulatedYield, YieldPrediction, YieldRequest, YieldSource};
use crate::ui::components::percent_gauge;
use crate::ui::Theme;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct EstimateScreen<'a> {
    pub request: &'a YieldRequest,
    pub season: Season,
    pub prediction: &'a YieldPrediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabulated: Option<TabulatedYield>,
}

impl<'a> EstimateScreen<'a> {
    pub fn new(request: &'a YieldRequest, season: Season, prediction: &'a YieldPrediction) -> Self {
        Self {
            request,
            season,
            prediction,
            tabulated: None,
        }
    }

    pub fn with_tabulated(mut self, tabulated: TabulatedYield) -> Self {
        self.tabulated = Some(tabulated);
        self
    }
}

impl fmt::Display for EstimateScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.request;
        let p = self.prediction;

        Theme::title(
            f,
            &format!("Yield Estimate: {} ({})", r.crop, r.variety),
        )?;
        Theme::field(f, "Region", &r.region)?;
        Theme::field(f, "Soil type", &r.soil_type)?;
        Theme::field(f, "Season", self.season)?;
        Theme::field(f, "Area", format!("{} ha", r.area_hectares))?;
        Theme::field(
            f,
            "Soil readings",
            format!(
                "pH {:.1}, N {:.0}, P {:.0}, K {:.0} kg/ha",
                r.ph, r.nitrogen, r.phosphorus, r.potassium
            ),
        )?;

        Theme::header(f, "Prediction")?;
        Theme::field(f, "Expected yield", format!("{:.2} quintals", p.expected_yield))?;
        Theme::field(
            f,
            "Range",
            format!("{:.2} - {:.2} quintals", p.yield_range.min, p.yield_range.max),
        )?;
        if r.area_hectares > 0.0 {
            Theme::field(
                f,
                "Per hectare",
                format!("{:.2} q/ha", p.per_hectare(r.area_hectares)),
            )?;
        }
        Theme::field(f, "Confidence", percent_gauge(p.confidence as f64))?;

        Theme::header(f, "Factors")?;
        for factor in &p.factors {
            writeln!(
                f,
                "{}{} {:<20} {}",
                Theme::INDENT,
                Theme::impact_marker(factor.impact),
                factor.name,
                factor.recommendation
            )?;
        }

        if let Some(ref t) = self.tabulated {
            Theme::header(f, "Table reference")?;
            let source = match t.source {
                YieldSource::Table => "recommendation table",
                YieldSource::Fallback => "generic estimate",
            };
            Theme::field(f, "Expected yield", format!("{:.2} quintals ({})", t.expected, source))?;
            Theme::field(
                f,
                "Range",
                format!("{:.2} - {:.2} quintals", t.range.min, t.range.max),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logic::{estimate_yield, FixedRandom};

    fn request() -> YieldRequest {
        YieldRequest {
            crop: "wheat".into(),
            variety: "HD2967".into(),
            area_hectares: 2.0,
            soil_type: "alluvial".into(),
            region: "Punjab".into(),
            ph: 7.2,
            nitrogen: 320.0,
            phosphorus: 20.0,
            potassium: 260.0,
        }
    }

    #[test]
    fn test_render_lists_factors() {
        let catalog = Catalog::embedded().unwrap();
        let request = request();
        let prediction = estimate_yield(&catalog, &request, &mut FixedRandom::neutral());
        let text = EstimateScreen::new(&request, Season::Winter, &prediction).to_string();

        assert!(text.starts_with("Yield Estimate: wheat (HD2967)"));
        assert!(text.contains("[+] Region"));
        assert!(text.contains("94%"));
        assert!(!text.contains("Table reference"));
    }

    #[test]
    fn test_json_includes_tabulated() {
        let catalog = Catalog::embedded().unwrap();
        let request = request();
        let prediction = estimate_yield(&catalog, &request, &mut FixedRandom::neutral());
        let tabulated = crate::logic::calculations::tabulated_yield(
            &Default::default(),
            "wheat",
            "HD2967",
            2.0,
        );
        let screen = EstimateScreen::new(&request, Season::Winter, &prediction)
            .with_tabulated(tabulated);

        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["season"], "Winter");
        assert_eq!(json["prediction"]["confidence"], 94);
        assert_eq!(json["tabulated"]["source"], "Fallback");
        assert_eq!(json["tabulated"]["expected"], 80.0);
    }
}
