use crate::models::{CropRecommendation, Season, SeasonalRecommendations};
use crate::ui::components::percent_gauge;
use crate::ui::Theme;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct RecommendationsScreen<'a> {
    pub region: &'a str,
    pub soil_type: &'a str,
    pub season: Season,
    pub recommendations: &'a SeasonalRecommendations,
    #[serde(skip)]
    pub show_challenges: bool,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(
        region: &'a str,
        soil_type: &'a str,
        season: Season,
        recommendations: &'a SeasonalRecommendations,
    ) -> Self {
        Self {
            region,
            soil_type,
            season,
            recommendations,
            show_challenges: true,
        }
    }

    pub fn with_challenges(mut self, show: bool) -> Self {
        self.show_challenges = show;
        self
    }

    fn render_entry(&self, f: &mut fmt::Formatter<'_>, rec: &CropRecommendation) -> fmt::Result {
        writeln!(
            f,
            "{}{} - {}  {}",
            Theme::INDENT,
            rec.crop,
            rec.variety,
            percent_gauge(rec.suitability as f64)
        )?;
        let detail = format!("{}{}", Theme::INDENT, Theme::INDENT);
        writeln!(f, "{}Yield:       {}", detail, rec.yield_estimate)?;
        writeln!(f, "{}Water:       {}", detail, rec.water_requirement)?;
        writeln!(f, "{}Fertilizers: {}", detail, rec.fertilizers)?;
        writeln!(f, "{}Period:      {}", detail, rec.growing_period)?;
        if self.show_challenges {
            if let Some(ref challenges) = rec.challenges {
                for line in challenges {
                    writeln!(f, "{}! {}", detail, line)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for RecommendationsScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::title(
            f,
            &format!(
                "Crop Recommendations: {} / {} / {}",
                self.region, self.soil_type, self.season
            ),
        )?;

        Theme::header(f, "Primary")?;
        for rec in &self.recommendations.primary {
            self.render_entry(f, rec)?;
        }

        if !self.recommendations.alternatives.is_empty() {
            Theme::header(f, "Alternatives")?;
            for rec in &self.recommendations.alternatives {
                self.render_entry(f, rec)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ChallengesScreen<'a> {
    pub crop: &'a str,
    pub region: &'a str,
    pub season: Season,
    pub challenges: &'a [String],
}

impl<'a> ChallengesScreen<'a> {
    pub fn new(crop: &'a str, region: &'a str, season: Season, challenges: &'a [String]) -> Self {
        Self {
            crop,
            region,
            season,
            challenges,
        }
    }
}

impl fmt::Display for ChallengesScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::title(
            f,
            &format!(
                "{} challenges in {} during {}",
                self.crop, self.region, self.season
            ),
        )?;
        for line in self.challenges {
            writeln!(f, "{}- {}", Theme::INDENT, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logic::{annotate_with_challenges, get_crop_recommendations};

    #[test]
    fn test_render_with_and_without_challenges() {
        let catalog = Catalog::embedded().unwrap();
        let recs =
            get_crop_recommendations(&catalog, "Punjab", "alluvial", Some(Season::Monsoon));
        let recs = annotate_with_challenges(&catalog, recs, "Punjab", Season::Monsoon);

        let full = RecommendationsScreen::new("Punjab", "alluvial", Season::Monsoon, &recs)
            .to_string();
        assert!(full.contains("Primary"));
        assert!(full.contains("Alternatives"));
        assert!(full.contains("! Potential flooding risk"));

        let brief = RecommendationsScreen::new("Punjab", "alluvial", Season::Monsoon, &recs)
            .with_challenges(false)
            .to_string();
        assert!(!brief.contains("Potential flooding risk"));
    }

    #[test]
    fn test_json_shape() {
        let catalog = Catalog::embedded().unwrap();
        let recs = get_crop_recommendations(&catalog, "Nowhere", "x", Some(Season::Summer));
        let screen = RecommendationsScreen::new("Nowhere", "x", Season::Summer, &recs);
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["season"], "Summer");
        assert_eq!(json["recommendations"]["primary"][0]["suitability"], 85);
        assert!(json.get("show_challenges").is_none());
    }

    #[test]
    fn test_challenges_screen() {
        let lines = vec!["Ideal growing season".to_string()];
        let text =
            ChallengesScreen::new("Wheat", "Punjab", Season::PostMonsoon, &lines).to_string();
        assert!(text.starts_with("Wheat challenges in Punjab during Post-Monsoon"));
        assert!(text.contains("- Ideal growing season"));
    }
}
