use crate::models::RegionSoilProfile;
use crate::ui::Theme;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(transparent)]
pub struct RegionsScreen<'a> {
    pub profiles: Vec<&'a RegionSoilProfile>,
}

impl<'a> RegionsScreen<'a> {
    pub fn new(profiles: impl IntoIterator<Item = &'a RegionSoilProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }
}

impl fmt::Display for RegionsScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::title(f, "Soil Profiles")?;

        for profile in &self.profiles {
            Theme::header(f, &profile.region)?;
            for (i, soil) in profile.soil_types.iter().enumerate() {
                let marker = if i == 0 { " (predominant)" } else { "" };
                writeln!(f, "{}{}{}", Theme::INDENT, soil.name, marker)?;
                writeln!(f, "{}{}{}", Theme::INDENT, Theme::INDENT, soil.description)?;
                for (name, range) in soil.ranges() {
                    writeln!(
                        f,
                        "{}{}{:<15} {:>6} - {:<6} typical {}",
                        Theme::INDENT,
                        Theme::INDENT,
                        name,
                        range.min,
                        range.max,
                        range.typical
                    )?;
                }
                if !soil.crops.is_empty() {
                    writeln!(
                        f,
                        "{}{}Crops: {}",
                        Theme::INDENT,
                        Theme::INDENT,
                        soil.crops.join(", ")
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_render_all_regions() {
        let catalog = Catalog::embedded().unwrap();
        let text = RegionsScreen::new(&catalog.soil_profiles).to_string();
        for region in catalog.regions() {
            assert!(text.contains(region));
        }
        assert!(text.contains("black cotton (predominant)"));
    }

    #[test]
    fn test_json_is_profile_list() {
        let catalog = Catalog::embedded().unwrap();
        let screen = RegionsScreen::new(catalog.soil_profile("Punjab"));
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json[0]["region"], "Punjab");
        assert_eq!(json[0]["soil_types"][0]["name"], "alluvial");
    }
}
