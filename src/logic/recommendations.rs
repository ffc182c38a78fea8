use super::season::current_season;
use crate::catalog::Catalog;
use crate::models::{Season, SeasonalRecommendations};

/// Recommendations for a region, soil type and season (today's season when
/// `season` is `None`).
///
/// Resolution order, first hit wins:
/// 1. exact region / soil type / season entry
/// 2. the region's first authored soil type for that season
/// 3. the catalog's generic fallback entries
///
/// Never fails; unknown regions get the fallback.
pub fn get_crop_recommendations(
    catalog: &Catalog,
    region: &str,
    soil_type: &str,
    season: Option<Season>,
) -> SeasonalRecommendations {
    let season = season.unwrap_or_else(current_season);
    let table = &catalog.crop_recommendations;

    if let Some(region_table) = table.region(region) {
        if let Some(recs) = region_table
            .soil_type(soil_type)
            .and_then(|s| s.seasons.get(&season))
        {
            return recs.clone();
        }

        if let Some(first) = region_table.soil_types.first() {
            if let Some(recs) = first.seasons.get(&season) {
                tracing::debug!(
                    "No {} entry for {:?}/{:?} - using first soil type {:?}",
                    season,
                    region,
                    soil_type,
                    first.soil_type
                );
                return recs.clone();
            }
        }
    }

    tracing::debug!(
        "No recommendations for {:?}/{:?}/{} - using fallback",
        region,
        soil_type,
        season
    );
    table.fallback.clone()
}

/// Challenge lines for growing `crop` in `region` during `season`. Crops or
/// seasons without a table entry get three generic lines.
pub fn get_crop_challenges(
    catalog: &Catalog,
    crop: &str,
    region: &str,
    season: Season,
) -> Vec<String> {
    catalog
        .crop_challenges
        .get(crop)
        .and_then(|by_season| by_season.get(&season))
        .cloned()
        .unwrap_or_else(|| generic_challenges(region, season))
}

fn generic_challenges(region: &str, season: Season) -> Vec<String> {
    vec![
        format!("Weather fluctuations common in {} may affect growth", season),
        format!(
            "Monitor for pests and diseases prevalent in {} during {}",
            region, season
        ),
        "Maintain optimal irrigation based on rainfall patterns".to_string(),
    ]
}

/// Attach challenge lines to every entry. The resolver leaves `challenges`
/// empty; callers that display recommendations run this step.
pub fn annotate_with_challenges(
    catalog: &Catalog,
    mut recommendations: SeasonalRecommendations,
    region: &str,
    season: Season,
) -> SeasonalRecommendations {
    for rec in recommendations.iter_mut() {
        rec.challenges = Some(get_crop_challenges(catalog, &rec.crop, region, season));
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropRecommendation, SoilCropTable};

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn exact_match() {
        let recs =
            get_crop_recommendations(&catalog(), "West Bengal", "alluvial", Some(Season::Monsoon));
        let first = &recs.primary[0];
        assert_eq!(first.crop, "Rice");
        assert_eq!(first.variety, "Swarna (MTU-7029)");
        assert_eq!(first.suitability, 95);
        assert_eq!(recs.primary.len(), 3);
        assert_eq!(recs.alternatives.len(), 2);
        assert!(first.challenges.is_none());
    }

    #[test]
    fn unknown_region_gets_fallback() {
        let recs =
            get_crop_recommendations(&catalog(), "Nonexistent Region", "x", Some(Season::Summer));
        assert_eq!(recs.primary[0].crop, "Rice");
        assert_eq!(recs.primary[0].suitability, 85);
        assert_eq!(recs.primary[1].crop, "Maize");
        assert_eq!(recs.alternatives[0].crop, "Pulses");
    }

    #[test]
    fn unknown_soil_type_uses_first_soil_type() {
        let recs =
            get_crop_recommendations(&catalog(), "Punjab", "calcareous", Some(Season::Winter));
        assert_eq!(recs.primary[0].crop, "Wheat");
        assert_eq!(recs.primary[0].variety, "HD-3086");
    }

    #[test]
    fn missing_season_gets_fallback() {
        // No Post-Monsoon entries are authored for any region
        let recs = get_crop_recommendations(
            &catalog(),
            "West Bengal",
            "alluvial",
            Some(Season::PostMonsoon),
        );
        assert_eq!(recs, catalog().crop_recommendations.fallback);
    }

    #[test]
    fn region_without_crop_table_gets_fallback() {
        // Karnataka has soil profiles but no crop table
        let recs = get_crop_recommendations(&catalog(), "Karnataka", "red", Some(Season::Monsoon));
        assert_eq!(recs.primary[0].variety, "Local variety");
    }

    #[test]
    fn first_soil_type_follows_authored_order() {
        let mut c = catalog();
        let wb = &mut c.crop_recommendations.regions[0];
        let mut zeta = SoilCropTable {
            soil_type: "zeta".into(),
            seasons: Default::default(),
        };
        let mut only = wb.soil_types[0].seasons[&Season::Monsoon].clone();
        only.primary.truncate(1);
        only.primary[0].crop = "Zeta Crop".into();
        zeta.seasons.insert(Season::Monsoon, only);
        // Authored first, but sorts last alphabetically
        wb.soil_types.insert(0, zeta);

        let recs = get_crop_recommendations(&c, "West Bengal", "laterite", Some(Season::Monsoon));
        assert_eq!(recs.primary[0].crop, "Zeta Crop");
    }

    #[test]
    fn omitted_season_uses_current_season() {
        let c = catalog();
        let implicit = get_crop_recommendations(&c, "Punjab", "alluvial", None);
        let explicit = get_crop_recommendations(&c, "Punjab", "alluvial", Some(current_season()));
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn challenges_from_table() {
        let lines = get_crop_challenges(&catalog(), "Wheat", "Punjab", Season::PostMonsoon);
        assert_eq!(
            lines,
            vec!["Ideal growing season", "Watch for aphid infestations"]
        );
    }

    #[test]
    fn challenges_for_unknown_crop_are_generic() {
        let lines = get_crop_challenges(&catalog(), "Jute", "West Bengal", Season::Monsoon);
        assert_eq!(
            lines,
            vec![
                "Weather fluctuations common in Monsoon may affect growth",
                "Monitor for pests and diseases prevalent in West Bengal during Monsoon",
                "Maintain optimal irrigation based on rainfall patterns",
            ]
        );
    }

    #[test]
    fn challenges_are_case_sensitive_on_crop() {
        let lines = get_crop_challenges(&catalog(), "rice", "Punjab", Season::Summer);
        assert!(lines[0].starts_with("Weather fluctuations common in Summer"));
    }

    #[test]
    fn challenges_for_known_crop_missing_season_are_generic() {
        let mut c = catalog();
        c.crop_challenges
            .get_mut("Maize")
            .unwrap()
            .remove(&Season::Winter);
        let lines = get_crop_challenges(&c, "Maize", "Karnataka", Season::Winter);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Karnataka during Winter"));
    }

    #[test]
    fn annotate_fills_every_entry() {
        let c = catalog();
        let recs = get_crop_recommendations(&c, "Punjab", "alluvial", Some(Season::Monsoon));
        let annotated = annotate_with_challenges(&c, recs, "Punjab", Season::Monsoon);

        assert!(annotated.iter().all(|r: &CropRecommendation| r.challenges.is_some()));
        assert_eq!(
            annotated.primary[0].challenges.as_deref().unwrap()[0],
            "Potential flooding risk"
        );
        let sesbania = annotated.find("Sesbania", "Local").unwrap();
        assert_eq!(sesbania.challenges.as_ref().unwrap().len(), 3);
    }
}
