use crate::models::{SeasonalRecommendations, TabulatedYield, YieldRange, YieldSource};
use regex_lite::Regex;
use std::sync::OnceLock;

/// Per-hectare figures used when no table entry matches (quintals/hectare).
pub const FALLBACK_YIELD_PER_HECTARE: f64 = 40.0;
pub const FALLBACK_YIELD_RANGE: (f64, f64) = (35.0, 45.0);

/// Widening applied to the table's own min/max.
pub const TABULATED_RANGE_LOW: f64 = 0.9;
pub const TABULATED_RANGE_HIGH: f64 = 1.1;

/// Parse the first "<min>-<max>" pair out of a yield estimate string such as
/// "55-60 quintals/hectare". Free text ("Green manure crop") gives
/// `None`.
pub fn parse_yield_estimate(estimate: &str) -> Option<(f64, f64)> {
    let caps = yield_range_pattern()?.captures(estimate)?;
    let min = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let max = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some((min, max))
}

fn yield_range_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(\d+)-(\d+)").ok())
        .as_ref()
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Yield for `area_hectares` read straight from the recommendation entry for
/// `crop`/`variety` (case-insensitive), without the soil-impact model.
///
/// The expected value is the midpoint of the entry's range; the reported
/// range widens the table range by 10% either way. Entries without a numeric
/// range, or no entry at all, use 40 q/ha within 35-45.
pub fn tabulated_yield(
    recommendations: &SeasonalRecommendations,
    crop: &str,
    variety: &str,
    area_hectares: f64,
) -> TabulatedYield {
    let parsed = recommendations
        .find(crop, variety)
        .and_then(|rec| parse_yield_estimate(&rec.yield_estimate));

    match parsed {
        Some((min, max)) => TabulatedYield {
            expected: round2((min + max) / 2.0 * area_hectares),
            range: YieldRange {
                min: round2(min * area_hectares * TABULATED_RANGE_LOW),
                max: round2(max * area_hectares * TABULATED_RANGE_HIGH),
            },
            source: YieldSource::Table,
        },
        None => {
            let (min, max) = FALLBACK_YIELD_RANGE;
            TabulatedYield {
                expected: round2(FALLBACK_YIELD_PER_HECTARE * area_hectares),
                range: YieldRange {
                    min: round2(min * area_hectares),
                    max: round2(max * area_hectares),
                },
                source: YieldSource::Fallback,
            }
        }
    }
}
