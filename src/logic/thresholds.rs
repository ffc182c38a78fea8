//! Nutrient thresholds shared by the soil health analyzer, the yield
//! multiplier and the yield factor text.

use std::ops::RangeInclusive;

// Soil health classification (kg/ha for N, P, K)

pub const PH_ACIDIC_BELOW: f64 = 5.5;
pub const PH_ALKALINE_ABOVE: f64 = 7.5;

pub const NITROGEN_LOW_BELOW: f64 = 250.0;
pub const NITROGEN_HIGH_ABOVE: f64 = 450.0;

pub const PHOSPHORUS_LOW_BELOW: f64 = 12.0;
pub const PHOSPHORUS_HIGH_ABOVE: f64 = 25.0;

pub const POTASSIUM_LOW_BELOW: f64 = 150.0;
pub const POTASSIUM_HIGH_ABOVE: f64 = 280.0;

// Yield model bands

/// Inclusive on both ends.
pub const YIELD_PH_BAND: RangeInclusive<f64> = 6.0..=7.5;
/// Exclusive on both ends.
pub const YIELD_NITROGEN_BAND: (f64, f64) = (300.0, 400.0);
pub const YIELD_PHOSPHORUS_ABOVE: f64 = 15.0;
pub const YIELD_POTASSIUM_ABOVE: f64 = 210.0;

/// (in band, out of band) multipliers
pub const PH_MULTIPLIER: (f64, f64) = (1.05, 0.95);
pub const NITROGEN_MULTIPLIER: (f64, f64) = (1.05, 0.97);
pub const PHOSPHORUS_MULTIPLIER: (f64, f64) = (1.03, 0.98);
pub const POTASSIUM_MULTIPLIER: (f64, f64) = (1.03, 0.97);

pub const REGION_FACTORS: [(&str, f64); 4] = [
    ("Punjab", 1.15),
    ("Maharashtra", 0.92),
    ("Karnataka", 0.97),
    ("Uttar Pradesh", 1.05),
];

pub const CONFIDENCE_MATCHED: u8 = 94;
pub const CONFIDENCE_UNMATCHED: u8 = 81;

/// Band membership for one set of soil readings. Evaluated once per estimate
/// so the multiplier, confidence and factor text never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldBands {
    pub ph: bool,
    pub nitrogen: bool,
    pub phosphorus: bool,
    pub potassium: bool,
}

impl YieldBands {
    pub fn evaluate(ph: f64, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        let (n_low, n_high) = YIELD_NITROGEN_BAND;
        Self {
            ph: YIELD_PH_BAND.contains(&ph),
            nitrogen: nitrogen > n_low && nitrogen < n_high,
            phosphorus: phosphorus > YIELD_PHOSPHORUS_ABOVE,
            potassium: potassium > YIELD_POTASSIUM_ABOVE,
        }
    }

    /// pH, N, P, K multipliers in application order.
    pub fn factors(&self) -> [f64; 4] {
        [
            pick(self.ph, PH_MULTIPLIER),
            pick(self.nitrogen, NITROGEN_MULTIPLIER),
            pick(self.phosphorus, PHOSPHORUS_MULTIPLIER),
            pick(self.potassium, POTASSIUM_MULTIPLIER),
        ]
    }

    pub fn multiplier(&self) -> f64 {
        self.factors().iter().product()
    }

    pub fn confidence(&self) -> u8 {
        if self.ph && self.nitrogen {
            CONFIDENCE_MATCHED
        } else {
            CONFIDENCE_UNMATCHED
        }
    }
}

fn pick(in_band: bool, (yes, no): (f64, f64)) -> f64 {
    if in_band {
        yes
    } else {
        no
    }
}

/// Exact region name match; anything else is neutral.
pub fn region_factor(region: &str) -> f64 {
    REGION_FACTORS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ph_band_is_inclusive() {
        assert!(YieldBands::evaluate(6.0, 350.0, 20.0, 250.0).ph);
        assert!(YieldBands::evaluate(7.5, 350.0, 20.0, 250.0).ph);
        assert!(!YieldBands::evaluate(5.99, 350.0, 20.0, 250.0).ph);
        assert!(!YieldBands::evaluate(7.51, 350.0, 20.0, 250.0).ph);
    }

    #[test]
    fn nitrogen_band_is_exclusive() {
        assert!(!YieldBands::evaluate(6.5, 300.0, 20.0, 250.0).nitrogen);
        assert!(YieldBands::evaluate(6.5, 300.1, 20.0, 250.0).nitrogen);
        assert!(!YieldBands::evaluate(6.5, 400.0, 20.0, 250.0).nitrogen);
    }

    #[test]
    fn phosphorus_and_potassium_are_strictly_above() {
        let at = YieldBands::evaluate(6.5, 350.0, 15.0, 210.0);
        assert!(!at.phosphorus);
        assert!(!at.potassium);
        let above = YieldBands::evaluate(6.5, 350.0, 15.5, 210.5);
        assert!(above.phosphorus);
        assert!(above.potassium);
    }

    #[test]
    fn multiplier_all_in_band() {
        let bands = YieldBands::evaluate(6.5, 350.0, 20.0, 250.0);
        assert_relative_eq!(bands.multiplier(), 1.05 * 1.05 * 1.03 * 1.03);
    }

    #[test]
    fn multiplier_all_out_of_band() {
        let bands = YieldBands::evaluate(8.5, 200.0, 10.0, 150.0);
        assert_relative_eq!(bands.multiplier(), 0.95 * 0.97 * 0.98 * 0.97);
    }

    #[test]
    fn confidence_needs_ph_and_nitrogen() {
        assert_eq!(YieldBands::evaluate(6.5, 350.0, 0.0, 0.0).confidence(), 94);
        assert_eq!(YieldBands::evaluate(5.0, 350.0, 20.0, 250.0).confidence(), 81);
        assert_eq!(YieldBands::evaluate(6.5, 450.0, 20.0, 250.0).confidence(), 81);
    }

    #[test]
    fn region_factors() {
        assert_eq!(region_factor("Punjab"), 1.15);
        assert_eq!(region_factor("Maharashtra"), 0.92);
        assert_eq!(region_factor("Karnataka"), 0.97);
        assert_eq!(region_factor("Uttar Pradesh"), 1.05);
        assert_eq!(region_factor("West Bengal"), 1.0);
        // Case-sensitive, like the table keys
        assert_eq!(region_factor("punjab"), 1.0);
    }
}
