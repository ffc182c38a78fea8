use crate::models::Season;
use chrono::{Datelike, Local, NaiveDate};

/// Season for a calendar date. Uses the date as given; callers pass their
/// local date.
///
/// - Apr-Jun: Summer
/// - Jul-Oct: Monsoon
/// - Nov-Dec: Post-Monsoon
/// - Jan-Mar: Winter
pub fn resolve_season(date: NaiveDate) -> Season {
    match date.month0() {
        3..=5 => Season::Summer,
        6..=9 => Season::Monsoon,
        10 | 11 => Season::PostMonsoon,
        _ => Season::Winter,
    }
}

pub fn current_season() -> Season {
    resolve_season(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn every_month_has_a_season() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Winter,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Monsoon,
            Season::Monsoon,
            Season::Monsoon,
            Season::Monsoon,
            Season::PostMonsoon,
            Season::PostMonsoon,
        ];
        for (month0, season) in expected.iter().enumerate() {
            assert_eq!(
                resolve_season(date(month0 as u32 + 1, 15)),
                *season,
                "month index {}",
                month0
            );
        }
    }

    #[test]
    fn boundaries_between_winter_and_summer() {
        // Month index 2 (March in chrono terms) is still Winter
        assert_eq!(resolve_season(date(3, 31)), Season::Winter);
        // Month index 3 starts Summer
        assert_eq!(resolve_season(date(4, 1)), Season::Summer);
    }

    #[test]
    fn boundaries_around_monsoon() {
        assert_eq!(resolve_season(date(6, 30)), Season::Summer);
        assert_eq!(resolve_season(date(7, 1)), Season::Monsoon);
        assert_eq!(resolve_season(date(10, 31)), Season::Monsoon);
        assert_eq!(resolve_season(date(11, 1)), Season::PostMonsoon);
        assert_eq!(resolve_season(date(12, 31)), Season::PostMonsoon);
        assert_eq!(resolve_season(date(1, 1)), Season::Winter);
    }

    #[test]
    fn leap_day_is_winter() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(resolve_season(leap), Season::Winter);
    }
}
