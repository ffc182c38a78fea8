use crate::models::Season;
use crate::ui::Theme;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct SeasonScreen {
    pub date: NaiveDate,
    pub season: Season,
}

impl SeasonScreen {
    pub fn new(date: NaiveDate, season: Season) -> Self {
        Self { date, season }
    }
}

impl fmt::Display for SeasonScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Theme::field(f, &self.date.format("%d %b %Y").to_string(), self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_and_json() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        let screen = SeasonScreen::new(date, Season::PostMonsoon);
        assert!(screen.to_string().contains("03 Nov 2025:"));
        assert!(screen.to_string().trim_end().ends_with("Post-Monsoon"));

        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["date"], "2025-11-03");
        assert_eq!(json["season"], "Post-Monsoon");
    }
}
