use crate::models::{FactorImpact, NutrientStatus};
use std::fmt;

/// Plain-text styling shared by the report screens.
pub struct Theme;

impl Theme {
    pub const RULE: char = '─';
    pub const WIDTH: usize = 64;
    pub const INDENT: &'static str = "  ";

    /// Title line followed by a full-width rule.
    pub fn title(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", Self::rule(Self::WIDTH))
    }

    /// Section header underlined to its own length.
    pub fn header(f: &mut fmt::Formatter<'_>, header: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", Self::rule(header.chars().count()))
    }

    pub fn rule(width: usize) -> String {
        std::iter::repeat(Self::RULE).take(width).collect()
    }

    pub fn field(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
        writeln!(f, "{}{:<20} {}", Self::INDENT, format!("{}:", label), value)
    }

    pub fn status_marker(status: NutrientStatus) -> &'static str {
        if status.is_balanced() {
            "ok"
        } else {
            "!!"
        }
    }

    pub fn impact_marker(impact: FactorImpact) -> String {
        format!("[{}]", impact.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_width() {
        assert_eq!(Theme::rule(3), "───");
        assert_eq!(Theme::rule(0), "");
    }

    #[test]
    fn test_markers() {
        assert_eq!(Theme::status_marker(NutrientStatus::Optimal), "ok");
        assert_eq!(Theme::status_marker(NutrientStatus::Low), "!!");
        assert_eq!(Theme::impact_marker(FactorImpact::Positive), "[+]");
    }
}
