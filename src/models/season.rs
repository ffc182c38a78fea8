use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Monsoon,
    #[serde(rename = "Post-Monsoon")]
    PostMonsoon,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Monsoon,
        Season::PostMonsoon,
        Season::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
            Season::Winter => "Winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Some(Season::Summer),
            "monsoon" | "kharif" => Some(Season::Monsoon),
            "post-monsoon" | "postmonsoon" | "post monsoon" => Some(Season::PostMonsoon),
            "winter" | "rabi" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
