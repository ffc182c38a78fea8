pub mod estimate;
pub mod recommendations;
pub mod regions;
pub mod season;
pub mod soil;
pub mod weather;

pub use estimate::EstimateScreen;
pub use recommendations::{ChallengesScreen, RecommendationsScreen};
pub use regions::RegionsScreen;
pub use season::SeasonScreen;
pub use soil::SoilHealthScreen;
pub use weather::WeatherScreen;
