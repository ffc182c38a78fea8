pub mod calculations;
pub mod random;
pub mod recommendations;
pub mod season;
pub mod soil_category;
pub mod soil_health;
pub mod thresholds;
pub mod yield_estimator;

pub use random::{FixedRandom, RandomSource, SeededRandom, SystemRandom};
pub use recommendations::{annotate_with_challenges, get_crop_challenges, get_crop_recommendations};
pub use season::{current_season, resolve_season};
pub use soil_category::SoilCategory;
pub use soil_health::analyze_soil_health;
pub use yield_estimator::{estimate_yield, SoilImpact};
