pub mod crop;
pub mod season;
pub mod soil_health;
pub mod soil_profile;
pub mod weather;
pub mod yield_prediction;

pub use crop::*;
pub use season::*;
pub use soil_health::*;
pub use soil_profile::*;
pub use weather::*;
pub use yield_prediction::*;
