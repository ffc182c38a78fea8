pub mod gauge;

pub use gauge::{percent_gauge, rainfall_gauge, Gauge};
