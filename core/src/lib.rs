//! Bearing and range detection core for the point-sensor platform.
//!
//! A [`Sensor`] holds a fixed reference [`Point`] and reports the angle and
//! distance to observed points as [`DetectInfo`] values.

pub mod detection;
pub mod geometry;
pub mod prelude;
pub mod telemetry;

pub use detection::{DetectInfo, Sensor};
pub use geometry::{AngleConvention, Point};
pub use prelude::{SensorConfig, SensorError, SensorResult};
