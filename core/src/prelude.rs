use crate::geometry::{AngleConvention, Point};
use serde::{Deserialize, Serialize};

/// Shared configuration for a sensor instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SensorConfig {
    pub origin: Point,
    pub convention: AngleConvention,
}

impl SensorConfig {
    pub fn validate(&self) -> SensorResult<()> {
        Point::try_new(self.origin.x(), self.origin.y())?;
        Ok(())
    }
}

/// Common error type for sensor construction and input validation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SensorError {
    #[error("non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("distance must be non-negative, got {0}")]
    InvalidDistance(f64),
}

pub type SensorResult<T> = Result<T, SensorError>;
