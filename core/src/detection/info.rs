use crate::prelude::{SensorError, SensorResult};
use serde::{Deserialize, Serialize};

/// Direction and range of one detection, as seen from the sensor reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectInfo")]
pub struct DetectInfo {
    degree: f64,
    distance: f64,
}

#[derive(Deserialize)]
struct RawDetectInfo {
    degree: f64,
    distance: f64,
}

impl DetectInfo {
    /// Unchecked; the sensor only ever passes `hypot` results.
    pub(crate) fn new(degree: f64, distance: f64) -> Self {
        debug_assert!(distance >= 0.0 || distance.is_nan(), "distance must be non-negative");
        Self { degree, distance }
    }

    /// Builds a detection, rejecting negative or NaN distances.
    pub fn try_new(degree: f64, distance: f64) -> SensorResult<Self> {
        if distance.is_nan() || distance < 0.0 {
            return Err(SensorError::InvalidDistance(distance));
        }
        Ok(Self { degree, distance })
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl TryFrom<RawDetectInfo> for DetectInfo {
    type Error = SensorError;

    fn try_from(raw: RawDetectInfo) -> SensorResult<Self> {
        Self::try_new(raw.degree, raw.distance)
    }
}
