use crate::prelude::SensorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Angular reference used when reporting the direction to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleConvention {
    /// 0° along +x, counter-clockwise positive, range (-180, 180].
    #[default]
    Mathematical,
    /// 0° along +y, clockwise positive, range [0, 360).
    Compass,
}

impl AngleConvention {
    /// Angle of the vector (dx, dy) in degrees. A zero vector maps to 0.
    pub fn degrees(self, dx: f64, dy: f64) -> f64 {
        if dx == 0.0 && dy == 0.0 {
            return 0.0;
        }
        match self {
            AngleConvention::Mathematical => normalize_signed(dy.atan2(dx).to_degrees()),
            AngleConvention::Compass => normalize_unsigned(dx.atan2(dy).to_degrees()),
        }
    }
}

impl fmt::Display for AngleConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleConvention::Mathematical => f.write_str("mathematical"),
            AngleConvention::Compass => f.write_str("compass"),
        }
    }
}

impl FromStr for AngleConvention {
    type Err = SensorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mathematical" | "math" => Ok(AngleConvention::Mathematical),
            "compass" | "bearing" => Ok(AngleConvention::Compass),
            other => Err(SensorError::InvalidConfig(format!(
                "unknown angle convention '{}'",
                other
            ))),
        }
    }
}

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_signed(degrees: f64) -> f64 {
    let wrapped = normalize_unsigned(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_unsigned(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360; -0.0 folds to 0.0.
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}
