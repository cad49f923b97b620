use crate::geometry::angle::AngleConvention;
use crate::prelude::{SensorError, SensorResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> SensorResult<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(SensorError::NonFiniteCoordinate { x, y })
        }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn cal_distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Mathematical angle in degrees from `self` towards `other`, in (-180, 180].
    ///
    /// Identical points yield 0.
    pub fn cal_degree(&self, other: &Point) -> f64 {
        self.cal_degree_with(other, AngleConvention::Mathematical)
    }

    pub fn cal_degree_with(&self, other: &Point, convention: AngleConvention) -> f64 {
        convention.degrees(other.x - self.x, other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
