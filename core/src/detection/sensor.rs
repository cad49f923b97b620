use crate::detection::info::DetectInfo;
use crate::geometry::{AngleConvention, Point};
use crate::prelude::{SensorConfig, SensorResult};
use crate::telemetry::log::LogManager;

/// Stationary sensor reporting bearing and range to observed points.
///
/// The reference point and angle convention are fixed at construction, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    reference: Point,
    convention: AngleConvention,
    logger: LogManager,
}

impl Sensor {
    /// Sensor at (0, 0) using the mathematical angle convention.
    pub fn new() -> Self {
        Self::with_origin(Point::origin())
    }

    pub fn with_origin(reference: Point) -> Self {
        Self {
            reference,
            convention: AngleConvention::default(),
            logger: LogManager::new(),
        }
    }

    pub fn from_config(config: &SensorConfig) -> SensorResult<Self> {
        config.validate()?;
        Ok(Self {
            reference: config.origin,
            convention: config.convention,
            logger: LogManager::new(),
        })
    }

    pub fn reference(&self) -> Point {
        self.reference
    }

    pub fn convention(&self) -> AngleConvention {
        self.convention
    }

    pub fn detect(&self, curr: &Point) -> DetectInfo {
        let degree = self.reference.cal_degree_with(curr, self.convention);
        let distance = self.reference.cal_distance(curr);
        let info = DetectInfo::new(degree, distance);
        self.logger.detection(curr, &info);
        info
    }

    /// Detects each point independently, preserving input order.
    pub fn detect_all(&self, points: &[Point]) -> Vec<DetectInfo> {
        points.iter().map(|point| self.detect(point)).collect()
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::new()
    }
}
