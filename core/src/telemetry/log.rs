use crate::detection::DetectInfo;
use crate::geometry::Point;
use log::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn detection(&self, point: &Point, detection: &DetectInfo) {
        debug!(
            "detected {} at {:.4} deg, {:.4} away",
            point,
            detection.degree(),
            detection.distance()
        );
    }
}
