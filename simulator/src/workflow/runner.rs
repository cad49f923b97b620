use crate::generator::profile::build_points;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use sensorcore::telemetry::LogManager;
use sensorcore::{DetectInfo, Point, Sensor};
use serde::Serialize;

/// One observed point paired with what the sensor reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionReport {
    pub point: Point,
    pub info: DetectInfo,
}

pub struct WorkflowResult {
    pub reference: Point,
    pub reports: Vec<DetectionReport>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Collects configured and generated points, then runs each through the sensor.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let sensor = Sensor::from_config(&self.config.sensor).context("building sensor")?;

        let mut points = self.config.points.clone();
        if let Some(generator) = &self.config.generator {
            let generated =
                build_points(generator, sensor.reference()).context("generating points")?;
            points.extend(generated);
        }

        LogManager::new().record(&format!(
            "sensor at {} ({}) observing {} points",
            sensor.reference(),
            sensor.convention(),
            points.len()
        ));

        let reports = points
            .iter()
            .zip(sensor.detect_all(&points))
            .map(|(point, info)| DetectionReport {
                point: *point,
                info,
            })
            .collect();

        Ok(WorkflowResult {
            reference: sensor.reference(),
            reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::GeneratorConfig;
    use sensorcore::AngleConvention;

    #[test]
    fn runner_executes_workflow() {
        let cfg = WorkflowConfig::from_args(
            Point::origin(),
            AngleConvention::Mathematical,
            vec![Point::new(3.0, 4.0), Point::origin()],
            None,
        );
        let result = Runner::new(cfg).execute().unwrap();
        assert_eq!(result.reference, Point::origin());
        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.reports[0].info.distance(), 5.0);
        assert_eq!(result.reports[1].info, DetectInfo::try_new(0.0, 0.0).unwrap());
    }

    #[test]
    fn runner_appends_generated_points() {
        let generator = GeneratorConfig {
            count: 5,
            radius: 1.0,
            seed: 3,
        };
        let cfg = WorkflowConfig::from_args(
            Point::new(10.0, 10.0),
            AngleConvention::Compass,
            vec![Point::new(10.0, 12.0)],
            Some(generator),
        );
        let result = Runner::new(cfg).execute().unwrap();
        assert_eq!(result.reports.len(), 6);
        assert_eq!(result.reports[0].info.degree(), 0.0);
        assert_eq!(result.reports[0].info.distance(), 2.0);
        for report in &result.reports[1..] {
            assert!(report.info.distance() <= 2f64.sqrt() + 1e-9);
            assert!((0.0..360.0).contains(&report.info.degree()));
        }
    }

    #[test]
    fn runner_rejects_non_finite_origin() {
        let cfg = WorkflowConfig::from_args(
            Point::new(f64::NAN, 0.0),
            AngleConvention::Mathematical,
            Vec::new(),
            None,
        );
        assert!(Runner::new(cfg).execute().is_err());
    }

    #[test]
    fn report_serializes_point_and_info() {
        let report = DetectionReport {
            point: Point::new(0.0, 2.0),
            info: DetectInfo::try_new(90.0, 2.0).unwrap(),
        };
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["point"]["y"], 2.0);
        assert_eq!(value["info"]["degree"], 90.0);
    }
}
