use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use sensorcore::{AngleConvention, Point, SensorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sensor: SensorConfig,
    pub points: Vec<Point>,
    pub generator: Option<GeneratorConfig>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        origin: Point,
        convention: AngleConvention,
        points: Vec<Point>,
        generator: Option<GeneratorConfig>,
    ) -> Self {
        Self {
            sensor: SensorConfig { origin, convention },
            points,
            generator,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.sensor.validate().context("invalid sensor origin")?;
        for (index, point) in self.points.iter().enumerate() {
            Point::try_new(point.x(), point.y())
                .with_context(|| format!("invalid observed point #{}", index))?;
        }
        Ok(())
    }
}
