use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sensorcore::{Point, SensorError};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic observed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub radius: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 8,
            radius: 10.0,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), SensorError> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SensorError::InvalidConfig(format!(
                "generator radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Scatters `config.count` points uniformly inside the square of half-width
/// `config.radius` centred on `center`.
pub fn build_points(config: &GeneratorConfig, center: Point) -> anyhow::Result<Vec<Point>> {
    config.validate().context("validating generator config")?;
    let reach = center.x().abs().max(center.y().abs()) + config.radius;
    if !reach.is_finite() {
        return Err(SensorError::InvalidConfig(format!(
            "generator radius {} around {} leaves the finite plane",
            config.radius, center
        )))
        .context("validating generator config");
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let radius = config.radius;
    let points = (0..config.count)
        .map(|_| {
            let dx = radius * rng.gen_range(-1.0f64..=1.0);
            let dy = radius * rng.gen_range(-1.0f64..=1.0);
            Point::new(center.x() + dx, center.y() + dy)
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_point_count() {
        let points = build_points(&GeneratorConfig::default(), Point::origin()).unwrap();
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn generator_is_repeatable_for_a_seed() {
        let config = GeneratorConfig {
            count: 16,
            radius: 3.0,
            seed: 13,
        };
        let first = build_points(&config, Point::origin()).unwrap();
        let second = build_points(&config, Point::origin()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generator_stays_within_radius_of_center() {
        let config = GeneratorConfig {
            count: 64,
            radius: 2.0,
            seed: 7,
        };
        let center = Point::new(100.0, -50.0);
        for p in build_points(&config, center).unwrap() {
            assert!((p.x() - center.x()).abs() <= 2.0 + 1e-9);
            assert!((p.y() - center.y()).abs() <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn zero_radius_collapses_onto_center() {
        let config = GeneratorConfig {
            count: 3,
            radius: 0.0,
            seed: 1,
        };
        let points = build_points(&config, Point::new(1.0, 2.0)).unwrap();
        assert!(points.iter().all(|p| *p == Point::new(1.0, 2.0)));
    }

    #[test]
    fn huge_radius_stays_finite() {
        let config = GeneratorConfig {
            count: 4,
            radius: 1e308,
            seed: 0,
        };
        let points = build_points(&config, Point::origin()).unwrap();
        assert_eq!(points.len(), 4);
        for p in points {
            assert!(p.x().is_finite() && p.y().is_finite());
            assert!(p.x().abs() <= 1e308 && p.y().abs() <= 1e308);
        }
    }

    #[test]
    fn huge_radius_off_origin_is_rejected() {
        let config = GeneratorConfig {
            count: 1,
            radius: f64::MAX,
            seed: 0,
        };
        assert!(build_points(&config, Point::new(f64::MAX, 0.0)).is_err());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let config = GeneratorConfig {
            radius: -1.0,
            ..Default::default()
        };
        assert!(build_points(&config, Point::origin()).is_err());
    }
}
