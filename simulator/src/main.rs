use anyhow::{bail, Context};
use clap::Parser;
use generator::profile::GeneratorConfig;
use log::info;
use sensorcore::{AngleConvention, Point};
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline point-sensor detection driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// X coordinate of an observed point
    #[arg(long, requires = "y", conflicts_with = "workflow", allow_negative_numbers = true)]
    x: Option<f64>,
    /// Y coordinate of an observed point
    #[arg(long, requires = "x", conflicts_with = "workflow", allow_negative_numbers = true)]
    y: Option<f64>,
    #[arg(
        long,
        default_value_t = 0.0,
        conflicts_with = "workflow",
        allow_negative_numbers = true
    )]
    origin_x: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        conflicts_with = "workflow",
        allow_negative_numbers = true
    )]
    origin_y: f64,
    /// Angle convention: mathematical or compass
    #[arg(long, default_value_t = AngleConvention::Mathematical, conflicts_with = "workflow")]
    convention: AngleConvention,
    /// Generate this many random points around the sensor
    #[arg(long, conflicts_with = "workflow")]
    generate: Option<usize>,
    #[arg(long, default_value_t = 0, conflicts_with = "workflow")]
    seed: u64,
    #[arg(long, default_value_t = 10.0, conflicts_with = "workflow")]
    radius: f64,
    /// Print reports as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Args {
    fn workflow_config(&self) -> anyhow::Result<WorkflowConfig> {
        if let Some(path) = &self.workflow {
            info!("loading workflow config {}", path.display());
            return WorkflowConfig::load(path);
        }

        let origin = Point::try_new(self.origin_x, self.origin_y).context("parsing --origin")?;
        let points = match (self.x, self.y) {
            (Some(x), Some(y)) => vec![Point::try_new(x, y).context("parsing --x/--y")?],
            _ => Vec::new(),
        };
        let generator = self.generate.map(|count| GeneratorConfig {
            count,
            radius: self.radius,
            seed: self.seed,
        });
        if points.is_empty() && generator.is_none() {
            bail!("nothing to detect: pass --x/--y, --generate or --workflow");
        }

        Ok(WorkflowConfig::from_args(
            origin,
            self.convention,
            points,
            generator,
        ))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = args.workflow_config()?;
    let result = Runner::new(workflow_config).execute()?;
    info!("produced {} detection reports", result.reports.len());

    if args.json {
        let rendered = serde_json::to_string_pretty(&result.reports)
            .context("serializing detection reports")?;
        println!("{}", rendered);
    } else {
        println!(
            "Sensor at {} -> {} detections",
            result.reference,
            result.reports.len()
        );
        for report in &result.reports {
            println!(
                "point {} -> degree {:.4} distance {:.4}",
                report.point,
                report.info.degree(),
                report.info.distance()
            );
        }
    }

    Ok(())
}
