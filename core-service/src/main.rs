//! AutoCare Core - command-line entry point
//!
//! Trains the failure-risk estimator on the reference fleet, then prints the
//! fleet dashboard figures and the assessment of the default vehicle.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use autocare_core::constants::{APP_NAME, APP_VERSION, MAINTENANCE_THRESHOLD};
use autocare_core::logic::fleet::export;
use autocare_core::logic::model::evaluate;
use autocare_core::logic::reporting::{fleet_summary, manufacturing_feedback};
use autocare_core::logic::scheduling::{plan_service, SchedulingPolicy};
use autocare_core::{assess, generate, shared_estimator, EstimatorConfig, TelemetryRecord};

/// Fleet health dashboard figures on the command line
#[derive(Parser)]
#[command(name = "autocare-core", version)]
struct Cli {
    /// Write the reference fleet to a JSONL file
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Score a holdout fleet generated with this seed
    #[arg(long, value_name = "SEED")]
    evaluate: Option<u64>,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = EstimatorConfig::from_env()?;
    let estimator = shared_estimator(&config)?;
    let fleet = generate(config.fleet_seed, config.fleet_size)?;

    let summary = fleet_summary(estimator, &fleet)?;
    println!("Fleet Command Dashboard");
    println!("  Fleet size:          {}", summary.fleet_size);
    println!("  Average health:      {}%", summary.average_health);
    println!("  Predicted failures:  {}", summary.predicted_failures);

    println!("\nManufacturing Feedback");
    for component in manufacturing_feedback(&fleet) {
        println!("  {:<8} {}", component.label, component.count);
    }

    let assessment = assess(estimator, &TelemetryRecord::reference_vehicle())?;
    println!("\nVehicle Health Intelligence");
    for reading in &assessment.readings {
        println!(
            "  {:<16} {:>8.1} {:<4} health {}%",
            reading.label, reading.value, reading.unit, reading.health
        );
    }
    println!("  Overall vehicle health: {}%", assessment.overall_health());
    println!(
        "  Failure probability: {:.3} (threshold {}) - {}",
        assessment.failure_probability, MAINTENANCE_THRESHOLD, assessment.message
    );

    let plan = plan_service(
        assessment.failure_probability,
        chrono::Utc::now(),
        &SchedulingPolicy::from_env()?,
    )?;
    println!("\nAutonomous Scheduling\n  {}", plan.summary());

    if let Some(seed) = cli.evaluate {
        let holdout = generate(seed, config.fleet_size)?;
        let report = evaluate(estimator, &holdout, 0.5)?;
        println!(
            "\nHoldout (seed {}): accuracy {:.3}, precision {:.3}, recall {:.3}",
            seed, report.accuracy, report.precision, report.recall
        );
    }

    if let Some(path) = cli.export {
        let rows = export::to_jsonl(&fleet, &path)?;
        println!("\nExported {} records to {}", rows, path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} core v{}...", APP_NAME, APP_VERSION);

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
