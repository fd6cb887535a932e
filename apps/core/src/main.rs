// D's Kitchen Intent Detection Node
// Runs the built-in conversation scenarios and reports the result.

use anyhow::Context;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

use kitchen_core::config::{AppConfig, ReportFormat};
use kitchen_core::harness::{builtin_scenarios, TestHarness};
use kitchen_core::logging::init_tracing;
use kitchen_core::{DialogueResponder, IntentClassifier, ResponseValidator};

/// Returns whether every scenario passed
fn run() -> anyhow::Result<bool> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);
    info!(restaurant = %config.restaurant_name, "Intent detection node starting");

    let responder = DialogueResponder::new(IntentClassifier::new(), config.restaurant_name.as_str());
    let validator = ResponseValidator::new(&config.restaurant_name);
    let scenarios = builtin_scenarios();
    let mut results = Vec::new();

    let report = match config.report_format {
        ReportFormat::Text => {
            let stdout = io::stdout();
            TestHarness::new(&responder, &validator, stdout.lock())
                .run_all(&scenarios, &mut results)
                .context("Failed to run scenarios")?
        }
        ReportFormat::Json => {
            let report = TestHarness::new(&responder, &validator, io::sink())
                .run_all(&scenarios, &mut results)
                .context("Failed to run scenarios")?;
            let json = report.to_json().context("Failed to serialize report")?;
            println!("{}", json);
            report
        }
    };

    Ok(report.all_passed())
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("Intent detection node failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
