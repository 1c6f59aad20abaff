//! Seeder library module.
//!
//! Wiring shared by the `seed-bd-stations` binary and its integration tests.

use anyhow::Context;
use bd_stations::config::Config;
use bd_stations::seed::{SeedReport, generate};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub fn run(config: &Config) -> anyhow::Result<SeedReport> {
    generate(config).with_context(|| {
        format!(
            "Failed to generate seed file from {}",
            config.input_path.display()
        )
    })
}

pub fn render_report(report: &SeedReport) -> String {
    format!(
        "✅ Generated SQL seed file: {}\n{}",
        report.output_path.display(),
        report.summary
    )
}
