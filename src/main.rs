//! Runs the default OneMax configuration and prints the final report.

use binary_ga::{ConsoleReporter, Evolution, EvolutionConfig, Reporter, RngSource};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EvolutionConfig::default();
    info!(
        capacity = config.capacity,
        target = %config.target,
        "configured"
    );

    let mut evolution = Evolution::new(&config, RngSource::thread())?;
    let report = evolution.run()?;

    ConsoleReporter::stdout().report(&report)?;
    Ok(())
}
