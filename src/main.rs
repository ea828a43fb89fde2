//! loggen - Synthetic log line generator
//!
//! Emits randomly constructed log records as JSON lines on stdout at a fixed
//! pace. Diagnostics about the generator itself go to stderr.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `LOG_INTERVAL`: Pause between records, `ms`/`s`/`m`/`h` suffix (default: 1s)
//! - `TOTAL_LOGS`: Records to emit, `-1` for unbounded (default: -1)
//! - `RUST_LOG`: Diagnostics filter (default: info)

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use loggen::config::Config;
use loggen::log_generator::LogGenerator;
use loggen::runner::run;
use loggen::sink::JsonLineSink;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();
    info!(
        interval_ms = config.interval.as_millis() as u64,
        total_logs = config.total_logs,
        unbounded = config.is_unbounded(),
        "Configuration loaded"
    );

    let mut generator = LogGenerator::from_entropy();
    let mut sink = JsonLineSink::stdout();

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            // Without a signal handler the run can only end by reaching its total.
            std::future::pending::<()>().await;
        }
    };

    match run(&config, &mut generator, &mut sink, shutdown).await {
        Ok(summary) => {
            info!(
                emitted = summary.emitted,
                cancelled = summary.cancelled,
                "Generator stopped"
            );
        }
        Err(e) => {
            error!(error = %e, emitted = sink.lines_written(), "Generator failed");
            std::process::exit(1);
        }
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Diagnostics are written to stderr so stdout carries only records.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
