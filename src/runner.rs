//! The generator loop.
//!
//! Emits one record per iteration, pausing for the configured interval in
//! between, until the configured total is reached or the shutdown future
//! resolves.

use std::future::Future;

use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::log_generator::LogGenerator;
use crate::sink::{LogSink, SinkError};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records handed to the sink
    pub emitted: u64,

    /// Whether the run ended because of the shutdown signal
    pub cancelled: bool,
}

/// Run the generator loop.
///
/// Sequence numbers start at 1 and increase by one per record. No pause
/// follows the final record of a bounded run. `shutdown` is only observed
/// while pausing, so a record is never cut short.
///
/// # Errors
///
/// Returns the first [`SinkError`]; nothing is emitted after it.
///
/// # Example
///
/// ```no_run
/// use loggen::config::Config;
/// use loggen::log_generator::LogGenerator;
/// use loggen::runner::run;
/// use loggen::sink::JsonLineSink;
///
/// #[tokio::main]
/// async fn main() {
///     let config = Config::from_values(Some("100ms"), Some("10"));
///     let mut generator = LogGenerator::from_entropy();
///     let mut sink = JsonLineSink::stdout();
///     let shutdown = async {
///         tokio::signal::ctrl_c().await.ok();
///     };
///     run(&config, &mut generator, &mut sink, shutdown).await.ok();
/// }
/// ```
pub async fn run<R, S, F>(
    config: &Config,
    generator: &mut LogGenerator<R>,
    sink: &mut S,
    shutdown: F,
) -> Result<RunSummary, SinkError>
where
    R: Rng,
    S: LogSink,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    debug!(
        interval_ms = config.interval.as_millis() as u64,
        total_logs = config.total_logs,
        "Generator loop started"
    );

    let mut seq: u64 = 1;
    while config.allows(seq) {
        let record = generator.generate(seq);
        sink.emit(&record)?;
        trace!(seq, level = %record.level, "Record emitted");
        seq += 1;

        if !config.allows(seq) {
            break;
        }

        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!(emitted = seq - 1, "Shutdown signal received, generator stopping");
                return Ok(RunSummary {
                    emitted: seq - 1,
                    cancelled: true,
                });
            }

            _ = sleep(config.interval) => {}
        }
    }

    debug!(emitted = seq - 1, "Generator loop finished");
    Ok(RunSummary {
        emitted: seq - 1,
        cancelled: false,
    })
}
