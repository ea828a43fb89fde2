//! loggen Library
//!
//! Components of the synthetic log line generator:
//!
//! - **config**: `LOG_INTERVAL` / `TOTAL_LOGS` resolution with silent defaults
//! - **log_generator**: Severities, fixed vocabularies and random record generation
//! - **sink**: JSON line output stamped with runtime identity and timestamp
//! - **runner**: The paced, cancellable generator loop
//!
//! # Example
//!
//! ```no_run
//! use loggen::config::Config;
//! use loggen::log_generator::LogGenerator;
//! use loggen::runner::run;
//! use loggen::sink::JsonLineSink;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Load configuration from environment
//!     let config = Config::from_env();
//!
//!     let mut generator = LogGenerator::from_entropy();
//!     let mut sink = JsonLineSink::stdout();
//!
//!     // Run until TOTAL_LOGS is reached or Ctrl+C
//!     let shutdown = async {
//!         tokio::signal::ctrl_c().await.ok();
//!     };
//!     run(&config, &mut generator, &mut sink, shutdown).await.ok();
//! }
//! ```

// Module declarations
pub mod config;
pub mod log_generator;
pub mod runner;
pub mod sink;

// Re-export commonly used types at crate root for convenience
pub use config::Config;
pub use log_generator::{build_message, LogGenerator, LogRecord, Severity};
pub use runner::{run, RunSummary};
pub use sink::{JsonLineSink, LogSink, SinkError};
