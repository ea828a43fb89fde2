//! Log generator module for synthetic log records.
//!
//! Each record carries a uniformly random severity, a message built from a
//! fixed template per severity, and two optional numeric fields. The random
//! source is injected so tests can replay an exact sequence from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Actions substituted into trace, debug, info and warn messages.
pub const ACTIONS: &[&str] = &[
    "processing request",
    "connecting to database",
    "fetching user data",
    "updating cache",
    "validating input",
    "generating report",
    "sending notification",
];

/// Users substituted into info and error messages.
pub const USERS: &[&str] = &["user123", "admin", "guest", "service_account", "api_client"];

/// Failure descriptions substituted into error messages.
pub const ERRORS: &[&str] = &[
    "connection timeout",
    "invalid credentials",
    "resource not found",
    "permission denied",
    "internal server error",
];

/// Probability that a record carries a request id
const REQUEST_ID_PROBABILITY: f64 = 0.5;

/// Probability that a record carries a duration
const DURATION_PROBABILITY: f64 = 0.3;

/// Exclusive upper bound for request ids
const MAX_REQUEST_ID: u32 = 10_000;

/// Exclusive upper bound for durations in milliseconds
const MAX_DURATION_MS: f64 = 1_000.0;

/// Record severity. Drawn uniformly; never used to filter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    Fatal,
}

impl Severity {
    /// Get all severities, lowest first.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Critical,
            Severity::Fatal,
        ]
    }

    /// Get the upper-case severity name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single synthetic record, alive for one emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Position in the run, starting at 1
    pub seq: u64,

    /// Record severity
    pub level: Severity,

    /// Rendered message text
    pub message: String,

    /// Request id, present about half of the time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u32>,

    /// Duration in milliseconds with two decimals, present about 30% of the time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

/// Render the message for `level`.
///
/// One action, one user and one error are drawn on every call regardless of
/// which of them the template uses.
pub fn build_message(level: Severity, rng: &mut impl Rng) -> String {
    let action = pick(rng, ACTIONS);
    let user = pick(rng, USERS);
    let error = pick(rng, ERRORS);

    match level {
        Severity::Trace => format!("trace {}", action),
        Severity::Debug => format!("debug {}", action),
        Severity::Info => format!("info {} user={}", action, user),
        Severity::Warn => format!("warn possible issue action={}", action),
        Severity::Error | Severity::Critical | Severity::Fatal => {
            format!("error {} user={}", error, user)
        }
    }
}

fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Generator for synthetic log records.
pub struct LogGenerator<R> {
    rng: R,
}

impl<R: Rng> LogGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the record for sequence number `seq`.
    pub fn generate(&mut self, seq: u64) -> LogRecord {
        let level = pick(&mut self.rng, Severity::all());
        let message = build_message(level, &mut self.rng);

        let request_id = self
            .rng
            .gen_bool(REQUEST_ID_PROBABILITY)
            .then(|| self.rng.gen_range(0..MAX_REQUEST_ID));

        let duration_ms = self
            .rng
            .gen_bool(DURATION_PROBABILITY)
            .then(|| truncate_to_hundredths(self.rng.gen_range(0.0..MAX_DURATION_MS)));

        LogRecord {
            seq,
            level,
            message,
            request_id,
            duration_ms,
        }
    }
}

impl LogGenerator<StdRng> {
    /// Create a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

// Truncates so that draws just below the bound never reach it.
fn truncate_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
