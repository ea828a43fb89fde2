//! Configuration module for the log generator.
//!
//! Two knobs are read from the environment once at startup:
//!
//! - `LOG_INTERVAL`: pause between records, e.g. `500ms`, `2s`, `1m`, `1h`
//! - `TOTAL_LOGS`: number of records to emit, `-1` (or anything unparseable) for no bound
//!
//! Neither value can fail to load. Malformed input silently resolves to the
//! documented default.

use std::env;
use std::time::Duration;

/// Environment variable holding the emission interval
pub const INTERVAL_ENV_VAR: &str = "LOG_INTERVAL";

/// Environment variable holding the total record count
pub const TOTAL_ENV_VAR: &str = "TOTAL_LOGS";

/// Interval used when `LOG_INTERVAL` is absent, malformed or has no recognized unit
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Sentinel total meaning "emit until cancelled"
pub const UNBOUNDED_TOTAL: i64 = -1;

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause between two consecutive records
    pub interval: Duration,

    /// Number of records to emit, or [`UNBOUNDED_TOTAL`]
    pub total_logs: i64,
}

impl Config {
    /// Load configuration from `LOG_INTERVAL` and `TOTAL_LOGS`.
    ///
    /// Unset or non-UTF-8 variables are treated as absent.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use loggen::config::Config;
    ///
    /// let config = Config::from_env();
    /// println!("interval: {:?}", config.interval);
    /// ```
    pub fn from_env() -> Self {
        let interval = env::var(INTERVAL_ENV_VAR).ok();
        let total = env::var(TOTAL_ENV_VAR).ok();
        Self::from_values(interval.as_deref(), total.as_deref())
    }

    /// Build a configuration from raw (possibly absent) values.
    pub fn from_values(interval: Option<&str>, total: Option<&str>) -> Self {
        Self {
            interval: parse_interval(interval),
            total_logs: parse_total(total),
        }
    }

    /// Whether the loop runs until cancelled.
    pub fn is_unbounded(&self) -> bool {
        self.total_logs == UNBOUNDED_TOTAL
    }

    /// Whether a record with the given sequence number is still within bounds.
    pub fn allows(&self, seq: u64) -> bool {
        if self.is_unbounded() {
            return true;
        }
        // Any other negative total admits nothing.
        u64::try_from(self.total_logs).is_ok_and(|total| seq <= total)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            total_logs: UNBOUNDED_TOTAL,
        }
    }
}

/// Parse an interval such as `250ms`, `2s`, `1.5m` or `1h`.
///
/// A numeric prefix must be followed by a recognized unit. A bare number
/// (`"5"`) or an unknown unit (`"5d"`) resolves to [`DEFAULT_INTERVAL`] and the
/// number is discarded. Negative amounts are clamped to a zero pause.
pub fn parse_interval(value: Option<&str>) -> Duration {
    let Some(raw) = value else {
        return DEFAULT_INTERVAL;
    };
    let raw = raw.trim().to_lowercase();

    let (number, suffix) = split_numeric_prefix(&raw);
    let Ok(amount) = number.parse::<f64>() else {
        return DEFAULT_INTERVAL;
    };

    let factor_ms = match suffix.trim() {
        "ms" => 1.0,
        "s" => 1_000.0,
        "m" => 60_000.0,
        "h" => 3_600_000.0,
        _ => return DEFAULT_INTERVAL,
    };

    let nanos = (amount * factor_ms * 1_000_000.0).round();
    if nanos <= 0.0 {
        return Duration::ZERO;
    }
    if nanos >= u64::MAX as f64 {
        return DEFAULT_INTERVAL;
    }
    Duration::from_nanos(nanos as u64)
}

/// Parse the total record count. Anything that is not an integer yields
/// [`UNBOUNDED_TOTAL`].
pub fn parse_total(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(UNBOUNDED_TOTAL)
}

/// Split `raw` into its leading `[+-]digits[.digits]` part and the rest.
fn split_numeric_prefix(raw: &str) -> (&str, &str) {
    let unsigned = raw
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(raw);
    let sign_len = raw.len() - unsigned.len();
    let digits_len = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    raw.split_at(sign_len + digits_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; serialize the tests touching them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                original,
            }
        }

        fn remove(key: &str) -> Self {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(val) => env::set_var(&self.key, val),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.total_logs, -1);
        assert!(config.is_unbounded());
    }

    #[test]
    fn test_config_from_env_with_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _guard1 = EnvGuard::remove(INTERVAL_ENV_VAR);
        let _guard2 = EnvGuard::remove(TOTAL_ENV_VAR);

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_config_from_env_custom_values() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _guard1 = EnvGuard::set(INTERVAL_ENV_VAR, "2s");
        let _guard2 = EnvGuard::set(TOTAL_ENV_VAR, "3");

        let config = Config::from_env();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.total_logs, 3);
        assert!(!config.is_unbounded());
    }

    #[test]
    fn test_config_from_env_empty_values() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _guard1 = EnvGuard::set(INTERVAL_ENV_VAR, "");
        let _guard2 = EnvGuard::set(TOTAL_ENV_VAR, "");

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_interval_recognized_units() {
        assert_eq!(parse_interval(Some("500ms")), Duration::from_millis(500));
        assert_eq!(parse_interval(Some("2s")), Duration::from_secs(2));
        assert_eq!(parse_interval(Some("3m")), Duration::from_secs(180));
        assert_eq!(parse_interval(Some("1h")), Duration::from_secs(3600));
    }

    #[test]
    fn test_interval_unit_factors() {
        for n in [1u64, 7, 42, 250] {
            let text = n.to_string();
            assert_eq!(
                parse_interval(Some(format!("{text}ms").as_str())),
                Duration::from_millis(n)
            );
            assert_eq!(
                parse_interval(Some(format!("{text}s").as_str())),
                Duration::from_millis(n * 1_000)
            );
            assert_eq!(
                parse_interval(Some(format!("{text}m").as_str())),
                Duration::from_millis(n * 60_000)
            );
            assert_eq!(
                parse_interval(Some(format!("{text}h").as_str())),
                Duration::from_millis(n * 3_600_000)
            );
        }
    }

    #[test]
    fn test_interval_fractional_and_spacing() {
        assert_eq!(parse_interval(Some("1.5s")), Duration::from_millis(1500));
        assert_eq!(parse_interval(Some("0.5m")), Duration::from_secs(30));
        assert_eq!(parse_interval(Some(" 250 MS ")), Duration::from_millis(250));
        assert_eq!(parse_interval(Some("100ms")), Duration::from_millis(100));
    }

    #[test]
    fn test_interval_without_unit_falls_back_to_default() {
        assert_eq!(parse_interval(Some("5")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("2500")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("0")), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_interval_unknown_unit_falls_back_to_default() {
        assert_eq!(parse_interval(Some("5d")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("10sec")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("3us")), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_interval_malformed_falls_back_to_default() {
        assert_eq!(parse_interval(None), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("   ")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("fast")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("ms")), DEFAULT_INTERVAL);
        assert_eq!(parse_interval(Some("1.2.3s")), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_interval_zero_and_negative() {
        assert_eq!(parse_interval(Some("0ms")), Duration::ZERO);
        assert_eq!(parse_interval(Some("0s")), Duration::ZERO);
        assert_eq!(parse_interval(Some("-5s")), Duration::ZERO);
        assert_eq!(parse_interval(Some("-1h")), Duration::ZERO);
    }

    #[test]
    fn test_interval_overflow_falls_back_to_default() {
        assert_eq!(
            parse_interval(Some("99999999999999999999h")),
            DEFAULT_INTERVAL
        );
    }

    #[test]
    fn test_total_parsing() {
        assert_eq!(parse_total(Some("3")), 3);
        assert_eq!(parse_total(Some(" 42 ")), 42);
        assert_eq!(parse_total(Some("0")), 0);
        assert_eq!(parse_total(Some("-5")), -5);
        assert_eq!(parse_total(Some("-1")), UNBOUNDED_TOTAL);
    }

    #[test]
    fn test_total_malformed_is_unbounded() {
        assert_eq!(parse_total(None), UNBOUNDED_TOTAL);
        assert_eq!(parse_total(Some("")), UNBOUNDED_TOTAL);
        assert_eq!(parse_total(Some("ten")), UNBOUNDED_TOTAL);
        assert_eq!(parse_total(Some("3.5")), UNBOUNDED_TOTAL);
        assert_eq!(parse_total(Some("12abc")), UNBOUNDED_TOTAL);
    }

    #[test]
    fn test_allows_respects_bounds() {
        let bounded = Config::from_values(Some("1s"), Some("2"));
        assert!(bounded.allows(1));
        assert!(bounded.allows(2));
        assert!(!bounded.allows(3));

        let empty = Config::from_values(Some("1s"), Some("0"));
        assert!(!empty.allows(1));

        let negative = Config::from_values(Some("1s"), Some("-7"));
        assert!(!negative.allows(1));

        let unbounded = Config::from_values(Some("1s"), None);
        assert!(unbounded.allows(u64::MAX));
    }
}
