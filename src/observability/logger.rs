//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` and `severity` first, then `ts`, then fields sorted by key
//! - Lines are handed to the `log` facade; `init_logging` installs
//!   `env_logger` as the sink

use std::fmt;
use std::io::Write;

use chrono::{SecondsFormat, Utc};

/// Log target used for every structured event
pub const LOG_TARGET: &str = "movies_api";

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Rejected or suspicious requests
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    fn level(&self) -> log::Level {
        match self {
            Severity::Trace => log::Level::Trace,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Installs `env_logger` as the log sink.
///
/// Defaults to `info`; `RUST_LOG` overrides. Calling it twice is harmless.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    let _ = builder.try_init();
}

/// A structured logger that emits JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let level = severity.level();
        if !log::log_enabled!(target: LOG_TARGET, level) {
            return;
        }
        let line = Self::render(severity, event, fields, &timestamp());
        log::log!(target: LOG_TARGET, level, "{}", line);
    }

    /// Renders one event as a single JSON object without trailing newline
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)], ts: &str) -> String {
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":");
        push_json_string(&mut output, event);
        output.push_str(",\"severity\":");
        push_json_string(&mut output, severity.as_str());
        output.push_str(",\"ts\":");
        push_json_string(&mut output, ts);

        let mut sorted_fields: Vec<_> = fields
            .iter()
            .filter(|(k, _)| !matches!(*k, "event" | "severity" | "ts"))
            .collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push(',');
            push_json_string(&mut output, key);
            output.push(':');
            push_json_string(&mut output, value);
        }

        output.push('}');
        output
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn push_json_string(output: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-01-01T00:00:00.000Z";

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_error_events_use_error_level() {
        assert_eq!(Severity::Error.level(), log::Level::Error);

        let output = Logger::render(
            Severity::Error,
            "DATASET_REJECTED",
            &[("source", "movies.json"), ("reason", "Invalid record #0 (x)")],
            TS,
        );
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["reason"], "Invalid record #0 (x)");
    }

    #[test]
    fn test_render_json_format() {
        let output = Logger::render(Severity::Info, "MOVIE_CREATED", &[("id", "42")], TS);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "MOVIE_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["ts"], TS);
        assert_eq!(parsed["id"], "42");
        assert!(output.starts_with("{\"event\":"));
    }

    #[test]
    fn test_render_deterministic_ordering() {
        let output1 = Logger::render(
            Severity::Info,
            "TEST",
            &[("zebra", "1"), ("apple", "2"), ("mango", "3")],
            TS,
        );
        let output2 = Logger::render(
            Severity::Info,
            "TEST",
            &[("apple", "2"), ("mango", "3"), ("zebra", "1")],
            TS,
        );

        assert_eq!(output1, output2);
        let apple_pos = output1.find("apple").unwrap();
        let zebra_pos = output1.find("zebra").unwrap();
        assert!(apple_pos < zebra_pos);
    }

    #[test]
    fn test_render_escapes_special_chars() {
        let output = Logger::render(
            Severity::Warn,
            "TEST",
            &[("origin", "http://evil\"\nhost")],
            TS,
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["origin"], "http://evil\"\nhost");
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_reserved_keys_are_not_overwritten() {
        let output = Logger::render(Severity::Info, "REAL", &[("event", "FAKE")], TS);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "REAL");
    }
}
