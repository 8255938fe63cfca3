//! File-based tracing with a runtime-adjustable level.
//!
//! The server speaks MCP over stdio, so diagnostics must never touch
//! stdout/stderr. Trace output goes to a file in the temp directory instead,
//! and the file is only created once something is actually logged.

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

const TRACE_LOG_FILE_NAME: &str = "cocos_creator_mcp_trace.log";

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(1); // Default to WARN level (1) for "do no harm"

/// Dynamic tracing filter that can be updated at runtime
#[derive(Clone)]
pub struct DynamicFilter;

impl<S> Layer<S> for DynamicFilter
where
    S: Subscriber,
{
    fn enabled(
        &self,
        metadata: &tracing::Metadata<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) -> bool {
        // Suppress HTTP connection internals that are noise next to the
        // editor bridge traffic we actually care about
        let target = metadata.target();
        if target.starts_with("reqwest::")
            || target.starts_with("hyper")
            || target.starts_with("h2::")
            || target.starts_with("rustls::")
            || target.starts_with("want::")
        {
            return false;
        }

        let current_level = CURRENT_LEVEL.load(Ordering::Relaxed);
        let level_value = match *metadata.level() {
            Level::ERROR => 0,
            Level::WARN => 1,
            Level::INFO => 2,
            Level::DEBUG => 3,
            Level::TRACE => 4,
        };
        level_value <= current_level
    }
}

/// Represents tracing levels that can be set dynamically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid tracing level '{s}'. Valid levels are: error, warn, info, debug, trace"
            )),
        }
    }
}

impl TracingLevel {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Initialize file-based tracing with a fixed filename in the temp directory.
/// Returns a `WorkerGuard` that must be kept alive for logging to work.
pub fn init_file_tracing() -> WorkerGuard {
    let temp_dir = std::env::temp_dir();

    let file_appender = tracing_appender::rolling::never(&temp_dir, TRACE_LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let subscriber = Registry::default().with(DynamicFilter).with(file_layer);

    subscriber.init();

    // Don't log anything here - the file should only appear once the user
    // explicitly raises the tracing level
    guard
}

/// Set the current tracing level dynamically
pub fn set_tracing_level(level: TracingLevel) {
    CURRENT_LEVEL.store(level.as_u8(), Ordering::Relaxed);
    tracing::info!("Tracing level set to: {}", level.as_str());
}

/// Get the current tracing level
pub fn get_current_tracing_level() -> TracingLevel {
    match CURRENT_LEVEL.load(Ordering::Relaxed) {
        0 => TracingLevel::Error,
        2 => TracingLevel::Info,
        3 => TracingLevel::Debug,
        4 => TracingLevel::Trace,
        _ => TracingLevel::Warn, // Default fallback (handles 1 and any invalid values)
    }
}

/// Get the path to the trace log file
pub fn get_trace_log_path() -> std::path::PathBuf {
    std::env::temp_dir().join(TRACE_LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_from_str() {
        assert!(matches!(
            TracingLevel::from_str("error"),
            Ok(TracingLevel::Error)
        ));
        assert!(matches!(
            TracingLevel::from_str("ERROR"),
            Ok(TracingLevel::Error)
        ));
        assert!(matches!(
            TracingLevel::from_str("debug"),
            Ok(TracingLevel::Debug)
        ));
        assert!(TracingLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_tracing_level_round_trips_through_str() {
        for level in [
            TracingLevel::Error,
            TracingLevel::Warn,
            TracingLevel::Info,
            TracingLevel::Debug,
            TracingLevel::Trace,
        ] {
            assert!(matches!(
                TracingLevel::from_str(level.as_str()),
                Ok(parsed) if parsed == level
            ));
        }
    }

    #[test]
    fn test_trace_log_path_is_in_temp_dir() {
        let path = get_trace_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(
            path.file_name()
                .is_some_and(|name| name == TRACE_LOG_FILE_NAME)
        );
    }
}
