//! Structured logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` registry so that stdout
//! stays reserved for command output. The filter comes from, in order of
//! precedence: an explicit level, the `SVCGEN_LOG` environment variable
//! (full `EnvFilter` syntax), and finally `info`.

use std::env;
use std::io::IsTerminal;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "SVCGEN_LOG";

static INIT: Once = Once::new();

/// Configuration for logging initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Explicit level; overrides `SVCGEN_LOG` when set.
    pub level: Option<Level>,
    /// Emit JSON lines instead of human-readable output.
    pub use_json: bool,
}

/// Parse a log level name (case-insensitive).
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn build_filter(level: Option<Level>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::new(format!("svcgen={}", level.as_str().to_lowercase()));
    }
    match env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("svcgen=info"),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(std::io::stderr().is_terminal())
                        .with_target(false)
                        .without_time(),
                )
                .init();
        }
    });
}
