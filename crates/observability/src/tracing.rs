//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never interleave with the catalog table
//! written to stdout.

use tracing_subscriber::EnvFilter;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON with timestamps.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Explicit filter directive (e.g. "debug" or "shelfkeep_catalog=debug").
    /// When unset, `RUST_LOG` is consulted, then `default_directive`.
    pub directive: Option<String>,
    pub default_directive: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            directive: None,
            default_directive: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Resolve the filter: explicit directive, then `RUST_LOG`, then default.
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(directive) = &self.directive {
            if let Ok(filter) = EnvFilter::try_new(directive) {
                return filter;
            }
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let filter = config.env_filter();

    let _ = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}
