//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use shelfkeep_observability::{LogFormat, TracingConfig};

use crate::types::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "shelfkeep",
    about = "Keep track of a small library's books from the terminal",
    version
)]
pub struct Cli {
    /// Log verbosity; falls back to RUST_LOG, then "warn"
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, env = "SHELFKEEP_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// How book tables are printed
    #[arg(long, value_enum, env = "SHELFKEEP_OUTPUT", default_value = "table")]
    pub output: OutputFormat,

    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    pub empty: bool,

    /// Read commands from this file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub output: OutputFormat,
    pub seed: bool,
    pub script: Option<PathBuf>,
    pub tracing: TracingConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            seed: true,
            script: None,
            tracing: TracingConfig::default(),
        }
    }
}

impl From<Cli> for ConsoleConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            seed: !cli.empty,
            script: cli.script,
            tracing: TracingConfig {
                directive: cli.log_level.map(|l| l.to_filter_directive().to_string()),
                format: cli.log_format.into(),
                ..TracingConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_seeded_with_warn_logging() {
        let cli = Cli::try_parse_from(["shelfkeep"]).unwrap();
        let config = ConsoleConfig::from(cli);

        assert!(config.seed);
        assert_eq!(config.script, None);
        assert_eq!(config.tracing.directive, None);
        assert_eq!(config.tracing.default_directive, "warn");
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "shelfkeep",
            "--empty",
            "--output",
            "json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--script",
            "session.txt",
        ])
        .unwrap();
        let config = ConsoleConfig::from(cli);

        assert!(!config.seed);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.tracing.directive.as_deref(), Some("debug"));
        assert_eq!(config.tracing.format, LogFormat::Json);
        assert_eq!(config.script, Some(PathBuf::from("session.txt")));
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["shelfkeep", "--output", "xml"]).is_err());
    }
}
