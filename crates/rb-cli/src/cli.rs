//! CLI argument definitions for the replay tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rb_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "report-builder",
    version,
    about = "Replay report builder event logs",
    long_about = "Fold a recorded event log through the report builder state core\n\
                  and print the resulting report, display fields and filters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup implied by the flags.
    ///
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` only applies when neither
    /// is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        let mut config = LogConfig::default()
            .with_level_filter(level_filter)
            .with_format(self.log_format.into())
            .with_ansi(ansi)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = self.log_level.is_none() && !self.verbosity.is_present();
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay an event log and print the final views.
    Replay(ReplayArgs),

    /// List every event kind accepted in an event log.
    Kinds,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Event log: a JSON array of events, or one JSON event per line.
    #[arg(value_name = "EVENTS")]
    pub events: PathBuf,

    /// Reducer settings (TOML).
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// What to print once the log has been replayed.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Freeze the clock at this RFC 3339 instant for reproducible output.
    #[arg(long = "clock", value_name = "TIMESTAMP", value_parser = parse_timestamp)]
    pub clock: Option<DateTime<Utc>>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Summary tables.
    Table,
    /// The edited report as the JSON payload a save would send.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("report-builder").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn explicit_level_overrides_verbosity_and_env() {
        let config = parse(&["-q", "--log-level", "debug", "--color", "never", "kinds"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn defaults_defer_to_env_at_warn() {
        let config = parse(&["--log-format", "json", "kinds"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn verbosity_flag_disables_env_filter() {
        let config = parse(&["-vv", "kinds"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn replay_clock_must_be_rfc3339() {
        let cli = parse(&["replay", "events.json", "--clock", "2024-01-02T03:04:05Z"]);
        let Command::Replay(args) = cli.command else {
            panic!("expected replay command");
        };
        assert!(args.clock.is_some());
        assert!(
            Cli::try_parse_from(["report-builder", "replay", "e.json", "--clock", "yesterday"])
                .is_err()
        );
    }
}
