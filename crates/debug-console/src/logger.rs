//! Logging setup using simplelog
//!
//! Every record goes to a timestamped log file. Log file location depends
//! on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/debug-console/ on Linux)
//!
//! Records are additionally forwarded to the debug console through
//! [`ConsoleLogger`] while the console is visible.

use crate::sink::LogSink;
use anyhow::{Context, Result};
use log::{Log, Metadata, Record};
use simplelog::{CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        debug_console_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Parse a `RUST_LOG`-style level, defaulting to Info for unknown values
fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Forwards `log` records to a [`LogSink`] as `"[LEVEL] target: message"` lines
pub struct ConsoleLogger<S> {
    sink: S,
    level: LevelFilter,
    config: Config,
}

impl<S: LogSink> ConsoleLogger<S> {
    pub fn new(sink: S, level: LevelFilter) -> Self {
        Self {
            sink,
            level,
            config: Config::default(),
        }
    }
}

impl<S: LogSink> Log for ConsoleLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && self.sink.is_accepting()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.sink.append_message_fmt(format_args!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {}
}

impl<S: LogSink + 'static> SharedLogger for ConsoleLogger<S> {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        Some(&self.config)
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

/// Initialize file logging plus forwarding to the given console sink
///
/// Returns the path to the log file.
pub fn init<S: LogSink + 'static>(console: S) -> Result<PathBuf> {
    let log_file = log_file_path();

    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Debug);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    CombinedLogger::init(vec![
        WriteLogger::new(level, config, file),
        Box::new(ConsoleLogger::new(console, level)),
    ])
    .context("Failed to initialize logger")?;

    Ok(log_file)
}
