//! Application configuration
//!
//! Configuration loaded from .debug-console.toml file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE: &str = ".debug-console.toml";

/// Separator placed between lines when the console buffer is rendered as one text blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `"\r\n"`
    #[default]
    Crlf,
    /// `"\n"`
    Lf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Application configuration loaded from .debug-console.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Separator used when joining console lines into a single buffer
    #[serde(default)]
    pub line_separator: LineSeparator,

    /// Maximum number of lines kept by the console (0 = unbounded)
    #[serde(default)]
    pub max_lines: usize,

    /// Whether the console starts out visible
    #[serde(default)]
    pub start_visible: bool,

    /// Share of the terminal height taken by the console overlay
    #[serde(default = "default_console_height_percent")]
    pub console_height_percent: u16,

    /// Number of demo producer threads the host spawns
    #[serde(default = "default_demo_producers")]
    pub demo_producers: usize,

    /// Delay between two demo messages of the same producer
    #[serde(default = "default_demo_interval_ms")]
    pub demo_interval_ms: u64,
}

fn default_console_height_percent() -> u16 {
    70
}

fn default_demo_producers() -> usize {
    2
}

fn default_demo_interval_ms() -> u64 {
    750
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            line_separator: LineSeparator::default(),
            max_lines: 0,
            start_visible: false,
            console_height_percent: default_console_height_percent(),
            demo_producers: default_demo_producers(),
            demo_interval_ms: default_demo_interval_ms(),
        }
    }
}

/// Where the active configuration came from
///
/// Config is loaded before logging is set up, so the outcome is kept
/// and reported later through [`ConfigSource::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// This file was found but did not parse; defaults are in use
    Invalid { path: PathBuf, error: String },
    /// No config file was found
    Defaults,
}

impl ConfigSource {
    /// Log the outcome of the config lookup
    pub fn log(&self) {
        match self {
            Self::File(path) => log::info!("Loaded app config from {}", path.display()),
            Self::Invalid { path, error } => {
                log::warn!("Failed to parse config file {}: {}", path.display(), error)
            }
            Self::Defaults => log::debug!("Using default app config"),
        }
    }
}

/// Config files in lookup order: CWD, home directory, config dir
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    if let Ok(path) = crate::app_config_path() {
        candidates.push(path);
    }
    candidates
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then the config dir, or use defaults
    pub fn load() -> (Self, ConfigSource) {
        Self::load_from(&config_candidates())
    }

    /// Load config from the first readable file in `candidates`
    ///
    /// An unparsable file yields the defaults; later candidates are not tried.
    pub fn load_from(candidates: &[PathBuf]) -> (Self, ConfigSource) {
        let found = candidates.iter().find_map(|path| {
            std::fs::read_to_string(path)
                .ok()
                .map(|content| (path.clone(), content))
        });

        let Some((path, content)) = found else {
            return (Self::default(), ConfigSource::Defaults);
        };

        match Self::from_toml(&content) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(e) => (
                Self::default(),
                ConfigSource::Invalid {
                    path,
                    error: e.to_string(),
                },
            ),
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.console_height_percent = config.console_height_percent.clamp(10, 100);
        Ok(config)
    }
}
