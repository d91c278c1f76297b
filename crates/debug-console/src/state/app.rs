//! Application State

use debug_console_config::AppConfig;
use debug_console_theme::Theme;

use super::DebugConsoleState;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub debug_console: DebugConsoleState,
    pub theme: Theme,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            debug_console: DebugConsoleState::from_config(&config),
            theme: Theme::default(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
