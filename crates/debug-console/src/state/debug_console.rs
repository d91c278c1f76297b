//! Debug Console State

use debug_console_config::{AppConfig, LineSeparator};
use std::collections::VecDeque;

/// Debug console state
///
/// Owned by the UI thread. Producers on other threads never touch it
/// directly; their appends arrive as actions through the store's queue.
#[derive(Debug, Clone, Default)]
pub struct DebugConsoleState {
    /// Whether the console is on screen. Appends are dropped while false.
    pub visible: bool,
    /// Appended messages, oldest first
    pub lines: VecDeque<String>,
    /// Scroll offset (0 = bottom/newest)
    pub scroll_offset: usize,
    /// Visible height for scroll bounds
    pub visible_height: usize,
    /// Ring capacity (0 = unbounded)
    pub max_lines: usize,
    /// Separator placed between lines by `buffer()`
    pub separator: LineSeparator,
}

impl DebugConsoleState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            visible: config.start_visible,
            lines: VecDeque::new(),
            scroll_offset: 0,
            visible_height: 0,
            max_lines: config.max_lines,
            separator: config.line_separator,
        }
    }

    /// The whole console content as one text blob
    ///
    /// Each line is prefixed by the separator unless the text so far is
    /// empty, so leading empty messages leave no trace.
    pub fn buffer(&self) -> String {
        let separator = self.separator.as_str();
        let mut buffer = String::new();
        for line in &self.lines {
            if !buffer.is_empty() {
                buffer.push_str(separator);
            }
            buffer.push_str(line);
        }
        buffer
    }

    /// Push a line, evicting the oldest ones when over capacity
    pub fn push_line(&mut self, line: String) {
        self.lines.push_back(line);
        if self.max_lines > 0 {
            while self.lines.len() > self.max_lines {
                self.lines.pop_front();
            }
        }
    }

    /// Largest valid scroll offset for the current height
    pub fn max_scroll(&self) -> usize {
        if self.visible_height > 0 {
            self.lines.len().saturating_sub(self.visible_height)
        } else {
            self.lines.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(lines: &[&str]) -> DebugConsoleState {
        let mut state = DebugConsoleState::from_config(&AppConfig::default());
        for line in lines {
            state.push_line(line.to_string());
        }
        state
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(state_with(&[]).buffer(), "");
    }

    #[test]
    fn test_single_line_has_no_separator() {
        assert_eq!(state_with(&["a"]).buffer(), "a");
    }

    #[test]
    fn test_lines_joined_with_crlf() {
        assert_eq!(state_with(&["a", "b", "c"]).buffer(), "a\r\nb\r\nc");
    }

    #[test]
    fn test_separator_only_after_non_empty_text() {
        assert_eq!(state_with(&["", "b"]).buffer(), "b");
        assert_eq!(state_with(&["a", "", "b"]).buffer(), "a\r\n\r\nb");
        assert_eq!(state_with(&["a", ""]).buffer(), "a\r\n");
    }

    #[test]
    fn test_lf_separator() {
        let mut state = state_with(&["a", "b"]);
        state.separator = LineSeparator::Lf;
        assert_eq!(state.buffer(), "a\nb");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut state = state_with(&[]);
        state.max_lines = 2;
        for line in ["one", "two", "three"] {
            state.push_line(line.to_string());
        }
        assert_eq!(state.buffer(), "two\r\nthree");
    }

    #[test]
    fn test_default_config_keeps_every_line() {
        let mut state = state_with(&[]);
        for i in 0..10_050 {
            state.push_line(i.to_string());
        }
        assert_eq!(state.lines.len(), 10_050);
        assert!(state.buffer().starts_with("0\r\n1\r\n"));
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let mut state = state_with(&[]);
        state.max_lines = 0;
        for i in 0..100 {
            state.push_line(i.to_string());
        }
        assert_eq!(state.lines.len(), 100);
    }

    #[test]
    fn test_starts_hidden_by_default() {
        let state = DebugConsoleState::from_config(&AppConfig::default());
        assert!(!state.visible);

        let config = AppConfig {
            start_visible: true,
            ..AppConfig::default()
        };
        assert!(DebugConsoleState::from_config(&config).visible);
    }
}
