//! Debug Console View Model

use crate::state::DebugConsoleState;
use debug_console_theme::Theme;
use ratatui::{
    style::Stylize,
    text::{Line, Span},
};

/// Key hints shown in the console footer
pub const FOOTER_HINTS: &[(&str, &str)] = &[
    ("`", "toggle"),
    ("Esc/q", "close"),
    ("c", "clear"),
    ("j/k", "scroll"),
    ("gg/G", "top/bottom"),
];

/// View model for debug console - handles presentation logic
pub struct DebugConsoleViewModel<'a> {
    state: &'a DebugConsoleState,
}

impl<'a> DebugConsoleViewModel<'a> {
    pub fn new(state: &'a DebugConsoleState) -> Self {
        Self { state }
    }

    /// Get the visible lines based on scroll offset and available height
    ///
    /// scroll_offset = 0 means we're at the bottom (showing newest logs)
    /// scroll_offset > 0 means we've scrolled up (showing older logs)
    pub fn visible_lines(&self, available_height: usize) -> Vec<&'a str> {
        let total = self.state.lines.len();

        if total == 0 || available_height == 0 {
            return Vec::new();
        }

        let max_scroll = total.saturating_sub(available_height);
        let effective_scroll = self.state.scroll_offset.min(max_scroll);

        // end is the index AFTER the last visible line
        let end = total.saturating_sub(effective_scroll);
        let start = end.saturating_sub(available_height);

        self.state
            .lines
            .range(start..end)
            .map(String::as_str)
            .collect()
    }

    /// Get the title for the debug console with scroll indicator
    pub fn title(&self) -> String {
        let count = self.state.lines.len();
        if self.state.scroll_offset > 0 {
            format!(
                " Debug Console ({} lines) - ↓{} ",
                count, self.state.scroll_offset
            )
        } else {
            format!(" Debug Console ({} lines) ", count)
        }
    }

    /// Footer line with key hints
    pub fn footer(theme: &Theme) -> Line<'static> {
        let mut spans = Vec::with_capacity(FOOTER_HINTS.len() * 3);
        for (i, (key, description)) in FOOTER_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", theme.muted()));
            }
            spans.push(Span::styled(*key, theme.key_hint()));
            spans.push(Span::styled(format!(" {}", description), theme.key_description()));
        }
        Line::from(spans)
    }

    /// Format one message, colour-coded by its `[LEVEL]` prefix when present
    pub fn format_log_line(line: &str, theme: &Theme) -> Line<'static> {
        // A message is rendered on one row; embedded line breaks become spaces
        let line: String = line
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        if let Some(rest) = line.strip_prefix('[') {
            if let Some((level, message)) = rest.split_once(']') {
                let style = match level {
                    "ERROR" => Some(theme.log_error()),
                    "WARN" => Some(theme.log_warning()),
                    "INFO" => Some(theme.log_info()),
                    "DEBUG" | "TRACE" => Some(theme.log_debug()),
                    _ => None,
                };

                if let Some(style) = style {
                    return Line::from(vec![
                        Span::styled(format!("[{}]", level), style.bold()),
                        Span::styled(message.to_string(), theme.text()),
                    ]);
                }
            }
        }

        Line::from(Span::styled(line, theme.text()))
    }
}
