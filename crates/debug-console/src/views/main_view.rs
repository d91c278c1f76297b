use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the host screen behind the console
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let console = &state.debug_console;

    let status = if console.visible { "visible" } else { "hidden" };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("debug-console", theme.panel_title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("console: ", theme.muted()),
            Span::styled(status, theme.text()),
            Span::styled(
                format!("  ({} lines buffered)", console.lines.len()),
                theme.muted(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("`", theme.key_hint()),
            Span::styled(" toggle console   ", theme.key_description()),
            Span::styled("c", theme.key_hint()),
            Span::styled(" clear   ", theme.key_description()),
            Span::styled("q", theme.key_hint()),
            Span::styled(" quit", theme.key_description()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(theme.screen_background());

    f.render_widget(paragraph, area);
}
