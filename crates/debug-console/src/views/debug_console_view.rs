use crate::state::DebugConsoleState;
use crate::view_models::DebugConsoleViewModel;
use debug_console_theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows taken by the top and bottom border
const BORDER_ROWS: u16 = 2;

/// Area of the quake-style drop-down for the given screen area
pub fn console_area(area: Rect, height_percent: u16) -> Rect {
    let console_height = ((u32::from(area.height) * u32::from(height_percent)) / 100) as u16;
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: console_height.min(area.height),
    }
}

/// Number of log rows the console can show inside its borders
pub fn inner_height(area: Rect, height_percent: u16) -> usize {
    console_area(area, height_percent)
        .height
        .saturating_sub(BORDER_ROWS) as usize
}

/// Render the debug console (Quake-style drop-down)
pub fn render(
    state: &DebugConsoleState,
    theme: &Theme,
    height_percent: u16,
    area: Rect,
    f: &mut Frame,
) {
    if !state.visible {
        return;
    }

    let console_area = console_area(area, height_percent);
    f.render_widget(Clear, console_area);

    let view_model = DebugConsoleViewModel::new(state);

    let block = Block::default()
        .title(view_model.title())
        .title_bottom(DebugConsoleViewModel::footer(theme))
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let available_height = inner_height(area, height_percent);
    let formatted_lines: Vec<_> = view_model
        .visible_lines(available_height)
        .into_iter()
        .map(|line| DebugConsoleViewModel::format_log_line(line, theme))
        .collect();

    let paragraph = Paragraph::new(formatted_lines)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, console_area);
}
