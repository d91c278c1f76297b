//! Debug Console Reducer

use crate::actions::DebugConsoleAction;
use crate::state::DebugConsoleState;

/// Reducer for debug console state.
///
/// Accepts only DebugConsoleAction, making it type-safe and focused.
pub fn reduce_debug_console(
    mut state: DebugConsoleState,
    action: &DebugConsoleAction,
) -> DebugConsoleState {
    let max_scroll = state.max_scroll();

    match action {
        DebugConsoleAction::Show => {
            if !state.visible {
                state.visible = true;
                state.scroll_offset = 0;
            }
        }
        DebugConsoleAction::Toggle => {
            state.visible = !state.visible;
            if state.visible {
                state.scroll_offset = 0;
            }
        }
        DebugConsoleAction::RequestClose => {
            // Closing only hides; the lines and the state stay around for the next Show
            state.visible = false;
        }
        DebugConsoleAction::Append(text) => {
            if !state.visible {
                return state;
            }
            state.push_line(text.clone());
            // Keep the viewport anchored when the user has scrolled up
            if state.scroll_offset > 0 {
                state.scroll_offset = (state.scroll_offset + 1).min(state.max_scroll());
            }
        }
        DebugConsoleAction::Clear => {
            state.lines.clear();
            state.scroll_offset = 0;
        }
        DebugConsoleAction::NavigateNext => {
            // Scroll towards newer logs (decrease offset, towards 0)
            state.scroll_offset = state.scroll_offset.min(max_scroll);
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        DebugConsoleAction::NavigatePrevious => {
            // Scroll towards older logs (increase offset, capped at max_scroll)
            if state.scroll_offset < max_scroll {
                state.scroll_offset = state.scroll_offset.saturating_add(1);
            }
        }
        DebugConsoleAction::NavigateToTop => {
            state.scroll_offset = max_scroll;
        }
        DebugConsoleAction::NavigateToBottom => {
            state.scroll_offset = 0;
        }
        DebugConsoleAction::SetVisibleHeight(height) => {
            state.visible_height = *height;
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use debug_console_config::AppConfig;

    fn hidden() -> DebugConsoleState {
        DebugConsoleState::from_config(&AppConfig::default())
    }

    fn visible() -> DebugConsoleState {
        reduce_debug_console(hidden(), &DebugConsoleAction::Show)
    }

    fn append(state: DebugConsoleState, text: &str) -> DebugConsoleState {
        reduce_debug_console(state, &DebugConsoleAction::Append(text.to_string()))
    }

    fn with_lines(count: usize, height: usize) -> DebugConsoleState {
        let mut state = visible();
        for i in 0..count {
            state = append(state, &format!("line {}", i));
        }
        reduce_debug_console(state, &DebugConsoleAction::SetVisibleHeight(height))
    }

    #[test]
    fn test_append_while_hidden_is_dropped() {
        let state = append(hidden(), "x");
        assert_eq!(state.buffer(), "");
        assert!(state.lines.is_empty());
    }

    #[test]
    fn test_many_appends_while_hidden_leave_buffer_untouched() {
        let mut state = visible();
        state = append(state, "kept");
        state = reduce_debug_console(state, &DebugConsoleAction::RequestClose);
        for i in 0..20 {
            state = append(state, &format!("dropped {}", i));
        }
        assert_eq!(state.buffer(), "kept");
    }

    #[test]
    fn test_appends_while_visible_are_joined() {
        let state = append(append(visible(), "a"), "b");
        assert_eq!(state.buffer(), "a\r\nb");
    }

    #[test]
    fn test_empty_first_append_adds_no_separator() {
        let state = append(append(visible(), ""), "b");
        assert_eq!(state.buffer(), "b");
    }

    #[test]
    fn test_consecutive_empty_appends_keep_buffer_empty() {
        let state = append(append(visible(), ""), "");
        assert_eq!(state.buffer(), "");
        assert_eq!(state.lines.len(), 2);
    }

    #[test]
    fn test_clear_empties_visible_buffer() {
        let state = append(append(visible(), "a"), "b");
        assert_eq!(state.buffer(), "a\r\nb");

        let state = reduce_debug_console(state, &DebugConsoleAction::Clear);
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn test_clear_works_while_hidden() {
        let state = append(append(visible(), "a"), "b");
        let state = reduce_debug_console(state, &DebugConsoleAction::RequestClose);
        let state = reduce_debug_console(state, &DebugConsoleAction::Clear);
        assert!(!state.visible);
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn test_request_close_hides_and_show_restores() {
        let state = append(visible(), "before");
        let state = reduce_debug_console(state, &DebugConsoleAction::RequestClose);
        assert!(!state.visible);

        let state = reduce_debug_console(state, &DebugConsoleAction::Show);
        let state = append(state, "after");
        assert!(state.visible);
        assert_eq!(state.buffer(), "before\r\nafter");
    }

    #[test]
    fn test_request_close_while_hidden_stays_hidden() {
        let state = reduce_debug_console(hidden(), &DebugConsoleAction::RequestClose);
        assert!(!state.visible);
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let state = reduce_debug_console(hidden(), &DebugConsoleAction::Toggle);
        assert!(state.visible);
        let state = reduce_debug_console(state, &DebugConsoleAction::Toggle);
        assert!(!state.visible);
    }

    #[test]
    fn test_navigate_previous_capped_at_max_scroll() {
        let mut state = with_lines(10, 4);
        for _ in 0..20 {
            state = reduce_debug_console(state, &DebugConsoleAction::NavigatePrevious);
        }
        assert_eq!(state.scroll_offset, 6);
    }

    #[test]
    fn test_navigate_next_stops_at_bottom() {
        let state = with_lines(10, 4);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigatePrevious);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigateNext);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigateNext);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_navigate_top_and_bottom() {
        let state = with_lines(10, 4);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigateToTop);
        assert_eq!(state.scroll_offset, 6);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigateToBottom);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_append_keeps_scrolled_viewport_anchored() {
        let state = with_lines(10, 4);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigatePrevious);
        assert_eq!(state.scroll_offset, 1);

        let state = append(state, "new");
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn test_append_at_bottom_stays_at_bottom() {
        let state = append(with_lines(10, 4), "new");
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_scroll() {
        let state = with_lines(10, 4);
        let state = reduce_debug_console(state, &DebugConsoleAction::NavigateToTop);
        let state = reduce_debug_console(state, &DebugConsoleAction::SetVisibleHeight(8));
        assert_eq!(state.scroll_offset, 2);
    }
}
