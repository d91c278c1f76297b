//! Debug Console actions
//!
//! Actions specific to the debug console overlay.

/// Actions for the Debug Console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugConsoleAction {
    // Visibility
    /// Make the console visible (Hidden -> Visible)
    Show,
    /// Flip visibility (host toggle key)
    Toggle,
    /// The close affordance was used; the console hides instead of going away
    RequestClose,

    // Buffer
    /// Append one message; dropped while the console is hidden
    Append(String),
    /// Clear all lines, regardless of visibility
    Clear,

    // Navigation
    /// Scroll to next (newer) log entry
    NavigateNext,
    /// Scroll to previous (older) log entry
    NavigatePrevious,
    /// Scroll to top (oldest logs)
    NavigateToTop,
    /// Scroll to bottom (newest logs)
    NavigateToBottom,
    /// Update visible height (for proper scroll bounds)
    SetVisibleHeight(usize),
}
