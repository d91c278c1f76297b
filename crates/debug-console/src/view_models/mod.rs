pub mod debug_console_view_model;

pub use debug_console_view_model::DebugConsoleViewModel;
