pub mod app_reducer;
pub mod debug_console_reducer;
