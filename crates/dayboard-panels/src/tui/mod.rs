/*
[INPUT]:  Dashboard state and captured log lines
[OUTPUT]: Ratatui-based TUI for the dashboard panels, logs, and controls
[POS]:    TUI module for the dayboard binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod log_buffer;
mod runtime;
mod terminal;
mod ui;

pub use log_buffer::{
    LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriter, LogWriterFactory, lock_buffer,
};
pub use runtime::run_tui_with_log;
pub use ui::panel_lines;
