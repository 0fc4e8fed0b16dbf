/*
[INPUT]:  TUI app state and panel document
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding UI components
*/

mod layout;
mod logs;
mod panels;

pub(in crate::tui) use layout::{draw_footer, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use panels::draw_panels;
pub use panels::panel_lines;
