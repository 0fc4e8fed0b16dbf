/*
[INPUT]:  Public API exports for dayboard-panels crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod assign;
pub mod config;
pub mod dashboard;
pub mod document;
pub mod render;
pub mod session;
pub mod state;
pub mod tui;
pub mod workflow;

// Re-export main types for convenience
pub use assign::{AssignPanel, AssignSettings};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, GmailSettings};
pub use document::{Document, Panel};
pub use session::{SessionHandler, SessionStatus};
pub use workflow::{TaskCache, WorkflowError, post_and_get_task_list};
