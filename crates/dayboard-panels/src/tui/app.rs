/*
[INPUT]:  Dashboard, log buffer, key-driven focus and text input
[OUTPUT]: AppState consumed by the event handler and the renderer
[POS]:    TUI app state
[UPDATE]: When adding tabs, input targets or panel focus rules
*/

use std::time::{Duration, Instant};

use dayboard_adapter::NewTask;

use crate::dashboard::Dashboard;
use crate::document::Panel;
use crate::tui::LogBufferHandle;

/// Panels refresh on their own after this long
pub(super) const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Dashboard,
    Logs,
}

/// What the line being typed will become
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputTarget {
    AssignPhrase,
    TaskTitle,
}

impl InputTarget {
    pub(super) fn prompt(self) -> &'static str {
        match self {
            InputTarget::AssignPhrase => "New phrase",
            InputTarget::TaskTitle => "New task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TextInput {
    pub(super) target: InputTarget,
    pub(super) buffer: String,
}

pub(super) struct AppState {
    pub(super) dashboard: Dashboard,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) current_tab: Tab,
    pub(super) focus: usize,
    pub(super) input: Option<TextInput>,
    pub(super) status_message: String,
    pub(super) last_refresh: Instant,
}

impl AppState {
    pub(super) fn new(dashboard: Dashboard, log_buffer: LogBufferHandle) -> Self {
        Self {
            dashboard,
            log_buffer,
            current_tab: Tab::Dashboard,
            focus: 0,
            input: None,
            status_message: "Ready".to_string(),
            last_refresh: Instant::now(),
        }
    }

    pub(super) fn focused_panel(&self) -> Panel {
        Panel::ALL[self.focus % Panel::ALL.len()]
    }

    pub(super) fn move_focus(&mut self, delta: isize) {
        let len = Panel::ALL.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Dashboard => Tab::Logs,
            Tab::Logs => Tab::Dashboard,
        };
    }

    pub(super) fn refresh_due(&self) -> bool {
        self.last_refresh.elapsed() >= AUTO_REFRESH_INTERVAL
    }

    pub(super) async fn refresh_all(&mut self) {
        self.dashboard.populate_all().await;
        self.last_refresh = Instant::now();
        self.status_message = if self.dashboard.is_session_expired() {
            "Signed out: session rejected".to_string()
        } else {
            "Refreshed".to_string()
        };
    }

    pub(super) async fn refresh_focused(&mut self) {
        match self.focused_panel() {
            Panel::Gmail => self.dashboard.populate_gmail().await,
            Panel::Tasks => self.dashboard.populate_tasks().await,
            Panel::Calendar => self.dashboard.populate_calendar().await,
            Panel::Go => self.dashboard.populate_go().await,
            Panel::PlanMail => self.dashboard.populate_plan_mail().await,
            Panel::Assign => {}
        }
        self.status_message = format!("{} refreshed", self.focused_panel().title());
    }

    pub(super) fn begin_input(&mut self, target: InputTarget) {
        self.input = Some(TextInput {
            target,
            buffer: String::new(),
        });
    }

    /// Hand the typed line to its target; empty lines are dropped
    pub(super) async fn submit_input(&mut self) {
        let Some(TextInput { target, buffer }) = self.input.take() else {
            return;
        };
        let text = buffer.trim().to_string();
        if text.is_empty() {
            return;
        }

        match target {
            InputTarget::AssignPhrase => {
                let document = self.dashboard.document_mut();
                document.set_value("assignListInput", text);
                crate::state::create_text_list_element(document, "assignListInput", "assignList");
                document.set_value("assignListInput", "");
            }
            InputTarget::TaskTitle => {
                let outcome = self
                    .dashboard
                    .post_and_get_task_list(None, NewTask::new(text))
                    .await;
                self.status_message = match outcome {
                    Some(outcome) => format!("Created list \"{}\"", outcome.task_list.title),
                    None => "Task creation failed, see logs".to_string(),
                };
            }
        }
    }
}
