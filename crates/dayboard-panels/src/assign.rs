/*
[INPUT]:  Assign settings in the document, actionable emails, task cache
[OUTPUT]: Queue of suspected action items turned into tasks or skipped
[POS]:    Assign panel - settings, start/restart session, add/skip items
[UPDATE]: When the assign flow or its settings change
*/

use std::collections::VecDeque;

use dayboard_adapter::{ActionableMessage, DashboardClient, DashboardError, NewTask, Task};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::document::{DISABLED_CLASS, Document};
use crate::render::render_assign_queue;
use crate::state::{
    AcceptAction, PanelMode, PanelStateMachine, RejectAction, StartResetAction, StartResetState,
    StartResetToggle, StateError, StepBounds, TogglePair, parse_leading_int,
};
use crate::workflow::{TaskCache, WorkflowError};

/// Title of the task-list the assign panel files tasks into
pub const ASSIGN_TASK_LIST_TITLE: &str = "Assign";

#[derive(Debug, Error)]
pub enum AssignError {
    #[error(transparent)]
    Backend(#[from] DashboardError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Cache(#[from] WorkflowError),
}

impl AssignError {
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Backend(err) => err.is_auth_error(),
            Self::Cache(err) => err.is_auth_error(),
            Self::State(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignSettings {
    pub n_days: u32,
    pub unread_only: bool,
    pub subject_line_phrases: Vec<String>,
}

impl Default for AssignSettings {
    fn default() -> Self {
        Self {
            n_days: 7,
            unread_only: false,
            subject_line_phrases: Vec::new(),
        }
    }
}

impl AssignSettings {
    /// Settings as currently shown in the panel
    pub fn from_document(document: &Document) -> Self {
        let bounds = StepBounds::default();
        let n_days = parse_leading_int(document.text("assignNDays"))
            .map(|days| days.clamp(bounds.min, bounds.max))
            .unwrap_or(bounds.min);
        Self {
            n_days: u32::try_from(n_days).unwrap_or(1),
            unread_only: TogglePair::ASSIGN_UNREAD_ONLY.is_selected(document),
            subject_line_phrases: document.items("assignList").to_vec(),
        }
    }

    pub fn write_to(&self, document: &mut Document) {
        document.set_text("assignNDays", self.n_days.to_string());
        TogglePair::ASSIGN_UNREAD_ONLY.set_selected(document, self.unread_only);
        document.element_mut("assignList").items = self.subject_line_phrases.clone();
    }
}

/// What a button press on the assign panel did
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    SettingsApplied,
    SettingsReverted,
    Added(Task),
    Skipped(ActionableMessage),
    /// The pressed button is disabled or nothing is queued
    Ignored,
}

#[derive(Debug)]
pub struct AssignPanel {
    applied: AssignSettings,
    mode: PanelStateMachine,
    control: StartResetToggle,
    queue: VecDeque<ActionableMessage>,
    task_list_id: Option<String>,
}

impl AssignPanel {
    pub fn new(settings: AssignSettings) -> Self {
        Self {
            applied: settings,
            mode: PanelStateMachine::new("assign"),
            control: StartResetToggle::default(),
            queue: VecDeque::new(),
            task_list_id: None,
        }
    }

    /// Put the applied settings on screen in settings mode
    pub fn mount(&mut self, document: &mut Document) {
        self.applied.write_to(document);
        self.mode.display_settings(document);
    }

    pub fn settings(&self) -> &AssignSettings {
        &self.applied
    }

    pub fn mode(&self) -> PanelMode {
        self.mode.mode()
    }

    pub fn control_state(&self) -> StartResetState {
        self.control.state()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn current(&self) -> Option<&ActionableMessage> {
        self.queue.front()
    }

    /// Take the panel's settings as the ones the next start uses
    pub fn apply_settings(&mut self, document: &mut Document) -> &AssignSettings {
        self.applied = AssignSettings::from_document(document);
        self.control.enable(document);
        debug!(
            n_days = self.applied.n_days,
            unread_only = self.applied.unread_only,
            phrases = self.applied.subject_line_phrases.len(),
            "assign settings applied"
        );
        &self.applied
    }

    /// Discard edits and show the last applied settings
    pub fn revert_settings(&self, document: &mut Document) {
        self.applied.write_to(document);
    }

    /// Handle a click on the start/restart control
    pub async fn press_start_reset(
        &mut self,
        client: &DashboardClient,
        document: &mut Document,
    ) -> Result<StartResetState, AssignError> {
        if document.has_class("assignStartResetButton", DISABLED_CLASS) {
            return Ok(self.control.state());
        }
        match self.control.pending_action() {
            StartResetAction::Start => self.start(client, document).await?,
            StartResetAction::Restart => self.restart(document)?,
        }
        Ok(self.control.state())
    }

    /// Fetch the queue for the applied settings and show its head
    pub async fn start(
        &mut self,
        client: &DashboardClient,
        document: &mut Document,
    ) -> Result<(), AssignError> {
        if !self.control.can_transition(StartResetAction::Start) {
            return Err(StateError::InvalidTransition {
                from: self.control.state(),
                action: StartResetAction::Start,
            }
            .into());
        }

        let settings = &self.applied;
        let messages = client
            .actionable_emails(
                &settings.subject_line_phrases,
                settings.unread_only,
                settings.n_days,
            )
            .await?;
        info!(count = messages.len(), "actionable emails fetched");

        self.queue = messages.into();
        self.control.transition(StartResetAction::Start, document)?;
        self.mode.display_content(document);
        render_assign_queue(document, self.queue.iter());
        Ok(())
    }

    /// Drop the queue and go back to settings; start stays disabled until
    /// settings are applied again
    pub fn restart(&mut self, document: &mut Document) -> Result<(), AssignError> {
        self.control.transition(StartResetAction::Restart, document)?;
        self.queue.clear();
        self.mode.display_settings(document);
        Ok(())
    }

    pub async fn press_accept(
        &mut self,
        client: &DashboardClient,
        cache: &mut TaskCache,
        document: &mut Document,
    ) -> Result<AssignOutcome, AssignError> {
        match self.mode.accept_action() {
            AcceptAction::ConfirmSettings => {
                self.apply_settings(document);
                Ok(AssignOutcome::SettingsApplied)
            }
            AcceptAction::AddTask => {
                if document.has_class("assign-accept-button", DISABLED_CLASS) {
                    return Ok(AssignOutcome::Ignored);
                }
                Ok(self
                    .add_current(client, cache, document)
                    .await?
                    .map_or(AssignOutcome::Ignored, AssignOutcome::Added))
            }
        }
    }

    pub fn press_reject(&mut self, document: &mut Document) -> AssignOutcome {
        match self.mode.reject_action() {
            RejectAction::ResetSettings => {
                self.revert_settings(document);
                AssignOutcome::SettingsReverted
            }
            RejectAction::SkipItem => {
                if document.has_class("assign-reject-button", DISABLED_CLASS) {
                    return AssignOutcome::Ignored;
                }
                self.skip_current(document)
                    .map_or(AssignOutcome::Ignored, AssignOutcome::Skipped)
            }
        }
    }

    /// File the head of the queue as a task and advance
    ///
    /// On failure the message stays at the head of the queue.
    pub async fn add_current(
        &mut self,
        client: &DashboardClient,
        cache: &mut TaskCache,
        document: &mut Document,
    ) -> Result<Option<Task>, AssignError> {
        let Some(message) = self.queue.front() else {
            return Ok(None);
        };
        let mut task = NewTask::new(message.headline());
        if let Some(snippet) = message.snippet.as_deref().filter(|s| !s.is_empty()) {
            task = task.with_notes(snippet);
        }

        let list_id = self.ensure_task_list(client, cache).await?;
        let created = client.create_task(&list_id, &task).await?;
        cache.append_task(&list_id, created.clone())?;
        info!(list_id = %list_id, title = %created.title, "assign task created");

        self.queue.pop_front();
        render_assign_queue(document, self.queue.iter());
        Ok(Some(created))
    }

    pub fn skip_current(&mut self, document: &mut Document) -> Option<ActionableMessage> {
        let skipped = self.queue.pop_front()?;
        debug!(id = %skipped.id, "assign item skipped");
        render_assign_queue(document, self.queue.iter());
        Some(skipped)
    }

    async fn ensure_task_list(
        &mut self,
        client: &DashboardClient,
        cache: &mut TaskCache,
    ) -> Result<String, AssignError> {
        if let Some(id) = &self.task_list_id {
            if cache.task_list(id).is_some() {
                return Ok(id.clone());
            }
        }

        if cache.find_by_title(ASSIGN_TASK_LIST_TITLE).is_none() {
            cache.replace(client.task_lists().await?);
        }
        let id = match cache.find_by_title(ASSIGN_TASK_LIST_TITLE) {
            Some(list) => list.id.clone(),
            None => {
                let list = client.create_task_list(ASSIGN_TASK_LIST_TITLE).await?;
                info!(list_id = %list.id, "assign task-list created");
                let id = list.id.clone();
                cache.push_task_list(list);
                id
            }
        };
        self.task_list_id = Some(id.clone());
        Ok(id)
    }
}
