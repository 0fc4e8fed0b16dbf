/*
[INPUT]:  DashboardClient, panel settings, session handler
[OUTPUT]: Populated panel document; sign-out on rejected sessions
[POS]:    Dashboard - per-panel routines, each catching failures at its boundary
[UPDATE]: When adding panels or panel routines
*/

use dayboard_adapter::{Credentials, DashboardClient, NewTask};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assign::{AssignOutcome, AssignPanel, AssignSettings};
use crate::document::{Document, dashboard_layout};
use crate::render::{
    render_calendar, render_directions, render_gmail, render_gmail_settings, render_plan_mail,
    render_tasks,
};
use crate::session::{AuthFailure, SessionHandler, SessionStatus};
use crate::state::{StartResetState, parse_leading_int};
use crate::workflow::{TaskCache, WorkflowOutcome, post_and_get_task_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GmailSettings {
    pub n_days: u32,
    pub m_hours: u32,
}

impl Default for GmailSettings {
    fn default() -> Self {
        Self {
            n_days: 7,
            m_hours: 3,
        }
    }
}

pub struct Dashboard<S: SessionHandler = SessionStatus> {
    client: DashboardClient,
    document: Document,
    cache: TaskCache,
    gmail: GmailSettings,
    assign: AssignPanel,
    session: S,
    session_expired: bool,
}

impl<S: SessionHandler> Dashboard<S> {
    pub fn new(
        client: DashboardClient,
        gmail: GmailSettings,
        assign: AssignSettings,
        session: S,
    ) -> Self {
        let mut document = dashboard_layout();
        document.set_text("gmailSettingsNDays", gmail.n_days.to_string());
        document.set_text("gmailSettingsMHours", gmail.m_hours.to_string());
        render_gmail_settings(&mut document, gmail.n_days, gmail.m_hours);

        let mut assign = AssignPanel::new(assign);
        assign.mount(&mut document);

        Self {
            client,
            document,
            cache: TaskCache::default(),
            gmail,
            assign,
            session,
            session_expired: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn cache(&self) -> &TaskCache {
        &self.cache
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn gmail_settings(&self) -> GmailSettings {
        self.gmail
    }

    pub fn assign(&self) -> &AssignPanel {
        &self.assign
    }

    /// True after a rejected session, until new credentials are set
    pub fn is_session_expired(&self) -> bool {
        self.session_expired
    }

    pub fn sign_in(&mut self, credentials: Credentials) {
        self.client.set_credentials(credentials);
        self.session_expired = false;
    }

    fn settle<T, E: AuthFailure>(&mut self, panel: &'static str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) if err.is_auth_error() => {
                warn!(panel, "authentication rejected");
                self.client.clear_credentials();
                self.session_expired = true;
                self.session.sign_out();
                None
            }
            Err(err) => {
                warn!(panel, error = %err, "panel update failed");
                None
            }
        }
    }

    /// Apply the mail settings shown in the panel and refresh its counts
    pub async fn populate_gmail(&mut self) {
        let n_days = settings_value(&self.document, "gmailSettingsNDays", self.gmail.n_days);
        let m_hours = settings_value(&self.document, "gmailSettingsMHours", self.gmail.m_hours);
        self.gmail = GmailSettings { n_days, m_hours };
        render_gmail_settings(&mut self.document, n_days, m_hours);

        let result = self.client.gmail(n_days, m_hours).await;
        if let Some(snapshot) = self.settle("gmail", result) {
            render_gmail(&mut self.document, &snapshot);
        }
    }

    /// Put the last applied mail settings back into the settings fields
    pub fn gmail_revert_settings(&mut self) {
        self.document
            .set_text("gmailSettingsNDays", self.gmail.n_days.to_string());
        self.document
            .set_text("gmailSettingsMHours", self.gmail.m_hours.to_string());
    }

    pub async fn populate_tasks(&mut self) {
        let result = self.client.tasks().await;
        if let Some(snapshot) = self.settle("tasks", result) {
            render_tasks(&mut self.document, &snapshot);
        }
    }

    pub async fn populate_calendar(&mut self) {
        let result = self.client.calendar().await;
        if let Some(snapshot) = self.settle("calendar", result) {
            render_calendar(&mut self.document, &snapshot);
        }
    }

    pub async fn populate_go(&mut self) {
        let result = self.client.directions().await;
        if let Some(directions) = self.settle("go", result) {
            render_directions(&mut self.document, &directions);
        }
    }

    pub async fn populate_plan_mail(&mut self) {
        let result = self.client.plan_mail().await;
        if let Some(plan) = self.settle("plan-mail", result) {
            render_plan_mail(&mut self.document, &plan);
        }
    }

    /// Refresh every panel in turn; stops once the session is rejected
    pub async fn populate_all(&mut self) {
        self.session_expired = false;
        self.populate_gmail().await;
        if self.session_expired {
            return;
        }
        self.populate_tasks().await;
        if self.session_expired {
            return;
        }
        self.populate_calendar().await;
        if self.session_expired {
            return;
        }
        self.populate_go().await;
        if self.session_expired {
            return;
        }
        self.populate_plan_mail().await;
        info!("dashboard refreshed");
    }

    pub async fn post_and_get_task_list(
        &mut self,
        title: Option<String>,
        task: NewTask,
    ) -> Option<WorkflowOutcome> {
        let result = post_and_get_task_list(&self.client, &mut self.cache, title, task).await;
        self.settle("tasks", result)
    }

    pub async fn fetch_api_key(&mut self) -> Option<String> {
        let result = self.client.api_key().await;
        self.settle("secret-manager", result)
    }

    pub async fn assign_start_reset(&mut self) -> Option<StartResetState> {
        let result = self
            .assign
            .press_start_reset(&self.client, &mut self.document)
            .await;
        self.settle("assign", result)
    }

    pub async fn assign_accept(&mut self) -> Option<AssignOutcome> {
        let result = self
            .assign
            .press_accept(&self.client, &mut self.cache, &mut self.document)
            .await;
        self.settle("assign", result)
    }

    pub fn assign_reject(&mut self) -> AssignOutcome {
        self.assign.press_reject(&mut self.document)
    }
}

/// Integer in a settings field, or `fallback` when it does not parse
fn settings_value(document: &Document, id: &str, fallback: u32) -> u32 {
    parse_leading_int(document.text(id))
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(fallback)
}
