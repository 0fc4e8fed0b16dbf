/*
[INPUT]:  Crossterm key codes
[OUTPUT]: Dashboard actions, focus and tab changes
[POS]:    TUI key routing
[UPDATE]: When changing hotkeys
*/

use crossterm::event::KeyCode;

use super::app::{AppState, InputTarget};
use crate::assign::AssignOutcome;
use crate::document::Panel;
use crate::state::{StepBounds, TogglePair, decrement_element, increment_element};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.input.is_some() {
        handle_input_key(app, key).await;
        return false;
    }

    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.refresh_all().await,
        KeyCode::Char('f') => app.refresh_focused().await,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Left => app.move_focus(-1),
        KeyCode::Right => app.move_focus(1),
        KeyCode::Char('k') => {
            app.status_message = match app.dashboard.fetch_api_key().await {
                Some(key) => format!("API key fetched ({} chars)", key.chars().count()),
                None => "API key unavailable, see logs".to_string(),
            };
        }
        KeyCode::Char('n') => app.begin_input(InputTarget::TaskTitle),
        other => match app.focused_panel() {
            Panel::Gmail => handle_gmail_key(app, other).await,
            Panel::Assign => handle_assign_key(app, other).await,
            _ => {}
        },
    }
    false
}

async fn handle_input_key(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_input().await,
        KeyCode::Esc => app.input = None,
        KeyCode::Backspace => {
            if let Some(input) = app.input.as_mut() {
                input.buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.input.as_mut() {
                input.buffer.push(c);
            }
        }
        _ => {}
    }
}

async fn handle_gmail_key(app: &mut AppState, key: KeyCode) {
    let bounds = StepBounds::default();
    match key {
        KeyCode::Char('+') => {
            increment_element(app.dashboard.document_mut(), "gmailSettingsNDays", bounds);
        }
        KeyCode::Char('-') => {
            decrement_element(app.dashboard.document_mut(), "gmailSettingsNDays", bounds);
        }
        KeyCode::Char('>') => {
            increment_element(app.dashboard.document_mut(), "gmailSettingsMHours", bounds);
        }
        KeyCode::Char('<') => {
            decrement_element(app.dashboard.document_mut(), "gmailSettingsMHours", bounds);
        }
        KeyCode::Enter => {
            app.dashboard.populate_gmail().await;
            app.status_message = "Mail settings applied".to_string();
        }
        KeyCode::Backspace => {
            app.dashboard.gmail_revert_settings();
            app.status_message = "Mail settings reverted".to_string();
        }
        _ => {}
    }
}

async fn handle_assign_key(app: &mut AppState, key: KeyCode) {
    let bounds = StepBounds::default();
    match key {
        KeyCode::Char('+') => {
            increment_element(app.dashboard.document_mut(), "assignNDays", bounds);
        }
        KeyCode::Char('-') => {
            decrement_element(app.dashboard.document_mut(), "assignNDays", bounds);
        }
        KeyCode::Char('u') => {
            TogglePair::ASSIGN_UNREAD_ONLY.toggle(app.dashboard.document_mut());
        }
        KeyCode::Char('i') => app.begin_input(InputTarget::AssignPhrase),
        KeyCode::Char('d') => {
            let document = app.dashboard.document_mut();
            let last = document.items("assignList").len().checked_sub(1);
            if let Some(index) = last {
                crate::state::remove_text_list_element(document, "assignList", index);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(state) = app.dashboard.assign_start_reset().await {
                app.status_message = format!("Assign {state:?}");
            }
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            if let Some(outcome) = app.dashboard.assign_accept().await {
                app.status_message = outcome_message(&outcome);
            }
        }
        KeyCode::Char('x') | KeyCode::Backspace => {
            let outcome = app.dashboard.assign_reject();
            app.status_message = outcome_message(&outcome);
        }
        _ => {}
    }
}

fn outcome_message(outcome: &AssignOutcome) -> String {
    match outcome {
        AssignOutcome::SettingsApplied => "Assign settings applied".to_string(),
        AssignOutcome::SettingsReverted => "Assign settings reverted".to_string(),
        AssignOutcome::Added(task) => format!("Task added: {}", task.title),
        AssignOutcome::Skipped(message) => format!("Skipped: {}", message.headline()),
        AssignOutcome::Ignored => "Nothing to do".to_string(),
    }
}
