/*
[INPUT]:  PanelAction / StartResetAction events, panel document
[OUTPUT]: Validated panel mode transitions applied to the document
[POS]:    Panel state controller - settings/content FSM, toggles, steppers, phrase lists
[UPDATE]: When panel modes, button bindings or control semantics change
*/

use thiserror::Error;

use crate::document::{DISABLED_CLASS, Document};

/// Which half of a panel is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Settings,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    ShowSettings,
    ShowContent,
}

/// What the accept button does in the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptAction {
    ConfirmSettings,
    AddTask,
}

/// What the reject button does in the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectAction {
    ResetSettings,
    SkipItem,
}

const PANEL_TRANSITIONS: [(PanelMode, PanelAction, PanelMode); 4] = [
    (PanelMode::Settings, PanelAction::ShowSettings, PanelMode::Settings),
    (PanelMode::Settings, PanelAction::ShowContent, PanelMode::Content),
    (PanelMode::Content, PanelAction::ShowSettings, PanelMode::Settings),
    (PanelMode::Content, PanelAction::ShowContent, PanelMode::Content),
];

/// Settings/content switch for one panel
///
/// `prefix` names the panel's class family: elements classed
/// `{prefix}-settings` and `{prefix}-content` are shown and hidden together,
/// and `{prefix}-accept-button` / `{prefix}-reject-button` carry the labels.
#[derive(Debug, Clone)]
pub struct PanelStateMachine {
    prefix: &'static str,
    mode: PanelMode,
}

impl PanelStateMachine {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            mode: PanelMode::Settings,
        }
    }

    pub fn next_mode(from: PanelMode, action: PanelAction) -> PanelMode {
        PANEL_TRANSITIONS
            .iter()
            .find(|(state, event, _)| *state == from && *event == action)
            .map(|(_, _, to)| *to)
            .unwrap_or(from)
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn transition(&mut self, action: PanelAction, document: &mut Document) -> PanelMode {
        self.mode = Self::next_mode(self.mode, action);
        self.apply(document);
        self.mode
    }

    pub fn display_settings(&mut self, document: &mut Document) {
        self.transition(PanelAction::ShowSettings, document);
    }

    pub fn display_content(&mut self, document: &mut Document) {
        self.transition(PanelAction::ShowContent, document);
    }

    pub fn accept_action(&self) -> AcceptAction {
        match self.mode {
            PanelMode::Settings => AcceptAction::ConfirmSettings,
            PanelMode::Content => AcceptAction::AddTask,
        }
    }

    pub fn reject_action(&self) -> RejectAction {
        match self.mode {
            PanelMode::Settings => RejectAction::ResetSettings,
            PanelMode::Content => RejectAction::SkipItem,
        }
    }

    fn apply(&self, document: &mut Document) {
        let settings = format!("{}-settings", self.prefix);
        let content = format!("{}-content", self.prefix);
        let (accept, reject) = match self.mode {
            PanelMode::Settings => {
                document.show(&settings);
                document.hide(&content);
                ("Confirm", "Reset")
            }
            PanelMode::Content => {
                document.show(&content);
                document.hide(&settings);
                ("Add Task", "Skip Item")
            }
        };
        document.set_text(&format!("{}-accept-button", self.prefix), accept);
        document.set_text(&format!("{}-reject-button", self.prefix), reject);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartResetState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartResetAction {
    Start,
    Restart,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid transition: {from:?} -> {action:?}")]
    InvalidTransition {
        from: StartResetState,
        action: StartResetAction,
    },
}

/// The ▶ / ↻ control of the assign panel
#[derive(Debug, Clone)]
pub struct StartResetToggle {
    state: StartResetState,
}

impl Default for StartResetToggle {
    fn default() -> Self {
        Self {
            state: StartResetState::Idle,
        }
    }
}

impl StartResetToggle {
    pub fn state(&self) -> StartResetState {
        self.state
    }

    pub fn can_transition(&self, action: StartResetAction) -> bool {
        matches!(
            (self.state, action),
            (StartResetState::Idle, StartResetAction::Start)
                | (StartResetState::Running, StartResetAction::Restart)
        )
    }

    /// The action a click performs right now
    pub fn pending_action(&self) -> StartResetAction {
        match self.state {
            StartResetState::Idle => StartResetAction::Start,
            StartResetState::Running => StartResetAction::Restart,
        }
    }

    pub fn transition(
        &mut self,
        action: StartResetAction,
        document: &mut Document,
    ) -> Result<StartResetState, StateError> {
        if !self.can_transition(action) {
            return Err(StateError::InvalidTransition {
                from: self.state,
                action,
            });
        }

        match action {
            StartResetAction::Start => {
                document.set_text("assignStartResetButton", "↻");
                document.set_text("assignStartResetText", "Click to Restart");
                set_accept_reject_enabled(document, true);
                self.state = StartResetState::Running;
            }
            StartResetAction::Restart => {
                document.set_text("assignStartResetButton", "▶");
                document.set_text("assignStartResetText", "Click to Start");
                document.set_text("assignSuspectedActionItems", "-");
                set_accept_reject_enabled(document, false);
                document.add_class("assignStartResetButton", DISABLED_CLASS);
                self.state = StartResetState::Idle;
            }
        }
        Ok(self.state)
    }

    pub fn enable(&self, document: &mut Document) {
        document.remove_class("assignStartResetButton", DISABLED_CLASS);
    }
}

pub fn set_accept_reject_enabled(document: &mut Document, enabled: bool) {
    for id in ["assign-accept-button", "assign-reject-button"] {
        if enabled {
            document.remove_class(id, DISABLED_CLASS);
        } else {
            document.add_class(id, DISABLED_CLASS);
        }
    }
}

/// Two sibling icons of which exactly one is visible
#[derive(Debug, Clone, Copy)]
pub struct TogglePair {
    pub first: &'static str,
    pub second: &'static str,
}

impl TogglePair {
    pub const ASSIGN_UNREAD_ONLY: TogglePair = TogglePair {
        first: "assignUnreadOnlyIcon-unselected",
        second: "assignUnreadOnlyIcon-selected",
    };

    /// Swap which icon is visible; repairs a pair that lost its invariant
    pub fn toggle(&self, document: &mut Document) {
        let (show, hide) = if document.is_hidden(self.first) {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        };
        document.set_hidden(hide, true);
        document.set_hidden(show, false);
    }

    /// True once the second icon is the visible one
    pub fn is_selected(&self, document: &Document) -> bool {
        document.is_hidden(self.first)
    }

    pub fn set_selected(&self, document: &mut Document, selected: bool) {
        document.set_hidden(self.first, selected);
        document.set_hidden(self.second, !selected);
    }
}

/// Inclusive range a stepper element may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for StepBounds {
    fn default() -> Self {
        Self { min: 1, max: 30 }
    }
}

impl StepBounds {
    fn clamp(&self, value: i64) -> i64 {
        value.min(self.max).max(self.min)
    }
}

/// Leading integer of `text`, the way `parseInt` reads it
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Over-long digit runs saturate instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

fn stepped_value(document: &Document, id: &str, bounds: StepBounds, delta: i64) -> i64 {
    match parse_leading_int(document.text(id)) {
        Some(current) => bounds.clamp(current.saturating_add(delta)),
        None => bounds.min,
    }
}

pub fn increment_element(document: &mut Document, id: &str, bounds: StepBounds) -> i64 {
    let next = stepped_value(document, id, bounds, 1);
    document.set_text(id, next.to_string());
    next
}

pub fn decrement_element(document: &mut Document, id: &str, bounds: StepBounds) -> i64 {
    let next = stepped_value(document, id, bounds, -1);
    document.set_text(id, next.to_string());
    next
}

/// Append the input's value to a list; empty input is ignored
pub fn create_text_list_element(document: &mut Document, input_id: &str, list_id: &str) -> bool {
    let phrase = document.value(input_id).to_string();
    if phrase.is_empty() {
        return false;
    }
    document.push_item(list_id, phrase);
    true
}

pub fn remove_text_list_element(
    document: &mut Document,
    list_id: &str,
    index: usize,
) -> Option<String> {
    document.remove_item(list_id, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::dashboard_layout;
    use rstest::rstest;

    #[test]
    fn test_transition_table_is_total() {
        for from in [PanelMode::Settings, PanelMode::Content] {
            for action in [PanelAction::ShowSettings, PanelAction::ShowContent] {
                let defined = PANEL_TRANSITIONS
                    .iter()
                    .filter(|(state, event, _)| *state == from && *event == action)
                    .count();
                assert_eq!(defined, 1, "{from:?} x {action:?}");
            }
        }
    }

    #[test]
    fn test_display_content_then_settings() {
        let mut document = dashboard_layout();
        let mut machine = PanelStateMachine::new("assign");

        machine.display_content(&mut document);
        assert_eq!(machine.mode(), PanelMode::Content);
        assert!(document.is_hidden("assignNDays"));
        assert!(!document.is_hidden("assignCurrentSubject"));
        assert_eq!(document.text("assign-accept-button"), "Add Task");
        assert_eq!(document.text("assign-reject-button"), "Skip Item");
        assert_eq!(machine.accept_action(), AcceptAction::AddTask);
        assert_eq!(machine.reject_action(), RejectAction::SkipItem);

        machine.display_settings(&mut document);
        assert!(!document.is_hidden("assignNDays"));
        assert!(document.is_hidden("assignCurrentSubject"));
        assert_eq!(document.text("assign-accept-button"), "Confirm");
        assert_eq!(machine.accept_action(), AcceptAction::ConfirmSettings);
        assert_eq!(machine.reject_action(), RejectAction::ResetSettings);
    }

    #[test]
    fn test_repeated_display_is_idempotent() {
        let mut document = dashboard_layout();
        let mut machine = PanelStateMachine::new("assign");
        machine.display_content(&mut document);
        let snapshot = document.clone();
        machine.display_content(&mut document);
        assert_eq!(document, snapshot);
    }

    #[test]
    fn test_start_reset_cycle() {
        let mut document = dashboard_layout();
        let mut toggle = StartResetToggle::default();

        assert_eq!(toggle.pending_action(), StartResetAction::Start);
        toggle
            .transition(StartResetAction::Start, &mut document)
            .expect("start");
        assert_eq!(document.text("assignStartResetButton"), "↻");
        assert_eq!(document.text("assignStartResetText"), "Click to Restart");
        assert!(!document.has_class("assign-accept-button", DISABLED_CLASS));
        assert!(!document.has_class("assign-reject-button", DISABLED_CLASS));

        toggle
            .transition(StartResetAction::Restart, &mut document)
            .expect("restart");
        assert_eq!(document.text("assignStartResetButton"), "▶");
        assert_eq!(document.text("assignSuspectedActionItems"), "-");
        assert!(document.has_class("assign-accept-button", DISABLED_CLASS));
        assert!(document.has_class("assignStartResetButton", DISABLED_CLASS));

        toggle.enable(&mut document);
        assert!(!document.has_class("assignStartResetButton", DISABLED_CLASS));
    }

    #[test]
    fn test_start_reset_invalid_transition() {
        let mut document = dashboard_layout();
        let mut toggle = StartResetToggle::default();
        let result = toggle.transition(StartResetAction::Restart, &mut document);
        assert_eq!(
            result,
            Err(StateError::InvalidTransition {
                from: StartResetState::Idle,
                action: StartResetAction::Restart,
            })
        );
        assert_eq!(toggle.state(), StartResetState::Idle);
    }

    #[test]
    fn test_toggle_pair_keeps_exactly_one_visible() {
        let mut document = dashboard_layout();
        let pair = TogglePair::ASSIGN_UNREAD_ONLY;
        for clicks in 1..=9 {
            pair.toggle(&mut document);
            let visible = [pair.first, pair.second]
                .iter()
                .filter(|id| !document.is_hidden(id))
                .count();
            assert_eq!(visible, 1);
            assert_eq!(pair.is_selected(&document), clicks % 2 == 1);
        }
    }

    #[rstest]
    #[case(false, false)]
    #[case(true, true)]
    fn test_toggle_pair_repairs_broken_state(#[case] first_hidden: bool, #[case] second_hidden: bool) {
        let mut document = Document::new();
        let pair = TogglePair { first: "a", second: "b" };
        document.set_hidden("a", first_hidden);
        document.set_hidden("b", second_hidden);

        pair.toggle(&mut document);
        assert_ne!(document.is_hidden("a"), document.is_hidden("b"));
    }

    #[rstest]
    #[case("7", "8", "6")]
    #[case("30", "30", "29")]
    #[case("1", "2", "1")]
    #[case("45", "30", "30")]
    #[case("-4", "1", "1")]
    #[case("abc", "1", "1")]
    #[case("", "1", "1")]
    #[case("12 days", "13", "11")]
    #[case("99999999999999999999999", "30", "30")]
    fn test_steppers_stay_in_bounds(#[case] start: &str, #[case] up: &str, #[case] down: &str) {
        let bounds = StepBounds::default();
        let mut document = Document::new();

        document.set_text("n", start);
        increment_element(&mut document, "n", bounds);
        assert_eq!(document.text("n"), up);

        document.set_text("n", start);
        decrement_element(&mut document, "n", bounds);
        assert_eq!(document.text("n"), down);
    }

    #[test]
    fn test_steppers_never_leave_bounds_over_many_steps() {
        let bounds = StepBounds { min: 2, max: 5 };
        let mut document = Document::new();
        document.set_text("n", "-100");
        for step in 0..20 {
            let value = if step % 3 == 0 {
                decrement_element(&mut document, "n", bounds)
            } else {
                increment_element(&mut document, "n", bounds)
            };
            assert!((bounds.min..=bounds.max).contains(&value));
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("  42abc"), Some(42));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x1"), None);
    }

    #[test]
    fn test_phrase_list() {
        let mut document = dashboard_layout();
        assert!(!create_text_list_element(&mut document, "assignListInput", "assignList"));

        document.set_value("assignListInput", "invoice");
        assert!(create_text_list_element(&mut document, "assignListInput", "assignList"));
        document.set_value("assignListInput", "deadline");
        assert!(create_text_list_element(&mut document, "assignListInput", "assignList"));
        assert_eq!(document.items("assignList"), ["invoice", "deadline"]);

        assert_eq!(
            remove_text_list_element(&mut document, "assignList", 0),
            Some("invoice".to_string())
        );
        assert_eq!(document.items("assignList"), ["deadline"]);
    }
}
