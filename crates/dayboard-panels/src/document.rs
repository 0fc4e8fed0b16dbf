/*
[INPUT]:  Element ids, class names, text written by renderers and controllers
[OUTPUT]: In-memory panel document (text, hidden flag, classes, text lists per element)
[POS]:    View model - the surface every panel renders into
[UPDATE]: When adding panels or element ids to the default layout
*/

use std::collections::{BTreeMap, BTreeSet};

/// Class that greys out and deactivates a button
pub const DISABLED_CLASS: &str = "u-button-disable";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    /// Input value, for elements the user types into
    pub value: String,
    pub hidden: bool,
    pub classes: BTreeSet<String>,
    pub items: Vec<String>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Elements addressed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element by id, created empty on first access
    pub fn element_mut(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn text(&self, id: &str) -> &str {
        self.get(id).map(|element| element.text.as_str()).unwrap_or("")
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.element_mut(id).text = text.into();
    }

    pub fn value(&self, id: &str) -> &str {
        self.get(id).map(|element| element.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.element_mut(id).value = value.into();
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.get(id).is_some_and(|element| element.hidden)
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.element_mut(id).hidden = hidden;
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|element| element.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        self.element_mut(id).classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        self.element_mut(id).classes.remove(class);
    }

    /// Un-hide every element carrying `class`
    pub fn show(&mut self, class: &str) {
        self.set_hidden_by_class(class, false);
    }

    /// Hide every element carrying `class`
    pub fn hide(&mut self, class: &str) {
        self.set_hidden_by_class(class, true);
    }

    fn set_hidden_by_class(&mut self, class: &str, hidden: bool) {
        for element in self.elements.values_mut() {
            if element.has_class(class) {
                element.hidden = hidden;
            }
        }
    }

    pub fn items(&self, id: &str) -> &[String] {
        self.get(id).map(|element| element.items.as_slice()).unwrap_or(&[])
    }

    pub fn push_item(&mut self, id: &str, item: impl Into<String>) {
        self.element_mut(id).items.push(item.into());
    }

    pub fn remove_item(&mut self, id: &str, index: usize) -> Option<String> {
        let items = &mut self.element_mut(id).items;
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }
}

/// Panels of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Gmail,
    Tasks,
    Calendar,
    Go,
    PlanMail,
    Assign,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Gmail,
        Panel::Tasks,
        Panel::Calendar,
        Panel::Go,
        Panel::PlanMail,
        Panel::Assign,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Gmail => "Mail",
            Panel::Tasks => "Tasks",
            Panel::Calendar => "Calendar",
            Panel::Go => "Go",
            Panel::PlanMail => "Plan Mail",
            Panel::Assign => "Assign",
        }
    }

    /// Labelled output elements, in display order
    pub fn fields(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Panel::Gmail => &[
                ("Days", "gmailNDays"),
                ("Hours", "gmailMHours"),
                ("Unread (days)", "gmailUnreadEmailsDays"),
                ("Unread (hours)", "gmailUnreadEmailsHours"),
                ("Unread important", "gmailUnreadImportantEmails"),
                ("Top sender", "gmailSender"),
                ("Initial", "gmailSenderInitial"),
            ],
            Panel::Tasks => &[
                ("To complete", "tasksToComplete"),
                ("Due today", "tasksDueToday"),
                ("Completed today", "tasksCompletedToday"),
                ("Overdue", "tasksOverdue"),
            ],
            Panel::Calendar => &[
                ("Day", "calendarDay0"),
                ("  work", "calendarWork0"),
                ("  personal", "calendarPersonal0"),
                ("Day", "calendarDay1"),
                ("  work", "calendarWork1"),
                ("  personal", "calendarPersonal1"),
                ("Day", "calendarDay2"),
                ("  work", "calendarWork2"),
                ("  personal", "calendarPersonal2"),
                ("Day", "calendarDay3"),
                ("  work", "calendarWork3"),
                ("  personal", "calendarPersonal3"),
                ("Day", "calendarDay4"),
                ("  work", "calendarWork4"),
                ("  personal", "calendarPersonal4"),
            ],
            Panel::Go => &[("Route", "directions-container")],
            Panel::PlanMail => &[
                ("Words", "planMailWordCount"),
                ("Reading speed", "planMailReadingSpeed"),
                ("Minutes to read", "planMailMinutesToRead"),
                ("Free slots", "planMailMeetingTimes"),
            ],
            Panel::Assign => &[
                ("Days", "assignNDays"),
                ("Action items", "assignSuspectedActionItems"),
                ("Current", "assignCurrentSubject"),
                ("Control", "assignStartResetText"),
            ],
        }
    }
}

/// The document as the dashboard page ships it, before any data arrives
pub fn dashboard_layout() -> Document {
    let mut document = Document::new();

    for panel in Panel::ALL {
        for (_, id) in panel.fields() {
            document.set_text(id, "-");
        }
    }

    document.set_text("gmailSettingsNDays", "7");
    document.set_text("gmailSettingsMHours", "3");
    document.set_text("gmailNDays", "7");
    document.set_text("gmailMHours", "3");
    document.set_text("directions-container", "");

    // Assign panel: settings and content halves, toggled as a unit.
    for id in ["assignNDays", "assignUnreadOnlyIcon", "assignList"] {
        document.add_class(id, "assign-settings");
    }
    for id in ["assignSuspectedActionItems", "assignCurrentSubject"] {
        document.add_class(id, "assign-content");
    }
    document.set_text("assignNDays", "7");
    document.set_text("assign-accept-button", "Confirm");
    document.set_text("assign-reject-button", "Reset");
    document.add_class("assign-accept-button", DISABLED_CLASS);
    document.add_class("assign-reject-button", DISABLED_CLASS);
    document.set_text("assignStartResetButton", "▶");
    document.set_text("assignStartResetText", "Click to Start");

    // Unread-only toggle: the "selected" icon starts hidden.
    document.add_class("assignUnreadOnlyIcon-selected", "panel__toggle-icon--selected");
    document.set_hidden("assignUnreadOnlyIcon-selected", true);
    document.add_class("assignUnreadOnlyIcon-unselected", "panel__toggle-icon--unselected");
    document.set_hidden("assignUnreadOnlyIcon-unselected", false);

    document.set_value("assignListInput", "");
    document.element_mut("assignList");

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_reads_as_empty() {
        let document = Document::new();
        assert_eq!(document.text("nope"), "");
        assert!(!document.is_hidden("nope"));
        assert!(document.items("nope").is_empty());
    }

    #[test]
    fn test_show_and_hide_by_class() {
        let mut document = Document::new();
        document.add_class("a", "group");
        document.add_class("b", "group");
        document.add_class("c", "other");

        document.hide("group");
        assert!(document.is_hidden("a"));
        assert!(document.is_hidden("b"));
        assert!(!document.is_hidden("c"));

        document.show("group");
        assert!(!document.is_hidden("a"));
        assert!(!document.is_hidden("b"));
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let mut document = Document::new();
        document.push_item("list", "one");
        assert_eq!(document.remove_item("list", 3), None);
        assert_eq!(document.remove_item("list", 0), Some("one".to_string()));
        assert!(document.items("list").is_empty());
    }

    #[test]
    fn test_layout_has_every_panel_field() {
        let document = dashboard_layout();
        for panel in Panel::ALL {
            for (_, id) in panel.fields() {
                assert!(document.contains(id), "missing {id}");
            }
        }
        assert_eq!(document.text("gmailSettingsNDays"), "7");
        assert!(document.has_class("assign-accept-button", DISABLED_CLASS));
    }
}
