/*
[INPUT]:  Panel document, focused panel
[OUTPUT]: One bordered block per dashboard panel
[POS]:    TUI UI panel grid
[UPDATE]: When panels gain or lose displayed elements
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::document::{DISABLED_CLASS, Document, Panel};
use crate::state::TogglePair;
use crate::tui::runtime::{border_style, focus_style};

/// Visible `label: value` rows of a panel; hidden elements are skipped
pub fn panel_lines(document: &Document, panel: Panel) -> Vec<String> {
    let mut lines = Vec::new();

    if panel == Panel::Gmail {
        lines.push(format!(
            "Settings: {} days / {} hours",
            document.text("gmailSettingsNDays"),
            document.text("gmailSettingsMHours")
        ));
    }

    for (label, id) in panel.fields() {
        if document.is_hidden(id) {
            continue;
        }
        let value = document.text(id);
        if value.contains('\n') {
            lines.push(format!("{label}:"));
            lines.extend(value.lines().map(|line| format!("  {line}")));
        } else {
            lines.push(format!("{label}: {value}"));
        }
    }

    if panel == Panel::Assign {
        if !document.is_hidden("assignUnreadOnlyIcon") {
            let unread = TogglePair::ASSIGN_UNREAD_ONLY.is_selected(document);
            lines.push(format!("Unread only: {}", if unread { "[x]" } else { "[ ]" }));
        }
        if !document.is_hidden("assignList") {
            let phrases = document.items("assignList");
            lines.push(if phrases.is_empty() {
                "Phrases: (none)".to_string()
            } else {
                format!("Phrases: {}", phrases.join(", "))
            });
        }
        lines.push(format!(
            "{} {}  {}  {}",
            document.text("assignStartResetButton"),
            button_label(document, "assignStartResetButton", "start"),
            button_label(document, "assign-accept-button", document.text("assign-accept-button")),
            button_label(document, "assign-reject-button", document.text("assign-reject-button")),
        ));
    }

    lines
}

fn button_label(document: &Document, id: &str, label: &str) -> String {
    if document.has_class(id, DISABLED_CLASS) {
        format!("({label})")
    } else {
        format!("[{label}]")
    }
}

pub(in crate::tui) fn draw_panels(
    frame: &mut ratatui::Frame,
    area: Rect,
    document: &Document,
    focused: Panel,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in Panel::ALL.chunks(3).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[row_index]);

        for (panel, cell) in row.iter().zip(columns.iter()) {
            draw_panel(frame, *cell, document, *panel, *panel == focused);
        }
    }
}

fn draw_panel(frame: &mut ratatui::Frame, area: Rect, document: &Document, panel: Panel, focused: bool) {
    let text = panel_lines(document, panel)
        .into_iter()
        .map(|line| match line.split_once(": ") {
            Some((label, value)) => Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            None => Line::from(line),
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { focus_style() } else { border_style() })
        .title(panel.title());
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
