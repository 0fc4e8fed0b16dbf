/*
[INPUT]:  Current tab, status message, pending text input
[OUTPUT]: Tab bar and hotkey footer
[POS]:    TUI UI chrome around the panels
[UPDATE]: When tabs or hotkeys change
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::tui::app::{AppState, Tab};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Dashboard"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Dashboard => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = match &app.input {
        Some(input) => vec![
            Line::from(vec![
                Span::styled(format!("{}:", input.target.prompt()), key_style),
                Span::raw(format!(" {}_", input.buffer)),
            ]),
            Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save  "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
        ],
        None => vec![
            Line::from(vec![
                Span::styled("[Left/Right]", key_style),
                Span::raw(" Panel  "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Logs  "),
                Span::styled("[+/-]", key_style),
                Span::raw(" Days  "),
                Span::styled("[</>]", key_style),
                Span::raw(" Hours  "),
                Span::styled("[u]", key_style),
                Span::raw(" Unread  "),
                Span::styled("[i/d]", key_style),
                Span::raw(" Phrase  "),
                Span::styled("[Space]", key_style),
                Span::raw(" Start"),
            ]),
            Line::from(vec![
                Span::styled("[Enter/a]", key_style),
                Span::raw(" Accept  "),
                Span::styled("[Bksp/x]", key_style),
                Span::raw(" Reject  "),
                Span::styled("[n]", key_style),
                Span::raw(" Task  "),
                Span::styled("[k]", key_style),
                Span::raw(" API key  "),
                Span::styled("[r/f]", key_style),
                Span::raw(" Refresh  "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit  "),
                Span::raw(format!("Status: {}", app.status_message)),
            ]),
        ],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
