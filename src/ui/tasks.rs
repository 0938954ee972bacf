//! Task list panel. Every task renders with its status colored and its
//! priority label; the activated task carries a transient highlight.

use crate::app::App;
use crate::types::{STATUS_DONE, STATUS_IN_PROGRESS, STATUS_TODO, Task, priority_label};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Display color for a status. Unknown and absent statuses are gray, they
/// are rendered, never rejected.
pub fn status_color(status: Option<&str>) -> Color {
    match status {
        Some(STATUS_TODO) => Color::Blue,
        Some(STATUS_IN_PROGRESS) => Color::Yellow,
        Some(STATUS_DONE) => Color::Green,
        _ => Color::Gray,
    }
}

pub fn render(f: &mut Frame, app: &App, tasks: &[Task], area: Rect) {
    let highlighted = app.highlighted_id();

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let mut line = Line::from(vec![
                Span::raw(format!(
                    "[{}] ",
                    task.id.map_or_else(|| "-".to_owned(), |id| id.to_string())
                )),
                Span::raw(task.title_label().to_owned()),
                Span::raw("  "),
                Span::styled(
                    task.status_label().to_owned(),
                    Style::default()
                        .fg(status_color(task.status.as_deref()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" | Priority: {}", priority_label(task.priority))),
            ]);
            if highlighted.is_some() && highlighted == task.id {
                line = line.style(Style::default().bg(Color::LightBlue).fg(Color::Black));
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("All Tasks ({})", tasks.len()))
                .borders(Borders::ALL),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}
