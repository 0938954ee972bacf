//! Analytics panel: backend-computed stats and the top contributor.
//!
//! The panel has its own lifecycle independent of the task collection and
//! only renders data once both analytics fetches have settled.

use crate::api::top_contributor;
use crate::app::AnalyticsState;
use crate::format::format_status_name;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, state: &AnalyticsState, area: Rect) {
    let block = Block::default().title("Analytics").borders(Borders::ALL);

    let lines = match state {
        AnalyticsState::Loading => vec![Line::from("Loading analytics...")],
        AnalyticsState::Error(message) => vec![Line::from(Span::styled(
            *message,
            Style::default().fg(Color::Red),
        ))],
        AnalyticsState::Loaded(snapshot) => {
            let mut lines = Vec::new();
            for (status, count) in &snapshot.stats {
                lines.push(Line::from(vec![
                    Span::raw(format!("{}: ", format_status_name(status))),
                    Span::styled(
                        count.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            lines.push(Line::from(vec![
                Span::raw("Total: "),
                Span::styled(
                    snapshot.total_tasks().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(top) = top_contributor(&snapshot.summaries) {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw("Top contributor: "),
                    Span::styled(
                        top.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        " ({} tasks, {} completed)",
                        top.total_tasks, top.completed_tasks
                    )),
                ]));
            }
            lines
        }
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
