//! Dashboard panel: per-status counts and the integer completion rate,
//! recomputed from the task collection on every draw.

use crate::analytics::{dashboard_completion_rate, status_counts};
use crate::types::Task;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, tasks: &[Task], area: Rect) {
    let counts = status_counts(tasks);

    let lines = vec![
        stat_line("To Do", counts.todo, Color::Blue),
        stat_line("In Progress", counts.in_progress, Color::Yellow),
        stat_line("Done", counts.done, Color::Green),
        Line::from(""),
        Line::from(vec![
            Span::raw("Total Tasks: "),
            Span::styled(
                tasks.len().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Completion Rate: "),
            Span::styled(
                format!("{}%", dashboard_completion_rate(tasks)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel =
        Paragraph::new(lines).block(Block::default().title("Dashboard").borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn stat_line(label: &str, value: usize, color: Color) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(color)),
        Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}
