//! Interactive board: terminal lifecycle, event loop, and layout.

pub mod analytics;
pub mod dashboard;
pub mod tasks;

use crate::app::{App, FetchOutcome, LoadState};
use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tokio::sync::mpsc;

/// Run the board until the user quits. Sets up the terminal, drives the
/// event loop, and restores the terminal on the way out even when the loop
/// errors.
pub async fn run(mut app: App, mut rx: mpsc::UnboundedReceiver<FetchOutcome>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.mount();
    let result = event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(app.tick_interval());

    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key.code);
                    }
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                    _ => {}
                }
            }
            Some(outcome) = rx.recv() => app.apply(outcome),
            _ = tick.tick() => app.tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') => app.refresh_tasks(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => app.activate_selected(),
        _ => {}
    }
}

/// Draw the full page. While the task collection is loading or failed, that
/// state replaces the page, mirroring the panel layout only once loaded.
fn draw(f: &mut Frame, app: &App) {
    match &app.tasks {
        LoadState::Loading => {
            let msg = Paragraph::new("Loading tasks...")
                .block(Block::default().title("Task Manager").borders(Borders::ALL));
            f.render_widget(msg, f.area());
        }
        LoadState::Error(message) => {
            let msg = Paragraph::new(*message)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title("Task Manager").borders(Borders::ALL));
            f.render_widget(msg, f.area());
        }
        LoadState::Loaded(task_list) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Length(9),
                    Constraint::Min(5),
                ])
                .split(f.area());

            let header = Paragraph::new("Task Manager  (q quit, r refresh, enter highlight)")
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(header, rows[0]);

            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);

            dashboard::render(f, task_list, panels[0]);
            analytics::render(f, &app.analytics, panels[1]);
            tasks::render(f, app, task_list, rows[2]);
        }
    }
}
