//! Root controller state for the interactive board.
//!
//! Owns the lifecycle of the two fetches (task collection, analytics pair)
//! and the transient per-task highlight. Fetches run as spawned tasks and
//! deliver their results over an unbounded channel; when the board is torn
//! down the receiver drops and late results are discarded instead of
//! touching dead state.

use crate::api::{AnalyticsSnapshot, ApiClient};
use crate::config::UiConfig;
use crate::error::FetchResult;
use crate::types::Task;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::error;

/// Lifecycle of the task collection: `Loading` until the first fetch
/// settles, then `Loaded` or `Error`. Only the explicit refresh affordance
/// re-enters `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Task>),
    Error(&'static str),
}

/// Lifecycle of the analytics panel. A failed fetch is logged and surfaces
/// as an error line in the panel; both views share one error contract.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsState {
    Loading,
    Loaded(AnalyticsSnapshot),
    Error(&'static str),
}

/// A settled fetch, delivered from a spawned task back to the controller.
#[derive(Debug)]
pub enum FetchOutcome {
    Tasks(FetchResult<Vec<Task>>),
    Analytics(FetchResult<AnalyticsSnapshot>),
}

/// A live highlight on one task, expiring at a fixed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub task_id: i64,
    pub expires_at: Instant,
}

/// Controller state for one mount of the board.
pub struct App {
    client: ApiClient,
    pub tasks: LoadState,
    pub analytics: AnalyticsState,
    pub selected: usize,
    highlight: Option<Highlight>,
    highlight_ttl: Duration,
    tick_interval: Duration,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    pub should_quit: bool,
}

impl App {
    /// Create the controller and the receiving end of its fetch channel.
    /// Both fetches start in `Loading`; call [`App::mount`] to issue them.
    pub fn new(client: ApiClient, ui: &UiConfig) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            client,
            tasks: LoadState::Loading,
            analytics: AnalyticsState::Loading,
            selected: 0,
            highlight: None,
            highlight_ttl: Duration::from_millis(ui.highlight_ms),
            tick_interval: Duration::from_millis(ui.tick_ms),
            tx,
            should_quit: false,
        };
        (app, rx)
    }

    /// Tick interval for the UI loop.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Issue the initial fetches, one per view.
    pub fn mount(&mut self) {
        self.refresh_tasks();
        self.refresh_analytics();
    }

    /// Re-fetch the task collection. This is the refresh callback the task
    /// list triggers. A refresh from `Loaded` keeps the last collection on
    /// screen until the new one arrives; only the initial mount and a
    /// refresh out of `Error` show the loading page.
    pub fn refresh_tasks(&mut self) {
        if !matches!(self.tasks, LoadState::Loaded(_)) {
            self.tasks = LoadState::Loading;
        }
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            // Send fails only when the board is gone; drop the result then.
            let _ = tx.send(FetchOutcome::Tasks(client.fetch_tasks().await));
        });
    }

    /// Re-fetch both analytics resources together.
    pub fn refresh_analytics(&mut self) {
        self.analytics = AnalyticsState::Loading;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(FetchOutcome::Analytics(client.fetch_analytics().await));
        });
    }

    /// Apply a settled fetch to the controller state.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Tasks(Ok(tasks)) => {
                if !tasks.is_empty() {
                    self.selected = self.selected.min(tasks.len() - 1);
                } else {
                    self.selected = 0;
                }
                self.tasks = LoadState::Loaded(tasks);
            }
            FetchOutcome::Tasks(Err(err)) => {
                error!(%err, "task fetch failed");
                self.tasks = LoadState::Error(err.user_message());
            }
            FetchOutcome::Analytics(Ok(snapshot)) => {
                self.analytics = AnalyticsState::Loaded(snapshot);
            }
            FetchOutcome::Analytics(Err(err)) => {
                error!(%err, "analytics fetch failed");
                self.analytics = AnalyticsState::Error(err.user_message());
            }
        }
    }

    /// The loaded task collection, empty until the fetch settles.
    pub fn loaded_tasks(&self) -> &[Task] {
        match &self.tasks {
            LoadState::Loaded(tasks) => tasks,
            _ => &[],
        }
    }

    /// Move the selection down one row.
    pub fn select_next(&mut self) {
        let len = self.loaded_tasks().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Move the selection up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlight the selected task for the configured duration.
    pub fn activate_selected(&mut self) {
        if let Some(id) = self.loaded_tasks().get(self.selected).and_then(|t| t.id) {
            self.highlight = Some(Highlight {
                task_id: id,
                expires_at: Instant::now() + self.highlight_ttl,
            });
        }
    }

    /// Id of the currently highlighted task, if the highlight is live.
    pub fn highlighted_id(&self) -> Option<i64> {
        self.highlight
            .filter(|h| h.expires_at > Instant::now())
            .map(|h| h.task_id)
    }

    /// Advance timers: drop the highlight once its deadline passes.
    pub fn tick(&mut self) {
        if let Some(highlight) = self.highlight {
            if highlight.expires_at <= Instant::now() {
                self.highlight = None;
            }
        }
    }

    /// Request loop exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
