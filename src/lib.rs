//! taskboard: a terminal dashboard client for a task management API.
//!
//! The backend owns the data; this crate fetches the task collection and
//! pre-aggregated analytics, performs client-side aggregation, and renders
//! a dashboard, an analytics panel, and a task list, either interactively
//! or as one-shot text.

pub mod analytics;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod types;
pub mod ui;
