//! HTTP client for the task backend.
//!
//! Three read-only endpoints are consumed; there is no write path, no
//! authentication, and no retry or timeout machinery. HTTP status codes are
//! deliberately not inspected: a rejected response either parses as the
//! expected shape or surfaces as a decode failure, matching how the rest of
//! the system treats all fetch failures uniformly.

use crate::decode::decode_tasks;
use crate::error::{FetchError, FetchResult};
use crate::types::{Task, UserSummary};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Response body of `GET /api/tasks/`. The backend also sends a `count`
/// field; the client recomputes totals itself and ignores it.
#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(default)]
    tasks: Vec<Value>,
}

/// Response body of `GET /api/analytics/stats`. The backend's `total` field
/// is ignored for the same reason.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    stats: BTreeMap<String, i64>,
}

/// Response body of `GET /api/analytics/user-summary`.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summaries: Vec<UserSummary>,
}

/// Both analytics resources, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSnapshot {
    pub stats: BTreeMap<String, i64>,
    pub summaries: Vec<UserSummary>,
}

impl AnalyticsSnapshot {
    /// Total task count as shown in the analytics panel: the client-side
    /// sum of the per-status counts, not a backend field.
    pub fn total_tasks(&self) -> i64 {
        self.stats.values().sum()
    }
}

/// Client for the task backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");
        let body = self.http.get(&url).send().await?.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// Fetch the full task collection and decode the positional records.
    pub async fn fetch_tasks(&self) -> FetchResult<Vec<Task>> {
        let response: TasksResponse = self.get_json("/api/tasks/").await?;
        Ok(decode_tasks(&response.tasks))
    }

    /// Fetch the backend's per-status counts.
    pub async fn fetch_stats(&self) -> FetchResult<BTreeMap<String, i64>> {
        let response: StatsResponse = self.get_json("/api/analytics/stats").await?;
        Ok(response.stats)
    }

    /// Fetch the backend's per-user summaries.
    pub async fn fetch_user_summaries(&self) -> FetchResult<Vec<UserSummary>> {
        let response: SummaryResponse = self.get_json("/api/analytics/user-summary").await?;
        Ok(response.summaries)
    }

    /// Fetch both analytics resources concurrently and resolve once both
    /// settle. The resources have no dependency on each other; the panel
    /// renders only when the pair is complete.
    pub async fn fetch_analytics(&self) -> FetchResult<AnalyticsSnapshot> {
        let (stats, summaries) = tokio::try_join!(self.fetch_stats(), self.fetch_user_summaries())?;
        Ok(AnalyticsSnapshot { stats, summaries })
    }
}

/// Sort user summaries descending by total task count and return the top
/// one. `None` when there are no summaries, in which case the contributor
/// section is not rendered at all.
pub fn top_contributor(summaries: &[UserSummary]) -> Option<&UserSummary> {
    let mut sorted: Vec<&UserSummary> = summaries.iter().collect();
    sorted.sort_by(|a, b| b.total_tasks.cmp(&a.total_tasks));
    sorted.first().copied()
}

// Unit coverage for the pure pieces lives here; the HTTP round-trips are
// exercised against a mock backend in tests/api_integration_tests.rs.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn top_contributor_sorts_descending_by_total() {
        let summaries = vec![
            UserSummary {
                name: "alice".into(),
                total_tasks: 3,
                completed_tasks: 1,
            },
            UserSummary {
                name: "bob".into(),
                total_tasks: 7,
                completed_tasks: 4,
            },
        ];
        assert_eq!(top_contributor(&summaries).map(|u| u.name.as_str()), Some("bob"));
    }

    #[test]
    fn top_contributor_empty_is_none() {
        assert!(top_contributor(&[]).is_none());
    }

    #[test]
    fn snapshot_total_sums_stats_values() {
        let mut stats = BTreeMap::new();
        stats.insert("todo".to_owned(), 2);
        stats.insert("done".to_owned(), 5);
        let snapshot = AnalyticsSnapshot {
            stats,
            summaries: vec![],
        };
        assert_eq!(snapshot.total_tasks(), 7);
    }
}
