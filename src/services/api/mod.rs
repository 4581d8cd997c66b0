// Backend REST client
// Thin wrapper over the two calendar endpoints. The backend owns all
// persistence; the client never applies a mutation locally before the
// backend has acknowledged it.

pub mod worker;

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use crate::models::week::WeekData;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Reschedule payload for PUT /api/tasks/{id}/time.
///
/// A drop always persists a one-hour block at the target slot; the task's
/// previous span is not carried over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeChange {
    pub due_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl TimeChange {
    pub fn hour_slot(due_date: NaiveDate, hour: u32) -> Self {
        Self {
            due_date,
            start_time: format!("{:02}:00", hour),
            end_time: format!("{:02}:00", hour + 1),
        }
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the seven day buckets for the week starting at `week_start`
    /// (a Monday).
    pub fn fetch_week(&self, week_start: NaiveDate) -> Result<WeekData, ApiError> {
        let url = format!(
            "{}/api/calendar/week?week_start={}",
            self.base_url,
            week_start.format("%Y-%m-%d")
        );

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json()?)
    }

    /// Persist a reschedule. Any non-2xx response is a failure; nothing is
    /// retried.
    pub fn reschedule(&self, task_id: i64, change: &TimeChange) -> Result<(), ApiError> {
        let url = format!("{}/api/tasks/{}/time", self.base_url, task_id);

        let response = self.client.put(&url).json(change).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
