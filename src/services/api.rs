// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the scheduling API.
//!
//! Every inbound body passes through the payload validators before it is
//! returned, independent of HTTP status; every outbound request body is
//! validated before it is sent. A non-2xx status is surfaced as
//! `ApiError::Status` with the body text kept for diagnostics.

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::models::{
    parse_activity, parse_activity_list, parse_schedule, parse_schedule_list, parse_stats,
    parse_task_list, Activity, Coordinate, CreateActivityRequest, Schedule, Stats, Task,
    UpdateActivityRequest, UpdateTaskRequest,
};
use crate::schema::SchemaError;

/// Errors surfaced by the API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Scheduling API client.
#[derive(Clone)]
pub struct ScheduleApi {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleApi {
    /// Create a client against the given base URL (e.g. `.../api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    // --- Schedules ---

    pub async fn all_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        let body = self.get_json("/schedules").await?;
        Ok(parse_schedule_list(&body)?)
    }

    pub async fn today_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        let body = self.get_json("/schedules/today").await?;
        Ok(parse_schedule_list(&body)?)
    }

    pub async fn schedule(&self, id: i64) -> Result<Schedule, ApiError> {
        let body = self.get_json(&format!("/schedules/{id}")).await?;
        Ok(parse_schedule(&body)?)
    }

    pub async fn tasks_for_schedule(&self, schedule_id: i64) -> Result<Vec<Task>, ApiError> {
        let body = self
            .get_json(&format!("/schedules/{schedule_id}/tasks"))
            .await?;
        Ok(parse_task_list(&body)?)
    }

    // --- Visits ---

    /// Clock in: transition the schedule to `in_progress`, recording where
    /// the caregiver stood when they did it.
    pub async fn start_visit(
        &self,
        schedule_id: i64,
        location: &Coordinate,
    ) -> Result<(), ApiError> {
        validate_outbound(location)?;
        self.post_json(&format!("/schedules/{schedule_id}/start"), location)
            .await?;
        tracing::info!(schedule_id, "visit started");
        Ok(())
    }

    /// Clock out: transition the schedule to `completed`.
    pub async fn end_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        validate_outbound(location)?;
        self.post_json(&format!("/schedules/{schedule_id}/end"), location)
            .await?;
        tracing::info!(schedule_id, "visit ended");
        Ok(())
    }

    // --- Tasks ---

    pub async fn update_task(
        &self,
        task_id: i64,
        update: &UpdateTaskRequest,
    ) -> Result<(), ApiError> {
        self.post_json(&format!("/tasks/{task_id}/update"), update)
            .await?;
        Ok(())
    }

    // --- Activities ---

    pub async fn activity(&self, id: i64) -> Result<Activity, ApiError> {
        let body = self.get_json(&format!("/activities/{id}")).await?;
        Ok(parse_activity(&body)?)
    }

    pub async fn activities_for_schedule(
        &self,
        schedule_id: i64,
    ) -> Result<Vec<Activity>, ApiError> {
        let body = self
            .get_json(&format!("/schedules/{schedule_id}/activities"))
            .await?;
        Ok(parse_activity_list(&body)?)
    }

    pub async fn create_activity(
        &self,
        schedule_id: i64,
        activity: &CreateActivityRequest,
    ) -> Result<Activity, ApiError> {
        validate_outbound(activity)?;
        let body = self
            .post_json(&format!("/schedules/{schedule_id}/activities"), activity)
            .await?;
        Ok(parse_activity(&body)?)
    }

    pub async fn update_activity(
        &self,
        id: i64,
        update: &UpdateActivityRequest,
    ) -> Result<Activity, ApiError> {
        let body = self
            .put_json(&format!("/activities/{id}"), update)
            .await?;
        Ok(parse_activity(&body)?)
    }

    // --- Stats ---

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let body = self.get_json("/stats").await?;
        Ok(parse_stats(&body)?)
    }

    // --- Transport helpers ---

    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;
        check_status(response).await
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().await?;
        check_status(response).await
    }

    async fn put_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.put(&url).json(body).send().await?;
        check_status(response).await
    }
}

/// Validate an outbound request body before it leaves the client.
fn validate_outbound<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate()
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Surface non-2xx responses as typed errors, otherwise hand back the body.
async fn check_status(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "API request rejected");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}
