// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Task view model and the outbound update request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{parse_list, Fields, SchemaError};

const WIRE_STATUSES: &[&str] = &["pending", "completed", "not_completed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
    NotCompleted,
}

/// A validated care task tied to a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub schedule_id: i64,
    pub description: String,
    pub status: TaskStatus,
    pub reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Alias of `description` kept for display code.
    pub title: String,
}

/// Outcome reported when a caregiver marks a task done or not done.
///
/// The schema deliberately accepts a missing `reason` even for
/// `NotCompleted`; the "reason required" rule is caller-side policy
/// (see `VisitService`), mirroring the server's convention.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskRequest {
    pub status: TaskOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The two terminal outcomes a caregiver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Completed,
    NotCompleted,
}

impl UpdateTaskRequest {
    /// True when this update needs a reason the caller has not supplied.
    pub fn needs_reason(&self) -> bool {
        self.status == TaskOutcome::NotCompleted
            && self.reason.as_deref().map_or(true, |r| r.trim().is_empty())
    }
}

/// Validate one inbound task payload and build its view model.
pub fn parse_task(value: &Value) -> Result<Task, SchemaError> {
    let fields = Fields::object("task", value)?;

    let description = fields.string("description")?;
    let status = match fields.variant("status", WIRE_STATUSES)?.as_str() {
        "pending" => TaskStatus::Pending,
        "completed" => TaskStatus::Completed,
        _ => TaskStatus::NotCompleted,
    };

    Ok(Task {
        id: fields.id("id")?,
        schedule_id: fields.id("schedule_id")?,
        status,
        reason: fields.optional_string("reason")?,
        created_at: fields.timestamp("created_at")?,
        updated_at: fields.timestamp("updated_at")?,
        title: description.clone(),
        description,
    })
}

/// Validate an array of task payloads.
pub fn parse_task_list(value: &Value) -> Result<Vec<Task>, SchemaError> {
    parse_list("task", value, parse_task)
}
