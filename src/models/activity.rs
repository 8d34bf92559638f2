// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity view model and its outbound requests.
//!
//! `status` and `progress` are pure functions of `is_resolved`. They are
//! recomputed on every parse and never stored independently.

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::schema::{parse_list, Fields, SchemaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    Pending,
}

/// A validated care activity, shaped for display.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: i64,
    pub schedule_id: i64,
    pub title: String,
    pub description: String,
    pub is_resolved: bool,
    pub reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Alias of `title` kept for display code.
    pub name: String,
    pub status: ActivityStatus,
    /// 100 when resolved, 0 otherwise.
    pub progress: u8,
    /// Alias of `reason` kept for display code.
    pub notes: Option<String>,
}

/// Outbound request to create an activity on a schedule.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Outbound request to resolve (or un-resolve) an activity.
///
/// `reason` stays optional here; "reason required when unresolved" is
/// enforced by the caller, not the schema (see `VisitService`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateActivityRequest {
    pub is_resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UpdateActivityRequest {
    /// True when this update needs a reason the caller has not supplied.
    pub fn needs_reason(&self) -> bool {
        !self.is_resolved && self.reason.as_deref().map_or(true, |r| r.trim().is_empty())
    }
}

/// Validate one inbound activity payload and build its view model.
pub fn parse_activity(value: &Value) -> Result<Activity, SchemaError> {
    let fields = Fields::object("activity", value)?;

    let title = fields.string("title")?;
    let is_resolved = fields.boolean("is_resolved")?;
    let reason = fields.optional_string("reason")?;

    Ok(Activity {
        id: fields.id("id")?,
        schedule_id: fields.id("schedule_id")?,
        description: fields.string("description")?,
        is_resolved,
        created_at: fields.timestamp("created_at")?,
        updated_at: fields.timestamp("updated_at")?,
        name: title.clone(),
        status: if is_resolved {
            ActivityStatus::Completed
        } else {
            ActivityStatus::Pending
        },
        progress: if is_resolved { 100 } else { 0 },
        notes: reason.clone(),
        reason,
        title,
    })
}

/// Validate an array of activity payloads.
pub fn parse_activity_list(value: &Value) -> Result<Vec<Activity>, SchemaError> {
    parse_list("activity", value, parse_activity)
}
