// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule view model: one assigned caregiver visit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{parse_list, Fields, SchemaError};

/// Wire status values accepted from the API.
const WIRE_STATUSES: &[&str] = &["upcoming", "in_progress", "completed", "missed", "cancelled"];

/// Display status of a schedule.
///
/// The wire value `upcoming` is renamed to `scheduled` on inbound records
/// only; no reverse mapping exists because the client never sends a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Scheduled,
    InProgress,
    Completed,
    Missed,
    Cancelled,
}

/// A validated schedule record, shaped for display.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub client_name: String,
    /// Shift window as RFC 3339 strings, exactly as received.
    pub shift_start: String,
    pub shift_end: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: ScheduleStatus,
    pub created_at: String,
    pub updated_at: String,
    /// Aliases of `shift_start`/`shift_end` kept for display code.
    pub start_time: String,
    pub end_time: String,
    /// Placeholders until the API exposes these columns.
    pub caregiver_name: String,
    pub client_address: String,
}

/// Validate one inbound schedule payload and build its view model.
pub fn parse_schedule(value: &Value) -> Result<Schedule, SchemaError> {
    let fields = Fields::object("schedule", value)?;

    let shift_start = fields.timestamp("shift_start")?;
    let shift_end = fields.timestamp("shift_end")?;
    let status = match fields.variant("status", WIRE_STATUSES)?.as_str() {
        "upcoming" => ScheduleStatus::Scheduled,
        "in_progress" => ScheduleStatus::InProgress,
        "completed" => ScheduleStatus::Completed,
        "missed" => ScheduleStatus::Missed,
        _ => ScheduleStatus::Cancelled,
    };

    Ok(Schedule {
        id: fields.id("id")?,
        client_name: fields.string("client_name")?,
        latitude: fields.number("latitude")?,
        longitude: fields.number("longitude")?,
        status,
        created_at: fields.timestamp("created_at")?,
        updated_at: fields.timestamp("updated_at")?,
        start_time: shift_start.clone(),
        end_time: shift_end.clone(),
        caregiver_name: "Caregiver TBD".to_string(),
        client_address: "Address not provided".to_string(),
        shift_start,
        shift_end,
    })
}

/// Validate an array of schedule payloads.
pub fn parse_schedule_list(value: &Value) -> Result<Vec<Schedule>, SchemaError> {
    parse_list("schedule", value, parse_schedule)
}
