// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard statistics snapshot.
//!
//! Counts are aggregated server-side on every fetch; the client never
//! derives or caches them.

use serde::Serialize;
use serde_json::Value;

use crate::schema::{Fields, SchemaError};

/// Validated dashboard counters.
///
/// The `*_schedules` fields are display aliases of `upcoming_today` and
/// `completed_today`, kept alongside the wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_schedules: u32,
    pub missed_schedules: u32,
    pub upcoming_today: u32,
    pub completed_today: u32,
    pub upcoming_today_schedules: u32,
    pub completed_today_schedules: u32,
}

/// Validate one inbound stats payload.
pub fn parse_stats(value: &Value) -> Result<Stats, SchemaError> {
    let fields = Fields::object("stats", value)?;

    let upcoming_today = fields.count("upcoming_today")?;
    let completed_today = fields.count("completed_today")?;

    Ok(Stats {
        total_schedules: fields.count("total_schedules")?,
        missed_schedules: fields.count("missed_schedules")?,
        upcoming_today,
        completed_today,
        upcoming_today_schedules: upcoming_today,
        completed_today_schedules: completed_today,
    })
}
