// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models and payload validators.
//!
//! Each submodule pairs a display-shaped record with the `parse_*`
//! function that builds it from an untrusted JSON payload. No record in
//! this module is ever constructed from unvalidated data.

pub mod activity;
pub mod location;
pub mod schedule;
pub mod stats;
pub mod task;

pub use activity::{
    parse_activity, parse_activity_list, Activity, ActivityStatus, CreateActivityRequest,
    UpdateActivityRequest,
};
pub use location::{Coordinate, FALLBACK_COORDINATE};
pub use schedule::{parse_schedule, parse_schedule_list, Schedule, ScheduleStatus};
pub use stats::{parse_stats, Stats};
pub use task::{parse_task, parse_task_list, Task, TaskOutcome, TaskStatus, UpdateTaskRequest};
