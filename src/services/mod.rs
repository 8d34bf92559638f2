// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service layer: API client, location acquisition, visit orchestration.

pub mod api;
pub mod location;
pub mod visits;

pub use api::{ApiError, ScheduleApi};
pub use location::{
    AcquireOptions, LocationAcquirer, LocationError, LocationSensor, SensorError, SensorFault,
};
pub use visits::{VisitError, VisitGateway, VisitService};
