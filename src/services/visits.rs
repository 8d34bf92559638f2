// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clock-in/clock-out orchestration.
//!
//! One visit action owns its request lifecycle end to end: acquire a
//! coordinate, then hand it to the gateway. Nothing is shared between
//! concurrent actions and nothing is retried; a failure at any step is
//! terminal for that attempt and surfaces as a single typed error.
//!
//! This service is also where the "reason required when not done" rule
//! lives. The payload schemas deliberately accept a missing reason, so
//! the check has to happen here, before submission.

use async_trait::async_trait;

use crate::models::{Activity, Coordinate, UpdateActivityRequest, UpdateTaskRequest};
use crate::services::api::{ApiError, ScheduleApi};
use crate::services::location::{LocationAcquirer, LocationError};

/// The slice of the scheduling API that visit actions need.
///
/// `ScheduleApi` is the production implementation; tests substitute a fake.
#[async_trait]
pub trait VisitGateway: Send + Sync {
    async fn start_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError>;
    async fn end_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError>;
    async fn update_task(&self, task_id: i64, update: &UpdateTaskRequest) -> Result<(), ApiError>;
    async fn update_activity(
        &self,
        activity_id: i64,
        update: &UpdateActivityRequest,
    ) -> Result<Activity, ApiError>;
}

#[async_trait]
impl VisitGateway for ScheduleApi {
    async fn start_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        ScheduleApi::start_visit(self, schedule_id, location).await
    }

    async fn end_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        ScheduleApi::end_visit(self, schedule_id, location).await
    }

    async fn update_task(&self, task_id: i64, update: &UpdateTaskRequest) -> Result<(), ApiError> {
        ScheduleApi::update_task(self, task_id, update).await
    }

    async fn update_activity(
        &self,
        activity_id: i64,
        update: &UpdateActivityRequest,
    ) -> Result<Activity, ApiError> {
        ScheduleApi::update_activity(self, activity_id, update).await
    }
}

#[async_trait]
impl<G: VisitGateway + ?Sized> VisitGateway for std::sync::Arc<G> {
    async fn start_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        (**self).start_visit(schedule_id, location).await
    }

    async fn end_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        (**self).end_visit(schedule_id, location).await
    }

    async fn update_task(&self, task_id: i64, update: &UpdateTaskRequest) -> Result<(), ApiError> {
        (**self).update_task(task_id, update).await
    }

    async fn update_activity(
        &self,
        activity_id: i64,
        update: &UpdateActivityRequest,
    ) -> Result<Activity, ApiError> {
        (**self).update_activity(activity_id, update).await
    }
}

/// Failure of one visit action.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("A reason is required when marking an item as not completed.")]
    ReasonRequired,
}

/// Drives the caregiver-facing visit actions.
pub struct VisitService<G: VisitGateway> {
    gateway: G,
    acquirer: LocationAcquirer,
}

impl<G: VisitGateway> VisitService<G> {
    pub fn new(gateway: G, acquirer: LocationAcquirer) -> Self {
        Self { gateway, acquirer }
    }

    /// Clock in to a schedule at the caregiver's current position.
    ///
    /// If location acquisition fails, the gateway is never touched.
    pub async fn clock_in(&self, schedule_id: i64) -> Result<Coordinate, VisitError> {
        let location = self.acquirer.acquire().await?;
        self.gateway.start_visit(schedule_id, &location).await?;
        Ok(location)
    }

    /// Clock out of a schedule at the caregiver's current position.
    pub async fn clock_out(&self, schedule_id: i64) -> Result<Coordinate, VisitError> {
        let location = self.acquirer.acquire().await?;
        self.gateway.end_visit(schedule_id, &location).await?;
        Ok(location)
    }

    /// Report a task outcome, enforcing the reason policy before submission.
    pub async fn report_task(
        &self,
        task_id: i64,
        update: UpdateTaskRequest,
    ) -> Result<(), VisitError> {
        if update.needs_reason() {
            return Err(VisitError::ReasonRequired);
        }
        self.gateway.update_task(task_id, &update).await?;
        Ok(())
    }

    /// Resolve or un-resolve an activity, enforcing the reason policy.
    pub async fn resolve_activity(
        &self,
        activity_id: i64,
        update: UpdateActivityRequest,
    ) -> Result<Activity, VisitError> {
        if update.needs_reason() {
            return Err(VisitError::ReasonRequired);
        }
        Ok(self.gateway.update_activity(activity_id, &update).await?)
    }
}
