// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deterministic fakes shared across integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use careshift::models::{Activity, ActivityStatus, Coordinate, UpdateActivityRequest, UpdateTaskRequest};
use careshift::services::{AcquireOptions, ApiError, LocationSensor, SensorError, VisitGateway};

/// What the fake sensor should do when asked for a position.
pub enum SensorScript {
    Reading(Value),
    Fault(SensorError),
    /// Never answer; the acquirer's own timeout has to fire.
    Hang,
}

/// A scripted location sensor, standing in for the platform capability.
pub struct FakeSensor {
    pub script: SensorScript,
    pub calls: AtomicU64,
}

impl FakeSensor {
    pub fn reading(latitude: f64, longitude: f64) -> Self {
        Self {
            script: SensorScript::Reading(json!({
                "coords": { "latitude": latitude, "longitude": longitude }
            })),
            calls: AtomicU64::new(0),
        }
    }

    pub fn raw(reading: Value) -> Self {
        Self {
            script: SensorScript::Reading(reading),
            calls: AtomicU64::new(0),
        }
    }

    pub fn fault(error: SensorError) -> Self {
        Self {
            script: SensorScript::Fault(error),
            calls: AtomicU64::new(0),
        }
    }

    pub fn hanging() -> Self {
        Self {
            script: SensorScript::Hang,
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LocationSensor for FakeSensor {
    async fn current_position(&self, _options: &AcquireOptions) -> Result<Value, SensorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.script {
            SensorScript::Reading(value) => Ok(value.clone()),
            SensorScript::Fault(error) => Err(error.clone()),
            SensorScript::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hanging sensor answered")
            }
        }
    }
}

/// One call recorded by the fake gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    StartVisit { schedule_id: i64, location: Coordinate },
    EndVisit { schedule_id: i64, location: Coordinate },
    UpdateTask { task_id: i64 },
    UpdateActivity { activity_id: i64, is_resolved: bool },
}

/// Records visit-gateway traffic instead of hitting the network.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<GatewayCall>>,
}

impl FakeGateway {
    pub async fn recorded(&self) -> Vec<GatewayCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl VisitGateway for FakeGateway {
    async fn start_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        self.calls.lock().await.push(GatewayCall::StartVisit {
            schedule_id,
            location: *location,
        });
        Ok(())
    }

    async fn end_visit(&self, schedule_id: i64, location: &Coordinate) -> Result<(), ApiError> {
        self.calls.lock().await.push(GatewayCall::EndVisit {
            schedule_id,
            location: *location,
        });
        Ok(())
    }

    async fn update_task(&self, task_id: i64, _update: &UpdateTaskRequest) -> Result<(), ApiError> {
        self.calls
            .lock()
            .await
            .push(GatewayCall::UpdateTask { task_id });
        Ok(())
    }

    async fn update_activity(
        &self,
        activity_id: i64,
        update: &UpdateActivityRequest,
    ) -> Result<Activity, ApiError> {
        self.calls.lock().await.push(GatewayCall::UpdateActivity {
            activity_id,
            is_resolved: update.is_resolved,
        });
        Ok(Activity {
            id: activity_id,
            schedule_id: 1,
            title: "Recorded activity".to_string(),
            description: "Recorded by FakeGateway".to_string(),
            is_resolved: update.is_resolved,
            reason: update.reason.clone(),
            created_at: "2025-03-01T08:00:00Z".to_string(),
            updated_at: "2025-03-01T08:00:00Z".to_string(),
            name: "Recorded activity".to_string(),
            status: if update.is_resolved {
                ActivityStatus::Completed
            } else {
                ActivityStatus::Pending
            },
            progress: if update.is_resolved { 100 } else { 0 },
            notes: update.reason.clone(),
        })
    }
}
