// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clock-in/clock-out orchestration against fakes.

use std::sync::Arc;

use careshift::models::{TaskOutcome, UpdateActivityRequest, UpdateTaskRequest};
use careshift::services::{LocationAcquirer, SensorError, SensorFault, VisitError, VisitService};

mod common;
use common::{FakeGateway, FakeSensor, GatewayCall};

fn service_with(
    sensor: FakeSensor,
) -> (Arc<FakeGateway>, VisitService<Arc<FakeGateway>>) {
    let gateway = Arc::new(FakeGateway::default());
    let service = VisitService::new(gateway.clone(), LocationAcquirer::new(Arc::new(sensor)));
    (gateway, service)
}

#[tokio::test]
async fn clock_in_sends_the_acquired_coordinate() {
    let (gateway, service) = service_with(FakeSensor::reading(37.427, -122.17));

    let coordinate = service.clock_in(42).await.unwrap();
    assert_eq!(coordinate.latitude, 37.427);

    let calls = gateway.recorded().await;
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        calls[0],
        GatewayCall::StartVisit { schedule_id: 42, location } if location == coordinate
    ));
}

#[tokio::test]
async fn clock_out_sends_the_acquired_coordinate() {
    let (gateway, service) = service_with(FakeSensor::reading(37.0, -122.0));

    service.clock_out(42).await.unwrap();

    let calls = gateway.recorded().await;
    assert!(matches!(calls[0], GatewayCall::EndVisit { schedule_id: 42, .. }));
}

#[tokio::test]
async fn location_failure_aborts_before_the_gateway_is_touched() {
    let (gateway, service) = service_with(FakeSensor::fault(SensorError {
        code: SensorFault::PermissionDenied,
        message: "denied".to_string(),
    }));

    let err = service.clock_in(42).await.unwrap_err();
    assert!(matches!(err, VisitError::Location(_)));
    assert!(gateway.recorded().await.is_empty());
}

#[tokio::test]
async fn unresolved_activity_without_reason_is_refused_client_side() {
    let (gateway, service) = service_with(FakeSensor::reading(0.0, 0.0));

    // The request itself is schema-valid; only this service refuses it.
    let err = service
        .resolve_activity(
            9,
            UpdateActivityRequest {
                is_resolved: false,
                reason: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, VisitError::ReasonRequired));
    assert!(gateway.recorded().await.is_empty());
}

#[tokio::test]
async fn unresolved_activity_with_reason_is_submitted() {
    let (gateway, service) = service_with(FakeSensor::reading(0.0, 0.0));

    let activity = service
        .resolve_activity(
            9,
            UpdateActivityRequest {
                is_resolved: false,
                reason: Some("client unavailable".to_string()),
            },
        )
        .await
        .unwrap();

    assert!(!activity.is_resolved);
    assert_eq!(activity.progress, 0);
    assert!(matches!(
        gateway.recorded().await[0],
        GatewayCall::UpdateActivity { activity_id: 9, is_resolved: false }
    ));
}

#[tokio::test]
async fn not_completed_task_needs_a_reason() {
    let (gateway, service) = service_with(FakeSensor::reading(0.0, 0.0));

    let err = service
        .report_task(
            3,
            UpdateTaskRequest {
                status: TaskOutcome::NotCompleted,
                reason: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, VisitError::ReasonRequired));

    service
        .report_task(
            3,
            UpdateTaskRequest {
                status: TaskOutcome::Completed,
                reason: None,
            },
        )
        .await
        .unwrap();
    assert!(matches!(
        gateway.recorded().await[0],
        GatewayCall::UpdateTask { task_id: 3 }
    ));
}
