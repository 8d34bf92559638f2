// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geolocation acquisition with a closed error taxonomy.
//!
//! Location capture gates clock-in and clock-out, and it is the most
//! failure-prone, permission-gated operation in the app. This module
//! centralizes it: one async call, one success shape, five error kinds.
//! Callers branch on `LocationError`, never on platform fault codes.
//!
//! The platform sensor sits behind the [`LocationSensor`] trait so tests
//! inject a deterministic fake. A sensor reading is treated as untrusted
//! JSON: the platform is not trusted to hand back well-formed numbers, so
//! coordinates are re-validated here even though inbound API payloads get
//! their own validation elsewhere.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use validator::Validate;

use crate::models::Coordinate;

/// Options passed to the platform sensor for a single reading.
#[derive(Debug, Clone, Copy)]
pub struct AcquireOptions {
    /// Ask the platform for its best fix (GPS rather than coarse).
    pub high_accuracy: bool,
    /// Give up if no fix arrives within this window.
    pub timeout: Duration,
    /// The platform may serve a cached fix no older than this.
    pub maximum_age: Duration,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(15_000),
            maximum_age: Duration::from_millis(30_000),
        }
    }
}

/// Fault codes a platform sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorFault {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// Anything else the platform invents.
    Other(i32),
}

/// A failure reported by the platform sensor itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sensor fault {code:?}: {message}")]
pub struct SensorError {
    pub code: SensorFault,
    pub message: String,
}

/// A single-reading location source.
///
/// Implementations return the raw position reading as JSON in the shape
/// `{"coords": {"latitude": .., "longitude": ..}}`; the acquirer owns all
/// validation of that reading.
#[async_trait]
pub trait LocationSensor: Send + Sync {
    async fn current_position(&self, options: &AcquireOptions) -> Result<Value, SensorError>;
}

/// Normalized location failure. One of these, exactly once, per attempt.
///
/// Messages are the fixed user-facing strings shown in alerts; `cause`
/// carries the underlying sensor fault for diagnostics when one exists.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LocationError {
    #[error("Location services are not supported on this device. Please use a device with location support to access this application.")]
    NotSupported,

    #[error("Location access is required for this application. Please enable location permissions in your settings and try again.")]
    PermissionDenied { cause: Option<SensorError> },

    #[error("Location information is unavailable. Please ensure location services are enabled on your device and try again.")]
    PositionUnavailable { cause: Option<SensorError> },

    #[error("Location request timed out. Please check your connection and try again.")]
    Timeout { cause: Option<SensorError> },

    #[error("An unknown error occurred while accessing your location. Please try again.")]
    Unknown { cause: Option<SensorError> },
}

impl LocationError {
    /// The underlying sensor fault, when the platform reported one.
    pub fn cause(&self) -> Option<&SensorError> {
        match self {
            Self::NotSupported => None,
            Self::PermissionDenied { cause }
            | Self::PositionUnavailable { cause }
            | Self::Timeout { cause }
            | Self::Unknown { cause } => cause.as_ref(),
        }
    }
}

/// Obtains one validated coordinate from the platform sensor.
///
/// Resolves exactly once per call and never retries internally; retry is
/// the caller's decision.
pub struct LocationAcquirer {
    sensor: Option<Arc<dyn LocationSensor>>,
    options: AcquireOptions,
}

impl LocationAcquirer {
    pub fn new(sensor: Arc<dyn LocationSensor>) -> Self {
        Self {
            sensor: Some(sensor),
            options: AcquireOptions::default(),
        }
    }

    /// An acquirer on a platform with no location capability at all.
    pub fn unsupported() -> Self {
        Self {
            sensor: None,
            options: AcquireOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AcquireOptions) -> Self {
        self.options = options;
        self
    }

    /// Obtain the current position.
    ///
    /// The acquirer enforces `options.timeout` itself in case the sensor
    /// never settles; a well-behaved sensor times out first and reports
    /// `SensorFault::Timeout`.
    pub async fn acquire(&self) -> Result<Coordinate, LocationError> {
        let Some(sensor) = &self.sensor else {
            tracing::warn!("location requested but no sensor is available");
            return Err(LocationError::NotSupported);
        };

        let reading = tokio::time::timeout(self.options.timeout, sensor.current_position(&self.options))
            .await
            .map_err(|_| {
                tracing::warn!(timeout_ms = self.options.timeout.as_millis() as u64, "sensor did not answer in time");
                LocationError::Timeout { cause: None }
            })?
            .map_err(|fault| {
                tracing::warn!(code = ?fault.code, "sensor reported a fault");
                normalize_fault(fault)
            })?;

        let coordinate = decode_reading(&reading)?;
        tracing::debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "acquired position"
        );
        Ok(coordinate)
    }
}

/// Map a platform fault code onto the closed taxonomy.
fn normalize_fault(fault: SensorError) -> LocationError {
    let cause = Some(fault.clone());
    match fault.code {
        SensorFault::PermissionDenied => LocationError::PermissionDenied { cause },
        SensorFault::PositionUnavailable => LocationError::PositionUnavailable { cause },
        SensorFault::Timeout => LocationError::Timeout { cause },
        SensorFault::Other(_) => LocationError::Unknown { cause },
    }
}

/// Extract and validate the coordinate from a raw sensor reading.
///
/// A reading with missing or non-numeric coordinates is indistinguishable,
/// to the caller, from the platform failing to determine a fix: both map
/// to `PositionUnavailable`.
fn decode_reading(reading: &Value) -> Result<Coordinate, LocationError> {
    let coords = &reading["coords"];
    let (Some(latitude), Some(longitude)) = (coords["latitude"].as_f64(), coords["longitude"].as_f64())
    else {
        tracing::warn!("sensor reading carried malformed coordinates");
        return Err(LocationError::PositionUnavailable { cause: None });
    };

    let coordinate = Coordinate {
        latitude,
        longitude,
    };
    if !coordinate.is_well_formed() || coordinate.validate().is_err() {
        tracing::warn!("sensor reading carried an implausible coordinate");
        return Err(LocationError::PositionUnavailable { cause: None });
    }
    Ok(coordinate)
}
