// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validated latitude/longitude pair.
//!
//! Doubles as the clock-in/clock-out request body (the start-visit and
//! end-visit endpoints both take exactly these two fields) and as the
//! location embedded in a schedule.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A latitude/longitude pair in decimal degrees.
///
/// `validate()` checks the coordinate is physically plausible. The range
/// checks alone would wave NaN through (every NaN comparison is false, so
/// NaN is never "out of range"), hence the explicit finiteness validator
/// on each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(custom(function = validate_finite), range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(custom(function = validate_finite), range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

/// Null-island fallback, sent only after the user explicitly acknowledges
/// that their real location is unavailable.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 0.0,
    longitude: 0.0,
};

impl Coordinate {
    /// Both components are finite numbers.
    pub fn is_well_formed(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
