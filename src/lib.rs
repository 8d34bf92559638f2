// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Careshift: client core for a caregiver visit dashboard.
//!
//! This crate provides the two trust boundaries of the dashboard:
//! structural validation of every payload crossing the scheduling API
//! (`models` + `schema`), and geolocation capture behind a closed error
//! taxonomy (`services::location`). On top of those sit the API client
//! and the clock-in/clock-out orchestration (`services`).
//!
//! All durable state lives server-side; nothing here mutates a record
//! locally, and no unvalidated data ever reaches calling code.

pub mod config;
pub mod models;
pub mod schema;
pub mod services;

pub use config::Config;
pub use schema::SchemaError;
