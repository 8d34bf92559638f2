// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Careshift dashboard CLI
//!
//! Prints today's assigned visits and the dashboard counters. Useful for
//! poking at a scheduling API deployment without the web UI.

use careshift::services::ScheduleApi;
use careshift::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(base_url = %config.api_base_url, "Fetching dashboard");

    let api = ScheduleApi::new(config.api_base_url.clone());

    let stats = api.stats().await?;
    println!(
        "Today: {} upcoming, {} completed ({} missed of {} total)",
        stats.upcoming_today_schedules,
        stats.completed_today_schedules,
        stats.missed_schedules,
        stats.total_schedules
    );

    let schedules = api.today_schedules().await?;
    if schedules.is_empty() {
        println!("No visits assigned today.");
        return Ok(());
    }

    for schedule in &schedules {
        println!(
            "#{:<4} {:<24} {} - {}  [{:?}]",
            schedule.id, schedule.client_name, schedule.start_time, schedule.end_time,
            schedule.status
        );
    }

    Ok(())
}

/// Initialize logging with an env-controlled filter.
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careshift=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
