// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SEATPLAN - Seating plan editor
//!
//! A cross-platform desktop application for laying out ceremony seating
//! and banquet tables on a hall floor plan and assigning guests to them.

mod app;
mod config;
mod io;
mod models;
mod planner;
mod ui;
mod util;

use anyhow::Result;
use app::SeatPlanApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!(
        "Starting seating plan editor (event: {})",
        config.event_id.as_deref().unwrap_or("none")
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Seating Plan"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "SEATPLAN",
        options,
        Box::new(move |_cc| Ok(Box::new(SeatPlanApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
