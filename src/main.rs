// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standup - daily standup companion
//!
//! A cross-platform desktop application for running a team standup:
//! fill each member's status against a roster, keep an eye on the
//! countdown, and export the report to the clipboard, a file and a chat
//! webhook.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::StandupApp;
use config::StandupConfig;
use io::webhook::WebhookClient;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StandupConfig::load()?;
    let store = io::roster_store::from_source(&config.roster)?;
    let webhook = config
        .webhook_url
        .as_deref()
        .map(WebhookClient::new)
        .transpose()?;

    log::info!("Roster store: {}", store.describe());
    if webhook.is_none() {
        log::warn!("No webhook URL configured; reports will only be delivered locally");
    }

    // Configure egui options
    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title(&title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(StandupApp::new(config, store, webhook)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
