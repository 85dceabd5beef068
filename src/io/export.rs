// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Report export.
//!
//! Local delivery (clipboard or file) and remote delivery (webhook) are
//! independent: a failing webhook never undoes the local copy.

use super::webhook::WebhookClient;
use crate::models::report::ExportPlan;
use anyhow::{Context, Result};
use std::path::Path;
use std::thread::JoinHandle;

/// Write an attachment report to disk.
pub fn write_report_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

/// Forward the plan's payload to the webhook: inline text or a file.
pub fn deliver_remote(client: &WebhookClient, plan: &ExportPlan) -> Result<()> {
    match plan {
        ExportPlan::Inline { text } => client.send_text(text),
        ExportPlan::Attachment { file_name, content } => {
            client.send_file(file_name, content.as_bytes().to_vec())
        }
    }
}

/// Deliver to the webhook on a background thread. The outcome is only
/// logged.
pub fn spawn_remote_delivery(client: WebhookClient, plan: ExportPlan) -> JoinHandle<()> {
    std::thread::spawn(move || match deliver_remote(&client, &plan) {
        Ok(()) => match plan {
            ExportPlan::Inline { .. } => log::info!("Report text sent to webhook"),
            ExportPlan::Attachment { file_name, .. } => {
                log::info!("Report file {} sent to webhook", file_name)
            }
        },
        Err(e) => log::error!("Failed to send report to webhook: {:#}", e),
    })
}
