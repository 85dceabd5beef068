// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Chat webhook delivery.
//!
//! The webhook accepts either a JSON body `{ "content": ... }` or a
//! multipart upload with the report in the `file` field.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    content: &'a str,
}

/// Blocking webhook client. Cheap to clone.
#[derive(Clone)]
pub struct WebhookClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, url: url.into() })
    }

    /// Post the report as an inline message.
    pub fn send_text(&self, content: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&TextMessage { content })
            .send()
            .context("Failed to send text to webhook")?;

        check_status(response)
    }

    /// Post the report as a named file attachment.
    pub fn send_file(&self, file_name: &str, content: Vec<u8>) -> Result<()> {
        let form = reqwest::blocking::multipart::Form::new().part(
            "file",
            reqwest::blocking::multipart::Part::bytes(content)
                .file_name(file_name.to_string())
                .mime_str("text/plain")?,
        );

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .context("Failed to upload file to webhook")?;

        check_status(response)
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<()> {
    if response.status().is_success() {
        return Ok(());
    }
    let status = response.status();
    let error_text = response.text().unwrap_or_default();
    Err(anyhow!("Webhook error: {} - {}", status, error_text))
}
