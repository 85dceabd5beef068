// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings come from an optional YAML file (`standup.yaml`, or the path
//! in `STANDUP_CONFIG`), then environment overrides. A `.env` file is
//! loaded first so credentials can stay out of the YAML.

use crate::models::report::{DEFAULT_FILE_NAME, DEFAULT_INLINE_LIMIT};
use crate::models::timer::{DEFAULT_DURATION_SECS, DEFAULT_STEP_SECS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "standup.yaml";

/// Where the roster lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterSource {
    File {
        path: PathBuf,
    },
    Http {
        base_url: String,
        #[serde(default = "default_collection")]
        collection: String,
        document: String,
    },
}

fn default_collection() -> String {
    "dailyProjects".to_string()
}

impl Default for RosterSource {
    fn default() -> Self {
        RosterSource::File {
            path: PathBuf::from("roster.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub initial_seconds: u32,
    pub step_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            initial_seconds: DEFAULT_DURATION_SECS,
            step_seconds: DEFAULT_STEP_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Reports longer than this are delivered as a file.
    pub inline_limit: usize,
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            inline_limit: DEFAULT_INLINE_LIMIT,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandupConfig {
    pub title: String,
    pub timer: TimerConfig,
    pub export: ExportConfig,
    pub roster: RosterSource,
    pub webhook_url: Option<String>,
}

impl Default for StandupConfig {
    fn default() -> Self {
        Self {
            title: "Daily".to_string(),
            timer: TimerConfig::default(),
            export: ExportConfig::default(),
            roster: RosterSource::default(),
            webhook_url: None,
        }
    }
}

impl StandupConfig {
    /// Load `.env`, the config file and environment overrides.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let path = std::env::var("STANDUP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let config = if path.exists() {
            Self::from_path(&path)?
        } else {
            log::info!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply `STANDUP_WEBHOOK_URL` and `STANDUP_ROSTER_FILE`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STANDUP_WEBHOOK_URL").filter(|u| !u.trim().is_empty()) {
            self.webhook_url = Some(url);
        }
        if let Some(path) = lookup("STANDUP_ROSTER_FILE").filter(|p| !p.trim().is_empty()) {
            self.roster = RosterSource::File { path: PathBuf::from(path) };
        }
        self
    }
}
