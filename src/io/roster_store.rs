// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roster stores.
//!
//! A roster store reads the roster at startup and replaces it wholesale
//! when the roster editor saves. Two interchangeable backends exist: a
//! local file and a remote JSON document addressed by collection and
//! document id.

use super::serialization;
use crate::config::RosterSource;
use crate::models::roster::Roster;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Read/replace access to the roster document.
pub trait RosterStore: Send + Sync {
    fn fetch(&self) -> Result<Roster>;
    fn persist(&self, roster: &Roster) -> Result<()>;
    /// Human-readable location, for logs and the status line.
    fn describe(&self) -> String;
}

/// Build the store named by the configuration.
pub fn from_source(source: &RosterSource) -> Result<Arc<dyn RosterStore>> {
    let store: Arc<dyn RosterStore> = match source {
        RosterSource::File { path } => Arc::new(FileRosterStore::new(path.clone())),
        RosterSource::Http { base_url, collection, document } => {
            Arc::new(HttpRosterStore::new(base_url, collection, document)?)
        }
    };
    Ok(store)
}

/// Roster kept in a local JSON or YAML file.
pub struct FileRosterStore {
    path: PathBuf,
}

impl FileRosterStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RosterStore for FileRosterStore {
    fn fetch(&self) -> Result<Roster> {
        serialization::import_roster(&self.path)
    }

    fn persist(&self, roster: &Roster) -> Result<()> {
        serialization::export_roster(roster, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Roster kept as a JSON document behind `GET`/`PUT` on
/// `{base_url}/{collection}/{document}`.
pub struct HttpRosterStore {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRosterStore {
    pub fn new(base_url: &str, collection: &str, document: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let url = format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            collection.trim_matches('/'),
            document.trim_matches('/')
        );
        Ok(Self { client, url })
    }

    #[cfg(test)]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RosterStore for HttpRosterStore {
    fn fetch(&self) -> Result<Roster> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Failed to fetch roster from {}", self.url))?;

        if !response.status().is_success() {
            return Err(anyhow!("Roster store returned {} for GET {}", response.status(), self.url));
        }

        let body = response.text().context("Failed to read roster response body")?;
        let roster = Roster::from_json_str(&body)
            .with_context(|| format!("Roster document at {} is invalid", self.url))?;
        Ok(roster)
    }

    fn persist(&self, roster: &Roster) -> Result<()> {
        let response = self
            .client
            .put(&self.url)
            .json(roster)
            .send()
            .with_context(|| format!("Failed to persist roster to {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(anyhow!("Roster store returned {} for PUT {}: {}", status, self.url, error_text));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::Project;
    use mockito::Matcher;

    fn roster() -> Roster {
        Roster::new(vec![Project::new("Alpha", &["A", "B"])])
    }

    #[test]
    fn test_document_url() {
        let store = HttpRosterStore::new("https://docs.example.com/v1/", "/dailyProjects/", "doc42").unwrap();
        assert_eq!(store.url(), "https://docs.example.com/v1/dailyProjects/doc42");
    }

    #[test]
    fn test_http_fetch() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/dailyProjects/doc42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"projects":[{"name":"Alpha","members":["A","B"]}]}"#)
            .create();

        let store = HttpRosterStore::new(&server.url(), "dailyProjects", "doc42").unwrap();
        assert_eq!(store.fetch().unwrap(), roster());
        mock.assert();
    }

    #[test]
    fn test_http_fetch_failure() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/dailyProjects/doc42").with_status(500).create();

        let store = HttpRosterStore::new(&server.url(), "dailyProjects", "doc42").unwrap();
        assert!(store.fetch().is_err());
    }

    #[test]
    fn test_http_fetch_rejects_invalid_document() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/dailyProjects/doc42")
            .with_status(200)
            .with_body("not json")
            .create();

        let store = HttpRosterStore::new(&server.url(), "dailyProjects", "doc42").unwrap();
        assert!(store.fetch().is_err());
    }

    #[test]
    fn test_http_persist() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/dailyProjects/doc42")
            .match_body(Matcher::Json(serde_json::json!({
                "projects": [{ "name": "Alpha", "members": ["A", "B"] }]
            })))
            .with_status(200)
            .create();

        let store = HttpRosterStore::new(&server.url(), "dailyProjects", "doc42").unwrap();
        store.persist(&roster()).unwrap();
        mock.assert();
    }

    #[test]
    fn test_http_persist_failure() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("PUT", "/dailyProjects/doc42")
            .with_status(403)
            .with_body("denied")
            .create();

        let store = HttpRosterStore::new(&server.url(), "dailyProjects", "doc42").unwrap();
        let err = store.persist(&roster()).unwrap_err();
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_file_store_from_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let store = from_source(&RosterSource::File { path: path.clone() }).unwrap();

        assert!(store.fetch().is_err());
        store.persist(&roster()).unwrap();
        assert_eq!(store.fetch().unwrap(), roster());
        assert_eq!(store.describe(), path.display().to_string());
    }
}
