// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roster file serialization and deserialization.
//!
//! This module handles reading and writing roster documents in YAML and
//! JSON formats, chosen by file extension.

use crate::models::roster::Roster;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export a roster to YAML format.
pub fn export_yaml(roster: &Roster, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(roster)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a roster to JSON format.
pub fn export_json(roster: &Roster, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(roster)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a roster from YAML format.
pub fn import_yaml(path: &Path) -> Result<Roster> {
    let yaml = std::fs::read_to_string(path)?;
    let roster: Roster = serde_yaml::from_str(&yaml)?;
    roster.validate()?;
    Ok(roster)
}

/// Import a roster from JSON format.
pub fn import_json(path: &Path) -> Result<Roster> {
    let json = std::fs::read_to_string(path)?;
    let roster = Roster::from_json_str(&json)?;
    Ok(roster)
}

/// Import a roster, picking the format from the extension.
pub fn import_roster(path: &Path) -> Result<Roster> {
    let extension = path.extension().and_then(|s| s.to_str());
    let result = match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported roster file extension: {:?}", extension),
    };
    result.with_context(|| format!("Failed to read roster from {}", path.display()))
}

/// Export a roster, picking the format from the extension.
pub fn export_roster(roster: &Roster, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    let result = match extension {
        Some("yaml") | Some("yml") => export_yaml(roster, path),
        Some("json") => export_json(roster, path),
        _ => bail!("Unsupported roster file extension: {:?}", extension),
    };
    result.with_context(|| format!("Failed to write roster to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::Project;

    fn roster() -> Roster {
        Roster::new(vec![
            Project::new("Alpha", &["A", "B"]),
            Project::new("Beta", &["C"]),
        ])
    }

    #[test]
    fn test_json_and_yaml_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["roster.json", "roster.yaml", "roster.yml"] {
            let path = dir.path().join(name);
            export_roster(&roster(), &path).unwrap();
            assert_eq!(import_roster(&path).unwrap(), roster());
        }
    }

    #[test]
    fn test_reads_handwritten_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.yml");
        std::fs::write(&path, "projects:\n  - name: Alpha\n    members: [A, B]\n").unwrap();

        let loaded = import_roster(&path).unwrap();
        assert_eq!(loaded.project("Alpha").unwrap().members, vec!["A", "B"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        assert!(export_roster(&roster(), &path).is_err());
        assert!(import_roster(&path).is_err());
    }

    #[test]
    fn test_invalid_roster_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, r#"{"projects":[{"name":"A"},{"name":"A"}]}"#).unwrap();
        assert!(import_roster(&path).is_err());
    }
}
