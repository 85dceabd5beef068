// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roster data structures.
//!
//! The roster is the directory of projects and their members that a
//! standup is run against. It is read from a roster store at startup and
//! replaced wholesale by the roster editor.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Problems found while parsing or validating a roster document.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("project #{0} has an empty name")]
    EmptyProjectName(usize),

    #[error("duplicate project: {0}")]
    DuplicateProject(String),

    #[error("project '{0}' has an empty member name")]
    EmptyMemberName(String),

    #[error("duplicate member '{member}' in project '{project}'")]
    DuplicateMember { project: String, member: String },
}

/// A project and its members, in standup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Project {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn has_member(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Member following `member` in roster order, if any. Never wraps.
    pub fn next_member(&self, member: &str) -> Option<&str> {
        let index = self.members.iter().position(|m| m == member)?;
        self.members.get(index + 1).map(String::as_str)
    }
}

/// Complete roster document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Roster {
    #[cfg(test)]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse and validate roster JSON as typed into the editor.
    pub fn from_json_str(text: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(text)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Pretty JSON used to prefill the editor.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// Check name uniqueness and non-empty names.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen_projects = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(RosterError::EmptyProjectName(index + 1));
            }
            if !seen_projects.insert(project.name.as_str()) {
                return Err(RosterError::DuplicateProject(project.name.clone()));
            }

            let mut seen_members = HashSet::new();
            for member in &project.members {
                if member.trim().is_empty() {
                    return Err(RosterError::EmptyMemberName(project.name.clone()));
                }
                if !seen_members.insert(member.as_str()) {
                    return Err(RosterError::DuplicateMember {
                        project: project.name.clone(),
                        member: member.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn contains_project(&self, name: &str) -> bool {
        self.project(name).is_some()
    }

    /// Total number of members across all projects.
    pub fn member_count(&self) -> usize {
        self.projects.iter().map(|p| p.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_json() {
        let roster = Roster::from_json_str(
            r#"{"projects":[{"name":"Alpha","members":["A","B"]},{"name":"Beta","members":[]}]}"#,
        )
        .unwrap();

        assert_eq!(roster.projects.len(), 2);
        assert_eq!(roster.project("Alpha").unwrap().members, vec!["A", "B"]);
        assert_eq!(roster.member_count(), 2);
    }

    #[test]
    fn test_missing_members_defaults_to_empty() {
        let roster = Roster::from_json_str(r#"{"projects":[{"name":"Solo"}]}"#).unwrap();
        assert!(roster.project("Solo").unwrap().members.is_empty());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = Roster::from_json_str(r#"{"projects":[{"name":"Alpha""#).unwrap_err();
        assert!(matches!(err, RosterError::InvalidJson(_)));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let roster = Roster::new(vec![Project::new("Alpha", &[]), Project::new("Alpha", &[])]);
        assert!(matches!(roster.validate(), Err(RosterError::DuplicateProject(p)) if p == "Alpha"));

        let roster = Roster::new(vec![Project::new("Alpha", &["A", "A"])]);
        assert!(matches!(
            roster.validate(),
            Err(RosterError::DuplicateMember { member, .. }) if member == "A"
        ));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let roster = Roster::new(vec![Project::new("  ", &[])]);
        assert!(matches!(roster.validate(), Err(RosterError::EmptyProjectName(1))));

        let roster = Roster::new(vec![Project::new("Alpha", &["A", ""])]);
        assert!(matches!(roster.validate(), Err(RosterError::EmptyMemberName(_))));
    }

    #[test]
    fn test_next_member_does_not_wrap() {
        let project = Project::new("Alpha", &["A", "B", "C"]);
        assert_eq!(project.next_member("A"), Some("B"));
        assert_eq!(project.next_member("B"), Some("C"));
        assert_eq!(project.next_member("C"), None);
        assert_eq!(project.next_member("Z"), None);
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let roster = Roster::new(vec![Project::new("Alpha", &["A"])]);
        let parsed = Roster::from_json_str(&roster.to_json_pretty()).unwrap();
        assert_eq!(parsed, roster);
    }
}
