// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standup report formatting.
//!
//! Turns the completed session state into the text block that is copied
//! to the clipboard or attached as a file, and decides which of the two
//! delivery paths applies.

use super::entry::{CompletionRecord, FormField, GlobalRemark, Records};
use super::roster::Roster;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Reports longer than this many characters are delivered as a file.
pub const DEFAULT_INLINE_LIMIT: usize = 2000;

/// File name used for attachment delivery.
pub const DEFAULT_FILE_NAME: &str = "daily.yml";

/// How a finished report is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPlan {
    /// Fenced text for the clipboard and an inline webhook message.
    Inline { text: String },
    /// Downloadable file and a webhook file attachment.
    Attachment { file_name: String, content: String },
}

impl ExportPlan {
    /// Pick the delivery path from the report length.
    pub fn choose(report: String, inline_limit: usize, file_name: &str) -> Self {
        if report.chars().count() > inline_limit {
            ExportPlan::Attachment {
                file_name: file_name.to_string(),
                content: report,
            }
        } else {
            ExportPlan::Inline {
                text: format!("```yml\n{}\n```", report),
            }
        }
    }

    /// Payload forwarded to the webhook and delivered locally.
    pub fn payload(&self) -> &str {
        match self {
            ExportPlan::Inline { text } => text,
            ExportPlan::Attachment { content, .. } => content,
        }
    }
}

/// Format the report for every recorded member. Roster order comes
/// first; members and projects recorded before a roster refresh removed
/// them follow, sorted by name, so no saved answer is dropped.
pub fn format_report(
    roster: &Roster,
    records: &Records,
    remarks: &HashMap<String, GlobalRemark>,
    author: &str,
    date: NaiveDate,
) -> String {
    let mut projects: Vec<String> = roster
        .projects
        .iter()
        .filter_map(|project| {
            let entries = records.get(&project.name)?;
            let mut members: Vec<String> = project
                .members
                .iter()
                .filter_map(|member| entries.get(member).map(|r| format_member(member, r)))
                .collect();

            let mut removed: Vec<(&String, &CompletionRecord)> = entries
                .iter()
                .filter(|(member, _)| !project.has_member(member))
                .collect();
            removed.sort_by(|a, b| a.0.cmp(b.0));
            members.extend(removed.into_iter().map(|(member, r)| format_member(member, r)));

            (!members.is_empty()).then(|| format!("- {}:\n{}", project.name, members.join("\n")))
        })
        .collect();

    let mut removed_projects: Vec<&String> = records
        .keys()
        .filter(|name| !roster.contains_project(name))
        .collect();
    removed_projects.sort();
    for name in removed_projects {
        let mut entries: Vec<(&String, &CompletionRecord)> = records[name].iter().collect();
        if entries.is_empty() {
            continue;
        }
        entries.sort_by(|a, b| a.0.cmp(b.0));
        let members: Vec<String> = entries.into_iter().map(|(m, r)| format_member(m, r)).collect();
        projects.push(format!("- {}:\n{}", name, members.join("\n")));
    }

    let mut remark_blocks: Vec<String> = roster
        .projects
        .iter()
        .filter_map(|project| {
            remarks
                .get(&project.name)
                .filter(|r| r.has_content())
                .map(|r| format_remark(&project.name, r))
        })
        .collect();

    let mut removed_remarks: Vec<(&String, &GlobalRemark)> = remarks
        .iter()
        .filter(|(name, r)| !roster.contains_project(name) && r.has_content())
        .collect();
    removed_remarks.sort_by(|a, b| a.0.cmp(b.0));
    remark_blocks.extend(removed_remarks.into_iter().map(|(name, r)| format_remark(name, r)));

    format!(
        "\nDate: {}\nFilled by: {}\n\n{}\n\n\nGlobal remarks:\n{}",
        date.format("%d/%m/%Y"),
        author,
        projects.join("\n\n"),
        remark_blocks.join("\n"),
    )
}

fn format_member(member: &str, record: &CompletionRecord) -> String {
    if record.absent {
        return format!("{}:\n  Absent\n", member);
    }

    let mut text = format!("{}:\n", member);
    for field in FormField::ALL {
        text.push_str(&format!("  {}: {}\n", field.label(), record.form.field(field)));
    }
    let mood = record.form.mood.map(|m| m.emoji()).unwrap_or_default();
    text.push_str(&format!("  🔥 Mood: {}\n", mood));
    text
}

fn format_remark(project: &str, remark: &GlobalRemark) -> String {
    let mut text = format!("- {}:\n", project);
    if !remark.remark.trim().is_empty() {
        text.push_str(&format!("  📝 Remark: {}\n", remark.remark));
    }
    if !remark.absent_note.trim().is_empty() {
        text.push_str(&format!("  ❌ Absent: {}\n", remark.absent_note));
    }
    text
}
