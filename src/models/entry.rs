// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-member answers and per-project remarks.
//!
//! This module defines the status form filled for each member, the
//! finalized completion record, and the project-level global remark.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Single-select mood marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Cool,
    OnFire,
    Dead,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Cool, Mood::OnFire, Mood::Dead];

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Cool => "😎",
            Mood::OnFire => "🔥",
            Mood::Dead => "💀",
        }
    }
}

/// Free-text fields of the status form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Done,
    Doing,
    Todo,
    Blockers,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Done,
        FormField::Todo,
        FormField::Doing,
        FormField::Blockers,
    ];

    /// Label shown in the form and used as the report prefix.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Done => "✅ Done",
            FormField::Doing => "🛠️ Doing",
            FormField::Todo => "📌 To do",
            FormField::Blockers => "🚧 Blockers",
        }
    }
}

/// In-progress answer for the selected member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    pub done: String,
    pub doing: String,
    pub todo: String,
    pub blockers: String,
    pub mood: Option<Mood>,
}

impl EntryForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Done => &self.done,
            FormField::Doing => &self.doing,
            FormField::Todo => &self.todo,
            FormField::Blockers => &self.blockers,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Done => self.done = value,
            FormField::Doing => self.doing = value,
            FormField::Todo => self.todo = value,
            FormField::Blockers => self.blockers = value,
        }
    }

    /// Select `mood`, or clear it when it is already selected.
    pub fn toggle_mood(&mut self, mood: Mood) {
        self.mood = if self.mood == Some(mood) { None } else { Some(mood) };
    }
}

/// Finalized answer for one (project, member) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub form: EntryForm,
    pub completed: bool,
    /// Overrides the form fields, which are left empty.
    pub absent: bool,
}

impl CompletionRecord {
    pub fn saved(form: EntryForm) -> Self {
        Self { form, completed: true, absent: false }
    }

    pub fn absent() -> Self {
        Self { form: EntryForm::default(), completed: true, absent: true }
    }
}

/// Records keyed by project name, then member name.
pub type Records = HashMap<String, HashMap<String, CompletionRecord>>;

/// Text fields of a project's global remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkField {
    Remark,
    AbsentNote,
}

/// Project-level free text, independent of member records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRemark {
    pub remark: String,
    pub absent_note: String,
}

impl GlobalRemark {
    pub fn field(&self, field: RemarkField) -> &str {
        match field {
            RemarkField::Remark => &self.remark,
            RemarkField::AbsentNote => &self.absent_note,
        }
    }

    pub fn set_field(&mut self, field: RemarkField, value: String) {
        match field {
            RemarkField::Remark => self.remark = value,
            RemarkField::AbsentNote => self.absent_note = value,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.remark.trim().is_empty() || !self.absent_note.trim().is_empty()
    }
}
