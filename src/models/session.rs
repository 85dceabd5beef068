// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standup session state machine.
//!
//! A `Session` holds everything that changes during one standup run:
//! the current selection, the form being filled, completed records,
//! global remarks, the countdown and the finished flag. UI code never
//! mutates these fields directly; it calls the named transitions below.

use super::entry::{
    CompletionRecord, EntryForm, FormField, GlobalRemark, Mood, Records, RemarkField,
};
use super::report::{format_report, ExportPlan, DEFAULT_FILE_NAME, DEFAULT_INLINE_LIMIT};
use super::roster::Roster;
use super::timer::Countdown;
use chrono::NaiveDate;
use std::collections::HashMap;

/// What the main form is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// A project, and possibly one of its members.
    Project {
        project: String,
        member: Option<String>,
    },
    /// The global remark of a project.
    GlobalRemark { project: String },
}

/// Side effect requested by a transition, issued by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartTimer,
}

/// Export settings the session needs at finish time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub inline_limit: usize,
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            inline_limit: DEFAULT_INLINE_LIMIT,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// State of one standup run.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    selection: Selection,
    form: EntryForm,
    author: String,
    form_enabled: bool,
    records: Records,
    remarks: HashMap<String, GlobalRemark>,
    remarks_completed: HashMap<String, bool>,
    countdown: Countdown,
    timer_step: u32,
    timer_autostarted: bool,
    export: ExportSettings,
    finished: bool,
}

impl Session {
    pub fn new(roster: Roster, countdown: Countdown) -> Self {
        Self {
            roster,
            selection: Selection::None,
            form: EntryForm::default(),
            author: String::new(),
            form_enabled: false,
            records: Records::new(),
            remarks: HashMap::new(),
            remarks_completed: HashMap::new(),
            countdown,
            timer_step: super::timer::DEFAULT_STEP_SECS,
            timer_autostarted: false,
            export: ExportSettings::default(),
            finished: false,
        }
    }

    pub fn with_timer_step(mut self, step_secs: u32) -> Self {
        self.timer_step = step_secs;
        self
    }

    pub fn with_export_settings(mut self, export: ExportSettings) -> Self {
        self.export = export;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_project(&self) -> Option<&str> {
        match &self.selection {
            Selection::Project { project, .. } => Some(project),
            _ => None,
        }
    }

    pub fn selected_member(&self) -> Option<&str> {
        match &self.selection {
            Selection::Project { member, .. } => member.as_deref(),
            _ => None,
        }
    }

    pub fn selected_remark_project(&self) -> Option<&str> {
        match &self.selection {
            Selection::GlobalRemark { project } => Some(project),
            _ => None,
        }
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_form_enabled(&self) -> bool {
        self.form_enabled
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn record(&self, project: &str, member: &str) -> Option<&CompletionRecord> {
        self.records.get(project)?.get(member)
    }

    pub fn remark(&self, project: &str) -> Option<&GlobalRemark> {
        self.remarks.get(project)
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn timer_step(&self) -> u32 {
        self.timer_step
    }

    /// Whether edits are currently accepted at all.
    fn accepts_edits(&self) -> bool {
        self.form_enabled && !self.finished
    }

    // ------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------

    /// Replace the roster after a (re-)fetch. Records are kept; a
    /// selection pointing outside the new roster is dropped.
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
        let still_valid = match &self.selection {
            Selection::None => true,
            Selection::Project { project, member } => match self.roster.project(project) {
                Some(p) => member.as_deref().map_or(true, |m| p.has_member(m)),
                None => false,
            },
            Selection::GlobalRemark { project } => self.roster.contains_project(project),
        };
        if !still_valid {
            log::info!("Selection no longer in roster, clearing it");
            self.selection = Selection::None;
            self.form = EntryForm::default();
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select_project(&mut self, project: &str) {
        if self.finished || !self.roster.contains_project(project) {
            return;
        }
        self.selection = Selection::Project {
            project: project.to_string(),
            member: None,
        };
        self.form = EntryForm::default();
    }

    /// Select a member of the selected project. The form is kept so a
    /// member can be revisited without losing the text typed so far.
    pub fn select_member(&mut self, member: &str) {
        if self.finished {
            return;
        }
        let Selection::Project { project, member: selected } = &mut self.selection else {
            return;
        };
        if self.roster.project(project).is_some_and(|p| p.has_member(member)) {
            *selected = Some(member.to_string());
        }
    }

    pub fn select_global_remark_project(&mut self, project: &str) {
        if self.finished || !self.roster.contains_project(project) {
            return;
        }
        self.selection = Selection::GlobalRemark {
            project: project.to_string(),
        };
    }

    // ------------------------------------------------------------------
    // Form editing
    // ------------------------------------------------------------------

    /// Edit a field of the current form. The first edit of the "done"
    /// field while the countdown is stopped asks for the timer to start.
    pub fn edit_form(&mut self, field: FormField, value: String) -> Option<Effect> {
        if !self.accepts_edits() || self.selected_member().is_none() {
            return None;
        }
        self.form.set_field(field, value);

        if field != FormField::Done || self.timer_autostarted {
            return None;
        }
        // Only the first edit of "done" may start the timer, even when the
        // timer was already running at that point
        self.timer_autostarted = true;
        (!self.countdown.is_running()).then_some(Effect::StartTimer)
    }

    pub fn toggle_mood(&mut self, mood: Mood) {
        if self.accepts_edits() && self.selected_member().is_some() {
            self.form.toggle_mood(mood);
        }
    }

    pub fn edit_global_remark(&mut self, field: RemarkField, value: String) {
        if !self.accepts_edits() {
            return;
        }
        if let Selection::GlobalRemark { project } = &self.selection {
            self.remarks
                .entry(project.clone())
                .or_default()
                .set_field(field, value);
        }
    }

    /// Issue an effect returned by a transition.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartTimer => self.start_timer(),
        }
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    fn selected_pair(&self) -> Option<(String, String)> {
        match &self.selection {
            Selection::Project { project, member: Some(member) } => {
                Some((project.clone(), member.clone()))
            }
            _ => None,
        }
    }

    /// Record the current form for the selected member, then advance.
    pub fn save(&mut self) {
        if !self.accepts_edits() {
            return;
        }
        let Some((project, member)) = self.selected_pair() else {
            return;
        };
        let record = CompletionRecord::saved(self.form.clone());
        self.write_record(project, member, record);
        self.advance();
    }

    /// Record the selected member as absent, then advance.
    pub fn mark_absent(&mut self) {
        if !self.accepts_edits() {
            return;
        }
        let Some((project, member)) = self.selected_pair() else {
            return;
        };
        self.write_record(project, member, CompletionRecord::absent());
        self.advance();
    }

    fn write_record(&mut self, project: String, member: String, record: CompletionRecord) {
        log::info!(
            "Recorded {} in {}{}",
            member,
            project,
            if record.absent { " (absent)" } else { "" }
        );
        self.records.entry(project).or_default().insert(member, record);
    }

    /// Select the next member of the current project, if there is one.
    fn advance(&mut self) {
        let Selection::Project { project, member: Some(member) } = &mut self.selection else {
            return;
        };
        let Some(next) = self
            .roster
            .project(project)
            .and_then(|p| p.next_member(member))
        else {
            return;
        };
        *member = next.to_string();
        self.form = EntryForm::default();
    }

    /// Cache the remark's completeness and return to the idle view.
    pub fn save_global_remark(&mut self) {
        if !self.accepts_edits() {
            return;
        }
        let Selection::GlobalRemark { project } = &self.selection else {
            return;
        };
        let has_content = self.remarks.get(project).is_some_and(|r| r.has_content());
        log::info!("Saved global remark for {} (content: {})", project, has_content);
        self.remarks_completed.insert(project.clone(), has_content);
        self.selection = Selection::None;
    }

    // ------------------------------------------------------------------
    // Author
    // ------------------------------------------------------------------

    /// Update the author draft. Locked once the author was submitted.
    pub fn edit_author(&mut self, name: String) {
        if !self.form_enabled {
            self.author = name;
        }
    }

    /// Enable the form when the author draft is non-blank. One-way.
    pub fn submit_author(&mut self) {
        if self.form_enabled {
            return;
        }
        let trimmed = self.author.trim();
        if trimmed.is_empty() {
            return;
        }
        self.author = trimmed.to_string();
        self.form_enabled = true;
        log::info!("Standup filled by {}", self.author);
    }

    // ------------------------------------------------------------------
    // Timer controls (disabled until the form is enabled)
    // ------------------------------------------------------------------

    pub fn start_timer(&mut self) {
        if self.accepts_edits() {
            self.countdown.start();
        }
    }

    pub fn stop_timer(&mut self) {
        if self.accepts_edits() {
            self.countdown.stop();
        }
    }

    pub fn reset_timer(&mut self) {
        if self.accepts_edits() {
            self.countdown.reset();
        }
    }

    pub fn adjust_timer(&mut self, delta_secs: i64) {
        if self.accepts_edits() {
            self.countdown.adjust(delta_secs);
        }
    }

    /// One second elapsed.
    pub fn tick(&mut self) {
        if self.countdown.tick() {
            log::info!("Standup countdown reached zero");
        }
    }

    // ------------------------------------------------------------------
    // Finish
    // ------------------------------------------------------------------

    /// Build the report, stop the timer and enter the finished state.
    /// Returns `None` when the form is not enabled or the session is
    /// already finished.
    pub fn finish(&mut self, date: NaiveDate) -> Option<ExportPlan> {
        if !self.accepts_edits() {
            return None;
        }
        let report = format_report(&self.roster, &self.records, &self.remarks, &self.author, date);
        self.countdown.stop();
        self.finished = true;
        let plan = ExportPlan::choose(report, self.export.inline_limit, &self.export.file_name);
        log::info!("Standup finished, export payload is {} characters", plan.payload().chars().count());
        Some(plan)
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    pub fn is_member_complete(&self, project: &str, member: &str) -> bool {
        self.record(project, member).is_some_and(|r| r.completed)
    }

    /// True when every member of the project has a record. Unknown
    /// projects are never complete.
    pub fn is_project_complete(&self, project: &str) -> bool {
        self.roster.project(project).is_some_and(|p| {
            p.members.iter().all(|m| self.is_member_complete(project, m))
        })
    }

    pub fn is_global_remark_complete(&self, project: &str) -> bool {
        self.remarks_completed.get(project).copied().unwrap_or(false)
    }

    /// (completed members, total members) across the roster.
    pub fn progress(&self) -> (usize, usize) {
        let completed = self
            .roster
            .projects
            .iter()
            .flat_map(|p| p.members.iter().map(move |m| (p.name.as_str(), m.as_str())))
            .filter(|(p, m)| self.is_member_complete(p, m))
            .count();
        (completed, self.roster.member_count())
    }
}
