// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status form for the selected member and the global remark form.
//!
//! Widgets edit a scratch copy of each value; changes are reported back
//! as actions so the session stays the single source of truth.

use crate::models::entry::{FormField, Mood, RemarkField};
use crate::models::session::{Selection, Session};

/// Result of form interaction.
pub enum FormAction {
    None,
    Edit(FormField, String),
    ToggleMood(Mood),
    Save,
    Absent,
    EditRemark(RemarkField, String),
    SaveRemark,
}

/// Display the central panel.
pub fn show(ui: &mut egui::Ui, session: &Session) -> FormAction {
    if session.is_finished() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Thanks for your time and have a good day!")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(80, 180, 80)),
            );
        });
        return FormAction::None;
    }

    match session.selection() {
        Selection::Project { project, member: Some(member) } => member_form(ui, session, project, member),
        Selection::GlobalRemark { project } => remark_form(ui, session, project),
        _ => {
            ui.centered_and_justified(|ui| {
                ui.heading("Please select a project and a member to fill the daily form.");
            });
            FormAction::None
        }
    }
}

fn text_field(ui: &mut egui::Ui, enabled: bool, label: &str, value: &str, rows: usize) -> Option<String> {
    ui.label(label);
    let mut buffer = value.to_string();
    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::multiline(&mut buffer)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);
    response.changed().then_some(buffer)
}

fn member_form(ui: &mut egui::Ui, session: &Session, project: &str, member: &str) -> FormAction {
    let mut action = FormAction::None;
    let enabled = session.is_form_enabled();
    let form = session.form();

    ui.heading(format!("👤 {} in {}", member, project));
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for field in FormField::ALL {
            if let Some(value) = text_field(ui, enabled, field.label(), form.field(field), 3) {
                action = FormAction::Edit(field, value);
            }
        }

        ui.label("🔥 Mood:");
        ui.horizontal(|ui| {
            for mood in Mood::ALL {
                let mut checked = form.mood == Some(mood);
                if ui
                    .add_enabled(enabled, egui::Checkbox::new(&mut checked, mood.emoji()))
                    .changed()
                {
                    action = FormAction::ToggleMood(mood);
                }
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("💾 Save")).clicked() {
                action = FormAction::Save;
            }
            if ui.add_enabled(enabled, egui::Button::new("Absent")).clicked() {
                action = FormAction::Absent;
            }
        });
    });

    action
}

fn remark_form(ui: &mut egui::Ui, session: &Session, project: &str) -> FormAction {
    let mut action = FormAction::None;
    let enabled = session.is_form_enabled();
    let remark = session.remark(project).cloned().unwrap_or_default();

    ui.heading(format!("Global remarks for {}", project));
    ui.add_space(8.0);

    if let Some(value) = text_field(ui, enabled, "📝 Remark", remark.field(RemarkField::Remark), 4) {
        action = FormAction::EditRemark(RemarkField::Remark, value);
    }
    if let Some(value) = text_field(ui, enabled, "❌ Absent", remark.field(RemarkField::AbsentNote), 2) {
        action = FormAction::EditRemark(RemarkField::AbsentNote, value);
    }

    if ui.add_enabled(enabled, egui::Button::new("💾 Save")).clicked() {
        action = FormAction::SaveRemark;
    }

    action
}
