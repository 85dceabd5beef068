// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list, global remarks list, timer and export controls.

use crate::models::session::Session;
use crate::util::clock::format_clock;

/// Result of sidebar interaction.
pub enum SidebarAction {
    None,
    SelectProject(String),
    SelectMember(String),
    SelectRemarkProject(String),
    StartTimer,
    StopTimer,
    ResetTimer,
    AdjustTimer(i64),
    Export,
}

fn status_icon(complete: bool) -> egui::RichText {
    if complete {
        egui::RichText::new("✔").color(egui::Color32::from_rgb(80, 180, 80))
    } else {
        egui::RichText::new("⏳").color(egui::Color32::from_rgb(220, 160, 40))
    }
}

/// Display the sidebar.
pub fn show(ui: &mut egui::Ui, session: &Session) -> SidebarAction {
    let mut action = SidebarAction::None;
    let enabled = session.is_form_enabled() && !session.is_finished();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Projects");

        if session.roster().is_empty() {
            ui.label(egui::RichText::new("No projects loaded").italics().weak());
        }

        for project in &session.roster().projects {
            let selected = session.selected_project() == Some(project.name.as_str());
            ui.horizontal(|ui| {
                let label = egui::RichText::new(&project.name);
                let label = if selected { label.strong() } else { label };
                if ui.selectable_label(selected, label).clicked() {
                    action = SidebarAction::SelectProject(project.name.clone());
                }
                ui.label(status_icon(session.is_project_complete(&project.name)));
            });

            if selected {
                ui.indent(("members", &project.name), |ui| {
                    for member in &project.members {
                        ui.horizontal(|ui| {
                            let is_current = session.selected_member() == Some(member.as_str());
                            if ui.selectable_label(is_current, member).clicked() {
                                action = SidebarAction::SelectMember(member.clone());
                            }
                            ui.label(status_icon(session.is_member_complete(&project.name, member)));
                        });
                    }
                });
            }
        }

        let (done, total) = session.progress();
        ui.label(egui::RichText::new(format!("{}/{} members done", done, total)).weak());

        ui.separator();
        ui.label(egui::RichText::new("Global remarks").strong());

        for project in &session.roster().projects {
            let selected = session.selected_remark_project() == Some(project.name.as_str());
            ui.horizontal(|ui| {
                if ui.selectable_label(selected, &project.name).clicked() {
                    action = SidebarAction::SelectRemarkProject(project.name.clone());
                }
                ui.label(status_icon(session.is_global_remark_complete(&project.name)));
            });
        }

        ui.separator();

        let countdown = session.countdown();
        ui.vertical_centered(|ui| {
            ui.heading(format!("Timer: {}", format_clock(countdown.remaining())));
        });

        let step = session.timer_step() as i64;
        let step_label = format_clock(session.timer_step());
        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new(format!("+{}", step_label))).clicked() {
                action = SidebarAction::AdjustTimer(step);
            }
            if ui.add_enabled(enabled, egui::Button::new(format!("-{}", step_label))).clicked() {
                action = SidebarAction::AdjustTimer(-step);
            }
            if ui.add_enabled(enabled, egui::Button::new("Reset")).clicked() {
                action = SidebarAction::ResetTimer;
            }
        });
        ui.horizontal(|ui| {
            let running = countdown.is_running();
            if ui.add_enabled(enabled && !running, egui::Button::new("▶ Start")).clicked() {
                action = SidebarAction::StartTimer;
            }
            if ui.add_enabled(enabled && running, egui::Button::new("⏸ Stop")).clicked() {
                action = SidebarAction::StopTimer;
            }
        });

        ui.add_space(12.0);
        let export = egui::Button::new("Copy / Download report").min_size(egui::vec2(ui.available_width(), 0.0));
        if ui.add_enabled(enabled, export).clicked() {
            action = SidebarAction::Export;
        }
    });

    action
}
