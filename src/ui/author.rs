// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! "Filled by" bar. The form stays disabled until an author is submitted.

use crate::models::session::Session;

pub enum AuthorAction {
    None,
    Edit(String),
    Submit,
}

pub fn show(ui: &mut egui::Ui, session: &Session) -> AuthorAction {
    let mut action = AuthorAction::None;
    let locked = session.is_form_enabled();

    ui.horizontal(|ui| {
        ui.label("Filled by:");
        let mut buffer = session.author().to_string();
        let response = ui.add_enabled(
            !locked,
            egui::TextEdit::singleline(&mut buffer).desired_width(240.0),
        );
        if response.changed() {
            action = AuthorAction::Edit(buffer);
        }

        let submitted_with_enter =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let can_submit = !locked && !session.author().trim().is_empty();
        if ui.add_enabled(can_submit, egui::Button::new("Submit")).clicked()
            || (can_submit && submitted_with_enter)
        {
            action = AuthorAction::Submit;
        }

        if !locked {
            ui.label(egui::RichText::new("Enter your name to enable the form").italics().weak());
        }
    });

    action
}
