// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roster editor window.
//!
//! Lets an admin edit the roster as raw JSON. Invalid JSON is reported
//! inline and the window stays open; a valid roster is handed to the app
//! for persisting.

use crate::models::roster::Roster;

/// Result of editor interaction.
pub enum EditorAction {
    None,
    Save(Roster),
    Close,
}

#[derive(Default)]
pub struct RosterEditor {
    open: bool,
    text: String,
    error: Option<String>,
    saving: bool,
}

impl RosterEditor {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, roster: &Roster) {
        self.open = true;
        self.text = roster.to_json_pretty();
        self.error = None;
        self.saving = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.saving = false;
        self.error = None;
    }

    /// Validate the current text. On failure the message is kept for
    /// display.
    pub fn parse(&mut self) -> Option<Roster> {
        match Roster::from_json_str(&self.text) {
            Ok(roster) => {
                self.error = None;
                Some(roster)
            }
            Err(e) => {
                self.error = Some(format!("Invalid roster, please correct and try again: {}", e));
                None
            }
        }
    }

    pub fn set_saving(&mut self) {
        self.saving = true;
    }

    /// Persisting failed; keep the window open with the message.
    pub fn save_failed(&mut self, message: String) {
        if !self.open {
            log::error!("Roster save failed after the editor closed: {}", message);
            return;
        }
        self.saving = false;
        self.error = Some(message);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[cfg(test)]
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Display the editor window, if open.
    pub fn show(&mut self, ctx: &egui::Context) -> EditorAction {
        if !self.open {
            return EditorAction::None;
        }

        let mut action = EditorAction::None;
        let mut window_open = true;

        egui::Window::new("Edit roster JSON")
            .open(&mut window_open)
            .collapsible(false)
            .default_width(640.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                    ui.add_enabled(
                        !self.saving,
                        egui::TextEdit::multiline(&mut self.text)
                            .code_editor()
                            .desired_rows(20)
                            .desired_width(f32::INFINITY),
                    );
                });

                if let Some(error) = self.error() {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
                }

                ui.horizontal(|ui| {
                    if ui.add_enabled(!self.saving, egui::Button::new("Save")).clicked() {
                        if let Some(roster) = self.parse() {
                            action = EditorAction::Save(roster);
                        }
                    }
                    if ui.add_enabled(!self.saving, egui::Button::new("Cancel")).clicked() {
                        action = EditorAction::Close;
                    }
                    if self.saving {
                        ui.spinner();
                    }
                });
            });

        // The window cannot be dismissed while a save is in flight
        if !window_open && !self.saving {
            action = EditorAction::Close;
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::Project;

    #[test]
    fn test_open_prefills_pretty_json() {
        let roster = Roster::new(vec![Project::new("Alpha", &["A"])]);
        let mut editor = RosterEditor::default();
        editor.open(&roster);

        assert!(editor.is_open());
        assert_eq!(editor.parse(), Some(roster));
        assert_eq!(editor.error(), None);
    }

    #[test]
    fn test_invalid_json_keeps_window_open() {
        let mut editor = RosterEditor::default();
        editor.open(&Roster::default());
        editor.set_text("{ \"projects\": [");

        assert_eq!(editor.parse(), None);
        assert!(editor.is_open());
        assert!(editor.error().unwrap().contains("Invalid roster"));
    }

    #[test]
    fn test_save_failure_keeps_message() {
        let mut editor = RosterEditor::default();
        editor.open(&Roster::default());
        editor.set_saving();
        editor.save_failed("store unreachable".to_string());

        assert!(editor.is_open());
        assert_eq!(editor.error(), Some("store unreachable"));

        editor.close();
        assert!(!editor.is_open());
        assert_eq!(editor.error(), None);
    }

    #[test]
    fn test_late_save_failure_does_not_reopen() {
        let mut editor = RosterEditor::default();
        editor.open(&Roster::default());
        editor.set_saving();
        editor.close();

        editor.save_failed("store unreachable".to_string());
        assert!(!editor.is_open());
        assert_eq!(editor.error(), None);
    }
}
