// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the standup session and coordinates the UI panels,
//! the countdown ticker and the background roster/webhook operations.
//! Panels return actions; `update` dispatches them to the session.

use crate::config::StandupConfig;
use crate::io::export;
use crate::io::roster_store::RosterStore;
use crate::io::webhook::WebhookClient;
use crate::models::report::ExportPlan;
use crate::models::roster::Roster;
use crate::models::session::{ExportSettings, Session};
use crate::models::timer::Countdown;
use crate::ui::author::{self, AuthorAction};
use crate::ui::editor::{EditorAction, RosterEditor};
use crate::ui::form::{self, FormAction};
use crate::ui::sidebar::{self, SidebarAction};
use crate::util::ticker::Ticker;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Main application state.
pub struct StandupApp {
    config: StandupConfig,

    /// The standup run
    session: Session,

    /// Where the roster is read from and persisted to
    store: Arc<dyn RosterStore>,

    /// Chat webhook, when configured
    webhook: Option<WebhookClient>,

    /// Receiver for background roster fetch
    roster_loader: Option<Receiver<Result<Roster, String>>>,

    /// Receiver for background roster persist
    roster_saver: Option<Receiver<Result<(), String>>>,

    editor: RosterEditor,

    /// Live only while the countdown runs
    ticker: Option<Ticker>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last error or notice shown in the top bar
    status: Option<String>,
}

impl StandupApp {
    /// Create the application and start fetching the roster.
    pub fn new(
        config: StandupConfig,
        store: Arc<dyn RosterStore>,
        webhook: Option<WebhookClient>,
    ) -> Self {
        let session = Session::new(Roster::default(), Countdown::new(config.timer.initial_seconds))
            .with_timer_step(config.timer.step_seconds)
            .with_export_settings(ExportSettings {
                inline_limit: config.export.inline_limit,
                file_name: config.export.file_name.clone(),
            });

        let mut app = Self {
            config,
            session,
            store,
            webhook,
            roster_loader: None,
            roster_saver: None,
            editor: RosterEditor::default(),
            ticker: None,
            loading_message: None,
            status: None,
        };
        app.fetch_roster();
        app
    }

    /// Fetch the roster on a background thread.
    fn fetch_roster(&mut self) {
        let (sender, receiver) = channel();
        self.roster_loader = Some(receiver);
        self.loading_message = Some(format!("Loading roster from {}...", self.store.describe()));

        let store = Arc::clone(&self.store);
        std::thread::spawn(move || {
            let result = store.fetch().map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Persist an edited roster on a background thread.
    fn persist_roster(&mut self, roster: Roster) {
        let (sender, receiver) = channel();
        self.roster_saver = Some(receiver);
        self.editor.set_saving();

        let store = Arc::clone(&self.store);
        std::thread::spawn(move || {
            let result = store.persist(&roster).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Apply results of finished background operations.
    fn poll_background(&mut self) {
        if let Some(ref receiver) = self.roster_loader {
            if let Ok(result) = receiver.try_recv() {
                self.roster_loader = None;
                self.loading_message = None;

                match result {
                    Ok(roster) => {
                        log::info!(
                            "Loaded roster: {} projects, {} members",
                            roster.projects.len(),
                            roster.member_count()
                        );
                        self.session.set_roster(roster);
                        self.status = None;
                    }
                    Err(e) => {
                        log::error!("Failed to load roster: {}", e);
                        self.status = Some(format!("Failed to load roster: {}", e));
                    }
                }
            }
        }

        if let Some(ref receiver) = self.roster_saver {
            if let Ok(result) = receiver.try_recv() {
                self.roster_saver = None;

                match result {
                    Ok(()) => {
                        log::info!("Roster saved to {}", self.store.describe());
                        self.editor.close();
                        self.fetch_roster();
                    }
                    Err(e) => {
                        log::error!("Failed to save roster: {}", e);
                        self.editor.save_failed(format!("Failed to save roster: {}", e));
                    }
                }
            }
        }
    }

    /// Keep exactly one ticker alive while the countdown runs.
    fn sync_ticker(&mut self, ctx: &egui::Context) {
        if let Some(ref ticker) = self.ticker {
            for _ in 0..ticker.drain() {
                self.session.tick();
            }
        }

        let running = self.session.countdown().is_running();
        match (running, self.ticker.is_some()) {
            (true, false) => {
                let ctx = ctx.clone();
                self.ticker = Some(Ticker::spawn(TICK_PERIOD, move || ctx.request_repaint()));
            }
            (false, true) => {
                // Dropping joins the ticker thread
                self.ticker = None;
            }
            _ => {}
        }
    }

    /// Finish the standup and deliver the report locally and remotely.
    fn export_report(&mut self, ctx: &egui::Context) {
        let today = chrono::Local::now().date_naive();
        let Some(plan) = self.session.finish(today) else {
            return;
        };

        match &plan {
            ExportPlan::Inline { text } => {
                ctx.copy_text(text.clone());
                log::info!("Report copied to clipboard");
            }
            ExportPlan::Attachment { file_name, content } => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("YAML", &["yml", "yaml"])
                    .set_file_name(file_name)
                    .save_file()
                {
                    if let Err(e) = export::write_report_file(&path, content) {
                        log::error!("{:#}", e);
                        self.status = Some(format!("{:#}", e));
                    }
                } else {
                    log::warn!("Report download cancelled");
                }
            }
        }

        match self.webhook.clone() {
            Some(client) => {
                export::spawn_remote_delivery(client, plan);
            }
            None => log::warn!("No webhook configured, report not forwarded"),
        }
    }

    fn handle_sidebar(&mut self, action: SidebarAction, ctx: &egui::Context) {
        match action {
            SidebarAction::SelectProject(project) => self.session.select_project(&project),
            SidebarAction::SelectMember(member) => self.session.select_member(&member),
            SidebarAction::SelectRemarkProject(project) => {
                self.session.select_global_remark_project(&project)
            }
            SidebarAction::StartTimer => self.session.start_timer(),
            SidebarAction::StopTimer => self.session.stop_timer(),
            SidebarAction::ResetTimer => self.session.reset_timer(),
            SidebarAction::AdjustTimer(delta) => self.session.adjust_timer(delta),
            SidebarAction::Export => self.export_report(ctx),
            SidebarAction::None => {}
        }
    }

    fn handle_form(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => {
                if let Some(effect) = self.session.edit_form(field, value) {
                    self.session.apply(effect);
                }
            }
            FormAction::ToggleMood(mood) => self.session.toggle_mood(mood),
            FormAction::Save => self.session.save(),
            FormAction::Absent => self.session.mark_absent(),
            FormAction::EditRemark(field, value) => self.session.edit_global_remark(field, value),
            FormAction::SaveRemark => self.session.save_global_remark(),
            FormAction::None => {}
        }
    }
}

impl eframe::App for StandupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();
        self.sync_ticker(ctx);

        // Request repaint while waiting on background work
        if self.loading_message.is_some() || self.roster_saver.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Top bar
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.config.title);
                if let Some(ref message) = self.loading_message {
                    ui.spinner();
                    ui.label(egui::RichText::new(message).weak());
                }
                if let Some(ref status) = self.status {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), status);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!self.editor.is_open(), egui::Button::new("Edit members"))
                        .clicked()
                    {
                        self.editor.open(self.session.roster());
                    }
                });
            });
        });

        // Author bar (bottom)
        let author_action = egui::TopBottomPanel::bottom("author")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = author::show(ui, &self.session);
                ui.add_space(4.0);
                action
            })
            .inner;

        match author_action {
            AuthorAction::Edit(name) => self.session.edit_author(name),
            AuthorAction::Submit => self.session.submit_author(),
            AuthorAction::None => {}
        }

        // Sidebar (left side)
        let sidebar_action = egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .show(ctx, |ui| sidebar::show(ui, &self.session))
            .inner;
        self.handle_sidebar(sidebar_action, ctx);

        // Form (center)
        let form_action = egui::CentralPanel::default()
            .show(ctx, |ui| form::show(ui, &self.session))
            .inner;
        self.handle_form(form_action);

        // Roster editor window
        match self.editor.show(ctx) {
            EditorAction::Save(roster) => self.persist_roster(roster),
            EditorAction::Close => {
                self.editor.close();
                self.fetch_roster();
            }
            EditorAction::None => {}
        }

        // A selection or edit may have started or stopped the countdown
        self.sync_ticker(ctx);
    }
}
