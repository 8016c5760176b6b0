// src/ui/app.rs

use eframe::egui;

use crate::codec::ImportError;
use crate::config::DungeonConfig;
use crate::engine::{DungeonEngine, StepLevel};
use crate::playback::PlaybackController;
use crate::recorder::{self, Timeline};
use crate::session::{ConfigPatch, SessionAction, SessionStore};
use crate::ui::theme::DungeonTheme;
use crate::ui::{file, grid_view, settings_panel, step_selector};

/// The top-level application: one session store, one engine, one live
/// timeline.
///
/// The draft configuration lives here and is edited freely; committing
/// dispatches it into the store, and the next frame notices the revision
/// change and regenerates. Generation runs synchronously inside that
/// frame, so a pathological configuration will stall the UI for the
/// duration of the engine call.
pub struct DungeoneerApp {
    session: SessionStore,
    engine: Box<dyn DungeonEngine>,
    theme: DungeonTheme,

    draft: DungeonConfig,
    timeline: Timeline,
    playback: PlaybackController,
    seen_revision: u64,

    /// Most recent import failure; cleared by the next successful import.
    import_error: Option<ImportError>,
    show_cell_boundary: bool,
    show_entities: bool,
}

impl DungeoneerApp {
    pub fn new(session: SessionStore, mut engine: Box<dyn DungeonEngine>) -> Self {
        let draft = session.committed();
        let timeline = recorder::record(engine.as_mut(), &draft, StepLevel::Minor);
        let playback = PlaybackController::for_timeline(&timeline);
        let seen_revision = session.revision();

        DungeoneerApp {
            session,
            engine,
            theme: DungeonTheme::default(),
            draft,
            timeline,
            playback,
            seen_revision,
            import_error: None,
            show_cell_boundary: true,
            show_entities: true,
        }
    }

    /// Re-run generation against the committed configuration. The new
    /// timeline replaces the old one wholesale, and playback lands on the
    /// final snapshot.
    fn regenerate(&mut self) {
        let committed = self.session.committed();
        self.timeline = recorder::record(self.engine.as_mut(), &committed, StepLevel::Minor);
        self.playback = PlaybackController::for_timeline(&self.timeline);
        self.seen_revision = self.session.revision();
    }

    fn settings_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings_panel")
            .min_width(330.0)
            .show(ctx, |ui| {
                ui.heading("Dungeon Generator");
                ui.horizontal(|ui| {
                    if ui.button("Import").clicked() {
                        match file::import_settings_dialog() {
                            Ok(config) => {
                                self.draft = config;
                                self.import_error = None;
                            }
                            Err(err) => {
                                file::log_import_error(&err);
                                self.import_error = Some(err);
                            }
                        }
                    }
                    if ui.button("Export").clicked() {
                        if let Err(err) = file::export_settings_dialog(&self.draft) {
                            log::error!("{}", err);
                        }
                    }
                    if ui.button("Reset to Defaults").clicked() {
                        self.draft = DungeonConfig::default();
                        self.session.dispatch(SessionAction::ResetToDefaults);
                    }
                });

                if let Some(err) = &self.import_error {
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                }

                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    settings_panel::show(ui, &mut self.draft);
                });
            });
    }

    fn results_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Generation Results");
                if ui.button("Generate New Dungeon").clicked() {
                    self.session
                        .dispatch(SessionAction::Commit(ConfigPatch::from(&self.draft)));
                }
            });

            if let Some(entry) = self.timeline.get(self.playback.index()) {
                grid_view::show_grid(
                    ui,
                    &entry.snapshot,
                    &self.theme,
                    self.show_cell_boundary,
                    self.show_entities,
                );
            }

            step_selector::show(ui, &self.timeline, &mut self.playback);
            ui.checkbox(&mut self.show_cell_boundary, "Show Grid Cell Borders");
            ui.checkbox(&mut self.show_entities, "Show Entities");

            ui.separator();
            grid_view::show_legend(ui, &self.theme);
        });
    }
}

impl eframe::App for DungeoneerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.revision() != self.seen_revision {
            self.regenerate();
        }

        self.settings_side_panel(ctx);
        self.results_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoomsEngine;

    #[test]
    fn committing_regenerates_and_lands_on_the_final_step() {
        let session = SessionStore::new();
        let mut app = DungeoneerApp::new(session.clone(), Box::new(RoomsEngine::new()));

        assert!(!app.timeline.is_empty());
        assert_eq!(app.playback.index(), app.timeline.last_index());

        app.draft.floor_props.room_density = -3;
        session.dispatch(SessionAction::Commit(ConfigPatch::from(&app.draft)));
        assert_ne!(session.revision(), app.seen_revision);

        app.regenerate();
        assert_eq!(app.seen_revision, session.revision());
        assert!(!app.timeline.is_empty());
        assert_eq!(app.playback.index(), app.timeline.last_index());
    }

    #[test]
    fn draft_edits_do_not_touch_committed_state_until_commit() {
        let session = SessionStore::new();
        let mut app = DungeoneerApp::new(session.clone(), Box::new(RoomsEngine::new()));

        app.draft.floor_props.trap_density = 50;
        assert_eq!(session.committed().floor_props.trap_density, 5);

        session.dispatch(SessionAction::Commit(ConfigPatch::from(&app.draft)));
        assert_eq!(session.committed().floor_props.trap_density, 50);
    }
}
