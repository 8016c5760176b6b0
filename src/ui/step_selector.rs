// src/ui/step_selector.rs

use eframe::egui::{self, Button};

use crate::playback::PlaybackController;
use crate::recorder::Timeline;

/// Dropdown plus step buttons for walking the generation timeline.
/// The arrow buttons disable themselves at the ends; selecting an entry
/// in the dropdown jumps straight to it.
pub fn show(ui: &mut egui::Ui, timeline: &Timeline, playback: &mut PlaybackController) {
    ui.horizontal(|ui| {
        ui.label("Current Generation Step");

        let current = playback.index();
        let selected_text = timeline
            .get(current)
            .map(|entry| format!("{}. {}", current + 1, entry.step.describe()))
            .unwrap_or_default();

        egui::ComboBox::from_id_source("current_generation_step")
            .width(280.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (i, entry) in timeline.entries().iter().enumerate() {
                    let label = format!("{}. {}", i + 1, entry.step.describe());
                    if ui.selectable_label(i == current, label).clicked() {
                        playback.set_index(i as isize);
                    }
                }
            });

        if ui
            .add_enabled(!playback.at_start(), Button::new("←"))
            .clicked()
        {
            playback.step_backward();
        }
        if ui
            .add_enabled(!playback.at_end(), Button::new("→"))
            .clicked()
        {
            playback.step_forward();
        }
    });
}
