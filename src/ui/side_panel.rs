// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Context, Ui};
use parking_lot::RwLock;

use crate::editor::generator::{MAX_SPARSITY, MIN_SPARSITY};
use crate::editor::Editor;

/// The left-side panel with paint modes and generation actions.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
    pub show_side_panel: bool,
}

impl SidePanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            show_side_panel: true,
        }
    }

    /// Called each frame, updates the side panel UI if it's visible.
    pub fn update(&mut self, ctx: &Context) {
        if !self.show_side_panel {
            return;
        }

        egui::SidePanel::left("tools_panel")
            .default_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                self.show_modes(ui);
                ui.separator();
                self.show_generation(ui);
                ui.separator();
                self.show_file(ui);
            });
    }

    fn show_modes(&self, ui: &mut Ui) {
        ui.heading("Paint");

        // Copy the mode out so no lock is held while the button writes.
        let (current, modes) = {
            let editor = self.editor.read();
            (editor.current_mode(), editor.available_modes())
        };
        for &mode in modes {
            let label = format!("{} Mode", mode.name());
            if ui.selectable_label(current == mode, label).clicked() {
                self.editor.write().set_mode(mode);
            }
        }
    }

    fn show_generation(&self, ui: &mut Ui) {
        ui.heading("Generate");

        let mut sparsity = self.editor.read().sparsity();
        let slider = egui::Slider::new(&mut sparsity, MIN_SPARSITY..=MAX_SPARSITY)
            .step_by(0.01)
            .text("Sparsity");
        if ui.add(slider).changed() {
            self.editor.write().set_sparsity(sparsity);
        }

        if ui.button("Randomize Trees/Rocks").clicked() {
            self.editor.write().randomize_trees_rocks();
        }
        if ui.button("Generate Walls").clicked() {
            self.editor.write().generate_walls();
        }
        if ui.button("Clear All").clicked() {
            self.editor.write().clear();
        }
    }

    fn show_file(&self, ui: &mut Ui) {
        ui.heading("File");
        if ui.button("Save (S)").clicked() {
            self.editor.write().save_document_wrapper();
        }
        let path = self.editor.read().document().path().display().to_string();
        ui.label(format!("Saves to {}", path));
    }
}
