// src/ui/menu.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::{Editor, PaintMode};

pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    /// Draws the menu. `show_side_panel` is toggled from the View menu.
    pub fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame, show_side_panel: &mut bool) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save").clicked() {
                        self.editor.write().save_document_wrapper();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        // Goes through on_close_event, which asks about unsaved changes.
                        frame.close();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    for &mode in PaintMode::all() {
                        if ui.button(format!("{} Mode", mode.name())).clicked() {
                            self.editor.write().set_mode(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Clear All").clicked() {
                        self.editor.write().clear();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Generate", |ui| {
                    if ui.button("Randomize Trees/Rocks").clicked() {
                        self.editor.write().randomize_trees_rocks();
                        ui.close_menu();
                    }
                    if ui.button("Generate Walls").clicked() {
                        self.editor.write().generate_walls();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.checkbox(show_side_panel, "Tools Panel").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });
    }
}
