// src/ui/status_bar.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::map::{CellKind, Grid};

/// Per-kind counts of the painted cells, e.g. `Wall 3  Tree 0  Rock 1`.
pub fn count_summary(grid: &Grid) -> String {
    CellKind::all()
        .iter()
        .filter(|&&kind| kind != CellKind::Empty)
        .map(|&kind| format!("{} {}", kind.name(), grid.count(kind)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub struct StatusBar {
    editor: Arc<RwLock<Editor>>,
}

impl StatusBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context, hovered_cell: Option<(usize, usize)>) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let editor = self.editor.read(); // Keep the read lock short.

            let coord_label = match hovered_cell {
                Some((x, y)) => format!("({}, {})", x, y),
                None => String::new(),
            };
            let grid = editor.grid();
            let counts = count_summary(grid);

            ui.horizontal(|ui| {
                ui.label(editor.status_message.as_str());
                ui.label(coord_label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Mode: {}", editor.current_mode().name()));
                    ui.label(counts);
                });
            });
        });
    }
}
