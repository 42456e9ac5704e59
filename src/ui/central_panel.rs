//! Central panel UI module: draws the grid canvas and turns pointer presses
//! and drags into paint calls on the editor.

use std::sync::Arc;

use eframe::egui::{self, Color32, Context, Rect, Sense, Stroke, Vec2};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::map::CellKind;

const OUTLINE: Color32 = Color32::from_rgb(190, 190, 190);

/// Fill color for each cell kind. Display only; the grid stores kinds.
pub fn cell_color(kind: CellKind) -> Color32 {
    match kind {
        CellKind::Empty => Color32::WHITE,
        CellKind::Wall => Color32::BLACK,
        CellKind::Tree => Color32::from_rgb(0, 128, 0),
        CellKind::Rock => Color32::from_rgb(128, 128, 128),
    }
}

/// The canvas. Egui is immediate mode, so every cell is redrawn from the
/// grid each frame and no per-cell handles are kept.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,

    /// The cell under the pointer, if it is over the canvas.
    hovered_cell: Option<(usize, usize)>,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            hovered_cell: None,
        }
    }

    pub fn hovered_cell(&self) -> Option<(usize, usize)> {
        self.hovered_cell
    }

    /// Called each frame to update the central panel.
    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let mapping = self.editor.read().mapping();
                let (response, painter) = ui.allocate_painter(
                    Vec2::splat(mapping.canvas_extent()),
                    Sense::click_and_drag(),
                );
                let origin = response.rect.min;

                // --- Input ---
                self.hovered_cell = response
                    .hover_pos()
                    .and_then(|pos| mapping.pixel_to_cell(pos.x - origin.x, pos.y - origin.y));

                // Only the primary button paints.
                let primary_down = ui.input().pointer.primary_down();
                if response.is_pointer_button_down_on() && primary_down {
                    if let Some(pos) = response.interact_pointer_pos() {
                        // Positions dragged off the canvas are clipped by the mapping.
                        self.editor
                            .write()
                            .paint_pixel(pos.x - origin.x, pos.y - origin.y);
                    }
                }

                // --- Drawing ---
                let editor = self.editor.read();
                let cell_extent = Vec2::splat(mapping.cell_size as f32);
                let outline = Stroke::new(0.5, OUTLINE);
                for ((x, y), kind) in editor.grid().iter() {
                    let (cx, cy) = mapping.cell_origin(x, y);
                    let rect = Rect::from_min_size(origin + Vec2::new(cx, cy), cell_extent);
                    painter.rect(rect, 0.0, cell_color(kind), outline);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use eframe::egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput};

    fn headless_canvas() -> (Context, CentralPanel, Arc<RwLock<Editor>>) {
        let config = EditorConfig {
            grid_size: 20,
            cell_size: 10,
            seed: Some(1),
            ..Default::default()
        };
        let editor = Arc::new(RwLock::new(Editor::new(&config)));
        let panel = CentralPanel::new(editor.clone());
        (Context::default(), panel, editor)
    }

    fn run_frame(ctx: &Context, panel: &mut CentralPanel, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 800.0))),
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| panel.update(ctx));
    }

    /// Moves over the canvas, presses `button` and holds it for a frame.
    fn press_on_canvas(button: PointerButton) -> Arc<RwLock<Editor>> {
        let (ctx, mut panel, editor) = headless_canvas();
        let pos = pos2(100.0, 100.0);
        run_frame(&ctx, &mut panel, vec![Event::PointerMoved(pos)]);
        run_frame(
            &ctx,
            &mut panel,
            vec![Event::PointerButton {
                pos,
                button,
                pressed: true,
                modifiers: Modifiers::default(),
            }],
        );
        run_frame(&ctx, &mut panel, vec![Event::PointerMoved(pos)]);
        editor
    }

    #[test]
    fn test_primary_press_paints() {
        let editor = press_on_canvas(PointerButton::Primary);
        assert_eq!(editor.read().grid().count(CellKind::Wall), 1);
    }

    #[test]
    fn test_secondary_and_middle_press_do_not_paint() {
        for button in [PointerButton::Secondary, PointerButton::Middle] {
            let editor = press_on_canvas(button);
            let editor = editor.read();
            assert_eq!(editor.grid().count(CellKind::Empty), 400);
            assert!(!editor.has_unsaved_changes());
        }
    }

    #[test]
    fn test_each_kind_has_its_own_color() {
        let colors: Vec<Color32> = CellKind::all().iter().map(|&k| cell_color(k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
