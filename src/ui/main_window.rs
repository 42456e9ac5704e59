//! # Main Window Module
//!
//! The editor window, built with eframe/egui. `MainWindow` owns the panels:
//! - A top menu bar for common actions.
//! - A left side panel with paint modes, the sparsity slider and generators.
//! - A central canvas showing the grid.
//! - A bottom status bar.
//!
//! All panels share one `Editor` and only call its actions; none of them
//! touch the grid directly. `run_main_window()` launches the application.

use std::error::Error;
use std::sync::Arc;

use eframe::egui::{self, Context, Key};
use log::info;
use parking_lot::RwLock;

use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::ui::{CentralPanel, DialogManager, DialogResult, MenuBar, SidePanel, StatusBar};

const WINDOW_TITLE: &str = "Wall Map Editor";

pub struct MainWindow {
    editor: Arc<RwLock<Editor>>,
    menu_bar: MenuBar,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
    dialogs: DialogManager,
    /// Set once the user has answered the unsaved-changes prompt.
    allowed_to_close: bool,
}

impl MainWindow {
    pub fn new(editor: Editor) -> Self {
        let editor = Arc::new(RwLock::new(editor));
        Self {
            menu_bar: MenuBar::new(Arc::clone(&editor)),
            side_panel: SidePanel::new(Arc::clone(&editor)),
            central_panel: CentralPanel::new(Arc::clone(&editor)),
            status_bar: StatusBar::new(Arc::clone(&editor)),
            editor,
            dialogs: DialogManager::new(),
            allowed_to_close: false,
        }
    }

    fn title(&self) -> String {
        if self.editor.read().has_unsaved_changes() {
            format!("{} *", WINDOW_TITLE)
        } else {
            WINDOW_TITLE.to_owned()
        }
    }

    /// `S` saves, unless a text field has focus.
    fn handle_shortcuts(&mut self, ctx: &Context) {
        let save_pressed = !ctx.wants_keyboard_input() && ctx.input().key_pressed(Key::S);
        if save_pressed {
            self.editor.write().save_document_wrapper();
        }
    }

    fn handle_dialogs(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let failed = self.editor.write().error_message.take();
        if let Some(message) = failed {
            self.dialogs.show_save_failed(message);
        }

        match self.dialogs.update(ctx) {
            Some(DialogResult::Save) => {
                if self.editor.write().save_document_wrapper() {
                    self.allowed_to_close = true;
                    frame.close();
                }
            }
            Some(DialogResult::DontSave) => {
                self.allowed_to_close = true;
                frame.close();
            }
            Some(DialogResult::Cancel) | Some(DialogResult::Dismissed) | None => {}
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.dialogs.is_open() {
            self.handle_shortcuts(ctx);
        }

        // Side and bottom panels must be laid out before the central panel.
        self.menu_bar
            .update(ctx, frame, &mut self.side_panel.show_side_panel);
        self.side_panel.update(ctx);
        self.status_bar.update(ctx, self.central_panel.hovered_cell());
        self.central_panel.update(ctx);

        self.handle_dialogs(ctx, frame);
        frame.set_window_title(&self.title());
    }

    fn on_close_event(&mut self) -> bool {
        if self.allowed_to_close || !self.editor.read().has_unsaved_changes() {
            return true;
        }
        self.dialogs.show_save_changes_dialog();
        false
    }
}

/// Runs the editor as a standalone egui application.
pub fn run_main_window(config: EditorConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;
    let editor = Editor::new(&config);
    let canvas = editor.mapping().canvas_extent();
    info!(
        "Opening {}x{} grid, {} px per cell",
        config.grid_size, config.grid_size, config.cell_size
    );

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(canvas + 240.0, canvas + 80.0)),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(MainWindow::new(editor))),
    );
    // run_native returns () so we simply return Ok.
    Ok(())
}
