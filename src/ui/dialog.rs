// src/ui/dialog.rs

use eframe::egui::{self, Context};

/// The types of dialogs the editor can show.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Asked when closing the window with unsaved changes.
    SaveChanges,
    /// Shown when writing the map failed. Carries the error text.
    SaveFailed(String),
}

/// The possible outcomes when a dialog is closed.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogResult {
    Save,
    DontSave,
    Cancel,
    /// The user acknowledged a notice.
    Dismissed,
}

/// Manages the currently active dialog (if any) and its result.
#[derive(Default)]
pub struct DialogManager {
    active_dialog: Option<Dialog>,
    result: Option<DialogResult>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active_dialog.is_some()
    }

    /// Show a dialog by setting it as active, replacing any current one.
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
        self.result = None;
    }

    pub fn show_save_changes_dialog(&mut self) {
        self.show_dialog(Dialog::SaveChanges);
    }

    pub fn show_save_failed(&mut self, message: impl Into<String>) {
        self.show_dialog(Dialog::SaveFailed(message.into()));
    }

    /// Call this method on every UI frame to render the active dialog (if any).
    /// When the user responds, the method returns `Some(DialogResult)` and clears the active dialog.
    pub fn update(&mut self, ctx: &Context) -> Option<DialogResult> {
        let dialog = self.active_dialog.as_ref()?;
        let result = &mut self.result;
        match dialog {
            Dialog::SaveChanges => {
                modal("Unsaved Changes").show(ctx, |ui| {
                    ui.label("The map has unsaved changes. Save before exiting?");
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            *result = Some(DialogResult::Save);
                        }
                        if ui.button("Don't Save").clicked() {
                            *result = Some(DialogResult::DontSave);
                        }
                        if ui.button("Cancel").clicked() {
                            *result = Some(DialogResult::Cancel);
                        }
                    });
                });
            }
            Dialog::SaveFailed(message) => {
                modal("Save Failed").show(ctx, |ui| {
                    ui.label(message.as_str());
                    ui.label("The map is still open; nothing was lost.");
                    if ui.button("OK").clicked() {
                        *result = Some(DialogResult::Dismissed);
                    }
                });
            }
        }

        let result = self.result.take()?;
        self.active_dialog = None;
        Some(result)
    }
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}
