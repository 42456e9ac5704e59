// src/ui/mod.rs
pub mod central_panel;
pub mod dialog;
pub mod main_window;
pub mod menu;
pub mod side_panel;
pub mod status_bar;

pub use central_panel::CentralPanel;
pub use dialog::{DialogManager, DialogResult};
pub use main_window::{run_main_window, MainWindow};
pub use menu::MenuBar;
pub use side_panel::SidePanel;
pub use status_bar::StatusBar;
