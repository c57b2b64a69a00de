//! UI-Komponenten: Menü, Punktliste, Karte, Dialoge, Statuszeile.

pub mod capture_dialog;
pub mod dialogs;
pub mod edit_dialogs;
pub mod map_window;
pub mod menu;
pub mod navpoint_panel;
pub mod options_dialog;
pub mod status;

pub use capture_dialog::show_capture_dialog;
pub use dialogs::{handle_file_dialogs, show_point_dialog};
pub use edit_dialogs::{show_cm_dialog, show_radio_dialog};
pub use map_window::show_map_window;
pub use menu::render_menu;
pub use navpoint_panel::render_navpoint_panel;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
