//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schliesst den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Wendet geänderte Optionen an und persistiert sie.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let theater_changed = state.options.theater != options.theater;
    state.options = options;

    if theater_changed {
        if let Some(map) = state.map.as_mut() {
            map.pois = crate::core::pois_for(&state.options.theater);
        }
    }

    state.options.save_to_file(&EditorOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück und persistiert.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Öffnet den Funk-Dialog.
pub fn open_radio_dialog(state: &mut AppState) {
    state.ui.show_radio_dialog = true;
}

/// Schliesst den Funk-Dialog.
pub fn close_radio_dialog(state: &mut AppState) {
    state.ui.show_radio_dialog = false;
}

/// Öffnet den Gegenmaßnahmen-Dialog.
pub fn open_cm_dialog(state: &mut AppState) {
    state.ui.show_cm_dialog = true;
}

/// Schliesst den Gegenmaßnahmen-Dialog.
pub fn close_cm_dialog(state: &mut AppState) {
    state.ui.show_cm_dialog = false;
}
