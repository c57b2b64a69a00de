//! Datei-Dialoge und der Punkt-Dialog.

use crate::app::state::PointDialogState;
use crate::app::{AppIntent, AppState, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.pending_open_dialog {
        ui_state.pending_open_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("DTC-Profil", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ProfileFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.pending_save_dialog {
        ui_state.pending_save_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("DTC-Profil", &["json"])
            .set_file_name("dtc_profile.json")
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt den Punkt-Dialog (Detail-Ansicht der Listen-Seite).
pub fn show_point_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let capture_active = state.capture.is_active();
    let Some(dialog) = state.list_ui.dialog.as_mut() else {
        return events;
    };

    let title = match dialog.index {
        Some(i) => format!("Punkt {} bearbeiten", i),
        None => "Neuen Punkt anlegen".to_string(),
    };

    let mut open = true;
    egui::Window::new(title)
        .id(egui::Id::new("point_dialog"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            point_dialog_fields(ui, dialog, capture_active, &mut events);
        });

    if !open {
        events.push(AppIntent::PointDialogCancelled);
    }

    events
}

fn point_dialog_fields(
    ui: &mut egui::Ui,
    dialog: &mut PointDialogState,
    capture_active: bool,
    events: &mut Vec<AppIntent>,
) {
    egui::Grid::new("point_dialog_grid")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut dialog.name);
            ui.end_row();

            ui.label("Koordinate:");
            ui.text_edit_singleline(&mut dialog.coord_text);
            ui.end_row();

            ui.label("Höhe (ft):");
            ui.text_edit_singleline(&mut dialog.elevation_text);
            ui.end_row();
        });

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            events.push(AppIntent::PointDialogConfirmed);
        }
        if ui.button("Abbrechen").clicked() {
            events.push(AppIntent::PointDialogCancelled);
        }

        ui.separator();

        let capture_label = if capture_active {
            "Warte auf Simulator..."
        } else {
            "Aus Simulator übernehmen"
        };
        if ui
            .add_enabled(!capture_active, egui::Button::new(capture_label))
            .clicked()
        {
            events.push(AppIntent::PointDialogCaptureRequested);
        }
    });
}
