//! Modaler Dialog für das Mehrfach-Capture.

use crate::app::{AppIntent, AppState};

/// Zeigt den Capture-Dialog, solange ein Mehrfach-Capture läuft.
///
/// Der Kanal kennt keine Timeouts: Abbruch gehört dem Dialog. Jeder
/// Ausgang (Fertig, Schließen) beendet das Abo.
pub fn show_capture_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_capture_dialog {
        return events;
    }

    let mut open = true;
    egui::Window::new("Punkte aus Simulator übernehmen")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!(
                "Markiere Punkte im Simulator — Route '{}'",
                state.list_ui.active_route
            ));
            ui.label(format!(
                "Übernommen: {} Punkte",
                state.capture.received_points
            ));

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Fertig").clicked() {
                    events.push(AppIntent::CaptureDoneRequested);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::CaptureCancelled);
                }
            });
        });

    if !open {
        events.push(AppIntent::CaptureCancelled);
    }

    events
}
