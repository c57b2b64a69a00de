//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.sim.airframe.display_name());

            ui.separator();

            match &state.profile_path {
                Some(path) => {
                    let filename = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unbekannt");
                    let dirty = if state.profile_dirty { " *" } else { "" };
                    ui.label(format!("Profil: {}{}", filename, dirty));
                }
                None => {
                    ui.label("Profil: ungespeichert");
                }
            }

            ui.separator();

            ui.label(format!(
                "Route '{}': {} Punkte",
                state.list_ui.active_route,
                state.point_count()
            ));

            ui.separator();

            if state.upload.is_running() {
                ui.label("Upload läuft...");
            } else {
                match state.upload.last_result {
                    Some(true) => ui.label("Simulator: verbunden"),
                    Some(false) => ui.label("Simulator: nicht erreichbar"),
                    None => ui.label("Simulator: unbekannt"),
                };
            }

            if state.capture.is_active() {
                ui.separator();
                ui.label(format!(
                    "Capture aktiv ({} Punkte)",
                    state.capture.received_points
                ));
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
