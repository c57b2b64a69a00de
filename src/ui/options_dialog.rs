//! Options-Dialog mit sofortiger Anwendung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_options_dialog {
        return events;
    }

    let mut options = state.options.clone();
    let mut changed = false;
    let mut open = true;

    egui::Window::new("Optionen")
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.heading("Simulator");
            egui::Grid::new("options_sim").num_columns(2).show(ui, |ui| {
                ui.label("Script-Host:");
                changed |= ui.text_edit_singleline(&mut options.script_host).changed();
                ui.end_row();

                ui.label("Script-Port (TCP):");
                changed |= ui
                    .add(egui::DragValue::new(&mut options.script_port).range(1024..=65535))
                    .changed();
                ui.end_row();

                ui.label("Capture-Port (UDP):");
                changed |= ui
                    .add(egui::DragValue::new(&mut options.capture_port).range(1024..=65535))
                    .changed();
                ui.end_row();

                ui.label("Delay-Multiplikator:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut options.delay_multiplier)
                            .speed(0.05)
                            .range(0.1..=10.0),
                    )
                    .changed();
                ui.end_row();
            });

            ui.separator();
            ui.heading("Routen & Capture");
            egui::Grid::new("options_route").num_columns(2).show(ui, |ui| {
                ui.label("Startnummer:");
                changed |= ui
                    .add(egui::DragValue::new(&mut options.route_start_number).range(0..=99))
                    .changed();
                ui.end_row();

                ui.label("Capture-Limit:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut options.capture_append_limit).range(1..=699),
                    )
                    .changed();
                ui.end_row();

                ui.label("Schauplatz:");
                changed |= ui.text_edit_singleline(&mut options.theater).changed();
                ui.end_row();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options });
    }
    if !open {
        events.push(AppIntent::CloseOptionsDialogRequested);
    }

    events
}
