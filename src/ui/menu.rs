//! Top-Menü (File, Simulator, View).

use crate::app::{AppIntent, AppState};
use crate::core::Airframe;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    events.push(AppIntent::NewProfileRequested);
                    ui.close();
                }

                if ui.button("Open...").clicked() {
                    events.push(AppIntent::OpenProfileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Save As...").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Funk-Presets...").clicked() {
                    events.push(AppIntent::OpenRadioDialogRequested);
                    ui.close();
                }

                if ui.button("Gegenmaßnahmen...").clicked() {
                    events.push(AppIntent::OpenCmDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Simulator", |ui| {
                for airframe in Airframe::all() {
                    let checked = state.sim.airframe == airframe;
                    if ui
                        .radio(checked, airframe.display_name())
                        .clicked()
                    {
                        events.push(AppIntent::AirframeSelected { airframe });
                        ui.close();
                    }
                }

                ui.separator();

                if ui
                    .add_enabled(
                        !state.upload.is_running(),
                        egui::Button::new("DTC hochladen"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::UploadRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        !state.capture.is_active(),
                        egui::Button::new("Punkte aus Simulator übernehmen..."),
                    )
                    .clicked()
                {
                    events.push(AppIntent::CaptureAppendRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let map_open = state.map.is_some();
                if ui.button(if map_open { "Karte schließen" } else { "Karte öffnen" }).clicked() {
                    events.push(if map_open {
                        AppIntent::MapCloseRequested
                    } else {
                        AppIntent::MapOpenRequested
                    });
                    ui.close();
                }
            });
        });
    });

    events
}
