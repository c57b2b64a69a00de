//! Seiten-Panel mit der Punktliste der aktiven Route.

use egui_extras::{Column, TableBuilder};

use crate::app::{AppIntent, AppState};

/// Rendert das Punktlisten-Panel und gibt AppIntents zurück.
pub fn render_navpoint_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("navpoint_panel")
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.heading(format!("Route '{}'", state.list_ui.active_route));

            let Some(route) = state.active_route() else {
                ui.label("Keine Route im Profil");
                return;
            };

            ui.horizontal(|ui| {
                if ui.button("Neu").clicked() {
                    events.push(AppIntent::AddPointRequested);
                }

                let has_selection = state.list_ui.selected_index.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Löschen"))
                    .clicked()
                {
                    events.push(AppIntent::DeletePointRequested);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("▲"))
                    .clicked()
                {
                    events.push(AppIntent::MovePointUpRequested);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("▼"))
                    .clicked()
                {
                    events.push(AppIntent::MovePointDownRequested);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Startnummer:");
                let mut start = route.start_number;
                let drag = egui::DragValue::new(&mut start).range(0..=99);
                if ui.add(drag).changed() {
                    events.push(AppIntent::RouteStartNumberChanged { start });
                }
            });

            ui.separator();

            TableBuilder::new(ui)
                .striped(true)
                .sense(egui::Sense::click())
                .column(Column::exact(36.0))
                .column(Column::remainder())
                .column(Column::exact(150.0))
                .column(Column::exact(60.0))
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    header.col(|ui| {
                        ui.strong("Name");
                    });
                    header.col(|ui| {
                        ui.strong("Position");
                    });
                    header.col(|ui| {
                        ui.strong("Höhe");
                    });
                })
                .body(|mut body| {
                    for (i, point) in route.points().iter().enumerate() {
                        let index = i + 1;
                        let selected = state.list_ui.selected_index == Some(index);

                        body.row(20.0, |mut row| {
                            row.set_selected(selected);

                            row.col(|ui| {
                                ui.label(point.number.to_string());
                            });
                            row.col(|ui| {
                                ui.label(&point.name);
                            });
                            row.col(|ui| {
                                ui.label(point.coord.format_ddm());
                            });
                            row.col(|ui| {
                                ui.label(
                                    point
                                        .elevation_ft
                                        .map(|e| format!("{} ft", e))
                                        .unwrap_or_else(|| "—".to_string()),
                                );
                            });

                            let response = row.response();
                            if response.double_clicked() {
                                events.push(AppIntent::PointRowDoubleClicked { index });
                            } else if response.clicked() {
                                events.push(AppIntent::PointRowClicked { index });
                            }
                        });
                    }
                });
        });

    events
}
