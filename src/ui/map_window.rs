//! Karten-Fenster: geografisches Overlay der aktiven Route.
//!
//! Reine Sicht: alle Mutationen laufen als Intents durch den Controller,
//! die Synchronisation mit der Liste über das Verb-Mirroring.

use glam::Vec2;

use crate::app::state::MapViewState;
use crate::app::{AppIntent, AppState};
use crate::core::Coordinate;
use crate::shared::options::MAP_SCROLL_ZOOM_STEP;

/// Zeigt das Karten-Fenster, solange die Karten-Seite existiert.
pub fn show_map_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(map) = state.map.as_ref() else {
        return events;
    };

    let mut open = true;
    egui::Window::new("Karte")
        .default_size([640.0, 480.0])
        .open(&mut open)
        .show(ctx, |ui| {
            render_map_canvas(ui, state, map, &mut events);

            if let Some(detail) = map.detail_index {
                render_detail_panel(ui, state, detail);
            }
        });

    if !open {
        events.push(AppIntent::MapCloseRequested);
    }

    events
}

fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}

fn render_map_canvas(
    ui: &mut egui::Ui,
    state: &AppState,
    map: &MapViewState,
    events: &mut Vec<AppIntent>,
) {
    let desired = egui::vec2(ui.available_width(), (ui.available_height() - 8.0).max(240.0));
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    let viewport = Vec2::new(rect.width(), rect.height());

    let to_pos2 = |world: Vec2| -> egui::Pos2 {
        let s = map.world_to_screen(world, viewport);
        egui::pos2(rect.min.x + s.x, rect.min.y + s.y)
    };
    let to_world = |pos: egui::Pos2| -> Vec2 {
        map.screen_to_world(Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y), viewport)
    };

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    // POI-Overlay (reine Anzeige)
    let poi_color = color32(state.options.map_color_poi);
    for poi in &map.pois {
        let pos = to_pos2(MapViewState::world_of(poi.coord));
        if rect.contains(pos) {
            painter.circle_stroke(pos, 4.0, egui::Stroke::new(1.5, poi_color));
            painter.text(
                pos + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                &poi.name,
                egui::FontId::proportional(11.0),
                poi_color,
            );
        }
    }

    // Routen-Linie
    if map.elements.len() >= 2 {
        let line: Vec<egui::Pos2> = map.elements.iter().map(|e| to_pos2(e.world)).collect();
        painter.add(egui::Shape::line(
            line,
            egui::Stroke::new(1.5, color32(state.options.map_color_route_line)),
        ));
    }

    // Routen-Punkte
    let point_radius = state.options.map_point_radius_px;
    for element in &map.elements {
        let pos = to_pos2(element.world);
        let selected = map.selected == Some(element.marker.index);
        let color = if selected {
            color32(state.options.map_color_selected)
        } else {
            color32(state.options.map_color_navpoint)
        };
        let radius = if selected {
            point_radius * 1.4
        } else {
            point_radius
        };

        painter.circle_filled(pos, radius, color);
        painter.text(
            pos + egui::vec2(0.0, -radius - 2.0),
            egui::Align2::CENTER_BOTTOM,
            element.marker.index.to_string(),
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
    }

    // === Input ===
    let pick_index = map.pick_index(viewport);
    let pick_radius = state.options.map_pick_radius_px;

    let hit_at = |pos: egui::Pos2| -> Option<usize> {
        let local = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
        pick_index.nearest_within(local, pick_radius).map(|m| m.id)
    };

    if response.drag_started() {
        if let Some(origin) = response.interact_pointer_pos() {
            if let Some(index) = hit_at(origin) {
                events.push(AppIntent::MapPointDragStarted { index });
            }
        }
    }

    if response.dragged() {
        if let Some(index) = map.dragging {
            if let Some(pos) = response.interact_pointer_pos() {
                let world = to_world(pos);
                events.push(AppIntent::MapPointDragged {
                    index,
                    coord: Coordinate::new(world.y as f64, world.x as f64),
                });
            }
        } else {
            // Leerer Drag verschiebt die Karte
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                let a = to_world(rect.min);
                let b = to_world(rect.min + delta);
                events.push(AppIntent::MapPanned {
                    delta_world: a - b,
                });
            }
        }
    }

    if response.drag_stopped() {
        if let Some(index) = map.dragging {
            events.push(AppIntent::MapPointDragEnded { index });
        }
    }

    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some(index) = hit_at(pos) {
                events.push(AppIntent::MapPointDoubleClicked { index });
            }
        }
    } else if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let ctrl = ui.input(|i| i.modifiers.ctrl);
            if ctrl {
                let world = to_world(pos);
                events.push(AppIntent::MapAddPointRequested {
                    coord: Coordinate::new(world.y as f64, world.x as f64),
                });
            } else {
                events.push(AppIntent::MapPointPicked { index: hit_at(pos) });
            }
        }
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let factor = if scroll > 0.0 {
                MAP_SCROLL_ZOOM_STEP
            } else {
                1.0 / MAP_SCROLL_ZOOM_STEP
            };
            events.push(AppIntent::MapZoomed { factor });
        }
    }
}

/// Fokus-Panel unter der Karte (Detail-Ansicht der Karten-Seite).
fn render_detail_panel(ui: &mut egui::Ui, state: &AppState, index: usize) {
    let Some(point) = state.active_route().and_then(|r| r.get(index)) else {
        return;
    };

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong(format!("#{} {}", point.number, point.name));
        ui.separator();
        ui.label(point.coord.format_ddm());
        if let Some(elevation) = point.elevation_ft {
            ui.separator();
            ui.label(format!("{} ft", elevation));
        }
    });
}
