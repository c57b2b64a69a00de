//! Handler für das Karten-Fenster (Karten-Seite des Mirror-Protokolls).

use crate::app::state::MapViewState;
use crate::app::{use_cases, AppState};
use crate::core::Coordinate;
use crate::mirror::{MirrorVerb, PointMarker};

/// Öffnet das Karten-Fenster und hängt die Karten-Seite an den Mirror.
pub fn open(state: &mut AppState) {
    if state.map.is_some() {
        return;
    }

    let mut map = MapViewState::new(&state.options.theater);
    if let Some(route) = state.active_route() {
        map.rebuild_from_route(route);
    }

    state.map = Some(map);
    state.mirror.attach_map();

    // Bestehende Listen-Selektion auf die frisch geöffnete Karte spiegeln.
    if let Some(index) = state.list_ui.selected_index {
        if let Some(map) = state.map.as_mut() {
            map.selected = Some(index);
        }
    }

    log::info!("Karten-Fenster geöffnet");
}

/// Schliesst das Karten-Fenster und löst die Karten-Seite vom Mirror.
pub fn close(state: &mut AppState) {
    if state.map.take().is_some() {
        state.mirror.detach_map();
        log::info!("Karten-Fenster geschlossen");
    }
}

/// Marker für ein Karten-Element (1-basiert).
fn marker_at(state: &AppState, index: usize) -> Option<PointMarker> {
    let map = state.map.as_ref()?;
    index
        .checked_sub(1)
        .and_then(|i| map.elements.get(i))
        .map(|e| e.marker.clone())
}

/// Karten-Klick: selektiert das Element oder hebt die Selektion auf.
pub fn pick(state: &mut AppState, index: Option<usize>) {
    let Some(map) = state.map.as_mut() else {
        return;
    };

    match index {
        Some(i) => {
            if i == 0 || i > map.elements.len() {
                log::debug!("Karten-Pick auf Index {} verworfen", i);
                return;
            }
            map.selected = Some(i);
            if let Some(marker) = marker_at(state, i) {
                state.mirror.emit_from_map(MirrorVerb::selected(marker));
            }
        }
        None => {
            map.selected = None;
            map.detail_index = None;
        }
    }
}

/// Doppelklick: öffnet den Detail-Fokus und spiegelt `Opened`.
pub fn open_detail(state: &mut AppState, index: usize) {
    let Some(map) = state.map.as_mut() else {
        return;
    };
    if index == 0 || index > map.elements.len() {
        log::debug!("Karten-Detail auf Index {} verworfen", index);
        return;
    }

    map.selected = Some(index);
    map.detail_index = Some(index);

    if let Some(marker) = marker_at(state, index) {
        state.mirror.emit_from_map(MirrorVerb::opened(marker));
    }
}

/// Beginnt einen Punkt-Drag.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if let Some(map) = state.map.as_mut() {
        if index >= 1 && index <= map.elements.len() {
            map.dragging = Some(index);
        }
    }
}

/// Aktualisiert die Position während des Drags (nur Anzeige).
pub fn drag(state: &mut AppState, index: usize, coord: Coordinate) {
    if let Some(map) = state.map.as_mut() {
        if map.dragging == Some(index) {
            map.refresh_element(index, coord);
        }
    }
}

/// Schliesst einen Drag ab: autoritativen Punkt setzen, `Moved` spiegeln.
pub fn end_drag(state: &mut AppState, index: usize) {
    let Some(map) = state.map.as_mut() else {
        return;
    };
    if map.dragging.take() != Some(index) {
        return;
    }

    let Some(world) = index
        .checked_sub(1)
        .and_then(|i| map.elements.get(i))
        .map(|e| e.world)
    else {
        return;
    };

    let coord = Coordinate::new(world.y as f64, world.x as f64);
    use_cases::navpoints::move_point_from_map(state, index, coord);
}

/// Legt per Ctrl-Klick einen neuen Punkt an.
pub fn add_point_at(state: &mut AppState, coord: Coordinate) {
    if !coord.is_valid() {
        log::debug!("Karten-Klick außerhalb gültiger Koordinaten");
        return;
    }
    use_cases::navpoints::add_point_from_map(state, coord);
}

/// Verschiebt die Kartenmitte.
pub fn pan(state: &mut AppState, delta_world: glam::Vec2) {
    if let Some(map) = state.map.as_mut() {
        map.pan(delta_world);
    }
}

/// Zoomt die Karte.
pub fn zoom(state: &mut AppState, factor: f32) {
    if let Some(map) = state.map.as_mut() {
        map.zoom_by(factor);
    }
}
