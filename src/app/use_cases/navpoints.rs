//! Use-Cases für Punktlisten-Operationen der Listen- und Karten-Seite.
//!
//! Jede Mutation, die Anzahl oder Reihenfolge der Punkte ändert, folgt
//! derselben Disziplin: autoritative Liste mutieren (nummeriert neu),
//! Konfiguration sichern, erst danach das Verb emittieren. Ein parallel
//! eintreffendes `Opened`/`Selected` löst so immer gegen aktuelle
//! Indizes auf.

use crate::app::state::AppState;
use crate::core::{Coordinate, NavPoint};
use crate::mirror::{MirrorVerb, PointMarker};

/// Marker für den Punkt am 1-basierten Index der aktiven Route.
fn marker_at(state: &AppState, index: usize) -> Option<PointMarker> {
    let route = state.active_route()?;
    let point = route.get(index)?;
    Some(PointMarker::navpoint(route.tag.clone(), index, point.coord))
}

/// Sichert das Profil über den Store (Renumber-dann-Speichern-Regel).
fn persist(state: &mut AppState) {
    let tag = state.list_ui.active_route.clone();
    if let Err(e) = state.store.save(&state.profile, &tag) {
        log::warn!("Profil-Sicherung fehlgeschlagen: {:#}", e);
    }
    state.profile_dirty = true;
}

/// Selektiert einen Punkt und spiegelt die Selektion zur Karte.
pub fn select_point(state: &mut AppState, index: usize) {
    let Some(marker) = marker_at(state, index) else {
        log::debug!("Selektion auf unbekannten Index {} ignoriert", index);
        return;
    };

    state.list_ui.selected_index = Some(index);
    state.mirror.emit_from_list(MirrorVerb::selected(marker));
}

/// Öffnet den Punkt-Dialog und spiegelt `Opened` zur Karte.
pub fn open_point(state: &mut AppState, index: usize) {
    let Some(marker) = marker_at(state, index) else {
        log::debug!("Detail-Anfrage auf unbekannten Index {} ignoriert", index);
        return;
    };

    state.list_ui.selected_index = Some(index);
    state.mirror.emit_from_list(MirrorVerb::opened(marker));
}

/// Legt einen neuen Punkt ans Ende der aktiven Route.
/// Gibt den 1-basierten Index des neuen Punkts zurück.
pub fn add_point(
    state: &mut AppState,
    name: String,
    coord: Coordinate,
    elevation_ft: Option<i32>,
) -> Option<usize> {
    let route = state.active_route_mut()?;

    let mut point = NavPoint::new(name, coord);
    point.elevation_ft = elevation_ft;
    let index = route.push(point);

    persist(state);

    let marker = marker_at(state, index)?;
    state.list_ui.selected_index = Some(index);
    state.mirror.emit_from_list(MirrorVerb::added(marker));

    log::info!("Punkt {} angelegt", index);
    Some(index)
}

/// Aktualisiert Name/Koordinate/Höhe eines bestehenden Punkts.
pub fn update_point(
    state: &mut AppState,
    index: usize,
    name: String,
    coord: Coordinate,
    elevation_ft: Option<i32>,
) -> bool {
    let Some(route) = state.active_route_mut() else {
        return false;
    };
    let Some(point) = route.get_mut(index) else {
        log::warn!("Punkt {} existiert nicht", index);
        return false;
    };

    let moved = point.coord != coord;
    point.name = name;
    point.coord = coord;
    point.elevation_ft = elevation_ft;

    persist(state);

    if moved {
        if let Some(marker) = marker_at(state, index) {
            state.mirror.emit_from_list(MirrorVerb::moved(marker));
        }
    }

    true
}

/// Löscht den Punkt am 1-basierten Index der aktiven Route.
pub fn delete_point(state: &mut AppState, index: usize) -> bool {
    // Marker vor der Mutation bilden: er beschreibt den gelöschten Punkt.
    let Some(marker) = marker_at(state, index) else {
        log::warn!("Löschen: Punkt {} existiert nicht", index);
        return false;
    };

    let Some(route) = state.active_route_mut() else {
        return false;
    };
    if route.remove(index).is_none() {
        return false;
    }

    // Eigene Sichten nachziehen, bevor irgendetwas emittiert wird.
    state.list_ui.adjust_after_delete(index);
    if let Some(dialog) = state.list_ui.dialog.as_mut() {
        match dialog.index {
            Some(i) if i == index => state.list_ui.dialog = None,
            Some(i) if i > index => dialog.index = Some(i - 1),
            _ => {}
        }
    }

    persist(state);
    state.mirror.emit_from_list(MirrorVerb::deleted(marker));

    log::info!("Punkt {} gelöscht", index);
    true
}

/// Verschiebt den Punkt um eine Position nach oben/unten.
pub fn shift_point(state: &mut AppState, index: usize, up: bool) -> Option<usize> {
    let to = if up {
        index.checked_sub(1).filter(|&t| t >= 1)?
    } else {
        index + 1
    };

    let old_marker = marker_at(state, index)?;
    let route = state.active_route_mut()?;
    if !route.reorder(index, to) {
        return None;
    }

    persist(state);

    // Kein eigenes Reorder-Verb: die Karte sieht Entfernen + Einfügen.
    state.mirror.emit_from_list(MirrorVerb::deleted(old_marker));
    if let Some(marker) = marker_at(state, to) {
        state.mirror.emit_from_list(MirrorVerb::added(marker));
    }

    state.list_ui.selected_index = Some(to);
    Some(to)
}

/// Setzt die Startnummer der aktiven Route und nummeriert neu.
pub fn set_start_number(state: &mut AppState, start: u32) {
    if let Some(route) = state.active_route_mut() {
        route.set_start_number(start);
        persist(state);
        log::info!("Startnummer auf {} gesetzt", start);
    }
}

/// Karten-seitiger Verschiebe-Abschluss: autoritativen Punkt setzen und
/// `Moved` zur Liste spiegeln.
pub fn move_point_from_map(state: &mut AppState, index: usize, coord: Coordinate) -> bool {
    let Some(route) = state.active_route_mut() else {
        return false;
    };
    let Some(point) = route.get_mut(index) else {
        log::debug!("Karten-Drag auf unbekannten Index {} verworfen", index);
        return false;
    };

    point.coord = coord;
    persist(state);

    // Karten-Element sofort aus der autoritativen Koordinate auffrischen.
    if let Some(map) = state.map.as_mut() {
        map.refresh_element(index, coord);
    }

    if let Some(marker) = marker_at(state, index) {
        state.mirror.emit_from_map(MirrorVerb::moved(marker));
    }
    true
}

/// Karten-seitiges Anlegen: Punkt in die autoritative Liste einfügen,
/// eigenes Karten-Element nachziehen und `Added` zur Liste spiegeln.
pub fn add_point_from_map(state: &mut AppState, coord: Coordinate) -> Option<usize> {
    let route = state.active_route_mut()?;
    let name = format!("WP{}", route.len() + 1);
    let index = route.push(NavPoint::new(name, coord));

    persist(state);

    let marker = marker_at(state, index)?;
    if let Some(map) = state.map.as_mut() {
        map.insert_element(index, marker.clone(), coord);
        map.selected = Some(index);
    }

    state.mirror.emit_from_map(MirrorVerb::added(marker));
    log::info!("Punkt {} auf der Karte angelegt", index);
    Some(index)
}

/// Hängt einen per Capture empfangenen Punkt an die Route `tag` an.
/// Gibt `None` zurück, wenn das Limit erreicht ist.
pub fn append_captured_point(
    state: &mut AppState,
    tag: &str,
    coord: Coordinate,
    elevation_ft: Option<i32>,
) -> Option<usize> {
    let limit = state.options.capture_append_limit;
    let route = state.profile.route_mut(tag)?;

    if route.len() >= limit {
        log::warn!(
            "Capture-Limit {} für Route '{}' erreicht, Sample verworfen",
            limit,
            tag
        );
        return None;
    }

    // Name deterministisch aus der Einfüge-Position.
    let name = format!("CAP{}", route.len() + 1);
    let mut point = NavPoint::new(name, coord);
    point.elevation_ft = elevation_ft;
    let index = route.push(point);

    let tag_owned = tag.to_string();
    if let Err(e) = state.store.save(&state.profile, &tag_owned) {
        log::warn!("Profil-Sicherung fehlgeschlagen: {:#}", e);
    }
    state.profile_dirty = true;

    let marker = PointMarker::navpoint(tag_owned, index, coord);
    state.mirror.emit_from_list(MirrorVerb::added(marker));

    Some(index)
}
