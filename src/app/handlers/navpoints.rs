//! Handler für Punktlisten-Commands der Listen-Seite.

use crate::app::state::PointDialogState;
use crate::app::{use_cases, AppState};
use crate::core::Coordinate;

/// Selektiert einen Punkt.
pub fn select_point(state: &mut AppState, index: usize) {
    use_cases::navpoints::select_point(state, index);
}

/// Öffnet den Punkt-Dialog (None = neuer Punkt) und spiegelt `Opened`.
pub fn open_point_dialog(state: &mut AppState, index: Option<usize>) {
    let dialog = match index {
        Some(i) => {
            let Some(point) = state.active_route().and_then(|r| r.get(i)) else {
                log::warn!("Punkt {} existiert nicht", i);
                return;
            };

            PointDialogState {
                index: Some(i),
                name: point.name.clone(),
                coord_text: point.coord.format_ddm(),
                elevation_text: point
                    .elevation_ft
                    .map(|e| e.to_string())
                    .unwrap_or_default(),
            }
        }
        None => PointDialogState {
            index: None,
            name: format!("WP{}", state.point_count() + 1),
            ..PointDialogState::default()
        },
    };

    state.list_ui.dialog = Some(dialog);

    if let Some(i) = index {
        use_cases::navpoints::open_point(state, i);
    }
}

/// Schliesst den Punkt-Dialog ohne Übernahme.
pub fn close_point_dialog(state: &mut AppState) {
    state.list_ui.dialog = None;
}

/// Übernimmt den Punkt-Dialog: legt an oder aktualisiert.
pub fn confirm_point_dialog(state: &mut AppState) {
    let Some(dialog) = state.list_ui.dialog.clone() else {
        return;
    };

    let Some(coord) = Coordinate::parse(&dialog.coord_text) else {
        state
            .ui
            .set_status("Koordinate nicht lesbar (DDM oder Dezimalgrad)");
        return;
    };

    let elevation_ft = match dialog.elevation_text.trim() {
        "" => None,
        text => match text.parse::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                state.ui.set_status("Höhe nicht lesbar (Fuß, ganzzahlig)");
                return;
            }
        },
    };

    let applied = match dialog.index {
        Some(index) => {
            use_cases::navpoints::update_point(state, index, dialog.name, coord, elevation_ft)
        }
        None => use_cases::navpoints::add_point(state, dialog.name, coord, elevation_ft).is_some(),
    };

    if applied {
        state.list_ui.dialog = None;
    }
}

/// Löscht den selektierten Punkt.
pub fn delete_selected(state: &mut AppState) {
    let Some(index) = state.list_ui.selected_index else {
        log::debug!("Löschen ohne Selektion ignoriert");
        return;
    };

    use_cases::navpoints::delete_point(state, index);
}

/// Verschiebt den selektierten Punkt nach oben.
pub fn move_selected_up(state: &mut AppState) {
    if let Some(index) = state.list_ui.selected_index {
        use_cases::navpoints::shift_point(state, index, true);
    }
}

/// Verschiebt den selektierten Punkt nach unten.
pub fn move_selected_down(state: &mut AppState) {
    if let Some(index) = state.list_ui.selected_index {
        use_cases::navpoints::shift_point(state, index, false);
    }
}

/// Setzt die Startnummer der aktiven Route.
pub fn set_start_number(state: &mut AppState, start: u32) {
    use_cases::navpoints::set_start_number(state, start);
}
