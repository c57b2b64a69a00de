//! Handler für Profil-Dateioperationen.

use std::path::PathBuf;

use crate::app::AppState;
use crate::core::{DtcProfile, JsonProfileStore};

/// Fordert den Öffnen-Dialog an (rendert die UI im nächsten Frame).
pub fn request_open(state: &mut AppState) {
    state.ui.pending_open_dialog = true;
}

/// Fordert den Speichern-Dialog an.
pub fn request_save(state: &mut AppState) {
    state.ui.pending_save_dialog = true;
}

/// Legt ein leeres Profil für den aktiven Luftfahrzeug-Typ an.
pub fn new_profile(state: &mut AppState) {
    state.profile = DtcProfile::new(state.sim.airframe, state.options.route_start_number);
    state.profile_path = None;
    state.profile_dirty = false;
    state.store = Box::new(JsonProfileStore::default());
    state.list_ui.selected_index = None;
    state.list_ui.dialog = None;

    if let Some(map) = state.map.as_mut() {
        if let Some(route) = state.profile.route(&state.list_ui.active_route) {
            map.rebuild_from_route(route);
        }
    }

    log::info!("Neues Profil angelegt ({})", state.sim.airframe.display_name());
}

/// Lädt ein Profil von Platte und richtet Register/Karte danach aus.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let path = PathBuf::from(path);
    let profile = DtcProfile::load_from_file(&path)?;

    super::profile_edit::set_airframe(state, profile.airframe);
    state.profile = profile;
    state.profile_path = Some(path.clone());
    state.profile_dirty = false;
    state.store = Box::new(JsonProfileStore { path: Some(path) });
    state.list_ui.selected_index = None;
    state.list_ui.dialog = None;

    if state.profile.route(&state.list_ui.active_route).is_none() {
        if let Some(first) = state.profile.routes.first() {
            state.list_ui.active_route = first.tag.clone();
        }
    }

    if let Some(map) = state.map.as_mut() {
        if let Some(route) = state.profile.route(&state.list_ui.active_route) {
            map.rebuild_from_route(route);
        }
    }

    state.ui.set_status("Profil geladen");
    Ok(())
}

/// Speichert das Profil (None = aktueller Pfad).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = match path.map(PathBuf::from).or_else(|| state.profile_path.clone()) {
        Some(p) => p,
        None => {
            // Kein Pfad bekannt: Dialog anfordern statt stillem No-op.
            request_save(state);
            return Ok(());
        }
    };

    state.profile.save_to_file(&target)?;
    state.profile_path = Some(target.clone());
    state.store = Box::new(JsonProfileStore { path: Some(target) });
    state.profile_dirty = false;
    state.ui.set_status("Profil gespeichert");

    Ok(())
}
