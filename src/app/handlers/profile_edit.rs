//! Handler für Profil-Subsysteme jenseits der Punktlisten.

use crate::app::AppState;
use crate::core::{Airframe, CmProgram, RadioSlot};
use crate::script::registry_for;

/// Wechselt den Luftfahrzeug-Typ und baut das Kommando-Register neu.
pub fn set_airframe(state: &mut AppState, airframe: Airframe) {
    if state.sim.airframe == airframe {
        return;
    }

    state.sim.airframe = airframe;
    state.profile.airframe = airframe;
    state.registry = registry_for(airframe);
    state.profile_dirty = true;

    log::info!("Luftfahrzeug-Typ: {}", airframe.display_name());
}

/// Setzt einen Preset-Kanal (None = Kanal löschen).
pub fn set_radio_preset(
    state: &mut AppState,
    radio: RadioSlot,
    channel: usize,
    frequency_mhz: Option<f64>,
) {
    state.profile.radio_mut(radio).set_preset(channel, frequency_mhz);
    state.profile_dirty = true;
}

/// Überschreibt einen Gegenmaßnahmen-Programm-Slot (1-basiert).
pub fn set_cm_program(state: &mut AppState, slot: usize, program: CmProgram) {
    let Some(entry) = slot.checked_sub(1).and_then(|i| state.profile.cm_programs.get_mut(i))
    else {
        log::warn!("CM-Programm-Slot {} existiert nicht", slot);
        return;
    };

    *entry = program;
    state.profile_dirty = true;
}
