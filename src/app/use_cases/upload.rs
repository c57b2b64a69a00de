//! Use-Cases für Kompilierung und Script-Upload.

use crate::app::state::AppState;
use crate::script::{compile_profile, BuildContext, DelayPlan};
use crate::sim::{ScriptLink, UploadTask};

/// Kompiliert das Profil und startet den Versand im Hintergrund.
///
/// Strukturelle Kompilierfehler (Register-Mismatch, Wert außerhalb des
/// Bereichs) propagieren hart; es wird dann nichts versendet.
pub fn start(state: &mut AppState) -> anyhow::Result<()> {
    if state.upload.is_running() {
        log::warn!("Upload läuft bereits, Anfrage ignoriert");
        return Ok(());
    }

    let delays = DelayPlan::for_airframe(state.sim.airframe, state.options.delay_multiplier);
    let ctx = BuildContext::new(&state.registry, delays);
    let script = compile_profile(&state.profile, &ctx)?;

    state.upload.last_invocation_count = script.len();

    if script.is_effectively_empty() {
        log::info!("Profil ergibt leeres Script, Upload übersprungen");
        state.ui.set_status("Nichts zu senden: Profil ist leer");
        state.upload.last_result = Some(true);
        return Ok(());
    }

    let link = ScriptLink::new(state.options.script_host.clone(), state.options.script_port);
    state
        .ui
        .set_status(format!("Sende {} Invocations...", script.len()));
    state.upload.task = Some(UploadTask::spawn(link, script));

    Ok(())
}

/// Fragt das Ergebnis eines laufenden Uploads ab (UI-Kontext, pro Frame).
pub fn poll(state: &mut AppState) {
    let Some(task) = state.upload.task.as_ref() else {
        return;
    };
    let Some(ok) = task.poll() else {
        return;
    };

    state.upload.task = None;
    apply_result(state, ok);
}

/// Übernimmt das Bool-Ergebnis eines Versands in den Zustand.
pub fn apply_result(state: &mut AppState, ok: bool) {
    state.upload.last_result = Some(ok);
    state.sim.sim_reachable = ok;

    if ok {
        state.ui.set_status(format!(
            "Upload erfolgreich ({} Invocations)",
            state.upload.last_invocation_count
        ));
    } else {
        state
            .ui
            .set_status("Upload fehlgeschlagen: Simulator nicht erreichbar");
    }
}
