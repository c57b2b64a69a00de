//! Use-Cases für Capture-Abos und die Anwendung zugestellter Samples.
//!
//! Abo-Fenster sind eng: angemeldet wird unmittelbar vor dem
//! Capture-Angebot, abgemeldet auf jedem Ausgang (Fertig, Abbruch,
//! Fehler). Bereits eingereihte Zustellungen nach einer Abmeldung
//! werden über den Aktiv-Check ignoriert.

use crossbeam_channel::unbounded;

use crate::app::state::{ActiveCapture, AppState, CaptureTarget};
use crate::app::AppIntent;
use crate::core::Coordinate;
use crate::sim::{CaptureFlow, CaptureListener, CaptureMode, CaptureSample};

/// Fuß pro Meter für die Höhen-Übernahme.
const FEET_PER_METER: f64 = 3.28084;

/// Startet ein Capture-Abo mit dem übergebenen Modus und Ziel.
pub fn begin(state: &mut AppState, mode: CaptureMode, target: CaptureTarget) {
    // Nur eine logische Capture-Operation zur Zeit.
    if state.capture.is_active() {
        finish(state);
    }

    if state.capture.listener.is_none() {
        match CaptureListener::spawn(state.options.capture_port) {
            Ok(listener) => state.capture.listener = Some(listener),
            Err(e) => {
                log::warn!("Capture-Listener konnte nicht starten: {:#}", e);
                state
                    .ui
                    .set_status(format!("Capture nicht möglich: {}", e));
                return;
            }
        }
    }

    // Abo-Callback: reicht Samples an den Intent-Fluss des UI-Threads
    // weiter; angewendet wird ausschließlich dort.
    let (tx, rx) = unbounded::<Vec<CaptureSample>>();
    let token = state.capture.channel.subscribe(mode, move |samples| {
        let _ = tx.send(samples.to_vec());
        CaptureFlow::Stay
    });

    state.capture.delivery_rx = Some(rx);
    state.capture.active = Some(ActiveCapture {
        mode,
        target,
        token,
    });
    state.capture.received_points = 0;

    if mode == CaptureMode::Multiple {
        state.ui.show_capture_dialog = true;
    }

    log::info!("Capture gestartet ({:?})", mode);
}

/// Beendet das aktive Abo (Fertig, Abbruch oder Fehlerpfad).
pub fn finish(state: &mut AppState) {
    if let Some(active) = state.capture.active.take() {
        // Single-Abos sind nach der ersten Zustellung bereits weg.
        state.capture.channel.unsubscribe(active.token);
        log::info!("Capture beendet ({:?})", active.mode);
    }

    state.capture.delivery_rx = None;
    state.ui.show_capture_dialog = false;

    // Listener nur am Leben halten, solange ein Fenster offen ist.
    if state.capture.channel.subscriber_count() == 0 {
        state.capture.listener = None;
    }
}

/// Speist empfangene UDP-Batches in den Kanal ein und sammelt die
/// Zustellungen an Abonnenten als Intents für den Event-Fluss.
pub fn pump(state: &mut AppState) -> Vec<AppIntent> {
    // Netzwerk → Kanal (Dispatch auf dem UI-Kontext)
    let mut batches = Vec::new();
    if let Some(listener) = state.capture.listener.as_ref() {
        while let Some(batch) = listener.try_recv() {
            batches.push(batch);
        }
    }
    for batch in batches {
        state.capture.channel.dispatch(&batch);
    }

    // Kanal → Intents
    let mut intents = Vec::new();
    if let Some(rx) = state.capture.delivery_rx.as_ref() {
        while let Ok(samples) = rx.try_recv() {
            intents.push(AppIntent::CaptureDelivered { samples });
        }
    }
    intents
}

/// Wendet eine Zustellung auf das aktive Capture-Ziel an.
pub fn apply_delivery(state: &mut AppState, samples: &[CaptureSample]) {
    let Some(active) = state.capture.active.clone() else {
        // Abo wurde inzwischen geschlossen; nachlaufende Zustellung.
        log::debug!("Capture-Zustellung ohne aktives Abo ignoriert");
        return;
    };

    match (active.mode, active.target) {
        (CaptureMode::Single, CaptureTarget::PointDialog) => {
            apply_to_dialog(state, samples);
            // Der Kanal hat das Single-Abo bereits geschlossen; finish
            // räumt Aktiv-Zustand und Listener ab.
            finish(state);
        }
        (CaptureMode::Multiple, CaptureTarget::AppendRoute { tag }) => {
            append_samples(state, &tag, samples);
        }
        (mode, target) => {
            log::debug!(
                "Unerwartete Capture-Kombination {:?}/{:?} ignoriert",
                mode,
                target
            );
        }
    }
}

/// Einzel-Capture: nur `sample[0]` zählt, der Rest wird ignoriert.
fn apply_to_dialog(state: &mut AppState, samples: &[CaptureSample]) {
    let Some(sample) = samples.first() else {
        return;
    };
    let Some(dialog) = state.list_ui.dialog.as_mut() else {
        log::debug!("Einzel-Capture ohne offenen Punkt-Dialog verworfen");
        return;
    };

    let coord = Coordinate::new(sample.latitude, sample.longitude);
    dialog.coord_text = coord.format_ddm();
    dialog.elevation_text = ((sample.elevation_m * FEET_PER_METER).round() as i32).to_string();

    state
        .ui
        .set_status("Koordinate aus dem Simulator übernommen");
}

/// Mehrfach-Capture: alle Nicht-Ownship-Samples in Reihenfolge anhängen,
/// begrenzt durch das konfigurierte Limit.
fn append_samples(state: &mut AppState, tag: &str, samples: &[CaptureSample]) {
    for sample in samples.iter().filter(|s| !s.is_ownship) {
        let coord = Coordinate::new(sample.latitude, sample.longitude);
        let elevation_ft = Some((sample.elevation_m * FEET_PER_METER).round() as i32);

        match super::navpoints::append_captured_point(state, tag, coord, elevation_ft) {
            Some(_) => state.capture.received_points += 1,
            None => break,
        }
    }
}
