//! Handler für Capture-Commands.

use crate::app::state::CaptureTarget;
use crate::app::{use_cases, AppState};
use crate::sim::{CaptureMode, CaptureSample};

/// Startet ein Einzel-Capture in den offenen Punkt-Dialog.
pub fn begin_single(state: &mut AppState) {
    if state.list_ui.dialog.is_none() {
        log::debug!("Einzel-Capture ohne Punkt-Dialog ignoriert");
        return;
    }

    use_cases::capture::begin(state, CaptureMode::Single, CaptureTarget::PointDialog);
}

/// Startet ein Mehrfach-Capture, das Punkte an die aktive Route anhängt.
pub fn begin_append(state: &mut AppState) {
    let tag = state.list_ui.active_route.clone();
    use_cases::capture::begin(
        state,
        CaptureMode::Multiple,
        CaptureTarget::AppendRoute { tag },
    );
}

/// Beendet das aktive Capture (Fertig oder Abbruch).
pub fn finish(state: &mut AppState) {
    use_cases::capture::finish(state);
}

/// Wendet zugestellte Samples auf das aktive Ziel an.
pub fn apply_samples(state: &mut AppState, samples: &[CaptureSample]) {
    use_cases::capture::apply_delivery(state, samples);
}
