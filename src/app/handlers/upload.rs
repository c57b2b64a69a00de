//! Handler für den Script-Upload.

use crate::app::{use_cases, AppState};

/// Kompiliert das Profil und startet den Upload.
///
/// Kompilierfehler sind strukturell und propagieren hart; die Statuszeile
/// bekommt vorher die Benutzer-Meldung.
pub fn compile_and_upload(state: &mut AppState) -> anyhow::Result<()> {
    if let Err(e) = use_cases::upload::start(state) {
        state
            .ui
            .set_status(format!("Kompilierung fehlgeschlagen: {}", e));
        return Err(e.into());
    }
    Ok(())
}
