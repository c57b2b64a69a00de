//! Hauptzustand der Anwendung.

use std::path::PathBuf;

use crate::app::CommandLog;
use crate::core::{
    Airframe, DtcProfile, JsonProfileStore, NavPointList, ProfileStore, SimContext,
};
use crate::mirror::MirrorLink;
use crate::script::{registry_for, CommandRegistry};
use crate::shared::EditorOptions;

use super::{CaptureState, ListUiState, MapViewState, UiState, UploadState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell bearbeitetes Profil (autoritative Punktdaten)
    pub profile: DtcProfile,
    /// Pfad der Profil-Datei (None = noch nie gespeichert)
    pub profile_path: Option<PathBuf>,
    /// Ungespeicherte Änderungen vorhanden
    pub profile_dirty: bool,
    /// Persistenz für das Renumber-dann-Speichern des Mirror-Protokolls
    pub store: Box<dyn ProfileStore>,
    /// Expliziter Simulator-Kontext (Typ + Erreichbarkeit)
    pub sim: SimContext,
    /// Kommando-Register des aktiven Luftfahrzeug-Typs
    pub registry: CommandRegistry,
    /// Listen-Seite: Selektion und Punkt-Dialog
    pub list_ui: ListUiState,
    /// Karten-Seite; None solange das Fenster geschlossen ist
    pub map: Option<MapViewState>,
    /// Verb-Mirror zwischen Listen- und Karten-Seite
    pub mirror: MirrorLink,
    /// Capture-Anbindung
    pub capture: CaptureState,
    /// Upload-Anbindung
    pub upload: UploadState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Dialog-Flags und Statuszeile
    pub ui: UiState,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Profil.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let airframe = Airframe::default();
        let profile = DtcProfile::new(airframe, options.route_start_number);
        let active_route = profile.routes[0].tag.clone();

        Self {
            profile,
            profile_path: None,
            profile_dirty: false,
            store: Box::new(JsonProfileStore::default()),
            sim: SimContext::new(airframe),
            registry: registry_for(airframe),
            list_ui: ListUiState::new(active_route),
            map: None,
            mirror: MirrorLink::new(),
            capture: CaptureState::default(),
            upload: UploadState::default(),
            command_log: CommandLog::new(),
            options,
            ui: UiState::new(),
            should_exit: false,
        }
    }

    /// Aktive Route (Listen-Seite).
    pub fn active_route(&self) -> Option<&NavPointList> {
        self.profile.route(&self.list_ui.active_route)
    }

    /// Mutable aktive Route.
    pub fn active_route_mut(&mut self) -> Option<&mut NavPointList> {
        self.profile.route_mut(&self.list_ui.active_route)
    }

    /// Punktanzahl der aktiven Route (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.active_route().map_or(0, |r| r.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
