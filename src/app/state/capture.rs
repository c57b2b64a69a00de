//! Zustand der Capture-Anbindung (Listener, Kanal, aktives Abo).

use crossbeam_channel::Receiver;

use crate::sim::{CaptureChannel, CaptureListener, CaptureMode, CaptureSample, CaptureToken};

/// Wohin zugestellte Samples angewendet werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureTarget {
    /// `sample[0]` in die Felder des offenen Punkt-Dialogs übernehmen
    PointDialog,
    /// Alle Nicht-Ownship-Samples als neue Punkte an die Route anhängen
    AppendRoute {
        /// Ziel-Routen-Tag
        tag: String,
    },
}

/// Ein laufendes Capture-Abo aus Sicht der UI.
#[derive(Debug, Clone)]
pub struct ActiveCapture {
    /// Abo-Modus
    pub mode: CaptureMode,
    /// Anwendungs-Ziel
    pub target: CaptureTarget,
    /// Kanal-Token für die Abmeldung
    pub token: CaptureToken,
}

/// Capture-Teilzustand der Anwendung.
#[derive(Default)]
pub struct CaptureState {
    /// UDP-Listener; läuft nur während eines Capture-Fensters
    pub listener: Option<CaptureListener>,
    /// Abonnenten-Verteiler (UI-Kontext)
    pub channel: CaptureChannel,
    /// Aktives Abo; None = kein Capture-Fenster offen
    pub active: Option<ActiveCapture>,
    /// Weiterleitung der Abo-Zustellungen an den Intent-Fluss
    pub delivery_rx: Option<Receiver<Vec<CaptureSample>>>,
    /// Bisher angehängte Punkte (Anzeige im Capture-Dialog)
    pub received_points: usize,
}

impl CaptureState {
    /// Gibt `true` zurück, wenn gerade ein Capture-Fenster offen ist.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
