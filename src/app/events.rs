//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{Airframe, CmProgram, Coordinate, RadioSlot};
use crate::shared::EditorOptions;
use crate::sim::CaptureSample;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues Profil anlegen
    NewProfileRequested,
    /// Profil öffnen (zeigt Dateidialog)
    OpenProfileRequested,
    /// Profil speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Profil unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Profil-Datei wurde im Dialog ausgewählt (Laden)
    ProfileFileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Luftfahrzeug-Typ gewechselt
    AirframeSelected { airframe: Airframe },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,

    /// Funk-Dialog öffnen
    OpenRadioDialogRequested,
    /// Funk-Dialog schließen
    CloseRadioDialogRequested,
    /// Preset-Kanal geändert (None = Kanal löschen)
    RadioPresetChanged {
        radio: RadioSlot,
        channel: usize,
        frequency_mhz: Option<f64>,
    },

    /// Gegenmaßnahmen-Dialog öffnen
    OpenCmDialogRequested,
    /// Gegenmaßnahmen-Dialog schließen
    CloseCmDialogRequested,
    /// Programm-Slot geändert
    CmProgramChanged { slot: usize, program: CmProgram },

    /// Startnummer der aktiven Route geändert
    RouteStartNumberChanged { start: u32 },
    /// Punkt-Zeile angeklickt (Selektion)
    PointRowClicked { index: usize },
    /// Punkt-Zeile doppelt angeklickt (Detail-Dialog)
    PointRowDoubleClicked { index: usize },
    /// Neuen Punkt anlegen (öffnet leeren Dialog)
    AddPointRequested,
    /// Selektierten Punkt löschen
    DeletePointRequested,
    /// Selektierten Punkt nach oben schieben
    MovePointUpRequested,
    /// Selektierten Punkt nach unten schieben
    MovePointDownRequested,
    /// Punkt-Dialog bestätigt
    PointDialogConfirmed,
    /// Punkt-Dialog abgebrochen
    PointDialogCancelled,
    /// Einzel-Capture in den Punkt-Dialog anfordern
    PointDialogCaptureRequested,

    /// Karten-Fenster öffnen
    MapOpenRequested,
    /// Karten-Fenster schließen
    MapCloseRequested,
    /// Klick auf die Karte (None = Leerklick)
    MapPointPicked { index: Option<usize> },
    /// Doppelklick auf einen Karten-Punkt (Detail)
    MapPointDoubleClicked { index: usize },
    /// Drag eines Karten-Punkts gestartet
    MapPointDragStarted { index: usize },
    /// Drag-Position aktualisiert
    MapPointDragged { index: usize, coord: Coordinate },
    /// Drag beendet (Punkt loslassen)
    MapPointDragEnded { index: usize },
    /// Neuen Punkt per Ctrl-Klick auf der Karte anlegen
    MapAddPointRequested { coord: Coordinate },
    /// Karte verschieben (Welt-Grad)
    MapPanned { delta_world: glam::Vec2 },
    /// Karte zoomen
    MapZoomed { factor: f32 },

    /// Profil kompilieren und an den Simulator senden
    UploadRequested,

    /// Mehrfach-Capture (Punkte anhängen) starten
    CaptureAppendRequested,
    /// Mehrfach-Capture beenden ("Fertig")
    CaptureDoneRequested,
    /// Capture abgebrochen (Dialog geschlossen)
    CaptureCancelled,
    /// Zustellung aus dem Capture-Kanal (UI-Kontext)
    CaptureDelivered { samples: Vec<CaptureSample> },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenProfileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveProfileDialog,
    /// Anwendung beenden
    RequestExit,
    /// Leeres Profil anlegen
    NewProfile,
    /// Profil-Datei laden
    LoadProfile { path: String },
    /// Profil speichern (None = aktueller Pfad)
    SaveProfile { path: Option<String> },
    /// Luftfahrzeug-Typ setzen (baut das Register neu)
    SetAirframe { airframe: Airframe },

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,

    /// Funk-Dialog öffnen
    OpenRadioDialog,
    /// Funk-Dialog schliessen
    CloseRadioDialog,
    /// Preset-Kanal setzen
    SetRadioPreset {
        radio: RadioSlot,
        channel: usize,
        frequency_mhz: Option<f64>,
    },

    /// Gegenmaßnahmen-Dialog öffnen
    OpenCmDialog,
    /// Gegenmaßnahmen-Dialog schliessen
    CloseCmDialog,
    /// Programm-Slot setzen
    SetCmProgram { slot: usize, program: CmProgram },

    /// Startnummer setzen und Route neu nummerieren
    SetRouteStartNumber { start: u32 },
    /// Punkt selektieren
    SelectPoint { index: usize },
    /// Punkt-Dialog öffnen (None = neuer Punkt)
    OpenPointDialog { index: Option<usize> },
    /// Punkt-Dialog schliessen
    ClosePointDialog,
    /// Punkt-Dialog übernehmen (anlegen oder aktualisieren)
    ConfirmPointDialog,
    /// Selektierten Punkt löschen
    DeleteSelectedPoint,
    /// Selektierten Punkt nach oben schieben
    MoveSelectedPointUp,
    /// Selektierten Punkt nach unten schieben
    MoveSelectedPointDown,

    /// Karten-Fenster öffnen (hängt die Karten-Seite an den Mirror)
    OpenMap,
    /// Karten-Fenster schliessen
    CloseMap,
    /// Karten-Pick verarbeiten (None = Selektion aufheben)
    PickMapPoint { index: Option<usize> },
    /// Detail-Fokus auf der Karte öffnen
    OpenMapPointDetail { index: usize },
    /// Karten-Drag starten
    BeginMapDrag { index: usize },
    /// Karten-Drag aktualisieren (mutiert den autoritativen Punkt)
    DragMapPoint { index: usize, coord: Coordinate },
    /// Karten-Drag abschliessen
    EndMapDrag { index: usize },
    /// Punkt an Koordinate anlegen (Karten-Seite)
    AddPointAt { coord: Coordinate },
    /// Karte verschieben
    PanMap { delta_world: glam::Vec2 },
    /// Karte zoomen
    ZoomMap { factor: f32 },

    /// Profil kompilieren und Upload starten
    CompileAndUpload,

    /// Einzel-Capture in den Punkt-Dialog starten
    BeginSingleCapture,
    /// Mehrfach-Capture (anhängen) starten
    BeginAppendCapture,
    /// Aktives Capture beenden (Fertig/Abbruch)
    FinishCapture,
    /// Zugestellte Samples anwenden
    ApplyCaptureSamples { samples: Vec<CaptureSample> },
}
