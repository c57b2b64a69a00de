//! UI-Zustand: Dialog-Flags und schwebende Dateidialog-Anfragen.

/// Dialog- und Statuszeilen-Zustand.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Öffnen-Dialog beim nächsten Frame anzeigen
    pub pending_open_dialog: bool,
    /// Speichern-Dialog beim nächsten Frame anzeigen
    pub pending_save_dialog: bool,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Ob der Funk-Dialog angezeigt wird
    pub show_radio_dialog: bool,
    /// Ob der Gegenmaßnahmen-Dialog angezeigt wird
    pub show_cm_dialog: bool,
    /// Ob der Mehrfach-Capture-Dialog angezeigt wird
    pub show_capture_dialog: bool,
    /// Meldung für die Statuszeile
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statuszeilen-Meldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
