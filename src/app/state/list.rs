//! Zustand des Listen-Editors (Selektion + Punkt-Dialog).

/// Eingabepuffer des Punkt-Dialogs. `Some` = Detail-Ansicht offen.
#[derive(Debug, Clone, Default)]
pub struct PointDialogState {
    /// Bearbeiteter Punkt (1-basiert); None = neuer Punkt
    pub index: Option<usize>,
    /// Name-Eingabe
    pub name: String,
    /// Koordinaten-Eingabe (DDM oder Dezimalgrad)
    pub coord_text: String,
    /// Höhen-Eingabe in Fuß (leer = keine Höhe)
    pub elevation_text: String,
}

/// UI-Zustand der Listen-Seite des Mirror-Protokolls.
#[derive(Debug, Clone)]
pub struct ListUiState {
    /// Tag der aktiven Route
    pub active_route: String,
    /// Selektierter Punkt (1-basiert)
    pub selected_index: Option<usize>,
    /// Offener Punkt-Dialog (Detail-Ansicht der Listen-Seite)
    pub dialog: Option<PointDialogState>,
}

impl ListUiState {
    /// Erstellt den Zustand für die übergebene Start-Route.
    pub fn new(active_route: impl Into<String>) -> Self {
        Self {
            active_route: active_route.into(),
            selected_index: None,
            dialog: None,
        }
    }

    /// 1-basierter Index der offenen Detail-Ansicht, falls vorhanden.
    pub fn detail_index(&self) -> Option<usize> {
        self.dialog.as_ref().and_then(|d| d.index)
    }

    /// Passt die Selektion nach dem Löschen eines Punkts an.
    pub fn adjust_after_delete(&mut self, deleted_index: usize) {
        match self.selected_index {
            Some(i) if i == deleted_index => self.selected_index = None,
            Some(i) if i > deleted_index => self.selected_index = Some(i - 1),
            _ => {}
        }
    }
}
