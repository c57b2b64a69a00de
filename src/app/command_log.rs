//! Journal der ausgeführten Commands (Diagnose und Tests).

use std::collections::VecDeque;

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge, begrenzt auf die
/// jüngsten Einträge.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 512;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu; der älteste Eintrag fällt
    /// bei Überlauf heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Jüngster Eintrag.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iteriert über alle Einträge in Ausführungs-Reihenfolge.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
