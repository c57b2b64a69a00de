//! Zustand des Script-Uploads.

use crate::sim::UploadTask;

/// Upload-Teilzustand der Anwendung.
#[derive(Default)]
pub struct UploadState {
    /// Laufender Hintergrund-Versand
    pub task: Option<UploadTask>,
    /// Ergebnis des letzten Versands
    pub last_result: Option<bool>,
    /// Invocation-Anzahl des letzten kompilierten Scripts
    pub last_invocation_count: usize,
}

impl UploadState {
    /// Gibt `true` zurück, wenn ein Versand läuft.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}
