//! Verbs: transiente Synchronisations-Nachrichten über Marker.

use super::PointMarker;

/// Art eines Verbs. Verbs sind fire-and-forget und werden nie gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKind {
    /// Gegenseite über den aktuellen Punkt informieren
    Selected,
    /// Gegenseite soll in die Detail-Bearbeitung des Punkts wechseln
    Opened,
    /// Punkt wurde verschoben (autoritative Daten bereits aktualisiert)
    Moved,
    /// Punkt wurde an `marker.index` eingefügt
    Added,
    /// Punkt an `marker.index` wurde gelöscht
    Deleted,
}

/// Ein Verb mit dem Marker, auf den es sich bezieht.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorVerb {
    /// Art der Nachricht
    pub kind: VerbKind,
    /// Referenzierter Punkt
    pub marker: PointMarker,
}

impl MirrorVerb {
    /// `Selected`-Verb für einen Marker.
    pub fn selected(marker: PointMarker) -> Self {
        Self {
            kind: VerbKind::Selected,
            marker,
        }
    }

    /// `Opened`-Verb für einen Marker.
    pub fn opened(marker: PointMarker) -> Self {
        Self {
            kind: VerbKind::Opened,
            marker,
        }
    }

    /// `Moved`-Verb für einen Marker (Koordinate nur zur Anzeige).
    pub fn moved(marker: PointMarker) -> Self {
        Self {
            kind: VerbKind::Moved,
            marker,
        }
    }

    /// `Added`-Verb für einen Marker.
    pub fn added(marker: PointMarker) -> Self {
        Self {
            kind: VerbKind::Added,
            marker,
        }
    }

    /// `Deleted`-Verb für einen Marker.
    pub fn deleted(marker: PointMarker) -> Self {
        Self {
            kind: VerbKind::Deleted,
            marker,
        }
    }
}
