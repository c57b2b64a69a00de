//! Rückkopplungs-Schutz: expliziter Zustandsautomat pro Seite.
//!
//! Während eine Seite ein eingehendes Verb anwendet, darf ihre eigene
//! Änderungs-Logik dasselbe Verb nicht zurück emittieren (Selected→Selected
//! würde sonst endlos pendeln). Andere Verb-Arten passieren den Schutz:
//! `Added` wird von der Empfängerseite regulär mit `Selected` beantwortet.

use super::VerbKind;

/// Zustand einer Mirror-Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MirrorState {
    /// Keine Spiegel-Anwendung aktiv
    #[default]
    Idle,
    /// Ein eingehendes Verb dieser Art wird gerade angewendet
    Applying(VerbKind),
}

/// Zustandsautomat `Idle → Applying(kind) → Idle` einer Seite.
#[derive(Debug, Default)]
pub struct SuppressionGate {
    state: MirrorState,
}

impl SuppressionGate {
    /// Erstellt ein Gate im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> MirrorState {
        self.state
    }

    /// Gibt `true` zurück, wenn gerade ein Verb angewendet wird.
    pub fn is_applying(&self) -> bool {
        matches!(self.state, MirrorState::Applying(_))
    }

    /// Übergang `Idle → Applying(kind)`. Verschachtelte Anwendungen sind
    /// ein Protokollfehler und werden geloggt, nicht eskaliert.
    pub fn begin_apply(&mut self, kind: VerbKind) {
        if let MirrorState::Applying(active) = self.state {
            log::warn!(
                "Verschachtelte Spiegel-Anwendung: {:?} während {:?}",
                kind,
                active
            );
        }
        self.state = MirrorState::Applying(kind);
    }

    /// Übergang `Applying(_) → Idle`.
    pub fn finish_apply(&mut self) {
        self.state = MirrorState::Idle;
    }

    /// Gibt `true` zurück, wenn eine Emission dieser Verb-Art gerade
    /// unterdrückt werden muss (gleiche Art wie die laufende Anwendung).
    pub fn suppresses(&self, kind: VerbKind) -> bool {
        self.state == MirrorState::Applying(kind)
    }
}
