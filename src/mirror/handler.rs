//! Handler-Schnittstelle der Mirror-Seiten.

use super::MirrorVerb;

/// Sammelt Verbs, die eine Seite als Antwort auf ein eingehendes Verb
/// emittiert. Die Antworten werden vom [`MirrorLink`](super::MirrorLink)
/// durch das Suppression-Gate der antwortenden Seite geroutet.
#[derive(Debug, Default)]
pub struct VerbSink {
    verbs: Vec<MirrorVerb>,
}

impl VerbSink {
    /// Erstellt einen leeren Sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt ein Antwort-Verb ein.
    pub fn emit(&mut self, verb: MirrorVerb) {
        self.verbs.push(verb);
    }

    /// Gibt `true` zurück, wenn keine Antworten anstehen.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Entnimmt alle gesammelten Verbs.
    pub fn take(&mut self) -> Vec<MirrorVerb> {
        std::mem::take(&mut self.verbs)
    }
}

/// Empfangsseite des Mirror-Protokolls.
///
/// Dies ist die einzige Schnittstelle, die ein Editor implementieren muss,
/// um am Mirroring teilzunehmen. Antworten (z.B. `Selected` nach einem
/// empfangenen `Added`) gehen über den `reply`-Sink, nie direkt über den
/// Link — so bleibt die Schleifen-Unterdrückung zentral prüfbar.
pub trait VerbHandler {
    /// Wendet ein eingehendes Verb auf die eigene Sicht an.
    fn apply(&mut self, verb: &MirrorVerb, reply: &mut VerbSink);
}
