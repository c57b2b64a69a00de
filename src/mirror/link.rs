//! Neutraler Verbindungs-Punkt zwischen Listen- und Karten-Seite.
//!
//! Beide Seiten kennen sich nicht direkt: Emissionen laufen als Verbs durch
//! zwei einspurige Queues, die Zustellung passiert im Pump auf dem
//! UI-Kontext. Die Karten-Seite ist optional und wird erst beim Öffnen des
//! Fensters angehängt; solange sie fehlt, verwirft der Link Emissionen der
//! Listen-Seite.

use std::collections::VecDeque;

use super::{MirrorVerb, SuppressionGate, VerbHandler, VerbSink};

/// Obergrenze der Zustellungen pro Pump-Lauf. Die Suppression verhindert
/// Schleifen; die Grenze fängt Protokollfehler ab statt zu hängen.
const MAX_DELIVERIES_PER_PUMP: usize = 64;

/// Die beiden Seiten des Protokolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorSide {
    /// Listen-Editor (autoritative Punktliste)
    List,
    /// Karten-Overlay
    Map,
}

impl MirrorSide {
    /// Die jeweils andere Seite.
    pub fn opposite(&self) -> MirrorSide {
        match self {
            MirrorSide::List => MirrorSide::Map,
            MirrorSide::Map => MirrorSide::List,
        }
    }
}

/// Verb-Queues und Suppression-Gates beider Seiten.
#[derive(Debug, Default)]
pub struct MirrorLink {
    to_list: VecDeque<MirrorVerb>,
    to_map: VecDeque<MirrorVerb>,
    list_gate: SuppressionGate,
    map_gate: SuppressionGate,
    map_attached: bool,
}

impl MirrorLink {
    /// Erstellt einen Link ohne angehängte Karten-Seite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt die Karten-Seite an (Karten-Fenster geöffnet).
    pub fn attach_map(&mut self) {
        self.map_attached = true;
        log::debug!("Karten-Seite am Mirror angehängt");
    }

    /// Löst die Karten-Seite (Fenster geschlossen) und verwirft
    /// unzugestellte Verbs an sie.
    pub fn detach_map(&mut self) {
        self.map_attached = false;
        self.to_map.clear();
        log::debug!("Karten-Seite vom Mirror gelöst");
    }

    /// Gibt `true` zurück, wenn die Karten-Seite angehängt ist.
    pub fn is_map_attached(&self) -> bool {
        self.map_attached
    }

    /// Gibt `true` zurück, wenn die Seite gerade ein Verb anwendet.
    pub fn is_applying(&self, side: MirrorSide) -> bool {
        self.gate(side).is_applying()
    }

    /// Anzahl wartender Verbs an die übergebene Seite.
    pub fn pending(&self, side: MirrorSide) -> usize {
        match side {
            MirrorSide::List => self.to_list.len(),
            MirrorSide::Map => self.to_map.len(),
        }
    }

    /// Emission der Listen-Seite an die Karte.
    pub fn emit_from_list(&mut self, verb: MirrorVerb) {
        self.emit(MirrorSide::List, verb);
    }

    /// Emission der Karten-Seite an die Liste.
    pub fn emit_from_map(&mut self, verb: MirrorVerb) {
        self.emit(MirrorSide::Map, verb);
    }

    /// Stellt ein Verb der Ursprungs-Seite in die Queue der Gegenseite.
    ///
    /// Verworfen wird, wenn die Ursprungs-Seite gerade ein Verb derselben
    /// Art anwendet (Rückkopplungs-Schutz) oder wenn die Karte als Ziel
    /// nicht angehängt ist.
    pub fn emit(&mut self, origin: MirrorSide, verb: MirrorVerb) {
        if self.gate(origin).suppresses(verb.kind) {
            log::debug!(
                "{:?} von {:?} unterdrückt (Spiegel-Anwendung läuft)",
                verb.kind,
                origin
            );
            return;
        }

        match origin {
            MirrorSide::List => {
                if !self.map_attached {
                    return;
                }
                self.to_map.push_back(verb);
            }
            MirrorSide::Map => self.to_list.push_back(verb),
        }
    }

    /// Stellt alle wartenden Verbs zu. `deliver` erhält die empfangende
    /// Seite, das Verb und einen Sink für Antwort-Verbs.
    ///
    /// Gibt die Anzahl der Zustellungen zurück.
    pub fn pump_with(
        &mut self,
        mut deliver: impl FnMut(MirrorSide, &MirrorVerb, &mut VerbSink),
    ) -> usize {
        let mut delivered = 0;

        while delivered < MAX_DELIVERIES_PER_PUMP {
            // Verbs an die Karte zuerst: sie stammen aus Listen-Edits,
            // deren Folge-Selektionen auf aktuelle Elemente treffen sollen.
            let (receiver, verb) = if let Some(verb) = self.to_map.pop_front() {
                (MirrorSide::Map, verb)
            } else if let Some(verb) = self.to_list.pop_front() {
                (MirrorSide::List, verb)
            } else {
                break;
            };

            self.gate_mut(receiver).begin_apply(verb.kind);

            let mut sink = VerbSink::new();
            deliver(receiver, &verb, &mut sink);

            // Antworten laufen durch das noch aktive Gate der Empfängerseite:
            // gleiche Verb-Art wird dort verworfen.
            for reply in sink.take() {
                self.emit(receiver, reply);
            }

            self.gate_mut(receiver).finish_apply();
            delivered += 1;
        }

        if delivered == MAX_DELIVERIES_PER_PUMP {
            log::error!(
                "Mirror-Pump nach {} Zustellungen abgebrochen, Queues verworfen",
                delivered
            );
            self.to_list.clear();
            self.to_map.clear();
        }

        delivered
    }

    /// Komfort-Variante mit zwei Handler-Objekten.
    pub fn pump(&mut self, list: &mut dyn VerbHandler, map: &mut dyn VerbHandler) -> usize {
        self.pump_with(|side, verb, sink| match side {
            MirrorSide::List => list.apply(verb, sink),
            MirrorSide::Map => map.apply(verb, sink),
        })
    }

    fn gate(&self, side: MirrorSide) -> &SuppressionGate {
        match side {
            MirrorSide::List => &self.list_gate,
            MirrorSide::Map => &self.map_gate,
        }
    }

    fn gate_mut(&mut self, side: MirrorSide) -> &mut SuppressionGate {
        match side {
            MirrorSide::List => &mut self.list_gate,
            MirrorSide::Map => &mut self.map_gate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::{MarkerKind, PointMarker, VerbKind};

    fn marker(index: usize) -> PointMarker {
        PointMarker::new(MarkerKind::Navpoint, "Primary", index)
    }

    #[test]
    fn list_emission_without_map_is_dropped() {
        let mut link = MirrorLink::new();
        link.emit_from_list(MirrorVerb::selected(marker(1)));

        assert_eq!(link.pending(MirrorSide::Map), 0);
    }

    #[test]
    fn map_emission_always_reaches_list() {
        let mut link = MirrorLink::new();
        link.emit_from_map(MirrorVerb::selected(marker(1)));

        assert_eq!(link.pending(MirrorSide::List), 1);
    }

    #[test]
    fn detach_clears_pending_map_verbs() {
        let mut link = MirrorLink::new();
        link.attach_map();
        link.emit_from_list(MirrorVerb::added(marker(1)));
        link.detach_map();

        assert_eq!(link.pending(MirrorSide::Map), 0);
    }

    #[test]
    fn same_kind_reply_is_suppressed() {
        let mut link = MirrorLink::new();
        link.attach_map();
        link.emit_from_list(MirrorVerb::selected(marker(1)));

        // Karten-Seite beantwortet Selected reflexartig mit Selected.
        let mut back_to_list = 0;
        link.pump_with(|side, verb, sink| match side {
            MirrorSide::Map => sink.emit(verb.clone()),
            MirrorSide::List => back_to_list += 1,
        });

        assert_eq!(back_to_list, 0, "Selected darf nicht zurückpendeln");
    }

    #[test]
    fn added_reply_selected_passes_gate() {
        let mut link = MirrorLink::new();
        link.attach_map();
        link.emit_from_list(MirrorVerb::added(marker(2)));

        let mut list_received = Vec::new();
        link.pump_with(|side, verb, sink| match side {
            MirrorSide::Map => sink.emit(MirrorVerb::selected(verb.marker.clone())),
            MirrorSide::List => list_received.push(verb.kind),
        });

        assert_eq!(list_received, vec![VerbKind::Selected]);
    }
}
