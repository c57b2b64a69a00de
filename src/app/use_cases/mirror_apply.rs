//! Anwendung eingehender Mirror-Verbs auf Listen- und Karten-Seite.
//!
//! Die beiden Handler sind kurzlebige Adapter, die pro Zustellung die
//! betroffenen Teilzustände borgen. Verbs mit Indizes außerhalb der
//! aktuellen Grenzen werden verworfen und geloggt — im Fenster zwischen
//! Mutation und gespiegelter Nachricht ist das erwartetes Verhalten.

use crate::app::state::{AppState, ListUiState, MapViewState};
use crate::core::{DtcProfile, NavPointList};
use crate::mirror::{MarkerKind, MirrorSide, MirrorVerb, VerbHandler, VerbKind, VerbSink};

/// Listen-Seite als Verb-Empfänger.
pub struct ListSideApply<'a> {
    /// Autoritative Punktdaten
    pub profile: &'a DtcProfile,
    /// Selektion und Punkt-Dialog der Liste
    pub list_ui: &'a mut ListUiState,
}

impl<'a> ListSideApply<'a> {
    /// Gibt die Route zurück, wenn der Marker zur eigenen Sicht gehört.
    /// Fremder Tag oder unbekannte Art führt zum Löschen der Selektion.
    fn owned_route(&mut self, verb: &MirrorVerb) -> Option<&'a NavPointList> {
        if verb.marker.kind != MarkerKind::Navpoint
            || verb.marker.tag != self.list_ui.active_route
        {
            self.list_ui.selected_index = None;
            log::debug!(
                "{:?} mit fremdem Marker ({:?}/{}) — Selektion aufgehoben",
                verb.kind,
                verb.marker.kind,
                verb.marker.tag
            );
            return None;
        }

        self.profile.route(&verb.marker.tag)
    }

    /// Frischt die Dialog-Felder aus dem autoritativen Punkt auf.
    fn refresh_dialog_from(&mut self, route: &NavPointList, index: usize) {
        let Some(point) = route.get(index) else {
            return;
        };
        if let Some(dialog) = self.list_ui.dialog.as_mut() {
            dialog.index = Some(index);
            dialog.name = point.name.clone();
            dialog.coord_text = point.coord.format_ddm();
            dialog.elevation_text = point
                .elevation_ft
                .map(|e| e.to_string())
                .unwrap_or_default();
        }
    }
}

impl VerbHandler for ListSideApply<'_> {
    fn apply(&mut self, verb: &MirrorVerb, reply: &mut VerbSink) {
        let index = verb.marker.index;

        match verb.kind {
            VerbKind::Selected | VerbKind::Opened => {
                let Some(route) = self.owned_route(verb) else {
                    return;
                };
                if !route.contains_index(index) {
                    log::debug!("{:?} auf Index {} außerhalb der Liste", verb.kind, index);
                    return;
                }

                self.list_ui.selected_index = Some(index);

                // Opened zieht eine bereits offene Detail-Ansicht auf den
                // Punkt nach; ohne offene Ansicht wirkt es wie Selected.
                if verb.kind == VerbKind::Opened && self.list_ui.dialog.is_some() {
                    self.refresh_dialog_from(route, index);
                }
            }

            VerbKind::Moved => {
                let Some(route) = self.owned_route(verb) else {
                    return;
                };
                if !route.contains_index(index) {
                    log::debug!("Moved auf Index {} außerhalb der Liste", index);
                    return;
                }

                // Autoritative Daten neu lesen, nie die Verb-Koordinate:
                // eine offene Detail-Ansicht zeigt danach den Punktstand.
                if self.list_ui.detail_index() == Some(index) {
                    self.refresh_dialog_from(route, index);
                }
            }

            VerbKind::Added => {
                let Some(route) = self.owned_route(verb) else {
                    return;
                };
                if !route.contains_index(index) {
                    log::debug!("Added auf Index {} außerhalb der Liste", index);
                    return;
                }

                // Die Tabelle rendert direkt aus der autoritativen Liste;
                // sichtbar nachzuziehen ist nur die Selektion. Zurück geht
                // Selected, nie ein Added-Echo.
                self.list_ui.selected_index = Some(index);
                reply.emit(MirrorVerb::selected(verb.marker.clone()));
            }

            VerbKind::Deleted => {
                self.list_ui.adjust_after_delete(index);

                // Deleted darf als einziges Verb eine laufende Bearbeitung
                // abbrechen: der referenzierte Punkt existiert nicht mehr.
                if let Some(dialog) = self.list_ui.dialog.as_mut() {
                    match dialog.index {
                        Some(i) if i == index => self.list_ui.dialog = None,
                        Some(i) if i > index => dialog.index = Some(i - 1),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Karten-Seite als Verb-Empfänger.
pub struct MapSideApply<'a> {
    /// Sichtzustand des Karten-Fensters
    pub map: &'a mut MapViewState,
    /// Autoritative Route des Marker-Tags (zum Neu-Lesen)
    pub route: Option<&'a NavPointList>,
}

impl MapSideApply<'_> {
    fn owns(&mut self, verb: &MirrorVerb) -> bool {
        let owned = verb.marker.kind == MarkerKind::Navpoint
            && self.route.is_some_and(|r| r.tag == verb.marker.tag);

        if !owned {
            self.map.selected = None;
            log::debug!(
                "{:?} mit fremdem Marker ({:?}/{}) — Karten-Selektion aufgehoben",
                verb.kind,
                verb.marker.kind,
                verb.marker.tag
            );
        }
        owned
    }
}

impl VerbHandler for MapSideApply<'_> {
    fn apply(&mut self, verb: &MirrorVerb, reply: &mut VerbSink) {
        let index = verb.marker.index;

        match verb.kind {
            VerbKind::Selected | VerbKind::Opened => {
                if !self.owns(verb) {
                    return;
                }
                if index == 0 || index > self.map.elements.len() {
                    log::debug!("{:?} auf Index {} außerhalb der Karte", verb.kind, index);
                    return;
                }

                self.map.selected = Some(index);
                if verb.kind == VerbKind::Opened && self.map.detail_index.is_some() {
                    self.map.detail_index = Some(index);
                }
            }

            VerbKind::Moved => {
                if !self.owns(verb) {
                    return;
                }
                // Position aus dem autoritativen Punkt lesen, die
                // Verb-Koordinate ist nur Anzeige-Hilfe.
                let Some(point) = self.route.and_then(|r| r.get(index)) else {
                    log::debug!("Moved auf Index {} außerhalb der Route", index);
                    return;
                };
                self.map.refresh_element(index, point.coord);
            }

            VerbKind::Added => {
                if !self.owns(verb) {
                    return;
                }
                let Some(point) = self.route.and_then(|r| r.get(index)) else {
                    log::debug!("Added auf Index {} außerhalb der Route", index);
                    return;
                };

                self.map
                    .insert_element(index, verb.marker.clone(), point.coord);
                self.map.selected = Some(index);

                // Der Ersteller bekommt Selected zurück, kein Added-Echo.
                reply.emit(MirrorVerb::selected(verb.marker.clone()));
            }

            VerbKind::Deleted => {
                if !self.map.remove_element(index) {
                    log::debug!("Deleted auf Index {} außerhalb der Karte", index);
                }
            }
        }
    }
}

/// Stellt alle wartenden Verbs an beide Seiten zu.
///
/// Läuft einmal pro Frame nach der Intent-Verarbeitung auf dem
/// UI-Kontext. Der Link wird für die Dauer des Pumps aus dem State
/// genommen, damit die Handler disjunkte Teilzustände borgen können.
pub fn pump_mirror(state: &mut AppState) {
    if state.mirror.pending(MirrorSide::List) == 0 && state.mirror.pending(MirrorSide::Map) == 0 {
        return;
    }

    let mut link = std::mem::take(&mut state.mirror);
    {
        let AppState {
            profile,
            list_ui,
            map,
            ..
        } = state;

        link.pump_with(|side, verb, sink| match side {
            MirrorSide::List => {
                let mut handler = ListSideApply {
                    profile: &*profile,
                    list_ui: &mut *list_ui,
                };
                handler.apply(verb, sink);
            }
            MirrorSide::Map => {
                if let Some(map_state) = map.as_mut() {
                    let mut handler = MapSideApply {
                        map: map_state,
                        route: profile.route(&verb.marker.tag),
                    };
                    handler.apply(verb, sink);
                }
            }
        });
    }
    state.mirror = link;
}
