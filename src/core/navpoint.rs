//! Navigationspunkte und Routen-Listen mit fortlaufender Nummerierung.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Ein Navigationspunkt (Steerpoint/Waypoint) einer Route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Fortlaufende Nummer im Cockpit (wird beim Renumbering vergeben)
    pub number: u32,
    /// Anzeigename
    pub name: String,
    /// Position
    pub coord: Coordinate,
    /// Höhe in Fuß (None = nicht gesetzt, wird beim Upload übersprungen)
    pub elevation_ft: Option<i32>,
}

impl NavPoint {
    /// Erstellt einen neuen Navigationspunkt. Die Nummer vergibt die Liste.
    pub fn new(name: impl Into<String>, coord: Coordinate) -> Self {
        Self {
            number: 0,
            name: name.into(),
            coord,
            elevation_ft: None,
        }
    }

    /// Setzt die Höhe in Fuß.
    pub fn with_elevation(mut self, elevation_ft: i32) -> Self {
        self.elevation_ft = Some(elevation_ft);
        self
    }
}

/// Geordnete Punktliste einer Route. Eine Liste pro Routen-Tag.
///
/// Die Liste ist die autoritative Quelle der Punktdaten; Karte und Dialoge
/// referenzieren Punkte nur über 1-basierte Indizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPointList {
    /// Routen-Tag (Korrelations-Schlüssel für das Verb-Mirroring)
    pub tag: String,
    /// Startnummer für das Renumbering
    pub start_number: u32,
    points: Vec<NavPoint>,
}

impl NavPointList {
    /// Erstellt eine leere Routen-Liste.
    pub fn new(tag: impl Into<String>, start_number: u32) -> Self {
        Self {
            tag: tag.into(),
            start_number,
            points: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Route keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    /// Punkt am 1-basierten Index.
    pub fn get(&self, index: usize) -> Option<&NavPoint> {
        index.checked_sub(1).and_then(|i| self.points.get(i))
    }

    /// Mutabler Punkt am 1-basierten Index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut NavPoint> {
        index.checked_sub(1).and_then(|i| self.points.get_mut(i))
    }

    /// Gibt `true` zurück, wenn der 1-basierte Index existiert.
    pub fn contains_index(&self, index: usize) -> bool {
        index >= 1 && index <= self.points.len()
    }

    /// Hängt einen Punkt ans Ende an und vergibt die Nummern neu.
    /// Gibt den 1-basierten Index des neuen Punkts zurück.
    pub fn push(&mut self, point: NavPoint) -> usize {
        self.points.push(point);
        self.renumber();
        self.points.len()
    }

    /// Fügt einen Punkt am 1-basierten Index ein (Index > len hängt an).
    pub fn insert(&mut self, index: usize, point: NavPoint) -> usize {
        let slot = index.saturating_sub(1).min(self.points.len());
        self.points.insert(slot, point);
        self.renumber();
        slot + 1
    }

    /// Entfernt den Punkt am 1-basierten Index und vergibt die Nummern neu.
    pub fn remove(&mut self, index: usize) -> Option<NavPoint> {
        if !self.contains_index(index) {
            return None;
        }

        let removed = self.points.remove(index - 1);
        self.renumber();
        Some(removed)
    }

    /// Verschiebt einen Punkt von `from` nach `to` (beide 1-basiert).
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.contains_index(from) || !self.contains_index(to) || from == to {
            return false;
        }

        let point = self.points.remove(from - 1);
        self.points.insert(to - 1, point);
        self.renumber();
        true
    }

    /// Vergibt alle Punktnummern als lückenlose aufsteigende Folge
    /// beginnend bei `start_number`.
    pub fn renumber(&mut self) {
        for (i, point) in self.points.iter_mut().enumerate() {
            point.number = self.start_number + i as u32;
        }
    }

    /// Ändert die Startnummer und nummeriert sofort neu.
    pub fn set_start_number(&mut self, start_number: u32) {
        self.start_number = start_number;
        self.renumber();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str) -> NavPoint {
        NavPoint::new(name, Coordinate::new(41.0, 41.0))
    }

    fn numbers(list: &NavPointList) -> Vec<u32> {
        list.points().iter().map(|p| p.number).collect()
    }

    #[test]
    fn renumber_is_contiguous_after_mixed_edits() {
        let mut list = NavPointList::new("Primary", 1);
        list.push(point("A"));
        list.push(point("B"));
        list.push(point("C"));
        list.push(point("D"));

        list.remove(2);
        list.reorder(3, 1);
        list.insert(2, point("E"));

        assert_eq!(numbers(&list), vec![1, 2, 3, 4]);
        let names: Vec<&str> = list.points().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["D", "E", "A", "C"]);
    }

    #[test]
    fn renumber_honors_start_number() {
        let mut list = NavPointList::new("Alternate", 80);
        list.push(point("A"));
        list.push(point("B"));

        assert_eq!(numbers(&list), vec![80, 81]);

        list.set_start_number(5);
        assert_eq!(numbers(&list), vec![5, 6]);
    }

    #[test]
    fn one_based_access() {
        let mut list = NavPointList::new("Primary", 1);
        list.push(point("A"));

        assert!(list.get(0).is_none());
        assert_eq!(list.get(1).map(|p| p.name.as_str()), Some("A"));
        assert!(!list.contains_index(2));
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut list = NavPointList::new("Primary", 1);
        list.push(point("A"));

        assert!(list.remove(5).is_none());
        assert_eq!(list.len(), 1);
    }
}
