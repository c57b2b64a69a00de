//! Spatial-Index (KD-Tree) für das Marker-Picking im Karten-Fenster.

use std::collections::HashMap;

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Pick-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMatch {
    /// Element-Id des Treffers (Aufrufer-definiert)
    pub id: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Index über den projizierten Element-Positionen eines Frames.
#[derive(Debug, Clone)]
pub struct PickIndex {
    tree: KdTree<f64, 2>,
    ids: Vec<usize>,
    positions: HashMap<usize, Vec2>,
}

impl PickIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            ids: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Baut einen Index aus `(Id, Position)`-Paaren.
    pub fn from_positions(entries: &[(usize, Vec2)]) -> Self {
        let points: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&points).into();

        Self {
            tree,
            ids: entries.iter().map(|(id, _)| *id).collect(),
            positions: entries.iter().copied().collect(),
        }
    }

    /// Gibt die Anzahl indexierter Elemente zurück.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn der Index leer ist.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Findet das nächste Element zur Abfrage-Position.
    pub fn nearest(&self, query: Vec2) -> Option<PickMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let id = *self.ids.get(result.item as usize)?;

        Some(PickMatch {
            id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet das nächste Element innerhalb des Radius, sonst `None`.
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<PickMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }

    /// Position eines indexierten Elements.
    pub fn position(&self, id: usize) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> PickIndex {
        PickIndex::from_positions(&[
            (1, Vec2::new(0.0, 0.0)),
            (2, Vec2::new(10.0, 0.0)),
            (3, Vec2::new(4.0, 3.0)),
        ])
    }

    #[test]
    fn nearest_returns_expected_element() {
        let index = sample_index();
        let hit = index.nearest(Vec2::new(3.9, 2.9)).expect("Treffer erwartet");

        assert_eq!(hit.id, 3);
        assert!(hit.distance < 0.2);
    }

    #[test]
    fn nearest_within_respects_radius() {
        let index = sample_index();

        assert!(index.nearest_within(Vec2::new(20.0, 0.0), 5.0).is_none());
        assert_eq!(
            index.nearest_within(Vec2::new(10.5, 0.0), 5.0).map(|m| m.id),
            Some(2)
        );
    }

    #[test]
    fn empty_index_has_no_matches() {
        let index = PickIndex::empty();

        assert!(index.is_empty());
        assert!(index.nearest(Vec2::ZERO).is_none());
    }
}
