//! Zustand des Karten-Fensters (Karten-Seite des Mirror-Protokolls).

use glam::Vec2;

use crate::core::{pois_for, Coordinate, NavPointList, PickIndex, PointOfInterest};
use crate::mirror::PointMarker;
use crate::shared::options::{MAP_ZOOM_DEFAULT, MAP_ZOOM_MAX, MAP_ZOOM_MIN};

/// Ein sichtbares Karten-Element für einen Routen-Punkt.
#[derive(Debug, Clone)]
pub struct MapElement {
    /// Korrelations-Marker (Tag + 1-basierter Index)
    pub marker: PointMarker,
    /// Weltposition als (Länge, Breite) in Grad
    pub world: Vec2,
}

/// Sichtzustand des Karten-Fensters. Existiert erst, wenn der Benutzer
/// das Fenster öffnet; die Punktdaten bleiben autoritativ in der Route.
#[derive(Debug, Clone)]
pub struct MapViewState {
    /// Kartenmitte als (Länge, Breite) in Grad
    pub center: Vec2,
    /// Zoom in Pixeln pro Grad Breite
    pub zoom: f32,
    /// Sichtbare Routen-Punkte in Listenreihenfolge
    pub elements: Vec<MapElement>,
    /// POI-Overlay (reine Anzeige)
    pub pois: Vec<PointOfInterest>,
    /// Selektierter Punkt (1-basiert)
    pub selected: Option<usize>,
    /// Fokus-Panel der Karte (Detail-Ansicht, 1-basiert)
    pub detail_index: Option<usize>,
    /// Laufender Drag (1-basiert)
    pub dragging: Option<usize>,
}

impl MapViewState {
    /// Erstellt die Karten-Sicht mit den POIs des Schauplatzes.
    pub fn new(theater: &str) -> Self {
        Self {
            center: Vec2::new(41.8, 42.0),
            zoom: MAP_ZOOM_DEFAULT,
            elements: Vec::new(),
            pois: pois_for(theater),
            selected: None,
            detail_index: None,
            dragging: None,
        }
    }

    /// Weltposition einer Koordinate: (Länge, Breite).
    pub fn world_of(coord: Coordinate) -> Vec2 {
        Vec2::new(coord.lon as f32, coord.lat as f32)
    }

    /// Baut alle Elemente aus der autoritativen Route neu auf und
    /// zentriert die Karte auf deren Schwerpunkt.
    pub fn rebuild_from_route(&mut self, route: &NavPointList) {
        self.elements = route
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| MapElement {
                marker: PointMarker::navpoint(route.tag.clone(), i + 1, point.coord),
                world: Self::world_of(point.coord),
            })
            .collect();

        self.selected = None;
        self.detail_index = None;
        self.dragging = None;

        if !self.elements.is_empty() {
            let sum: Vec2 = self.elements.iter().map(|e| e.world).sum();
            self.center = sum / self.elements.len() as f32;
        }
    }

    /// Fügt ein Element am 1-basierten Index ein und schiebt die Marker
    /// der nachfolgenden Elemente eine Position weiter.
    pub fn insert_element(&mut self, index: usize, marker: PointMarker, coord: Coordinate) {
        let slot = index.saturating_sub(1).min(self.elements.len());
        self.elements.insert(
            slot,
            MapElement {
                marker,
                world: Self::world_of(coord),
            },
        );
        self.reindex();
    }

    /// Entfernt das Element am 1-basierten Index.
    pub fn remove_element(&mut self, index: usize) -> bool {
        if index == 0 || index > self.elements.len() {
            return false;
        }

        self.elements.remove(index - 1);
        self.reindex();

        if self.selected == Some(index) {
            self.selected = None;
        } else if let Some(sel) = self.selected {
            if sel > index {
                self.selected = Some(sel - 1);
            }
        }

        // Die Detail-Ansicht darf der Empfang von Deleted schliessen:
        // der referenzierte Punkt existiert nicht mehr.
        if self.detail_index == Some(index) {
            self.detail_index = None;
        } else if let Some(detail) = self.detail_index {
            if detail > index {
                self.detail_index = Some(detail - 1);
            }
        }

        true
    }

    /// Aktualisiert die Anzeigeposition eines Elements aus der
    /// autoritativen Koordinate.
    pub fn refresh_element(&mut self, index: usize, coord: Coordinate) -> bool {
        let Some(element) = index.checked_sub(1).and_then(|i| self.elements.get_mut(i)) else {
            return false;
        };

        element.world = Self::world_of(coord);
        element.marker.coord = Some(coord);
        true
    }

    /// Verschiebt die Kartenmitte um ein Welt-Delta in Grad.
    pub fn pan(&mut self, delta_world: Vec2) {
        self.center += delta_world;
        self.center.y = self.center.y.clamp(-89.0, 89.0);
    }

    /// Zoomt um den Faktor (geklemmt).
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MAP_ZOOM_MIN, MAP_ZOOM_MAX);
    }

    /// Projiziert eine Weltposition in Viewport-Pixel (Ursprung Mitte).
    pub fn world_to_screen(&self, world: Vec2, viewport: Vec2) -> Vec2 {
        let lat_scale = self.center.y.to_radians().cos().max(0.2);
        let dx = (world.x - self.center.x) * self.zoom * lat_scale;
        let dy = (self.center.y - world.y) * self.zoom;

        viewport * 0.5 + Vec2::new(dx, dy)
    }

    /// Umkehrung von [`world_to_screen`](Self::world_to_screen).
    pub fn screen_to_world(&self, screen: Vec2, viewport: Vec2) -> Vec2 {
        let lat_scale = self.center.y.to_radians().cos().max(0.2);
        let offset = screen - viewport * 0.5;

        Vec2::new(
            self.center.x + offset.x / (self.zoom * lat_scale),
            self.center.y - offset.y / self.zoom,
        )
    }

    /// Baut den Pick-Index über den aktuellen Screenpositionen.
    pub fn pick_index(&self, viewport: Vec2) -> PickIndex {
        let entries: Vec<(usize, Vec2)> = self
            .elements
            .iter()
            .map(|e| (e.marker.index, self.world_to_screen(e.world, viewport)))
            .collect();

        PickIndex::from_positions(&entries)
    }

    fn reindex(&mut self) {
        for (i, element) in self.elements.iter_mut().enumerate() {
            element.marker.index = i + 1;
        }
    }
}
