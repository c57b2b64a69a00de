//! Marker: Korrelations-Schlüssel zwischen Listen-Editor und Karte.

use crate::core::Coordinate;

/// Art des referenzierten Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerKind {
    /// Navigationspunkt einer Route
    #[default]
    Navpoint,
    /// Fester Point-of-Interest (Flugplätze etc.)
    PoiCore,
    /// Benutzerdefinierter Point-of-Interest
    PoiUser,
    /// Kampagnen-Point-of-Interest
    PoiCampaign,
    /// Nicht zuordenbar
    Unknown,
}

/// Handle auf einen Punkt, das beide Seiten des Mirror-Protokolls teilen.
///
/// Marker besitzen keine Daten: sie identifizieren den autoritativen Punkt
/// über Routen-Tag und 1-basierten Index. Die Koordinate ist nur für die
/// Darstellung der Gegenseite gedacht, nie eine zweite Datenquelle.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    /// Art des Punkts
    pub kind: MarkerKind,
    /// Routen-/Gruppen-Tag
    pub tag: String,
    /// 1-basierter Index innerhalb des Tags
    pub index: usize,
    /// Anzeigeposition (optional)
    pub coord: Option<Coordinate>,
}

impl PointMarker {
    /// Erstellt einen Marker ohne Koordinate.
    pub fn new(kind: MarkerKind, tag: impl Into<String>, index: usize) -> Self {
        Self {
            kind,
            tag: tag.into(),
            index,
            coord: None,
        }
    }

    /// Erstellt einen Navigationspunkt-Marker mit Anzeigekoordinate.
    pub fn navpoint(tag: impl Into<String>, index: usize, coord: Coordinate) -> Self {
        Self {
            kind: MarkerKind::Navpoint,
            tag: tag.into(),
            index,
            coord: Some(coord),
        }
    }

    /// Hängt eine Anzeigekoordinate an.
    pub fn with_coord(mut self, coord: Coordinate) -> Self {
        self.coord = Some(coord);
        self
    }
}
