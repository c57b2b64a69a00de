//! Point-of-Interest-Datenbank für das Karten-Overlay.
//!
//! Reine Anzeige-Daten: POIs steuern nie das Mirror-Protokoll.

use crate::mirror::MarkerKind;

use super::Coordinate;

/// Ein fester Kartenpunkt (Flugplatz, Referenzpunkt).
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    /// Anzeigename
    pub name: String,
    /// Marker-Art (Core/User/Campaign)
    pub kind: MarkerKind,
    /// Position
    pub coord: Coordinate,
}

impl PointOfInterest {
    fn core(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: MarkerKind::PoiCore,
            coord: Coordinate::new(lat, lon),
        }
    }
}

/// Liefert die Core-POIs eines Schauplatzes. Unbekannte Schauplätze
/// ergeben eine leere Liste.
pub fn pois_for(theater: &str) -> Vec<PointOfInterest> {
    match theater {
        "Caucasus" => vec![
            PointOfInterest::core("Batumi", 41.6103, 41.5997),
            PointOfInterest::core("Kobuleti", 41.9300, 41.8667),
            PointOfInterest::core("Senaki-Kolkhi", 42.2400, 42.0470),
            PointOfInterest::core("Kutaisi", 42.1767, 42.4826),
            PointOfInterest::core("Sukhumi-Babushara", 42.8580, 41.1280),
            PointOfInterest::core("Tbilisi-Lochini", 41.6692, 44.9547),
        ],
        "Persian Gulf" => vec![
            PointOfInterest::core("Al Dhafra", 24.2467, 54.5477),
            PointOfInterest::core("Khasab", 26.1706, 56.2406),
            PointOfInterest::core("Bandar Abbas", 27.2183, 56.3778),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caucasus_has_core_pois() {
        let pois = pois_for("Caucasus");

        assert!(!pois.is_empty());
        assert!(pois.iter().all(|p| p.kind == MarkerKind::PoiCore));
        assert!(pois.iter().any(|p| p.name == "Batumi"));
    }

    #[test]
    fn unknown_theater_is_empty() {
        assert!(pois_for("Nevada?").is_empty());
    }
}
