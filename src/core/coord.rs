//! Geografische Koordinate mit Parsing für Grad/Dezimalminuten-Eingabe.

use serde::{Deserialize, Serialize};

/// Skalierung für die Scratchpad-Eingabe im Cockpit (1e-4 Grad pro Schritt).
pub const COORD_SCALE: f64 = 10_000.0;

/// Geografische Koordinate in Dezimalgrad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Breite in Grad, Nord positiv
    pub lat: f64,
    /// Länge in Grad, Ost positiv
    pub lon: f64,
}

impl Coordinate {
    /// Erstellt eine neue Koordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Breite als skalierter Integer für die Scratchpad-Eingabe.
    pub fn lat_scaled(&self) -> i32 {
        (self.lat * COORD_SCALE).round() as i32
    }

    /// Länge als skalierter Integer für die Scratchpad-Eingabe.
    pub fn lon_scaled(&self) -> i32 {
        (self.lon * COORD_SCALE).round() as i32
    }

    /// Gibt `true` zurück, wenn die Koordinate im gültigen WGS84-Bereich liegt.
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// Formatiert als Grad + Dezimalminuten, z.B. `N 41°38.456' E 041°35.945'`.
    pub fn format_ddm(&self) -> String {
        format!(
            "{} {}",
            format_axis(self.lat, 'N', 'S', 2),
            format_axis(self.lon, 'E', 'W', 3)
        )
    }

    /// Parst eine Koordinaten-Eingabe.
    ///
    /// Akzeptiert Grad + Dezimalminuten (`N 41°38.456' E 041°35.945'`, Grad-
    /// und Minutenzeichen optional) sowie Dezimalgrad (`41.641, 41.599`).
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(coord) = parse_ddm(trimmed) {
            return Some(coord);
        }

        parse_decimal(trimmed)
    }
}

/// Formatiert eine Achse als Hemisphäre + Grad + Dezimalminuten.
fn format_axis(value: f64, positive: char, negative: char, deg_width: usize) -> String {
    let hemisphere = if value.is_sign_negative() {
        negative
    } else {
        positive
    };
    let abs = value.abs();
    let degrees = abs.trunc() as u32;
    let minutes = (abs - degrees as f64) * 60.0;

    format!("{hemisphere} {degrees:0deg_width$}°{minutes:06.3}'")
}

fn parse_ddm(input: &str) -> Option<Coordinate> {
    // Hemisphäre, Grad, Dezimalminuten — zweimal (Breite, dann Länge)
    let pattern = regex::Regex::new(
        r"(?i)^([NS])\s*(\d{1,2})\s*[°\s]\s*(\d{1,2}(?:\.\d+)?)'?\s+([EW])\s*(\d{1,3})\s*[°\s]\s*(\d{1,2}(?:\.\d+)?)'?$",
    )
    .ok()?;
    let caps = pattern.captures(input)?;

    let lat = axis_from_ddm(&caps[2], &caps[3], caps[1].eq_ignore_ascii_case("S"))?;
    let lon = axis_from_ddm(&caps[5], &caps[6], caps[4].eq_ignore_ascii_case("W"))?;

    let coord = Coordinate::new(lat, lon);
    coord.is_valid().then_some(coord)
}

fn axis_from_ddm(degrees: &str, minutes: &str, negative: bool) -> Option<f64> {
    let degrees: f64 = degrees.parse().ok()?;
    let minutes: f64 = minutes.parse().ok()?;
    if minutes >= 60.0 {
        return None;
    }

    let value = degrees + minutes / 60.0;
    Some(if negative { -value } else { value })
}

fn parse_decimal(input: &str) -> Option<Coordinate> {
    let mut parts = input.split([',', ' ']).filter(|p| !p.is_empty());
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let coord = Coordinate::new(lat, lon);
    coord.is_valid().then_some(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_ddm_roundtrip() {
        let coord = Coordinate::new(41.6103, 41.5997);
        let formatted = coord.format_ddm();
        let parsed = Coordinate::parse(&formatted).expect("DDM sollte parsbar sein");

        assert_relative_eq!(parsed.lat, coord.lat, epsilon = 1e-5);
        assert_relative_eq!(parsed.lon, coord.lon, epsilon = 1e-5);
    }

    #[test]
    fn parse_decimal_pair() {
        let parsed = Coordinate::parse("10.5, 20.5").expect("Dezimalgrad sollte parsbar sein");

        assert_relative_eq!(parsed.lat, 10.5);
        assert_relative_eq!(parsed.lon, 20.5);
    }

    #[test]
    fn parse_southern_western_hemisphere() {
        let parsed = Coordinate::parse("S 33°25.000' W 070°40.000'").expect("parsbar");

        assert!(parsed.lat < 0.0);
        assert!(parsed.lon < 0.0);
        assert_relative_eq!(parsed.lat, -(33.0 + 25.0 / 60.0), epsilon = 1e-9);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(Coordinate::parse("N 99°00.000' E 041°00.000'").is_none());
        assert!(Coordinate::parse("200.0, 10.0").is_none());
        assert!(Coordinate::parse("").is_none());
    }

    #[test]
    fn scaled_values_round() {
        let coord = Coordinate::new(10.00004, -20.00006);

        assert_eq!(coord.lat_scaled(), 100_000);
        assert_eq!(coord.lon_scaled(), -200_001);
    }
}
